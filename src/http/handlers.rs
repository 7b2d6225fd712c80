use super::state::AppState;
use crate::error::InterviewError;
use crate::interview::{self, CurrentQuestion, FeedbackRecord, SessionState, SessionStatus};
use crate::speech::{decode_pcm_base64, encode_wav};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub question: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Missing is treated like blank and rejected as invalid input
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAudioRequest {
    /// Base64-encoded 16-bit little-endian PCM
    #[serde(default)]
    pub pcm: String,

    /// Sample rate in Hz (default: 16000)
    pub sample_rate: Option<u32>,

    /// Number of interleaved channels (default: 1)
    pub channels: Option<u16>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAudioResponse {
    pub transcript: String,
    pub status: SessionStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionFeedbackResponse {
    pub question: String,
    pub answer: String,
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub session_id: String,
    pub status: SessionStatus,
    pub history: Vec<FeedbackRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub user_input: String,
    pub context: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackQuery {
    pub context: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl InterviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            InterviewError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            InterviewError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            InterviewError::OutOfRange
            | InterviewError::InvalidState { .. }
            | InterviewError::FeedbackPending => StatusCode::CONFLICT,
            InterviewError::FeedbackUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            InterviewError::TranscriptionFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for InterviewError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
                kind: self.kind().to_string(),
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<Json<T>, InterviewError>;

// ============================================================================
// Session Handlers
// ============================================================================

/// POST /sessions
/// Start a new interview session
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = format!("interview-{}", uuid::Uuid::new_v4());
    let session = SessionState::new(session_id.clone());
    let current = state.questions.current(&session);

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), Arc::new(Mutex::new(session)));
    }

    info!("Started interview session: {}", session_id);

    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            question: current.question,
            completed: current.completed,
        }),
    )
}

/// GET /sessions/:session_id
/// Get status of an interview session
pub async fn get_session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<SessionStatus> {
    let session = state.session(&session_id).await?;
    let session = session.lock().await;
    Ok(Json(SessionStatus::of(&session, &state.questions)))
}

/// GET /sessions/:session_id/next_question
/// Current question for the session; does not advance
pub async fn next_question(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<CurrentQuestion> {
    let session = state.session(&session_id).await?;
    let session = session.lock().await;
    Ok(Json(state.questions.current(&session)))
}

async fn apply_answer(
    state: &AppState,
    session_id: &str,
    answer: &str,
) -> Result<SessionStatus, InterviewError> {
    let session = state.session(session_id).await?;
    let mut session = session.lock().await;

    if let Err(e) = session.submit_answer(&state.questions, answer) {
        warn!("Rejected answer for session {}: {}", session_id, e);
        return Err(e);
    }

    info!(
        "Answer submitted for session {} question {}",
        session_id,
        session.cursor()
    );

    Ok(SessionStatus::of(&session, &state.questions))
}

/// POST /sessions/:session_id/answer
/// Submit a typed answer for the current question
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> ApiResult<SessionStatus> {
    apply_answer(&state, &session_id, &req.answer).await.map(Json)
}

/// POST /sessions/:session_id/answer/audio
/// Transcribe a spoken answer and submit it for the current question
pub async fn submit_audio_answer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAudioRequest>,
) -> ApiResult<SubmitAudioResponse> {
    // Fail fast on unknown sessions before transcribing
    state.session(&session_id).await?;

    let samples = decode_pcm_base64(&req.pcm)?;
    if samples.is_empty() {
        return Err(InterviewError::InvalidInput("no audio received".to_string()));
    }

    let wav = encode_wav(
        &samples,
        req.sample_rate.unwrap_or(16000),
        req.channels.unwrap_or(1),
    )?;

    let transcript = match state.transcriber.transcribe(&wav).await {
        Ok(text) => text,
        Err(e) => {
            error!(
                "Transcriber {} failed for session {}: {}",
                state.transcriber.name(),
                session_id,
                e
            );
            return Err(e);
        }
    };

    let status = apply_answer(&state, &session_id, &transcript).await?;

    Ok(Json(SubmitAudioResponse { transcript, status }))
}

/// POST /sessions/:session_id/feedback
/// Generate feedback for the pending answer and record it
pub async fn generate_session_feedback(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<SessionFeedbackResponse> {
    let session = state.session(&session_id).await?;
    let record = interview::request_feedback(&session, &state.questions, &state.generator).await?;

    Ok(Json(SessionFeedbackResponse {
        question: record.question,
        answer: record.answer,
        feedback: record.feedback,
    }))
}

/// POST /sessions/:session_id/next
/// Acknowledge feedback and move on to the next question
pub async fn acknowledge_feedback(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<CurrentQuestion> {
    let session = state.session(&session_id).await?;
    let mut session = session.lock().await;

    match session.acknowledge(&state.questions) {
        Ok(cursor) => {
            info!("Session {} advanced to question {}", session_id, cursor);
            Ok(Json(state.questions.current(&session)))
        }
        Err(e) => {
            warn!("Cannot advance session {}: {}", session_id, e);
            Err(e)
        }
    }
}

/// GET /sessions/:session_id/history
/// Completed question/answer/feedback records
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Vec<FeedbackRecord>> {
    let session = state.session(&session_id).await?;
    let session = session.lock().await;
    Ok(Json(session.history().to_vec()))
}

/// DELETE /sessions/:session_id
/// End an interview session and return its final history
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<EndSessionResponse> {
    info!("Ending interview session: {}", session_id);

    // Find and remove session
    let session = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id)
    };

    let session = match session {
        Some(session) => session,
        None => {
            warn!("Session {} not found", session_id);
            return Err(InterviewError::SessionNotFound(session_id));
        }
    };

    let session = session.lock().await;
    info!(
        "Session {} ended after {} answered questions",
        session_id,
        session.history().len()
    );

    Ok(Json(EndSessionResponse {
        session_id: session_id.clone(),
        status: SessionStatus::of(&session, &state.questions),
        history: session.history().to_vec(),
    }))
}

// ============================================================================
// Stateless Handlers
// ============================================================================

/// POST /generate_feedback
/// Feedback for an arbitrary answer; context may come in the body or query
pub async fn generate_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
    Json(req): Json<FeedbackRequest>,
) -> ApiResult<FeedbackResponse> {
    let context = req.context.or(query.context).unwrap_or_default();
    let feedback = state.generator.generate(&req.user_input, &context).await?;
    Ok(Json(FeedbackResponse { feedback }))
}

/// GET /question/:index
/// Question by position in the question set
pub async fn get_question(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    match state.questions.get(index) {
        Ok(question) => (
            StatusCode::OK,
            Json(QuestionResponse {
                question: question.to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Index out of range".to_string(),
                kind: e.kind().to_string(),
            }),
        )
            .into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
