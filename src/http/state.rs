use crate::error::{InterviewError, InterviewResult};
use crate::feedback::FeedbackGenerator;
use crate::interview::{QuestionSet, SessionState};
use crate::speech::{PlaceholderTranscriber, Transcriber};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active interview sessions (session_id → session)
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<SessionState>>>>>,

    /// Questions shared read-only by every session
    pub questions: QuestionSet,

    pub generator: FeedbackGenerator,

    pub transcriber: Arc<dyn Transcriber>,
}

impl AppState {
    pub fn new(questions: QuestionSet, generator: FeedbackGenerator) -> Self {
        Self::with_transcriber(questions, generator, Arc::new(PlaceholderTranscriber))
    }

    pub fn with_transcriber(
        questions: QuestionSet,
        generator: FeedbackGenerator,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            questions,
            generator,
            transcriber,
        }
    }

    /// Look up a session by id
    pub async fn session(&self, session_id: &str) -> InterviewResult<Arc<Mutex<SessionState>>> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| InterviewError::SessionNotFound(session_id.to_string()))
    }
}
