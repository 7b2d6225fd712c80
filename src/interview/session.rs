//! Session coordinator: the two-phase answer → feedback → acknowledge cycle

use super::questions::QuestionSet;
use super::state::{FeedbackRecord, Mode, SessionState};
use crate::error::{InterviewError, InterviewResult};
use crate::feedback::FeedbackGenerator;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Question/answer pair waiting for feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub cursor: usize,
    pub question: String,
    pub answer: String,
}

impl SessionState {
    fn expect_mode(&self, expected: Mode) -> InterviewResult<()> {
        if self.mode != expected {
            return Err(InterviewError::InvalidState {
                expected,
                actual: self.mode,
            });
        }
        Ok(())
    }

    /// Record the candidate's answer for the current question
    ///
    /// Blank answers are rejected before anything changes.
    pub fn submit_answer(&mut self, questions: &QuestionSet, answer: &str) -> InterviewResult<()> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(InterviewError::InvalidInput(
                "answer must not be empty".to_string(),
            ));
        }

        self.expect_mode(Mode::AwaitingAnswer)?;

        if questions.is_completed(self) {
            return Err(InterviewError::OutOfRange);
        }

        self.last_answer = Some(answer.to_string());
        self.mode = Mode::AwaitingFeedbackAck;

        Ok(())
    }

    /// The question and answer the feedback generator should evaluate
    pub fn pending_exchange(&self, questions: &QuestionSet) -> InterviewResult<PendingExchange> {
        self.expect_mode(Mode::AwaitingFeedbackAck)?;

        let question = questions.get(self.cursor)?;
        let answer = self
            .last_answer
            .clone()
            .ok_or_else(|| InterviewError::InvalidInput("no answer submitted".to_string()))?;

        Ok(PendingExchange {
            cursor: self.cursor,
            question: question.to_string(),
            answer,
        })
    }

    /// Append the feedback for `exchange` to the history
    ///
    /// At most one record is kept per question: if the current question
    /// already has feedback, the existing record is returned untouched.
    pub fn record_feedback(
        &mut self,
        exchange: &PendingExchange,
        feedback: String,
    ) -> InterviewResult<FeedbackRecord> {
        self.expect_mode(Mode::AwaitingFeedbackAck)?;

        if exchange.cursor != self.cursor || self.last_answer.as_deref() != Some(exchange.answer.as_str()) {
            return Err(InterviewError::InvalidInput(
                "feedback does not match the pending answer".to_string(),
            ));
        }

        if let Some(existing) = self.history.get(self.cursor) {
            return Ok(existing.clone());
        }

        let record = FeedbackRecord {
            question: exchange.question.clone(),
            answer: exchange.answer.clone(),
            feedback,
            created_at: Utc::now(),
        };
        self.history.push(record.clone());

        Ok(record)
    }

    /// "Next question": advance past a question whose feedback is recorded
    pub fn acknowledge(&mut self, questions: &QuestionSet) -> InterviewResult<usize> {
        if questions.is_completed(self) {
            return Err(InterviewError::OutOfRange);
        }
        self.expect_mode(Mode::AwaitingFeedbackAck)?;

        if !self.has_feedback_for_current() {
            return Err(InterviewError::FeedbackPending);
        }

        let cursor = questions.advance(self)?;
        self.last_answer = None;
        self.mode = Mode::AwaitingAnswer;

        Ok(cursor)
    }
}

/// Generate and record feedback for a session's pending answer
///
/// The session lock is released while the completion service is called and
/// re-taken only to record a successful result. On failure the session is
/// left exactly as it was, so the call can simply be retried.
pub async fn request_feedback(
    session: &Mutex<SessionState>,
    questions: &QuestionSet,
    generator: &FeedbackGenerator,
) -> InterviewResult<FeedbackRecord> {
    let exchange = {
        let state = session.lock().await;
        if let Some(existing) = state.history().get(state.cursor()) {
            return Ok(existing.clone());
        }
        state.pending_exchange(questions)?
    };

    let feedback = match generator.generate(&exchange.answer, &exchange.question).await {
        Ok(feedback) => feedback,
        Err(e) => {
            error!("Feedback for question {} failed: {}", exchange.cursor, e);
            return Err(e);
        }
    };

    let mut state = session.lock().await;
    match state.record_feedback(&exchange, feedback) {
        Ok(record) => {
            info!(
                "Recorded feedback for session {} question {}",
                state.session_id(),
                exchange.cursor
            );
            Ok(record)
        }
        Err(e) => {
            warn!("Discarding feedback for session {}: {}", state.session_id(), e);
            Err(e)
        }
    }
}
