use super::questions::QuestionSet;
use super::state::{Mode, SessionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a session, as reported to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session_id: String,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Index of the current question
    pub cursor: usize,

    /// Number of questions in the interview
    pub total: usize,

    pub mode: Mode,

    /// Whether every question has been answered and acknowledged
    pub completed: bool,

    /// Number of feedback records collected so far
    pub history_len: usize,
}

impl SessionStatus {
    pub fn of(state: &SessionState, questions: &QuestionSet) -> Self {
        Self {
            session_id: state.session_id().to_string(),
            started_at: state.started_at(),
            cursor: state.cursor(),
            total: questions.len(),
            mode: state.mode(),
            completed: questions.is_completed(state),
            history_len: state.history().len(),
        }
    }
}
