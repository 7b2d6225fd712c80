use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a session is in the answer/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Waiting for the candidate to answer the current question
    AwaitingAnswer,
    /// An answer is pending; feedback is generated and then acknowledged
    AwaitingFeedbackAck,
}

/// One completed question/answer/feedback triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub question: String,
    pub answer: String,
    pub feedback: String,

    /// When the feedback was recorded
    pub created_at: DateTime<Utc>,
}

/// Per-session interview state
///
/// Mutated only through the sequencer (`QuestionSet::advance`) and the
/// coordinator operations in `session.rs`. Fields are read through
/// accessors so the cursor/history invariants cannot be broken from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub(super) session_id: String,
    pub(super) started_at: DateTime<Utc>,
    pub(super) cursor: usize,
    pub(super) mode: Mode,
    pub(super) last_answer: Option<String>,
    pub(super) history: Vec<FeedbackRecord>,
}

impl SessionState {
    /// Fresh session: first question, waiting for an answer
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            started_at: Utc::now(),
            cursor: 0,
            mode: Mode::AwaitingAnswer,
            last_answer: None,
            history: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Index of the current question
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Answer awaiting feedback, if any
    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }

    pub fn history(&self) -> &[FeedbackRecord] {
        &self.history
    }

    /// Whether the current question already has its feedback record
    pub fn has_feedback_for_current(&self) -> bool {
        self.history.len() > self.cursor
    }
}
