//! Error kinds surfaced by the interview core.

use thiserror::Error;

use crate::interview::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterviewError {
    /// The sequencer was queried or advanced past the last question.
    #[error("No question left: the interview is completed")]
    OutOfRange,

    /// The completion service failed, timed out, or returned nothing usable.
    #[error("Feedback unavailable: {0}")]
    FeedbackUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation requires mode {expected:?}, session is in {actual:?}")]
    InvalidState { expected: Mode, actual: Mode },

    /// Acknowledge was called before feedback was recorded for the question.
    #[error("Feedback has not been generated for the current answer")]
    FeedbackPending,

    #[error("Session {0} not found")]
    SessionNotFound(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),
}

impl InterviewError {
    /// Stable machine-readable name, used in HTTP error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            InterviewError::OutOfRange => "OutOfRange",
            InterviewError::FeedbackUnavailable(_) => "FeedbackUnavailable",
            InterviewError::InvalidInput(_) => "InvalidInput",
            InterviewError::InvalidState { .. } => "InvalidState",
            InterviewError::FeedbackPending => "FeedbackPending",
            InterviewError::SessionNotFound(_) => "SessionNotFound",
            InterviewError::TranscriptionFailed(_) => "TranscriptionFailed",
        }
    }
}

pub type InterviewResult<T> = std::result::Result<T, InterviewError>;
