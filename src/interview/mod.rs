//! Interview session management
//!
//! This module provides:
//! - `QuestionSet`: the fixed, ordered questions and the sequencer over them
//! - `SessionState`: one candidate's cursor, mode and feedback history
//! - The coordinator operations that move a session through
//!   answer → feedback → acknowledge

mod questions;
mod session;
mod state;
mod status;

pub use questions::{CurrentQuestion, QuestionSet, DEFAULT_QUESTIONS};
pub use session::{request_feedback, PendingExchange};
pub use state::{FeedbackRecord, Mode, SessionState};
pub use status::SessionStatus;
