pub mod config;
pub mod error;
pub mod feedback;
pub mod http;
pub mod interview;
pub mod speech;

pub use config::Config;
pub use error::{InterviewError, InterviewResult};
pub use feedback::{CompletionBackend, CompletionRequest, FeedbackGenerator, OpenAiBackend};
pub use http::{create_router, AppState};
pub use interview::{
    request_feedback, CurrentQuestion, FeedbackRecord, Mode, QuestionSet, SessionState,
    SessionStatus,
};
pub use speech::{PlaceholderTranscriber, Transcriber};
