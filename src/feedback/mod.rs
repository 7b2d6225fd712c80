//! Feedback generation through an external text-completion service

pub mod backend;
pub mod generator;
pub mod openai;

pub use backend::{ChatMessage, CompletionBackend, CompletionRequest, Role};
pub use generator::{feedback_prompt, FeedbackGenerator, FEEDBACK_PERSONA};
pub use openai::OpenAiBackend;
