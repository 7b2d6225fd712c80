use super::backend::{ChatMessage, CompletionBackend, CompletionRequest};
use super::openai::OpenAiBackend;
use crate::config::LlmConfig;
use crate::error::{InterviewError, InterviewResult};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// System persona sent with every feedback request
pub const FEEDBACK_PERSONA: &str =
    "You are a helpful assistant providing feedback for interview answers.";

/// Build the user turn embedding the literal answer and its question
pub fn feedback_prompt(answer: &str, context: &str) -> String {
    format!(
        "You are an interview assistant. The user answered: '{}'. Provide feedback based on this answer. Context: {}",
        answer, context
    )
}

/// Produces feedback for an answer by delegating to a completion backend
#[derive(Clone)]
pub struct FeedbackGenerator {
    backend: Arc<dyn CompletionBackend>,
    timeout: Duration,
}

impl FeedbackGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Generator backed by the configured OpenAI-compatible service
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let backend = OpenAiBackend::new(config)?;
        Ok(Self::new(
            Arc::new(backend),
            Duration::from_secs(config.timeout_secs),
        ))
    }

    pub fn request_for(answer: &str, context: &str) -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system(FEEDBACK_PERSONA),
                ChatMessage::user(feedback_prompt(answer, context)),
            ],
        }
    }

    /// Generate feedback for `answer` given the question it responds to
    ///
    /// Fails with `InvalidInput` for a blank answer (no outbound call is
    /// made) and with `FeedbackUnavailable` when the backend errors, times
    /// out, or returns blank text.
    pub async fn generate(&self, answer: &str, context: &str) -> InterviewResult<String> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(InterviewError::InvalidInput(
                "answer must not be empty".to_string(),
            ));
        }

        let request = Self::request_for(answer, context);

        let text = match tokio::time::timeout(self.timeout, self.backend.complete(&request)).await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Backend {} failed: {:#}", self.backend.name(), e);
                return Err(InterviewError::FeedbackUnavailable(e.to_string()));
            }
            Err(_) => {
                warn!(
                    "Backend {} timed out after {:?}",
                    self.backend.name(),
                    self.timeout
                );
                return Err(InterviewError::FeedbackUnavailable(format!(
                    "completion timed out after {}s",
                    self.timeout.as_secs_f64()
                )));
            }
        };

        let feedback = text.trim();
        if feedback.is_empty() {
            return Err(InterviewError::FeedbackUnavailable(
                "completion returned empty text".to_string(),
            ));
        }

        info!("Generated feedback ({} chars)", feedback.len());
        Ok(feedback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::backend::Role;

    #[test]
    fn test_request_carries_persona_and_answer() {
        let request = FeedbackGenerator::request_for("closures capture scope", "What are closures?");

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, FEEDBACK_PERSONA);
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1]
            .content
            .contains("The user answered: 'closures capture scope'"));
        assert!(request.messages[1]
            .content
            .ends_with("Context: What are closures?"));
    }
}
