use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Chat role of a completion message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A text-completion request, independent of the provider
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
}

/// Text-completion capability trait
///
/// Implementations:
/// - `OpenAiBackend`: OpenAI-compatible chat completions over HTTP
/// - test doubles returning scripted text or failures
///
/// Calls may be slow or fail; callers bound them with a timeout.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run the completion and return the generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}
