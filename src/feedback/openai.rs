use super::backend::{ChatMessage, CompletionBackend, CompletionRequest};
use crate::config::LlmConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// OpenAI-compatible chat completions client
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiBackend {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Pull the first choice's text out of a chat completions body
fn extract_content(body: &str) -> Result<String> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).context("Malformed completion response")?;

    if let Some(usage) = &response.usage {
        debug!(
            "Token usage - Prompt: {}, Completion: {}",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .context("Completion response contained no choices")
}

#[async_trait::async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("Sending completion request to {} (model {})", self.base_url, self.model);

        let mut http_request = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request
            .send()
            .await
            .context("Completion request failed")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read completion response")?;

        if !status.is_success() {
            error!("Completion API error ({}): {}", status, text);
            anyhow::bail!("Completion API returned {}", status);
        }

        extract_content(&text)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::backend::Role;

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("hello")];
        let body = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
            max_tokens: 500,
            temperature: 0.7,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_extract_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  Good answer.  "}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
        }"#;

        assert_eq!(extract_content(body).unwrap(), "  Good answer.  ");
    }

    #[test]
    fn test_extract_rejects_missing_choices() {
        assert!(extract_content(r#"{"choices": []}"#).is_err());
        assert!(extract_content(r#"{"error": {"message": "bad key"}}"#).is_err());
        assert!(extract_content("not json").is_err());
    }

    #[test]
    fn test_role_wire_names() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role": "assistant", "content": "x"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = LlmConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..LlmConfig::default()
        };
        let backend = OpenAiBackend::new(&config).unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
