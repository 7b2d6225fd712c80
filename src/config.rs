use crate::interview::{QuestionSet, DEFAULT_QUESTIONS};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `MOCK_INTERVIEW__LLM__MODEL`
pub const ENV_PREFIX: &str = "MOCK_INTERVIEW";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub llm: LlmConfig,
    pub interview: InterviewConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Falls back to `OPENAI_API_KEY` when unset
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    pub questions: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "mock-interview".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            timeout_secs: 30,
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from `path` (any format the `config` crate
    /// understands, extension optional) layered under environment overrides
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read config from {}", path))?;

        let mut cfg: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        if cfg.llm.api_key.is_none() {
            cfg.llm.api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        }

        Ok(cfg)
    }

    /// The configured questions as a validated question set
    pub fn question_set(&self) -> Result<QuestionSet> {
        QuestionSet::new(self.interview.questions.iter().cloned())
            .context("Invalid interview question set")
    }
}
