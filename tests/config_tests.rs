// Integration tests for configuration loading

use anyhow::Result;
use mock_interview::interview::DEFAULT_QUESTIONS;
use mock_interview::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("absent");

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "mock-interview");
    assert_eq!(cfg.service.http.port, 8000);
    assert_eq!(cfg.llm.model, "gpt-3.5-turbo");
    assert_eq!(cfg.llm.timeout_secs, 30);
    assert_eq!(cfg.interview.questions.len(), DEFAULT_QUESTIONS.len());

    let questions = cfg.question_set()?;
    assert_eq!(questions.get(0).unwrap(), DEFAULT_QUESTIONS[0]);

    Ok(())
}

#[test]
fn test_toml_file_overrides_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("mock-interview.toml");
    fs::write(
        &path,
        r#"
[service.http]
bind = "0.0.0.0"
port = 9100

[llm]
base_url = "http://localhost:11434/v1"
model = "llama3"
timeout_secs = 5

[interview]
questions = ["Tell me about yourself.", "Why Rust?"]
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "mock-interview");
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.service.http.port, 9100);
    assert_eq!(cfg.llm.base_url, "http://localhost:11434/v1");
    assert_eq!(cfg.llm.model, "llama3");
    assert_eq!(cfg.llm.timeout_secs, 5);
    assert_eq!(cfg.llm.max_tokens, 500);

    let questions = cfg.question_set()?;
    assert_eq!(questions.len(), 2);
    assert_eq!(questions.get(1).unwrap(), "Why Rust?");

    Ok(())
}

#[test]
fn test_empty_question_list_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.toml");
    fs::write(&path, "[interview]\nquestions = []\n")?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert!(cfg.question_set().is_err(), "an interview needs questions");
    Ok(())
}
