use crate::error::InterviewResult;

/// Text returned by the placeholder transcriber
pub const PLACEHOLDER_TRANSCRIPT: &str = "This is a dummy transcription of your voice.";

/// Speech-to-text capability trait
///
/// Takes a complete WAV file and returns the transcribed answer. May be slow
/// or fail; failures surface as `TranscriptionFailed`.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> InterviewResult<String>;

    /// Get transcriber name for logging
    fn name(&self) -> &str;
}

/// Stand-in until a real speech-to-text service is wired up
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTranscriber;

#[async_trait::async_trait]
impl Transcriber for PlaceholderTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> InterviewResult<String> {
        Ok(PLACEHOLDER_TRANSCRIPT.to_string())
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
