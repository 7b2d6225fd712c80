//! Spoken answers: PCM → WAV packaging and the speech-to-text seam

pub mod transcriber;
pub mod wav;

pub use transcriber::{PlaceholderTranscriber, Transcriber, PLACEHOLDER_TRANSCRIPT};
pub use wav::{decode_pcm_base64, encode_wav};
