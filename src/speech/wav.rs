use crate::error::{InterviewError, InterviewResult};
use base64::Engine;
use std::io::Cursor;

/// Decode base64 little-endian i16 PCM into samples
pub fn decode_pcm_base64(pcm: &str) -> InterviewResult<Vec<i16>> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(pcm.trim())
        .map_err(|e| InterviewError::InvalidInput(format!("pcm is not valid base64: {}", e)))?;

    if bytes.len() % 2 != 0 {
        return Err(InterviewError::InvalidInput(
            "pcm must contain whole 16-bit samples".to_string(),
        ));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]))
        .collect())
}

/// Wrap interleaved 16-bit samples in an in-memory WAV file
pub fn encode_wav(samples: &[i16], sample_rate: u32, channels: u16) -> InterviewResult<Vec<u8>> {
    if channels == 0 || sample_rate == 0 {
        return Err(InterviewError::InvalidInput(
            "sample_rate and channels must be positive".to_string(),
        ));
    }

    if samples.len() % channels as usize != 0 {
        return Err(InterviewError::InvalidInput(
            "sample count is not divisible by channel count".to_string(),
        ));
    }

    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut buffer, spec).map_err(wav_error)?;
        for &sample in samples {
            writer.write_sample(sample).map_err(wav_error)?;
        }
        writer.finalize().map_err(wav_error)?;
    }

    Ok(buffer.into_inner())
}

fn wav_error(e: hound::Error) -> InterviewError {
    InterviewError::InvalidInput(format!("failed to encode WAV: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_le_samples() {
        let bytes: Vec<u8> = [100i16, -200, 300]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

        assert_eq!(decode_pcm_base64(&encoded).unwrap(), vec![100, -200, 300]);
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        let encoded = base64::engine::general_purpose::STANDARD.encode([1u8, 2, 3]);
        assert!(decode_pcm_base64(&encoded).is_err());
    }

    #[test]
    fn test_encoded_wav_reads_back() {
        let samples = vec![0i16, 1000, -1000, i16::MAX];
        let wav = encode_wav(&samples, 16000, 1).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");

        let mut reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        assert_eq!(reader.spec().sample_rate, 16000);
        assert_eq!(reader.spec().channels, 1);
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn test_stereo_requires_even_samples() {
        assert!(encode_wav(&[1, 2, 3], 16000, 2).is_err());
    }
}
