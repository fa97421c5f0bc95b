use std::io::Read;

use crate::{AudioError, Result};

/// Byte offset of the first sample in a source file, directly after the
/// fixed little-endian header: sample_rate (i32) | channels (u8) |
/// frame_length (u16).
pub const SAMPLE_DATA_START: u64 = 7;

/// Size of one stored sample: signed 32-bit little-endian PCM.
pub const BYTES_PER_SAMPLE: u64 = 4;

/// Per-file playback metadata, read once from the header and immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u8,
    /// Natural buffer size in frames; also the length of the sample payload.
    pub frame_length: u16,
}

impl AudioFormat {
    /// Parse and validate the fixed header. A reader that ends before the
    /// header does is a load failure; zero-valued fields are a config
    /// failure, since no device could play them.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut header = [0u8; SAMPLE_DATA_START as usize];
        reader.read_exact(&mut header)?;

        let sample_rate = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let channels = header[4];
        let frame_length = u16::from_le_bytes([header[5], header[6]]);

        if sample_rate <= 0 {
            return Err(AudioError::Config(format!(
                "sample rate must be positive, got {sample_rate}"
            )));
        }
        if channels == 0 {
            return Err(AudioError::Config("channel count must be nonzero".into()));
        }
        if frame_length == 0 {
            return Err(AudioError::Config("frame length must be nonzero".into()));
        }

        Ok(Self {
            sample_rate: sample_rate as u32,
            channels,
            frame_length,
        })
    }

    /// Length of the sample payload in bytes.
    pub fn data_len(&self) -> u64 {
        u64::from(self.frame_length) * BYTES_PER_SAMPLE
    }

    /// Duration of one pass over the payload, in seconds.
    pub fn duration_secs(&self) -> f32 {
        f32::from(self.frame_length) / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AudioError;
    use std::io::Cursor;

    fn header_bytes(sample_rate: i32, channels: u8, frame_length: u16) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.push(channels);
        bytes.extend_from_slice(&frame_length.to_le_bytes());
        bytes
    }

    #[test]
    fn header_fields_round_trip() {
        let mut reader = Cursor::new(header_bytes(44100, 2, 4));
        let format = AudioFormat::read_from(&mut reader).unwrap();

        assert_eq!(format.sample_rate, 44100);
        assert_eq!(format.channels, 2);
        assert_eq!(format.frame_length, 4);
        assert_eq!(reader.position(), SAMPLE_DATA_START);
    }

    #[test]
    fn truncated_header_is_a_load_failure() {
        let mut reader = Cursor::new(vec![0u8; 3]);
        let result = AudioFormat::read_from(&mut reader);
        assert!(matches!(result, Err(AudioError::Load(_))));
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let mut reader = Cursor::new(header_bytes(0, 2, 4));
        let result = AudioFormat::read_from(&mut reader);
        assert!(matches!(result, Err(AudioError::Config(_))));
    }

    #[test]
    fn negative_sample_rate_is_rejected() {
        let mut reader = Cursor::new(header_bytes(-44100, 2, 4));
        let result = AudioFormat::read_from(&mut reader);
        assert!(matches!(result, Err(AudioError::Config(_))));
    }

    #[test]
    fn zero_channels_is_rejected() {
        let mut reader = Cursor::new(header_bytes(44100, 0, 4));
        assert!(matches!(
            AudioFormat::read_from(&mut reader),
            Err(AudioError::Config(_))
        ));
    }

    #[test]
    fn zero_frame_length_is_rejected() {
        let mut reader = Cursor::new(header_bytes(44100, 2, 0));
        assert!(matches!(
            AudioFormat::read_from(&mut reader),
            Err(AudioError::Config(_))
        ));
    }

    #[test]
    fn duration_counts_frames_at_the_sample_rate() {
        let format = AudioFormat {
            sample_rate: 48000,
            channels: 1,
            frame_length: 24000,
        };
        assert!((format.duration_secs() - 0.5).abs() < f32::EPSILON);
        assert_eq!(format.data_len(), 96000);
    }
}
