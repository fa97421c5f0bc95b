use crate::Result;
use crate::format::AudioFormat;
use crate::source::{FillSource, PlaybackSource};

pub mod cpal_out;

/// Device-facing playback parameters derived from a source's metadata.
/// The sample format is fixed: 32-bit signed little-endian PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    pub sample_rate: u32,
    pub channels: u16,
    /// Preferred callback quantum, in frames.
    pub buffer_frames: u16,
}

impl DeviceConfig {
    pub fn for_format(format: AudioFormat) -> Self {
        Self {
            sample_rate: format.sample_rate,
            channels: u16::from(format.channels),
            buffer_frames: format.frame_length,
        }
    }
}

/// Binds one playback source to an output device. One source per binding;
/// simultaneous sounds take one binding each.
pub trait OutputBinding {
    /// Configure the device from the source's metadata and start
    /// callback-driven playback, taking ownership of the source.
    fn start(&mut self, source: PlaybackSource) -> Result<()>;

    /// Tear the stream down. No further fills occur once this returns.
    fn stop(&mut self);
}

/// Render one callback quantum: fill from the source and silence whatever
/// the source did not provide.
pub fn render_into(source: &mut impl FillSource, out: &mut [i32]) {
    let written = source.fill(out);
    out[written..].fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BufferedSource;

    fn effect(samples: Vec<i32>) -> BufferedSource {
        let format = AudioFormat {
            sample_rate: 48000,
            channels: 1,
            frame_length: samples.len() as u16,
        };
        BufferedSource::new(format, samples)
    }

    #[test]
    fn config_mirrors_the_source_metadata() {
        let format = AudioFormat {
            sample_rate: 44100,
            channels: 2,
            frame_length: 512,
        };

        let config = DeviceConfig::for_format(format);
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channels, 2);
        assert_eq!(config.buffer_frames, 512);
    }

    #[test]
    fn render_zero_fills_the_shortfall() {
        let mut source = effect(vec![5, 6]);
        let mut out = [9i32; 6];

        render_into(&mut source, &mut out);
        assert_eq!(&out[..2], &[5, 6]);
        assert_eq!(&out[2..], &[0, 0, 0, 0]);
    }

    #[test]
    fn render_on_a_finished_source_is_pure_silence() {
        let mut source = effect(vec![5, 6]);
        let mut out = [9i32; 2];

        render_into(&mut source, &mut out);
        render_into(&mut source, &mut out);
        assert_eq!(out, [0, 0]);
    }
}
