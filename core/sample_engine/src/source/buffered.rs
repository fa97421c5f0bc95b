use crate::format::AudioFormat;
use crate::source::FillSource;
use crate::store::SampleBuffer;

/// Fully resident sound effect.
///
/// One-shot by default: the cursor advances on every fill and the source
/// reports `finished` once the payload is exhausted. Looping is opt-in and
/// wraps the cursor back to the start instead.
#[derive(Debug)]
pub struct BufferedSource {
    format: AudioFormat,
    buffer: SampleBuffer,
    position: usize,
    looping: bool,
    volume: f32,
}

impl BufferedSource {
    pub fn new(format: AudioFormat, samples: Vec<i32>) -> Self {
        Self {
            format,
            buffer: SampleBuffer::new(samples),
            position: 0,
            looping: false,
            volume: 1.0,
        }
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    /// A one-shot source is finished once its cursor has passed the whole
    /// payload; a looping source never finishes.
    pub fn finished(&self) -> bool {
        !self.looping && self.position >= self.buffer.len()
    }

    /// Stored playback volume, clamped to 0.0..=1.0. Kept for the host
    /// mixer; not applied in the fill path.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

impl FillSource for BufferedSource {
    fn format(&self) -> AudioFormat {
        self.format
    }

    fn fill(&mut self, out: &mut [i32]) -> usize {
        let request = out.len().min(usize::from(self.format.frame_length));
        let written = self.buffer.read(self.position, &mut out[..request]);
        self.position += written;
        if self.looping && self.position >= self.buffer.len() {
            self.position = 0;
        }
        written
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
