use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use crate::format::AudioFormat;

pub mod buffered;
pub mod streaming;

pub use buffered::BufferedSource;
pub use streaming::StreamingSource;

/// A playback source fills caller-supplied sample buffers on demand.
///
/// `fill` runs on the device callback thread: it must not block or allocate,
/// and it cannot fail — faults are absorbed as silence by the implementation.
pub trait FillSource: Send {
    fn format(&self) -> AudioFormat;

    /// Write up to `out.len()` samples and return how many were written.
    fn fill(&mut self, out: &mut [i32]) -> usize;

    /// Rewind playback to the beginning.
    fn reset(&mut self);
}

/// The closed set of source kinds the loader can produce.
#[derive(Debug)]
pub enum PlaybackSource {
    /// Fully buffered one-shot sound effect.
    Effect(BufferedSource),
    /// Disk-streamed looping music.
    Music(StreamingSource),
}

impl PlaybackSource {
    /// Fault counter of the streamed variant, if any. Clone it out before
    /// the source moves into a device callback.
    pub fn fault_counter(&self) -> Option<Arc<AtomicU64>> {
        match self {
            Self::Effect(_) => None,
            Self::Music(source) => Some(source.fault_counter()),
        }
    }
}

impl FillSource for PlaybackSource {
    fn format(&self) -> AudioFormat {
        match self {
            Self::Effect(source) => source.format(),
            Self::Music(source) => source.format(),
        }
    }

    fn fill(&mut self, out: &mut [i32]) -> usize {
        match self {
            Self::Effect(source) => source.fill(out),
            Self::Music(source) => source.fill(out),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Effect(source) => source.reset(),
            Self::Music(source) => source.reset(),
        }
    }
}
