use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::format::AudioFormat;
use crate::source::FillSource;
use crate::store::StreamStore;

/// Disk-streamed looping music.
///
/// Owns its backing store exclusively; the store cursor is the only mutable
/// playback state. Read faults cannot escape the device callback, so they
/// are absorbed as silence and counted for out-of-band inspection.
#[derive(Debug)]
pub struct StreamingSource {
    format: AudioFormat,
    store: StreamStore,
    faults: Arc<AtomicU64>,
    volume: f32,
}

impl StreamingSource {
    pub fn new(format: AudioFormat, store: StreamStore) -> Self {
        Self {
            format,
            store,
            faults: Arc::new(AtomicU64::new(0)),
            volume: 1.0,
        }
    }

    /// Shared fault counter, readable while the source itself is owned by
    /// the device callback.
    pub fn fault_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.faults)
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

impl FillSource for StreamingSource {
    fn format(&self) -> AudioFormat {
        self.format
    }

    fn fill(&mut self, out: &mut [i32]) -> usize {
        let request = out.len().min(usize::from(self.format.frame_length));
        if request == 0 {
            return 0;
        }

        match self.store.read_frames(&mut out[..request]) {
            Ok(written) => written,
            Err(_) => {
                out[..request].fill(0);
                self.faults.fetch_add(1, Ordering::Relaxed);
                request
            }
        }
    }

    fn reset(&mut self) {
        if self.store.rewind().is_err() {
            self.faults.fetch_add(1, Ordering::Relaxed);
        }
    }
}
