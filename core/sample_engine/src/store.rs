use std::fs::File;
use std::io::{Read as _, Seek as _, SeekFrom};

use crate::format::BYTES_PER_SAMPLE;
use crate::{AudioError, Result};

/// Fully resident sample payload for buffered playback. Never mutated after
/// construction.
#[derive(Debug)]
pub struct SampleBuffer {
    samples: Vec<i32>,
}

impl SampleBuffer {
    pub fn new(samples: Vec<i32>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Copy samples starting at `start` into `out`, clamped to the end of
    /// the payload. Returns the number of samples copied.
    pub fn read(&self, start: usize, out: &mut [i32]) -> usize {
        if start >= self.samples.len() {
            return 0;
        }
        let end = (start + out.len()).min(self.samples.len());
        let count = end - start;
        out[..count].copy_from_slice(&self.samples[start..end]);
        count
    }
}

/// File-backed sequential store serving sample reads out of a fixed loop
/// region. The cursor is the only mutable playback state; reads go through
/// a scratch buffer sized once at construction, so the playback path never
/// allocates.
#[derive(Debug)]
pub struct StreamStore {
    file: File,
    cursor: u64,
    loop_start: u64,
    loop_end: u64,
    scratch: Vec<u8>,
}

impl StreamStore {
    /// `file` must already be positioned at `loop_start`.
    pub fn new(file: File, loop_start: u64, frame_length: u16) -> Self {
        let region = u64::from(frame_length) * BYTES_PER_SAMPLE;
        Self {
            file,
            cursor: loop_start,
            loop_start,
            loop_end: loop_start + region,
            scratch: vec![0; region as usize],
        }
    }

    /// Current cursor position, in bytes from the start of the file.
    pub fn position(&self) -> u64 {
        self.cursor
    }

    /// Samples left before the cursor meets the loop boundary.
    pub fn frames_until_wrap(&self) -> usize {
        ((self.loop_end - self.cursor) / BYTES_PER_SAMPLE) as usize
    }

    /// Seek back to the start of the loop region.
    pub fn rewind(&mut self) -> std::io::Result<()> {
        self.file.seek(SeekFrom::Start(self.loop_start))?;
        self.cursor = self.loop_start;
        Ok(())
    }

    /// Read up to `out.len()` samples at the cursor, never crossing the
    /// loop boundary. Advances the cursor and wraps it once the boundary is
    /// reached. A read past physical end-of-store is treated as an implicit
    /// loop reset and retried once before it becomes a fault.
    pub fn read_frames(&mut self, out: &mut [i32]) -> Result<usize> {
        let count = out.len().min(self.frames_until_wrap());
        if count == 0 {
            return Ok(0);
        }

        let bytes = count * BYTES_PER_SAMPLE as usize;
        if let Err(err) = self.file.read_exact(&mut self.scratch[..bytes]) {
            if err.kind() != std::io::ErrorKind::UnexpectedEof {
                return Err(AudioError::Streaming(err));
            }
            self.rewind().map_err(AudioError::Streaming)?;
            self.file
                .read_exact(&mut self.scratch[..bytes])
                .map_err(AudioError::Streaming)?;
        }

        let raw = self.scratch[..bytes].chunks_exact(BYTES_PER_SAMPLE as usize);
        for (sample, chunk) in out[..count].iter_mut().zip(raw) {
            *sample = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        self.cursor += bytes as u64;
        if self.cursor >= self.loop_end {
            self.rewind().map_err(AudioError::Streaming)?;
        }
        Ok(count)
    }
}
