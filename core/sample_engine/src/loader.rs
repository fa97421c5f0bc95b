use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use log::debug;

use crate::Result;
use crate::format::{AudioFormat, BYTES_PER_SAMPLE, SAMPLE_DATA_START};
use crate::source::{BufferedSource, PlaybackSource, StreamingSource};
use crate::store::StreamStore;

/// Load a sample file and construct the matching playback source.
///
/// Sound effects (`is_music == false`) are read fully into memory and the
/// file is closed before returning. Music retains the open handle and
/// streams from disk during playback; no sample data is read up front.
///
/// Failure never yields a partially initialized source: an unopenable or
/// truncated file is a load error, a zero-valued header field a config
/// error.
pub fn load_audio<P: AsRef<Path>>(path: P, is_music: bool) -> Result<PlaybackSource> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let format = AudioFormat::read_from(&mut file)?;

    let source = if is_music {
        let store = StreamStore::new(file, SAMPLE_DATA_START, format.frame_length);
        PlaybackSource::Music(StreamingSource::new(format, store))
    } else {
        let mut raw = vec![0u8; format.data_len() as usize];
        file.read_exact(&mut raw)?;

        let samples = raw
            .chunks_exact(BYTES_PER_SAMPLE as usize)
            .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        PlaybackSource::Effect(BufferedSource::new(format, samples))
    };

    debug!(
        "loaded {} ({} Hz, {} ch, {} frames, music: {is_music})",
        path.display(),
        format.sample_rate,
        format.channels,
        format.frame_length
    );
    Ok(source)
}
