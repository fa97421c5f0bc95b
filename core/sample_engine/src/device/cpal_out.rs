use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cpal::traits::{DeviceTrait as _, HostTrait as _, StreamTrait as _};
use log::{error, warn};

use super::{DeviceConfig, OutputBinding, render_into};
use crate::source::{FillSource as _, PlaybackSource};
use crate::{AudioError, Result};

/// Output binding backed by the default cpal host device.
///
/// The source moves into the stream's data callback on `start`; its fault
/// counter stays behind so playback faults remain observable from here.
pub struct CpalOutputBinding {
    stream: Option<cpal::Stream>,
    faults: Option<Arc<AtomicU64>>,
}

impl CpalOutputBinding {
    pub fn new() -> Self {
        Self {
            stream: None,
            faults: None,
        }
    }

    /// Streaming faults absorbed by the callback since `start`. Always 0
    /// for buffered sources.
    pub fn fault_count(&self) -> u64 {
        self.faults
            .as_ref()
            .map_or(0, |faults| faults.load(Ordering::Relaxed))
    }
}

impl Default for CpalOutputBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBinding for CpalOutputBinding {
    fn start(&mut self, source: PlaybackSource) -> Result<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::DeviceNotFound)?;

        let config = DeviceConfig::for_format(source.format());
        let stream_config = cpal::StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: cpal::BufferSize::Fixed(u32::from(config.buffer_frames)),
        };

        let error_cb = move |err| {
            error!("output stream error: {err}");
        };

        let faults = source.fault_counter();
        let mut source = source;
        let data_cb = move |data: &mut [i32], _: &cpal::OutputCallbackInfo| {
            render_into(&mut source, data);
        };

        let stream = device
            .build_output_stream(&stream_config, data_cb, error_cb, None)
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamStart(e.to_string()))?;

        self.faults = faults;
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        if self.stream.take().is_none() {
            warn!("stop called with no active stream");
        }
    }
}
