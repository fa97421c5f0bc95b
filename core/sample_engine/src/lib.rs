pub mod device;
pub mod format;
pub mod loader;
pub mod source;
pub mod store;

pub use format::AudioFormat;
pub use loader::load_audio;
pub use source::{BufferedSource, FillSource, PlaybackSource, StreamingSource};

/// Errors surfaced by loading, configuration and device setup.
///
/// Faults inside the real-time callback never appear here; they degrade to
/// silence and are counted on the source instead.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// File missing, unreadable, or shorter than its header declares.
    #[error("failed to load sample file: {0}")]
    Load(#[from] std::io::Error),

    /// Header metadata that no device could play (zero sample rate etc).
    #[error("invalid sample metadata: {0}")]
    Config(String),

    /// Backing store read failure during streamed playback.
    #[error("backing store read failed: {0}")]
    Streaming(std::io::Error),

    /// No output device available on the default host.
    #[error("no audio output device found")]
    DeviceNotFound,

    /// The platform refused the output stream configuration.
    #[error("failed to build output stream: {0}")]
    StreamBuild(String),

    /// The stream was built but could not be started.
    #[error("failed to start output stream: {0}")]
    StreamStart(String),
}

pub type Result<T> = std::result::Result<T, AudioError>;
