use thiserror::Error;

/// Top-level error type for clipper.
#[derive(Debug, Error)]
pub enum ClipperError {
    /// The byte budget cannot hold the clipping marker, so no truncation
    /// could ever satisfy it.
    #[error("budget of {budget} bytes must exceed the {marker_len}-byte clipping marker")]
    Budget { budget: usize, marker_len: usize },

    /// Segmentation was asked for zero parts.
    #[error("max_parts must be at least 1")]
    PartLimit,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error, e.g. an unreadable config file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
