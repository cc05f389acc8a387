//! Error types for buffer passes and configuration loading.

use std::path::PathBuf;

/// Error type for the enhancement engine.
///
/// Out-of-range adjustment factors are not errors: intermediate values
/// outside `[0, 1]` saturate when the pixel is quantized.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// Buffer length is not a whole number of 4-byte pixels.
    #[error("invalid pixel buffer: length {len} is not a multiple of 4")]
    InvalidInput { len: usize },
    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// Configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the enhancement engine.
pub type EnhanceResult<T> = Result<T, EnhanceError>;
