use std::path::PathBuf;
use thiserror::Error;

/// Failures reading round records. The estimator itself never errors.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid round JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hole {hole}: {reason}")]
    InvalidHole { hole: u8, reason: String },
}

pub type Result<T> = std::result::Result<T, RecordError>;
