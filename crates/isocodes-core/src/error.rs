// crates/isocodes-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading the reference datasets.
///
/// Query misses are never errors: `find`, `search`, `get` and the former-name
/// lookups report absence instead. Only constructing a dataset can fail.
#[derive(Debug, Error)]
pub enum IsoError {
    /// The dataset key is unknown, or no backing data exists for it.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// The backing data was readable but not shaped as expected.
    #[error("Invalid dataset: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IsoError>;
