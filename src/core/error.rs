//! Error types for verdant

use thiserror::Error;

/// Main error type for the crate.
///
/// Only configuration loading can fail; the per-vertex and per-fragment
/// math has no error path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
