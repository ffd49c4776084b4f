// crates/division-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a dataset or constructing a [`crate::DivisionIndex`].
///
/// Queries against a built index never fail; only construction and I/O do.
#[derive(Debug, Error)]
pub enum DivisionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DivisionError>;
