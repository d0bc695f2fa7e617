//! Errors reported by storage adapters.

use ledgerly_shared::AppError;
use thiserror::Error;

/// Failure inside a storage adapter.
///
/// The core never retries these; they surface as an opaque internal error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// The backend failed or is unreachable.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Database(err.to_string())
    }
}
