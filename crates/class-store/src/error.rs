//! Store Errors

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures talking to the backing key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage area (private mode, disabled storage, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    /// Typically a quota error
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not serialize classes: {0}")]
    Serialize(String),
}
