//! Custom error types for the browser shell.
//!
//! - [`SessionError`] - localStorage operations for the persisted session

use thiserror::Error;

use cdn_console_core::SignOutError;

/// Session persistence errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Stored session record could not be decoded.
    #[error("corrupt session record: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Failed to write or remove the session record.
    #[error("failed to update localStorage")]
    WriteFailed,
}

impl From<SessionError> for SignOutError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::StorageUnavailable => Self::Unavailable,
            other => Self::Rejected(other.to_string()),
        }
    }
}
