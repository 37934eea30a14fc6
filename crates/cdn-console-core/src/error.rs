//! Error types for the access core.
//!
//! - [`AuthError`] - Rejected auth state transitions
//! - [`SignOutError`] - Failures reported by an external auth source

use thiserror::Error;

/// Invalid transition published to an [`AuthHub`](crate::AuthHub).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Session resolution is one-shot; it never goes back to `Unresolved`.
    #[error("auth state already resolved; cannot return to unresolved")]
    Unresolve,
}

/// Sign-out failure at the external auth source.
///
/// The shell never surfaces these to the user. They exist so the source can
/// say what happened and the controller can log it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignOutError {
    /// The backing session store could not be reached.
    #[error("session store unavailable")]
    Unavailable,
    /// The source refused or failed the request.
    #[error("sign-out rejected: {0}")]
    Rejected(String),
}
