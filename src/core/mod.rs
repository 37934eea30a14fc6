//! Browser-side session plumbing.
//!
//! This module provides:
//! - [`LocalSession`] - localStorage-backed auth source
//! - [`error`] - Session persistence errors

pub mod error;
mod session;

pub use session::LocalSession;
