//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - Window, storage and hash-navigation helpers

pub mod dom;
