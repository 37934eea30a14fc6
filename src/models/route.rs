//! Hash-based locations.
//!
//! URL format: `#/path` (e.g., `#/dashboard`, `#/library`). The hash is the
//! source of truth for the current location.

use cdn_console_core::routes::normalize_path;

use crate::utils::dom;

/// Current location path, normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    path: String,
}

impl Location {
    /// Parse a URL hash into a location.
    pub fn from_hash(hash: &str) -> Self {
        Self::from_path(hash.trim_start_matches('#'))
    }

    pub fn from_path(path: &str) -> Self {
        Self {
            path: normalize_path(path),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Convert location to URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }

    /// Get current location from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }
}
