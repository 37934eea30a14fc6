//! Application configuration.
//!
//! Centralizes configuration constants for the browser shell. Route paths
//! and the route table live in `cdn_console_core::routes`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand shown in the navigation bar.
pub const APP_NAME: &str = "CDN System";

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key holding the signed-in user record.
pub const SESSION_KEY: &str = "cdn_session";

/// Delay before the stored session is read (milliseconds).
///
/// Keeps the first frame in the unresolved state so guarded pages show the
/// placeholder instead of flashing a redirect.
pub const SESSION_BOOTSTRAP_MS: u32 = 0;

// =============================================================================
// Logging
// =============================================================================

/// Browser console log level.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewport query under which the collapsible mobile menu replaces the links.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
