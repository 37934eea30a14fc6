//! Data models and types for the browser shell.
//!
//! Auth, route and navigation types come from `cdn_console_core`; this
//! module only adds what is tied to the browser:
//! - [`Location`] - Hash-based location parsing

mod route;

pub use route::Location;
