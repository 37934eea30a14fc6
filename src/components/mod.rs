//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`guard`] - Access-gated page slot
//! - [`navbar`] - Navigation bar and mobile menu
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`pages`] - Page bodies

pub mod guard;
pub mod icons;
pub mod navbar;
pub mod pages;
pub mod router;

pub use router::AppRouter;
