//! Session-aware route access for the CDN console.
//!
//! This crate holds every decision the browser shell makes about what may
//! render. It has no browser dependencies, so the web crate only wires the
//! pieces to signals and the DOM.
//!
//! - [`auth`] - [`AuthSignal`], the [`AuthSource`] capability and the [`AuthHub`] observer registry
//! - [`routes`] - The static route table and path resolution
//! - [`access`] - The access classifier ([`classify`], [`decide`]) and page [`Slot`] selection
//! - [`nav`] - Navigation items filtered by auth state
//! - [`shell`] - Mobile menu state machine and sign-out flow
//! - [`error`] - Error types

pub mod access;
pub mod auth;
pub mod error;
pub mod nav;
pub mod routes;
pub mod shell;

pub use access::{
    Access, HistoryMode, Navigator, Redirect, Slot, classify, decide, pending_redirect, slot,
};
pub use auth::{AuthHub, AuthSignal, AuthSource, AuthUser, SubscriptionId};
pub use error::{AuthError, SignOutError};
pub use nav::{NavItem, greeting, is_active, nav_items, visible_items};
pub use routes::{ROUTES, RouteAccess, RouteSpec};
pub use shell::{MenuState, ShellController};
