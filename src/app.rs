//! Root application module.
//!
//! Contains the main App component and the AppContext holding every piece of
//! reactive state the shell owns.

use leptos::prelude::*;

use cdn_console_core::{AuthSignal, AuthSource, ShellController};

use crate::components::AppRouter;
use crate::components::router::HashNavigator;
use crate::core::LocalSession;
use crate::models::Location;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive state.
///
/// Created once in [`App`] and passed down as props; the guard and navbar
/// receive exactly the pieces they need rather than looking them up.
///
/// # Architecture
///
/// - **auth**: mirror of the session hub, updated through a hub subscription
/// - **location**: current hash location
/// - **shell**: navigation shell state machine (mobile menu)
/// - **session**: the external auth source (kept off the reactive graph)
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current auth state.
    pub auth: RwSignal<AuthSignal>,

    /// Current location.
    pub location: RwSignal<Location>,

    /// Navigation shell state.
    pub shell: RwSignal<ShellController>,

    /// Auth source. Single-threaded, so it lives in local storage.
    pub session: StoredValue<LocalSession, LocalStorage>,
}

impl AppContext {
    /// Creates the context and bridges the session hub into `auth`.
    ///
    /// The session starts unresolved; call [`AppContext::bootstrap`] after
    /// mounting. The bridge is removed when the owning scope is cleaned up.
    pub fn new() -> Self {
        let session = LocalSession::new();
        let auth = RwSignal::new(session.current());
        let bridge = session.hub().subscribe(move |state| auth.set(state.clone()));
        let session = StoredValue::new_local(session);

        on_cleanup(move || {
            if session.try_with_value(|s| s.hub().unsubscribe(bridge)) == Some(true) {
                log::debug!("auth bridge detached");
            }
        });

        Self {
            auth,
            location: RwSignal::new(Location::current()),
            shell: RwSignal::new(ShellController::new()),
            session,
        }
    }

    pub fn bootstrap(&self) {
        self.session.with_value(|s| s.bootstrap());
    }

    pub fn navigator(&self) -> HashNavigator {
        HashNavigator::new(self.location)
    }

    pub fn sign_in(&self, display_name: &str) {
        self.session.with_value(|s| s.sign_in(display_name));
    }

    /// Signs out through the shell controller (always lands on `/`).
    pub fn sign_out(&self) {
        let navigator = self.navigator();
        self.session.with_value(|session| {
            self.shell
                .update(|shell| shell.sign_out(session, &navigator));
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates the AppContext, starts session bootstrap and renders the router.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    ctx.bootstrap();

    view! { <AppRouter ctx=ctx /> }
}
