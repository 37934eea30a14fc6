//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the location signal is derived from `#/path`
//! - **Navbar never re-renders on navigation**: only the page slot swaps
//! - **Guarded routes**: protected and guest-only pages mount through [`Guarded`]
//! - **Unknown paths**: replaced with the public landing page

use leptos::prelude::*;

use cdn_console_core::{AuthSignal, HistoryMode, Navigator, Redirect, Slot, slot};

use crate::app::AppContext;
use crate::components::guard::Guarded;
use crate::components::navbar::Navbar;
use crate::components::pages;
use crate::models::Location;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// Navigator
// ============================================================================

/// Hash-history navigator.
///
/// Push sets the URL hash; replace rewrites the current history entry. Both
/// update the location signal immediately so the next render sees the target.
#[derive(Clone, Copy)]
pub struct HashNavigator {
    location: RwSignal<Location>,
}

impl HashNavigator {
    pub fn new(location: RwSignal<Location>) -> Self {
        Self { location }
    }

    /// Whether the current location is `path`.
    pub fn is_at(&self, path: &str) -> bool {
        self.location.with_untracked(|l| l.path() == path)
    }

    /// Current location path, read without tracking.
    pub fn current_path(&self) -> String {
        self.location.with_untracked(|l| l.path().to_string())
    }
}

impl Navigator for HashNavigator {
    fn navigate(&self, path: &str, mode: HistoryMode) {
        let target = Location::from_path(path);
        match mode {
            HistoryMode::Push => dom::set_hash(&target.to_hash()),
            HistoryMode::Replace => dom::replace_hash(&target.to_hash()),
        }
        if !self.is_at(target.path()) {
            self.location.set(target);
        }
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Route table:
/// - `#/` → Home (open)
/// - `#/login`, `#/register` → guest-only pages
/// - `#/dashboard`, `#/upload`, `#/library`, `#/analytics`, `#/profile` → protected pages
/// - anything else → replaced with `#/`
#[component]
pub fn AppRouter(ctx: AppContext) -> impl IntoView {
    let location = ctx.location;
    let navigator = ctx.navigator();

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    dom::on_hash_change(move || {
        let next = Location::current();
        if location.with_untracked(|l| *l != next) {
            location.set(next);
        }
    });

    // Any completed navigation closes the mobile menu
    Effect::new(move |prev: Option<Location>| {
        let current = location.get();
        ctx.shell
            .update(|s| s.location_changed(prev.as_ref().map(Location::path), current.path()));
        current
    });

    let page_slot = Memo::new(move |_| location.with(|l| slot(l.path())));
    let auth: Signal<AuthSignal> = ctx.auth.into();
    let current: Signal<Location> = location.into();

    let on_sign_in = Callback::new(move |name: String| ctx.sign_in(&name));
    let on_sign_out = Callback::new(move |_: ()| ctx.sign_out());

    view! {
        <div class=css::app>
            <Navbar
                auth=auth
                location=current
                shell=ctx.shell
                navigator=navigator
                on_sign_out=on_sign_out
            />

            <main class=css::main>
                {move || match page_slot.get() {
                    Slot::CatchAll(redirect) => {
                        view! { <CatchAll redirect=redirect navigator=navigator /> }.into_any()
                    }
                    Slot::Page(route) => pages::page(route.path, on_sign_in),
                    Slot::Guarded { route, requires_auth } => view! {
                        <Guarded
                            path=route.path
                            requires_auth=requires_auth
                            auth=auth
                            navigator=navigator
                        >
                            {pages::page(route.path, on_sign_in)}
                        </Guarded>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}

// ============================================================================
// Catch-all
// ============================================================================

/// Unknown path: renders nothing and performs the catch-all redirect.
#[component]
fn CatchAll(redirect: Redirect, navigator: HashNavigator) -> impl IntoView {
    Effect::new(move || {
        log::debug!("unknown route, redirecting to {}", redirect.to);
        redirect.perform(&navigator);
    });
}
