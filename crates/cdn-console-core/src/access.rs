//! Access classifier.
//!
//! Decides, per navigation, whether a route's page may mount. The decision
//! is a pure function of the route's auth requirement and the current
//! [`AuthSignal`]; performing a redirect is left to a [`Navigator`].

use crate::auth::AuthSignal;
use crate::routes::{
    self, AUTHENTICATED_LANDING, PUBLIC_LANDING, RouteAccess, RouteSpec, SIGN_IN,
};

/// How a navigation affects the back stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Adds a new history entry.
    Push,
    /// Overwrites the current entry, so back never returns to it.
    Replace,
}

/// Navigation primitive supplied by the host.
pub trait Navigator {
    fn navigate(&self, path: &str, mode: HistoryMode);
}

/// A redirect instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub mode: HistoryMode,
}

impl Redirect {
    /// Redirect that replaces the current history entry.
    pub const fn replace(to: &'static str) -> Self {
        Self {
            to,
            mode: HistoryMode::Replace,
        }
    }

    pub fn perform(&self, navigator: &dyn Navigator) {
        navigator.navigate(self.to, self.mode);
    }
}

/// Outcome of classifying a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Mount the page.
    Render,
    /// Session still resolving: mount neither the page nor a redirect.
    Placeholder,
    /// Mount nothing and go elsewhere.
    Redirect(Redirect),
}

impl Access {
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Redirect(r) => Some(*r),
            _ => None,
        }
    }
}

/// Classifies a guarded route.
///
/// `requires_auth == true` guards a protected page; `false` guards a
/// guest-only page such as sign-in.
pub fn classify(requires_auth: bool, auth: &AuthSignal) -> Access {
    match (auth, requires_auth) {
        (AuthSignal::Unresolved, _) => Access::Placeholder,
        (AuthSignal::Authenticated(_), true) | (AuthSignal::Unauthenticated, false) => {
            Access::Render
        }
        (AuthSignal::Unauthenticated, true) => Access::Redirect(Redirect::replace(SIGN_IN)),
        (AuthSignal::Authenticated(_), false) => {
            Access::Redirect(Redirect::replace(AUTHENTICATED_LANDING))
        }
    }
}

/// What the page slot holds for a location, before auth is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Open route: mounts unconditionally.
    Page(&'static RouteSpec),
    /// Route mounted behind [`classify`] with the given auth requirement.
    Guarded {
        route: &'static RouteSpec,
        requires_auth: bool,
    },
    /// Unknown path.
    CatchAll(Redirect),
}

/// Picks the page slot for a location path.
pub fn slot(path: &str) -> Slot {
    match routes::resolve(path) {
        None => Slot::CatchAll(Redirect::replace(PUBLIC_LANDING)),
        Some(route) => match route.access {
            RouteAccess::Open => Slot::Page(route),
            RouteAccess::GuestOnly => Slot::Guarded { route, requires_auth: false },
            RouteAccess::Protected => Slot::Guarded { route, requires_auth: true },
        },
    }
}

/// Decision for an arbitrary location path.
///
/// Unknown paths redirect to the public landing whatever the auth state.
pub fn decide(path: &str, auth: &AuthSignal) -> Access {
    let access = match slot(path) {
        Slot::Page(_) => Access::Render,
        Slot::Guarded { requires_auth, .. } => classify(requires_auth, auth),
        Slot::CatchAll(redirect) => Access::Redirect(redirect),
    };
    log::debug!("access {path} as {auth}: {access:?}");
    access
}

/// The redirect a guard mounted on `guard_path` should perform now.
///
/// Nothing is returned once the location has left the guard's route, so a
/// guard that is being torn down never overrides a newer navigation.
pub fn pending_redirect(
    access: Access,
    guard_path: &str,
    current_path: &str,
) -> Option<Redirect> {
    access
        .redirect()
        .filter(|_| routes::same_path(guard_path, current_path))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::routes::ROUTES;

    fn states() -> [AuthSignal; 3] {
        [
            AuthSignal::Unresolved,
            AuthSignal::signed_in("Ada"),
            AuthSignal::Unauthenticated,
        ]
    }

    #[test]
    fn test_protected_unauthenticated_redirects_to_sign_in() {
        assert_eq!(
            classify(true, &AuthSignal::Unauthenticated),
            Access::Redirect(Redirect::replace(SIGN_IN))
        );
    }

    #[test]
    fn test_guest_only_authenticated_redirects_to_landing() {
        assert_eq!(
            classify(false, &AuthSignal::signed_in("Ada")),
            Access::Redirect(Redirect::replace(AUTHENTICATED_LANDING))
        );
    }

    #[test]
    fn test_render_cases() {
        assert_eq!(classify(true, &AuthSignal::signed_in("Ada")), Access::Render);
        assert_eq!(classify(false, &AuthSignal::Unauthenticated), Access::Render);
    }

    #[test]
    fn test_unresolved_is_placeholder() {
        assert_eq!(classify(true, &AuthSignal::Unresolved), Access::Placeholder);
        assert_eq!(classify(false, &AuthSignal::Unresolved), Access::Placeholder);
    }

    #[test]
    fn test_redirects_always_replace() {
        for auth in states() {
            for requires_auth in [true, false] {
                if let Some(r) = classify(requires_auth, &auth).redirect() {
                    assert_eq!(r.mode, HistoryMode::Replace);
                }
            }
            if let Some(r) = decide("/nonexistent", &auth).redirect() {
                assert_eq!(r.mode, HistoryMode::Replace);
            }
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        for auth in states() {
            for requires_auth in [true, false] {
                assert_eq!(classify(requires_auth, &auth), classify(requires_auth, &auth));
            }
        }
    }

    #[test]
    fn test_table_routes_follow_classifier() {
        for route in ROUTES {
            for auth in states() {
                let expected = match route.requires_auth() {
                    None => Access::Render,
                    Some(requires_auth) => classify(requires_auth, &auth),
                };
                assert_eq!(decide(route.path, &auth), expected, "{}", route.path);
            }
        }
    }

    #[test]
    fn test_catch_all_redirects_home() {
        for auth in states() {
            assert_eq!(
                decide("/nonexistent", &auth),
                Access::Redirect(Redirect::replace(PUBLIC_LANDING))
            );
        }
    }

    #[test]
    fn test_open_route_renders_while_unresolved() {
        assert_eq!(decide("/", &AuthSignal::Unresolved), Access::Render);
    }

    struct Recorder(RefCell<Vec<(String, HistoryMode)>>);

    impl Navigator for Recorder {
        fn navigate(&self, path: &str, mode: HistoryMode) {
            self.0.borrow_mut().push((path.to_string(), mode));
        }
    }

    #[test]
    fn test_redirect_perform() {
        let nav = Recorder(RefCell::new(Vec::new()));
        Redirect::replace(SIGN_IN).perform(&nav);
        assert_eq!(
            *nav.0.borrow(),
            vec![(SIGN_IN.to_string(), HistoryMode::Replace)]
        );
    }

    #[test]
    fn test_slot_by_access_class() {
        assert!(matches!(slot("/"), Slot::Page(route) if route.path == "/"));
        assert!(matches!(
            slot("/login"),
            Slot::Guarded { route, requires_auth: false } if route.path == SIGN_IN
        ));
        assert!(matches!(
            slot("/Library/"),
            Slot::Guarded { route, requires_auth: true } if route.path == "/library"
        ));
        assert_eq!(slot("/nowhere"), Slot::CatchAll(Redirect::replace(PUBLIC_LANDING)));
    }

    #[test]
    fn test_every_route_has_a_slot() {
        for route in ROUTES {
            match slot(route.path) {
                Slot::Page(matched) | Slot::Guarded { route: matched, .. } => {
                    assert_eq!(matched.path, route.path)
                }
                Slot::CatchAll(_) => panic!("{} fell through to the catch-all", route.path),
            }
        }
    }

    #[test]
    fn test_pending_redirect_only_at_own_path() {
        let bounce = classify(true, &AuthSignal::Unauthenticated);
        assert_eq!(
            pending_redirect(bounce, "/upload", "/upload"),
            Some(Redirect::replace(SIGN_IN))
        );
        assert_eq!(
            pending_redirect(bounce, "/upload", "/Upload/"),
            Some(Redirect::replace(SIGN_IN))
        );
        assert_eq!(pending_redirect(bounce, "/upload", PUBLIC_LANDING), None);
    }

    #[test]
    fn test_pending_redirect_none_without_redirect() {
        assert_eq!(pending_redirect(Access::Render, "/upload", "/upload"), None);
        assert_eq!(pending_redirect(Access::Placeholder, "/upload", "/upload"), None);
    }
}
