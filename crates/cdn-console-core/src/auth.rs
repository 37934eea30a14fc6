//! Authentication state as seen by the shell.
//!
//! The shell never talks to a session backend. It reads an [`AuthSignal`],
//! listens for changes through an [`AuthHub`], and asks an [`AuthSource`] to
//! sign out.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, SignOutError};

/// Fallback greeting name when the user has no usable display name.
pub const ANONYMOUS_NAME: &str = "User";

/// The signed-in user, as far as the shell needs to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub display_name: String,
}

impl AuthUser {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// Session resolution state.
///
/// `Unresolved` only exists while the session bootstraps. Once the source
/// has answered, the signal moves between the two resolved states only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthSignal {
    #[default]
    Unresolved,
    Authenticated(AuthUser),
    Unauthenticated,
}

impl AuthSignal {
    /// Shorthand for `Authenticated` with the given display name.
    pub fn signed_in(display_name: impl Into<String>) -> Self {
        Self::Authenticated(AuthUser::new(display_name))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

impl fmt::Display for AuthSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => write!(f, "unresolved"),
            Self::Authenticated(user) => write!(f, "authenticated({})", user.display_name),
            Self::Unauthenticated => write!(f, "unauthenticated"),
        }
    }
}

/// External session source consumed by the shell.
pub trait AuthSource {
    /// Current auth state.
    fn current(&self) -> AuthSignal;

    /// Ends the session.
    ///
    /// Callers treat this as fire-and-forget: an `Err` is logged, never
    /// acted on.
    fn sign_out(&self) -> Result<(), SignOutError>;
}

// ============================================================================
// AuthHub
// ============================================================================

/// Handle returned by [`AuthHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthSignal)>;

struct HubInner {
    state: AuthSignal,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Observer registry for [`AuthSignal`] changes.
///
/// Cloning yields another handle to the same registry. The hub is
/// single-threaded (`Rc`/`RefCell`) like everything else in the browser
/// event loop.
///
/// Listeners run after the new state is stored, so a listener may call
/// [`AuthHub::current`] or subscribe further without re-entrancy problems.
/// No ordering between listeners is guaranteed.
#[derive(Clone)]
pub struct AuthHub {
    inner: Rc<RefCell<HubInner>>,
}

impl AuthHub {
    /// Creates a hub in the `Unresolved` state.
    pub fn new() -> Self {
        Self::with_state(AuthSignal::Unresolved)
    }

    pub fn with_state(state: AuthSignal) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                state,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> AuthSignal {
        self.inner.borrow().state.clone()
    }

    /// Registers a listener invoked on every state change.
    pub fn subscribe(&self, listener: impl Fn(&AuthSignal) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Applies a state transition and notifies listeners.
    ///
    /// Returns `Ok(false)` when `next` equals the current state; nobody is
    /// notified in that case.
    pub fn publish(&self, next: AuthSignal) -> Result<bool, AuthError> {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == next {
                return Ok(false);
            }
            if inner.state.is_resolved() && !next.is_resolved() {
                log::warn!("rejected auth transition {} -> {}", inner.state, next);
                return Err(AuthError::Unresolve);
            }
            log::debug!("auth transition {} -> {}", inner.state, next);
            inner.state = next.clone();
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };

        for listener in listeners {
            listener(&next);
        }
        Ok(true)
    }
}

impl Default for AuthHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AuthHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AuthHub")
            .field("state", &inner.state)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
