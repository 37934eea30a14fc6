//! localStorage-backed auth source.
//!
//! Stands in for the platform's session service: it remembers who signed in
//! and feeds transitions into an [`AuthHub`]. Token handling and validation
//! belong to the real service, not here.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use cdn_console_core::{AuthHub, AuthSignal, AuthSource, AuthUser, SignOutError};

use crate::config::{SESSION_BOOTSTRAP_MS, SESSION_KEY};
use crate::core::error::SessionError;
use crate::utils::dom;

/// Read the stored user, if any.
fn load_user() -> Result<Option<AuthUser>, SessionError> {
    let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
    let Some(json) = storage.get_item(SESSION_KEY).ok().flatten() else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&json)?))
}

fn save_user(user: &AuthUser) -> Result<(), SessionError> {
    let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
    let json = serde_json::to_string(user)?;
    storage
        .set_item(SESSION_KEY, &json)
        .map_err(|_| SessionError::WriteFailed)
}

fn clear_user() -> Result<(), SessionError> {
    let storage = dom::local_storage().ok_or(SessionError::StorageUnavailable)?;
    storage
        .remove_item(SESSION_KEY)
        .map_err(|_| SessionError::WriteFailed)
}

/// Resolved state for a load result. Any failure counts as signed out.
fn resolve(loaded: Result<Option<AuthUser>, SessionError>) -> AuthSignal {
    match loaded {
        Ok(Some(user)) => AuthSignal::Authenticated(user),
        Ok(None) => AuthSignal::Unauthenticated,
        Err(e) => {
            log::warn!("session restore failed: {e}");
            AuthSignal::Unauthenticated
        }
    }
}

/// Browser session source.
#[derive(Clone, Debug, Default)]
pub struct LocalSession {
    hub: AuthHub,
}

impl LocalSession {
    /// Creates an unresolved session. Call [`bootstrap`](Self::bootstrap) once.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hub(&self) -> &AuthHub {
        &self.hub
    }

    /// Resolves the stored session after one timer tick.
    pub fn bootstrap(&self) {
        let hub = self.hub.clone();
        spawn_local(async move {
            TimeoutFuture::new(SESSION_BOOTSTRAP_MS).await;
            let state = resolve(load_user());
            log::info!("session resolved: {state}");
            if let Err(e) = hub.publish(state) {
                log::warn!("session bootstrap ignored: {e}");
            }
        });
    }

    /// Signs in as `display_name` and persists the record.
    ///
    /// The in-memory state changes even if persistence fails; the session
    /// then simply does not survive a reload.
    pub fn sign_in(&self, display_name: &str) {
        let user = AuthUser::new(display_name.trim());
        if let Err(e) = save_user(&user) {
            log::warn!("could not persist session: {e}");
        }
        if let Err(e) = self.hub.publish(AuthSignal::Authenticated(user)) {
            log::warn!("sign-in ignored: {e}");
        }
    }
}

impl AuthSource for LocalSession {
    fn current(&self) -> AuthSignal {
        self.hub.current()
    }

    fn sign_out(&self) -> Result<(), SignOutError> {
        let cleared = clear_user();
        if let Err(e) = self.hub.publish(AuthSignal::Unauthenticated) {
            log::warn!("sign-out transition ignored: {e}");
        }
        cleared.map_err(SignOutError::from)
    }
}
