//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash, including the '#' prefix if present.
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix. Fires `hashchange`.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix. Does not fire `hashchange`;
/// callers update their own location state.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

/// Register a `hashchange` listener for the lifetime of the page.
///
/// # Note
/// The closure is intentionally leaked using `forget()` since this is a
/// single-page application where the listener should persist for the
/// entire lifetime of the page.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn on_hash_change(callback: impl Fn() + 'static) {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn()>);

    if let Some(window) = window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
