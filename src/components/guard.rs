//! Route guard component.
//!
//! Wraps a protected or guest-only page and mounts it only when the access
//! classifier says so. While the session resolves it shows a placeholder;
//! when the classifier redirects it mounts nothing and replaces the location.

use leptos::prelude::*;

use cdn_console_core::{Access, AuthSignal, classify, pending_redirect};

use crate::components::router::HashNavigator;

stylance::import_crate_style!(css, "src/app.module.css");

/// Access-gated page slot.
///
/// # Props
/// - `path`: route this guard belongs to; redirects only fire while it is current
/// - `requires_auth`: `true` for protected pages, `false` for guest-only pages
/// - `auth`: current auth state
/// - `navigator`: performs history-replacing redirects
#[component]
pub fn Guarded(
    path: &'static str,
    requires_auth: bool,
    auth: Signal<AuthSignal>,
    navigator: HashNavigator,
    children: ChildrenFn,
) -> impl IntoView {
    // Memo: the decision only propagates when it actually changes
    let access = Memo::new(move |_| auth.with(|a| classify(requires_auth, a)));

    Effect::new(move || {
        if let Some(redirect) = pending_redirect(access.get(), path, &navigator.current_path()) {
            log::debug!("guard on {path} redirecting to {}", redirect.to);
            redirect.perform(&navigator);
        }
    });

    view! {
        {move || match access.get() {
            Access::Render => children().into_any(),
            Access::Placeholder => view! {
                <div class=css::placeholder>"Loading..."</div>
            }
            .into_any(),
            Access::Redirect(_) => ().into_any(),
        }}
    }
}
