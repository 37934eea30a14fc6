//! Page bodies.
//!
//! Content pages are placeholders: the console's real dashboards, upload
//! flow and library are served by other teams' views. The sign-in and
//! registration pages drive the local session so guarded routes can be
//! exercised end to end.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Page view for a route path. Unknown paths render nothing.
pub fn page(path: &str, on_sign_in: Callback<String>) -> AnyView {
    match path {
        "/" => view! {
            <PageFrame title="Content Delivery Console">
                "Upload, organize and track delivery of your media."
            </PageFrame>
        }
        .into_any(),
        "/login" => view! {
            <SignInForm title="Sign in" action="Login" on_sign_in=on_sign_in />
        }
        .into_any(),
        "/register" => view! {
            <SignInForm title="Create an account" action="Register" on_sign_in=on_sign_in />
        }
        .into_any(),
        "/dashboard" => {
            view! { <PageFrame title="Dashboard">"Delivery overview."</PageFrame> }.into_any()
        }
        "/upload" => {
            view! { <PageFrame title="Upload">"Publish new content."</PageFrame> }.into_any()
        }
        "/library" => {
            view! { <PageFrame title="Library">"Your content."</PageFrame> }.into_any()
        }
        "/analytics" => {
            view! { <PageFrame title="Analytics">"Traffic and cache metrics."</PageFrame> }.into_any()
        }
        "/profile" => {
            view! { <PageFrame title="Profile">"Account settings."</PageFrame> }.into_any()
        }
        _ => ().into_any(),
    }
}

#[component]
fn PageFrame(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>{title}</h1>
            <p class=css::body>{children()}</p>
        </section>
    }
}

/// Name-only sign-in form used by both guest pages.
#[component]
fn SignInForm(
    title: &'static str,
    action: &'static str,
    on_sign_in: Callback<String>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let can_submit = Memo::new(move |_| name.with(|n| !n.trim().is_empty()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if can_submit.get_untracked() {
            on_sign_in.run(name.get_untracked());
        }
    };

    view! {
        <section class=css::page>
            <h1 class=css::title>{title}</h1>
            <form class=css::form on:submit=submit>
                <input
                    class=css::input
                    type="text"
                    placeholder="Display name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button class=css::submit type="submit" disabled=move || !can_submit.get()>
                    {action}
                </button>
            </form>
        </section>
    }
}
