//! Navigation bar component.
//!
//! Shows the auth-filtered navigation items, the user section (greeting and
//! sign-out, or login/register links) and, below the mobile breakpoint, a
//! collapsible menu driven by the shell controller.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use cdn_console_core::routes::PUBLIC_LANDING;
use cdn_console_core::{
    AuthSignal, NavItem, ShellController, greeting, is_active, nav_items, visible_items,
};

use crate::components::icons as ic;
use crate::components::router::HashNavigator;
use crate::config::{APP_NAME, MOBILE_QUERY};
use crate::models::Location;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Navigation bar.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Inline links and user section |
/// | Mobile (<= 768px) | Menu button; links and user section in a dropdown |
#[component]
pub fn Navbar(
    auth: Signal<AuthSignal>,
    location: Signal<Location>,
    shell: RwSignal<ShellController>,
    navigator: HashNavigator,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let is_mobile = use_media_query(MOBILE_QUERY);

    let all_items = nav_items();
    let items = Memo::new(move |_| auth.with(|a| visible_items(&all_items, a)));
    let menu_open = Memo::new(move |_| shell.with(|s| s.is_menu_open()));

    let on_select = Callback::new(move |path: &'static str| {
        shell.update(|s| s.select(path, &navigator));
    });
    let toggle_menu = move |_: leptos::ev::MouseEvent| shell.update(|s| s.toggle_menu());

    view! {
        <nav class=css::bar>
            <div class=css::content>
                <a
                    class=css::logo
                    href="#/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_select.run(PUBLIC_LANDING);
                    }
                >
                    <span>{APP_NAME}</span>
                </a>

                <Show when=move || !is_mobile.get()>
                    <div class=css::links>
                        <NavLinks items=items location=location on_select=on_select mobile=false />
                    </div>
                    <div class=css::userSection>
                        <UserSection auth=auth on_select=on_select on_sign_out=on_sign_out />
                    </div>
                </Show>

                <Show when=move || is_mobile.get()>
                    <button
                        class=css::menuButton
                        on:click=toggle_menu
                        title=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    >
                        {move || if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }}
                    </button>
                </Show>
            </div>

            <Show when=move || is_mobile.get() && menu_open.get()>
                <div class=css::mobileMenu>
                    <NavLinks items=items location=location on_select=on_select mobile=true />
                    <div class=css::mobileUserSection>
                        <UserSection auth=auth on_select=on_select on_sign_out=on_sign_out />
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Navigation links with exact-match active highlighting.
#[component]
fn NavLinks(
    items: Memo<Vec<NavItem>>,
    location: Signal<Location>,
    on_select: Callback<&'static str>,
    mobile: bool,
) -> impl IntoView {
    view! {
        <For
            each=move || items.get()
            key=|item| item.path
            children=move |item: NavItem| {
                let active = move || location.with(|l| is_active(&item, l.path()));
                let class = move || match (mobile, active()) {
                    (false, false) => css::link,
                    (false, true) => css::linkActive,
                    (true, false) => css::mobileLink,
                    (true, true) => css::mobileLinkActive,
                };
                view! {
                    <a
                        class=class
                        href=format!("#{}", item.path)
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_select.run(item.path);
                        }
                    >
                        <Icon icon=ic::for_path(item.path) />
                        {item.label}
                    </a>
                }
            }
        />
    }
}

/// Greeting and sign-out when signed in; login and register links otherwise.
///
/// Nothing is shown while the session is still resolving.
#[component]
fn UserSection(
    auth: Signal<AuthSignal>,
    on_select: Callback<&'static str>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let link = move |path: &'static str, label: &'static str, class: &'static str| {
        view! {
            <a
                class=class
                href=format!("#{path}")
                on:click=move |ev| {
                    ev.prevent_default();
                    on_select.run(path);
                }
            >
                {label}
            </a>
        }
    };

    move || match auth.get() {
        AuthSignal::Unresolved => ().into_any(),
        signed_in @ AuthSignal::Authenticated(_) => view! {
            <span class=css::greeting>{greeting(&signed_in)}</span>
            <button class=css::signOut on:click=move |_| on_sign_out.run(())>
                <Icon icon=ic::SIGN_OUT />
                "Logout"
            </button>
        }
        .into_any(),
        AuthSignal::Unauthenticated => view! {
            {link("/login", "Login", css::outlineButton)}
            {link("/register", "Register", css::primaryButton)}
        }
        .into_any(),
    }
}
