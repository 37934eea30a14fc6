//! Navigation items shown in the shell.

use crate::auth::{ANONYMOUS_NAME, AuthSignal};
use crate::routes::{ROUTES, RouteAccess, RouteSpec};

/// A navigation bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub auth_required: bool,
}

impl NavItem {
    fn from_route(route: &RouteSpec) -> Option<Self> {
        route.nav_label.map(|label| Self {
            path: route.path,
            label,
            auth_required: route.access == RouteAccess::Protected,
        })
    }

    pub fn is_visible(&self, auth: &AuthSignal) -> bool {
        !self.auth_required || auth.is_authenticated()
    }
}

/// All navigation items, in table order.
pub fn nav_items() -> Vec<NavItem> {
    ROUTES.iter().filter_map(NavItem::from_route).collect()
}

/// Items visible under `auth`.
///
/// Auth-required items only show for an authenticated user; while the
/// session is unresolved they stay hidden.
pub fn visible_items(items: &[NavItem], auth: &AuthSignal) -> Vec<NavItem> {
    items.iter().copied().filter(|i| i.is_visible(auth)).collect()
}

/// Exact path match. `/dashboard` is not active on `/dashboard/extra`.
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    item.path == current_path
}

/// Greeting for the user section, `None` unless signed in.
pub fn greeting(auth: &AuthSignal) -> Option<String> {
    let user = auth.user()?;
    let name = user.display_name.trim();
    let name = if name.is_empty() { ANONYMOUS_NAME } else { name };
    Some(format!("Welcome, {name}"))
}
