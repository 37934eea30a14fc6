//! Static route table.
//!
//! Routes are compiled in and never change at runtime. Lookups are exact
//! after [`normalize_path`].

/// Public landing route. Also the catch-all redirect target.
pub const PUBLIC_LANDING: &str = "/";

/// Where unauthenticated users are sent from protected routes.
pub const SIGN_IN: &str = "/login";

/// Where authenticated users are sent from guest-only routes.
pub const AUTHENTICATED_LANDING: &str = "/dashboard";

/// Access class of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Renders for everyone; not wrapped by the classifier.
    Open,
    /// Sign-in and registration pages. Signed-in users are bounced away.
    GuestOnly,
    /// Requires a signed-in user.
    Protected,
}

impl RouteAccess {
    /// The classifier's `requires_auth` input, or `None` for open routes.
    pub fn requires_auth(self) -> Option<bool> {
        match self {
            Self::Open => None,
            Self::GuestOnly => Some(false),
            Self::Protected => Some(true),
        }
    }
}

/// A navigable path and its access class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub access: RouteAccess,
    /// Label shown in the navigation bar, if the route has an entry there.
    pub nav_label: Option<&'static str>,
}

impl RouteSpec {
    const fn new(
        path: &'static str,
        access: RouteAccess,
        nav_label: Option<&'static str>,
    ) -> Self {
        Self {
            path,
            access,
            nav_label,
        }
    }

    pub fn requires_auth(&self) -> Option<bool> {
        self.access.requires_auth()
    }
}

/// Every route the console knows, in navigation order.
pub static ROUTES: &[RouteSpec] = &[
    RouteSpec::new("/", RouteAccess::Open, None),
    RouteSpec::new("/login", RouteAccess::GuestOnly, None),
    RouteSpec::new("/register", RouteAccess::GuestOnly, None),
    RouteSpec::new("/dashboard", RouteAccess::Protected, Some("Dashboard")),
    RouteSpec::new("/upload", RouteAccess::Protected, Some("Upload")),
    RouteSpec::new("/library", RouteAccess::Protected, Some("Library")),
    RouteSpec::new("/analytics", RouteAccess::Protected, Some("Analytics")),
    RouteSpec::new("/profile", RouteAccess::Protected, Some("Profile")),
];

/// Canonical form of a location path.
///
/// Empty becomes `/`, a leading slash is ensured and a single trailing slash
/// is dropped (except for the root itself).
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let body = trimmed.trim_start_matches('/');
    if body.is_empty() {
        return PUBLIC_LANDING.to_string();
    }
    let body = body.strip_suffix('/').unwrap_or(body);
    format!("/{body}")
}

/// Whether two location paths name the same route.
///
/// Trailing slashes are ignored and ASCII letters compare case-insensitively.
pub fn same_path(a: &str, b: &str) -> bool {
    normalize_path(a).eq_ignore_ascii_case(&normalize_path(b))
}

/// Finds the route for `path`, or `None` for the catch-all.
pub fn resolve(path: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|r| same_path(r.path, path))
}
