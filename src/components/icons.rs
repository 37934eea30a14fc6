//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Analytics, LuFolderOpen as Library, LuHouse as Dashboard,
        LuLogOut as SignOut, LuMenu as Menu, LuUpload as Upload, LuUser as Profile,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBarChart as Analytics, BsBoxArrowRight as SignOut, BsCloudArrowUp as Upload,
        BsFolder2Open as Library, BsHouseFill as Dashboard, BsList as Menu,
        BsPersonCircle as Profile, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(UPLOAD, Upload);
themed_icon!(LIBRARY, Library);
themed_icon!(ANALYTICS, Analytics);
themed_icon!(PROFILE, Profile);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(SIGN_OUT, SignOut);

/// Icon for a navigation item.
pub fn for_path(path: &str) -> Icon {
    match path {
        "/upload" => UPLOAD,
        "/library" => LIBRARY,
        "/analytics" => ANALYTICS,
        "/profile" => PROFILE,
        _ => DASHBOARD,
    }
}
