//! Navigation shell state.
//!
//! The shell owns one piece of UI state, whether the mobile menu is open,
//! and the sign-out flow. Everything else it shows is derived from the auth
//! signal and the current location (see [`crate::nav`]).

use crate::access::{HistoryMode, Navigator};
use crate::auth::AuthSource;
use crate::routes::PUBLIC_LANDING;

/// Mobile menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Shell state machine.
///
/// Transitions:
/// - `toggle_menu`: `Closed <-> Open`
/// - `navigated`, `select`, `sign_out`: always `Closed`
/// - `location_changed`: `Closed` when the path differs from the previous one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellController {
    menu: MenuState,
}

impl ShellController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Menu button activation.
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    /// Called for every completed navigation, including classifier redirects.
    pub fn navigated(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Observes the current location path.
    ///
    /// `previous` is the last path observed, `None` on the first call. Any
    /// change of path counts as a completed navigation, whoever caused it.
    pub fn location_changed(&mut self, previous: Option<&str>, current: &str) {
        if previous.is_some_and(|p| p != current) {
            self.navigated();
        }
    }

    /// Navigation item (or user-section link) activation.
    pub fn select(&mut self, path: &str, navigator: &dyn Navigator) {
        navigator.navigate(path, HistoryMode::Push);
        self.navigated();
    }

    /// Signs out and returns to the public landing page.
    ///
    /// The landing navigation and menu close happen even if the source
    /// reports a failure.
    pub fn sign_out(&mut self, source: &dyn AuthSource, navigator: &dyn Navigator) {
        if let Err(e) = source.sign_out() {
            log::warn!("sign-out failed, continuing to landing page: {e}");
        }
        navigator.navigate(PUBLIC_LANDING, HistoryMode::Push);
        self.navigated();
    }
}
