//! Layout flags of the dashboard shell.
//!
//! Every flag changes only through a [`ShellAction`]. Session-dependent
//! guards take the current login status as an argument so the shell never
//! holds its own copy of it.

use crate::error::PreconditionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuKey {
    #[default]
    Home,
    About,
    Contact,
}

impl MenuKey {
    pub const ALL: [MenuKey; 3] = [MenuKey::Home, MenuKey::About, MenuKey::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::About => "ℹ️",
            Self::Contact => "📞",
        }
    }

    /// Trailing breadcrumb segment shown after "Home".
    pub fn crumb(self) -> &'static str {
        match self {
            Self::Home => "Dashboard",
            other => other.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    ToggleSidebar,
    ToggleTheme,
    OpenLogin,
    CloseLogin,
    OpenSettings,
    CloseSettings,
    Select(MenuKey),
}

/// Starts expanded, light, with both modals closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub collapsed: bool,
    pub dark_mode: bool,
    pub login_modal_open: bool,
    pub settings_modal_open: bool,
    pub selected: MenuKey,
}

impl ShellState {
    /// Applies a UI action. The login modal only opens while logged out and
    /// the settings modal only while logged in.
    pub fn apply(&mut self, action: ShellAction, logged_in: bool) -> Result<(), PreconditionError> {
        match action {
            ShellAction::ToggleSidebar => self.collapsed = !self.collapsed,
            ShellAction::ToggleTheme => self.dark_mode = !self.dark_mode,
            ShellAction::OpenLogin if logged_in => return Err(PreconditionError::AlreadyLoggedIn),
            ShellAction::OpenLogin => self.login_modal_open = true,
            ShellAction::CloseLogin => self.login_modal_open = false,
            ShellAction::OpenSettings if !logged_in => return Err(PreconditionError::NotLoggedIn),
            ShellAction::OpenSettings => self.settings_modal_open = true,
            ShellAction::CloseSettings => self.settings_modal_open = false,
            ShellAction::Select(key) => self.selected = key,
        }
        Ok(())
    }

    pub(crate) fn logged_in(&mut self) {
        self.login_modal_open = false;
    }

    pub(crate) fn logged_out(&mut self) {
        self.settings_modal_open = false;
    }
}
