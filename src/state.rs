//! Everything the dashboard renders from, and the single place it changes.

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::models::{AvatarSource, NotificationList, SettingsUpdate, ShellAction, ShellState};
use crate::services::session::SessionController;
use crate::services::storage::SessionStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Shell(ShellAction),
    Search(String),
    Login { username: String, email: String },
    Logout,
    UpdateSettings(SettingsUpdate),
    SetAvatar(AvatarSource),
    MarkRead(u32),
    MarkAllRead,
    DeleteNotification(u32),
    ClearNotifications,
}

/// What a successful action did to the session, for user feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    LoggedIn(String),
    LoggedOut,
    SettingsSaved,
}

pub struct DashboardState {
    pub session: SessionController,
    pub notifications: NotificationList,
    pub shell: ShellState,
    pub query: String,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig, store: SessionStore) -> Self {
        Self {
            session: SessionController::restore(store),
            notifications: NotificationList::seeded(config.seed_notifications.as_slice()),
            shell: ShellState::default(),
            query: String::new(),
        }
    }

    /// Applies `action`. On error nothing has changed.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, DashboardError> {
        match action {
            Action::Shell(action) => {
                log::debug!("shell action {:?}", action);
                self.shell.apply(action, self.session.is_logged_in())?;
            }
            Action::Search(query) => self.query = query,
            Action::Login { username, email } => {
                let name = self.session.login(&username, &email)?.username.clone();
                self.shell.logged_in();
                return Ok(Outcome::LoggedIn(name));
            }
            Action::Logout => {
                self.session.logout();
                self.shell.logged_out();
                return Ok(Outcome::LoggedOut);
            }
            Action::UpdateSettings(update) => {
                self.session.update_settings(&update)?;
                self.shell.apply(ShellAction::CloseSettings, true)?;
                return Ok(Outcome::SettingsSaved);
            }
            Action::SetAvatar(source) => {
                self.session.set_avatar(source)?;
            }
            Action::MarkRead(id) => {
                self.notifications.mark_read(id);
            }
            Action::MarkAllRead => {
                self.notifications.mark_all_read();
            }
            Action::DeleteNotification(id) => {
                self.notifications.delete(id);
            }
            Action::ClearNotifications => {
                self.notifications.clear_all();
            }
        }
        Ok(Outcome::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::{PreconditionError, ValidationError};
    use crate::services::storage::{KeyValueStore, MemoryStore};
    use pretty_assertions::assert_eq;

    fn dashboard() -> (MemoryStore, DashboardState) {
        let config = DashboardConfig::default();
        let backend = MemoryStore::default();
        let store = SessionStore::new(Rc::new(backend.clone()), config.storage_key.clone());
        (backend, DashboardState::new(&config, store))
    }

    fn login(name: &str, email: &str) -> Action {
        Action::Login {
            username: name.into(),
            email: email.into(),
        }
    }

    /// Logged in exactly when a user is persisted, and the persisted user
    /// is the one in memory.
    fn assert_session_invariant(backend: &MemoryStore, state: &DashboardState) {
        let key = DashboardConfig::default().storage_key;
        let persisted = SessionStore::new(Rc::new(backend.clone()), key).load();
        assert_eq!(persisted.is_some(), state.session.is_logged_in());
        assert_eq!(persisted.as_ref(), state.session.user());
    }

    #[test]
    fn starts_logged_out_with_default_shell() {
        let (_, state) = dashboard();
        assert!(!state.session.is_logged_in());
        assert_eq!(state.shell, ShellState::default());
        assert_eq!(state.notifications.unread_count(), 3);
    }

    #[test]
    fn restores_persisted_session() {
        let (backend, mut state) = dashboard();
        state.apply(login("alice", "alice@x.com")).unwrap();

        let config = DashboardConfig::default();
        let store = SessionStore::new(Rc::new(backend), config.storage_key.clone());
        let restored = DashboardState::new(&config, store);
        assert!(restored.session.is_logged_in());
        assert_eq!(restored.session.user(), state.session.user());
        assert_eq!(restored.shell, ShellState::default());
    }

    #[test]
    fn login_closes_modal() {
        let (backend, mut state) = dashboard();
        state.apply(Action::Shell(ShellAction::OpenLogin)).unwrap();

        let outcome = state.apply(login("alice", "alice@x.com")).unwrap();

        assert_eq!(outcome, Outcome::LoggedIn("alice".into()));
        assert!(!state.shell.login_modal_open);
        assert!(backend
            .get(&DashboardConfig::default().storage_key)
            .is_some());
        assert_session_invariant(&backend, &state);
    }

    #[test]
    fn failed_login_leaves_modal_open() {
        let (backend, mut state) = dashboard();
        state.apply(Action::Shell(ShellAction::OpenLogin)).unwrap();

        let err = state.apply(login("", "bad-email")).unwrap_err();

        assert_eq!(err, DashboardError::Validation(ValidationError::EmptyUsername));
        assert!(state.shell.login_modal_open);
        assert!(!state.session.is_logged_in());
        assert_session_invariant(&backend, &state);
    }

    #[test]
    fn settings_while_logged_out_is_rejected() {
        let (backend, mut state) = dashboard();
        let update = SettingsUpdate {
            username: Some("mallory".into()),
            avatar: None,
        };
        let err = state.apply(Action::UpdateSettings(update)).unwrap_err();
        assert_eq!(err, DashboardError::Precondition(PreconditionError::NotLoggedIn));
        assert!(state.session.user().is_none());
        assert_session_invariant(&backend, &state);
    }

    #[test]
    fn saving_settings_closes_modal() {
        let (backend, mut state) = dashboard();
        state.apply(login("alice", "alice@x.com")).unwrap();
        state.apply(Action::Shell(ShellAction::OpenSettings)).unwrap();

        let update = SettingsUpdate {
            username: Some("alice2".into()),
            avatar: None,
        };
        assert_eq!(
            state.apply(Action::UpdateSettings(update)).unwrap(),
            Outcome::SettingsSaved
        );
        assert!(!state.shell.settings_modal_open);
        assert_eq!(state.session.user().map(|u| u.email.as_str()), Some("alice@x.com"));
        assert_session_invariant(&backend, &state);
    }

    #[test]
    fn logout_closes_settings() {
        let (backend, mut state) = dashboard();
        state.apply(login("alice", "alice@x.com")).unwrap();
        state.apply(Action::Shell(ShellAction::OpenSettings)).unwrap();

        state.apply(Action::Logout).unwrap();

        assert!(!state.shell.settings_modal_open);
        assert_session_invariant(&backend, &state);
    }

    #[test]
    fn notification_walkthrough() {
        let (_, mut state) = dashboard();
        assert_eq!(state.notifications.unread_count(), 3);
        state.apply(Action::MarkRead(1)).unwrap();
        assert_eq!(state.notifications.unread_count(), 2);
        state.apply(Action::ClearNotifications).unwrap();
        assert!(state.notifications.is_empty());
        assert_eq!(state.notifications.unread_count(), 0);
    }
}
