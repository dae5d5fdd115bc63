use crate::error::{DashboardError, PreconditionError};
use crate::models::{AvatarSource, SettingsUpdate, User};
use crate::services::storage::SessionStore;

/// Owns the current [`User`] and writes every change through to the store.
/// A change the store rejects is not applied in memory either.
///
/// Logged in exactly when `user()` is `Some`.
pub struct SessionController {
    store: SessionStore,
    user: Option<User>,
}

impl SessionController {
    /// Restores whatever session the store holds.
    pub fn restore(store: SessionStore) -> Self {
        let user = store.load();
        if let Some(user) = &user {
            log::info!("restored session for {}", user.username);
        }
        Self { store, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, username: &str, email: &str) -> Result<&User, DashboardError> {
        let user = User::from_login(username, email)?;
        let user = self.commit(user)?;
        log::info!("logged in as {}", user.username);
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("logged out {}", user.username);
        }
        self.store.clear();
    }

    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<&User, DashboardError> {
        let current = self.user.as_ref().ok_or(PreconditionError::NotLoggedIn)?;
        let user = update.merge(current)?;
        let user = self.commit(user)?;
        log::info!("saved settings for {}", user.username);
        Ok(user)
    }

    /// Replaces the avatar. Uploads apply in completion order, so the last
    /// read to finish wins.
    pub fn set_avatar(&mut self, source: AvatarSource) -> Result<&User, DashboardError> {
        if !self.is_logged_in() {
            return Err(PreconditionError::NotLoggedIn.into());
        }
        let update = SettingsUpdate {
            username: None,
            avatar: Some(source.into_avatar()?),
        };
        self.update_settings(&update)
    }

    fn commit(&mut self, user: User) -> Result<&User, DashboardError> {
        if let Err(err) = self.store.save(&user) {
            log::error!("session not persisted: {}", err);
            return Err(err.into());
        }
        Ok(self.user.insert(user))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::error::{StoreError, ValidationError};
    use crate::services::storage::{KeyValueStore, MemoryStore};
    use pretty_assertions::assert_eq;

    const KEY: &str = "session";

    fn controller() -> (MemoryStore, SessionController) {
        let backend = MemoryStore::default();
        let store = SessionStore::new(Rc::new(backend.clone()), KEY);
        (backend, SessionController::restore(store))
    }

    fn reload(backend: &MemoryStore) -> SessionController {
        SessionController::restore(SessionStore::new(Rc::new(backend.clone()), KEY))
    }

    #[test]
    fn login_persists_user() {
        let (backend, mut session) = controller();
        assert!(!session.is_logged_in());

        session.login("alice", "alice@x.com").unwrap();

        assert!(session.is_logged_in());
        let expected = User {
            username: "alice".into(),
            email: "alice@x.com".into(),
            avatar: None,
        };
        assert_eq!(reload(&backend).user(), Some(&expected));
        assert_eq!(session.user(), Some(&expected));
    }

    #[test]
    fn invalid_login_changes_nothing() {
        let (backend, mut session) = controller();
        let err = session.login("", "bad-email").unwrap_err();
        assert_eq!(err, DashboardError::Validation(ValidationError::EmptyUsername));
        assert!(!session.is_logged_in());
        assert_eq!(backend.get(KEY), None);
    }

    #[test]
    fn update_settings_keeps_email() {
        let (backend, mut session) = controller();
        session.login("alice", "alice@x.com").unwrap();

        let update = SettingsUpdate {
            username: Some("alice2".into()),
            avatar: None,
        };
        let user = session.update_settings(&update).unwrap().clone();

        assert_eq!(user.username, "alice2");
        assert_eq!(user.email, "alice@x.com");
        assert_eq!(reload(&backend).user(), Some(&user));
    }

    #[test]
    fn update_settings_requires_login() {
        let (backend, mut session) = controller();
        let update = SettingsUpdate {
            username: Some("alice2".into()),
            avatar: None,
        };
        assert_eq!(
            session.update_settings(&update).unwrap_err(),
            DashboardError::Precondition(PreconditionError::NotLoggedIn)
        );
        assert!(session.user().is_none());
        assert_eq!(backend.get(KEY), None);
    }

    #[test]
    fn set_avatar_requires_login_even_for_bad_source() {
        let (_, mut session) = controller();
        let err = session
            .set_avatar(AvatarSource::Preset(String::new()))
            .unwrap_err();
        assert_eq!(err, DashboardError::Precondition(PreconditionError::NotLoggedIn));
    }

    #[test]
    fn later_upload_overwrites_earlier_one() {
        let (backend, mut session) = controller();
        session.login("alice", "alice@x.com").unwrap();
        session
            .set_avatar(AvatarSource::Preset("avatars/sam.svg".into()))
            .unwrap();
        session
            .set_avatar(AvatarSource::Upload {
                mime: "image/gif".into(),
                bytes: vec![0x47, 0x49, 0x46],
            })
            .unwrap();

        let stored = reload(&backend);
        assert_eq!(
            stored.user().and_then(|u| u.avatar.as_deref()),
            Some("data:image/gif;base64,R0lG")
        );
    }

    /// Memory store whose writes can be switched off.
    #[derive(Clone, Default)]
    struct Flaky {
        inner: MemoryStore,
        refuse: Rc<Cell<bool>>,
    }

    impl KeyValueStore for Flaky {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.refuse.get() {
                return Err(StoreError::Write("QuotaExceededError".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    fn flaky_controller() -> (Flaky, SessionController) {
        let backend = Flaky::default();
        let store = SessionStore::new(Rc::new(backend.clone()), KEY);
        (backend, SessionController::restore(store))
    }

    #[test]
    fn rejected_write_leaves_settings_untouched() {
        let (backend, mut session) = flaky_controller();
        session.login("alice", "alice@x.com").unwrap();
        backend.refuse.set(true);

        let update = SettingsUpdate {
            username: Some("alice2".into()),
            avatar: None,
        };
        let err = session.update_settings(&update).unwrap_err();

        assert!(matches!(err, DashboardError::Store(_)));
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("alice"));
        assert_eq!(reload(&backend.inner).user(), session.user());
    }

    #[test]
    fn rejected_write_keeps_login_logged_out() {
        let (backend, mut session) = flaky_controller();
        backend.refuse.set(true);

        assert!(matches!(
            session.login("alice", "alice@x.com"),
            Err(DashboardError::Store(_))
        ));
        assert!(!session.is_logged_in());
        assert_eq!(backend.get(KEY), None);
    }

    #[test]
    fn store_errors_surface_their_cause() {
        let err = DashboardError::from(StoreError::Unavailable);
        assert_eq!(
            err.to_string(),
            "session not saved: client storage is not available"
        );
    }

    #[test]
    fn logout_clears_store() {
        let (backend, mut session) = controller();
        session.login("alice", "alice@x.com").unwrap();
        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(backend.get(KEY), None);
        assert!(!reload(&backend).is_logged_in());
    }
}
