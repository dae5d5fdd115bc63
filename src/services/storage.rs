//! Persistent client storage for the session record.
//!
//! [`KeyValueStore`] is the only contact point with the browser; the session
//! controller receives a [`SessionStore`] rather than reaching for
//! `window.localStorage` itself.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreError;
use crate::models::User;

/// Synchronous get/set/remove by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write(format!("{:?}", err)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(err) = storage.remove_item(key) {
                log::warn!("could not remove `{}` from storage: {:?}", key, err);
            }
        }
    }
}

/// Map-backed store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads and writes the JSON-encoded [`User`] under one key.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Missing and undecodable records both read as `None`. An undecodable
    /// record is removed so storage matches the logged-out state.
    pub fn load(&self) -> Option<User> {
        let raw = self.backend.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("discarding unreadable session record: {}", err);
                self.backend.remove(&self.key);
                None
            }
        }
    }

    pub fn save(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.backend.set(&self.key, &raw)
    }

    pub fn clear(&self) {
        self.backend.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KEY: &str = "session";

    fn store() -> (MemoryStore, SessionStore) {
        let backend = MemoryStore::default();
        let store = SessionStore::new(Rc::new(backend.clone()), KEY);
        (backend, store)
    }

    fn alice() -> User {
        User {
            username: "alice".into(),
            email: "alice@x.com".into(),
            avatar: None,
        }
    }

    #[test]
    fn save_then_load() {
        let (_, store) = store();
        store.save(&alice()).unwrap();
        assert_eq!(store.load(), Some(alice()));
    }

    #[test]
    fn missing_record_is_logged_out() {
        let (_, store) = store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_record_is_discarded() {
        let (backend, store) = store();
        backend.set(KEY, "{not json").unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(backend.get(KEY), None);
    }

    #[test]
    fn clear_removes_record() {
        let (backend, store) = store();
        store.save(&alice()).unwrap();
        store.clear();
        assert_eq!(backend.get(KEY), None);
    }
}
