//! Client-side persistence of the chosen language.
//!
//! Browser builds use `localStorage`; native builds (tests, tooling) keep the
//! value in a thread-local map so the same code paths run everywhere.

use std::cell::RefCell;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend (storage disabled, private mode, no window).
    #[error("client storage is unavailable")]
    Unavailable,

    /// The backend rejected the write (quota, security policy).
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// A single persisted preference value.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Preference stored under a fixed key in the platform's client storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, value)
            .map_err(|err| StorageError::Write {
                key: self.key.clone(),
                reason: format!("{err:?}"),
            })
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static NATIVE_STORE: RefCell<std::collections::HashMap<String, String>> =
        RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Option<String> {
        NATIVE_STORE.with(|store| store.borrow().get(&self.key).cloned())
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        NATIVE_STORE.with(|store| {
            store
                .borrow_mut()
                .insert(self.key.clone(), value.to_string());
        });
        Ok(())
    }
}

/// In-memory preference (one value).
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        self.value.replace(Some(value.to_string()));
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn browser_storage_round_trips_per_key() {
        let lang = BrowserStorage::new("neoncolor-lang-test");
        let other = BrowserStorage::new("other-key-test");
        assert_eq!(lang.load(), None);

        lang.save("en").unwrap();
        assert_eq!(lang.load().as_deref(), Some("en"));
        assert_eq!(other.load(), None);
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::with_value("ar");
        store.save("en").unwrap();
        assert_eq!(store.load().as_deref(), Some("en"));
    }
}
