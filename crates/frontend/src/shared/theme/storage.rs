//! Key/value backends for persisted UI preferences.

use web_sys::window;

#[cfg(test)]
use std::{cell::RefCell, collections::HashMap};

/// Minimal string store used by [`super::PreferenceStore`].
///
/// Implementations never fail: an unavailable backend reads as empty and
/// drops writes.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("localStorage write of '{key}' failed: {e:?}");
                }
            }
            None => log::warn!("localStorage unavailable, '{key}' not persisted"),
        }
    }
}

/// In-memory storage for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.set(key, value);
        storage
    }
}

#[cfg(test)]
impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<S: PreferenceStorage> PreferenceStorage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
