//! Preference slot contracts and adapters.
//!
//! The library persists exactly one value (the last selected theme), so the store contract is a
//! small synchronous key/value API over raw JSON text.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::Serialize;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads the raw JSON string stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw JSON string under `key`.
    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Deletes `key`.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that remembers nothing. Used when persistence is disabled or no host storage exists.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store.
///
/// Clones share the same backing map, so a clone handed to a second application instance
/// observes what the first one saved.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw value stored under `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serializes and saves a typed preference value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Mode {
        Light,
        Dark,
    }

    #[test]
    fn memory_store_clones_share_values() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();

        store.save_pref("woobat-theme", "\"dark\"").expect("save");
        assert_eq!(
            other.load_pref("woobat-theme").expect("load"),
            Some("\"dark\"".to_string())
        );

        other.delete_pref("woobat-theme").expect("delete");
        assert!(store.is_empty());
    }

    #[test]
    fn typed_save_stores_json_text() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        save_pref_with(store_obj, "mode", &Mode::Dark).expect("save typed");
        assert_eq!(store.raw("mode").as_deref(), Some("\"dark\""));
        save_pref_with(store_obj, "mode", &Mode::Light).expect("overwrite");
        assert_eq!(store.raw("mode").as_deref(), Some("\"light\""));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        assert_eq!(store.load_pref("k").expect("load"), None);
        store.save_pref("k", "{}").expect("save");
        assert_eq!(store.load_pref("k").expect("load"), None);
        store.delete_pref("k").expect("delete");
    }
}
