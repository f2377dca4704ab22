//! Key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only value the site persists. State types take
//! a `PreferenceStore` so the browser build writes through to `localStorage`
//! while native tests run against an in-memory map.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage that is missing, full, or blocked by
//! privacy settings degrades to "nothing stored" rather than an error.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::collections::HashMap;

/// A string key/value store for user preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str);
}

/// Browser `localStorage`. Off-browser builds read nothing and write nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::debug!("localStorage unavailable; {key} not persisted");
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("failed to persist {key}: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store that also counts writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Store seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_owned(), value.to_owned());
        Self { items, writes: 0 }
    }

    /// Number of `save` calls since construction.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
    }
}
