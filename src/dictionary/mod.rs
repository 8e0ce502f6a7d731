//! Dictionaries for key-based text lookup
//!
//! A [`Dictionary`] is an immutable table of templates. Several of them live
//! in a [`DictionaryManager`], one of which is active at a time. The
//! dictionary stored under [`DEFAULT`] is the fallback for keys the active
//! dictionary lacks.

mod loader;
mod manager;

pub use loader::DictionaryFile;
pub use manager::DictionaryManager;

use std::collections::HashMap;

/// Key of the fallback dictionary
pub const DEFAULT: &str = "default";

/// An immutable key to template mapping
///
/// Entries whose value is the empty string are treated exactly like missing
/// entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    key: String,
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new<K, V>(key: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT
    }

    /// Check if the dictionary holds a non-empty value for `key`
    pub fn has_value(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Get the template stored under `key`
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
