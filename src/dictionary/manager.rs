//! Storage for named dictionaries and the active selection

use std::collections::HashMap;

use super::{Dictionary, DEFAULT};
use crate::error::{DiagnosticKind, TextError};

/// Holds every installed dictionary plus the key of the active one
#[derive(Debug, Clone)]
pub struct DictionaryManager {
    dictionaries: HashMap<String, Dictionary>,
    active: String,
}

impl Default for DictionaryManager {
    fn default() -> Self {
        Self {
            dictionaries: HashMap::new(),
            active: DEFAULT.to_string(),
        }
    }
}

impl DictionaryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a dictionary under its own key, replacing any previous one
    pub fn insert(&mut self, dictionary: Dictionary) {
        self.dictionaries
            .insert(dictionary.key().to_string(), dictionary);
    }

    pub fn get(&self, key: &str) -> Option<&Dictionary> {
        self.dictionaries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.dictionaries.contains_key(key)
    }

    /// The dictionary under the active key, if one is installed
    pub fn active(&self) -> Option<&Dictionary> {
        self.get(&self.active)
    }

    pub fn active_key(&self) -> &str {
        &self.active
    }

    /// Select the active dictionary
    ///
    /// Unknown keys leave the selection unchanged.
    pub fn set_active(&mut self, key: &str) -> Result<(), DiagnosticKind> {
        if !self.contains(key) {
            return Err(DiagnosticKind::UnknownDictionary {
                key: key.to_string(),
            });
        }
        self.active = key.to_string();
        Ok(())
    }

    /// Get all installed dictionary keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(|s| s.as_str())
    }

    /// Find the template for `key`
    ///
    /// Lookup order:
    /// 1. The active dictionary, or the default one if nothing is installed
    ///    under the active key
    /// 2. The default dictionary, if the first one lacks the key
    pub fn find(&self, key: &str) -> Result<&str, DiagnosticKind> {
        let dictionary = self
            .active()
            .or_else(|| self.get(DEFAULT))
            .ok_or(DiagnosticKind::NoDictionary)?;

        if let Some(value) = dictionary.value(key) {
            return Ok(value);
        }

        if !dictionary.is_default() {
            if let Some(value) = self.get(DEFAULT).and_then(|d| d.value(key)) {
                return Ok(value);
            }
            if let Some(default) = self.get(DEFAULT) {
                return Err(missing(key, default));
            }
        }

        Err(missing(key, dictionary))
    }

    /// Find the template for `key` in one named dictionary, without fallback
    ///
    /// The outer `Err` means the dictionary itself is not installed.
    pub fn find_in(
        &self,
        dictionary_key: &str,
        key: &str,
    ) -> Result<Result<&str, DiagnosticKind>, TextError> {
        let dictionary = self
            .get(dictionary_key)
            .ok_or_else(|| TextError::UnknownDictionary {
                key: dictionary_key.to_string(),
            })?;

        Ok(dictionary.value(key).ok_or_else(|| missing(key, dictionary)))
    }
}

fn missing(key: &str, dictionary: &Dictionary) -> DiagnosticKind {
    DiagnosticKind::MissingKey {
        key: key.to_string(),
        dictionary: dictionary.key().to_string(),
    }
}
