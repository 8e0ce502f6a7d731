//! Loading dictionaries from TOML files
//!
//! ```toml
//! [settings]
//! mode = "production"
//! active = "custom"
//!
//! [dictionaries.default]
//! key = "KEY"
//! relation = "RELATION {key}"
//!
//! [dictionaries.custom]
//! key = "key"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::Dictionary;
use crate::config::Mode;
use crate::error::TextError;

/// Parsed contents of a dictionary file
#[derive(Debug, Clone, Default)]
pub struct DictionaryFile {
    /// Mode requested by the file, if any
    pub mode: Option<Mode>,
    /// Dictionary to select after loading, if any
    pub active: Option<String>,
    pub dictionaries: Vec<Dictionary>,
}

/// TOML structure for deserializing dictionary files
#[derive(Deserialize)]
struct TomlDictionaryFile {
    settings: Option<TomlSettings>,
    #[serde(default)]
    dictionaries: HashMap<String, HashMap<String, String>>,
}

#[derive(Deserialize)]
struct TomlSettings {
    mode: Option<Mode>,
    active: Option<String>,
}

impl DictionaryFile {
    /// Load a dictionary file from disk
    pub fn from_file(path: &Path) -> Result<Self, TextError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a dictionary file from a TOML string
    pub fn from_str(content: &str) -> Result<Self, TextError> {
        let parsed: TomlDictionaryFile = toml::from_str(content)?;

        let mut dictionaries: Vec<Dictionary> = parsed
            .dictionaries
            .into_iter()
            .map(|(key, entries)| Dictionary::new(key, entries))
            .collect();
        dictionaries.sort_by(|a, b| a.key().cmp(b.key()));

        Ok(DictionaryFile {
            mode: parsed.settings.as_ref().and_then(|s| s.mode),
            active: parsed.settings.and_then(|s| s.active),
            dictionaries,
        })
    }
}
