//! Operating mode and formatter configuration

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Operating mode
///
/// Only affects diagnostic emission and the value `get` returns for a
/// missing key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Diagnostics are logged, missing keys render as `[key]`
    #[default]
    Dev,
    /// Silent, missing keys render as the empty string
    Production,
}

impl Mode {
    pub fn is_dev(self) -> bool {
        self == Mode::Dev
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Dev => write!(f, "dev"),
            Mode::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Mode::Dev),
            "production" => Ok(Mode::Production),
            other => Err(format!("unknown mode '{}', expected dev or production", other)),
        }
    }
}

/// Configuration options for a [`Text`](crate::Text) instance
#[derive(Debug, Clone)]
pub struct TextConfig {
    pub mode: Mode,

    /// How deep dictionary values may reference other keys before the
    /// reference resolves to nothing
    pub max_depth: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            max_depth: 32,
        }
    }
}

impl TextConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operating mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the dictionary reference depth limit
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
