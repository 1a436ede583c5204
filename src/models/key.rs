//! Karabiner key code identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Karabiner-Elements key code (e.g. `"a"`, `"spacebar"`, `"f6"`).
///
/// Key codes are opaque labels: the compiler never interprets them beyond
/// equality and map-key use. Karabiner itself validates the vocabulary when
/// it loads the generated file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(String);

impl KeyCode {
    /// Creates a key code from any string-like label.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the key code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for KeyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
