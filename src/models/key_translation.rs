//! Logical-label to physical-key translation.
//!
//! Definitions are written in the labels the user thinks in. When the OS
//! keyboard layout is not QWERTY, the key code Karabiner needs is the
//! physical (QWERTY-named) key that produces that label, so every key in a
//! trigger position is passed through this lookup before emission. Keys
//! inside output actions are not translated.

use crate::models::key::KeyCode;
use std::collections::HashMap;

/// A partial mapping from logical key label to physical key code.
///
/// The table does not need to cover every key: a missing entry means the
/// label already names the physical key, never an error.
#[derive(Debug, Clone, Default)]
pub struct KeyTranslation {
    map: HashMap<KeyCode, KeyCode>,
}

impl KeyTranslation {
    /// The identity translation, for a QWERTY OS layout.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a translation from (label, physical key) pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
        K: Into<KeyCode>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(label, physical)| (label.into(), physical.into()))
                .collect(),
        }
    }

    /// The Colemak table: maps each letter label to the QWERTY-named key
    /// that types it under the Colemak layout. Keys Colemak leaves in place
    /// (and every non-letter key) are absent and pass through untranslated.
    #[must_use]
    pub fn qwerty_to_colemak() -> Self {
        Self::from_pairs([
            ("d", "g"),
            ("e", "k"),
            ("f", "e"),
            ("g", "t"),
            ("i", "l"),
            ("j", "y"),
            ("k", "n"),
            ("l", "u"),
            ("n", "j"),
            ("o", "semicolon"),
            ("p", "r"),
            ("r", "s"),
            ("s", "d"),
            ("t", "f"),
            ("u", "i"),
            ("y", "o"),
            ("semicolon", "p"),
        ])
    }

    /// Translates a label to its physical key code, or returns the label
    /// unchanged when the table has no entry for it.
    #[must_use]
    pub fn translate(&self, key: &KeyCode) -> KeyCode {
        self.map.get(key).cloned().unwrap_or_else(|| key.clone())
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True for the identity translation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translates_nothing() {
        let translation = KeyTranslation::identity();
        assert_eq!(translation.translate(&KeyCode::from("o")), KeyCode::from("o"));
        assert!(translation.is_empty());
    }

    #[test]
    fn test_colemak_moves_remapped_letters() {
        let translation = KeyTranslation::qwerty_to_colemak();
        assert_eq!(
            translation.translate(&KeyCode::from("o")),
            KeyCode::from("semicolon")
        );
        assert_eq!(translation.translate(&KeyCode::from("t")), KeyCode::from("f"));
    }

    #[test]
    fn test_missing_entries_pass_through() {
        let translation = KeyTranslation::qwerty_to_colemak();
        // Colemak keeps these where QWERTY has them.
        assert_eq!(translation.translate(&KeyCode::from("a")), KeyCode::from("a"));
        assert_eq!(
            translation.translate(&KeyCode::from("spacebar")),
            KeyCode::from("spacebar")
        );
    }
}
