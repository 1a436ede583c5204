//! karabiner.json assembly and writing.
//!
//! This module builds the complete document Karabiner-Elements reads
//! (global settings, one profile with complex modifications and function-key
//! mappings) and writes it with an atomic temp-file-plus-rename so a
//! watching Karabiner never sees a half-written file.

use crate::compiler::RuleCompiler;
use crate::config::Definition;
use crate::defaults;
use crate::models::{Rule, SimpleMapping};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level karabiner.json document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarabinerDocument {
    /// Application-wide settings.
    pub global: GlobalSettings,
    /// The profiles; this tool always writes exactly one.
    pub profiles: Vec<Profile>,
}

/// Karabiner application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Whether Karabiner shows its menu bar icon.
    pub show_in_menu_bar: bool,
}

/// One Karabiner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name shown in the Karabiner UI.
    pub name: String,
    /// Whether this profile is the active one.
    pub selected: bool,
    /// The compiled rule groups.
    pub complex_modifications: ComplexModifications,
    /// Function-key row substitutions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fn_function_keys: Vec<SimpleMapping>,
    /// Virtual keyboard settings.
    pub virtual_hid_keyboard: VirtualHidKeyboard,
}

/// The `complex_modifications` section of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexModifications {
    /// Rule groups, in emission order.
    pub rules: Vec<Rule>,
}

/// Virtual keyboard settings of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualHidKeyboard {
    /// Physical keyboard type reported to macOS.
    pub keyboard_type_v2: String,
}

impl Default for VirtualHidKeyboard {
    fn default() -> Self {
        Self {
            keyboard_type_v2: "ansi".to_string(),
        }
    }
}

impl KarabinerDocument {
    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize karabiner.json")
    }
}

/// Assembles a [`KarabinerDocument`] from a parsed definition.
pub struct DocumentBuilder<'a> {
    definition: &'a Definition,
}

impl<'a> DocumentBuilder<'a> {
    /// Creates a builder for the given definition.
    #[must_use]
    pub fn new(definition: &'a Definition) -> Self {
        Self { definition }
    }

    /// Compiles the layers and assembles the full document.
    ///
    /// The hyper key rule, when enabled, comes first so the file reads
    /// top-down: first how the chord is produced, then what it does.
    #[must_use]
    pub fn build(&self) -> KarabinerDocument {
        let translation = self.definition.translation();
        let compiler = RuleCompiler::new(&translation);

        let mut rules = Vec::new();
        if self.definition.profile.hyper_key {
            rules.push(defaults::hyper_key_rule());
        }
        rules.extend(compiler.compile(&self.definition.layers));

        let fn_function_keys = if self.definition.profile.function_keys {
            defaults::fn_function_keys()
        } else {
            Vec::new()
        };

        KarabinerDocument {
            global: GlobalSettings {
                show_in_menu_bar: false,
            },
            profiles: vec![Profile {
                name: self.definition.profile.name.clone(),
                selected: true,
                complex_modifications: ComplexModifications { rules },
                fn_function_keys,
                virtual_hid_keyboard: VirtualHidKeyboard::default(),
            }],
        }
    }
}

/// Writes the document to `path`, creating parent directories as needed.
///
/// The write is atomic: content goes to a temp file in the same directory,
/// which is then renamed over the target.
pub fn save_document(document: &KarabinerDocument, path: &Path) -> Result<()> {
    let json = document.to_json_string()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    atomic_write(path, &json)
}

/// Writes content to a temp file and renames it over the target path.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
