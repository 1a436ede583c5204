//! Hyper-key definition files.
//!
//! This module handles loading the TOML definition file that declares the
//! profile settings and the hyper-key layers, with platform-specific
//! resolution of the Karabiner configuration path.

use crate::constants::DEFAULT_PROFILE_NAME;
use crate::models::{HyperLayers, KeyTranslation};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The OS keyboard layout the definition is written against.
///
/// Labels in the definition always name the letter the user wants; the
/// layout decides which physical key code that letter lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyLayout {
    /// Labels already are physical key codes.
    #[default]
    Qwerty,
    /// Labels are translated through the Colemak table.
    Colemak,
}

impl KeyLayout {
    /// The translation table for this layout.
    #[must_use]
    pub fn translation(self) -> KeyTranslation {
        match self {
            Self::Qwerty => KeyTranslation::identity(),
            Self::Colemak => KeyTranslation::qwerty_to_colemak(),
        }
    }
}

/// Profile-level settings of a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    /// Profile name written into karabiner.json.
    pub name: String,
    /// The OS keyboard layout labels are written against.
    pub key_layout: KeyLayout,
    /// Whether to emit the caps-lock hyper key rule.
    pub hyper_key: bool,
    /// Whether to emit the default function-key row.
    pub function_keys: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            key_layout: KeyLayout::default(),
            hyper_key: true,
            function_keys: true,
        }
    }
}

/// A parsed definition file: profile settings plus the layer declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    /// Profile-level settings.
    pub profile: ProfileSettings,
    /// The hyper-key bindings, in declaration order.
    pub layers: HyperLayers,
}

impl Definition {
    /// Loads a definition from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read definition file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse definition file: {}", path.display()))
    }

    /// Parses a definition from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid definition TOML")
    }

    /// The translation table selected by this definition.
    #[must_use]
    pub fn translation(&self) -> KeyTranslation {
        self.profile.key_layout.translation()
    }

    /// The path Karabiner-Elements reads its configuration from.
    ///
    /// Karabiner watches `~/.config/karabiner/karabiner.json` on macOS.
    pub fn default_output_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        Ok(home
            .join(".config")
            .join("karabiner")
            .join("karabiner.json"))
    }
}
