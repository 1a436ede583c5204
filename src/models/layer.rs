//! The declarative hyper-key layer tree.

use crate::models::command::Command;
use crate::models::key::KeyCode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of every sublayer activation variable.
pub const SUBLAYER_VARIABLE_PREFIX: &str = "hyper_sublayer_";

/// An ordered map from secondary key to the command it runs.
pub type CommandMap = IndexMap<KeyCode, Command>;

/// What a hyper-chorded trigger key does: either run a command directly,
/// or open a sublayer of further commands.
///
/// The variant is fixed when the value is constructed (or deserialized):
/// a table carrying a `to` list is a command, any other table is a sublayer.
/// Sublayers nest exactly one level deep; the type has no recursive variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SublayerSpec {
    /// A command bound directly to the hyper chord plus the trigger key.
    Command(Command),
    /// A sublayer: a second key press selects one of these commands.
    Sublayer(CommandMap),
}

impl SublayerSpec {
    /// Returns true for the [`SublayerSpec::Sublayer`] variant.
    #[must_use]
    pub fn is_sublayer(&self) -> bool {
        matches!(self, Self::Sublayer(_))
    }
}

/// The full set of hyper-key bindings, in declaration order.
///
/// Declaration order is preserved end-to-end so the generated file is
/// deterministic and diffs cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HyperLayers(IndexMap<KeyCode, SublayerSpec>);

impl HyperLayers {
    /// Creates an empty layer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a trigger key to a sublayer of commands.
    #[must_use]
    pub fn with_sublayer(mut self, trigger: impl Into<KeyCode>, commands: CommandMap) -> Self {
        self.0
            .insert(trigger.into(), SublayerSpec::Sublayer(commands));
        self
    }

    /// Binds a trigger key directly to a command.
    #[must_use]
    pub fn with_command(mut self, trigger: impl Into<KeyCode>, command: Command) -> Self {
        self.0.insert(trigger.into(), SublayerSpec::Command(command));
        self
    }

    /// Iterates the bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyCode, &SublayerSpec)> {
        self.0.iter()
    }

    /// Number of top-level bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no bindings are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The activation variable names of every sublayer, in declaration
    /// order. Direct commands contribute no variable: they never toggle a
    /// mode, so nothing needs to exclude them.
    #[must_use]
    pub fn sublayer_variable_names(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, spec)| spec.is_sublayer())
            .map(|(trigger, _)| sublayer_variable_name(trigger))
            .collect()
    }
}

/// Derives the activation variable name for a sublayer trigger key.
///
/// Trigger keys are map keys and therefore unique, so derived names are
/// unique across the whole layer set.
#[must_use]
pub fn sublayer_variable_name(trigger: &KeyCode) -> String {
    format!("{SUBLAYER_VARIABLE_PREFIX}{trigger}")
}
