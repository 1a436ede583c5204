//! Data models for keys, commands, layers and Karabiner rules.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are independent of the compiler and of any I/O.

pub mod action;
pub mod command;
pub mod key;
pub mod key_translation;
pub mod layer;
pub mod rule;

// Re-export all model types
pub use action::{Action, VariableAssignment};
pub use command::Command;
pub use key::KeyCode;
pub use key_translation::KeyTranslation;
pub use layer::{sublayer_variable_name, CommandMap, HyperLayers, SublayerSpec, SUBLAYER_VARIABLE_PREFIX};
pub use rule::{
    Condition, FromEvent, FromModifiers, Manipulator, ManipulatorKind, Modifier, Rule,
    SimpleMapping,
};
