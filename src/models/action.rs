//! Output actions ("to" events) in the Karabiner rule vocabulary.

use crate::models::key::KeyCode;
use crate::models::rule::Modifier;
use serde::{Deserialize, Serialize};

/// A single output event emitted when a manipulator fires.
///
/// Each variant serializes to the Karabiner field name that identifies it
/// (`key_code`, `consumer_key_code`, `apple_vendor_keyboard_key_code`,
/// `shell_command`, `set_variable`), so a `Vec<Action>` round-trips through
/// the `to` / `to_after_key_up` arrays of karabiner.json unchanged.
///
/// The compiler treats every variant opaquely except [`Action::SetVariable`],
/// which it synthesizes for sublayer toggle rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// Emit a key code, optionally with modifiers held.
    Key {
        /// The key code to emit.
        key_code: KeyCode,
        /// Modifiers held while the key code is emitted.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        modifiers: Vec<Modifier>,
    },
    /// Emit a consumer (media) key code, e.g. `"play_or_pause"`.
    Consumer {
        /// The consumer key code to emit.
        consumer_key_code: String,
    },
    /// Emit an Apple vendor-specific key code, e.g. `"mission_control"`.
    AppleVendor {
        /// The vendor key code to emit.
        apple_vendor_keyboard_key_code: String,
    },
    /// Run a shell command.
    Shell {
        /// The command line, run through `/bin/sh`.
        shell_command: String,
    },
    /// Assign a value to a named Karabiner variable.
    SetVariable {
        /// The assignment to perform.
        set_variable: VariableAssignment,
    },
}

/// A variable name together with the value to store in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAssignment {
    /// The variable name.
    pub name: String,
    /// The value to store. Karabiner initializes unset variables to 0.
    pub value: i32,
}

impl Action {
    /// Creates a key-press action.
    pub fn key(code: impl Into<KeyCode>) -> Self {
        Self::Key {
            key_code: code.into(),
            modifiers: Vec::new(),
        }
    }

    /// Creates a key-press action with modifiers held.
    pub fn key_with_modifiers(code: impl Into<KeyCode>, modifiers: Vec<Modifier>) -> Self {
        Self::Key {
            key_code: code.into(),
            modifiers,
        }
    }

    /// Creates a consumer (media) key action.
    pub fn consumer(code: impl Into<String>) -> Self {
        Self::Consumer {
            consumer_key_code: code.into(),
        }
    }

    /// Creates an Apple vendor key action.
    pub fn apple_vendor(code: impl Into<String>) -> Self {
        Self::AppleVendor {
            apple_vendor_keyboard_key_code: code.into(),
        }
    }

    /// Creates a shell command action.
    pub fn shell(command: impl Into<String>) -> Self {
        Self::Shell {
            shell_command: command.into(),
        }
    }

    /// Creates a set-variable action.
    pub fn set_variable(name: impl Into<String>, value: i32) -> Self {
        Self::SetVariable {
            set_variable: VariableAssignment {
                name: name.into(),
                value,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_action_serializes_without_empty_modifiers() {
        let action = Action::key("f6");
        assert_eq!(serde_json::to_value(&action).unwrap(), json!({"key_code": "f6"}));
    }

    #[test]
    fn test_key_action_with_modifiers() {
        let action = Action::key_with_modifiers(
            "left_shift",
            vec![Modifier::LeftCommand, Modifier::LeftControl, Modifier::LeftOption],
        );
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "key_code": "left_shift",
                "modifiers": ["left_command", "left_control", "left_option"]
            })
        );
    }

    #[test]
    fn test_set_variable_action_shape() {
        let action = Action::set_variable("hyper_sublayer_o", 1);
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"set_variable": {"name": "hyper_sublayer_o", "value": 1}})
        );
    }

    #[test]
    fn test_untagged_deserialization_picks_the_right_variant() {
        let shell: Action = serde_json::from_value(json!({"shell_command": "open ."})).unwrap();
        assert_eq!(shell, Action::shell("open ."));

        let consumer: Action =
            serde_json::from_value(json!({"consumer_key_code": "mute"})).unwrap();
        assert_eq!(consumer, Action::consumer("mute"));

        let vendor: Action =
            serde_json::from_value(json!({"apple_vendor_keyboard_key_code": "spotlight"}))
                .unwrap();
        assert_eq!(vendor, Action::apple_vendor("spotlight"));
    }
}
