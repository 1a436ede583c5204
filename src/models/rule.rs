//! Rules, manipulators, conditions and modifier specifications.
//!
//! These structs mirror the shapes Karabiner-Elements expects inside
//! `complex_modifications.rules` and `fn_function_keys`, so serializing them
//! with serde_json produces a file Karabiner loads directly.

use crate::models::action::Action;
use crate::models::key::KeyCode;
use serde::{Deserialize, Serialize};

/// A modifier key name in Karabiner's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Matches any modifier combination.
    Any,
    /// Left command (⌘).
    LeftCommand,
    /// Left control (⌃).
    LeftControl,
    /// Left shift (⇧).
    LeftShift,
    /// Left option (⌥).
    LeftOption,
    /// Right command.
    RightCommand,
    /// Right control.
    RightControl,
    /// Right shift.
    RightShift,
    /// Right option.
    RightOption,
    /// Either command key.
    Command,
    /// Either control key.
    Control,
    /// Either shift key.
    Shift,
    /// Either option key.
    Option,
    /// The fn key.
    Fn,
}

impl Modifier {
    /// The hyper chord: all four left-hand modifiers held at once.
    #[must_use]
    pub fn hyper() -> Vec<Self> {
        vec![
            Self::LeftCommand,
            Self::LeftControl,
            Self::LeftShift,
            Self::LeftOption,
        ]
    }
}

/// Modifier requirements attached to a `from` event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromModifiers {
    /// Modifiers that must be held for the event to match. Mandatory
    /// modifiers are consumed: they are not added to the output events.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mandatory: Vec<Modifier>,
    /// Modifiers that may be held without preventing a match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<Modifier>,
}

impl FromModifiers {
    /// Requires the full hyper chord.
    #[must_use]
    pub fn hyper() -> Self {
        Self {
            mandatory: Modifier::hyper(),
            optional: Vec::new(),
        }
    }

    /// Matches regardless of which modifiers are held.
    #[must_use]
    pub fn any() -> Self {
        Self {
            mandatory: vec![Modifier::Any],
            optional: Vec::new(),
        }
    }

    /// Requires nothing, tolerates anything.
    #[must_use]
    pub fn optional_any() -> Self {
        Self {
            mandatory: Vec::new(),
            optional: vec![Modifier::Any],
        }
    }
}

/// The physical event a manipulator matches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromEvent {
    /// The key being pressed.
    pub key_code: KeyCode,
    /// Modifier requirements, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<FromModifiers>,
}

impl FromEvent {
    /// Creates a from-event for a bare key with no modifier requirements.
    pub fn key(code: impl Into<KeyCode>) -> Self {
        Self {
            key_code: code.into(),
            modifiers: None,
        }
    }

    /// Attaches modifier requirements to this event.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: FromModifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }
}

/// A precondition on a manipulator. All conditions of a manipulator must
/// hold for it to fire (logical AND).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// Holds when the named Karabiner variable has the expected value.
    /// Unset variables read as 0.
    VariableIf {
        /// The variable name.
        name: String,
        /// The expected value.
        value: i32,
    },
}

impl Condition {
    /// Creates a variable-equals condition.
    pub fn variable_if(name: impl Into<String>, value: i32) -> Self {
        Self::VariableIf {
            name: name.into(),
            value,
        }
    }
}

/// The manipulator evaluation mode. Only `basic` exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorKind {
    /// The standard from/to manipulator type.
    #[default]
    Basic,
}

/// A single remapping instruction inside a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manipulator {
    /// Human-readable summary shown in the Karabiner UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Evaluation mode, always `basic`.
    #[serde(rename = "type")]
    pub kind: ManipulatorKind,
    /// The physical event to match.
    pub from: FromEvent,
    /// Events emitted while the key is down.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<Action>,
    /// Events emitted when the key is tapped without another key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_alone: Vec<Action>,
    /// Events emitted when the key is released.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_after_key_up: Vec<Action>,
    /// Preconditions, ANDed together.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl Manipulator {
    /// Creates an empty `basic` manipulator matching the given event.
    #[must_use]
    pub fn basic(from: FromEvent) -> Self {
        Self {
            description: None,
            kind: ManipulatorKind::Basic,
            from,
            to: Vec::new(),
            to_if_alone: Vec::new(),
            to_after_key_up: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the key-down events.
    #[must_use]
    pub fn with_to(mut self, to: Vec<Action>) -> Self {
        self.to = to;
        self
    }

    /// Sets the tapped-alone events.
    #[must_use]
    pub fn with_to_if_alone(mut self, to_if_alone: Vec<Action>) -> Self {
        self.to_if_alone = to_if_alone;
        self
    }

    /// Sets the key-up events.
    #[must_use]
    pub fn with_to_after_key_up(mut self, to_after_key_up: Vec<Action>) -> Self {
        self.to_after_key_up = to_after_key_up;
        self
    }

    /// Sets the preconditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }
}

/// A named group of manipulators, one entry of `complex_modifications.rules`.
///
/// Groups are independent of each other; their order only affects how the
/// generated file reads and diffs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Human-readable group title.
    pub description: String,
    /// The manipulators in this group, in emission order.
    pub manipulators: Vec<Manipulator>,
}

impl Rule {
    /// Creates a rule group.
    pub fn new(description: impl Into<String>, manipulators: Vec<Manipulator>) -> Self {
        Self {
            description: description.into(),
            manipulators,
        }
    }
}

/// A modifier-free key substitution for the profile's `fn_function_keys`
/// section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleMapping {
    /// The physical key.
    pub from: FromEvent,
    /// The events it produces instead.
    pub to: Vec<Action>,
}

impl SimpleMapping {
    /// Creates a mapping from a bare key to a list of output events.
    pub fn new(from: impl Into<KeyCode>, to: Vec<Action>) -> Self {
        Self {
            from: FromEvent::key(from),
            to,
        }
    }
}
