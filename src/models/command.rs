//! Commands: what a key should do once its sublayer is active.

use crate::models::action::Action;
use serde::{Deserialize, Serialize};

/// A list of output actions plus an optional human-readable description.
///
/// Commands are immutable once constructed; the compiler copies their
/// actions verbatim into dispatch manipulators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The output events, in emission order.
    pub to: Vec<Action>,
    /// Human-readable summary shown in the Karabiner UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Command {
    /// Creates a command from a list of actions.
    pub fn new(to: Vec<Action>) -> Self {
        Self {
            to,
            description: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Shortcut for an `open <what>` shell command.
    pub fn open(what: impl AsRef<str>) -> Self {
        let what = what.as_ref();
        Self {
            to: vec![Action::shell(format!("open {what}"))],
            description: Some(format!("Open {what}")),
        }
    }

    /// Shortcut for opening a macOS application by name.
    pub fn app(name: impl AsRef<str>) -> Self {
        Self::open(format!("-a '{}.app'", name.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_builds_shell_command() {
        let command = Command::open("https://example.com");
        assert_eq!(
            command.to,
            vec![Action::shell("open https://example.com")]
        );
        assert_eq!(command.description.as_deref(), Some("Open https://example.com"));
    }

    #[test]
    fn test_app_quotes_the_bundle_name() {
        let command = Command::app("Google Chrome");
        assert_eq!(
            command.to,
            vec![Action::shell("open -a 'Google Chrome.app'")]
        );
    }

    #[test]
    fn test_command_serializes_without_missing_description() {
        let command = Command::new(vec![Action::key("f6")]);
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({"to": [{"key_code": "f6"}]})
        );
    }
}
