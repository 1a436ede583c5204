//! Layer validation before generation.
//!
//! Compilation itself never fails, so everything found here is advisory:
//! key collisions the host engine resolves by its own rule priority, and
//! sublayers that can never dispatch anything. The CLI surfaces these as
//! warnings (or as failures under `--strict`).

use crate::models::layer::sublayer_variable_name;
use crate::models::{HyperLayers, KeyCode, SublayerSpec};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// The result of checking a layer set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Advisory findings; none of them prevent generation.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True when nothing was flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Formats the report as user-facing lines.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();
        for warning in &self.warnings {
            message.push_str(&format!("⚠ {warning}\n"));
        }
        message
    }
}

/// A single advisory finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    /// What kind of problem was found.
    pub kind: WarningKind,
    /// The sublayer trigger the finding belongs to.
    pub trigger: KeyCode,
    /// Human-readable message.
    pub message: String,
}

/// Categories of advisory findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A sublayer command uses the sublayer's own trigger key.
    ShadowsOwnTrigger,
    /// A sublayer command uses another sublayer's trigger key.
    ShadowsSiblingTrigger,
    /// A sublayer declares no commands.
    EmptySublayer,
    /// A command has no output actions.
    EmptyCommand,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Checks a layer set for advisory problems.
pub struct LayerValidator<'a> {
    layers: &'a HyperLayers,
}

impl<'a> LayerValidator<'a> {
    /// Creates a validator over a layer set.
    #[must_use]
    pub fn new(layers: &'a HyperLayers) -> Self {
        Self { layers }
    }

    /// Runs every check and collects the findings.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        let sublayer_triggers: HashSet<&KeyCode> = self
            .layers
            .iter()
            .filter(|(_, spec)| spec.is_sublayer())
            .map(|(trigger, _)| trigger)
            .collect();

        for (trigger, spec) in self.layers.iter() {
            match spec {
                SublayerSpec::Command(command) => {
                    if command.to.is_empty() {
                        report.warnings.push(ValidationWarning {
                            kind: WarningKind::EmptyCommand,
                            trigger: trigger.clone(),
                            message: format!("binding \"{trigger}\" has no output actions"),
                        });
                    }
                }
                SublayerSpec::Sublayer(commands) => {
                    if commands.is_empty() {
                        report.warnings.push(ValidationWarning {
                            kind: WarningKind::EmptySublayer,
                            trigger: trigger.clone(),
                            message: format!(
                                "sublayer \"{trigger}\" declares no commands; its variable {} \
                                 still blocks sibling sublayers while held",
                                sublayer_variable_name(trigger)
                            ),
                        });
                    }
                    for (key, command) in commands {
                        if key == trigger {
                            report.warnings.push(ValidationWarning {
                                kind: WarningKind::ShadowsOwnTrigger,
                                trigger: trigger.clone(),
                                message: format!(
                                    "sublayer \"{trigger}\": command key \"{key}\" is the \
                                     sublayer's own trigger; which rule wins is up to Karabiner"
                                ),
                            });
                        } else if sublayer_triggers.contains(key) {
                            report.warnings.push(ValidationWarning {
                                kind: WarningKind::ShadowsSiblingTrigger,
                                trigger: trigger.clone(),
                                message: format!(
                                    "sublayer \"{trigger}\": command key \"{key}\" is also the \
                                     trigger of sublayer \"{key}\"; the command wins while \
                                     \"{trigger}\" is active"
                                ),
                            });
                        }
                        if command.to.is_empty() {
                            report.warnings.push(ValidationWarning {
                                kind: WarningKind::EmptyCommand,
                                trigger: trigger.clone(),
                                message: format!(
                                    "sublayer \"{trigger}\": command \"{key}\" has no output \
                                     actions"
                                ),
                            });
                        }
                    }
                }
            }
        }

        report
    }
}
