//! Inspect command: show what a definition file declares.

use crate::cli::common::{CliError, CliResult};
use crate::config::Definition;
use crate::models::layer::sublayer_variable_name;
use crate::models::SublayerSpec;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the sublayers, variables and commands of a definition file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the hyper-key definition file
    #[arg(short, long, value_name = "FILE")]
    pub definition: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of one top-level binding.
#[derive(Debug, Serialize)]
struct BindingInfo {
    trigger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable: Option<String>,
    commands: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let definition = Definition::load(&self.definition)
            .map_err(|e| CliError::parse(format!("Failed to load definition: {e:#}")))?;

        let bindings: Vec<BindingInfo> = definition
            .layers
            .iter()
            .map(|(trigger, spec)| match spec {
                SublayerSpec::Command(command) => BindingInfo {
                    trigger: trigger.to_string(),
                    variable: None,
                    commands: 0,
                    description: command.description.clone(),
                },
                SublayerSpec::Sublayer(commands) => BindingInfo {
                    trigger: trigger.to_string(),
                    variable: Some(sublayer_variable_name(trigger)),
                    commands: commands.len(),
                    description: None,
                },
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&bindings)
                .map_err(|e| CliError::io(format!("Failed to render JSON: {e:#}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Profile: {}", definition.profile.name);
        for binding in &bindings {
            match &binding.variable {
                Some(variable) => {
                    println!(
                        "  hyper + {:<10} sublayer  {variable} ({} commands)",
                        binding.trigger, binding.commands
                    );
                }
                None => {
                    let description = binding.description.as_deref().unwrap_or("direct command");
                    println!("  hyper + {:<10} {description}", binding.trigger);
                }
            }
        }
        Ok(())
    }
}
