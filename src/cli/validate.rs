//! Validation command for definition files.

use crate::cli::common::{CliError, CliResult};
use crate::compiler::LayerValidator;
use crate::config::Definition;
use crate::models::SublayerSpec;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check a definition file for problems
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the hyper-key definition file
    #[arg(short, long, value_name = "FILE")]
    pub definition: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON shape of the validation result.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    sublayers: usize,
    commands: usize,
    direct_bindings: usize,
    warnings: Vec<crate::compiler::ValidationWarning>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let definition = Definition::load(&self.definition)
            .map_err(|e| CliError::parse(format!("Failed to load definition: {e:#}")))?;

        let report = LayerValidator::new(&definition.layers).validate();

        let mut commands = 0;
        let mut direct_bindings = 0;
        for (_, spec) in definition.layers.iter() {
            match spec {
                SublayerSpec::Command(_) => direct_bindings += 1,
                SublayerSpec::Sublayer(map) => commands += map.len(),
            }
        }
        let sublayers = definition.layers.sublayer_variable_names().len();

        let failed = self.strict && !report.is_clean();

        if self.json {
            let response = ValidationResponse {
                valid: !failed,
                sublayers,
                commands,
                direct_bindings,
                warnings: report.warnings.clone(),
            };
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::io(format!("Failed to render JSON: {e:#}")))?;
            println!("{json}");
        } else {
            println!(
                "✓ {}: {sublayers} sublayers, {commands} commands, {direct_bindings} direct bindings",
                self.definition.display()
            );
            if !report.is_clean() {
                print!("{}", report.format_message());
            }
        }

        if failed {
            return Err(CliError::validation(format!(
                "{} warnings treated as errors (--strict)",
                report.warnings.len()
            )));
        }
        Ok(())
    }
}
