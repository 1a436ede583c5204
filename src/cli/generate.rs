//! Generate command: definition file in, karabiner.json out.

use crate::cli::common::{CliError, CliResult};
use crate::config::Definition;
use crate::export::{self, DocumentBuilder};
use clap::Args;
use std::path::PathBuf;

/// Compile a definition file into a Karabiner configuration
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the hyper-key definition file
    #[arg(short, long, value_name = "FILE")]
    pub definition: PathBuf,

    /// Output path (defaults to Karabiner's own configuration file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the generated JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let definition = Definition::load(&self.definition)
            .map_err(|e| CliError::parse(format!("Failed to load definition: {e:#}")))?;

        let document = DocumentBuilder::new(&definition).build();

        if self.stdout {
            let json = document
                .to_json_string()
                .map_err(|e| CliError::io(format!("Failed to render JSON: {e:#}")))?;
            println!("{json}");
            return Ok(());
        }

        let output = match &self.output {
            Some(path) => path.clone(),
            None => Definition::default_output_path()
                .map_err(|e| CliError::io(format!("Failed to resolve output path: {e:#}")))?,
        };

        export::save_document(&document, &output)
            .map_err(|e| CliError::io(format!("Failed to write output: {e:#}")))?;

        let rules = document.profiles[0].complex_modifications.rules.len();
        let sublayers = definition.layers.sublayer_variable_names().len();
        println!("✓ Generated {}", output.display());
        println!("  {rules} rules, {sublayers} sublayers");
        Ok(())
    }
}
