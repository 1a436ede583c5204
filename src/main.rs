//! Hyperlayer - declarative hyper-key sublayer compiler for Karabiner-Elements
//!
//! This binary turns a TOML definition of hyper-key sublayers into a complete
//! karabiner.json profile: toggle rules, mutual-exclusion conditions and
//! per-command dispatch rules.

use clap::{Parser, Subcommand};
use hyperlayer::cli::{GenerateArgs, InspectArgs, ValidateArgs};
use hyperlayer::constants::APP_BINARY_NAME;

/// Hyperlayer - declarative hyper-key sublayer compiler for Karabiner-Elements
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a definition file into a Karabiner configuration
    Generate(GenerateArgs),
    /// Check a definition file for problems
    Validate(ValidateArgs),
    /// Show the sublayers, variables and commands of a definition file
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code().code());
    }
}
