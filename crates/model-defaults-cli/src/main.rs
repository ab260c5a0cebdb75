//! Attribute defaults CLI
//!
//! Inspects the defaults registry and checks attribute value equivalence
//! the way configuration model comparison does.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use model_defaults::DefaultsRegistry;

use cli::{Cli, Commands};
use commands::Outcome;
use error::Result;

/// Exit status when a checked value does not match.
const MISMATCH_EXIT_CODE: i32 = 2;

fn main() {
    match run() {
        Ok(Outcome::Success) => {}
        Ok(Outcome::Mismatch) => std::process::exit(MISMATCH_EXIT_CODE),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(command = ?cli.command, "Starting");

    let shared = context::resolve_registry(cli.config.as_deref(), cli.definitions_dir.as_deref())?;

    match cli.command {
        Some(cmd) => {
            let registry = shared.get()?;
            execute_command(registry, cmd)
        }
        None => {
            // No command provided - show help hint
            println!("{} Attribute defaults registry", "model-defaults".green().bold());
            println!();
            println!("Definitions: {}", context::describe_source(shared.source()).dimmed());
            println!("Run {} for available commands.", "model-defaults --help".cyan());
            Ok(Outcome::Success)
        }
    }
}

fn execute_command(registry: &DefaultsRegistry, cmd: Commands) -> Result<Outcome> {
    match cmd {
        Commands::Folders { json } => commands::run_folders(registry, json),
        Commands::Lookup { folder, json } => commands::run_lookup(registry, &folder, json),
        Commands::Match {
            folder,
            attribute,
            expected,
            actual,
            json_values,
        } => commands::run_match(
            registry,
            &folder,
            &attribute,
            expected.as_deref(),
            actual.as_deref(),
            json_values,
        ),
        Commands::IsDefault {
            folder,
            attribute,
            value,
            json_values,
        } => commands::run_is_default(registry, &folder, &attribute, value.as_deref(), json_values),
    }
}
