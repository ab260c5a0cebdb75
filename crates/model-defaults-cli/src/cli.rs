//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect attribute defaults and check value equivalence
#[derive(Parser, Debug)]
#[command(name = "model-defaults")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file describing where definitions live
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of `<root>.properties` definition files (overrides --config)
    #[arg(long, global = true, env = "MODEL_DEFAULTS_DIR")]
    pub definitions_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List folder paths that have registered defaults
    Folders {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the attribute defaults registered for a folder
    Lookup {
        /// Dot-separated folder path (e.g. topology.Server.SSL)
        folder: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check whether two values of an attribute are equivalent
    ///
    /// Exits with status 2 when the values do not match.
    ///
    /// Examples:
    ///   model-defaults match topology.Server.SSL Enabled --actual false
    ///   model-defaults match topology.Server ListenPort --expected 7001 --actual 7001 --json-values
    Match {
        /// Dot-separated folder path
        folder: String,

        /// Attribute name
        attribute: String,

        /// Expected value; omit for an absent value
        #[arg(long)]
        expected: Option<String>,

        /// Actual value; omit for an absent value
        #[arg(long)]
        actual: Option<String>,

        /// Parse values as JSON scalars (true, 7001, "text", null)
        #[arg(long)]
        json_values: bool,
    },

    /// Check whether a value counts as an attribute's default
    ///
    /// Exits with status 2 when the value is not a default.
    IsDefault {
        /// Dot-separated folder path
        folder: String,

        /// Attribute name
        attribute: String,

        /// Value to check; omit for an absent value
        value: Option<String>,

        /// Parse the value as a JSON scalar
        #[arg(long)]
        json_values: bool,
    },
}
