//! Command-line argument definitions.

use crate::config::OutputFormat;
use crate::view::View;
use clap::{Parser, Subcommand};

/// Featmatrix - compare KeyReply against competitor categories
#[derive(Parser, Debug)]
#[command(name = "featmatrix")]
#[command(version, about = "Feature comparison matrix for KeyReply and its competitors", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "FEATMATRIX_CONFIG", global = true)]
    pub config: Option<String>,

    /// Output format (overrides the configured format)
    #[arg(short, long, value_enum, env = "FEATMATRIX_FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run; `summary` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the summary table (the default)
    Summary,
    /// Show a table: `summary` or a category key
    Show {
        /// View to show
        #[arg(value_enum, default_value_t = View::Summary)]
        view: View,
    },
    /// List all features grouped by feature category
    Features,
    /// List categories and their display names
    Categories,
    /// Check whether one company supports a feature
    Supports {
        /// Category key (platform, cloud, solution, keyreply)
        category: String,
        /// Company name within the category
        company: String,
        /// Feature name or id
        feature: String,
    },
    /// Check whether any competitor supports a feature
    Any {
        /// Feature name or id
        feature: String,
    },
    /// Run the data-integrity checks and report dataset size
    Validate,
    /// Configuration operations
    Config {
        /// Config operation to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Print one value by dotted key, e.g. `output.format`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the resolved path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The command to run, defaulting to the summary.
    pub fn selected(&self) -> Command {
        self.command.clone().unwrap_or(Command::Summary)
    }
}
