//! # Solar CLI
//!
//! Command-line interface for the solar catalog admin.
//!
//! This crate defines the `solar-admin` commands and their handlers. The
//! binary only installs logging and a runtime, then hands the parsed
//! [`Cli`] to [`run`].
//!
//! ## Commands
//!
//! - `status` - Show what the store holds
//! - `load-site` - Seed the store from the compiled-in site catalog
//! - `import` / `validate` - Import or check a JSON content file
//! - `export-json` / `export-ts` - Write a backup or the site's data modules
//! - `products` / `articles` / `projects` - Edit single records
//!

pub mod commands;
pub mod config;

pub use config::{AdminConfig, CONFIG_FILE_NAME};

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Content admin for the solar catalog site
#[derive(Parser, Debug)]
#[command(name = "solar-admin", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./solar-admin.toml when present)
    #[arg(long, global = true, env = "SOLAR_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted store (overrides the config file)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// More log output (repeat for trace)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show store state and content counts
    Status,

    /// Replace the store with the compiled-in site catalog
    LoadSite {
        /// Run the import validator over the catalog first
        #[arg(long)]
        strict: bool,
    },

    /// Validate a JSON content file and import it
    Import {
        /// JSON file with products, articles and projects
        file: PathBuf,
    },

    /// Validate a JSON content file without importing it
    Validate {
        file: PathBuf,
    },

    /// Write a dated JSON backup of the store
    ExportJson {
        /// Output directory (overrides the config file)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Replace an existing backup from the same day
        #[arg(short, long)]
        force: bool,
    },

    /// Write the site's TypeScript data modules
    ExportTs {
        /// Output directory (overrides the config file)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Replace existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Manage products
    Products {
        #[command(subcommand)]
        action: RecordCommand,
    },

    /// Manage articles
    Articles {
        #[command(subcommand)]
        action: RecordCommand,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: RecordCommand,
    },
}

/// Record operations shared by the three collections
#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// List all records
    List,
    /// Print one record as JSON, looked up by id or slug
    Show {
        id: String,
    },
    /// Add a record from a JSON file (an empty id gets a generated one)
    Add {
        file: PathBuf,
    },
    /// Replace a record with the contents of a JSON file
    Update {
        id: String,
        file: PathBuf,
    },
    /// Delete a record
    Remove {
        id: String,
    },
}

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but refused its input (rejected import, invalid file)
    Refused,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Refused => ExitCode::FAILURE,
        }
    }
}

/// Load configuration and run the selected command
pub async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = AdminConfig::load(cli.config.as_deref())?;
    let ctx = commands::Context::new(config, cli.store_dir);
    commands::dispatch(&ctx, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_record_command() {
        let cli = Cli::try_parse_from(["solar-admin", "--store-dir", "s", "products", "update", "b1", "p.json"]).unwrap();
        assert_eq!(cli.store_dir, Some(PathBuf::from("s")));
        match cli.command {
            Commands::Products {
                action: RecordCommand::Update { id, file },
            } => {
                assert_eq!(id, "b1");
                assert_eq!(file, PathBuf::from("p.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_filter() {
        let cli = Cli::try_parse_from(["solar-admin", "-vv", "status"]).unwrap();
        assert_eq!(cli.log_filter(), "trace");
        let cli = Cli::try_parse_from(["solar-admin", "status", "-q"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");
        let cli = Cli::try_parse_from(["solar-admin", "status"]).unwrap();
        assert_eq!(cli.log_filter(), "info");
        assert!(Cli::try_parse_from(["solar-admin", "-v", "-q", "status"]).is_err());
    }
}
