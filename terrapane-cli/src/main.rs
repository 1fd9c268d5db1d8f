//! Terrapane CLI - Command-line interface
//!
//! This binary provides the terminal frontend for the Terrapane library: an
//! interactive map viewer with geocoded place search, plus one-shot
//! geocoding and configuration management commands.

use clap::{Parser, Subcommand, ValueEnum};

use terrapane::geocode::PlaceKind;

mod commands;
mod error;
mod runner;
mod tui_app;
mod ui;

use error::CliError;
use runner::CliRunner;

#[derive(Debug, Clone, ValueEnum)]
enum KindArg {
    /// City-level search (geocoding feature type "place")
    City,
    /// Country-level search
    Country,
}

impl From<KindArg> for PlaceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::City => PlaceKind::City,
            KindArg::Country => PlaceKind::Country,
        }
    }
}

#[derive(Parser)]
#[command(name = "terrapane")]
#[command(version)]
#[command(about = "Interactive terminal map viewer with place search", long_about = None)]
struct Cli {
    /// Enable debug-level logging regardless of RUST_LOG
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive map viewer (default)
    View,

    /// Resolve a place name and print the resulting camera move
    Geocode {
        /// Place name to resolve
        query: String,

        /// What kind of place to look for
        #[arg(long, value_enum, default_value = "city")]
        kind: KindArg,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Create the default config file if it doesn't exist
    Init,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Config commands work without logging or a loaded config file.
    if let Some(Commands::Config { action }) = &cli.command {
        return commands::config::handle(action);
    }

    let runner = CliRunner::with_debug(cli.debug)?;

    match cli.command {
        None | Some(Commands::View) => {
            runner.log_startup("view");
            commands::view::handle(&runner)
        }
        Some(Commands::Geocode { query, kind }) => {
            runner.log_startup("geocode");
            commands::geocode::handle(&runner, &query, kind.into())
        }
        Some(Commands::Config { .. }) => unreachable!("handled above"),
    }
}
