//! Beacon CLI - builds the landing page and inspects its design tokens.
//!
//! ```text
//! main() -> ConfigSource::discover() -> Site::load() -> command
//!                                                          |
//!            build | resolve | tokens | check | export-theme
//! ```
//!
//! Page output and query results go to stdout or the `--out` file; logs go to
//! stderr so they never mix with either.

mod commands;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use beacon_config::ConfigSource;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "beacon", version, about = "Themed static landing pages from one config file")]
struct Args {
    /// Configuration file. Falls back to $BEACON_CONFIG, ./beacon.toml, then
    /// the built-in configuration.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compose the page and write it as a single HTML document.
    Build {
        #[arg(short, long, default_value = "dist/index.html", value_name = "PATH")]
        out: PathBuf,
    },
    /// Print one token value, e.g. `color.dark-blue.Primary` or `radius`.
    Resolve { path: String },
    /// List registered tokens.
    Tokens {
        /// Only this category (`color`, `spacing`, `radius`, `shadow`, `font`).
        #[arg(long)]
        category: Option<String>,
        /// Print JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration and render the page without writing it.
    Check,
    /// Print the resolved theme as TOML.
    ExportTheme,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run(args: Args) -> Result<()> {
    let source = ConfigSource::discover(args.config.as_deref());
    match args.command {
        Command::Build { out } => commands::build(&source, &out),
        Command::Resolve { path } => commands::resolve(&source, &path),
        Command::Tokens { category, json } => {
            commands::tokens(&source, category.as_deref(), json)
        }
        Command::Check => commands::check(&source),
        Command::ExportTheme => commands::export_theme(&source),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
