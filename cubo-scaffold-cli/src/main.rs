//! cubo-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubo_scaffold::observability::{self, ObservabilityConfig};
use cubo_scaffold::ScaffoldConfig;
use cubo_scaffold_cli_lib::{prompt, NewCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cubo-scaffold")]
#[command(version)]
#[command(about = "Scaffold cubo Spring Boot modules", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new core / autoconfigure / starter module
    New {
        /// Module name (e.g. `launcher`); prompted for when omitted
        name: Option<String>,

        /// Module description; prompted for when omitted
        #[arg(short, long)]
        description: Option<String>,

        /// Project root holding the aggregator `pom.xml`
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Configuration file (default: `<root>/cubo-scaffold.toml`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config {
        /// Project root holding the aggregator `pom.xml`
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Configuration file (default: `<root>/cubo-scaffold.toml`)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = ObservabilityConfig::new().with_verbose(cli.verbose);
    if cli.log_json {
        logging = logging.with_json();
    }
    observability::init(&logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::New {
            name,
            description,
            root,
            config,
        } => {
            let spec = prompt::module_spec(name, description)?;
            let cmd = NewCommand::new(spec, root, config.as_deref())?;
            cmd.execute()?;
        }
        Commands::Config { root, config } => {
            let config = match config {
                Some(path) => ScaffoldConfig::load_from(path),
                None => ScaffoldConfig::load(&root),
            }
            .context("Failed to load configuration")?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
