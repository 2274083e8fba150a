//! `create-tool`: scaffolds a new Strategienavigator tool.
//!
//! Asks for the tool's steps interactively, renders the templates, and
//! writes the result to `<path>/<name>/`.
//!
//! # Examples
//!
//! ```bash
//! # Create ./swot-analysis
//! create-tool swot-analysis "SWOT-Analyse"
//!
//! # Into the tools folder, in maintenance mode, failing on the first problem
//! create-tool -m -p src/js/components/tools --on-error abort swot-analysis "SWOT-Analyse"
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use scaffold_cli::GenerateArgs;
use scaffold_cli::commands::{exit_code_for, generate};
use scaffold_core::cli::OutputFormat;
use scaffold_core::{FailurePolicy, ToolName};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive generator for new Strategienavigator tools.
#[derive(Parser, Debug)]
#[command(name = "create-tool")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Tool name, e.g. swot-analysis (folder and stylesheet name)
    name: ToolName,

    /// Human-readable title of the tool
    display_name: String,

    /// Start the tool in maintenance mode
    #[arg(short, long)]
    maintenance: bool,

    /// Directory to create the tool in [default: current directory]
    #[arg(short, long, value_parser = existing_dir)]
    path: Option<PathBuf>,

    /// Read templates from this directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// What to do when a template or file fails (continue, abort)
    #[arg(long = "on-error", value_name = "POLICY")]
    on_error: Option<FailurePolicy>,

    /// Report format (json, text, pretty)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Settings file [default: <config dir>/create-tool/config.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long)]
    verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl From<Cli> for GenerateArgs {
    fn from(cli: Cli) -> Self {
        Self {
            name: cli.name,
            display_name: cli.display_name,
            maintenance: cli.maintenance,
            path: cli.path,
            templates: cli.templates,
            on_error: cli.on_error,
            format: cli.format,
            config: cli.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let args = GenerateArgs::from(cli);
    let exit_code = match generate::run(&args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{value}' is not an existing directory"))
    }
}
