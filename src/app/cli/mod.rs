//! CLI Adapter.

mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "heroku-review")]
#[command(version)]
#[command(about = "Create and deploy Heroku review apps for git branches", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ~/.heroku-review-apps.ini)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively write the config file
    Setup,
    /// Create a review app and deploy the branch to it
    Create {
        /// Heroku app name (derived from the branch when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Git branch to use (current branch when omitted)
        #[arg(long)]
        branch: Option<String>,
    },
    /// Deploy a branch to an existing review app
    Deploy {
        /// Heroku app name (derived from the branch when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Git branch to deploy (current branch when omitted)
        #[arg(long)]
        branch: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Setup => run_setup(config_path),
        Commands::Create { name, branch } => {
            run_create(config_path, name.as_deref(), branch.as_deref())
        }
        Commands::Deploy { name, branch } => run_deploy(name.as_deref(), branch.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_setup(config_path: Option<&Path>) -> Result<(), AppError> {
    match api::setup(config_path)? {
        Some(path) => println!("\n✅ Configuration saved to {}", path.display()),
        None => println!("Setup cancelled; nothing was written."),
    }
    Ok(())
}

fn run_create(
    config_path: Option<&Path>,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<(), AppError> {
    let config = api::load_config(config_path)?;
    let report = api::create(config, name, branch)?;
    render::provision(&report.provisioned);
    if let Some(deployed) = &report.deployed {
        render::deploy(deployed);
    }
    Ok(())
}

fn run_deploy(name: Option<&str>, branch: Option<&str>) -> Result<(), AppError> {
    let outcome = api::deploy(name, branch)?;
    render::deploy(&outcome);
    Ok(())
}

