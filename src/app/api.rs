//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together adapter
//! construction and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    CloudflareHttpClient, GitCommandAdapter, HerokuHttpClient, IniConfigStore, TerminalPrompter,
};
use crate::app::{
    AppContext,
    commands::{deploy, launch, setup},
};
use crate::ports::ConfigStore;

pub use crate::app::commands::create::ProvisionReport;
pub use crate::app::commands::deploy::DeployReport;
pub use crate::app::commands::launch::LaunchReport;
pub use crate::domain::{AppError, Outcome, ReviewConfig};

/// Config store at `path`, or at the default location when `None`.
pub fn config_store(path: Option<&Path>) -> Result<IniConfigStore, AppError> {
    match path {
        Some(path) => Ok(IniConfigStore::new(path.to_path_buf())),
        None => IniConfigStore::default_location(),
    }
}

/// Load the configuration once for the whole run.
pub fn load_config(path: Option<&Path>) -> Result<ReviewConfig, AppError> {
    config_store(path)?.load()
}

// =============================================================================
// Setup Command API
// =============================================================================

/// Interactively collect settings and rewrite the config file.
///
/// Returns the saved path, or `None` when the user cancelled.
pub fn setup(config_path: Option<&Path>) -> Result<Option<PathBuf>, AppError> {
    let store = config_store(config_path)?;
    let mut prompter = TerminalPrompter::new();
    Ok(setup::execute(&mut prompter, &store)?.map(|_| store.path().to_path_buf()))
}

// =============================================================================
// Create Command API
// =============================================================================

/// Provision a review app for the working copy in the current directory and
/// deploy the branch to it.
pub fn create(
    config: ReviewConfig,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<LaunchReport, AppError> {
    create_at(std::env::current_dir()?, config, name, branch)
}

/// Provision and deploy a review app for the working copy at `root`.
pub fn create_at(
    root: PathBuf,
    config: ReviewConfig,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<LaunchReport, AppError> {
    let api_key = config.heroku.api_key.clone().ok_or(AppError::MissingApiKey)?;
    let platform = HerokuHttpClient::with_api_key(api_key)?;
    let dns = CloudflareHttpClient::public()?;
    let git = GitCommandAdapter::new(root);

    let ctx = AppContext::new(config, git, platform, dns);
    launch::execute(&ctx, name, branch)
}

// =============================================================================
// Deploy Command API
// =============================================================================

/// Push a branch of the working copy in the current directory.
pub fn deploy(name: Option<&str>, branch: Option<&str>) -> Result<Outcome<DeployReport>, AppError> {
    deploy_at(std::env::current_dir()?, name, branch)
}

/// Push a branch of the working copy at `root`.
pub fn deploy_at(
    root: PathBuf,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<Outcome<DeployReport>, AppError> {
    let git = GitCommandAdapter::new(root);
    deploy::execute(&git, name, branch)
}
