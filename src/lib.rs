//! heroku-review: provision and deploy branch-scoped Heroku review apps.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeployReport, LaunchReport, ProvisionReport, config_store, create, create_at, deploy,
    deploy_at, load_config, setup,
};
pub use domain::{AppError, AppName, Outcome, ReviewApp, ReviewConfig};
