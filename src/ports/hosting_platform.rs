//! Hosting platform port definition.

use std::collections::BTreeMap;

use crate::domain::AppError;

/// Pipeline stage review apps are coupled to.
pub const REVIEW_STAGE: &str = "development";

/// App as returned by the platform on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedApp {
    pub id: String,
    pub name: String,
    pub web_url: String,
}

/// Association of an app with a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineCoupling {
    pub app_id: String,
    pub pipeline_id: String,
    pub stage: String,
}

/// Port for hosting platform operations.
pub trait HostingPlatform {
    /// Create a new app with the given name.
    fn create_app(&self, name: &str) -> Result<CreatedApp, AppError>;

    /// Append a buildpack to the app's buildpack list.
    fn add_buildpack(&self, app: &str, buildpack: &str) -> Result<(), AppError>;

    /// Provision an add-on plan for the app.
    fn add_addon(&self, app: &str, plan: &str) -> Result<(), AppError>;

    /// Set config vars in a single update.
    fn update_config_vars(&self, app: &str, vars: &BTreeMap<String, String>)
    -> Result<(), AppError>;

    /// Couple an app to a pipeline stage.
    fn couple_to_pipeline(&self, coupling: &PipelineCoupling) -> Result<(), AppError>;
}
