//! Review app provisioning.
//!
//! Step severity:
//! - app creation, buildpacks and config vars abort the operation
//! - each add-on, pipeline coupling, git remote and DNS binding only warn

use crate::app::AppContext;
use crate::domain::{
    AppError, AppName, DnsRecord, GitHubRepo, Outcome, ReviewApp, Step, StepRecord, Target,
};
use crate::ports::{DnsProvider, Git, HostingPlatform, PipelineCoupling, REVIEW_STAGE};

use super::dns::bind_domain;
use super::resolve::resolve_target;

/// What a successful provisioning run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub app: ReviewApp,
    /// GitHub repository of `origin`, when it is hosted there.
    pub repository: Option<GitHubRepo>,
    pub dns_record: Option<DnsRecord>,
    /// Executed steps in order.
    pub steps: Vec<StepRecord>,
}

/// Create and configure a review app.
///
/// Returns `Err` only when the branch cannot be resolved.
pub fn execute<G, H, D>(
    ctx: &AppContext<G, H, D>,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<Outcome<ProvisionReport>, AppError>
where
    G: Git,
    H: HostingPlatform,
    D: DnsProvider,
{
    let target = resolve_target(ctx.git(), name, branch)?;
    tracing::info!(app = %target.name, branch = %target.branch, "creating review app");
    Ok(provision(ctx, target))
}

fn provision<G, H, D>(ctx: &AppContext<G, H, D>, target: Target) -> Outcome<ProvisionReport>
where
    G: Git,
    H: HostingPlatform,
    D: DnsProvider,
{
    let config = ctx.config();
    let platform = ctx.platform();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    let created = match platform.create_app(target.name.as_str()) {
        Ok(created) => created,
        Err(e) => {
            tracing::warn!(app = %target.name, error = %e, "app creation failed");
            return Outcome::failed(format!("Error creating app {}: {}", target.name, e));
        }
    };
    steps.push(StepRecord::succeeded(Step::CreateApp));

    // The platform may normalize the requested name.
    let app_name = if created.name == target.name.as_str() {
        target.name.clone()
    } else {
        AppName::resolve(Some(created.name.as_str()), &target.branch)
    };

    let heroku = &config.heroku;
    if !heroku.buildpacks.is_empty() {
        for buildpack in &heroku.buildpacks {
            if let Err(e) = platform.add_buildpack(app_name.as_str(), buildpack) {
                return Outcome::failed(format!(
                    "Error adding buildpack {} to {}: {}",
                    buildpack, app_name, e
                ));
            }
        }
        steps.push(StepRecord::succeeded(Step::Buildpacks));
    }

    for addon in &heroku.addons {
        match platform.add_addon(app_name.as_str(), addon) {
            Ok(()) => steps.push(StepRecord::succeeded(Step::Addon(addon.clone()))),
            Err(e) => {
                let message = format!("Error adding add-on {}: {}", addon, e);
                tracing::warn!(app = %app_name, addon = %addon, error = %e, "add-on failed");
                steps.push(StepRecord::warned(Step::Addon(addon.clone()), &message));
                warnings.push(message);
            }
        }
    }

    if !config.env_vars.is_empty() {
        if let Err(e) = platform.update_config_vars(app_name.as_str(), &config.env_vars) {
            return Outcome::failed(format!("Error setting config vars on {}: {}", app_name, e));
        }
        steps.push(StepRecord::succeeded(Step::ConfigVars));
    }

    if let Some(pipeline_id) = &heroku.pipeline_id {
        let coupling = PipelineCoupling {
            app_id: created.id.clone(),
            pipeline_id: pipeline_id.clone(),
            stage: REVIEW_STAGE.to_string(),
        };
        match platform.couple_to_pipeline(&coupling) {
            Ok(()) => steps.push(StepRecord::succeeded(Step::PipelineCoupling)),
            Err(e) => {
                let message = format!("Error adding app to pipeline {}: {}", pipeline_id, e);
                tracing::warn!(pipeline = %pipeline_id, error = %e, "pipeline coupling failed");
                steps.push(StepRecord::warned(Step::PipelineCoupling, &message));
                warnings.push(message);
            }
        }
    }

    match ctx.git().add_remote(app_name.as_str(), &app_name.git_url()) {
        Ok(()) => steps.push(StepRecord::succeeded(Step::GitRemote)),
        Err(e) => {
            let message = match e {
                AppError::RemoteExists(_) => {
                    format!("Git remote {} already exists; keeping it", app_name)
                }
                other => format!("Could not add git remote {}: {}", app_name, other),
            };
            steps.push(StepRecord::warned(Step::GitRemote, &message));
            warnings.push(message);
        }
    }

    let mut dns_record = None;
    if config.cloudflare.zone().is_some() {
        match bind_domain(ctx.dns(), &config.cloudflare, &app_name, &created.web_url) {
            Outcome::Failed { reason } => {
                let message = format!("Error configuring Cloudflare: {}", reason);
                steps.push(StepRecord::warned(Step::DnsBinding, &message));
                warnings.push(message);
            }
            outcome => {
                dns_record = outcome.into_value();
                steps.push(StepRecord::succeeded(Step::DnsBinding));
            }
        }
    }

    let repository =
        ctx.git().remote_url("origin").and_then(|url| GitHubRepo::from_remote_url(&url));

    let app = ReviewApp {
        id: created.id,
        name: app_name,
        branch: target.branch,
        web_url: created.web_url,
        buildpacks: heroku.buildpacks.clone(),
        addons: heroku.addons.clone(),
        env_vars: config.env_vars.clone(),
        pipeline_id: heroku.pipeline_id.clone(),
    };

    Outcome::with_warnings(ProvisionReport { app, repository, dns_record, steps }, warnings)
}
