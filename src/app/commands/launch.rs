//! Provision a review app, then deploy the branch to it.

use crate::app::AppContext;
use crate::domain::{AppError, Outcome};
use crate::ports::{DnsProvider, Git, HostingPlatform};

use super::create::{self, ProvisionReport};
use super::deploy::{self, DeployReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub provisioned: Outcome<ProvisionReport>,
    /// `None` when provisioning produced no app.
    pub deployed: Option<Outcome<DeployReport>>,
}

/// Create the review app and push the branch to whatever name the platform
/// assigned.
pub fn execute<G, H, D>(
    ctx: &AppContext<G, H, D>,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<LaunchReport, AppError>
where
    G: Git,
    H: HostingPlatform,
    D: DnsProvider,
{
    let provisioned = create::execute(ctx, name, branch)?;
    let deployed = match provisioned.value() {
        Some(report) => Some(deploy::execute(ctx.git(), Some(report.app.name.as_str()), branch)?),
        None => {
            tracing::debug!("provisioning failed, skipping deploy");
            None
        }
    };
    Ok(LaunchReport { provisioned, deployed })
}
