use crate::domain::{AppError, Outcome, Target};
use crate::ports::Git;

use super::resolve::resolve_target;

/// Branch on the platform side that triggers a build.
pub const DEPLOY_BRANCH: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub target: Target,
    /// Whether the app remote had to be created first.
    pub remote_added: bool,
}

/// Force-push a branch to the review app's git remote.
///
/// Returns `Err` only when the branch cannot be resolved; git failures are
/// reported as `Outcome::Failed`.
pub fn execute<G: Git>(
    git: &G,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<Outcome<DeployReport>, AppError> {
    let target = resolve_target(git, name, branch)?;
    tracing::info!(app = %target.name, branch = %target.branch, "deploying");

    match push(git, &target) {
        Ok(remote_added) => Ok(Outcome::Success(DeployReport { target, remote_added })),
        Err(e) => {
            tracing::warn!(app = %target.name, error = %e, "deploy failed");
            Ok(Outcome::failed(format!("Error deploying to {}: {}", target.name, e)))
        }
    }
}

fn push<G: Git>(git: &G, target: &Target) -> Result<bool, AppError> {
    let remotes = git.list_remotes()?;
    let remote = target.name.as_str();
    let remote_added = !remotes.iter().any(|r| r == remote);
    if remote_added {
        git.add_remote(remote, &target.name.git_url())?;
    }
    git.force_push(remote, &target.branch, DEPLOY_BRANCH)?;
    Ok(remote_added)
}
