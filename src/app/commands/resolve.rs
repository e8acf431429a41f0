use crate::domain::{AppError, AppName, Target};
use crate::ports::Git;

/// Resolve the app name and branch a command operates on.
///
/// A missing branch is read from the working copy; failing to read it is
/// fatal. A missing name is derived from the branch.
pub fn resolve_target<G: Git>(
    git: &G,
    name: Option<&str>,
    branch: Option<&str>,
) -> Result<Target, AppError> {
    let branch = match branch {
        Some(branch) if !branch.is_empty() => branch.to_string(),
        _ => git.current_branch().map_err(|e| AppError::BranchResolution(e.to_string()))?,
    };
    let name = AppName::resolve(name, &branch);
    Ok(Target { name, branch })
}
