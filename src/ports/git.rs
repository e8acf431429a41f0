use crate::domain::AppError;

/// Port for the source-control working copy.
pub trait Git {
    /// Get the checked-out branch name.
    fn current_branch(&self) -> Result<String, AppError>;

    /// URL of the named remote, if it exists.
    fn remote_url(&self, remote: &str) -> Option<String>;

    /// Names of all configured remotes.
    fn list_remotes(&self) -> Result<Vec<String>, AppError>;

    /// Add a remote. Fails with `AppError::RemoteExists` when the name is taken.
    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError>;

    /// Force-push `local_branch` to `remote_branch` on `remote`.
    fn force_push(&self, remote: &str, local_branch: &str, remote_branch: &str)
    -> Result<(), AppError>;
}
