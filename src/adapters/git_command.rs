use crate::domain::AppError;
use crate::ports::Git;
use git2::{ErrorCode, Repository};
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Adapter rooted at the process working directory.
    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.message().to_string(),
        })
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        tracing::debug!(command = %format!("git {}", args.join(" ")), "running git");
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(&self.root);

        let output = command.output().map_err(|e| AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Git for GitCommandAdapter {
    fn current_branch(&self) -> Result<String, AppError> {
        let repo = self.repo()?;

        match repo.head() {
            Ok(head) if head.is_branch() => {
                let shorthand = head.shorthand().ok_or_else(|| AppError::GitError {
                    command: "git2::Reference::shorthand".to_string(),
                    details: "HEAD has no shorthand".to_string(),
                })?;
                Ok(shorthand.to_string())
            }
            Ok(_) => Err(AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: "HEAD is detached".to_string(),
            }),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head_ref = repo.find_reference("HEAD").map_err(|e| AppError::GitError {
                    command: "git2::Repository::find_reference(HEAD)".to_string(),
                    details: e.message().to_string(),
                })?;

                match head_ref.symbolic_target() {
                    Some(target) => {
                        Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
                    }
                    None => Err(AppError::GitError {
                        command: "current_branch".to_string(),
                        details: "HEAD is detached and unborn".to_string(),
                    }),
                }
            }
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: e.message().to_string(),
            }),
        }
    }

    fn remote_url(&self, remote: &str) -> Option<String> {
        let repo = self.repo().ok()?;
        let remote = repo.find_remote(remote).ok()?;
        remote.url().map(str::to_string)
    }

    fn list_remotes(&self) -> Result<Vec<String>, AppError> {
        let repo = self.repo()?;
        let remotes = repo.remotes().map_err(|e| AppError::GitError {
            command: "git2::Repository::remotes".to_string(),
            details: e.message().to_string(),
        })?;
        Ok(remotes.iter().flatten().map(str::to_string).collect())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        let repo = self.repo()?;
        match repo.remote(name, url) {
            Ok(_) => Ok(()),
            Err(e) if e.code() == ErrorCode::Exists => Err(AppError::RemoteExists(name.to_string())),
            Err(e) => Err(AppError::GitError {
                command: format!("git remote add {} {}", name, url),
                details: e.message().to_string(),
            }),
        }
    }

    fn force_push(
        &self,
        remote: &str,
        local_branch: &str,
        remote_branch: &str,
    ) -> Result<(), AppError> {
        let refspec = format!("{}:{}", local_branch, remote_branch);
        self.run(&["push", "-f", remote, &refspec])?;
        Ok(())
    }
}
