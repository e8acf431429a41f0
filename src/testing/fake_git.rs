use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Git;

pub struct FakeGit {
    pub current_branch: Mutex<Option<String>>,
    pub remotes: Mutex<Vec<(String, String)>>,
    pub pushes: Mutex<Vec<(String, String, String)>>,
    pub fail_push: Mutex<bool>,
    pub fail_list_remotes: Mutex<bool>,
}

impl Default for FakeGit {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGit {
    pub fn new() -> Self {
        Self {
            current_branch: Mutex::new(Some("main".to_string())),
            remotes: Mutex::new(Vec::new()),
            pushes: Mutex::new(Vec::new()),
            fail_push: Mutex::new(false),
            fail_list_remotes: Mutex::new(false),
        }
    }

    pub fn on_branch(branch: &str) -> Self {
        let git = Self::new();
        *git.current_branch.lock().unwrap() = Some(branch.to_string());
        git
    }

    /// Simulate a working copy whose branch cannot be determined.
    pub fn detached() -> Self {
        let git = Self::new();
        *git.current_branch.lock().unwrap() = None;
        git
    }

    pub fn with_remote(self, name: &str, url: &str) -> Self {
        self.remotes.lock().unwrap().push((name.to_string(), url.to_string()));
        self
    }

    pub fn remote_names(&self) -> Vec<String> {
        self.remotes.lock().unwrap().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn recorded_pushes(&self) -> Vec<(String, String, String)> {
        self.pushes.lock().unwrap().clone()
    }
}

impl Git for FakeGit {
    fn current_branch(&self) -> Result<String, AppError> {
        self.current_branch.lock().unwrap().clone().ok_or_else(|| AppError::GitError {
            command: "git rev-parse --abbrev-ref HEAD".into(),
            details: "HEAD is detached".into(),
        })
    }

    fn remote_url(&self, remote: &str) -> Option<String> {
        self.remotes.lock().unwrap().iter().find(|(name, _)| name == remote).map(|(_, url)| url.clone())
    }

    fn list_remotes(&self) -> Result<Vec<String>, AppError> {
        if *self.fail_list_remotes.lock().unwrap() {
            return Err(AppError::GitError { command: "git remote".into(), details: "not a git repository".into() });
        }
        Ok(self.remote_names())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        let mut remotes = self.remotes.lock().unwrap();
        if remotes.iter().any(|(existing, _)| existing == name) {
            return Err(AppError::RemoteExists(name.to_string()));
        }
        remotes.push((name.to_string(), url.to_string()));
        Ok(())
    }

    fn force_push(&self, remote: &str, local_branch: &str, remote_branch: &str) -> Result<(), AppError> {
        if *self.fail_push.lock().unwrap() {
            return Err(AppError::GitError {
                command: format!("git push -f {} {}:{}", remote, local_branch, remote_branch),
                details: "Could not resolve host: git.heroku.com".into(),
            });
        }
        self.pushes.lock().unwrap().push((
            remote.to_string(),
            local_branch.to_string(),
            remote_branch.to_string(),
        ));
        Ok(())
    }
}
