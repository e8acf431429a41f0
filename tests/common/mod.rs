//! Shared testing harness for `heroku-review` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Credentials the binary would otherwise pick up from the developer's shell.
const CREDENTIAL_VARS: [&str; 4] =
    ["HEROKU_API_KEY", "CLOUDFLARE_API_KEY", "CLOUDFLARE_EMAIL", "CLOUDFLARE_ZONE_ID"];

/// Testing harness providing an isolated `$HOME` and git working copy.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a committed `main` branch.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        git(&work_dir, &["init", "--initial-branch=main"]);
        git(&work_dir, &["config", "user.name", "Test User"]);
        git(&work_dir, &["config", "user.email", "test@example.com"]);
        fs::write(work_dir.join("README.md"), "review app fixture\n").unwrap();
        git(&work_dir, &["add", "."]);
        git(&work_dir, &["commit", "-m", "initial commit"]);

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the git working copy used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default config file location inside the emulated home.
    pub fn config_path(&self) -> PathBuf {
        self.home().join(".heroku-review-apps.ini")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    /// Create a bare repository and register it as a remote of the working copy.
    pub fn add_bare_remote(&self, name: &str) -> PathBuf {
        let bare = self.home().join(format!("{}.git", name));
        fs::create_dir_all(&bare).unwrap();
        git(&bare, &["init", "--bare", "--initial-branch=main"]);
        git(&self.work_dir, &["remote", "add", name, bare.to_str().unwrap()]);
        bare
    }

    pub fn checkout_new_branch(&self, branch: &str) {
        git(&self.work_dir, &["checkout", "-b", branch]);
    }

    /// Build a command for invoking the compiled binary within the working copy.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("heroku-review").expect("Failed to locate binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.home());
        for var in CREDENTIAL_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

/// Run git in `dir`, asserting success, and return trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("git {} failed to start: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
