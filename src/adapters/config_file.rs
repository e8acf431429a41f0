use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::domain::config::{parse_config_content, paths, render_config};
use crate::domain::{AppError, ReviewConfig};
use crate::ports::ConfigStore;

/// Config file on disk, with process environment fallbacks for credentials.
#[derive(Debug, Clone)]
pub struct IniConfigStore {
    path: PathBuf,
}

impl IniConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `~/.heroku-review-apps.ini`.
    pub fn default_location() -> Result<Self, AppError> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::config_error("Could not determine home directory"))?;
        Ok(Self::new(paths::config(&home)))
    }
}

impl ConfigStore for IniConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ReviewConfig, AppError> {
        let doc = if self.path.exists() {
            parse_config_content(&fs::read_to_string(&self.path)?)?
        } else {
            tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
            Ini::new()
        };
        Ok(ReviewConfig::from_document(&doc, |var| std::env::var(var).ok()))
    }

    fn save(&self, config: &ReviewConfig) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, render_config(&config.to_document())?)?;
        Ok(())
    }
}
