use std::collections::BTreeMap;

use super::AppName;

/// A review app as created on the hosting platform.
///
/// Only lives in memory; downstream steps consume its fields by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewApp {
    pub id: String,
    pub name: AppName,
    pub branch: String,
    pub web_url: String,
    pub buildpacks: Vec<String>,
    pub addons: Vec<String>,
    pub env_vars: BTreeMap<String, String>,
    pub pipeline_id: Option<String>,
}

/// An app name paired with the branch it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: AppName,
    pub branch: String,
}

/// GitHub repository identified by `owner/repo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo(String);

impl GitHubRepo {
    /// Extract the slug from an SSH or HTTPS GitHub remote URL.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let rest = url
            .strip_prefix("git@github.com:")
            .or_else(|| url.strip_prefix("https://github.com/"))?;
        let slug = rest.strip_suffix(".git").unwrap_or(rest).trim_end_matches('/');
        if slug.is_empty() { None } else { Some(Self(slug.to_string())) }
    }

    pub fn slug(&self) -> &str {
        &self.0
    }
}
