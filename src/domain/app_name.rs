use std::fmt;

/// Prefix applied to names derived from a branch.
pub const REVIEW_PREFIX: &str = "review-";

/// Longest app name Heroku accepts.
pub const MAX_APP_NAME_LEN: usize = 30;

/// Host serving the git push endpoints for Heroku apps.
const GIT_HOST: &str = "https://git.heroku.com";

/// Name of a review app on the hosting platform.
///
/// Derived names are guaranteed to be lowercase, free of `/` and `_`, and at
/// most [`MAX_APP_NAME_LEN`] characters. Explicit names are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    /// Derive the canonical review app name for a branch.
    pub fn derive(branch: &str) -> Self {
        let normalized: String = branch
            .to_lowercase()
            .chars()
            .map(|c| if c == '/' || c == '_' { '-' } else { c })
            .collect();
        let name: String =
            format!("{REVIEW_PREFIX}{normalized}").chars().take(MAX_APP_NAME_LEN).collect();
        Self(name)
    }

    /// Use the explicit name when one was given, otherwise derive from `branch`.
    pub fn resolve(explicit: Option<&str>, branch: &str) -> Self {
        match explicit {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self::derive(branch),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the git endpoint that accepts pushes for this app.
    pub fn git_url(&self) -> String {
        format!("{GIT_HOST}/{}.git", self.0)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
