use std::io;

use thiserror::Error;

/// Library-wide error type for review app operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Malformed configuration file.
    #[error("Invalid config file at line {line}: {reason}")]
    ConfigParse { line: usize, reason: String },

    /// No Heroku API key in the config file or `HEROKU_API_KEY`.
    #[error("Heroku API key is not configured. Run 'heroku-review setup' or set HEROKU_API_KEY.")]
    MissingApiKey,

    /// The checked-out branch could not be determined.
    #[error("Could not determine the current git branch: {0}")]
    BranchResolution(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// A git remote with this name is already configured.
    #[error("Git remote '{0}' already exists")]
    RemoteExists(String),

    /// The Heroku Platform API rejected a request.
    #[error("Heroku API error ({status}): {body}")]
    PlatformApi { status: u16, body: String },

    /// The Cloudflare API rejected a request.
    #[error("Cloudflare API error: {0}")]
    DnsApi(String),

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

impl From<ini::ParseError> for AppError {
    fn from(err: ini::ParseError) -> Self {
        // Parser lines are zero-based.
        AppError::ConfigParse { line: err.line + 1, reason: err.msg.to_string() }
    }
}
