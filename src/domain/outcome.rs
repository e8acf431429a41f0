//! Result of a best-effort operation.
//!
//! Fatal conditions are reported as `Err(AppError)` by the command itself;
//! `Outcome` covers the three non-fatal tiers.

use std::fmt;

/// Non-fatal result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Every step succeeded.
    Success(T),
    /// The operation produced a value but some steps were reported as warnings.
    PartialSuccess { value: T, warnings: Vec<String> },
    /// The operation was aborted.
    Failed { reason: String },
}

impl<T> Outcome<T> {
    pub fn failed<S: Into<String>>(reason: S) -> Self {
        Outcome::Failed { reason: reason.into() }
    }

    /// Wrap `value`, downgrading to `PartialSuccess` when warnings were collected.
    pub fn with_warnings(value: T, warnings: Vec<String>) -> Self {
        if warnings.is_empty() {
            Outcome::Success(value)
        } else {
            Outcome::PartialSuccess { value, warnings }
        }
    }

    /// True unless the operation failed.
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) | Outcome::PartialSuccess { value, .. } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) | Outcome::PartialSuccess { value, .. } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Outcome::PartialSuccess { warnings, .. } => warnings,
            _ => &[],
        }
    }
}

/// A provisioning step as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CreateApp,
    Buildpacks,
    Addon(String),
    ConfigVars,
    PipelineCoupling,
    GitRemote,
    DnsBinding,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateApp => write!(f, "create app"),
            Step::Buildpacks => write!(f, "buildpacks"),
            Step::Addon(plan) => write!(f, "add-on {}", plan),
            Step::ConfigVars => write!(f, "config vars"),
            Step::PipelineCoupling => write!(f, "pipeline coupling"),
            Step::GitRemote => write!(f, "git remote"),
            Step::DnsBinding => write!(f, "DNS binding"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Warned(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: Step,
    pub status: StepStatus,
}

impl StepRecord {
    pub fn succeeded(step: Step) -> Self {
        Self { step, status: StepStatus::Succeeded }
    }

    pub fn warned<S: Into<String>>(step: Step, message: S) -> Self {
        Self { step, status: StepStatus::Warned(message.into()) }
    }
}
