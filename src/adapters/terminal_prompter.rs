use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter backed by the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn cancelled_or<T>(err: DialoguerError) -> Result<Option<T>, AppError> {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => Ok(None),
        err => Err(AppError::Prompt(err.to_string())),
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, current: Option<&str>) -> Result<Option<String>, AppError> {
        let prompt = match current {
            Some(value) if !value.is_empty() => format!("{} [{}]", prompt, value),
            _ => prompt.to_string(),
        };
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(err) => cancelled_or(err),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, AppError> {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(value) => Ok(Some(value)),
            Err(err) => cancelled_or(err),
        }
    }
}
