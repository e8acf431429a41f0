use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter that replays canned answers and records the questions asked.
///
/// Running out of answers behaves like a cancelled prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    confirms: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[&str], confirms: &[bool]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            confirms: confirms.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, current: Option<&str>) -> Result<Option<String>, AppError> {
        self.asked.push(match current {
            Some(value) => format!("{} [{}]", prompt, value),
            None => prompt.to_string(),
        });
        Ok(self.inputs.pop_front())
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, AppError> {
        self.asked.push(prompt.to_string());
        Ok(self.confirms.pop_front())
    }
}
