use crate::domain::AppError;

/// Port for interactive questions during setup.
///
/// `Ok(None)` means the user cancelled the prompt.
pub trait Prompter {
    /// Ask for a line of text. Empty input returns `Some("")`.
    fn input(&mut self, prompt: &str, current: Option<&str>) -> Result<Option<String>, AppError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, AppError>;
}
