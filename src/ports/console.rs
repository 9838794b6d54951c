//! Operator-facing terminal I/O.

use crate::domain::AppError;

/// Presentation class of a line written to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Bold section heading.
    Heading,
    /// Unstyled text, such as the list of choices.
    Plain,
    Info,
    Success,
    /// Non-fatal condition the operator should see, written to stderr.
    Warning,
    /// Rejected input, written to stderr.
    Failure,
}

/// Line-based console used by the prompt loop.
pub trait Console {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once input is closed or interrupted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Write a message to the operator.
    fn notice(&mut self, level: NoticeLevel, message: &str);
}
