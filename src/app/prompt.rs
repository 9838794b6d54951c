//! Ask-until-valid interaction primitive.
//!
//! Each call blocks on the console until the answer validates. There is no
//! retry cap; only closed input ends a loop without a value.

use crate::domain::{AppError, Choice, ValidationFailure, validation};
use crate::ports::{Console, HostResolver, NoticeLevel};

/// Prompt loop over a console, with the resolver validators need.
pub struct PromptLoop<'a, C: Console + ?Sized, R: HostResolver + ?Sized> {
    console: &'a mut C,
    resolver: &'a R,
}

impl<'a, C: Console + ?Sized, R: HostResolver + ?Sized> PromptLoop<'a, C, R> {
    pub fn new(console: &'a mut C, resolver: &'a R) -> Self {
        Self { console, resolver }
    }

    pub fn resolver(&self) -> &'a R {
        self.resolver
    }

    /// Ask `prompt` until `validate` accepts the trimmed answer.
    pub fn ask<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, AppError>
    where
        F: FnMut(&str) -> Result<T, ValidationFailure>,
    {
        loop {
            let line = self.console.read_line(prompt)?.ok_or(AppError::InputClosed)?;
            match validate(line.trim()) {
                Ok(value) => return Ok(value),
                Err(failure) => {
                    tracing::debug!(prompt, reason = failure.message(), "answer rejected");
                    self.console.notice(NoticeLevel::Failure, failure.message());
                }
            }
        }
    }

    /// Ask a yes/no question; an empty answer takes `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool, AppError> {
        let hint = if default { "Y/n" } else { "y/N" };
        let prompt = format!("{} [{}]", question, hint);
        self.ask(&prompt, |answer| validation::yes_no(answer, default))
    }

    /// Offer every option of `T` with its description, re-listed before each attempt.
    pub fn choose<T: Choice>(&mut self, heading: &str, prompt: &str) -> Result<T, AppError> {
        loop {
            self.console.notice(NoticeLevel::Heading, heading);
            for choice in T::ALL {
                self.console
                    .notice(NoticeLevel::Plain, &format!("{}: {}", choice.name(), choice.description()));
            }

            let line = self.console.read_line(prompt)?.ok_or(AppError::InputClosed)?;
            match T::find(&line) {
                Some(choice) => return Ok(choice),
                None => self.console.notice(
                    NoticeLevel::Failure,
                    &format!("You must use one of {}", T::names().join(", ")),
                ),
            }
        }
    }

    pub fn notice(&mut self, level: NoticeLevel, message: &str) {
        self.console.notice(level, message);
    }
}
