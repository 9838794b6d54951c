use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{Console, NoticeLevel};

/// Console that replays canned answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub notices: Vec<(NoticeLevel, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Answers not consumed by the run.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn messages(&self, level: NoticeLevel) -> Vec<&str> {
        self.notices.iter().filter(|(l, _)| *l == level).map(|(_, m)| m.as_str()).collect()
    }

    pub fn was_asked(&self, fragment: &str) -> bool {
        self.prompts.iter().any(|p| p.contains(fragment))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn notice(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }
}
