use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use colored::Colorize;
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::{Console, NoticeLevel};

/// Console on the controlling terminal.
///
/// Uses dialoguer when stdin and stdout are a TTY, and plain line reads
/// otherwise so answers can be piped in.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() && io::stdout().is_terminal() }
    }

    fn read_piped_line(&self, prompt: &str) -> Result<Option<String>, AppError> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        println!();
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if !self.interactive {
            return self.read_piped_line(prompt);
        }

        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(format!("Failed to read input: {}", err))),
        }
    }

    fn notice(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Heading => println!("{}", message.bold()),
            NoticeLevel::Plain => println!("{}", message),
            NoticeLevel::Info => println!("{} {}", "ℹ".blue().bold(), message),
            NoticeLevel::Success => println!("{} {}", "✓".green().bold(), message),
            NoticeLevel::Warning => eprintln!("{} {}", "⚠".yellow().bold(), message.yellow()),
            NoticeLevel::Failure => eprintln!("{}", message.red()),
        }
    }
}
