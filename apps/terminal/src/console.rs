//! # Console
//!
//! Line-oriented prompts over any `BufRead` + `Write` pair.
//!
//! ## Prompt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  select(parse)                                                          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  "< " + read line ──── EOF? ──────────────────► AppError::InputClosed   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  parse(line) ── Ok ───────────────────────────► value                   │
//! │     │                                                                   │
//! │     ├── InvalidSelection, attempts left ──► retry hint, ask again      │
//! │     ├── InvalidSelection, none left ──────► CoreError::InvalidSelection │
//! │     └── any other error ──────────────────► returned as is             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tests drive a session with `Console<Cursor<Vec<u8>>, Vec<u8>>`.

use std::io::{self, BufRead, Stdin, Stdout, Write};
use tracing::debug;

use emporium_core::CoreResult;

use crate::error::{AppError, AppResult};

/// Prompt shown before every answer.
pub const PROMPT: &str = "< ";

/// Hint printed after a rejected choice.
pub const RETRY_HINT: &str = "> That is not one of the options, please try again.";

pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `max_attempts` below 1 is treated as 1.
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Console {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.output, "{}", text.as_ref()).map_err(AppError::Console)
    }

    /// Prints the prompt and reads one line, without its line ending.
    pub fn ask(&mut self) -> AppResult<String> {
        write!(self.output, "{}", PROMPT).map_err(AppError::Console)?;
        self.output.flush().map_err(AppError::Console)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(AppError::Console)?;
        if read == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Prints a question, then reads the answer.
    pub fn ask_with(&mut self, question: &str) -> AppResult<String> {
        self.say(question)?;
        self.ask()
    }

    /// Asks until `parse` accepts the answer or the attempts run out.
    pub fn select<T>(&mut self, mut parse: impl FnMut(&str) -> CoreResult<T>) -> AppResult<T> {
        let mut attempt = 1;
        loop {
            let line = self.ask()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable_by_prompt() => {
                    debug!(attempt, input = %line, "Rejected selection");
                    if attempt >= self.max_attempts {
                        return Err(err.into());
                    }
                    self.say(RETRY_HINT)?;
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Console over the process's standard streams.
pub type StdConsole = Console<io::StdinLock<'static>, Stdout>;

pub fn stdio(max_attempts: u32) -> StdConsole {
    let stdin: Stdin = io::stdin();
    Console::new(stdin.lock(), io::stdout(), max_attempts)
}
