//! Confirmation prompts for replacing foreign links
//!
//! The reconciler only sees the [`ConfirmReplace`] trait. On a terminal the
//! question is asked through `inquire`; otherwise a single line is read from
//! stdin so answers can be piped in. Anything but `y` is a no, and so is
//! Esc. Ctrl-C aborts the run with [`AppError::PromptInterrupted`].

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use inquire::{Confirm, InquireError};
use tracing::debug;

use crate::error::{AppError, Result};

/// Asks whether an existing link to `current_target` may be replaced
pub trait ConfirmReplace {
    fn confirm_replace(&mut self, name: &str, current_target: &Path) -> Result<bool>;
}

/// Whether a typed answer means yes
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Prompt suited to the current stdin
pub enum StdinPrompt {
    Terminal(TerminalPrompt),
    Piped(LinePrompt<io::StdinLock<'static>, io::Stdout>),
}

impl StdinPrompt {
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            StdinPrompt::Terminal(TerminalPrompt)
        } else {
            StdinPrompt::Piped(LinePrompt::new(io::stdin().lock(), io::stdout()))
        }
    }
}

impl ConfirmReplace for StdinPrompt {
    fn confirm_replace(&mut self, name: &str, current_target: &Path) -> Result<bool> {
        match self {
            StdinPrompt::Terminal(prompt) => prompt.confirm_replace(name, current_target),
            StdinPrompt::Piped(prompt) => prompt.confirm_replace(name, current_target),
        }
    }
}

/// Interactive prompt rendered with `inquire`
pub struct TerminalPrompt;

impl ConfirmReplace for TerminalPrompt {
    fn confirm_replace(&mut self, name: &str, current_target: &Path) -> Result<bool> {
        let parser = |answer: &str| -> std::result::Result<bool, ()> { Ok(is_affirmative(answer)) };
        let message = format!("{name} points to {}. Replace?", current_target.display());
        let answer = Confirm::new(&message)
            .with_default(false)
            .with_parser(&parser)
            .with_help_message("y to replace, Esc keeps the existing link, Ctrl-C stops")
            .prompt();
        terminal_answer(answer)
    }
}

/// Map an `inquire` result onto a decision
///
/// Esc and read failures keep the existing link. Ctrl-C stops the whole run.
fn terminal_answer(answer: std::result::Result<bool, InquireError>) -> Result<bool> {
    match answer {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationInterrupted) => Err(AppError::PromptInterrupted),
        Err(e) => {
            debug!(error = %e, "prompt dismissed, keeping existing link");
            Ok(false)
        }
    }
}

/// Line-based prompt over arbitrary reader and writer
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmReplace for LinePrompt<R, W> {
    fn confirm_replace(&mut self, name: &str, current_target: &Path) -> Result<bool> {
        let _ = write!(
            self.output,
            "     {name} points to {}. Replace? (y/n): ",
            current_target.display()
        );
        let _ = self.output.flush();

        let mut line = String::new();
        let answer = match self.input.read_line(&mut line) {
            Ok(0) => {
                let _ = writeln!(self.output);
                false
            }
            Ok(_) => is_affirmative(&line),
            Err(e) => {
                debug!(error = %e, "failed to read answer");
                false
            }
        };
        Ok(answer)
    }
}

/// Prompt returning canned answers, then no
///
/// With `interrupt_when_exhausted`, running out of answers behaves like
/// Ctrl-C instead.
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<bool>,
    interrupt_when_exhausted: bool,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            interrupt_when_exhausted: false,
            asked: Vec::new(),
        }
    }

    pub fn interrupted_after(answers: &[bool]) -> Self {
        Self {
            interrupt_when_exhausted: true,
            ..Self::new(answers)
        }
    }
}

#[cfg(test)]
impl ConfirmReplace for ScriptedPrompt {
    fn confirm_replace(&mut self, name: &str, _current_target: &Path) -> Result<bool> {
        self.asked.push(name.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None if self.interrupt_when_exhausted => Err(AppError::PromptInterrupted),
            None => Ok(false),
        }
    }
}
