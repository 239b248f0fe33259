//! Terminal implementation of the overwrite prompt.

use std::io::{self, BufRead, IsTerminal, Write};

use hatch_core::{
    application::{ApplicationError, OverwritePrompt},
    error::HatchResult,
};

/// Asks on the terminal whether to write into an existing directory.
///
/// Uses `dialoguer` when built with the `interactive` feature and stdin is a
/// TTY; otherwise prints the question to stderr and reads one line from
/// stdin. Empty input, `y` and `yes` accept. End of input declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl OverwritePrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> HatchResult<bool> {
        if io::stdin().is_terminal() {
            ask(message)
        } else {
            ask_line(message, io::stdin().lock(), io::stderr())
        }
    }
}

#[cfg(feature = "interactive")]
fn ask(message: &str) -> HatchResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()
        .map_err(|e| prompt_failed(e.to_string()))
}

#[cfg(not(feature = "interactive"))]
fn ask(message: &str) -> HatchResult<bool> {
    ask_line(message, io::stdin().lock(), io::stderr())
}

/// Write the question to `out`, then read the answer from `input`.
fn ask_line(message: &str, input: impl BufRead, mut out: impl Write) -> HatchResult<bool> {
    write!(out, "{message} [Yn] ")
        .and_then(|()| out.flush())
        .map_err(|e| prompt_failed(e.to_string()))?;
    read_answer(input)
}

fn read_answer(mut input: impl BufRead) -> HatchResult<bool> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| prompt_failed(e.to_string()))?;
    if read == 0 {
        return Ok(false);
    }
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "" | "y" | "yes"
    ))
}

fn prompt_failed(reason: String) -> hatch_core::error::HatchError {
    ApplicationError::PromptFailed { reason }.into()
}
