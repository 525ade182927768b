//! Terminal implementation of the [`Answerer`] port.

use std::io::{self, BufRead, IsTerminal, Write};

use wtf_core::{
    application::{ApplicationError, interpret_answer, ports::Answerer},
    error::ScaffoldResult,
};

/// Asks on the terminal; falls back to a plain line read when stdin is piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAnswerer;

impl Answerer for TerminalAnswerer {
    fn confirm(&self, prompt: &str) -> ScaffoldResult<bool> {
        let answer = if io::stdin().is_terminal() {
            ask_interactive(prompt)?
        } else {
            ask_line(prompt, &mut io::stdin().lock(), &mut io::stderr())?
        };
        Ok(interpret_answer(&answer))
    }
}

#[cfg(feature = "interactive")]
fn ask_interactive(prompt: &str) -> ScaffoldResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_failed(&e.to_string()))
}

#[cfg(not(feature = "interactive"))]
fn ask_interactive(prompt: &str) -> ScaffoldResult<String> {
    ask_line(prompt, &mut io::stdin().lock(), &mut io::stderr())
}

/// Write `prompt` to `output` and read one line. End of input counts as an
/// empty answer. Callers pass stderr; stdout is reserved for the report.
fn ask_line(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> ScaffoldResult<String> {
    write!(output, "{prompt} ")
        .and_then(|()| output.flush())
        .map_err(|e| prompt_failed(&e.to_string()))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| prompt_failed(&e.to_string()))?;
    Ok(line)
}

fn prompt_failed(reason: &str) -> wtf_core::error::ScaffoldError {
    ApplicationError::PromptFailed {
        reason: reason.into(),
    }
    .into()
}
