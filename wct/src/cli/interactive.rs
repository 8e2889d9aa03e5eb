// src/cli/interactive.rs
use std::io::{BufRead, Write};

use crate::cli::Args;
use crate::error::WordCountError;

pub const USAGE_HINTS: &str = "No file or text input provided. Please enter your arguments below.
For example:
--file test_files/sample.txt --print
or
--text \"Hello world\" --print";

const PROMPT: &str = "Enter arguments: ";

/// Asks for one line of flags and parses it like a command line.
///
/// There is no retry: an unreadable or empty line is an error.
///
/// # Errors
///
/// This function may return an error if:
/// * The prompt cannot be written or the line cannot be read
/// * The line is empty after trimming
/// * The tokens are not valid flags
pub fn prompt_for_args<R, W>(input: &mut R, out: &mut W) -> Result<Args, WordCountError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{USAGE_HINTS}").map_err(WordCountError::InteractiveRead)?;
    write!(out, "{PROMPT}").map_err(WordCountError::InteractiveRead)?;
    out.flush().map_err(WordCountError::InteractiveRead)?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(WordCountError::InteractiveRead)?;

    let line = line.trim();
    if line.is_empty() {
        return Err(WordCountError::EmptyInteractiveInput);
    }
    Args::from_tokens(split_arguments(line))
}

/// Splits on single spaces, dropping the empty tokens that runs of spaces
/// leave behind. Quotes are not interpreted.
#[must_use]
pub fn split_arguments(line: &str) -> Vec<&str> {
    line.split(' ').filter(|token| !token.is_empty()).collect()
}
