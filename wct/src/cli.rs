// src/cli.rs
pub mod interactive;

use anyhow::{Context as _, Result};
use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser as _};
use log::{debug, warn};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::interactive::prompt_for_args;
use crate::core::config::load_config;
use crate::core::counter::count_words;
use crate::core::extract::process_file;
use crate::core::output::{format_count_line, write_output};
use crate::core::preprocess::preprocess_text;
use crate::error::WordCountError;
use crate::models::{ExtractionRequest, FilterConfig, OutputFormat};

const BIN_NAME: &str = "wct";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = BIN_NAME, author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input file (.txt, .csv or .xls)
    #[arg(long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: Option<PathBuf>,

    /// String input for word count
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Output format: txt, json, csv
    #[arg(long, default_value = "txt")]
    pub output: String,

    /// Path to configuration file (JSON, YAML or TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print word count to the terminal
    #[arg(long)]
    pub print: bool,

    /// Sheet name (for .xls files)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Column name (for .csv/.xls files)
    #[arg(long)]
    pub column: Option<String>,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Leftover tokens, ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Parses flags from a token list that does not include the program name.
    ///
    /// # Errors
    ///
    /// Returns [`WordCountError::InvalidArguments`] if clap rejects the tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self, WordCountError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = std::iter::once(OsString::from(BIN_NAME)).chain(tokens.into_iter().map(Into::into));
        Self::try_parse_from(argv).map_err(WordCountError::InvalidArguments)
    }

    /// The input file, unless absent or empty.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Whether a file or text source was given.
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.file_path().is_some() || self.text.is_some()
    }

    #[must_use]
    pub fn extraction_request(&self, path: &Path) -> ExtractionRequest {
        ExtractionRequest {
            path: path.to_path_buf(),
            sheet: self.sheet.clone(),
            column: self.column.clone(),
        }
    }
}

/// Counts the words of whichever source `args` selects.
///
/// A non-empty `--file` wins over `--text`.
///
/// # Errors
///
/// Returns [`WordCountError::NoInput`] when neither source is present, or any
/// error raised while extracting from the file.
pub fn count_input(args: &Args, config: Option<&FilterConfig>) -> Result<u64, WordCountError> {
    if let Some(path) = args.file_path() {
        if args.text.is_some() {
            warn!("both --file and --text given; counting {}", path.display());
        }
        return process_file(&args.extraction_request(path), config);
    }

    match args.text.as_deref() {
        Some(text) => Ok(count_words(&preprocess_text(text, config))),
        None => Err(WordCountError::NoInput),
    }
}

/// Runs one invocation against the process's stdin, stdout and working
/// directory.
///
/// # Errors
///
/// See [`execute`].
pub fn run(args: Args) -> Result<()> {
    let output_dir = env::current_dir().context("Failed to resolve the working directory")?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    execute(args, &mut input, &mut out, &output_dir)
}

/// Resolves arguments, counts, and reports the result.
///
/// When `args` names no source, one line is read from `input` and parsed as
/// a fresh set of flags. The count goes to `out` with `--print`, otherwise to
/// the format's file inside `output_dir`. An unknown output format is
/// reported on `out` and the write is skipped.
///
/// # Errors
///
/// This function may return an error if:
/// * The interactive line cannot be read, is empty, or does not parse
/// * The config file cannot be read or parsed
/// * No source is given, or extraction fails
/// * The output file cannot be written
pub fn execute<R, W>(args: Args, input: &mut R, out: &mut W, output_dir: &Path) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let args = if args.has_input() {
        args
    } else {
        prompt_for_args(input, out)?
    };

    if !args.rest.is_empty() {
        warn!("ignoring unexpected arguments: {}", args.rest.join(" "));
    }

    let config = match args.config.as_deref() {
        Some(path) => Some(
            load_config(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
        ),
        None => None,
    };

    let word_count = count_input(&args, config.as_ref()).context("Failed to count words")?;
    debug!("counted {word_count} words");

    if args.print {
        writeln!(out, "{}", format_count_line(word_count))?;
        return Ok(());
    }

    match args.output.parse::<OutputFormat>() {
        Ok(format) => {
            write_output(word_count, format, output_dir)?;
        }
        Err(err) => {
            debug!("skipping output for format '{}'", err.0);
            writeln!(out, "Error: {err}")?;
        }
    }
    Ok(())
}

/// The message shown to the user for a failed run.
///
/// Prefers the [`WordCountError`] in the chain over any context wrapped
/// around it.
#[must_use]
pub fn user_message(err: &anyhow::Error) -> String {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<WordCountError>())
        .map_or_else(|| err.to_string(), ToString::to_string)
}
