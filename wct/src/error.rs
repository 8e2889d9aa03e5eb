// src/error.rs
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Every way a word count run can fail.
///
/// The `Display` text is the message shown to the user, so the binary can
/// print `Error: {err}` without further formatting.
#[derive(Error, Debug)]
pub enum WordCountError {
    // configuration
    #[error("Unable to read configuration file.")]
    ConfigRead(#[source] io::Error),

    #[error("Invalid configuration file format.")]
    ConfigFormat(#[source] Box<dyn StdError + Send + Sync>),

    // source files
    #[error("Unsupported file type.")]
    UnsupportedFileType,

    #[error("Unable to read text file.")]
    TextRead(#[source] io::Error),

    #[error("Unable to open CSV file.")]
    CsvOpen(#[source] csv::Error),

    #[error("Unable to read CSV file.")]
    CsvRead(#[source] csv::Error),

    #[error("CSV file is empty.")]
    CsvEmpty,

    #[error("Specified column not found in CSV.")]
    CsvColumnNotFound { column: String },

    #[error("Please specify both sheet and column for XLS files.")]
    MissingSheetOrColumn,

    #[error("Unable to open XLS file.")]
    WorkbookOpen(#[source] calamine::Error),

    #[error("Unable to read sheet.")]
    SheetRead {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("XLS sheet is empty.")]
    SheetEmpty { sheet: String },

    #[error("Specified column not found in XLS sheet.")]
    SheetColumnNotFound { column: String },

    // output
    #[error("Unable to write TXT output.")]
    TxtWrite(#[source] io::Error),

    #[error("Unable to create JSON file.")]
    JsonCreate(#[source] io::Error),

    #[error("Unable to write JSON output.")]
    JsonWrite(#[source] io::Error),

    #[error("Unable to create CSV file.")]
    CsvCreate(#[source] csv::Error),

    #[error("Unable to write CSV output.")]
    CsvWrite(#[source] csv::Error),

    // usage
    #[error("Please provide a file or text input.")]
    NoInput,

    #[error("No input provided. Exiting.")]
    EmptyInteractiveInput,

    #[error("Error reading input: {0}")]
    InteractiveRead(#[source] io::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[source] clap::Error),
}

impl WordCountError {
    /// Coarse category of the failure, used for debug logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ConfigRead(_)
            | Self::TextRead(_)
            | Self::CsvOpen(_)
            | Self::WorkbookOpen(_)
            | Self::TxtWrite(_)
            | Self::JsonCreate(_)
            | Self::JsonWrite(_)
            | Self::CsvCreate(_)
            | Self::CsvWrite(_)
            | Self::InteractiveRead(_) => "io",
            Self::ConfigFormat(_) | Self::CsvRead(_) | Self::SheetRead { .. } => "format",
            Self::CsvEmpty
            | Self::CsvColumnNotFound { .. }
            | Self::SheetEmpty { .. }
            | Self::SheetColumnNotFound { .. } => "lookup",
            Self::UnsupportedFileType
            | Self::MissingSheetOrColumn
            | Self::NoInput
            | Self::EmptyInteractiveInput
            | Self::InvalidArguments(_) => "usage",
        }
    }
}
