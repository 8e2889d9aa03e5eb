// src/lib.rs
//! Word counting for literal text, plain-text files, CSV columns and
//! spreadsheet columns, with optional filter rules and txt/json/csv output.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use cli::{Args, count_input, execute, run};
pub use crate::core::config::load_config;
pub use crate::core::counter::count_words;
pub use crate::core::extract::{
    count_csv_words, count_spreadsheet_words, count_text_file_words, process_file,
};
pub use crate::core::output::write_output;
pub use crate::core::preprocess::preprocess_text;
pub use error::WordCountError;
pub use models::{ExtractionRequest, FilterConfig, OutputFormat, SourceKind, WordCountReport};
