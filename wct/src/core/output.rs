// src/core/output.rs
use crate::error::WordCountError;
use crate::models::{OutputFormat, WordCountReport};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

/// Line printed to the terminal and written to text output.
#[inline]
#[must_use]
pub fn format_count_line(word_count: u64) -> String {
    format!("Word Count: {word_count}")
}

/// Writes the count to the fixed output file for `format` inside `dir`.
///
/// # Arguments
///
/// * `word_count` - The count to write
/// * `format` - Output encoding, which also picks the file name
/// * `dir` - Directory that receives `output.txt`, `output.json` or `output.csv`
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the file written
///
/// # Errors
///
/// This function may return an error if the output file cannot be created or
/// written.
#[inline]
pub fn write_output(
    word_count: u64,
    format: OutputFormat,
    dir: &Path,
) -> Result<PathBuf, WordCountError> {
    let path = dir.join(format.file_name());
    match format {
        OutputFormat::Txt => write_output_txt(word_count, &path)?,
        OutputFormat::Json => write_output_json(&WordCountReport::new(word_count), &path)?,
        OutputFormat::Csv => write_output_csv(&WordCountReport::new(word_count), &path)?,
    }
    debug!("wrote {}", path.display());
    Ok(path)
}

fn write_output_txt(word_count: u64, path: &Path) -> Result<(), WordCountError> {
    let line = format_count_line(word_count);
    fs::write(path, format!("{line}\n")).map_err(WordCountError::TxtWrite)
}

fn write_output_json(report: &WordCountReport, path: &Path) -> Result<(), WordCountError> {
    let file = File::create(path).map_err(WordCountError::JsonCreate)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, report)
        .map_err(|e| WordCountError::JsonWrite(e.into()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(WordCountError::JsonWrite)
}

fn write_output_csv(report: &WordCountReport, path: &Path) -> Result<(), WordCountError> {
    let mut writer = csv::Writer::from_path(path).map_err(WordCountError::CsvCreate)?;
    writer
        .write_record(["Metric", "Value"])
        .map_err(WordCountError::CsvWrite)?;
    writer
        .write_record(["Word Count", report.word_count.to_string().as_str()])
        .map_err(WordCountError::CsvWrite)?;
    writer.flush().map_err(|e| WordCountError::CsvWrite(e.into()))
}
