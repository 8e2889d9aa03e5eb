// src/core/extract/tabular.rs
use crate::core::extract::{find_column_index, sum_cells};
use crate::error::WordCountError;
use crate::models::FilterConfig;
use csv::{ByteRecord, ReaderBuilder};
use log::debug;
use std::borrow::Cow;
use std::path::Path;

/// Counts the words in one column of a CSV file.
///
/// The first record is the header row. Records may have differing field
/// counts; those too short to reach the column are skipped. Cells that are
/// not valid UTF-8 are decoded lossily.
///
/// # Arguments
///
/// * `path` - The CSV file
/// * `column` - Header of the column to count, matched exactly
/// * `config` - Optional filter rules applied to each cell
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or is not valid CSV
/// * The file has no records
/// * No header equals `column`
#[inline]
pub fn count_csv_words(
    path: &Path,
    column: &str,
    config: Option<&FilterConfig>,
) -> Result<u64, WordCountError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(WordCountError::CsvOpen)?;

    let records = reader
        .byte_records()
        .collect::<Result<Vec<ByteRecord>, _>>()
        .map_err(WordCountError::CsvRead)?;

    let (headers, rows) = records.split_first().ok_or(WordCountError::CsvEmpty)?;
    let headers: Vec<Cow<'_, str>> = headers.iter().map(String::from_utf8_lossy).collect();
    let column_index =
        find_column_index(&headers, column).ok_or_else(|| WordCountError::CsvColumnNotFound {
            column: column.to_owned(),
        })?;
    debug!("counting csv column '{column}' at index {column_index}");

    Ok(sum_cells(
        rows.iter()
            .map(|row| row.get(column_index).map(String::from_utf8_lossy)),
        config,
    ))
}
