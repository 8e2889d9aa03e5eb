// src/core/extract.rs
pub mod spreadsheet;
pub mod tabular;
pub mod text;

pub use spreadsheet::count_spreadsheet_words;
pub use tabular::count_csv_words;
pub use text::count_text_file_words;

use crate::core::counter::count_words;
use crate::core::preprocess::preprocess_text;
use crate::error::WordCountError;
use crate::models::{ExtractionRequest, FilterConfig, SourceKind};
use log::debug;

/// Counts the words in a file, dispatching on its suffix.
///
/// # Arguments
///
/// * `request` - The file plus its sheet/column selectors
/// * `config` - Optional filter rules applied before counting
///
/// # Returns
///
/// * `Ok(u64)` - The word count aggregated over the whole file or column
///
/// # Errors
///
/// This function may return an error if:
/// * The suffix is not `.txt`, `.csv` or `.xls`
/// * The file cannot be read or parsed
/// * A required sheet or column is missing
#[inline]
pub fn process_file(
    request: &ExtractionRequest,
    config: Option<&FilterConfig>,
) -> Result<u64, WordCountError> {
    let kind = SourceKind::from_path(&request.path).ok_or(WordCountError::UnsupportedFileType)?;
    debug!("reading {} as {kind}", request.path.display());

    match kind {
        SourceKind::PlainText => count_text_file_words(&request.path, config),
        SourceKind::Tabular => count_csv_words(&request.path, request.column_name(), config),
        SourceKind::Spreadsheet => count_spreadsheet_words(
            &request.path,
            request.sheet_name(),
            request.column_name(),
            config,
        ),
    }
}

/// Index of the first header exactly equal to `column`, left to right.
#[inline]
#[must_use]
pub fn find_column_index<S: AsRef<str>>(headers: &[S], column: &str) -> Option<usize> {
    headers.iter().position(|header| header.as_ref() == column)
}

/// Sums the word counts of one column's cells across data rows.
///
/// Each item is the row's cell in the target column, or `None` when the row
/// is too short to reach it. Short rows are skipped.
#[must_use]
pub fn sum_cells<I, C>(cells: I, config: Option<&FilterConfig>) -> u64
where
    I: IntoIterator<Item = Option<C>>,
    C: AsRef<str>,
{
    let mut total: u64 = 0;
    let mut skipped: u64 = 0;

    for cell in cells {
        if let Some(cell) = cell {
            let words = count_words(&preprocess_text(cell.as_ref(), config));
            total = total.saturating_add(words);
        } else {
            skipped = skipped.saturating_add(1);
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} rows too short for the selected column");
    }
    total
}
