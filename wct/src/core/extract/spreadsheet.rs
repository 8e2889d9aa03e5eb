// src/core/extract/spreadsheet.rs
use crate::core::extract::{find_column_index, sum_cells};
use crate::error::WordCountError;
use crate::models::FilterConfig;
use calamine::{Data, Range, Reader as _, open_workbook_auto_from_rs};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Counts the words in one column of a workbook sheet.
///
/// The first row of the sheet is the header row; later rows too short to
/// reach the column are skipped.
///
/// # Arguments
///
/// * `path` - The workbook file
/// * `sheet` - Name of the sheet to read
/// * `column` - Header of the column to count, matched exactly
/// * `config` - Optional filter rules applied to each cell
///
/// # Errors
///
/// This function may return an error if:
/// * `sheet` or `column` is empty (checked before the file is opened)
/// * The workbook cannot be opened or the sheet cannot be read
/// * The sheet has no rows
/// * No header equals `column`
#[inline]
pub fn count_spreadsheet_words(
    path: &Path,
    sheet: &str,
    column: &str,
    config: Option<&FilterConfig>,
) -> Result<u64, WordCountError> {
    if sheet.is_empty() || column.is_empty() {
        return Err(WordCountError::MissingSheetOrColumn);
    }

    let rows = read_sheet_rows(path, sheet)?;
    let (headers, data) = rows.split_first().ok_or_else(|| WordCountError::SheetEmpty {
        sheet: sheet.to_owned(),
    })?;
    let column_index =
        find_column_index(headers, column).ok_or_else(|| WordCountError::SheetColumnNotFound {
            column: column.to_owned(),
        })?;
    debug!("counting sheet '{sheet}' column '{column}' at index {column_index}");

    Ok(sum_cells(data.iter().map(|row| row.get(column_index)), config))
}

/// Reads every row of a sheet as text.
///
/// The container format is sniffed from the content, so OOXML workbooks saved
/// with a `.xls` name open as well as legacy BIFF files.
///
/// # Errors
///
/// Returns [`WordCountError::WorkbookOpen`] if the file cannot be read or is
/// not a workbook, and [`WordCountError::SheetRead`] if the sheet is missing.
pub fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>, WordCountError> {
    let bytes = fs::read(path).map_err(|e| WordCountError::WorkbookOpen(calamine::Error::Io(e)))?;
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(WordCountError::WorkbookOpen)?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| WordCountError::SheetRead {
            sheet: sheet.to_owned(),
            source,
        })?;
    Ok(range_to_rows(&range))
}

/// Lays a used range out as rows anchored at cell A1.
///
/// Rows and columns before the used range become empty, and trailing empty
/// cells are dropped from each row.
pub(crate) fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };
    let leading_rows = usize::try_from(first_row).unwrap_or_default();
    let leading_cols = usize::try_from(first_col).unwrap_or_default();

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); leading_rows];
    for row in range.rows() {
        let mut cells = vec![String::new(); leading_cols];
        cells.extend(row.iter().map(ToString::to_string));
        while cells.last().is_some_and(String::is_empty) {
            cells.pop();
        }
        rows.push(cells);
    }
    rows
}
