// src/models/extraction_request.rs
use std::path::PathBuf;

/// A file to count plus the sheet and column selectors that apply to it.
///
/// Selectors are ignored for plain-text sources. Tabular sources need a
/// column; spreadsheet sources need both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub path: PathBuf,
    pub sheet: Option<String>,
    pub column: Option<String>,
}

impl ExtractionRequest {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
            column: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Sheet name, or `""` when none was given.
    #[inline]
    #[must_use]
    pub fn sheet_name(&self) -> &str {
        self.sheet.as_deref().unwrap_or_default()
    }

    /// Column name, or `""` when none was given.
    #[inline]
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or_default()
    }
}
