// src/models/source_kind.rs
use std::fmt;
use std::path::Path;

/// Which extractor handles a file, decided by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    Tabular,
    Spreadsheet,
}

impl SourceKind {
    /// Maps `.txt`, `.csv` and `.xls` suffixes to a kind. Matching is
    /// case-sensitive; anything else yields `None`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt") => Some(Self::PlainText),
            Some("csv") => Some(Self::Tabular),
            Some("xls") => Some(Self::Spreadsheet),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlainText => "plain text",
            Self::Tabular => "csv",
            Self::Spreadsheet => "spreadsheet",
        };
        f.write_str(name)
    }
}
