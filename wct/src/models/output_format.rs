// src/models/output_format.rs
use std::fmt;
use std::str::FromStr;

/// File encoding for the count when it is not printed to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
    Csv,
}

impl OutputFormat {
    /// Fixed output file name for this format.
    #[inline]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Txt => "output.txt",
            Self::Json => "output.json",
            Self::Csv => "output.csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOutputFormat(pub String);

impl fmt::Display for InvalidOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid output format. Choose txt, json, or csv.")
    }
}

impl std::error::Error for InvalidOutputFormat {}

impl FromStr for OutputFormat {
    type Err = InvalidOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(InvalidOutputFormat(other.to_owned())),
        }
    }
}
