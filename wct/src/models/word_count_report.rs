// src/models/word_count_report.rs
use serde::Serialize;

/// The serialized form of a count: `{"word_count": n}`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCountReport {
    pub word_count: u64,
}

impl WordCountReport {
    #[inline]
    #[must_use]
    pub const fn new(word_count: u64) -> Self {
        Self { word_count }
    }
}
