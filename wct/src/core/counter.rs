// src/core/counter.rs

/// Counts maximal runs of non-whitespace characters.
#[inline]
#[must_use]
pub fn count_words(text: &str) -> u64 {
    u64::try_from(text.split_whitespace().count()).unwrap_or(u64::MAX)
}
