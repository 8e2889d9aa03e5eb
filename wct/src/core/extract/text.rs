// src/core/extract/text.rs
use crate::core::counter::count_words;
use crate::core::preprocess::preprocess_text;
use crate::error::WordCountError;
use crate::models::FilterConfig;
use std::fs;
use std::path::Path;

/// Counts the words of a whole plain-text file.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Errors
///
/// Returns [`WordCountError::TextRead`] if the file cannot be read.
#[inline]
pub fn count_text_file_words(
    path: &Path,
    config: Option<&FilterConfig>,
) -> Result<u64, WordCountError> {
    let bytes = fs::read(path).map_err(WordCountError::TextRead)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(count_words(&preprocess_text(&content, config)))
}
