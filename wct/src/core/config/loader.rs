// src/core/config/loader.rs
use crate::core::config::{ConfigSyntax, parse_config};
use crate::error::WordCountError;
use crate::models::FilterConfig;
use log::debug;
use std::fs;
use std::path::Path;

/// Loads filter rules from a config file.
///
/// # Arguments
///
/// * `path` - Path to a JSON, YAML or TOML config document
///
/// # Returns
///
/// * `Ok(FilterConfig)` containing the loaded rule lists
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not a mapping of category names to lists of strings
#[inline]
pub fn load_config(path: &Path) -> Result<FilterConfig, WordCountError> {
    let content = fs::read_to_string(path).map_err(WordCountError::ConfigRead)?;
    let config = parse_config(&content, ConfigSyntax::from_path(path))?;

    debug!(
        "loaded {} rule categories from {}",
        config.category_count(),
        path.display()
    );
    Ok(config)
}
