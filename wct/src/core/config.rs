// src/core/config.rs
pub mod loader;

pub use loader::load_config;

use crate::error::WordCountError;
use crate::models::FilterConfig;
use std::path::Path;

/// Fallback syntax of a filter config file, picked from its suffix.
///
/// JSON is always tried first; the suffix only decides what to try next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSyntax {
    Json,
    Yaml,
    Toml,
}

impl ConfigSyntax {
    /// `.yaml`/`.yml` and `.toml` select their syntax; everything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Decodes a filter config document.
///
/// The content is decoded as JSON whatever the file is called. Only when
/// that fails is `syntax` used to retry as YAML or TOML. A `null` (or empty
/// YAML) document decodes to an empty config.
///
/// # Errors
///
/// Returns [`WordCountError::ConfigFormat`] if the document is not a mapping
/// of category names to lists of strings.
pub fn parse_config(content: &str, syntax: ConfigSyntax) -> Result<FilterConfig, WordCountError> {
    let json_err = match serde_json::from_str::<Option<FilterConfig>>(content) {
        Ok(parsed) => return Ok(parsed.unwrap_or_default()),
        Err(e) => e,
    };

    let parsed: Option<FilterConfig> = match syntax {
        ConfigSyntax::Json => return Err(WordCountError::ConfigFormat(json_err.into())),
        ConfigSyntax::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| WordCountError::ConfigFormat(e.into()))?
        }
        ConfigSyntax::Toml => Some(
            toml::from_str(content).map_err(|e| WordCountError::ConfigFormat(e.into()))?,
        ),
    };
    Ok(parsed.unwrap_or_default())
}
