// src/core/preprocess.rs
use crate::models::FilterConfig;

/// Strips filter rules from `input`.
///
/// Every `ignore_tags` entry is removed first, then every `remove_chars`
/// entry, each in list order and each against the already-filtered text.
/// With no config the input is returned unchanged.
#[inline]
#[must_use]
pub fn preprocess_text(input: &str, config: Option<&FilterConfig>) -> String {
    let Some(config) = config else {
        return input.to_owned();
    };

    let mut text = input.to_owned();
    for rule in config.ignore_tags().iter().chain(config.remove_chars()) {
        if rule.is_empty() {
            continue;
        }
        if text.contains(rule.as_str()) {
            text = text.replace(rule.as_str(), "");
        }
    }
    text
}
