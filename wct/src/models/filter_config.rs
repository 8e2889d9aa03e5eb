// src/models/filter_config.rs
use serde::Deserialize;
use std::collections::BTreeMap;

pub const IGNORE_TAGS: &str = "ignore_tags";
pub const REMOVE_CHARS: &str = "remove_chars";

/// Filter rules keyed by category name.
///
/// Only `ignore_tags` and `remove_chars` drive preprocessing. Other keys are
/// kept so a config written for a newer version still loads.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct FilterConfig {
    rules: BTreeMap<String, Vec<String>>,
}

impl FilterConfig {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Replaces the rule list for `category`.
    #[inline]
    #[must_use]
    pub fn with_rules<I, S>(mut self, category: &str, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .insert(category.to_owned(), rules.into_iter().map(Into::into).collect());
        self
    }

    #[inline]
    #[must_use]
    pub fn rules(&self, category: &str) -> &[String] {
        self.rules.get(category).map_or(&[], Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn ignore_tags(&self) -> &[String] {
        self.rules(IGNORE_TAGS)
    }

    #[inline]
    #[must_use]
    pub fn remove_chars(&self) -> &[String] {
        self.rules(REMOVE_CHARS)
    }

    /// Number of rule categories present, recognized or not.
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.rules.len()
    }
}
