//! Manual per-category amounts that replace computed values.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::breakdown::CostCategory;
use crate::constants::LOG_OVERRIDE_IGNORED;
use crate::debug_log_enabled;
use crate::numbers::{parse_finite, round_currency};

/// Raw override text keyed by category.
///
/// Text is stored exactly as typed so the input field can echo it back; only
/// finite, non-negative numbers count as an active override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct OverrideMap {
    entries: BTreeMap<CostCategory, String>,
}

impl OverrideMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text typed into a category's custom amount field.
    pub fn set(&mut self, category: CostCategory, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() && parse_override(&text).is_none() && debug_log_enabled() {
            log::debug!("{LOG_OVERRIDE_IGNORED} {category}={text:?}");
        }
        self.entries.insert(category, text);
    }

    /// Remove a category's override, returning whether one existed.
    pub fn clear(&mut self, category: CostCategory) -> bool {
        self.entries.remove(&category).is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn raw(&self, category: CostCategory) -> Option<&str> {
        self.entries.get(&category).map(String::as_str)
    }

    /// The validated override amount, rounded to whole dollars.
    #[must_use]
    pub fn value(&self, category: CostCategory) -> Option<u64> {
        self.raw(category).and_then(parse_override)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories with a valid override and their amounts.
    pub fn active(&self) -> impl Iterator<Item = (CostCategory, u64)> + '_ {
        self.entries
            .iter()
            .filter_map(|(category, text)| parse_override(text).map(|v| (*category, v)))
    }
}

fn parse_override(text: &str) -> Option<u64> {
    parse_finite(text)
        .filter(|value| *value >= 0.0)
        .map(round_currency)
}
