//! Aggregation and ranking of per-language byte counts.
//!
//! Pipeline order: [`RepoFilter`] → [`aggregate`] → [`apply_excludes`] →
//! [`rank`] → [`collapse`].

mod aggregate;
mod bucket;
mod exclude;
mod filter;
mod order;

use std::collections::HashMap;
use std::collections::hash_map;

pub use aggregate::aggregate;
pub use bucket::{OTHER_LABEL, collapse};
pub use exclude::apply_excludes;
pub use filter::RepoFilter;
pub use order::rank;

/// Total bytes per language across every aggregated repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    bytes: HashMap<String, u64>,
}

impl LanguageTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `bytes` to the running total of `language`.
    pub fn add(&mut self, language: &str, bytes: u64) {
        match self.bytes.get_mut(language) {
            Some(total) => *total = total.saturating_add(bytes),
            None => {
                self.bytes.insert(language.to_string(), bytes);
            }
        }
    }

    pub fn remove(&mut self, language: &str) -> Option<u64> {
        self.bytes.remove(language)
    }

    /// Iteration order is unspecified; use [`rank`] for a stable order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.bytes.iter()
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.bytes.keys().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for LanguageTotals {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (language, bytes) in iter {
            totals.add(language.as_ref(), bytes);
        }
        totals
    }
}

/// A language and its byte count at a fixed rank position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub language: String,
    pub bytes: u64,
}

impl RankedEntry {
    #[must_use]
    pub fn new(language: impl Into<String>, bytes: u64) -> Self {
        Self {
            language: language.into(),
            bytes,
        }
    }
}

/// Sum of bytes across `entries`, widened so it cannot overflow.
#[must_use]
pub fn total_bytes(entries: &[RankedEntry]) -> u128 {
    entries.iter().map(|e| u128::from(e.bytes)).sum()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
