//! Layering of configuration sources.
//!
//! Resolution order: built-in defaults, then the config file, then options
//! given explicitly on the command line. A layer only overrides the fields it
//! actually sets.

use std::path::PathBuf;

use crate::error::{LangRankError, Result};

use super::model::{Config, DEFAULT_OUTPUT, PartialConfig};

impl PartialConfig {
    /// Apply `overrides` on top of `self`, field by field.
    #[must_use]
    pub fn overlay(self, overrides: Self) -> Self {
        Self {
            username: overrides.username.or(self.username),
            token: overrides.token.or(self.token),
            output: overrides.output.or(self.output),
            include_forks: overrides.include_forks.or(self.include_forks),
            include_archived: overrides.include_archived.or(self.include_archived),
            org: overrides.org.or(self.org),
            show_other: overrides.show_other.or(self.show_other),
            exclude: overrides.exclude.or(self.exclude),
            top: overrides.top.or(self.top),
        }
    }

    /// Fill unset fields with defaults and validate.
    ///
    /// # Errors
    /// Returns [`LangRankError::MissingUsername`] if no non-blank username is set.
    pub fn resolve(self) -> Result<Config> {
        let username = self
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(LangRankError::MissingUsername)?;

        Ok(Config {
            username,
            token: self.token.filter(|t| !t.trim().is_empty()),
            output: self
                .output
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            include_forks: self.include_forks.unwrap_or(false),
            include_archived: self.include_archived.unwrap_or(false),
            org: self.org.unwrap_or(false),
            show_other: self.show_other.unwrap_or(true),
            exclude: normalize_terms(self.exclude.unwrap_or_default()),
            top: self.top.map_or(0, top_limit),
        })
    }
}

/// Any non-positive limit keeps every language.
fn top_limit(top: i64) -> usize {
    if top <= 0 {
        return 0;
    }
    usize::try_from(top).unwrap_or(usize::MAX)
}

/// Trim exclude terms and drop blank ones.
#[must_use]
pub fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
