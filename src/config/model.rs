use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ranking::RepoFilter;
use crate::source::{Owner, OwnerKind};

/// Chart path used when neither the config file nor the CLI names one.
pub const DEFAULT_OUTPUT: &str = "lang-rank.svg";

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Settings as written in a config file, or as given on the command line.
///
/// Every field is optional so that "not set" can be told apart from a value
/// equal to the default; layers are combined with [`PartialConfig::overlay`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialConfig {
    /// GitHub user or organization login.
    pub username: Option<String>,

    /// Bearer token for the GitHub API.
    pub token: Option<String>,

    /// Destination of the SVG chart.
    pub output: Option<PathBuf>,

    /// Include forked repositories.
    pub include_forks: Option<bool>,

    /// Include archived repositories.
    pub include_archived: Option<bool>,

    /// Treat `username` as an organization.
    pub org: Option<bool>,

    /// Append an "Other" entry for languages cut by `top`.
    pub show_other: Option<bool>,

    /// Languages removed before ranking (case-insensitive).
    pub exclude: Option<Vec<String>>,

    /// Keep only the N largest languages (0 or less = all).
    pub top: Option<i64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    pub output: PathBuf,
    pub include_forks: bool,
    pub include_archived: bool,
    pub org: bool,
    pub show_other: bool,
    pub exclude: Vec<String>,
    pub top: usize,
}

impl Config {
    #[must_use]
    pub fn owner(&self) -> Owner {
        let kind = if self.org {
            OwnerKind::Organization
        } else {
            OwnerKind::User
        };
        Owner::new(self.username.clone(), kind)
    }

    #[must_use]
    pub const fn repo_filter(&self) -> RepoFilter {
        RepoFilter::new(self.include_forks, self.include_archived)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
