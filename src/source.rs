//! Domain types shared by the repository and language sources.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::Result;

/// Language name to byte count, as reported for a single repository.
pub type LanguageBytes = HashMap<String, u64>;

/// Whether an owner is a personal account or an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnerKind {
    #[default]
    User,
    Organization,
}

/// The account whose repositories are ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub kind: OwnerKind,
}

impl Owner {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: OwnerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One entry of a repository listing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    /// `owner/name`, used for language lookups and error reporting.
    pub full_name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Lists every repository of an owner.
pub trait RepositorySource {
    /// # Errors
    /// Returns an error if any page cannot be fetched or decoded.
    fn repositories(&self, owner: &Owner) -> Result<Vec<Repository>>;
}

/// Looks up the language breakdown of one repository.
pub trait LanguageSource {
    /// # Errors
    /// Returns an error if the lookup fails or cannot be decoded.
    fn languages(&self, repository: &Repository) -> Result<LanguageBytes>;
}
