//! Shared in-memory sources for pipeline and ranking tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{LangRankError, Result};
use crate::source::{
    LanguageBytes, LanguageSource, Owner, Repository, RepositorySource,
};

pub fn repo(full_name: &str) -> Repository {
    Repository {
        name: full_name.rsplit('/').next().unwrap_or_default().to_string(),
        full_name: full_name.to_string(),
        fork: false,
        archived: false,
    }
}

pub fn fork(full_name: &str) -> Repository {
    Repository {
        fork: true,
        ..repo(full_name)
    }
}

pub fn archived(full_name: &str) -> Repository {
    Repository {
        archived: true,
        ..repo(full_name)
    }
}

pub fn bytes(pairs: &[(&str, u64)]) -> LanguageBytes {
    pairs.iter().map(|(l, b)| ((*l).to_string(), *b)).collect()
}

/// Fake owner listing plus per-repository language maps.
#[derive(Default)]
pub struct FakeGitHub {
    repositories: Vec<Repository>,
    languages: HashMap<String, LanguageBytes>,
    failing: Option<String>,
    listing_error: bool,
    pub lookups: RefCell<Vec<String>>,
}

impl FakeGitHub {
    pub fn with_repo(mut self, repository: Repository, langs: &[(&str, u64)]) -> Self {
        self.languages
            .insert(repository.full_name.clone(), bytes(langs));
        self.repositories.push(repository);
        self
    }

    /// Make the language lookup for `full_name` fail with a 500.
    pub fn failing_on(mut self, full_name: &str) -> Self {
        self.failing = Some(full_name.to_string());
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.listing_error = true;
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.borrow().len()
    }
}

impl RepositorySource for FakeGitHub {
    fn repositories(&self, owner: &Owner) -> Result<Vec<Repository>> {
        if self.listing_error {
            return Err(LangRankError::Status {
                url: format!("https://api.test/users/{owner}/repos?per_page=100&page=1"),
                status: 404,
                reason: "Not Found".to_string(),
                body: String::new(),
            });
        }
        Ok(self.repositories.clone())
    }
}

impl LanguageSource for FakeGitHub {
    fn languages(&self, repository: &Repository) -> Result<LanguageBytes> {
        self.lookups.borrow_mut().push(repository.full_name.clone());
        if self.failing.as_deref() == Some(repository.full_name.as_str()) {
            return Err(LangRankError::Status {
                url: format!("https://api.test/repos/{}/languages", repository.full_name),
                status: 500,
                reason: "Internal Server Error".to_string(),
                body: String::new(),
            });
        }
        Ok(self
            .languages
            .get(&repository.full_name)
            .cloned()
            .unwrap_or_default())
    }
}
