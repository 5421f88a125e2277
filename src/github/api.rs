use serde::de::DeserializeOwned;

use crate::error::{LangRankError, Result};
use crate::source::{
    LanguageBytes, LanguageSource, Owner, OwnerKind, Repository, RepositorySource,
};

use super::client::HttpClient;

pub const GITHUB_API_URL: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;

/// GitHub REST API backed repository and language source.
#[derive(Debug)]
pub struct GitHubApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> GitHubApi<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            base_url: GITHUB_API_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// URL of one listing page for `owner`.
    #[must_use]
    pub fn repositories_url(&self, owner: &Owner, page: usize) -> String {
        let scope = match owner.kind {
            OwnerKind::User => "users",
            OwnerKind::Organization => "orgs",
        };
        format!(
            "{}/{scope}/{}/repos?per_page={PAGE_SIZE}&page={page}",
            self.base_url, owner.name
        )
    }

    #[must_use]
    pub fn languages_url(&self, repository: &Repository) -> String {
        format!("{}/repos/{}/languages", self.base_url, repository.full_name)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.client.get(url)?;
        serde_json::from_str(&body).map_err(|source| LangRankError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl<C: HttpClient> RepositorySource for GitHubApi<C> {
    fn repositories(&self, owner: &Owner) -> Result<Vec<Repository>> {
        let mut all = Vec::new();
        for page in 1.. {
            let batch: Vec<Repository> = self.get_json(&self.repositories_url(owner, page))?;
            if batch.is_empty() {
                break;
            }
            tracing::debug!(owner = %owner, page, count = batch.len(), "fetched repository page");
            all.extend(batch);
        }
        Ok(all)
    }
}

impl<C: HttpClient> LanguageSource for GitHubApi<C> {
    fn languages(&self, repository: &Repository) -> Result<LanguageBytes> {
        self.get_json(&self.languages_url(repository))
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
