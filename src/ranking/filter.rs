use crate::source::Repository;

/// Fork/archive policy applied to a listing before any language lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepoFilter {
    pub include_forks: bool,
    pub include_archived: bool,
}

impl RepoFilter {
    #[must_use]
    pub const fn new(include_forks: bool, include_archived: bool) -> Self {
        Self {
            include_forks,
            include_archived,
        }
    }

    #[must_use]
    pub const fn allows(&self, repository: &Repository) -> bool {
        (self.include_forks || !repository.fork) && (self.include_archived || !repository.archived)
    }

    /// Keep the repositories this policy allows, preserving listing order.
    #[must_use]
    pub fn apply(&self, repositories: Vec<Repository>) -> Vec<Repository> {
        repositories.into_iter().filter(|r| self.allows(r)).collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
