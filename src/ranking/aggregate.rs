use crate::error::{LangRankError, Result};
use crate::source::{LanguageSource, Repository};

use super::LanguageTotals;

/// Sum the language breakdowns of every repository into one total.
///
/// Lookups run sequentially, one per repository. The first failing lookup
/// aborts the whole aggregation and names the repository; no partial totals
/// are returned. `on_fetched` is called after each successful lookup.
///
/// # Errors
/// Returns [`LangRankError::NoRepositories`] for an empty slice, or
/// [`LangRankError::Languages`] wrapping the first lookup failure.
pub fn aggregate<S, F>(
    repositories: &[Repository],
    source: &S,
    mut on_fetched: F,
) -> Result<LanguageTotals>
where
    S: LanguageSource + ?Sized,
    F: FnMut(&Repository),
{
    if repositories.is_empty() {
        return Err(LangRankError::NoRepositories);
    }

    let mut totals = LanguageTotals::new();
    for repository in repositories {
        let languages = source
            .languages(repository)
            .map_err(|e| LangRankError::Languages {
                repository: repository.full_name.clone(),
                source: Box::new(e),
            })?;
        tracing::trace!(repository = %repository.full_name, languages = languages.len(), "fetched languages");
        for (language, bytes) in &languages {
            totals.add(language, *bytes);
        }
        on_fetched(repository);
    }

    Ok(totals)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
