//! One sequential pass: list, filter, aggregate, exclude, rank, bucket.

use std::path::Path;

use crate::config::Config;
use crate::error::{LangRankError, Result};
use crate::output::svg::{LanguageCard, write_svg};
use crate::output::{FetchProgress, format_summary};
use crate::ranking::{RankedEntry, aggregate, apply_excludes, collapse, rank};
use crate::source::{LanguageSource, Owner, RepositorySource};

/// Final ranking of one run, ready to print and render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankReport {
    pub owner: Owner,
    pub ranked: Vec<RankedEntry>,
    /// Languages removed by the exclude list, as named in the data.
    pub excluded: Vec<String>,
}

impl RankReport {
    /// Console table of the final entries.
    #[must_use]
    pub fn summary(&self) -> String {
        format_summary(&self.ranked)
    }

    /// Render the SVG card.
    ///
    /// # Errors
    /// Returns [`LangRankError::NoLanguageData`] if nothing is left to chart.
    pub fn render_svg(&self) -> Result<String> {
        LanguageCard::new(&self.ranked, &self.excluded).render()
    }

    /// Render the card and write it to `path`.
    ///
    /// Nothing is written when rendering fails.
    ///
    /// # Errors
    /// Returns a rendering error or [`LangRankError::ChartWrite`].
    pub fn write_chart(&self, path: &Path) -> Result<()> {
        let svg = self.render_svg()?;
        write_svg(path, &svg)?;
        tracing::info!(
            owner = %self.owner,
            path = %path.display(),
            entries = self.ranked.len(),
            "chart written"
        );
        Ok(())
    }
}

/// Fetch and rank the languages of the configured owner.
///
/// Any fetch failure aborts the run; no partial totals are returned.
///
/// # Errors
/// Returns fetch errors from `github`, or [`LangRankError::NoRepositories`]
/// when the filter leaves nothing to look up.
pub fn build_report<S>(config: &Config, github: &S, quiet: bool) -> Result<RankReport>
where
    S: RepositorySource + LanguageSource + ?Sized,
{
    let owner = config.owner();
    let listed = github.repositories(&owner)?;
    let listed_count = listed.len();

    let repositories = config.repo_filter().apply(listed);
    tracing::info!(
        owner = %owner,
        listed = listed_count,
        kept = repositories.len(),
        "filtered repositories"
    );
    if repositories.is_empty() {
        return Err(LangRankError::NoRepositories);
    }

    let progress = FetchProgress::new(repositories.len() as u64, quiet);
    let totals = aggregate(&repositories, github, |repository| {
        progress.inc(&repository.full_name);
    });
    progress.finish();
    let mut totals = totals?;

    let excluded = apply_excludes(&mut totals, &config.exclude);
    let ranked = collapse(rank(&totals), config.top, config.show_other);

    Ok(RankReport {
        owner,
        ranked,
        excluded,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
