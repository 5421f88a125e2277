use std::collections::HashSet;

use super::LanguageTotals;

/// Remove every language matching one of `terms`, ignoring case.
///
/// Returns the removed language names as they appeared in `totals`, sorted
/// lexically. Terms that match nothing are ignored.
pub fn apply_excludes(totals: &mut LanguageTotals, terms: &[String]) -> Vec<String> {
    if terms.is_empty() {
        return Vec::new();
    }

    let normalized: HashSet<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    let mut removed: Vec<String> = totals
        .languages()
        .filter(|language| normalized.contains(&language.to_lowercase()))
        .map(str::to_string)
        .collect();

    for language in &removed {
        totals.remove(language);
    }

    removed.sort();
    if !removed.is_empty() {
        tracing::info!(excluded = ?removed, "excluded languages");
    }
    removed
}

#[cfg(test)]
#[path = "exclude_tests.rs"]
mod tests;
