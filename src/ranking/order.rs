use std::cmp::Ordering;

use super::{LanguageTotals, RankedEntry};

/// Order languages by descending bytes, breaking ties by ascending name.
///
/// The result is independent of the map's iteration order.
#[must_use]
pub fn rank(totals: &LanguageTotals) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = totals
        .iter()
        .map(|(language, bytes)| RankedEntry::new(language.clone(), *bytes))
        .collect();
    entries.sort_by(compare);
    entries
}

fn compare(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.bytes
        .cmp(&a.bytes)
        .then_with(|| a.language.cmp(&b.language))
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
