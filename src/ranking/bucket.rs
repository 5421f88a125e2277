use super::RankedEntry;

/// Name of the synthetic entry holding everything beyond the cut-off.
pub const OTHER_LABEL: &str = "Other";

/// Keep the first `top` entries of a ranked list.
///
/// With `show_other`, the bytes of the dropped tail are appended as a final
/// [`OTHER_LABEL`] entry (omitted when the tail sums to zero). The synthetic
/// entry is never re-ranked. `top == 0` or `top >= len` is a no-op.
#[must_use]
pub fn collapse(mut ranked: Vec<RankedEntry>, top: usize, show_other: bool) -> Vec<RankedEntry> {
    if top == 0 || top >= ranked.len() {
        return ranked;
    }

    let tail = ranked.split_off(top);
    if show_other {
        let other_bytes = tail.iter().fold(0u64, |acc, e| acc.saturating_add(e.bytes));
        if other_bytes > 0 {
            ranked.push(RankedEntry::new(OTHER_LABEL, other_bytes));
        }
    }
    tracing::debug!(kept = top, collapsed = tail.len(), show_other, "collapsed ranking");
    ranked
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
