use std::fmt::Write;

use crate::ranking::RankedEntry;

const MIN_NAME_WIDTH: usize = 8;

/// Two-column console summary of the final ranking.
///
/// ```text
/// Language Bytes
/// -------- -----
/// Go       300
/// ```
#[must_use]
pub fn format_summary(ranked: &[RankedEntry]) -> String {
    let width = ranked
        .iter()
        .map(|e| e.language.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    let mut output = String::new();
    let _ = writeln!(output, "{:<width$} Bytes", "Language");
    let _ = writeln!(output, "{} -----", "-".repeat(width));
    for entry in ranked {
        let _ = writeln!(output, "{:<width$} {}", entry.language, entry.bytes);
    }
    output
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
