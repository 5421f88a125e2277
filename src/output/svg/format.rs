//! Text formatting helpers for SVG output.

/// Escape text for embedding in SVG element content or attribute values.
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Share of `bytes` in `total` as a percentage with two decimals, e.g. `66.67%`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_percent(bytes: u64, total: u128) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    let percent = bytes as f64 / total as f64 * 100.0;
    format!("{percent:.2}%")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
