//! Card theme and language colors.

/// Font stack shared by every text element.
pub const FONT_FAMILY: &str = "Poppins, 'Segoe UI', Arial, sans-serif";

/// Dark card theme.
pub mod theme {
    pub const CARD_FILL: &str = "#202a2f";
    pub const CARD_STROKE: &str = "#324047";
    pub const HEADER: &str = "#9be36a";
    pub const TRACK_FILL: &str = "#1b2328";
    pub const TILE_FILL: &str = "#1b2328";
    pub const TILE_STROKE: &str = "#2c3a42";
    pub const NAME: &str = "#d3dde3";
    pub const PERCENT: &str = "#93a4ac";
    pub const BYTES: &str = "#6f848e";
    pub const NOTE: &str = "#93a4ac";
}

/// Colors used, by rank position, for languages without a known color.
pub const FALLBACK_PALETTE: [&str; 6] = [
    "#f2c94c", "#2d9cdb", "#27ae60", "#bb6bd9", "#56ccf2", "#eb5757",
];

/// Known color for a language, matched case-insensitively.
#[must_use]
pub fn known_color(language: &str) -> Option<&'static str> {
    let color = match language.to_lowercase().as_str() {
        "go" => "#00ADD8",
        "python" => "#3572A5",
        "javascript" => "#f1e05a",
        "typescript" => "#3178c6",
        "java" => "#b07219",
        "php" => "#4F5D95",
        "ruby" => "#701516",
        "c" => "#555555",
        "c++" => "#f34b7d",
        "c#" => "#178600",
        "swift" => "#F05138",
        "kotlin" => "#A97BFF",
        "rust" => "#dea584",
        "scala" => "#c22d40",
        "shell" => "#89e051",
        "html" => "#e34c26",
        "css" => "#563d7c",
        "vue" => "#41b883",
        "dart" => "#00B4AB",
        "lua" => "#000080",
        "r" => "#198CE7",
        "matlab" => "#e16737",
        "makefile" => "#427819",
        "hcl" => "#844FBA",
        "dockerfile" => "#384d54",
        _ => return None,
    };
    Some(color)
}

/// Color for the entry at `rank`: the known color, else the palette cycled by rank.
#[must_use]
pub fn color_for(language: &str, rank: usize) -> &'static str {
    known_color(language).unwrap_or(FALLBACK_PALETTE[rank % FALLBACK_PALETTE.len()])
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
