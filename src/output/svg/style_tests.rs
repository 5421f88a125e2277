//! Tests for language color resolution.

use super::*;

#[test]
fn known_color_ignores_case() {
    assert_eq!(known_color("Go"), Some("#00ADD8"));
    assert_eq!(known_color("GO"), Some("#00ADD8"));
    assert_eq!(known_color("rust"), Some("#dea584"));
    assert_eq!(known_color("Dockerfile"), Some("#384d54"));
}

#[test]
fn known_color_handles_symbols() {
    assert_eq!(known_color("C++"), Some("#f34b7d"));
    assert_eq!(known_color("C#"), Some("#178600"));
    assert_eq!(known_color("C"), Some("#555555"));
}

#[test]
fn unknown_language_has_no_known_color() {
    assert_eq!(known_color("TeX"), None);
    assert_eq!(known_color(""), None);
}

#[test]
fn color_for_prefers_known_color() {
    assert_eq!(color_for("Python", 4), "#3572A5");
}

#[test]
fn color_for_falls_back_by_rank() {
    assert_eq!(color_for("TeX", 0), "#f2c94c");
    assert_eq!(color_for("TeX", 2), "#27ae60");
    assert_eq!(color_for("Other", 5), "#eb5757");
}

#[test]
fn fallback_palette_cycles() {
    for rank in 0..FALLBACK_PALETTE.len() {
        assert_eq!(
            color_for("Zig", rank),
            color_for("Zig", rank + FALLBACK_PALETTE.len())
        );
    }
}
