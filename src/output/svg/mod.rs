//! SVG rendering of the language ranking card.
//!
//! Building blocks are plain elements ([`Rect`], [`Text`], [`ClipPath`])
//! composed by [`SvgBuilder`]; [`LanguageCard`] lays them out on a fixed
//! 640×320 canvas.

mod builder;
mod card;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use card::{CANVAS_HEIGHT, CANVAS_WIDTH, CardLayout, LanguageCard, segment_widths, write_svg};
pub use element::{Background, ClipPath, Rect, SvgElement, Text};
pub use format::{escape_text, format_percent};
pub use style::{FALLBACK_PALETTE, color_for, known_color};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
