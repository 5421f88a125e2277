//! Language ranking card: proportional bar, tile grid and exclusion note.

use std::fs;
use std::path::Path;

use crate::error::{LangRankError, Result};
use crate::ranking::{RankedEntry, total_bytes};

use super::builder::SvgBuilder;
use super::element::{Background, ClipPath, Rect, SvgElement, Text};
use super::format::format_percent;
use super::style::{color_for, theme};

pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 320;

const HEADER_TEXT: &str = "Most Used Languages";
const BAR_CLIP_ID: &str = "barClip";

const CARD_PADDING: i64 = 28;
const CARD_RADIUS: i64 = 14;
const HEADER_HEIGHT: i64 = 24;
const HEADER_GAP: i64 = 18;
const HEADER_BASELINE: i64 = 18;
const BAR_HEIGHT: i64 = 14;
const BAR_RADIUS: i64 = 7;
const BAR_GAP: i64 = 22;
const TILE_HEIGHT: i64 = 72;
const TILE_GAP: i64 = 16;
const TILE_RADIUS: i64 = 12;
const FOOTER_HEIGHT: i64 = 28;
const FOOTNOTE_OFFSET: i64 = 20;
const FOOTNOTE_BOTTOM_MARGIN: i64 = 18;
const MAX_COLUMNS: usize = 3;

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Geometry of the card for a given number of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub columns: i64,
    pub rows: i64,
    /// Top of the content block, vertically centred but never above the padding.
    pub top: i64,
    pub bar_x: i64,
    pub bar_y: i64,
    pub bar_width: i64,
    pub grid_top: i64,
    pub grid_height: i64,
    pub tile_width: i64,
}

impl CardLayout {
    /// Layout for `entry_count` tiles (at least one), with room for a footnote if requested.
    #[must_use]
    pub fn compute(entry_count: usize, has_footnote: bool) -> Self {
        let entry_count = entry_count.max(1);
        let columns = entry_count.min(MAX_COLUMNS);
        let rows = to_i64(entry_count.div_ceil(columns));
        let columns = to_i64(columns);

        let content_width = i64::from(CANVAS_WIDTH) - CARD_PADDING * 2;
        let footer_height = if has_footnote { FOOTER_HEIGHT } else { 0 };
        let grid_height = rows * TILE_HEIGHT + (rows - 1) * TILE_GAP;
        let content_height =
            HEADER_HEIGHT + HEADER_GAP + BAR_HEIGHT + BAR_GAP + grid_height + footer_height;
        let top = ((i64::from(CANVAS_HEIGHT) - content_height) / 2).max(CARD_PADDING);

        let bar_y = top + HEADER_HEIGHT + HEADER_GAP;
        Self {
            columns,
            rows,
            top,
            bar_x: CARD_PADDING,
            bar_y,
            bar_width: content_width,
            grid_top: bar_y + BAR_HEIGHT + BAR_GAP,
            grid_height,
            tile_width: (content_width - (columns - 1) * TILE_GAP) / columns,
        }
    }

    /// Top-left corner of the tile at `index`, filling rows left to right.
    #[must_use]
    pub fn tile_origin(&self, index: usize) -> (i64, i64) {
        let index = to_i64(index);
        let row = index / self.columns;
        let col = index % self.columns;
        (
            CARD_PADDING + col * (self.tile_width + TILE_GAP),
            self.grid_top + row * (TILE_HEIGHT + TILE_GAP),
        )
    }

    /// Baseline of the exclusion note, clipped to stay on the canvas.
    #[must_use]
    pub fn footnote_y(&self) -> i64 {
        (self.grid_top + self.grid_height + FOOTNOTE_OFFSET)
            .min(i64::from(CANVAS_HEIGHT) - FOOTNOTE_BOTTOM_MARGIN)
    }
}

/// Bar segment width of each entry, in ranked order.
///
/// Each width is the entry's share of `bar_width`, rounded down. The rounding
/// remainder goes to the last non-zero segment so the widths always sum to
/// `bar_width`; if every share rounds to zero the first entry takes the bar.
/// Returns all zeros when the entries hold no bytes.
#[must_use]
pub fn segment_widths(entries: &[RankedEntry], bar_width: i64) -> Vec<i64> {
    let total = total_bytes(entries);
    let width = u128::try_from(bar_width).unwrap_or(0);
    if total == 0 || width == 0 {
        return vec![0; entries.len()];
    }

    let mut widths: Vec<i64> = entries
        .iter()
        .map(|e| i64::try_from(width * u128::from(e.bytes) / total).unwrap_or(bar_width))
        .collect();

    let drawn: i64 = widths.iter().sum();
    let last = widths.iter().rposition(|w| *w > 0).unwrap_or(0);
    widths[last] += bar_width - drawn;
    widths
}

/// One language tile: frame, color swatch, name, share and byte count.
#[derive(Debug, Clone)]
struct Tile {
    frame: Rect,
    swatch: Rect,
    name: Text,
    percent: Text,
    bytes: Text,
}

impl Tile {
    fn new(origin: (i64, i64), width: i64, entry: &RankedEntry, color: &'static str, total: u128) -> Self {
        let (x, y) = origin;
        Self {
            frame: Rect::new(x, y, width, TILE_HEIGHT)
                .with_radius(TILE_RADIUS)
                .with_fill(theme::TILE_FILL)
                .with_stroke(theme::TILE_STROKE, 1),
            swatch: Rect::new(x + 12, y + 10, 6, TILE_HEIGHT - 20)
                .with_radius(3)
                .with_fill(color),
            name: Text::new(x + 28, y + 28, 16, theme::NAME, entry.language.clone()),
            percent: Text::new(
                x + 28,
                y + 48,
                13,
                theme::PERCENT,
                format_percent(entry.bytes, total),
            ),
            bytes: Text::new(
                x + 28,
                y + 64,
                12,
                theme::BYTES,
                format!("{} bytes", entry.bytes),
            ),
        }
    }
}

impl SvgElement for Tile {
    fn render(&self) -> String {
        [
            self.frame.render(),
            self.swatch.render(),
            self.name.render(),
            self.percent.render(),
            self.bytes.render(),
        ]
        .join("\n")
    }
}

/// Renders a ranked language list as a fixed-size SVG card.
#[derive(Debug, Clone, Copy)]
pub struct LanguageCard<'a> {
    entries: &'a [RankedEntry],
    excluded: &'a [String],
}

impl<'a> LanguageCard<'a> {
    #[must_use]
    pub const fn new(entries: &'a [RankedEntry], excluded: &'a [String]) -> Self {
        Self {
            entries,
            excluded,
        }
    }

    #[must_use]
    pub fn layout(&self) -> CardLayout {
        CardLayout::compute(self.entries.len(), !self.excluded.is_empty())
    }

    /// Render the card document.
    ///
    /// # Errors
    /// Returns [`LangRankError::NoLanguageData`] when there are no entries or
    /// they hold zero bytes in total.
    pub fn render(&self) -> Result<String> {
        let total = total_bytes(self.entries);
        if self.entries.is_empty() || total == 0 {
            return Err(LangRankError::NoLanguageData);
        }

        let layout = self.layout();
        let mut builder = SvgBuilder::new(CANVAS_WIDTH, CANVAS_HEIGHT)
            .push_element(&Background {
                radius: CARD_RADIUS,
                fill: theme::CARD_FILL,
                stroke: theme::CARD_STROKE,
                stroke_width: 2,
            })
            .push_element(&Text::new(
                CARD_PADDING,
                layout.top + HEADER_BASELINE,
                20,
                theme::HEADER,
                HEADER_TEXT,
            ))
            .push_element(
                &Rect::new(layout.bar_x, layout.bar_y, layout.bar_width, BAR_HEIGHT)
                    .with_radius(BAR_RADIUS)
                    .with_fill(theme::TRACK_FILL),
            )
            .push_element(&ClipPath {
                id: BAR_CLIP_ID,
                rect: Rect::new(layout.bar_x, layout.bar_y, layout.bar_width, BAR_HEIGHT)
                    .with_radius(BAR_RADIUS),
            })
            .extend(&self.bar_segments(&layout))
            .extend(&self.tiles(&layout, total));

        if !self.excluded.is_empty() {
            builder = builder.push_element(&Text::new(
                CARD_PADDING,
                layout.footnote_y(),
                12,
                theme::NOTE,
                format!("Excluded: {}", self.excluded.join(", ")),
            ));
        }

        Ok(builder.build())
    }

    fn bar_segments(&self, layout: &CardLayout) -> Vec<Rect> {
        let widths = segment_widths(self.entries, layout.bar_width);
        let mut x = layout.bar_x;
        let mut segments = Vec::with_capacity(self.entries.len());
        for (rank, (entry, width)) in self.entries.iter().zip(widths).enumerate() {
            if width == 0 {
                continue;
            }
            segments.push(
                Rect::new(x, layout.bar_y, width, BAR_HEIGHT)
                    .with_fill(color_for(&entry.language, rank))
                    .with_clip_path(BAR_CLIP_ID),
            );
            x += width;
        }
        segments
    }

    fn tiles(&self, layout: &CardLayout, total: u128) -> Vec<Tile> {
        self.entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                Tile::new(
                    layout.tile_origin(rank),
                    layout.tile_width,
                    entry,
                    color_for(&entry.language, rank),
                    total,
                )
            })
            .collect()
    }
}

/// Write a rendered document to `path`, creating the parent directory first.
///
/// # Errors
/// Returns [`LangRankError::ChartWrite`] if the directory or file cannot be written.
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    let to_error = |source: std::io::Error| LangRankError::ChartWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, svg).map_err(to_error)
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
