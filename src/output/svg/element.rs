//! Primitive SVG elements: rectangles, clip paths and text.

use std::fmt::Write;

use super::format::escape_text;
use super::style::FONT_FAMILY;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Rounded background covering the whole canvas.
#[derive(Debug, Clone)]
pub struct Background {
    pub radius: i64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: i64,
}

impl SvgElement for Background {
    fn render(&self) -> String {
        format!(
            r#"<rect width="100%" height="100%" rx="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            self.radius, self.fill, self.stroke, self.stroke_width
        )
    }
}

/// A positioned rectangle. Optional attributes are emitted only when set.
#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub radius: Option<i64>,
    pub fill: Option<&'static str>,
    pub stroke: Option<(&'static str, i64)>,
    pub clip_path: Option<&'static str>,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radius: None,
            fill: None,
            stroke: None,
            clip_path: None,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: i64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: &'static str) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_stroke(mut self, color: &'static str, width: i64) -> Self {
        self.stroke = Some((color, width));
        self
    }

    /// Clip against the `<clipPath>` with the given id.
    #[must_use]
    pub const fn with_clip_path(mut self, id: &'static str) -> Self {
        self.clip_path = Some(id);
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            self.x, self.y, self.width, self.height
        );
        if let Some(radius) = self.radius {
            let _ = write!(output, r#" rx="{radius}""#);
        }
        if let Some(fill) = self.fill {
            let _ = write!(output, r#" fill="{fill}""#);
        }
        if let Some((stroke, width)) = self.stroke {
            let _ = write!(output, r#" stroke="{stroke}" stroke-width="{width}""#);
        }
        if let Some(id) = self.clip_path {
            let _ = write!(output, r#" clip-path="url(#{id})""#);
        }
        output.push_str("/>");
        output
    }
}

/// A `<clipPath>` holding a single rectangle.
#[derive(Debug, Clone)]
pub struct ClipPath {
    pub id: &'static str,
    pub rect: Rect,
}

impl SvgElement for ClipPath {
    fn render(&self) -> String {
        format!(
            r#"<clipPath id="{}">{}</clipPath>"#,
            self.id,
            self.rect.render()
        )
    }
}

/// A single line of text. Content is escaped on render.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: i64,
    pub y: i64,
    pub font_size: u32,
    pub fill: &'static str,
    pub content: String,
}

impl Text {
    #[must_use]
    pub fn new(x: i64, y: i64, font_size: u32, fill: &'static str, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            font_size,
            fill,
            content: content.into(),
        }
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}">{}</text>"#,
            self.x,
            self.y,
            self.font_size,
            self.fill,
            escape_text(&self.content)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
