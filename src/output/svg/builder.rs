//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Builder for a fixed-size SVG document, one element per line.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    /// Push several elements of the same kind.
    #[must_use]
    pub fn extend<'a, E, I>(mut self, elements: I) -> Self
    where
        E: SvgElement + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        self.elements
            .extend(elements.into_iter().map(E::render));
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{XML_DECLARATION}");
        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        );

        for element in self.elements {
            let _ = writeln!(output, "{element}");
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
