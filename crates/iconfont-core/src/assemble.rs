//! Render an [`IconDocument`] as an SVG document.

use crate::types::{IconDocument, Shape};
use std::borrow::Cow;
use std::fmt::Write;

/// Namespace carried by every assembled root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Writes one `<path>` or `<circle>` per shape, in document order.
///
/// Rendering is pure: the same document always yields the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgAssembler;

impl SvgAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(&self, document: &IconDocument) -> String {
        let mut svg = String::with_capacity(128 + document.shapes().len() * 96);

        let _ = write!(
            &mut svg,
            r#"<svg xmlns="{}" viewBox="{}">"#,
            SVG_NAMESPACE,
            escape_attr(document.view_box())
        );

        for shape in document.shapes() {
            svg.push_str("\n  ");
            match shape {
                Shape::Path(path) => {
                    let _ = write!(&mut svg, r#"<path d="{}""#, escape_attr(&path.d));
                    if let Some(rule) = &path.fill_rule {
                        let _ = write!(&mut svg, r#" fill-rule="{}""#, escape_attr(rule));
                    }
                    if let Some(rule) = &path.clip_rule {
                        let _ = write!(&mut svg, r#" clip-rule="{}""#, escape_attr(rule));
                    }
                    svg.push_str("/>");
                },
                Shape::Circle(circle) => {
                    let _ = write!(
                        &mut svg,
                        r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                        escape_attr(&circle.cx),
                        escape_attr(&circle.cy),
                        escape_attr(&circle.r)
                    );
                },
            }
        }

        svg.push_str("\n</svg>");
        svg
    }
}

/// Escape a verbatim value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
