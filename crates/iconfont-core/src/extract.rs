//! Recover viewBox, path outlines and circles from an icon module.
//!
//! Icon modules are compiled JSX along the lines of:
//!
//! ```text
//! const addCard = (0, import_jsx_runtime.jsx)(import_primitives.SVG, {
//!   xmlns: "http://www.w3.org/2000/svg",
//!   viewBox: "0 0 24 24",
//!   children: (0, import_jsx_runtime.jsx)(import_primitives.Path, { d: "M18.5 5.5V8H20V5.5h2.5V4H20V1.5h-1.5V4H16v1.5h2.5z" })
//! });
//! ```
//!
//! Nothing about that layout is guaranteed, so extraction works on literals:
//! the first `viewBox: "..."`, every `d: "..."`, and every `Circle` call whose
//! props carry `cx`, `cy` and `r`.

use crate::error::ExtractError;
use crate::scan::ObjectSpans;
use crate::types::CircleShape;
use regex::Regex;

/// A path outline literal and the byte offset of its `d:` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCandidate {
    pub d: String,
    pub offset: usize,
}

/// Raw shapes found in one module, before style rules are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub view_box: String,
    /// Source order
    pub paths: Vec<PathCandidate>,
    /// Source order; always emitted after every path
    pub circles: Vec<CircleShape>,
}

impl Extraction {
    pub fn shape_count(&self) -> usize {
        self.paths.len() + self.circles.len()
    }
}

#[allow(clippy::expect_used)]
pub(crate) fn literal_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern compiles")
}

/// Scans module text for the shape vocabulary.
///
/// Compiled patterns are held by the extractor, so build one and share it
/// across icons (it is `Send + Sync`).
#[derive(Debug, Clone)]
pub struct ShapeExtractor {
    view_box: Regex,
    path: Regex,
    circle_call: Regex,
    circle_field: Regex,
}

impl ShapeExtractor {
    pub fn new() -> Self {
        Self {
            view_box: literal_regex(r#"\bviewBox\s*:\s*"([^"]+)""#),
            path: literal_regex(r#"\bd\s*:\s*"([^"]+)""#),
            circle_call: literal_regex(r"\bCircle\s*,\s*\{"),
            circle_field: literal_regex(r#"\b(cx|cy|r)\s*:\s*"?([^,"}\s]+)"?"#),
        }
    }

    /// Pull every recognised construct out of `text`.
    pub fn extract(&self, text: &str) -> Result<Extraction, ExtractError> {
        let view_box = self
            .view_box
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(ExtractError::NoViewBox)?;

        let paths: Vec<PathCandidate> = self
            .path
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let d = caps.get(1)?;
                Some(PathCandidate {
                    d: d.as_str().to_string(),
                    offset: whole.start(),
                })
            })
            .collect();

        let circles = self.circles(text);

        log::trace!(
            "extracted viewBox {:?}, {} path(s), {} circle(s)",
            view_box,
            paths.len(),
            circles.len()
        );

        if paths.is_empty() && circles.is_empty() {
            return Err(ExtractError::NoShapes);
        }

        Ok(Extraction {
            view_box,
            paths,
            circles,
        })
    }

    fn circles(&self, text: &str) -> Vec<CircleShape> {
        let mut calls = self.circle_call.find_iter(text).peekable();
        if calls.peek().is_none() {
            return Vec::new();
        }

        let spans = ObjectSpans::new(text);
        calls
            .filter_map(|call| {
                // The match ends just past the props object's opening brace
                let props = spans.object_at(call.end() - 1)?;
                self.circle_from_props(&text[props])
            })
            .collect()
    }

    fn circle_from_props(&self, props: &str) -> Option<CircleShape> {
        let (mut cx, mut cy, mut r) = (None, None, None);
        for caps in self.circle_field.captures_iter(props) {
            let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let slot = match key.as_str() {
                "cx" => &mut cx,
                "cy" => &mut cy,
                _ => &mut r,
            };
            slot.get_or_insert_with(|| value.as_str().to_string());
        }

        Some(CircleShape {
            cx: cx?,
            cy: cy?,
            r: r?,
        })
    }
}

impl Default for ShapeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
