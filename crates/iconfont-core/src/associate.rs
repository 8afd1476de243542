//! Attach `fillRule` / `clipRule` literals to the paths they style.
//!
//! Two strategies are available:
//!
//! - [`AssociationMode::Window`] looks at a fixed number of bytes on either
//!   side of the path's `d:` key and takes the first rule literal found there.
//!   The radius counts UTF-8 bytes, not characters, so it only matches a
//!   character count for ASCII modules (the usual case).
//!   This matches how the icon fonts have always been generated, including its
//!   known flaw: two paths closer together than the radius can pick up each
//!   other's rules.
//! - [`AssociationMode::Span`] only searches the object literal that holds the
//!   `d:` key, so a rule can never cross over to a neighbouring path.

use crate::extract::{literal_regex, Extraction};
use crate::scan::{ceil_boundary, floor_boundary, ObjectSpans};
use crate::types::{PathShape, Shape};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UTF-8 bytes searched on each side of a path in window mode
pub const DEFAULT_WINDOW_RADIUS: usize = 100;

/// How style rules are matched to paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationMode {
    /// Fixed-radius proximity search (compatible)
    #[default]
    Window,
    /// Enclosing object literal only (exact)
    Span,
}

impl AssociationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Span => "span",
        }
    }
}

impl fmt::Display for AssociationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssociationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "window" => Ok(Self::Window),
            "span" => Ok(Self::Span),
            other => Err(format!("Unknown association mode: {} (expected window or span)", other)),
        }
    }
}

/// The rules found for a single path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRules {
    pub fill_rule: Option<String>,
    pub clip_rule: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AttributeAssociator {
    mode: AssociationMode,
    radius: usize,
    fill_rule: Regex,
    clip_rule: Regex,
}

impl AttributeAssociator {
    pub fn new(mode: AssociationMode, radius: usize) -> Self {
        Self {
            mode,
            radius,
            fill_rule: literal_regex(r#"\bfillRule\s*:\s*"([^"]+)""#),
            clip_rule: literal_regex(r#"\bclipRule\s*:\s*"([^"]+)""#),
        }
    }

    /// Window mode with the given radius
    pub fn window(radius: usize) -> Self {
        Self::new(AssociationMode::Window, radius)
    }

    /// Span mode
    pub fn span() -> Self {
        Self::new(AssociationMode::Span, DEFAULT_WINDOW_RADIUS)
    }

    pub fn mode(&self) -> AssociationMode {
        self.mode
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Turn an extraction into ordered shapes: every path (with its rules) in
    /// source order, then every circle.
    pub fn associate(&self, text: &str, extraction: Extraction) -> Vec<Shape> {
        let spans = match self.mode {
            AssociationMode::Span if !extraction.paths.is_empty() => Some(ObjectSpans::new(text)),
            _ => None,
        };

        let mut shapes = Vec::with_capacity(extraction.shape_count());
        for candidate in extraction.paths {
            let rules = match &spans {
                Some(spans) => self.rules_in_span(text, candidate.offset, spans),
                None => self.rules_in_window(text, candidate.offset),
            };
            shapes.push(Shape::Path(PathShape {
                d: candidate.d,
                fill_rule: rules.fill_rule,
                clip_rule: rules.clip_rule,
            }));
        }
        shapes.extend(extraction.circles.into_iter().map(Shape::Circle));
        shapes
    }

    /// Rules whose literal lies entirely within `radius` bytes of `offset`
    pub fn rules_in_window(&self, text: &str, offset: usize) -> StyleRules {
        let start = ceil_boundary(text, offset.saturating_sub(self.radius));
        let end = floor_boundary(text, offset.saturating_add(self.radius));
        if start >= end {
            return StyleRules::default();
        }
        self.rules_in(&text[start..end])
    }

    /// Rules inside the object literal that encloses `offset`
    pub fn rules_in_span(&self, text: &str, offset: usize, spans: &ObjectSpans) -> StyleRules {
        match spans.enclosing(offset) {
            Some(range) => self.rules_in(&text[range]),
            None => StyleRules::default(),
        }
    }

    fn rules_in(&self, region: &str) -> StyleRules {
        let first = |re: &Regex| {
            re.captures(region)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };
        StyleRules {
            fill_rule: first(&self.fill_rule),
            clip_rule: first(&self.clip_rule),
        }
    }
}

impl Default for AttributeAssociator {
    fn default() -> Self {
        Self::window(DEFAULT_WINDOW_RADIUS)
    }
}
