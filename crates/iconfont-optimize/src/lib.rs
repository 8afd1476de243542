//! SVG optimization for iconfont
//!
//! [`SvgMinifier`] is the optimizer the build uses for its intermediate files.
//! It is deliberately conservative:
//!
//! - comments, processing instructions and formatting whitespace are dropped
//! - `<title>`, `<desc>` and `<metadata>` are dropped
//! - path data is rewritten compactly (see [`minify_path`])
//! - numeric geometry attributes are rounded
//! - `fill-rule` / `clip-rule` set to their default `nonzero` are dropped
//! - the root `viewBox` is kept byte for byte unless removal is requested
//!
//! No shape element is ever added or removed, so the font compiler sees the
//! same glyph structure the extractor produced.

pub mod path;

pub use path::{format_number, minify_path};

use iconfont_core::{escape_attr, OptimizeError, OptimizeOptions, SvgOptimizer, SVG_NAMESPACE};
use roxmltree::{Document, Node, NodeType};

/// Upper bound on multipass iterations
pub const MAX_PASSES: usize = 10;

/// Attributes holding a single number that can be safely rounded
const NUMERIC_ATTRS: &[&str] = &[
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "x",
    "y",
    "x1",
    "y1",
    "x2",
    "y2",
    "width",
    "height",
    "opacity",
    "fill-opacity",
    "stroke-width",
];

/// Elements that never contribute to the rendered glyph
const NON_RENDERING: &[&str] = &["title", "desc", "metadata"];

/// Native optimizer backed by `roxmltree` and `svgtypes`
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgMinifier;

impl SvgMinifier {
    pub fn new() -> Self {
        Self
    }

    fn pass(&self, svg: &str, options: &OptimizeOptions) -> Result<String, OptimizeError> {
        let doc = Document::parse(svg).map_err(|e| OptimizeError::Parse(e.to_string()))?;
        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(OptimizeError::NotSvg(root.tag_name().name().to_string()));
        }

        let mut out = String::with_capacity(svg.len());
        write_element(&mut out, root, options, true)?;
        Ok(out)
    }
}

impl SvgOptimizer for SvgMinifier {
    fn name(&self) -> &'static str {
        "minify"
    }

    fn optimize(&self, svg: &str, options: &OptimizeOptions) -> Result<String, OptimizeError> {
        let mut current = self.pass(svg, options)?;
        if !options.multipass {
            return Ok(current);
        }

        for pass in 1..MAX_PASSES {
            let next = self.pass(&current, options)?;
            if next == current {
                log::trace!("optimizer converged after {} pass(es)", pass);
                break;
            }
            current = next;
        }
        Ok(current)
    }
}

fn write_element(
    out: &mut String,
    node: Node<'_, '_>,
    options: &OptimizeOptions,
    is_root: bool,
) -> Result<(), OptimizeError> {
    let name = node.tag_name().name();
    out.push('<');
    out.push_str(name);

    if is_root {
        out.push_str(" xmlns=\"");
        out.push_str(SVG_NAMESPACE);
        out.push('"');
    }

    for attr in node.attributes() {
        if attr.namespace().is_some() {
            log::debug!("dropping namespaced attribute {} on <{}>", attr.name(), name);
            continue;
        }

        let value = match attr.name() {
            "viewBox" if is_root => {
                if options.remove_view_box {
                    continue;
                }
                attr.value().to_string()
            },
            "d" if name == "path" => minify_path(attr.value(), options.precision)?,
            "fill-rule" | "clip-rule" if attr.value().trim() == "nonzero" => continue,
            other if NUMERIC_ATTRS.contains(&other) => clean_number(attr.value(), options.precision),
            _ => attr.value().trim().to_string(),
        };

        if value.is_empty() {
            continue;
        }

        out.push(' ');
        out.push_str(attr.name());
        out.push_str("=\"");
        out.push_str(&escape_attr(&value));
        out.push('"');
    }

    let children: Vec<Node<'_, '_>> = node
        .children()
        .filter(|child| match child.node_type() {
            NodeType::Element => !NON_RENDERING.contains(&child.tag_name().name()),
            NodeType::Text => child.text().is_some_and(|t| !t.trim().is_empty()),
            _ => false,
        })
        .collect();

    if children.is_empty() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    for child in children {
        if child.is_element() {
            write_element(out, child, options, false)?;
        } else if let Some(text) = child.text() {
            out.push_str(&escape_text(text.trim()));
        }
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    Ok(())
}

/// Round a single-number attribute; anything else is kept as written
fn clean_number(value: &str, precision: u8) -> String {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    match number.parse::<f64>() {
        Ok(n) if n.is_finite() => format_number(n, precision),
        _ => trimmed.to_string(),
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimize(svg: &str) -> Result<String, OptimizeError> {
        SvgMinifier::new().optimize(svg, &OptimizeOptions::default())
    }

    #[test]
    fn test_two_paths() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\">\n  <path d=\"M1 1\"/>\n  <path d=\"M2 2\"/>\n</svg>";
        assert_eq!(
            optimize(svg).unwrap(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M1 1"/><path d="M2 2"/></svg>"#
        );
    }

    #[test]
    fn test_default_rules_dropped_evenodd_kept() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h1" fill-rule="nonzero" clip-rule="evenodd"/></svg>"#;
        let out = optimize(svg).unwrap();
        assert!(!out.contains("fill-rule"));
        assert!(out.contains(r#"clip-rule="evenodd""#));
    }

    #[test]
    fn test_numeric_attributes_rounded() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12.0000" cy="0.50" r="5px"/></svg>"#;
        let out = optimize(svg).unwrap();
        assert!(out.contains(r#"<circle cx="12" cy=".5" r="5"/>"#));
    }

    #[test]
    fn test_view_box_verbatim() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24.000 24"><path d="M0 0"/></svg>"#;
        assert!(optimize(svg).unwrap().contains(r#"viewBox="0 0 24.000 24""#));
    }

    #[test]
    fn test_view_box_removal_on_request() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#;
        let options = OptimizeOptions {
            remove_view_box: true,
            ..OptimizeOptions::default()
        };
        let out = SvgMinifier::new().optimize(svg, &options).unwrap();
        assert!(!out.contains("viewBox"));
    }

    #[test]
    fn test_comments_and_metadata_dropped() {
        let svg = r#"<?xml version="1.0"?><!-- generated --><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><title>x</title><path d="M0 0"/></svg>"#;
        assert_eq!(
            optimize(svg).unwrap(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#
        );
    }

    #[test]
    fn test_malformed_rejected() {
        let err = optimize(r#"<svg viewBox="0 0 24 24"><path d="M0 0"></svg>"#).unwrap_err();
        assert!(matches!(err, OptimizeError::Parse(_)));
    }

    #[test]
    fn test_non_svg_root_rejected() {
        let err = optimize("<html/>").unwrap_err();
        assert_eq!(err, OptimizeError::NotSvg("html".into()));
    }

    #[test]
    fn test_bad_path_data_rejected() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="Mx"/></svg>"#;
        assert!(matches!(optimize(svg), Err(OptimizeError::PathData { .. })));
    }

    #[test]
    fn test_single_pass_matches_multipass_on_clean_input() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M1 1"/></svg>"#;
        let single = OptimizeOptions {
            multipass: false,
            ..OptimizeOptions::default()
        };
        assert_eq!(
            SvgMinifier::new().optimize(svg, &single).unwrap(),
            optimize(svg).unwrap()
        );
    }
}
