// this_file: crates/iconfont-core/src/types.rs

//! Data that flows between the pipeline stages.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One icon module as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSource {
    /// Icon identifier (module file stem)
    pub name: String,
    /// Where the module was read from
    pub path: PathBuf,
    /// Raw module text
    pub text: String,
}

impl IconSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a module file, naming the icon after its file stem.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(icon_name(path), path, text))
    }
}

/// Icon identifier for a module path: `library/add-card.js` becomes `add-card`.
pub fn icon_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A `<path>` outline with its optional style rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathShape {
    pub d: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_rule: Option<String>,
}

impl PathShape {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            fill_rule: None,
            clip_rule: None,
        }
    }
}

/// A `<circle>` primitive. Never carries fill or clip rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleShape {
    pub cx: String,
    pub cy: String,
    pub r: String,
}

/// Every shape the icon vocabulary knows about.
///
/// Attribute values are copied verbatim from the module text and are
/// never interpreted as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Path(PathShape),
    Circle(CircleShape),
}

impl Shape {
    /// SVG element this shape renders to
    pub fn element_name(&self) -> &'static str {
        match self {
            Shape::Path(_) => "path",
            Shape::Circle(_) => "circle",
        }
    }
}

/// A fully extracted icon, ready for assembly.
///
/// Can only be built through [`IconDocument::new`], which guarantees a
/// non-empty viewBox and at least one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDocument {
    name: String,
    view_box: String,
    shapes: Vec<Shape>,
}

impl IconDocument {
    pub fn new(
        name: impl Into<String>,
        view_box: impl Into<String>,
        shapes: Vec<Shape>,
    ) -> Result<Self, ExtractError> {
        let view_box = view_box.into();
        if view_box.trim().is_empty() {
            return Err(ExtractError::NoViewBox);
        }
        if shapes.is_empty() {
            return Err(ExtractError::NoShapes);
        }
        Ok(Self {
            name: name.into(),
            view_box,
            shapes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// Knobs handed to an [`SvgOptimizer`](crate::traits::SvgOptimizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeOptions {
    /// Repeat passes until the output stops changing
    pub multipass: bool,
    /// Whether the optimizer may drop the viewBox (the font compiler needs it)
    pub remove_view_box: bool,
    /// Decimal places kept in path data and numeric attributes
    pub precision: u8,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            multipass: true,
            remove_view_box: false,
            precision: 3,
        }
    }
}

/// What the font compiler produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOutput {
    /// Icon name to assigned codepoint
    pub codepoints: BTreeMap<String, u32>,
    /// Files written into the output directory
    pub assets: Vec<PathBuf>,
}

impl CompileOutput {
    /// Icon names in sorted order, as the preview page lists them
    pub fn icon_names(&self) -> Vec<String> {
        self.codepoints.keys().cloned().collect()
    }
}
