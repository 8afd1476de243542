//! Iconfont Core: from icon modules to SVG documents
//!
//! Generated icon components describe their artwork through shape-drawing
//! calls rather than SVG markup. This crate recovers that artwork and writes
//! it back out as SVG, one icon at a time:
//!
//! 1. **Extraction** - [`ShapeExtractor`] finds the viewBox, path outlines and circles
//! 2. **Association** - [`AttributeAssociator`] pairs `fillRule`/`clipRule` with paths
//! 3. **Assembly** - [`SvgAssembler`] renders an [`IconDocument`] as SVG
//!
//! Optimization and font compilation happen elsewhere, behind the
//! [`SvgOptimizer`] and [`FontCompiler`] traits.
//!
//! ```
//! use iconfont_core::{AttributeAssociator, IconDocument, ShapeExtractor, SvgAssembler};
//!
//! let text = r#"jsx(SVG, { viewBox: "0 0 24 24", children: jsx(Path, { d: "M1 1" }) })"#;
//! let extraction = ShapeExtractor::new().extract(text)?;
//! let view_box = extraction.view_box.clone();
//! let shapes = AttributeAssociator::default().associate(text, extraction);
//! let document = IconDocument::new("dot", view_box, shapes)?;
//!
//! let svg = SvgAssembler::new().assemble(&document);
//! assert!(svg.contains(r#"<path d="M1 1"/>"#));
//! # Ok::<(), iconfont_core::ExtractError>(())
//! ```

pub mod assemble;
pub mod associate;
pub mod error;
pub mod extract;
pub mod font_config;
pub mod scan;
pub mod traits;
pub mod types;

pub use assemble::{escape_attr, SvgAssembler, SVG_NAMESPACE};
pub use associate::{AssociationMode, AttributeAssociator, StyleRules, DEFAULT_WINDOW_RADIUS};
pub use error::{CompileError, ExtractError, IconError, OptimizeError, Result};
pub use extract::{Extraction, PathCandidate, ShapeExtractor};
pub use font_config::{AssetType, FontConfig, FontType, FormatOptions, JsonFormatOptions};
pub use traits::{FontCompiler, SvgOptimizer};
pub use types::{
    icon_name, CircleShape, CompileOutput, IconDocument, IconSource, OptimizeOptions, PathShape,
    Shape,
};

/// Extraction, association and document construction in one step.
///
/// The shared entry point for anything that needs a document from raw module
/// text (the batch orchestrator and the `extract` command).
pub fn build_document(
    source: &IconSource,
    extractor: &ShapeExtractor,
    associator: &AttributeAssociator,
) -> std::result::Result<IconDocument, ExtractError> {
    let extraction = extractor.extract(&source.text)?;
    let view_box = extraction.view_box.clone();
    log::debug!(
        "{}: {} shape(s) in viewBox {:?}",
        source.name,
        extraction.shape_count(),
        view_box
    );
    let shapes = associator.associate(&source.text, extraction);
    IconDocument::new(source.name.clone(), view_box, shapes)
}

#[cfg(test)]
mod proptests;
