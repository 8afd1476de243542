//! Extract command implementation
//!
//! Runs a single module through extraction, association and assembly (and
//! the optimizer unless `--raw`) and prints the SVG to stdout.

use crate::cli::ExtractArgs;
use anyhow::{anyhow, Context, Result};
use iconfont_core::{
    build_document, AttributeAssociator, IconSource, OptimizeOptions, ShapeExtractor,
    SvgAssembler, SvgOptimizer,
};
use iconfont_optimize::SvgMinifier;

pub fn run(args: &ExtractArgs) -> Result<()> {
    let source = IconSource::load(&args.module)
        .with_context(|| format!("Failed to read {}", args.module.display()))?;
    let associator = AttributeAssociator::new(args.association.mode(), args.window_radius);

    let document = build_document(&source, &ShapeExtractor::new(), &associator)
        .map_err(|e| anyhow!("{}: {}", source.name, e))?;
    log::debug!(
        "{}: {} shape(s), association {}",
        document.name(),
        document.shapes().len(),
        args.association.as_str()
    );

    let mut svg = SvgAssembler::new().assemble(&document);
    if !args.raw {
        let options = OptimizeOptions {
            precision: args.precision,
            ..OptimizeOptions::default()
        };
        svg = SvgMinifier::new()
            .optimize(&svg, &options)
            .map_err(|e| anyhow!("{}: {}", source.name, e))?;
    }

    println!("{}", svg);
    Ok(())
}
