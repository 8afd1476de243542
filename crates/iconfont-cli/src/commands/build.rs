//! Build command implementation
//!
//! Runs the full pipeline over a directory of icon modules and prints the
//! generated files.

use crate::cli::BuildArgs;
use crate::config::BuildConfig;
use crate::console::ConsoleProgress;
use anyhow::{bail, Context, Result};
use iconfont_batch::{BatchOrchestrator, BatchSummary, PreviewTarget, ProcessingReport};
use iconfont_core::{AssetType, FontConfig, FontType};
use iconfont_optimize::SvgMinifier;
use std::path::Path;
use std::sync::Arc;

pub fn run(args: &BuildArgs) -> Result<()> {
    let config = BuildConfig::resolve(args)?;
    let Some(input_dir) = config.input_dir.as_deref() else {
        bail!("No input directory given");
    };
    let font = config.font_config()?;

    if !args.quiet {
        eprintln!("Iconfont Builder v{}", env!("CARGO_PKG_VERSION"));
        eprintln!();
        eprintln!(
            "Extracting SVG data from icon modules in {}...",
            input_dir.display()
        );
    }

    let mut orchestrator = BatchOrchestrator::new(
        Arc::new(SvgMinifier::new()),
        Arc::new(config.compiler()),
    )
    .with_associator(config.associator())
    .with_optimize_options(config.optimize_options())
    .with_jobs(config.jobs)
    .with_progress(Arc::new(ConsoleProgress::new(args.quiet, args.verbose)));

    if config.preview {
        orchestrator = orchestrator.with_preview(PreviewTarget {
            dir: config.preview_dir.clone(),
            config: config.preview_config(),
        });
    }

    let summary = orchestrator.run_dir(input_dir, &config.extension, &font)?;

    if let Some(path) = &config.report {
        write_report(path, &summary.report)?;
    }

    if !args.quiet {
        print_summary(&summary, &font);
    }

    Ok(())
}

fn write_report(path: &Path, report: &ProcessingReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}

fn asset_description(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    ext.parse::<FontType>()
        .map(|t| t.description())
        .or_else(|_| ext.parse::<AssetType>().map(|t| t.description()))
        .unwrap_or("")
}

fn print_summary(summary: &BatchSummary, font: &FontConfig) {
    eprintln!();
    eprintln!("✓ Font generated successfully!");
    eprintln!("✓ Total icons: {}", summary.icon_names.len());

    if !summary.output.assets.is_empty() {
        eprintln!();
        eprintln!("Generated files in {}/:", font.output_dir);
        for asset in &summary.output.assets {
            let file = asset
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            eprintln!("  • {:<24} - {}", file, asset_description(asset));
        }
    }

    if let Some(preview) = &summary.preview {
        eprintln!();
        eprintln!("Preview files:");
        eprintln!(
            "  • {:<24} - Interactive preview with search",
            preview.index.display()
        );
        eprintln!(
            "  • {:<24} - Preview page styles with CSS variables",
            preview.stylesheet.display()
        );
    }

    let example = summary
        .icon_names
        .first()
        .map(String::as_str)
        .unwrap_or("add-card");
    eprintln!();
    eprintln!("Usage:");
    eprintln!(
        "  <link rel=\"stylesheet\" href=\"{}\">",
        font.asset_path(AssetType::Css.as_str())
    );
    eprintln!("  <i class=\"{0} {0}-{1}\"></i>", font.prefix, example);
}
