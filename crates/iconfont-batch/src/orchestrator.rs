// this_file: crates/iconfont-batch/src/orchestrator.rs

//! The batch pipeline: every module to an intermediate SVG, then one compile.

use crate::progress::{NoProgress, ProgressSink, ProgressUpdate};
use crate::report::{IconOutcome, IconStage, ProcessingReport, SkipReason};
use crate::source::discover_sources;
use camino::Utf8PathBuf;
use iconfont_core::{
    build_document, icon_name, AttributeAssociator, CompileOutput, FontCompiler, FontConfig,
    IconError, IconSource, OptimizeOptions, Result, ShapeExtractor, SvgAssembler, SvgOptimizer,
};
use iconfont_preview::{write_preview, PreviewConfig, PreviewFiles};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

const SCRATCH_PREFIX: &str = "iconfont-";

/// Where and how to write the preview page after a successful compile.
#[derive(Debug, Clone)]
pub struct PreviewTarget {
    /// Directory receiving `index.html` and `preview.css`
    pub dir: PathBuf,
    /// Page settings
    pub config: PreviewConfig,
}

/// Everything a finished batch produced.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Processed and skipped icons
    pub report: ProcessingReport,
    /// Codepoints and asset files from the compiler
    pub output: CompileOutput,
    /// Icon names in the font, sorted
    pub icon_names: Vec<String>,
    /// Preview files, when a preview was requested
    pub preview: Option<PreviewFiles>,
}

/// Drives extraction, association, assembly and optimization for every icon,
/// then hands the whole batch to the font compiler once.
///
/// Intermediate SVGs live in a scratch directory that is removed when the
/// run ends, whichever way it ends.
pub struct BatchOrchestrator {
    extractor: ShapeExtractor,
    associator: AttributeAssociator,
    assembler: SvgAssembler,
    optimizer: Arc<dyn SvgOptimizer>,
    compiler: Arc<dyn FontCompiler>,
    optimize_options: OptimizeOptions,
    jobs: Option<usize>,
    scratch_parent: Option<PathBuf>,
    progress: Arc<dyn ProgressSink>,
    preview: Option<PreviewTarget>,
}

impl BatchOrchestrator {
    /// Orchestrator with default extraction and association settings
    pub fn new(optimizer: Arc<dyn SvgOptimizer>, compiler: Arc<dyn FontCompiler>) -> Self {
        Self {
            extractor: ShapeExtractor::new(),
            associator: AttributeAssociator::default(),
            assembler: SvgAssembler::new(),
            optimizer,
            compiler,
            optimize_options: OptimizeOptions::default(),
            jobs: None,
            scratch_parent: None,
            progress: Arc::new(NoProgress),
            preview: None,
        }
    }

    /// Use a differently configured associator
    pub fn with_associator(mut self, associator: AttributeAssociator) -> Self {
        self.associator = associator;
        self
    }

    /// Optimizer settings; viewBox removal is always turned off
    pub fn with_optimize_options(mut self, options: OptimizeOptions) -> Self {
        if options.remove_view_box {
            log::debug!("viewBox removal is not allowed for font input, ignoring");
        }
        self.optimize_options = OptimizeOptions {
            remove_view_box: false,
            ..options
        };
        self
    }

    /// Worker threads for per-icon processing (`1` = sequential, `0` = rayon default)
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = (jobs > 0).then_some(jobs);
        self
    }

    /// Create scratch directories under `parent` instead of the system temp dir
    pub fn with_scratch_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(parent.into());
        self
    }

    /// Receive per-icon progress
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Write a preview page after a successful compile
    pub fn with_preview(mut self, target: PreviewTarget) -> Self {
        self.preview = Some(target);
        self
    }

    /// Take one module through to an intermediate file in `scratch`.
    ///
    /// Never fails: every problem becomes a skipped outcome.
    pub fn process_icon(&self, path: &Path, scratch: &Path) -> IconOutcome {
        let name = icon_name(path);
        let skip = |stage: IconStage, reason: SkipReason| {
            log::info!("Skipping {}: {}", name, reason);
            IconOutcome::skipped(name.clone(), stage, reason)
        };

        let source = match IconSource::load(path) {
            Ok(source) => source,
            Err(e) => return skip(IconStage::Read, SkipReason::Unreadable(e.to_string())),
        };

        let document = match build_document(&source, &self.extractor, &self.associator) {
            Ok(document) => document,
            Err(e) => return skip(IconStage::Extract, e.into()),
        };

        let svg = self.assembler.assemble(&document);
        let optimized = match self.optimizer.optimize(&svg, &self.optimize_options) {
            Ok(optimized) => optimized,
            Err(e) => {
                return skip(
                    IconStage::Optimize,
                    SkipReason::OptimizationFailure(e.to_string()),
                )
            },
        };

        let target = scratch.join(format!("{}.svg", document.name()));
        if let Err(e) = std::fs::write(&target, optimized) {
            return skip(IconStage::Write, SkipReason::WriteFailure(e.to_string()));
        }

        log::debug!("Wrote {}", target.display());
        IconOutcome::Written { name, path: target }
    }

    /// Process every source, returning outcomes in the order of `sources`
    /// no matter how many threads ran them.
    pub fn process_all(&self, sources: &[PathBuf], scratch: &Path) -> Result<Vec<IconOutcome>> {
        let total = sources.len();
        let completed = AtomicUsize::new(0);
        let run_one = |path: &PathBuf| {
            let outcome = self.process_icon(path, scratch);
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            self.progress.icon_finished(ProgressUpdate {
                completed: done,
                total,
                outcome: &outcome,
            });
            outcome
        };

        match self.jobs {
            Some(1) => Ok(sources.iter().map(run_one).collect()),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| IconError::Config(format!("cannot start worker pool: {}", e)))?;
                Ok(pool.install(|| sources.par_iter().map(run_one).collect()))
            },
            None => Ok(sources.par_iter().map(run_one).collect()),
        }
    }

    /// Run the whole batch over `sources`.
    ///
    /// `font.input_dir` is replaced by the scratch directory. The compiler is
    /// called exactly once, even when every icon was skipped. A compiler
    /// failure is returned after the scratch directory is gone.
    pub fn run(&self, sources: &[PathBuf], font: &FontConfig) -> Result<BatchSummary> {
        let scratch = self.create_scratch()?;
        let scratch_dir = Utf8PathBuf::from_path_buf(scratch.path().to_path_buf()).map_err(|p| {
            IconError::Scratch(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("scratch path is not UTF-8: {}", p.display()),
            ))
        })?;
        log::debug!("Scratch directory: {}", scratch_dir);

        let outcomes = self.process_all(sources, scratch.path())?;
        let report = ProcessingReport::from_outcomes(&outcomes);
        log::info!(
            "Processed {} icons, skipped {}",
            report.processed,
            report.skipped
        );
        if report.processed == 0 {
            log::warn!("No icons were processed; the compiler will see an empty batch");
        }

        let config = FontConfig {
            input_dir: scratch_dir,
            ..font.clone()
        };
        self.progress.compile_started(&report);
        log::info!("Starting font generation with {}", self.compiler.name());
        let compiled = self.compiler.compile(&config);

        if let Err(e) = scratch.close() {
            log::warn!("Failed to remove scratch directory: {}", e);
        }
        let output = compiled?;

        let icon_names = if output.codepoints.is_empty() {
            let mut names: Vec<String> = outcomes
                .iter()
                .filter(|o| o.is_written())
                .map(|o| o.name().to_string())
                .collect();
            names.sort();
            names
        } else {
            output.icon_names()
        };

        let preview = match &self.preview {
            Some(target) => Some(
                write_preview(&target.dir, icon_names.as_slice(), &target.config)
                    .map_err(IconError::Preview)?,
            ),
            None => None,
        };

        Ok(BatchSummary {
            report,
            output,
            icon_names,
            preview,
        })
    }

    /// Discover modules in `input_dir` and run the batch over them
    pub fn run_dir(
        &self,
        input_dir: &Path,
        extension: &str,
        font: &FontConfig,
    ) -> Result<BatchSummary> {
        let sources = discover_sources(input_dir, extension)?;
        self.run(&sources, font)
    }

    fn create_scratch(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let scratch = match &self.scratch_parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        };
        scratch.map_err(IconError::Scratch)
    }
}

impl std::fmt::Debug for BatchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchOrchestrator")
            .field("associator", &self.associator)
            .field("optimizer", &self.optimizer.name())
            .field("compiler", &self.compiler.name())
            .field("optimize_options", &self.optimize_options)
            .field("jobs", &self.jobs)
            .finish_non_exhaustive()
    }
}
