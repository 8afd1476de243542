// this_file: crates/iconfont-batch/src/lib.rs

#![deny(missing_docs)]

//! Batch processing for iconfont.
//!
//! Turns a directory of icon modules into a font: each module is processed
//! on its own (a bad icon is skipped and recorded, never fatal), the
//! surviving SVGs go to the font compiler in one call, and the outcome is
//! summarized in a [`ProcessingReport`].

pub mod orchestrator;
pub mod progress;
pub mod report;
pub mod source;

pub use orchestrator::{BatchOrchestrator, BatchSummary, PreviewTarget};
pub use progress::{NoProgress, ProgressSink, ProgressUpdate};
pub use report::{IconOutcome, IconStage, ProcessingReport, SkipReason, SkippedIcon};
pub use source::{discover_sources, DEFAULT_EXTENSION};
