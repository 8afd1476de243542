// this_file: crates/iconfont-batch/src/progress.rs

//! Progress notifications from a running batch.

use crate::report::{IconOutcome, ProcessingReport};

/// Update sent after each icon finishes.
#[derive(Debug, Clone, Copy)]
pub struct ProgressUpdate<'a> {
    /// Icons finished so far, this one included
    pub completed: usize,
    /// Icons in the batch
    pub total: usize,
    /// What happened to this icon
    pub outcome: &'a IconOutcome,
}

/// Receives progress from worker threads, so implementations must be thread-safe.
///
/// With more than one job, updates arrive in completion order, not
/// enumeration order.
pub trait ProgressSink: Send + Sync {
    /// An icon was written or skipped
    fn icon_finished(&self, update: ProgressUpdate<'_>);

    /// All icons are done and the compiler is about to run
    fn compile_started(&self, _report: &ProcessingReport) {}
}

/// Discards all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn icon_finished(&self, _update: ProgressUpdate<'_>) {}
}
