//! Console progress for the build command

use iconfont_batch::{IconOutcome, ProcessingReport, ProgressSink, ProgressUpdate};
use parking_lot::Mutex;

/// Prints one line per skipped icon (and per written icon when verbose) to stderr.
///
/// Lines from different workers are serialized through a lock so they never
/// interleave.
pub struct ConsoleProgress {
    quiet: bool,
    verbose: bool,
    lock: Mutex<()>,
}

impl ConsoleProgress {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            lock: Mutex::new(()),
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn icon_finished(&self, update: ProgressUpdate<'_>) {
        if self.quiet {
            return;
        }
        let _guard = self.lock.lock();
        match update.outcome {
            IconOutcome::Skipped(skipped) => {
                eprintln!("Skipped {}: {}", skipped.name, skipped.reason);
            },
            IconOutcome::Written { name, .. } if self.verbose => {
                eprintln!("[{}/{}] Processed {}", update.completed, update.total, name);
            },
            IconOutcome::Written { .. } => {},
        }
    }

    fn compile_started(&self, report: &ProcessingReport) {
        if !self.quiet {
            let _guard = self.lock.lock();
            eprintln!(
                "Processed {} icons, skipped {}",
                report.processed, report.skipped
            );
            eprintln!();
            eprintln!("Starting font generation...");
        }
    }
}
