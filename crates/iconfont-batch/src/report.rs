// this_file: crates/iconfont-batch/src/report.rs

//! Per-icon outcomes and the batch report built from them.

use iconfont_core::ExtractError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Why an icon was left out of the font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "message")]
pub enum SkipReason {
    /// The module has no `viewBox` literal
    #[error("No viewBox found")]
    NoViewBox,

    /// The module has a viewBox but no path or circle
    #[error("No SVG paths found")]
    NoShapes,

    /// The optimizer rejected the assembled SVG
    #[error("Optimization failed: {0}")]
    OptimizationFailure(String),

    /// The module file could not be read
    #[error("Cannot read module: {0}")]
    Unreadable(String),

    /// The intermediate SVG could not be written
    #[error("Cannot write SVG: {0}")]
    WriteFailure(String),
}

impl From<ExtractError> for SkipReason {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::NoViewBox => SkipReason::NoViewBox,
            ExtractError::NoShapes => SkipReason::NoShapes,
        }
    }
}

/// Pipeline step an icon failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStage {
    /// Reading the module text
    Read,
    /// Extracting viewBox and shapes
    Extract,
    /// Optimizing the assembled SVG
    Optimize,
    /// Writing the intermediate file
    Write,
}

impl IconStage {
    /// Lowercase stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStage::Read => "read",
            IconStage::Extract => "extract",
            IconStage::Optimize => "optimize",
            IconStage::Write => "write",
        }
    }
}

impl std::fmt::Display for IconStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skipped icon as recorded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedIcon {
    /// Icon identifier
    pub name: String,
    /// Where processing stopped
    pub stage: IconStage,
    /// What went wrong
    pub reason: SkipReason,
}

/// Terminal state of one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// The optimized SVG is in scratch storage
    Written {
        /// Icon identifier
        name: String,
        /// Intermediate file
        path: PathBuf,
    },
    /// The icon was left out
    Skipped(SkippedIcon),
}

impl IconOutcome {
    /// Outcome for an icon that failed at `stage`
    pub fn skipped(name: impl Into<String>, stage: IconStage, reason: SkipReason) -> Self {
        IconOutcome::Skipped(SkippedIcon {
            name: name.into(),
            stage,
            reason,
        })
    }

    /// Icon identifier
    pub fn name(&self) -> &str {
        match self {
            IconOutcome::Written { name, .. } => name,
            IconOutcome::Skipped(skipped) => &skipped.name,
        }
    }

    /// Whether the icon made it into the batch
    pub fn is_written(&self) -> bool {
        matches!(self, IconOutcome::Written { .. })
    }
}

/// Counts and skip reasons for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingReport {
    /// Icons written to scratch storage
    pub processed: usize,
    /// Icons left out
    pub skipped: usize,
    /// One entry per skipped icon, in enumeration order
    pub skip_reasons: Vec<SkippedIcon>,
}

impl ProcessingReport {
    /// Build a report from outcomes given in enumeration order
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a IconOutcome>,
    {
        let mut report = Self::default();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }

    /// Append a single outcome
    pub fn record(&mut self, outcome: &IconOutcome) {
        match outcome {
            IconOutcome::Written { .. } => self.processed += 1,
            IconOutcome::Skipped(skipped) => {
                self.skipped += 1;
                self.skip_reasons.push(skipped.clone());
            },
        }
    }

    /// Append another report's entries after this one's
    pub fn merge(&mut self, other: ProcessingReport) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.skip_reasons.extend(other.skip_reasons);
    }

    /// Total icons seen
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}
