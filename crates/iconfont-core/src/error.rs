//! Error types for iconfont

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

/// Main error type for iconfont
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Optimization failed: {0}")]
    Optimize(#[from] OptimizeError),

    #[error("Font generation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Cannot enumerate icon sources in {path}: {source}")]
    Discovery {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Scratch storage error: {0}")]
    Scratch(#[source] std::io::Error),

    #[error("Preview generation failed: {0}")]
    Preview(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an icon module yielded no document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("No viewBox found")]
    NoViewBox,

    #[error("No SVG paths found")]
    NoShapes,
}

/// Optimizer rejections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error("Malformed SVG: {0}")]
    Parse(String),

    #[error("Root element is <{0}>, expected <svg>")]
    NotSvg(String),

    #[error("Invalid path data {data:?}: {message}")]
    PathData { data: String, message: String },
}

/// Font compiler failures
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Invalid font configuration: {0}")]
    Config(String),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Compiler exited with {status}: {stderr}")]
    Exited { status: String, stderr: String },

    #[error("Compiler did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Cannot read codepoint map: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
