//! Seams for the two collaborators the pipeline hands work to
//!
//! - [`SvgOptimizer`] - takes an assembled SVG and returns a smaller equivalent
//! - [`FontCompiler`] - turns a directory of SVGs into font binaries and assets
//!
//! Both are object safe, so the batch orchestrator holds them as
//! `Arc<dyn ...>` and tests can swap in fakes.

use crate::error::{CompileError, OptimizeError};
use crate::font_config::FontConfig;
use crate::types::{CompileOutput, OptimizeOptions};

/// Shrinks an SVG without changing what it draws
///
/// Implementations must keep the root `viewBox` unless
/// [`OptimizeOptions::remove_view_box`] is set, and must not add or remove
/// shape elements.
///
/// ```ignore
/// struct Passthrough;
///
/// impl SvgOptimizer for Passthrough {
///     fn name(&self) -> &'static str {
///         "passthrough"
///     }
///
///     fn optimize(&self, svg: &str, _: &OptimizeOptions) -> Result<String, OptimizeError> {
///         Ok(svg.to_string())
///     }
/// }
/// ```
pub trait SvgOptimizer: Send + Sync {
    /// Used in logs and `iconfont info`
    fn name(&self) -> &'static str;

    fn optimize(&self, svg: &str, options: &OptimizeOptions) -> Result<String, OptimizeError>;
}

/// Builds the icon font from the intermediate batch
///
/// Called exactly once per run, after every icon has been written.
pub trait FontCompiler: Send + Sync {
    fn name(&self) -> &'static str;

    fn compile(&self, config: &FontConfig) -> Result<CompileOutput, CompileError>;
}
