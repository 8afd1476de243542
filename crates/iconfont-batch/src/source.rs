// this_file: crates/iconfont-batch/src/source.rs

//! Icon module discovery.

use iconfont_core::{IconError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default module extension
pub const DEFAULT_EXTENSION: &str = "js";

/// Module files directly inside `dir` with the given extension, sorted by
/// file name. Subdirectories are not entered; source maps (`*.js.map`) have
/// a different extension and are never picked up.
pub fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let discovery_error = |source: std::io::Error| IconError::Discovery {
        path: dir.display().to_string(),
        source,
    };

    if !dir.is_dir() {
        return Err(discovery_error(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not a directory",
        )));
    }

    let extension = extension.trim_start_matches('.');
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| discovery_error(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == extension) {
            sources.push(path);
        }
    }

    log::info!("Found {} icon module(s) in {}", sources.len(), dir.display());
    Ok(sources)
}
