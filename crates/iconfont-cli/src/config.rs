//! Build configuration: defaults, JSON config file, command-line overrides

use crate::cli::BuildArgs;
use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use iconfont_batch::DEFAULT_EXTENSION;
use iconfont_compile::FantasticonCompiler;
use iconfont_core::font_config::{DEFAULT_FONT_HEIGHT, DEFAULT_FONT_NAME, DEFAULT_PREFIX};
use iconfont_core::{
    AssetType, AssociationMode, AttributeAssociator, FontConfig, FontType, FormatOptions,
    JsonFormatOptions, OptimizeOptions, DEFAULT_WINDOW_RADIUS,
};
use iconfont_preview::{PreviewConfig, PreviewLink};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Every setting of a `build` run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    pub input_dir: Option<PathBuf>,
    pub extension: String,
    pub output_dir: PathBuf,
    pub preview: bool,
    pub preview_dir: PathBuf,
    pub preview_page: PreviewPage,
    pub name: String,
    pub prefix: String,
    pub font_types: Vec<FontType>,
    pub asset_types: Vec<AssetType>,
    pub font_height: u32,
    pub normalize: bool,
    pub json_indent: usize,
    pub association: AssociationMode,
    pub window_radius: usize,
    pub precision: u8,
    /// 0 = one worker per core
    pub jobs: usize,
    pub compiler_bin: String,
    pub compiler_args: Vec<String>,
    /// Seconds
    pub compiler_timeout: u64,
    pub report: Option<PathBuf>,
}

/// Preview page text; anything left out keeps the font's stock wording
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PreviewPage {
    pub title: Option<String>,
    pub heading: Option<String>,
    pub links: Option<Vec<PreviewLink>>,
    /// HTML, one entry per line
    pub footer: Option<Vec<String>>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: None,
            extension: DEFAULT_EXTENSION.to_string(),
            output_dir: PathBuf::from("dist"),
            preview: true,
            preview_dir: PathBuf::from("."),
            preview_page: PreviewPage::default(),
            name: DEFAULT_FONT_NAME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            font_types: vec![FontType::Woff2, FontType::Woff, FontType::Ttf, FontType::Eot],
            asset_types: vec![AssetType::Css, AssetType::Json],
            font_height: DEFAULT_FONT_HEIGHT,
            normalize: true,
            json_indent: 2,
            association: AssociationMode::Window,
            window_radius: DEFAULT_WINDOW_RADIUS,
            precision: OptimizeOptions::default().precision,
            jobs: 0,
            compiler_bin: iconfont_compile::DEFAULT_PROGRAM.to_string(),
            compiler_args: Vec::new(),
            compiler_timeout: iconfont_compile::DEFAULT_TIMEOUT.as_secs(),
            report: None,
        }
    }
}

impl BuildConfig {
    /// Read a JSON config file; keys left out keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Defaults, then the `--config` file if given, then the flags
    pub fn resolve(args: &BuildArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Overlay whatever was given on the command line
    pub fn apply_args(&mut self, args: &BuildArgs) {
        if let Some(dir) = &args.input_dir {
            self.input_dir = Some(dir.clone());
        }
        if let Some(extension) = &args.extension {
            self.extension = extension.clone();
        }
        if let Some(dir) = &args.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(name) = &args.name {
            self.name = name.clone();
        }
        if let Some(prefix) = &args.prefix {
            self.prefix = prefix.clone();
        }
        if !args.font_types.is_empty() {
            self.font_types = args.font_types.clone();
        }
        if !args.asset_types.is_empty() {
            self.asset_types = args.asset_types.clone();
        }
        if let Some(height) = args.font_height {
            self.font_height = height;
        }
        if args.no_normalize {
            self.normalize = false;
        }
        if let Some(indent) = args.json_indent {
            self.json_indent = indent;
        }
        if let Some(association) = args.association {
            self.association = association.mode();
        }
        if let Some(radius) = args.window_radius {
            self.window_radius = radius;
        }
        if let Some(precision) = args.precision {
            self.precision = precision;
        }
        if let Some(jobs) = args.jobs {
            self.jobs = jobs;
        }
        if let Some(bin) = &args.compiler_bin {
            self.compiler_bin = bin.clone();
        }
        if !args.compiler_args.is_empty() {
            self.compiler_args = args.compiler_args.clone();
        }
        if let Some(timeout) = args.compiler_timeout {
            self.compiler_timeout = timeout;
        }
        if args.no_preview {
            self.preview = false;
        }
        if let Some(dir) = &args.preview_dir {
            self.preview_dir = dir.clone();
        }
        if let Some(report) = &args.report {
            self.report = Some(report.clone());
        }
    }

    /// Catch mistakes before any work starts
    pub fn validate(&self) -> Result<()> {
        let Some(input_dir) = &self.input_dir else {
            bail!("No input directory given (pass <INPUT_DIR> or set inputDir in the config file)");
        };
        if !input_dir.is_dir() {
            bail!("Input directory {} does not exist", input_dir.display());
        }
        if self.extension.trim_start_matches('.').is_empty() {
            bail!("Module extension is empty");
        }
        if self.compiler_bin.trim().is_empty() {
            bail!("Compiler executable is empty");
        }
        if self.compiler_timeout == 0 {
            bail!("Compiler timeout must be at least one second");
        }
        self.font_config()?
            .validate()
            .context("Invalid font configuration")?;
        Ok(())
    }

    /// Compiler settings; the input directory is filled in by the orchestrator
    pub fn font_config(&self) -> Result<FontConfig> {
        let output_dir = Utf8PathBuf::from_path_buf(self.output_dir.clone()).map_err(|p| {
            anyhow::anyhow!("Output directory {} is not valid UTF-8", p.display())
        })?;
        Ok(FontConfig {
            name: self.name.clone(),
            font_types: self.font_types.clone(),
            asset_types: self.asset_types.clone(),
            prefix: self.prefix.clone(),
            font_height: self.font_height,
            normalize: self.normalize,
            format_options: FormatOptions {
                json: JsonFormatOptions {
                    indent: self.json_indent,
                },
            },
            ..FontConfig::new(Utf8PathBuf::new(), output_dir)
        })
    }

    pub fn associator(&self) -> AttributeAssociator {
        AttributeAssociator::new(self.association, self.window_radius)
    }

    pub fn optimize_options(&self) -> OptimizeOptions {
        OptimizeOptions {
            precision: self.precision,
            ..OptimizeOptions::default()
        }
    }

    pub fn compiler(&self) -> FantasticonCompiler {
        FantasticonCompiler::new()
            .with_program(&self.compiler_bin)
            .with_args(&self.compiler_args)
            .with_timeout(Duration::from_secs(self.compiler_timeout))
    }

    /// Preview page settings, with the font stylesheet linked relative to
    /// the preview directory when possible
    pub fn preview_config(&self) -> PreviewConfig {
        let dist = relative_href(&self.preview_dir, &self.output_dir);
        let mut preview = PreviewConfig::for_font(&self.name, &self.prefix, &dist);
        let page = self.preview_page.clone();
        if let Some(title) = page.title {
            preview.title = title;
        }
        if let Some(heading) = page.heading {
            preview.heading = heading;
        }
        if let Some(links) = page.links {
            preview.links = links;
        }
        if let Some(footer) = page.footer {
            preview.footer = footer;
        }
        preview
    }
}

/// `to` as an href relative to the directory `from`
///
/// Falls back to an absolute path when `to` is absolute or when `from`
/// climbs out of the working directory.
fn relative_href(from: &Path, to: &Path) -> String {
    if to.is_absolute() {
        return slashed(to);
    }
    let absolute_to = || {
        std::env::current_dir()
            .map(|cwd| slashed(&cwd.join(to)))
            .unwrap_or_else(|_| slashed(to))
    };
    if from.is_absolute() {
        return absolute_to();
    }

    let (from, to_parts) = (components(from), components(to));
    let common = from
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if from[common..].iter().any(|c| matches!(c, Component::ParentDir)) {
        return absolute_to();
    }

    let ups = from[common..].iter().map(|_| "..".to_string());
    let downs = to_parts[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());
    ups.chain(downs).collect::<Vec<_>>().join("/")
}

fn components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn slashed(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
