// this_file: crates/iconfont-core/src/font_config.rs

//! Configuration handed to the font compiler.
//!
//! Field names serialize in camelCase because the external compiler reads
//! this structure directly as its config file.

use crate::error::CompileError;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Default font family identifier
pub const DEFAULT_FONT_NAME: &str = "wordpress-icons";
/// Default CSS class prefix
pub const DEFAULT_PREFIX: &str = "wpi";
/// Glyph normalization height
pub const DEFAULT_FONT_HEIGHT: u32 = 300;

/// Binary font formats the compiler can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    Woff2,
    Woff,
    Ttf,
    Eot,
    Svg,
}

impl FontType {
    pub const ALL: [FontType; 5] = [Self::Woff2, Self::Woff, Self::Ttf, Self::Eot, Self::Svg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Woff2 => "woff2",
            Self::Woff => "woff",
            Self::Ttf => "ttf",
            Self::Eot => "eot",
            Self::Svg => "svg",
        }
    }

    /// One-line description for `iconfont info`
    pub fn description(&self) -> &'static str {
        match self {
            Self::Woff2 => "Modern web font",
            Self::Woff => "Standard web font",
            Self::Ttf => "TrueType font",
            Self::Eot => "IE support",
            Self::Svg => "SVG font (legacy)",
        }
    }
}

/// Auxiliary assets the compiler can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Css,
    Scss,
    Sass,
    Html,
    Json,
    Ts,
}

impl AssetType {
    pub const ALL: [AssetType; 6] = [
        Self::Css,
        Self::Scss,
        Self::Sass,
        Self::Html,
        Self::Json,
        Self::Ts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::Html => "html",
            Self::Json => "json",
            Self::Ts => "ts",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Css => "Stylesheet",
            Self::Scss => "SCSS stylesheet",
            Self::Sass => "Sass stylesheet",
            Self::Html => "Compiler preview page",
            Self::Json => "Icon mapping",
            Self::Ts => "TypeScript types",
        }
    }
}

macro_rules! impl_name_parsing {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|t| t.as_str() == wanted)
                    .ok_or_else(|| format!(concat!("Unknown ", $what, ": {}"), s))
            }
        }
    };
}

impl_name_parsing!(FontType, "font type");
impl_name_parsing!(AssetType, "asset type");

/// Formatting for the JSON codepoint map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFormatOptions {
    pub indent: usize,
}

impl Default for JsonFormatOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Per-asset formatting options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub json: JsonFormatOptions,
}

/// Everything the font compiler needs for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    /// Directory holding the optimized intermediate SVGs
    pub input_dir: Utf8PathBuf,
    /// Directory receiving fonts and assets
    pub output_dir: Utf8PathBuf,
    /// Font family identifier, also the asset file stem
    pub name: String,
    pub font_types: Vec<FontType>,
    pub asset_types: Vec<AssetType>,
    /// CSS class prefix
    pub prefix: String,
    /// Seed codepoint map, populated by the compiler
    pub codepoints: BTreeMap<String, u32>,
    pub font_height: u32,
    pub normalize: bool,
    pub format_options: FormatOptions,
}

impl FontConfig {
    /// Configuration with the stock settings
    pub fn new(input_dir: impl Into<Utf8PathBuf>, output_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            name: DEFAULT_FONT_NAME.to_string(),
            font_types: vec![FontType::Woff2, FontType::Woff, FontType::Ttf, FontType::Eot],
            asset_types: vec![AssetType::Css, AssetType::Json],
            prefix: DEFAULT_PREFIX.to_string(),
            codepoints: BTreeMap::new(),
            font_height: DEFAULT_FONT_HEIGHT,
            normalize: true,
            format_options: FormatOptions::default(),
        }
    }

    /// Reject settings the compiler cannot work with
    pub fn validate(&self) -> Result<(), CompileError> {
        if self.name.trim().is_empty() {
            return Err(CompileError::Config("font name is empty".into()));
        }
        if self.name.contains(['/', '\\']) {
            return Err(CompileError::Config(format!(
                "font name {:?} must not contain path separators",
                self.name
            )));
        }
        if self.prefix.trim().is_empty() {
            return Err(CompileError::Config("class prefix is empty".into()));
        }
        if self.font_types.is_empty() {
            return Err(CompileError::Config("no font types requested".into()));
        }
        if self.font_height == 0 {
            return Err(CompileError::Config("font height must be positive".into()));
        }
        Ok(())
    }

    /// Whether the compiler will write `<name>.json`
    pub fn emits_codepoint_map(&self) -> bool {
        self.asset_types.contains(&AssetType::Json)
    }

    /// Path of an asset the compiler writes for this font
    pub fn asset_path(&self, extension: &str) -> Utf8PathBuf {
        self.output_dir.join(format!("{}.{}", self.name, extension))
    }
}
