//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use iconfont_core::{AssetType, AssociationMode, FontType};
use std::path::PathBuf;

/// Iconfont - turn icon modules into an icon font
#[derive(Parser, Debug)]
#[command(name = "iconfont")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an icon font from a directory of icon modules
    #[command(alias = "b")]
    Build(Box<BuildArgs>),

    /// Print the SVG recovered from a single icon module
    #[command(alias = "x")]
    Extract(ExtractArgs),

    /// Display defaults, font types, asset types and association modes
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the build command
///
/// Every option overrides the matching key of the `--config` file, which in
/// turn overrides the built-in defaults.
#[derive(Parser, Debug, Default)]
pub struct BuildArgs {
    /// Directory containing the icon modules
    pub input_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    // Input Options
    /// Module file extension
    #[arg(long = "extension")]
    pub extension: Option<String>,

    // Font Options
    /// Directory for fonts, stylesheet and codepoint map
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Font family name (also the asset file stem)
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// CSS class prefix
    #[arg(short = 'p', long = "prefix")]
    pub prefix: Option<String>,

    /// Font formats to emit (comma separated)
    #[arg(long = "font-types", value_delimiter = ',')]
    pub font_types: Vec<FontType>,

    /// Auxiliary assets to emit (comma separated)
    #[arg(long = "asset-types", value_delimiter = ',')]
    pub asset_types: Vec<AssetType>,

    /// Glyph normalization height
    #[arg(long = "font-height")]
    pub font_height: Option<u32>,

    /// Keep original glyph sizes instead of normalizing them
    #[arg(long = "no-normalize", action = ArgAction::SetTrue)]
    pub no_normalize: bool,

    /// Indentation of the JSON codepoint map
    #[arg(long = "json-indent")]
    pub json_indent: Option<usize>,

    // Extraction Options
    /// How fillRule/clipRule literals are matched to paths
    #[arg(long = "association")]
    pub association: Option<AssociationArg>,

    /// Search radius in bytes for window association
    #[arg(long = "window-radius")]
    pub window_radius: Option<usize>,

    /// Decimal places kept by the optimizer
    #[arg(long = "precision")]
    pub precision: Option<u8>,

    /// Worker threads (0 = one per core, 1 = sequential)
    #[arg(short = 'j', long = "jobs")]
    pub jobs: Option<usize>,

    // Compiler Options
    /// Font compiler executable
    #[arg(long = "compiler-bin")]
    pub compiler_bin: Option<String>,

    /// Argument placed before `--config` when running the compiler (repeatable)
    #[arg(long = "compiler-arg", action = ArgAction::Append, allow_hyphen_values = true)]
    pub compiler_args: Vec<String>,

    /// Seconds the compiler may run before it is killed
    #[arg(long = "compiler-timeout")]
    pub compiler_timeout: Option<u64>,

    // Output Options
    /// Skip the HTML preview page
    #[arg(long = "no-preview", action = ArgAction::SetTrue)]
    pub no_preview: bool,

    /// Directory for index.html and preview.css
    #[arg(long = "preview-dir")]
    pub preview_dir: Option<PathBuf>,

    /// Write the processing report as JSON
    #[arg(long = "report")]
    pub report: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Icon module file
    pub module: PathBuf,

    /// Print the assembled SVG without optimizing it
    #[arg(long = "raw")]
    pub raw: bool,

    /// How fillRule/clipRule literals are matched to paths
    #[arg(long = "association", default_value = "window")]
    pub association: AssociationArg,

    /// Search radius in bytes for window association
    #[arg(long = "window-radius", default_value_t = iconfont_core::DEFAULT_WINDOW_RADIUS)]
    pub window_radius: usize,

    /// Decimal places kept by the optimizer
    #[arg(long = "precision", default_value = "3")]
    pub precision: u8,

    /// Verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List font formats
    #[arg(long)]
    pub font_types: bool,

    /// List auxiliary asset types
    #[arg(long)]
    pub asset_types: bool,

    /// List association modes
    #[arg(long)]
    pub modes: bool,
}

/// Association modes as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AssociationArg {
    /// Nearest literals within a fixed byte radius
    Window,
    /// Literals inside the path's own object literal
    Span,
}

impl AssociationArg {
    pub fn as_str(&self) -> &'static str {
        self.mode().as_str()
    }

    pub fn mode(self) -> AssociationMode {
        match self {
            Self::Window => AssociationMode::Window,
            Self::Span => AssociationMode::Span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_args_parse() {
        let cli = Cli::try_parse_from([
            "iconfont",
            "build",
            "icons",
            "--font-types",
            "woff2,ttf",
            "--association",
            "span",
            "--compiler-bin",
            "npx",
            "--compiler-arg",
            "fantasticon",
            "-j",
            "2",
        ])
        .unwrap();
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.input_dir, Some(PathBuf::from("icons")));
        assert_eq!(args.font_types, vec![FontType::Woff2, FontType::Ttf]);
        assert_eq!(args.association, Some(AssociationArg::Span));
        assert_eq!(args.compiler_args, vec!["fantasticon"]);
        assert_eq!(args.jobs, Some(2));
    }

    #[test]
    fn test_unknown_font_type_rejected() {
        let err = Cli::try_parse_from(["iconfont", "build", "icons", "--font-types", "otf"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::try_parse_from(["iconfont", "extract", "add.js"]).unwrap();
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.association, AssociationArg::Window);
        assert_eq!(args.window_radius, 100);
        assert!(!args.raw);
    }
}
