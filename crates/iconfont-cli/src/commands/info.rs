//! Info command implementation
//!
//! Displays defaults and the values accepted by the build options.

use crate::cli::InfoArgs;
use crate::config::BuildConfig;
use anyhow::Result;
use iconfont_core::{AssetType, AssociationMode, FontType};

pub fn run(args: &InfoArgs) -> Result<()> {
    // If no specific flags, show all info
    let show_all = !args.font_types && !args.asset_types && !args.modes;
    let defaults = BuildConfig::default();

    println!("Iconfont v{}", env!("CARGO_PKG_VERSION"));
    println!();

    if show_all {
        print_defaults(&defaults);
        println!();
    }

    if show_all || args.font_types {
        println!("Font types:");
        for font_type in FontType::ALL {
            let marker = if defaults.font_types.contains(&font_type) { "*" } else { " " };
            println!("  {} {:<8} - {}", marker, font_type.as_str(), font_type.description());
        }
        if show_all {
            println!();
        }
    }

    if show_all || args.asset_types {
        println!("Asset types:");
        for asset_type in AssetType::ALL {
            let marker = if defaults.asset_types.contains(&asset_type) { "*" } else { " " };
            println!("  {} {:<8} - {}", marker, asset_type.as_str(), asset_type.description());
        }
        if show_all {
            println!();
        }
    }

    if show_all || args.modes {
        println!("Association modes:");
        println!(
            "  {:<10} - fillRule/clipRule within {} bytes of a path (default)",
            AssociationMode::Window.as_str(),
            defaults.window_radius
        );
        println!(
            "  {:<10} - fillRule/clipRule inside the path's own object literal",
            AssociationMode::Span.as_str()
        );
    }

    if show_all || args.font_types || args.asset_types {
        println!();
        println!("* = emitted by default");
    }

    Ok(())
}

fn print_defaults(defaults: &BuildConfig) {
    println!("Defaults:");
    println!("  font name         {}", defaults.name);
    println!("  class prefix      {}", defaults.prefix);
    println!("  module extension  .{}", defaults.extension);
    println!("  output directory  {}", defaults.output_dir.display());
    println!("  font height       {}", defaults.font_height);
    println!("  compiler          {}", defaults.compiler_bin);
    println!("  compiler timeout  {}s", defaults.compiler_timeout);
}
