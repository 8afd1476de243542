//! Iconfont CLI - icon modules in, icon font out

mod cli;
mod commands;
mod config;
mod console;

use clap::Parser;
use cli::{Cli, Commands};
use iconfont_core::IconError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Build(args) => {
            init_logger(args.verbose);
            commands::build::run(args)
        },
        Commands::Extract(args) => {
            init_logger(args.verbose);
            commands::extract::run(args)
        },
        Commands::Info(args) => {
            init_logger(false);
            commands::info::run(args)
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<IconError>() {
                // Already reads "Font generation failed: ..."
                Some(compile @ IconError::Compile(_)) => eprintln!("\n{}", compile),
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
