//! Subcommand implementations

pub mod build;
pub mod extract;
pub mod info;
