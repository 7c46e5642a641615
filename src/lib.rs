#![warn(missing_docs)]
//! Library support for the brewpick CLI.

/// Startup checks for required tools.
mod bootstrap;
/// Homebrew subprocess wrapper.
mod brew;
/// Remote formula and cask catalogs.
mod catalog;
/// Formula and cask categories.
mod category;
/// Fuzzy selection of a single item.
mod chooser;
/// Command-line interface wiring and session setup.
mod cli;
/// Interactive workflows.
mod commands;
/// Configuration loading and validation.
mod config;
/// User-facing status output.
mod diagnostics;
/// Error handling for the crate.
mod error;
/// Color palette and styling for CLI output.
mod palette;
/// Path expansion and display utilities.
mod paths;
/// Line prompts and menu tokens.
mod prompt;
/// Fakes for session tests.
#[cfg(test)]
mod testutil;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub async fn run() -> Result<()> {
    cli::run().await
}
