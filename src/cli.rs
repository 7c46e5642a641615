//! CLI parsing and session setup.

use std::{io, path::PathBuf};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::{
    bootstrap,
    brew::Brew,
    catalog::HttpCatalog,
    commands::{self, Session},
    config::Config,
    diagnostics::Reporter,
    error::{Error, Result},
    prompt::InquirePrompter,
};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "brewpick",
    version,
    about = "Fuzzy-pick Homebrew formulas and casks to install"
)]
struct Cli {
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    /// Enable verbose output.
    #[arg(long)]
    verbose: bool,
    /// Read configuration from this file instead of ~/.brewpick.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

/// Run the interactive session.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;
    let mut reporter = Reporter::new(cli.color.into_choice().enabled());
    let mut brew = Brew::new(config.brew());
    let selector = bootstrap::ensure(&config, &mut brew, &mut reporter)?;
    let catalog = HttpCatalog::new(&config)?;

    let mut session = Session::new(catalog, selector, brew, InquirePrompter, reporter);
    commands::menu::run(&mut session).await?;
    tracing::debug!(warnings = session.reporter.warning_count(), "session finished");
    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "brewpick=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| Error::Logging {
            message: error.to_string(),
        })
}

impl ColorMode {
    /// Convert a CLI color mode into a color choice.
    fn into_choice(self) -> commands::ColorChoice {
        match self {
            Self::Auto => commands::ColorChoice::Auto,
            Self::Always => commands::ColorChoice::Always,
            Self::Never => commands::ColorChoice::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::{Cli, ColorMode};

    #[test]
    fn defaults_to_auto_color() {
        let cli = Cli::try_parse_from(["brewpick"]).expect("parse");
        assert!(matches!(cli.color, ColorMode::Auto));
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn accepts_ambient_flags() {
        let cli = Cli::try_parse_from([
            "brewpick",
            "--color",
            "never",
            "--verbose",
            "--config",
            "/tmp/brewpick.toml",
        ])
        .expect("parse");
        assert!(matches!(cli.color, ColorMode::Never));
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/brewpick.toml")));
    }

    #[test]
    fn rejects_subcommands() {
        assert!(Cli::try_parse_from(["brewpick", "install"]).is_err());
    }
}
