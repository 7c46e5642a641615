//! Error types for the brewpick CLI.

use std::{
    env::VarError,
    io,
    path::PathBuf,
    process::{ExitCode, ExitStatus},
    result::Result as StdResult,
};

use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for brewpick operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: TomlError,
    },
    /// A config value was present but unusable.
    #[error("Invalid config value for `{key}`: {message}")]
    ConfigValue {
        /// Config key that was rejected.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
    /// Home directory resolution failed.
    #[error("Failed to resolve the home directory.")]
    HomeDirMissing,
    /// A configured path could not be expanded.
    #[error("Invalid path in config: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// A catalog URL could not be used.
    #[error("Invalid catalog URL: {url}")]
    InvalidUrl {
        /// The invalid URL.
        url: String,
    },
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {message}")]
    HttpClient {
        /// Error message.
        message: String,
    },
    /// A catalog could not be downloaded.
    #[error("Failed to fetch catalog from {url}: {message}")]
    CatalogFetch {
        /// URL that failed.
        url: String,
        /// Error message.
        message: String,
    },
    /// A catalog body was not the expected JSON shape.
    #[error("Failed to parse catalog from {url}: {source}")]
    CatalogParse {
        /// URL the body came from.
        url: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The package manager is not installed or not runnable.
    #[error("Package manager `{program}` was not found. Install Homebrew from https://brew.sh first.")]
    BrewMissing {
        /// Package manager program.
        program: String,
    },
    /// The package manager could not be spawned.
    #[error("Failed to run `{command}`: {source}")]
    BrewSpawn {
        /// Command line that failed to spawn.
        command: String,
        /// Underlying spawn error.
        source: io::Error,
    },
    /// The package manager exited with a non-zero status.
    #[error("`{command}` exited with status {status}")]
    BrewStatus {
        /// Command line that failed.
        command: String,
        /// Exit status returned by the package manager.
        status: ExitStatus,
    },
    /// The selector command could not be parsed.
    #[error("Invalid selector command: {message}")]
    SelectorParse {
        /// Error message describing the parse failure.
        message: String,
    },
    /// The selector could not be spawned.
    #[error("Failed to run selector `{program}`: {source}")]
    SelectorSpawn {
        /// Selector program that failed to spawn.
        program: String,
        /// Underlying spawn error.
        source: io::Error,
    },
    /// Failed to write candidates to the selector.
    #[error("Failed to write to selector `{program}`: {source}")]
    SelectorWrite {
        /// Selector program that failed to receive input.
        program: String,
        /// Underlying write error.
        source: io::Error,
    },
    /// The selector exited with an unexpected status.
    #[error("Selector `{program}` exited with status {status}")]
    SelectorStatus {
        /// Selector program that exited.
        program: String,
        /// Exit status returned by the selector.
        status: ExitStatus,
    },
    /// An interactive prompt was interrupted or canceled.
    #[error("Prompt canceled.")]
    PromptCanceled,
    /// An interactive prompt failed.
    #[error("Prompt failed: {message}")]
    PromptFailed {
        /// Error message describing the prompt failure.
        message: String,
    },
    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {message}")]
    Logging {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
