//! Configuration loading and validation.

use std::{
    fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

use serde::Deserialize;
use url::Url;

use crate::{
    category::Category,
    error::{Error, Result},
    paths,
};

/// Default formula catalog endpoint.
pub const DEFAULT_FORMULA_URL: &str = "https://formulae.brew.sh/api/formula.json";
/// Default cask catalog endpoint.
pub const DEFAULT_CASK_URL: &str = "https://formulae.brew.sh/api/cask.json";
/// Default catalog fetch timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which item selector to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// External `fzf` process.
    Fzf,
    /// Built-in filterable list.
    Builtin,
}

/// Parsed configuration for the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Formula catalog endpoint.
    formula_url: Url,
    /// Cask catalog endpoint.
    cask_url: Url,
    /// Timeout for each catalog fetch.
    timeout: Duration,
    /// Package manager program.
    brew: String,
    /// Preferred item selector.
    selector: SelectorKind,
    /// Selector command line, split into words.
    fzf_command: Vec<String>,
}

/// Raw config file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// Formula catalog endpoint.
    formula_url: Option<String>,
    /// Cask catalog endpoint.
    cask_url: Option<String>,
    /// Fetch timeout in seconds.
    timeout_secs: Option<u64>,
    /// Package manager program.
    brew: Option<String>,
    /// Preferred item selector.
    selector: Option<SelectorKind>,
    /// Selector command line.
    fzf_command: Option<String>,
}

impl Config {
    /// Load the config, from `explicit` when given or the default path otherwise.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path, true),
            None => {
                let path = paths::default_config_path()?;
                Self::load_from(&path, false)
            }
        }
    }

    /// Load a config file from a path.
    pub(crate) fn load_from(path: &Path, required: bool) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|error| Error::ConfigParse {
                path: path.to_path_buf(),
                source: error,
            })?,
            Err(error) if error.kind() == ErrorKind::NotFound && !required => {
                tracing::debug!(path = %paths::display_path(path), "no config file, using defaults");
                RawConfig::default()
            }
            Err(error) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source: error,
                });
            }
        };
        Self::from_raw(raw)
    }

    /// Validate raw values and fill in defaults.
    fn from_raw(raw: RawConfig) -> Result<Self> {
        let formula_url = parse_url(raw.formula_url.as_deref().unwrap_or(DEFAULT_FORMULA_URL))?;
        let cask_url = parse_url(raw.cask_url.as_deref().unwrap_or(DEFAULT_CASK_URL))?;

        let timeout_secs = raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::ConfigValue {
                key: "timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }

        let brew = paths::expand_program(raw.brew.as_deref().unwrap_or("brew"))?;
        if brew.trim().is_empty() {
            return Err(Error::ConfigValue {
                key: "brew",
                message: "must not be empty".to_string(),
            });
        }

        let fzf_command = match raw.fzf_command.as_deref() {
            Some(command) => split_command(command)?,
            None => vec!["fzf".to_string()],
        };

        Ok(Self {
            formula_url,
            cask_url,
            timeout: Duration::from_secs(timeout_secs),
            brew,
            selector: raw.selector.unwrap_or(SelectorKind::Fzf),
            fzf_command,
        })
    }

    /// Catalog endpoint for a category.
    pub(crate) fn catalog_url(&self, category: Category) -> &Url {
        match category {
            Category::Formula => &self.formula_url,
            Category::Cask => &self.cask_url,
        }
    }

    /// Timeout applied to each catalog fetch.
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Package manager program.
    pub(crate) fn brew(&self) -> &str {
        &self.brew
    }

    /// Preferred item selector.
    pub(crate) fn selector(&self) -> SelectorKind {
        self.selector
    }

    /// Selector command line; the first word is the program.
    pub(crate) fn fzf_command(&self) -> &[String] {
        &self.fzf_command
    }
}

/// Parse and validate a catalog URL.
fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|_| Error::InvalidUrl {
        url: raw.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl {
            url: raw.to_string(),
        });
    }
    Ok(url)
}

/// Split a selector command string into words.
fn split_command(command: &str) -> Result<Vec<String>> {
    let words = shell_words::split(command).map_err(|error| Error::SelectorParse {
        message: error.to_string(),
    })?;
    if words.is_empty() {
        return Err(Error::SelectorParse {
            message: "selector command is empty".to_string(),
        });
    }
    Ok(words)
}
