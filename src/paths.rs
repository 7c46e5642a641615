//! Path expansion and display utilities.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::error::{Error, Result};

/// Return the default config path for the current platform.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirMissing)?;
    Ok(home.join(".brewpick.toml"))
}

/// Expand `~` and environment variables in a config-provided program path.
pub fn expand_program(raw: &str) -> Result<String> {
    let expanded = shellexpand::full(raw).map_err(|error| Error::PathExpansion {
        path: raw.to_string(),
        source: error,
    })?;
    Ok(expanded.into_owned())
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn plain_programs_are_unchanged() {
        assert_eq!(expand_program("brew").expect("expand"), "brew");
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir");
        let expanded = expand_program("~/bin/brew").expect("expand");
        assert_eq!(Path::new(&expanded), home.join("bin/brew"));
    }

    #[test]
    fn paths_outside_home_display_verbatim() {
        assert_eq!(display_path(Path::new("/opt/brewpick.toml")), "/opt/brewpick.toml");
    }
}
