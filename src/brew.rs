//! Package manager invocation.

use std::{
    collections::HashSet,
    process::{Command, Stdio},
};

use crate::{
    category::Category,
    error::{Error, Result},
};

/// Identifiers currently installed, as reported by the package manager.
pub type InstalledSet = HashSet<String>;

/// Operations the CLI needs from the package manager.
pub(crate) trait PackageManager {
    /// Query the identifiers currently installed.
    fn installed(&mut self) -> Result<InstalledSet>;

    /// Install one identifier of the given category.
    fn install(&mut self, category: Category, name: &str) -> Result<()>;

    /// Fully remove one identifier.
    fn uninstall(&mut self, name: &str) -> Result<()>;
}

/// Homebrew driven as a subprocess.
#[derive(Debug, Clone)]
pub struct Brew {
    /// Program to run.
    program: String,
}

impl Brew {
    /// Create a wrapper around the given program.
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check that the program runs at all.
    pub(crate) fn probe(&self) -> Result<()> {
        let available = Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success());
        if available {
            Ok(())
        } else {
            Err(Error::BrewMissing {
                program: self.program.clone(),
            })
        }
    }

    /// Render a command line for messages.
    fn command_line(&self, args: &[&str]) -> String {
        let mut words = vec![self.program.as_str()];
        words.extend_from_slice(args);
        shell_words::join(words)
    }

    /// Run with inherited output so brew's progress reaches the terminal.
    fn run_interactive(&self, args: &[&str]) -> Result<()> {
        let command = self.command_line(args);
        tracing::debug!(%command, "running package manager");
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| Error::BrewSpawn {
                command: command.clone(),
                source,
            })?;
        if !status.success() {
            return Err(Error::BrewStatus { command, status });
        }
        Ok(())
    }
}

impl PackageManager for Brew {
    fn installed(&mut self) -> Result<InstalledSet> {
        let args = list_args();
        let command = self.command_line(&args);
        tracing::debug!(%command, "querying installed packages");
        let output = Command::new(&self.program)
            .args(args)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| Error::BrewSpawn {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(Error::BrewStatus {
                command,
                status: output.status,
            });
        }
        Ok(parse_installed(&String::from_utf8_lossy(&output.stdout)))
    }

    fn install(&mut self, category: Category, name: &str) -> Result<()> {
        self.run_interactive(&install_args(category, name))
    }

    fn uninstall(&mut self, name: &str) -> Result<()> {
        self.run_interactive(&uninstall_args(name))
    }
}

/// Arguments listing installed formulas and casks, one per line.
fn list_args() -> [&'static str; 2] {
    ["list", "-1"]
}

/// Arguments installing one identifier.
fn install_args(category: Category, name: &str) -> Vec<&str> {
    let mut args = vec!["install"];
    args.extend(category.install_flag());
    args.push(name);
    args
}

/// Arguments removing one identifier along with its leftover files.
fn uninstall_args(name: &str) -> [&str; 3] {
    ["uninstall", "--zap", name]
}

/// Parse newline-separated identifiers, ignoring blank lines.
fn parse_installed(stdout: &str) -> InstalledSet {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cask_installs_pass_the_flag() {
        assert_eq!(install_args(Category::Cask, "firefox"), ["install", "--cask", "firefox"]);
        assert_eq!(install_args(Category::Formula, "wget"), ["install", "wget"]);
    }

    #[test]
    fn uninstall_zaps() {
        assert_eq!(uninstall_args("firefox"), ["uninstall", "--zap", "firefox"]);
    }

    #[test]
    fn installed_output_ignores_blank_lines() {
        let set = parse_installed("wget\n\n  htop  \nfirefox\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("htop"));
    }

    #[test]
    fn command_lines_quote_arguments() {
        let brew = Brew::new("/opt/home brew/bin/brew");
        assert_eq!(
            brew.command_line(&["install", "wget"]),
            "'/opt/home brew/bin/brew' install wget"
        );
    }

    #[test]
    fn missing_program_fails_probe() {
        let brew = Brew::new("/nonexistent/brew");
        assert!(matches!(brew.probe(), Err(Error::BrewMissing { .. })));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let mut brew = Brew::new("/nonexistent/brew");
        let error = brew.install(Category::Formula, "wget").expect_err("should fail");
        assert!(matches!(error, Error::BrewSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_status_error() {
        let mut brew = Brew::new("false");
        let error = brew.uninstall("wget").expect_err("should fail");
        assert!(matches!(error, Error::BrewStatus { .. }));
    }
}
