//! Interactive fuzzy selection of a single item.

use std::{
    io::{ErrorKind, Write},
    process::{Command, Stdio},
};

use inquire::{Select, error::InquireError};

use crate::error::{Error, Result};

/// Exit status fzf uses when nothing matched the query.
const FZF_NO_MATCH: i32 = 1;
/// Exit status fzf uses when interrupted with Esc or Ctrl-C.
const FZF_INTERRUPTED: i32 = 130;
/// Rows shown at once by the built-in selector.
const BUILTIN_PAGE_SIZE: usize = 15;

/// Picks one item from a list of candidates.
pub(crate) trait Chooser {
    /// Present `items` under `prompt` and return the chosen one, if any.
    fn choose(&mut self, items: &[String], prompt: &str) -> Result<Option<String>>;
}

/// Chooser that runs an external `fzf` process.
#[derive(Debug, Clone)]
pub struct FzfChooser {
    /// Program to run.
    program: String,
    /// Extra arguments placed before `--prompt`.
    args: Vec<String>,
}

impl FzfChooser {
    /// Create a chooser from a command line whose first word is the program.
    pub(crate) fn new(command: &[String]) -> Result<Self> {
        let (program, args) = command.split_first().ok_or_else(|| Error::SelectorParse {
            message: "selector command is empty".to_string(),
        })?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Program that will be run.
    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one selection run.
    fn arguments(&self, prompt: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push("--prompt".to_string());
        args.push(format!("{prompt} "));
        args
    }
}

impl Chooser for FzfChooser {
    fn choose(&mut self, items: &[String], prompt: &str) -> Result<Option<String>> {
        if items.is_empty() {
            return Ok(None);
        }

        tracing::debug!(program = %self.program, candidates = items.len(), "launching selector");
        let mut child = Command::new(&self.program)
            .args(self.arguments(prompt))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|error| Error::SelectorSpawn {
                program: self.program.clone(),
                source: error,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = items.join("\n");
            // fzf may exit on a selection before reading every candidate.
            match stdin.write_all(input.as_bytes()) {
                Err(error) if error.kind() != ErrorKind::BrokenPipe => {
                    return Err(Error::SelectorWrite {
                        program: self.program.clone(),
                        source: error,
                    });
                }
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(|error| Error::SelectorSpawn {
            program: self.program.clone(),
            source: error,
        })?;

        match output.status.code() {
            Some(0) => Ok(parse_selection(&String::from_utf8_lossy(&output.stdout))),
            Some(FZF_NO_MATCH | FZF_INTERRUPTED) => Ok(None),
            _ => Err(Error::SelectorStatus {
                program: self.program.clone(),
                status: output.status,
            }),
        }
    }
}

/// Take the first non-empty line of selector output.
fn parse_selection(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Chooser using inquire's filterable list, for systems without fzf.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinChooser;

impl Chooser for BuiltinChooser {
    fn choose(&mut self, items: &[String], prompt: &str) -> Result<Option<String>> {
        if items.is_empty() {
            return Ok(None);
        }

        match Select::new(prompt, items.to_vec())
            .with_page_size(BUILTIN_PAGE_SIZE)
            .prompt()
        {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(error) => Err(Error::PromptFailed {
                message: error.to_string(),
            }),
        }
    }
}

/// Selector chosen for the session.
#[derive(Debug, Clone)]
pub enum Selector {
    /// External fzf.
    Fzf(FzfChooser),
    /// Built-in list.
    Builtin(BuiltinChooser),
}

impl Chooser for Selector {
    fn choose(&mut self, items: &[String], prompt: &str) -> Result<Option<String>> {
        match self {
            Self::Fzf(chooser) => chooser.choose(items, prompt),
            Self::Builtin(chooser) => chooser.choose(items, prompt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| (*word).to_string()).collect()
    }

    #[test]
    fn prompt_follows_configured_args() {
        let chooser = FzfChooser::new(&words(&["fzf", "--height", "40%"])).expect("chooser");
        assert_eq!(
            chooser.arguments("Select a formula to install"),
            ["--height", "40%", "--prompt", "Select a formula to install "]
        );
    }

    #[test]
    fn empty_command_is_rejected() {
        let error = FzfChooser::new(&[]).expect_err("should fail");
        assert!(matches!(error, Error::SelectorParse { .. }));
    }

    #[test]
    fn selection_is_first_non_empty_line() {
        assert_eq!(parse_selection("\nwget\n"), Some("wget".to_string()));
        assert_eq!(parse_selection("  \n"), None);
    }

    #[test]
    fn empty_candidates_skip_the_process() {
        let mut chooser =
            FzfChooser::new(&words(&["/nonexistent/selector"])).expect("chooser");
        assert_eq!(chooser.choose(&[], "Pick").expect("no spawn"), None);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let mut chooser =
            FzfChooser::new(&words(&["/nonexistent/selector"])).expect("chooser");
        let error = chooser
            .choose(&words(&["wget"]), "Pick")
            .expect_err("spawn should fail");
        assert!(matches!(error, Error::SelectorSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn any_line_printing_program_can_select() {
        // `sh -c` takes the trailing prompt arguments as positional parameters.
        let mut chooser =
            FzfChooser::new(&words(&["sh", "-c", "head -n 1", "selector"])).expect("chooser");
        let choice = chooser
            .choose(&words(&["wget", "htop"]), "Pick")
            .expect("selector runs");
        assert_eq!(choice, Some("wget".to_string()));
    }
}
