//! Line prompts and the single-letter tokens they accept.

use std::result::Result as StdResult;

use inquire::{Confirm, Text, error::InquireError};

use crate::{
    category::Category,
    error::{Error, Result},
};

/// Reads one line of user input per question.
pub(crate) trait Prompter {
    /// Ask a question and return the raw answer.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Ask a question and return the answer trimmed and lowercased.
    fn ask_token(&mut self, message: &str) -> Result<String> {
        Ok(self.ask(message)?.trim().to_lowercase())
    }
}

/// Prompter backed by inquire's line editor.
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        map_answer(Text::new(message).prompt())
    }
}

/// Ask a yes/no question.
pub(crate) fn confirm(message: &str, default: bool) -> Result<bool> {
    map_answer(Confirm::new(message).with_default(default).prompt())
}

/// Translate inquire results into crate errors.
fn map_answer<T>(answer: StdResult<T, InquireError>) -> Result<T> {
    match answer {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Err(Error::PromptCanceled)
        }
        Err(error) => Err(Error::PromptFailed {
            message: error.to_string(),
        }),
    }
}

/// Top-level menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `i`
    Install,
    /// `u`
    Uninstall,
    /// `e`
    Exit,
}

impl MenuCommand {
    /// Parse a normalized token.
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "i" => Some(Self::Install),
            "u" => Some(Self::Uninstall),
            "e" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Choices in the install sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallCommand {
    /// `f` or `c`: install a single item.
    Single(Category),
    /// `b`
    Bundle,
    /// `a`
    Abort,
}

impl InstallCommand {
    /// Parse a normalized token.
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "f" => Some(Self::Single(Category::Formula)),
            "c" => Some(Self::Single(Category::Cask)),
            "b" => Some(Self::Bundle),
            "a" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// Choices at the bundle category prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleCommand {
    /// `f` or `c`: pick items of a category.
    Pick(Category),
    /// `d`
    Done,
    /// `a`
    Abort,
}

impl BundleCommand {
    /// Parse a normalized token.
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "f" => Some(Self::Pick(Category::Formula)),
            "c" => Some(Self::Pick(Category::Cask)),
            "d" => Some(Self::Done),
            "a" => Some(Self::Abort),
            _ => None,
        }
    }
}

/// Whether to keep picking after adding an item; only `y` continues.
pub(crate) fn wants_another(token: &str) -> bool {
    token == "y"
}

/// Whether to re-run the selector after an empty pick; only `r` retries.
pub(crate) fn wants_retry(token: &str) -> bool {
    token == "r"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScriptedPrompter;

    #[test]
    fn menu_tokens() {
        assert_eq!(MenuCommand::parse("i"), Some(MenuCommand::Install));
        assert_eq!(MenuCommand::parse("u"), Some(MenuCommand::Uninstall));
        assert_eq!(MenuCommand::parse("e"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("install"), None);
    }

    #[test]
    fn install_tokens() {
        assert_eq!(
            InstallCommand::parse("c"),
            Some(InstallCommand::Single(Category::Cask))
        );
        assert_eq!(InstallCommand::parse("b"), Some(InstallCommand::Bundle));
        assert_eq!(InstallCommand::parse("d"), None);
    }

    #[test]
    fn bundle_tokens() {
        assert_eq!(
            BundleCommand::parse("f"),
            Some(BundleCommand::Pick(Category::Formula))
        );
        assert_eq!(BundleCommand::parse("d"), Some(BundleCommand::Done));
        assert_eq!(BundleCommand::parse("a"), Some(BundleCommand::Abort));
        assert_eq!(BundleCommand::parse("b"), None);
    }

    #[test]
    fn only_exact_letters_continue() {
        assert!(wants_another("y"));
        assert!(!wants_another("yes"));
        assert!(!wants_another(""));
        assert!(wants_retry("r"));
        assert!(!wants_retry("d"));
    }

    #[test]
    fn tokens_are_trimmed_and_lowercased() {
        let mut prompter = ScriptedPrompter::new(&["  F \n"]);
        assert_eq!(prompter.ask_token("Choice?").expect("answer"), "f");
    }
}
