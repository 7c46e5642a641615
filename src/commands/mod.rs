//! Interactive workflows driven from the top-level menu.

use std::io::{self, IsTerminal};

use crate::{
    brew::PackageManager, catalog::CatalogSource, chooser::Chooser, diagnostics::Reporter,
    prompt::Prompter,
};

/// Output color handling selection.
#[derive(Debug, Clone, Copy)]
pub enum ColorChoice {
    /// Colorize only when output is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorChoice {
    /// Determine whether color output should be enabled.
    pub(crate) fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Collaborators shared by every workflow in one run.
#[derive(Debug)]
pub struct Session<C, S, P, Q> {
    /// Remote catalog source.
    pub(crate) catalog: C,
    /// Item selector.
    pub(crate) chooser: S,
    /// Package manager.
    pub(crate) brew: P,
    /// Line prompter.
    pub(crate) prompter: Q,
    /// User-facing output.
    pub(crate) reporter: Reporter,
}

impl<C: CatalogSource, S: Chooser, P: PackageManager, Q: Prompter> Session<C, S, P, Q> {
    /// Assemble a session.
    pub(crate) fn new(catalog: C, chooser: S, brew: P, prompter: Q, reporter: Reporter) -> Self {
        Self {
            catalog,
            chooser,
            brew,
            prompter,
            reporter,
        }
    }

    /// Run the selector, turning selector failures into "nothing selected".
    pub(crate) fn select(&mut self, items: &[String], prompt: &str) -> Option<String> {
        if items.is_empty() {
            self.reporter.info("No items to select from.");
            return None;
        }

        self.reporter.info(prompt);
        match self.chooser.choose(items, prompt) {
            Ok(choice) => choice,
            Err(error) => {
                self.reporter.failure("Selection failed.", &error);
                None
            }
        }
    }
}

// Command modules are ordered alphabetically - maintain this order.
/// Bundle building and installation.
pub mod bundle;
/// Single-item install.
pub mod install;
/// Top-level menu loop.
pub mod menu;
/// Single-item uninstall.
pub mod uninstall;
