//! User-facing status reporting and bundle summaries.

use crate::{error::Error, palette};

/// Prints progress, warnings and failures for an interactive session.
#[derive(Debug)]
pub struct Reporter {
    /// Whether output should be colorized.
    color: bool,
    /// Number of warnings emitted so far.
    warnings: usize,
}

impl Reporter {
    /// Create a new reporter.
    pub(crate) fn new(color: bool) -> Self {
        Self { color, warnings: 0 }
    }

    /// Whether color output is enabled.
    pub(crate) fn color(&self) -> bool {
        self.color
    }

    /// Print a plain progress line.
    pub(crate) fn info(&self, message: impl AsRef<str>) {
        println!("{}", message.as_ref());
    }

    /// Print a section heading preceded by a blank line.
    pub(crate) fn heading(&self, message: &str) {
        println!("\n{}", palette::fmt_heading(message, self.color));
    }

    /// Print a dimmed notice.
    pub(crate) fn notice(&self, message: impl AsRef<str>) {
        println!("{}", palette::fmt_notice(message.as_ref(), self.color));
    }

    /// Print a success line.
    pub(crate) fn success(&self, message: impl AsRef<str>) {
        println!("{}", palette::fmt_success(message.as_ref(), self.color));
    }

    /// Record a warning and print it immediately.
    pub(crate) fn warn(&mut self, message: impl AsRef<str>) {
        self.warnings += 1;
        let line = format!("Warning: {}", message.as_ref());
        eprintln!("{}", palette::fmt_warning(&line, self.color));
    }

    /// Print a failed operation along with its cause.
    pub(crate) fn failure(&self, message: impl AsRef<str>, error: &Error) {
        let line = format!("{} Error: {error}", message.as_ref());
        eprintln!("{}", palette::fmt_error(&line, self.color));
    }

    /// Format a package identifier for inline use.
    pub(crate) fn package(&self, name: &str) -> String {
        palette::fmt_package(name, self.color)
    }

    /// Number of warnings emitted so far.
    pub(crate) fn warning_count(&self) -> usize {
        self.warnings
    }
}

/// Outcome tally for one bundle install.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BundleReport {
    /// Identifiers installed successfully, in install order.
    pub(crate) installed: Vec<String>,
    /// Identifiers skipped because they were already installed.
    pub(crate) skipped: Vec<String>,
    /// Identifiers whose install failed, with the error text.
    pub(crate) failed: Vec<(String, String)>,
}

impl BundleReport {
    /// Print a one-line summary, followed by any failures.
    pub(crate) fn print_summary(&self, reporter: &Reporter) {
        let summary = format!(
            "Bundle complete: {} installed, {} skipped, {} failed.",
            self.installed.len(),
            self.skipped.len(),
            self.failed.len()
        );
        if self.failed.is_empty() {
            reporter.success(summary);
            return;
        }

        eprintln!("{}", palette::fmt_error(&summary, reporter.color()));
        for (name, reason) in &self.failed {
            eprintln!("  - {}: {reason}", reporter.package(name));
        }
    }
}
