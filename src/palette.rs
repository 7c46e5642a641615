//! Color palette and styling for CLI output.
//!
//! Every user-facing line goes through one of these helpers so that
//! `--color never` yields plain text everywhere.

use owo_colors::{OwoColorize, Style};

/// Style for package identifiers - the primary thing the user acts on.
pub fn package() -> Style {
    Style::new().cyan().bold()
}

/// Style for section headings like "Add items to your bundle".
pub fn heading() -> Style {
    Style::new().white().bold()
}

/// Style for completed actions.
pub fn success() -> Style {
    Style::new().green()
}

/// Style for skipped items and other notices.
pub fn notice() -> Style {
    Style::new().dimmed()
}

/// Style for failures.
pub fn error() -> Style {
    Style::new().red()
}

/// Style for warning text.
pub fn warning() -> Style {
    Style::new().yellow()
}

/// Apply a style when color is enabled.
fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Format a package identifier with styling.
pub fn fmt_package(name: &str, use_color: bool) -> String {
    paint(name, package(), use_color)
}

/// Format a section heading with styling.
pub fn fmt_heading(text: &str, use_color: bool) -> String {
    paint(text, heading(), use_color)
}

/// Format a success message with styling.
pub fn fmt_success(text: &str, use_color: bool) -> String {
    paint(text, success(), use_color)
}

/// Format a notice with styling.
pub fn fmt_notice(text: &str, use_color: bool) -> String {
    paint(text, notice(), use_color)
}

/// Format an error message with styling.
pub fn fmt_error(text: &str, use_color: bool) -> String {
    paint(text, error(), use_color)
}

/// Format warning text with styling.
pub fn fmt_warning(text: &str, use_color: bool) -> String {
    paint(text, warning(), use_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_without_color() {
        assert_eq!(fmt_package("wget", false), "wget");
        assert_eq!(fmt_error("boom", false), "boom");
    }

    #[test]
    fn colored_text_wraps_in_escape_codes() {
        let styled = fmt_package("wget", true);
        assert!(styled.contains("wget"));
        assert!(styled.starts_with('\u{1b}'));
    }
}
