//! One-time environment checks run before the menu starts.

use std::process::{Command, Stdio};

use crate::{
    brew::{Brew, PackageManager},
    category::Category,
    chooser::{BuiltinChooser, FzfChooser, Selector},
    config::{Config, SelectorKind},
    diagnostics::Reporter,
    error::{Error, Result},
    prompt,
};

/// Verify the package manager and settle on a selector for the session.
pub(crate) fn ensure(
    config: &Config,
    brew: &mut Brew,
    reporter: &mut Reporter,
) -> Result<Selector> {
    brew.probe()?;
    check_xcode(reporter);

    match config.selector() {
        SelectorKind::Builtin => Ok(Selector::Builtin(BuiltinChooser)),
        SelectorKind::Fzf => {
            let fzf = FzfChooser::new(config.fzf_command())?;
            let program = fzf.program();
            if runs(program, &["--version"]) || install_fzf(program, brew, reporter)? {
                Ok(Selector::Fzf(fzf))
            } else {
                reporter.warn("fzf is unavailable; using the built-in selector.");
                Ok(Selector::Builtin(BuiltinChooser))
            }
        }
    }
}

/// Offer to install fzf with Homebrew; returns whether it is now usable.
fn install_fzf(program: &str, brew: &mut Brew, reporter: &mut Reporter) -> Result<bool> {
    // Only the stock program name is something brew can provide.
    if program != "fzf" {
        reporter.warn(format!("Selector `{program}` could not be run."));
        return Ok(false);
    }

    let accepted = match prompt::confirm("fzf is not installed. Install it with Homebrew?", true) {
        Ok(accepted) => accepted,
        Err(Error::PromptCanceled) => false,
        Err(error) => return Err(error),
    };
    if !accepted {
        return Ok(false);
    }

    match brew.install(Category::Formula, "fzf") {
        Ok(()) => {
            reporter.success("fzf has been successfully installed.");
            Ok(runs(program, &["--version"]))
        }
        Err(error) => {
            reporter.failure("fzf installation failed.", &error);
            Ok(false)
        }
    }
}

/// Warn when the Xcode command line tools are missing.
#[cfg(target_os = "macos")]
fn check_xcode(reporter: &mut Reporter) {
    if !runs("xcode-select", &["-p"]) {
        reporter.warn(
            "Xcode command line tools are not installed; run `xcode-select --install` if builds fail.",
        );
    }
}

/// Xcode only exists on macOS.
#[cfg(not(target_os = "macos"))]
fn check_xcode(_reporter: &mut Reporter) {}

/// Whether a program runs and exits successfully.
fn runs(program: &str, args: &[&str]) -> bool {
    let ok = Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success());
    tracing::debug!(program, ok, "probed tool");
    ok
}
