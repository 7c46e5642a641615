//! Uninstall a single installed formula or cask.

use crate::{
    brew::PackageManager, catalog::CatalogSource, chooser::Chooser, commands::Session,
    prompt::Prompter,
};

/// Execute the uninstall workflow.
pub(crate) fn run(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
) {
    let installed = match session.brew.installed() {
        Ok(installed) => installed,
        Err(error) => {
            session
                .reporter
                .failure("Could not list installed packages.", &error);
            return;
        }
    };

    if installed.is_empty() {
        session
            .reporter
            .info("No Homebrew packages (formulas or casks) are installed on this system.");
        return;
    }

    let mut items: Vec<String> = installed.into_iter().collect();
    items.sort();

    let Some(name) = session.select(&items, "Select a package to uninstall") else {
        session.reporter.notice("No package selected.");
        return;
    };

    let display = session.reporter.package(&name);
    match session.brew.uninstall(&name) {
        Ok(()) => session
            .reporter
            .success(format!("{display} has been successfully uninstalled.")),
        Err(error) => session
            .reporter
            .failure(format!("Uninstallation of {display} failed."), &error),
    }
}
