//! Install a single formula or cask picked from its catalog.

use crate::{
    brew::PackageManager, catalog::CatalogSource, category::Category, chooser::Chooser,
    commands::Session, prompt::Prompter,
};

/// Execute the single-item install workflow.
pub(crate) async fn run(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
    category: Category,
) {
    let items = session
        .catalog
        .fetch_or_empty(category, &mut session.reporter)
        .await;
    if items.is_empty() {
        session.reporter.info(format!(
            "No {category}s found (or unable to fetch). Cannot install."
        ));
        return;
    }

    let prompt = format!("Select a {category} to install");
    let Some(name) = session.select(&items, &prompt) else {
        session.reporter.notice(format!("No {category} selected."));
        return;
    };

    let display = session.reporter.package(&name);
    match session.brew.install(category, &name) {
        Ok(()) => session
            .reporter
            .success(format!("{display} has been successfully installed.")),
        Err(error) => session
            .reporter
            .failure(format!("Installation of {category} {display} failed."), &error),
    }
}
