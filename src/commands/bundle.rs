//! Bundle mode: queue formulas and casks, then install them together.
//!
//! Building a bundle is a small state machine. `ChooseCategory` asks which
//! kind of item to add next, `PickLoop` runs the selector repeatedly over
//! one fetched catalog, and `Finalize` hands the queued entries to the
//! installer. Aborting at any prompt discards everything queued so far.

use crate::{
    brew::PackageManager,
    catalog::CatalogSource,
    category::Category,
    chooser::Chooser,
    commands::Session,
    diagnostics::BundleReport,
    error::{Error, Result},
    prompt::{self, BundleCommand, Prompter},
};

/// One queued install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    /// Category active when the entry was added.
    pub(crate) category: Category,
    /// Identifier to install.
    pub(crate) name: String,
}

/// Entries queued so far, in the order they were added.
#[derive(Debug, Default)]
pub struct PendingList {
    /// Queued entries.
    entries: Vec<PendingEntry>,
}

impl PendingList {
    /// Queue an entry at the end of the list.
    pub(crate) fn push(&mut self, category: Category, name: String) {
        self.entries.push(PendingEntry { category, name });
    }

    /// Whether nothing has been queued.
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Turn the list into an installable bundle, if it has any entries.
    pub(crate) fn into_bundle(self) -> Option<Bundle> {
        if self.entries.is_empty() {
            None
        } else {
            Some(Bundle {
                entries: self.entries,
            })
        }
    }
}

/// A non-empty list of entries ready to install.
#[derive(Debug, PartialEq, Eq)]
pub struct Bundle {
    /// Entries in install order; never empty.
    entries: Vec<PendingEntry>,
}

impl Bundle {
    /// Entries in install order.
    pub(crate) fn entries(&self) -> &[PendingEntry] {
        &self.entries
    }
}

/// How bundle building ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BuildOutcome {
    /// The user finished with at least one entry.
    Ready(Bundle),
    /// The user aborted, or finished with nothing queued.
    Aborted,
}

/// States of the bundle builder.
#[derive(Debug)]
enum BuildState {
    /// Asking which category to add from, or whether to finish.
    ChooseCategory,
    /// Picking items from one fetched catalog.
    PickLoop {
        /// Category being picked from.
        category: Category,
        /// Catalog fetched on entry, reused for every pick.
        items: Vec<String>,
    },
    /// Done with a non-empty list.
    Finalize,
    /// Abandoned; the list is discarded.
    Aborted,
}

/// Execute the bundle workflow: build, then install.
pub(crate) async fn run(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
) -> Result<()> {
    let bundle = match build(session).await? {
        BuildOutcome::Ready(bundle) => bundle,
        BuildOutcome::Aborted => return Ok(()),
    };

    match install(session, &bundle) {
        Ok(report) => report.print_summary(&session.reporter),
        Err(error) => session.reporter.failure(
            "Could not list currently installed packages; nothing was installed.",
            &error,
        ),
    }
    Ok(())
}

/// Interactively accumulate a bundle.
pub(crate) async fn build(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
) -> Result<BuildOutcome> {
    let mut pending = PendingList::default();
    let mut state = BuildState::ChooseCategory;

    loop {
        state = match state {
            BuildState::ChooseCategory => choose_category(session, &pending).await?,
            BuildState::PickLoop { category, items } => {
                pick(session, &mut pending, category, items)?
            }
            BuildState::Finalize => {
                return Ok(match pending.into_bundle() {
                    Some(bundle) => BuildOutcome::Ready(bundle),
                    None => BuildOutcome::Aborted,
                });
            }
            BuildState::Aborted => return Ok(BuildOutcome::Aborted),
        };
    }
}

/// Handle the `ChooseCategory` state.
async fn choose_category(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
    pending: &PendingList,
) -> Result<BuildState> {
    session.reporter.heading("Add items to your bundle");
    let Some(token) = ask(
        session,
        "(F)ormula, (C)ask, (D)one, or (A)bort bundle creation?",
    )?
    else {
        return Ok(abort(session));
    };

    match BundleCommand::parse(&token) {
        Some(BundleCommand::Abort) => Ok(abort(session)),
        Some(BundleCommand::Done) if pending.is_empty() => {
            session
                .reporter
                .info("You haven't added any packages to this bundle. Aborting.");
            Ok(BuildState::Aborted)
        }
        Some(BundleCommand::Done) => Ok(BuildState::Finalize),
        Some(BundleCommand::Pick(category)) => {
            let items = session
                .catalog
                .fetch_or_empty(category, &mut session.reporter)
                .await;
            if items.is_empty() {
                session.reporter.info(format!(
                    "No {category}s found (or unable to fetch). Try something else."
                ));
                return Ok(BuildState::ChooseCategory);
            }
            Ok(BuildState::PickLoop { category, items })
        }
        None => {
            session
                .reporter
                .info("Invalid choice. Please pick (F), (C), (D), or (A).");
            Ok(BuildState::ChooseCategory)
        }
    }
}

/// Handle one pass of the `PickLoop` state.
fn pick(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
    pending: &mut PendingList,
    category: Category,
    items: Vec<String>,
) -> Result<BuildState> {
    let message = format!("Select the {category} you want to add");
    let answer = match session.select(&items, &message) {
        Some(name) => {
            session
                .reporter
                .success(format!("Added '{}' to the bundle.", session.reporter.package(&name)));
            pending.push(category, name);
            ask(session, &format!("Add another {category}? (Y)es/(N)o"))?
                .map(|token| prompt::wants_another(&token))
        }
        None => {
            session.reporter.notice(format!("No {category} selected."));
            ask(session, "(R)etry selecting or (D)one with this category?")?
                .map(|token| prompt::wants_retry(&token))
        }
    };

    Ok(match answer {
        Some(true) => BuildState::PickLoop { category, items },
        Some(false) => BuildState::ChooseCategory,
        None => abort(session),
    })
}

/// Announce an explicit abort.
fn abort(
    session: &Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
) -> BuildState {
    session
        .reporter
        .info("Aborted bundle creation. Returning to main menu.");
    BuildState::Aborted
}

/// Ask for a token; `None` means the prompt was canceled.
fn ask(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
    message: &str,
) -> Result<Option<String>> {
    match session.prompter.ask_token(message) {
        Ok(token) => Ok(Some(token)),
        Err(Error::PromptCanceled) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Install every entry not already present, continuing past failures.
///
/// The installed set is queried once up front; entries installed earlier
/// in the same bundle are not re-checked.
pub(crate) fn install(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
    bundle: &Bundle,
) -> Result<BundleReport> {
    session
        .reporter
        .heading("Installing your selected bundle packages...");
    let installed = session.brew.installed()?;

    let mut report = BundleReport::default();
    for entry in bundle.entries() {
        let display = session.reporter.package(&entry.name);
        if installed.contains(&entry.name) {
            session
                .reporter
                .notice(format!("{display} is already installed. Skipping."));
            report.skipped.push(entry.name.clone());
            continue;
        }

        session.reporter.info(format!("Installing '{display}'..."));
        match session.brew.install(entry.category, &entry.name) {
            Ok(()) => {
                session
                    .reporter
                    .success(format!("{display} has been successfully installed."));
                report.installed.push(entry.name.clone());
            }
            Err(error) => {
                session
                    .reporter
                    .failure(format!("Failed to install {display}."), &error);
                report.failed.push((entry.name.clone(), error.to_string()));
            }
        }
    }
    Ok(report)
}
