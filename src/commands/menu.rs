//! The top-level operation menu.

use crate::{
    brew::PackageManager,
    catalog::CatalogSource,
    chooser::Chooser,
    commands::{Session, bundle, install, uninstall},
    error::{Error, Result},
    prompt::{InstallCommand, MenuCommand, Prompter},
};

/// Run the menu until the user exits.
pub(crate) async fn run(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
) -> Result<()> {
    loop {
        println!();
        let token = match session
            .prompter
            .ask_token("Operation: (I)nstall, (U)ninstall, or (E)xit?")
        {
            Ok(token) => token,
            Err(Error::PromptCanceled) => break,
            Err(error) => return Err(error),
        };

        match MenuCommand::parse(&token) {
            Some(MenuCommand::Exit) => break,
            Some(MenuCommand::Install) => run_install(session).await?,
            Some(MenuCommand::Uninstall) => uninstall::run(session),
            None => session.reporter.info("Invalid operation. Try again."),
        }
    }

    session.reporter.info("Exiting. Goodbye!");
    Ok(())
}

/// Handle the install sub-menu.
async fn run_install(
    session: &mut Session<impl CatalogSource, impl Chooser, impl PackageManager, impl Prompter>,
) -> Result<()> {
    let token = match session
        .prompter
        .ask_token("Install (F)ormula, (C)ask, or (B)undle? (A)bort:")
    {
        Ok(token) => token,
        Err(Error::PromptCanceled) => "a".to_string(),
        Err(error) => return Err(error),
    };

    match InstallCommand::parse(&token) {
        Some(InstallCommand::Single(category)) => install::run(session, category).await,
        Some(InstallCommand::Bundle) => bundle::run(session).await?,
        Some(InstallCommand::Abort) => session.reporter.info("Aborted installation."),
        None => session.reporter.info("Invalid operation. Try again."),
    }
    Ok(())
}
