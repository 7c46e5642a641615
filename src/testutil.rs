//! Deterministic fakes for the external collaborators of a session.
//!
//! `session_with` wires a catalog, selector, package manager and prompter
//! that answer from fixed scripts and record every call made to them.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet, VecDeque},
    process::ExitStatus,
};

use crate::{
    brew::{InstalledSet, PackageManager},
    catalog::CatalogSource,
    category::Category,
    chooser::Chooser,
    commands::Session,
    diagnostics::Reporter,
    error::{Error, Result},
    prompt::Prompter,
};

/// Session wired entirely with fakes.
pub type TestSession = Session<FakeCatalog, ScriptedChooser, FakeBrew, ScriptedPrompter>;

/// Build a session from catalogs, selector answers and prompt answers.
pub fn session_with(
    catalogs: &[(Category, &[&str])],
    choices: &[Option<&str>],
    answers: &[&str],
) -> TestSession {
    Session::new(
        FakeCatalog::new(catalogs),
        ScriptedChooser::new(choices),
        FakeBrew::default(),
        ScriptedPrompter::new(answers),
        Reporter::new(false),
    )
}

/// Catalog returning fixed lists; unknown categories are empty.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    /// Items per category.
    catalogs: HashMap<Category, Vec<String>>,
    /// Categories fetched, in order.
    fetches: RefCell<Vec<Category>>,
}

impl FakeCatalog {
    /// Create a catalog from fixed lists.
    pub fn new(catalogs: &[(Category, &[&str])]) -> Self {
        Self {
            catalogs: catalogs
                .iter()
                .map(|(category, items)| (*category, strings(items)))
                .collect(),
            fetches: RefCell::new(Vec::new()),
        }
    }

    /// Categories fetched so far.
    pub fn fetches(&self) -> Vec<Category> {
        self.fetches.borrow().clone()
    }
}

impl CatalogSource for FakeCatalog {
    async fn fetch(&self, category: Category) -> Result<Vec<String>> {
        self.fetches.borrow_mut().push(category);
        Ok(self.catalogs.get(&category).cloned().unwrap_or_default())
    }
}

/// Selector returning scripted answers in order; runs out as "no selection".
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    /// Remaining answers.
    responses: VecDeque<Result<Option<String>>>,
    /// Prompts shown, in order.
    pub prompts: Vec<String>,
    /// Candidate lists shown, in order.
    pub candidates: Vec<Vec<String>>,
}

impl ScriptedChooser {
    /// Create a chooser from scripted answers.
    pub fn new(choices: &[Option<&str>]) -> Self {
        Self {
            responses: choices
                .iter()
                .map(|choice| Ok(choice.map(str::to_string)))
                .collect(),
            ..Self::default()
        }
    }

    /// Queue a selector failure ahead of the remaining answers.
    pub fn push_error(&mut self) {
        self.responses.push_front(Err(Error::SelectorParse {
            message: "scripted failure".to_string(),
        }));
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, items: &[String], prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        self.candidates.push(items.to_vec());
        self.responses.pop_front().unwrap_or(Ok(None))
    }
}

/// Calls recorded by `FakeBrew`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrewCall {
    /// Installed-set query.
    Installed,
    /// Install of one identifier.
    Install(Category, String),
    /// Uninstall of one identifier.
    Uninstall(String),
}

/// In-memory package manager.
#[derive(Debug, Default)]
pub struct FakeBrew {
    /// Currently installed identifiers.
    installed: InstalledSet,
    /// Identifiers whose install or uninstall fails.
    failing: HashSet<String>,
    /// Whether the installed-set query fails.
    query_fails: bool,
    /// Every call, in order.
    pub calls: Vec<BrewCall>,
}

impl FakeBrew {
    /// Replace the installed set.
    pub fn set_installed(&mut self, names: &[&str]) {
        self.installed = strings(names).into_iter().collect();
    }

    /// Make operations on `name` fail.
    pub fn fail_on(&mut self, name: &str) {
        self.failing.insert(name.to_string());
    }

    /// Make the installed-set query fail.
    pub fn fail_query(&mut self) {
        self.query_fails = true;
    }

    /// Error for a failing operation.
    fn failure(command: String) -> Error {
        Error::BrewStatus {
            command,
            status: failed_status(),
        }
    }
}

impl PackageManager for FakeBrew {
    fn installed(&mut self) -> Result<InstalledSet> {
        self.calls.push(BrewCall::Installed);
        if self.query_fails {
            return Err(Self::failure("brew list -1".to_string()));
        }
        Ok(self.installed.clone())
    }

    fn install(&mut self, category: Category, name: &str) -> Result<()> {
        self.calls.push(BrewCall::Install(category, name.to_string()));
        if self.failing.contains(name) {
            return Err(Self::failure(format!("brew install {name}")));
        }
        self.installed.insert(name.to_string());
        Ok(())
    }

    fn uninstall(&mut self, name: &str) -> Result<()> {
        self.calls.push(BrewCall::Uninstall(name.to_string()));
        if self.failing.contains(name) {
            return Err(Self::failure(format!("brew uninstall --zap {name}")));
        }
        self.installed.remove(name);
        Ok(())
    }
}

/// Prompter answering from a script; runs out as a canceled prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    /// Remaining answers.
    answers: VecDeque<String>,
    /// Questions asked, in order.
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter from scripted answers.
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: strings(answers).into(),
            asked: Vec::new(),
        }
    }

    /// Whether every scripted answer was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or(Error::PromptCanceled)
    }
}

/// Own a list of string slices.
fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// A non-success exit status.
#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

/// A non-success exit status.
#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}
