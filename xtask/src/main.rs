//! Developer workflow tasks for the brewpick workspace.

use std::{
    env,
    path::Path,
    process::{Command, ExitCode, Stdio},
};

fn main() -> ExitCode {
    let ok = match parse_command() {
        Some(Task::Tidy) => run_fmt(&[]) && run_clippy(true),
        Some(Task::Check) => run_fmt(&["--check"]) && run_clippy(false) && run_tests(),
        None => {
            eprintln!("Usage: cargo xtask <tidy|check>");
            return ExitCode::from(2);
        }
    };
    if ok { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

enum Task {
    /// Format and apply clippy fixes in place.
    Tidy,
    /// Verify formatting and lints without modifying files, then run tests.
    Check,
}

fn parse_command() -> Option<Task> {
    let mut args = env::args();
    let _ = args.next();
    let task = match args.next().as_deref() {
        Some("tidy") => Task::Tidy,
        Some("check") => Task::Check,
        _ => return None,
    };
    args.next().is_none().then_some(task)
}

fn run_fmt(extra: &[&str]) -> bool {
    let mut args = vec!["+nightly", "fmt", "--all", "--"];
    if Path::new("rustfmt-nightly.toml").exists() {
        args.extend(["--config-path", "./rustfmt-nightly.toml"]);
    }
    args.extend_from_slice(extra);
    run_command("cargo", &args)
}

fn run_clippy(fix: bool) -> bool {
    let mut args = vec!["clippy", "-q"];
    if fix {
        args.extend(["--fix", "--allow-dirty"]);
    }
    args.extend(["--all", "--all-targets", "--all-features"]);
    if !fix {
        args.extend(["--", "-D", "warnings"]);
    }
    run_command("cargo", &args)
}

fn run_tests() -> bool {
    run_command("cargo", &["test", "--all", "-q"])
}

fn run_command(program: &str, args: &[&str]) -> bool {
    match Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!("Command `{program} {}` failed with status {status}", args.join(" "));
            false
        }
        Err(err) => {
            eprintln!("Failed to run `{program}`: {err}");
            false
        }
    }
}
