//! Development automation tasks for the planshot workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! Output is for a developer at a terminal, so `println!` and `eprintln!` are
//! used instead of structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::Context;

type Task = fn() -> anyhow::Result<()>;

/// Steps run by `ci`, in order.
const CI_STEPS: &[(&str, Task)] = &[
    ("Checking Rust format", run_fmt),
    ("Running Clippy", run_clippy),
    ("Checking the planshot binary builds", check_cli),
    ("Running tests", run_test),
    ("Checking dependencies", run_deny),
    ("Auditing dependencies", run_audit),
];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Planshot Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run all CI checks (fmt, clippy, build, test, deny, audit)");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints on every target");
    println!("    test      Run all workspace tests");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...");

    let total = CI_STEPS.len();
    for (index, (label, step)) in CI_STEPS.iter().enumerate() {
        println!("\n==> Step {}/{total}: {label}...", index + 1);
        step().with_context(|| format!("step {} ({label}) failed", index + 1))?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        "Clippy reported problems. See output above.",
    )
}

fn check_cli() -> anyhow::Result<()> {
    cargo(&["check", "-p", "planshot-cli", "--bins"], "planshot-cli check failed")?;
    println!("✓ planshot binary compiles");
    Ok(())
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

fn run_deny() -> anyhow::Result<()> {
    require_cargo_plugin("deny", "cargo-deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

fn run_audit() -> anyhow::Result<()> {
    require_cargo_plugin("audit", "cargo-audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

/// Run `cargo <args>`, turning a non-zero exit into `failure`.
fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}

fn require_cargo_plugin(subcommand: &str, package: &str) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([subcommand, "--version"])
        .output()
        .is_ok_and(|output| output.status.success());

    if !installed {
        eprintln!("{package} is not installed.");
        eprintln!("Install it with: cargo install {package}");
        anyhow::bail!("{package} not found");
    }
    Ok(())
}
