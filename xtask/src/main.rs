//! Development automation tasks for the Anonymize workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{anyhow, Context};

mod features;

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("audit") => run_audit(),
        Some("test-features") => features::test_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Anonymize Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci             Run all CI checks");
    println!("    fmt            Check Rust code formatting");
    println!("    clippy         Run Clippy lints");
    println!("    test           Run all tests");
    println!("    bench          Run the privacy benchmarks");
    println!("    test-features  Verify anonymize-common feature tiers compile");
    println!("    audit          Audit dependencies for security vulnerabilities");
    println!("    help           Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/5: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/5: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/5: Checking feature tiers...");
    features::test_feature_matrix()?;

    println!("\n==> Step 4/5: Running tests...");
    run_test()?;

    println!("\n==> Step 5/5: Auditing dependencies...");
    run_audit()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    let status = Command::new("cargo").args(["fmt", "--all", "--", "--check"]).status()?;

    if !status.success() {
        anyhow::bail!("Format check failed. Run 'cargo fmt --all' to fix.");
    }

    Ok(())
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"])
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("Clippy run failed. See output above."))
    }
}

/// Run all workspace tests
///
/// The integration tests in `anonymize-core` each install a process-wide
/// anonymizer, which is why they live in separate test binaries.
fn run_test() -> anyhow::Result<()> {
    let status = Command::new("cargo").args(["test", "--workspace", "--all-features"]).status()?;

    if !status.success() {
        anyhow::bail!("Tests failed");
    }

    Ok(())
}

/// Run the criterion benchmarks for normalization and hashing
fn run_bench() -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args([
            "bench",
            "-p",
            "anonymize-common",
            "--features",
            "privacy",
            "--bench",
            "privacy_bench",
        ])
        .status()
        .context("Failed to run cargo bench")?;

    if !status.success() {
        anyhow::bail!("Benchmarks failed");
    }

    Ok(())
}

/// Audit dependencies for security vulnerabilities
fn run_audit() -> anyhow::Result<()> {
    ensure_cargo_tool("audit", "cargo-audit")?;

    let status = Command::new("cargo").args(["audit"]).status()?;

    if !status.success() {
        anyhow::bail!("cargo-audit found vulnerabilities");
    }

    Ok(())
}

/// Fail with an install hint when a cargo subcommand is missing
fn ensure_cargo_tool(subcommand: &str, package: &str) -> anyhow::Result<()> {
    let check_installed = Command::new("cargo").args([subcommand, "--version"]).output();

    if !check_installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("{package} is not installed.");
        eprintln!("Install it with: cargo install {package}");
        anyhow::bail!("{package} not found");
    }

    Ok(())
}
