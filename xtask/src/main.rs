//! Custom cargo commands for cvmatch.
//!
//! Usage:
//!   cargo xtask verify          - Full suite (both feature sets, clippy, fuzz smoke)
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (cargo check + test + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz [TARGET]   - Fuzz one target, or all briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under `fuzz/fuzz_targets/`.
const FUZZ_TARGETS: &[&str] = &[
    "matcher_differential",
    "aho_corasick_differential",
    "levenshtein_metric",
    "search_queries",
];

/// Seconds per target for `verify` and bare `fuzz`.
const FUZZ_SMOKE_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (tests in both feature sets + clippy + fuzz smoke)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  fuzz [TARGET]   Fuzz TARGET until stopped, or every target for {}s each
"#,
        FUZZ_SMOKE_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("cvmatch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running tests (parallel)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[2/4] Running tests (sequential only)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Tests passed without rayon\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Fuzz smoke run...");
    if cargo_fuzz_available() {
        for target in FUZZ_TARGETS {
            run_fuzz(target, Some(FUZZ_SMOKE_SECONDS))?;
        }
        println!("✓ No fuzz findings\n");
    } else {
        println!("  (cargo-fuzz not installed, skipping)\n");
    }

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Fuzz one target indefinitely, or all targets for a short smoke run.
fn fuzz(target: Option<&str>) -> Result<()> {
    if !cargo_fuzz_available() {
        bail!("cargo-fuzz not found; install with `cargo install cargo-fuzz`");
    }
    match target {
        Some(target) => {
            if !FUZZ_TARGETS.contains(&target) {
                bail!("unknown fuzz target '{}' (expected one of {:?})", target, FUZZ_TARGETS);
            }
            run_fuzz(target, None)
        }
        None => {
            for target in FUZZ_TARGETS {
                run_fuzz(target, Some(FUZZ_SMOKE_SECONDS))?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn cargo_fuzz_available() -> bool {
    Command::new("cargo")
        .args(["fuzz", "--version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn run_fuzz(target: &str, seconds: Option<u32>) -> Result<()> {
    let root = project_root()?;
    let mut args = vec![
        "+nightly".to_string(),
        "fuzz".to_string(),
        "run".to_string(),
        target.to_string(),
    ];
    if let Some(seconds) = seconds {
        args.push("--".to_string());
        args.push(format!("-max_total_time={}", seconds));
    }

    println!("  fuzzing {}...", target);
    let status = Command::new("cargo")
        .args(&args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}
