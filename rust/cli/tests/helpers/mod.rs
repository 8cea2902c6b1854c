#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const ENV_VARS: [&str; 6] = [
    "FLIPSEVEN_CONFIG",
    "FLIPSEVEN_PLAYERS",
    "FLIPSEVEN_TARGET_SCORE",
    "FLIPSEVEN_SEED",
    "FLIPSEVEN_AI",
    "FLIPSEVEN_RISK_TOLERANCE",
];

/// Captured result of one CLI invocation.
#[derive(Debug)]
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process; `args` excludes the program name.
pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("flipseven").chain(args.iter().copied());
    let code = flipseven_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Removes every `FLIPSEVEN_*` variable. Callers must be `#[serial]`.
pub fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

/// Writes `contents` to a TOML file in a fresh temp dir and points
/// `FLIPSEVEN_CONFIG` at it. Keep the dir alive for the test's duration.
pub fn use_config_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flipseven.toml");
    fs::write(&path, contents).unwrap();
    std::env::set_var("FLIPSEVEN_CONFIG", &path);
    (dir, path)
}
