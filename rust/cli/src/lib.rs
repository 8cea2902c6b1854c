//! # Flip 7 CLI Library
//!
//! Command-line front end for the Flip 7 rules engine: AI-vs-AI simulations,
//! a bust-risk calculator and a view of the layered configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand. Output streams are
//! injected so tests can capture them.
//!
//! ## Available Subcommands
//!
//! - `sim`: Play full games between AI players and report the winners
//! - `risk`: Estimate hit and Flip Three bust chances for a hand
//! - `cfg`: Display the resolved configuration with value sources

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, FlipsevenCli};
use commands::{handle_cfg_command, handle_risk_command, handle_sim_command, SimArgs};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "risk", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args` (program name first) and dispatches to the subcommand.
///
/// # Returns
///
/// Exit code: `0` for success (including `--help`), `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = flipseven_cli::run(["flipseven", "risk", "--held", "3,7", "--seed", "1"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Hit risk"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FlipsevenCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err);
                    write_or_exit!(err, "Flip 7 CLI");
                    write_or_exit!(err, "Usage: flipseven <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: flipseven --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Risk {
            held,
            second_chance,
            seed,
        } => handle_risk_command(&held, second_chance, seed, out),
        Commands::Sim {
            games,
            players,
            seed,
            ai,
            target,
            json,
        } => handle_sim_command(
            SimArgs {
                games,
                players,
                seed,
                ai,
                target,
                json,
            },
            out,
            err,
        ),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
