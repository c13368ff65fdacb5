//! # Fivedraw CLI Library
//!
//! Command-line interface for the fivedraw poker engine: interactive
//! five-card draw against computer opponents, plus small tooling commands
//! around the same engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play five-card draw against computer opponents
//! - `deal`: Deal a single hand and show its rank
//! - `sim`: Run automated games and record round histories
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, FivedrawCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = FivedrawCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Fivedraw Poker CLI").is_err()
                        || writeln!(err, "Usage: fivedraw <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: fivedraw --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                players,
                rounds,
                seed,
                name,
            } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(players, rounds, seed, name, out, err, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return exit_code::ERROR;
                        }
                        exit_code::ERROR
                    }
                }
            }
            Commands::Deal { seed } => match handle_deal_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Sim {
                games,
                output,
                seed,
            } => match handle_sim_command(games, output, seed, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_deal_command_dispatch_with_seed() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["fivedraw", "deal", "--seed", "42"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Hand:"));
        assert!(output.contains("Rank:"));
    }

    #[test]
    #[serial]
    fn test_cfg_command_dispatch() {
        // SAFETY: serial test; nothing else reads the environment
        unsafe {
            std::env::remove_var("FIVEDRAW_CONFIG");
            std::env::remove_var("FIVEDRAW_SEED");
            std::env::remove_var("FIVEDRAW_PLAYERS");
            std::env::remove_var("FIVEDRAW_ROUNDS");
        }

        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["fivedraw", "cfg"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration"));
    }

    #[test]
    fn test_sim_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            ["fivedraw", "sim", "--games", "1", "--seed", "42"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);
    }

    #[test]
    fn test_unknown_command_prints_usage_and_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["fivedraw", "bluff"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);

        let err_text = String::from_utf8(err).unwrap();
        assert!(err_text.contains("Usage: fivedraw <command> [options]"));
        assert!(err_text.contains("play"));
    }

    #[test]
    fn test_help_prints_to_stdout_and_succeeds() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["fivedraw", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("fivedraw"));
    }

    #[test]
    fn test_sim_rejects_zero_games() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            ["fivedraw", "sim", "--games", "0", "--seed", "42"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
    }
}
