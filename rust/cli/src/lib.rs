//! # Handrank CLI Library
//!
//! Command-line front end for the `handrank-engine` poker hand evaluator.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let args = vec!["handrank", "eval", "KS", "AS", "JS", "10S", "QS"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = handrank_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Category: Royal Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify one hand and print its category, cards used and kickers
//! - `rank`: Order several hands and report the best (or all of them)
//! - `compare`: Compare two hands and print -1, 0 or 1
//! - `cfg`: Display current configuration settings

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use clap::Parser;
use std::io::Write;

use cli::{Commands, HandrankCli};
use commands::{
    RenderOptions, handle_cfg_command, handle_compare_command, handle_eval_command,
    handle_rank_command,
};
pub use error::{BatchValidationError, CliError};

const TOKEN_HINT: &str = "cards are a rank (2-10, J, Q, K, A) followed by a suit (H, D, C, S)";

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
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
///
/// # Available Commands
///
/// - `eval <CARDS>...`: Evaluate one hand
/// - `rank --hand H [--hand H ...] [--input FILE] [--all]`: Rank hands
/// - `compare <A> <B>`: Compare two hands
/// - `cfg`: Display configuration settings
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["eval", "rank", "compare", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandrankCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a zero exit code
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: handrank <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: handrank --help");
                    exit_code::ERROR
                }
            };
        }
    };

    // cfg reports configuration problems itself
    let config = if let Commands::Cfg = cli.cmd {
        config::Config::default()
    } else {
        match config::load() {
            Ok(c) => c,
            Err(e) => {
                write_or_exit!(err, "Error: Invalid configuration: {}", e);
                return exit_code::ERROR;
            }
        }
    };
    let render = |format: Option<config::OutputFormat>, unicode: bool| RenderOptions {
        format: format.unwrap_or(config.format),
        unicode: unicode || config.unicode,
    };

    let result = match cli.cmd {
        Commands::Eval {
            cards,
            format,
            unicode,
        } => handle_eval_command(&cards, render(format, unicode), out),
        Commands::Rank {
            hands,
            input,
            all,
            format,
            unicode,
        } => handle_rank_command(
            &hands,
            input.as_deref(),
            all || config.show_all,
            render(format, unicode),
            out,
            err,
        ),
        Commands::Compare {
            first,
            second,
            format,
            unicode,
        } => handle_compare_command(&first, &second, render(format, unicode), out),
        Commands::Cfg => handle_cfg_command(out),
    };
    finish(result, err)
}

fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            if validation::is_token_error(&e) {
                write_or_exit!(err, "Hint: {}", TOKEN_HINT);
            }
            exit_code::ERROR
        }
    }
}
