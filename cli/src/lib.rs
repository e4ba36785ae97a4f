//! # CHIP CLI Library
//!
//! Command-line interface for the CHIP hand-history interpreter.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["chip", "parse", "hand.chip"];
//! let code = chip_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `parse`: Interpret a CHIP document and print its transcript
//! - `classify`: Show which grammars match each input line

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;

use cli::{ChipCli, Commands};
use commands::{handle_classify_command, handle_parse_command};
pub use error::CliError;

/// Parse the arguments and dispatch to a subcommand handler.
///
/// Returns the process exit code: `0` on success, `2` on any error.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match ChipCli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return 2;
                    }
                    2
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Parse {
            input,
            log,
            strict,
            config,
        } => handle_parse_command(input.as_deref(), log, strict, config.as_deref(), out),
        Commands::Classify { input } => handle_classify_command(input.as_deref(), out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return 2;
            }
            2
        }
    }
}
