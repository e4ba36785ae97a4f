//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "chip", about = "CHIP hand-history notation interpreter")]
pub struct ChipCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interpret a CHIP document and print its transcript
    Parse {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
        /// Append hand records to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Require exactly two hole cards per live seat at showdown
        #[arg(long)]
        strict: bool,
        /// Config file (default: chip.toml in the working directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show which grammars match each input line
    Classify {
        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
}
