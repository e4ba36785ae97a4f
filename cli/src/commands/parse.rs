use std::io::Write;
use std::path::{Path, PathBuf};

use chip::ParseOptions;
use chip_engine::record::HandLogger;

use crate::commands::read_input;
use crate::config::Config;
use crate::error::CliError;

/// Interpret a CHIP document and print the transcript. Hand records go to a
/// JSONL log when a path is configured.
pub fn handle_parse_command(
    input: Option<&Path>,
    log: Option<PathBuf>,
    strict: bool,
    config: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = Config::load(config)?;
    let options = ParseOptions {
        strict_reveals: strict || config.strict,
    };
    let log = log.or(config.log);

    let document = read_input(input)?;
    let (transcript, records) = chip::parse_document(&document, options)?;
    write!(out, "{}", transcript)?;

    if let Some(path) = log {
        let mut logger = HandLogger::create(&path)?;
        for record in &records {
            logger.write(record)?;
        }
    }
    Ok(())
}
