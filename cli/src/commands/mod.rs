mod classify;
mod parse;

pub use classify::handle_classify_command;
pub use parse::handle_parse_command;

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Read the whole document from a file, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e))),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
