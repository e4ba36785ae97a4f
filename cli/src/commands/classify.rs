use std::io::Write;
use std::path::Path;

use chip::lines::{is_actions_line, is_cards_line, is_noise_line, is_stacks_line};

use crate::commands::read_input;
use crate::error::CliError;

/// Print, per non-empty input line, which grammars match it. A debugging
/// view of the classifier; the interpreter's state-based disambiguation is
/// deliberately absent here.
pub fn handle_classify_command(input: Option<&Path>, out: &mut dyn Write) -> Result<(), CliError> {
    let document = read_input(input)?;
    for line in document.lines().filter(|l| !l.trim().is_empty()) {
        let mut kinds = Vec::new();
        if is_noise_line(line) {
            kinds.push("noise");
        } else {
            if is_stacks_line(line) {
                kinds.push("stacks");
            }
            if is_actions_line(line) {
                kinds.push("actions");
            }
            if is_cards_line(line) {
                kinds.push("cards");
            }
        }
        if kinds.is_empty() {
            kinds.push("none");
        }
        writeln!(out, "{:<24} {}", kinds.join(","), line)?;
    }
    Ok(())
}
