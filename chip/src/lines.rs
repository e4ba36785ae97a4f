//! Line classification: independent per-kind predicates.
//!
//! A line may satisfy more than one predicate (`"100 200 300"` is a valid
//! stacks line and a valid actions line at once). These functions never
//! decide which reading wins; the interpreter resolves that from the
//! engine's current state.

use crate::token::{is_numeric_token, parse_cards};

/// Placeholder token meaning "leave this seat unchanged" in a stacks line.
pub const SAME: &str = "-";

/// Every token is a non-negative number or the no-change placeholder.
pub fn is_stacks_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| t == SAME || is_numeric_token(t))
}

/// Every token is an action letter (fold/check/call) or a number.
pub fn is_actions_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some()
        && tokens.all(|t| {
            t.eq_ignore_ascii_case("f")
                || t.eq_ignore_ascii_case("x")
                || t.eq_ignore_ascii_case("c")
                || is_numeric_token(t)
        })
}

/// The whole line resolves into cards and no-reveal markers with no
/// leftover characters.
pub fn is_cards_line(line: &str) -> bool {
    !line.trim().is_empty() && parse_cards(line).is_some()
}

/// The line is a free-text annotation to be skipped.
pub fn is_noise_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('#') || trimmed.starts_with("//") || trimmed.starts_with("Note:")
}
