use chip_engine::errors::GameError;
use thiserror::Error;

/// Fatal errors raised while interpreting a hand history document.
///
/// Lines that fail to classify are skipped silently and never reach these
/// variants; only genuinely uninterpretable input aborts the parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Community cards cannot be hidden")]
    HiddenCommunityCard,
    #[error("Unsupported number of hand players: {0}")]
    UnsupportedPlayerCount(usize),
    #[error("Expected {expected} hole cards at showdown, got {got}")]
    RaggedReveal { expected: usize, got: usize },
    #[error("table engine: {0}")]
    Engine(#[from] GameError),
}
