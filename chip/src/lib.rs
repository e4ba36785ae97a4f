//! # chip: Poker Hand-History Notation Interpreter
//!
//! Interprets the compact, line-oriented "CHIP" notation describing a poker
//! hand (table settings, stacks, betting actions, revealed cards) by
//! replaying it against a stateful table engine and rendering a fixed
//! human-readable transcript.
//!
//! The grammar is deliberately untagged: a line like `100 200 300` is a
//! valid stacks line and a valid actions line at once. Classification is a
//! set of independent predicates ([`lines`]); which reading wins is decided
//! by the interpreter from the engine's current state ([`parser`]).
//!
//! ## Core Modules
//!
//! - [`token`] - Number literals (`k`/`m` suffixes) and card token scanning
//! - [`lines`] - Independent line-kind predicates (stacks/actions/cards/noise)
//! - [`table_api`] - Capability trait over the table engine
//! - [`driver`] - Stack updates, action replay, hole-card assignment
//! - [`position`] - Button-anchored position labels, stable under folding
//! - [`format`] - Transcript rendering, including pot splitting
//! - [`parser`] - Settings parsing and the hand loop
//! - [`error`] - Fatal interpretation errors
//!
//! ## Quick Start
//!
//! ```
//! let input = "25 50 10 6 5\n\
//!              12.5k 25k 10k 25k 25k 15k\n\
//!              f f 150 f c c\n\
//!              2c ad 6c";
//!
//! let transcript = chip::parse(input).unwrap();
//! assert!(transcript.contains("*** Preflop ***"));
//! assert!(transcript.contains("*** Flop *** 2c Ad 6c"));
//! ```

pub mod driver;
pub mod error;
pub mod format;
pub mod lines;
pub mod parser;
pub mod position;
pub mod table_api;
pub mod token;

pub use error::ParseError;
pub use parser::{parse, parse_document, ParseOptions};
