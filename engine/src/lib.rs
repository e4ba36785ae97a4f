//! # chip-engine: Multi-Seat Poker Table Engine
//!
//! A deterministic no-limit Texas Hold'em table engine for up to nine seats.
//! Provides seat management, blind and ante posting, betting round
//! progression, side pot construction, showdown adjudication, and hand
//! record logging with reproducible RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`table`] - The multi-seat table state machine
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`player`] - Player state, actions, and stack management
//! - [`pot`] - Main and side pot construction from contributions
//! - [`rules`] - Betting validation and all-in conversion
//! - [`record`] - HandRecord serialization and JSONL logging
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use chip_engine::cards::{Card, Rank, Suit};
//! use chip_engine::hand::evaluate_hand;
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards);
//! println!("Hand strength: {:?}", strength.category);
//! ```
//!
//! ## Running a Hand
//!
//! ```rust
//! use chip_engine::player::Action;
//! use chip_engine::table::{ForcedBets, Table};
//!
//! let forced = ForcedBets { ante: 0, small_blind: 25, big_blind: 50 };
//! let mut table = Table::new(forced, 6);
//! table.sit_down(0, 1000).unwrap();
//! table.sit_down(1, 1000).unwrap();
//! table.start_hand(Some(0)).unwrap();
//!
//! while table.is_betting_round_in_progress() {
//!     table.take_action(Action::Fold).unwrap();
//! }
//! table.end_betting_round().unwrap();
//! table.showdown().unwrap();
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use chip_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod pot;
pub mod record;
pub mod rules;
pub mod table;
