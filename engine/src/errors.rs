use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Seat {seat} is out of range (table has {num_seats} seats)")]
    InvalidSeat { seat: usize, num_seats: usize },
    #[error("Seat {0} is already occupied")]
    SeatTaken(usize),
    #[error("Seat {0} is empty")]
    SeatEmpty(usize),
    #[error("Not enough players to start a hand")]
    NotEnoughPlayers,
    #[error("Hand already in progress")]
    HandInProgress,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Betting round is still in progress")]
    BettingRoundInProgress,
    #[error("No betting round in progress")]
    BettingRoundNotInProgress,
    #[error("Betting rounds are not completed")]
    BettingRoundsNotCompleted,
    #[error("Cannot check while facing a bet")]
    CannotCheck,
    #[error("Cannot bet while facing a bet")]
    CannotBet,
    #[error("Nothing to call")]
    NothingToCall,
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Invalid raise to {amount}, minimum: {minimum}")]
    InvalidRaiseAmount { amount: u32, minimum: u32 },
    #[error("Deck exhausted")]
    DeckExhausted,
}
