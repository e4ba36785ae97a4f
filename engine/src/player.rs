use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// A player action during a betting round. `Bet` and `Raise` carry the
/// total amount the player's round contribution is brought *to*.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(u32),
    Raise(u32),
}

/// The kinds of action that can be legal for the player to act, without
/// amounts attached.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

/// A seated player: chip stack, chips committed this round and this hand,
/// and hole cards once a hand is underway.
#[derive(Debug, Clone)]
pub struct Player {
    stack: u32,
    /// Chips committed during the current betting round.
    bet: u32,
    /// Chips committed over the whole hand, antes and blinds included.
    contributed: u32,
    hole: [Option<Card>; 2],
}

impl Player {
    pub fn new(stack: u32) -> Self {
        Self {
            stack,
            bet: 0,
            contributed: 0,
            hole: [None, None],
        }
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    /// Stack plus chips already committed this round; what a seat is worth.
    pub fn total_chips(&self) -> u32 {
        self.stack + self.bet
    }

    pub fn bet_this_round(&self) -> u32 {
        self.bet
    }

    pub fn contributed(&self) -> u32 {
        self.contributed
    }

    pub fn is_all_in(&self) -> bool {
        self.stack == 0 && self.contributed > 0
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn set_hole_cards(&mut self, cards: [Option<Card>; 2]) {
        self.hole = cards;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Commit up to `amount` chips from the stack to the current round.
    /// Returns the amount actually committed (short stacks commit less).
    pub fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.bet += paid;
        self.contributed += paid;
        paid
    }

    /// Post an ante of up to `amount` chips. Antes go straight to the hand
    /// total and do not count toward matching the current round's bet.
    pub fn post_ante(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.contributed += paid;
        paid
    }

    /// Reset the per-round commitment at the end of a betting round. The
    /// hand-total contribution is left intact for pot construction.
    pub fn collect_bet(&mut self) {
        self.bet = 0;
    }

    /// Reset per-hand state when a new hand starts.
    pub fn reset_for_hand(&mut self) {
        self.bet = 0;
        self.contributed = 0;
        self.hole = [None, None];
    }
}
