//! Table driver: translates parsed values into engine calls.
//!
//! Owns no poker logic; the engine's legal-action set is the single source
//! of truth for bet/raise disambiguation.

use chip_engine::cards::Card;
use chip_engine::player::{Action, ActionKind};
use chip_engine::table::{ForcedBets, Street};

use crate::error::ParseError;
use crate::position::{resolve_position, Pos};
use crate::table_api::TableApi;

/// One entry of a stacks line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StackUpdate {
    /// `-`: leave the seat untouched.
    Keep,
    /// Re-seat the player with this stack; zero stands the seat up.
    Set(u32),
}

/// One token of an actions line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionToken {
    Fold,
    Check,
    Call,
    /// Bare number: a bet or a raise-to amount, disambiguated by the engine.
    Amount(u32),
}

/// One action as executed, snapshotting the street and forced bets that
/// were current when the batch started.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub seat: usize,
    pub pos: Pos,
    pub action: Action,
    pub street: Street,
    pub forced: ForcedBets,
}

/// Apply a stacks line: `Keep` skips the seat; otherwise any sitting player
/// stands up and, for a positive stack, sits back down with the new amount.
pub fn update_stacks<T: TableApi>(table: &mut T, updates: &[StackUpdate]) -> Result<(), ParseError> {
    let seats = table.seats();
    for (seat, update) in updates.iter().enumerate().take(seats.len()) {
        let StackUpdate::Set(stack) = *update else {
            continue;
        };
        if seats[seat].is_some() {
            table.stand_up(seat)?;
        }
        if stack > 0 {
            table.sit_down(seat, stack)?;
        }
    }
    Ok(())
}

/// Replay a batch of action tokens against the engine, in order.
///
/// A numeric token becomes a raise when the engine considers a raise legal
/// and a bet otherwise. Every outcome carries the street and forced bets
/// captured before the first action, so the formatter can tell a street's
/// first batch from later ones.
pub fn take_actions<T: TableApi>(
    table: &mut T,
    actions: &[ActionToken],
) -> Result<Vec<ActionOutcome>, ParseError> {
    let street = table.round_of_betting();
    let forced = table.forced_bets();
    let mut outcomes = Vec::with_capacity(actions.len());

    for &token in actions {
        let seat = table
            .player_to_act()
            .ok_or(chip_engine::errors::GameError::BettingRoundNotInProgress)?;
        let pos = resolve_position(&table.initial_hand_seats(), table.button(), seat)?
            .unwrap_or(Pos::Button);
        let action = match token {
            ActionToken::Fold => Action::Fold,
            ActionToken::Check => Action::Check,
            ActionToken::Call => Action::Call,
            ActionToken::Amount(amount) => {
                if table.legal_actions().contains(&ActionKind::Raise) {
                    Action::Raise(amount)
                } else {
                    Action::Bet(amount)
                }
            }
        };
        table.take_action(action)?;
        outcomes.push(ActionOutcome {
            seat,
            pos,
            action,
            street,
            forced,
        });
    }
    Ok(outcomes)
}

/// Assign a flat card stream to the live hand seats, two cards per seat in
/// ascending seat order. A seat enters the result only when both of its
/// tokens were present; with `strict` set, a stream whose length is not
/// exactly two per live seat is an error.
pub fn reveal_hole_cards<T: TableApi>(
    table: &T,
    cards: &[Option<Card>],
    strict: bool,
) -> Result<Vec<Option<[Option<Card>; 2]>>, ParseError> {
    let live = table.hand_seats();
    if strict {
        let expected = live.iter().filter(|&&s| s).count() * 2;
        if cards.len() != expected {
            return Err(ParseError::RaggedReveal {
                expected,
                got: cards.len(),
            });
        }
    }
    let mut holes: Vec<Option<[Option<Card>; 2]>> = vec![None; table.num_seats()];
    let mut next = cards.iter().copied();
    for (seat, _) in live.iter().enumerate().filter(|(_, &s)| s) {
        let (Some(first), Some(second)) = (next.next(), next.next()) else {
            break;
        };
        holes[seat] = Some([first, second]);
    }
    Ok(holes)
}
