//! Capability interface over the table engine.
//!
//! The interpreter, driver, and formatter are generic over [`TableApi`] so
//! they can be exercised against a scripted fake table in tests without the
//! real engine behind them.

use chip_engine::cards::Card;
use chip_engine::errors::GameError;
use chip_engine::player::{Action, ActionKind};
use chip_engine::pot::Pot;
use chip_engine::record::HandRecord;
use chip_engine::table::{ForcedBets, Street, Table};

/// Everything the interpreter needs from a poker table engine.
pub trait TableApi {
    fn forced_bets(&self) -> ForcedBets;
    fn num_seats(&self) -> usize;
    fn button(&self) -> usize;
    fn seats(&self) -> Vec<Option<u32>>;
    fn sit_down(&mut self, seat: usize, buy_in: u32) -> Result<(), GameError>;
    fn stand_up(&mut self, seat: usize) -> Result<(), GameError>;

    fn start_hand(&mut self, button: Option<usize>) -> Result<(), GameError>;
    fn is_hand_in_progress(&self) -> bool;
    fn round_of_betting(&self) -> Street;

    fn player_to_act(&self) -> Option<usize>;
    fn legal_actions(&self) -> Vec<ActionKind>;
    fn take_action(&mut self, action: Action) -> Result<(), GameError>;

    fn is_betting_round_in_progress(&self) -> bool;
    fn is_at_start_of_betting_round(&self) -> bool;
    fn is_in_middle_of_betting_round(&self) -> bool;
    fn are_betting_rounds_completed(&self) -> bool;
    fn end_betting_round(&mut self) -> Result<(), GameError>;

    fn pots(&self) -> Vec<Pot>;
    fn showdown(&mut self) -> Result<(), GameError>;
    fn manual_showdown(
        &mut self,
        community: &[Card],
        holes: &[Option<[Option<Card>; 2]>],
    ) -> Result<(), GameError>;
    fn winners(&self) -> Vec<Vec<usize>>;

    fn initial_hand_seats(&self) -> Vec<bool>;
    fn hand_seats(&self) -> Vec<bool>;
    fn take_records(&mut self) -> Vec<HandRecord>;
}

impl TableApi for Table {
    fn forced_bets(&self) -> ForcedBets {
        Table::forced_bets(self)
    }

    fn num_seats(&self) -> usize {
        Table::num_seats(self)
    }

    fn button(&self) -> usize {
        Table::button(self)
    }

    fn seats(&self) -> Vec<Option<u32>> {
        Table::seats(self)
    }

    fn sit_down(&mut self, seat: usize, buy_in: u32) -> Result<(), GameError> {
        Table::sit_down(self, seat, buy_in)
    }

    fn stand_up(&mut self, seat: usize) -> Result<(), GameError> {
        Table::stand_up(self, seat)
    }

    fn start_hand(&mut self, button: Option<usize>) -> Result<(), GameError> {
        Table::start_hand(self, button)
    }

    fn is_hand_in_progress(&self) -> bool {
        Table::is_hand_in_progress(self)
    }

    fn round_of_betting(&self) -> Street {
        Table::round_of_betting(self)
    }

    fn player_to_act(&self) -> Option<usize> {
        Table::player_to_act(self)
    }

    fn legal_actions(&self) -> Vec<ActionKind> {
        Table::legal_actions(self)
    }

    fn take_action(&mut self, action: Action) -> Result<(), GameError> {
        Table::take_action(self, action)
    }

    fn is_betting_round_in_progress(&self) -> bool {
        Table::is_betting_round_in_progress(self)
    }

    fn is_at_start_of_betting_round(&self) -> bool {
        Table::is_at_start_of_betting_round(self)
    }

    fn is_in_middle_of_betting_round(&self) -> bool {
        Table::is_in_middle_of_betting_round(self)
    }

    fn are_betting_rounds_completed(&self) -> bool {
        Table::are_betting_rounds_completed(self)
    }

    fn end_betting_round(&mut self) -> Result<(), GameError> {
        Table::end_betting_round(self)
    }

    fn pots(&self) -> Vec<Pot> {
        Table::pots(self)
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        Table::showdown(self)
    }

    fn manual_showdown(
        &mut self,
        community: &[Card],
        holes: &[Option<[Option<Card>; 2]>],
    ) -> Result<(), GameError> {
        Table::manual_showdown(self, community, holes)
    }

    fn winners(&self) -> Vec<Vec<usize>> {
        Table::winners(self)
    }

    fn initial_hand_seats(&self) -> Vec<bool> {
        Table::initial_hand_seats(self)
    }

    fn hand_seats(&self) -> Vec<bool> {
        Table::hand_seats(self)
    }

    fn take_records(&mut self) -> Vec<HandRecord> {
        Table::take_records(self)
    }
}
