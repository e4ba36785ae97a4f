//! Exercises the capability seam: the driver and formatter against a
//! scripted table instead of the real engine.

use chip::driver::{self, ActionToken};
use chip::format;
use chip::table_api::TableApi;
use chip_engine::cards::Card;
use chip_engine::errors::GameError;
use chip_engine::player::{Action, ActionKind};
use chip_engine::pot::Pot;
use chip_engine::record::HandRecord;
use chip_engine::table::{ForcedBets, Street};

/// A canned six-seat table. State is set by the test, never derived.
struct FakeTable {
    street: Street,
    button: usize,
    to_act: Vec<usize>,
    legal: Vec<ActionKind>,
    seats: Vec<Option<u32>>,
    initial: Vec<bool>,
    live: Vec<bool>,
    pots: Vec<Pot>,
    winners: Vec<Vec<usize>>,
    taken: Vec<Action>,
}

impl FakeTable {
    fn new() -> Self {
        Self {
            street: Street::Flop,
            button: 3,
            to_act: vec![4, 5, 0],
            legal: vec![ActionKind::Fold, ActionKind::Check, ActionKind::Bet],
            seats: vec![Some(100); 6],
            initial: vec![true; 6],
            live: vec![true; 6],
            pots: Vec::new(),
            winners: Vec::new(),
            taken: Vec::new(),
        }
    }
}

impl TableApi for FakeTable {
    fn forced_bets(&self) -> ForcedBets {
        ForcedBets {
            ante: 0,
            small_blind: 1,
            big_blind: 2,
        }
    }

    fn num_seats(&self) -> usize {
        6
    }

    fn button(&self) -> usize {
        self.button
    }

    fn seats(&self) -> Vec<Option<u32>> {
        self.seats.clone()
    }

    fn sit_down(&mut self, seat: usize, buy_in: u32) -> Result<(), GameError> {
        self.seats[seat] = Some(buy_in);
        Ok(())
    }

    fn stand_up(&mut self, seat: usize) -> Result<(), GameError> {
        self.seats[seat] = None;
        Ok(())
    }

    fn start_hand(&mut self, _button: Option<usize>) -> Result<(), GameError> {
        Ok(())
    }

    fn is_hand_in_progress(&self) -> bool {
        true
    }

    fn round_of_betting(&self) -> Street {
        self.street
    }

    fn player_to_act(&self) -> Option<usize> {
        self.to_act.first().copied()
    }

    fn legal_actions(&self) -> Vec<ActionKind> {
        self.legal.clone()
    }

    fn take_action(&mut self, action: Action) -> Result<(), GameError> {
        self.taken.push(action);
        self.to_act.remove(0);
        Ok(())
    }

    fn is_betting_round_in_progress(&self) -> bool {
        !self.to_act.is_empty()
    }

    fn is_at_start_of_betting_round(&self) -> bool {
        false
    }

    fn is_in_middle_of_betting_round(&self) -> bool {
        !self.to_act.is_empty()
    }

    fn are_betting_rounds_completed(&self) -> bool {
        false
    }

    fn end_betting_round(&mut self) -> Result<(), GameError> {
        Ok(())
    }

    fn pots(&self) -> Vec<Pot> {
        self.pots.clone()
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        Ok(())
    }

    fn manual_showdown(
        &mut self,
        _community: &[Card],
        _holes: &[Option<[Option<Card>; 2]>],
    ) -> Result<(), GameError> {
        Ok(())
    }

    fn winners(&self) -> Vec<Vec<usize>> {
        self.winners.clone()
    }

    fn initial_hand_seats(&self) -> Vec<bool> {
        self.initial.clone()
    }

    fn hand_seats(&self) -> Vec<bool> {
        self.live.clone()
    }

    fn take_records(&mut self) -> Vec<HandRecord> {
        Vec::new()
    }
}

#[test]
fn numeric_token_bets_when_raise_is_not_legal() {
    let mut fake = FakeTable::new();
    let outcomes =
        driver::take_actions(&mut fake, &[ActionToken::Amount(40), ActionToken::Fold]).unwrap();
    assert_eq!(fake.taken, vec![Action::Bet(40), Action::Fold]);
    assert_eq!(outcomes[0].action, Action::Bet(40));
    assert_eq!(outcomes[0].street, Street::Flop);
}

#[test]
fn numeric_token_raises_when_raise_is_legal() {
    let mut fake = FakeTable::new();
    fake.legal = vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise];
    driver::take_actions(&mut fake, &[ActionToken::Amount(40)]).unwrap();
    assert_eq!(fake.taken, vec![Action::Raise(40)]);
}

#[test]
fn batch_snapshots_street_before_actions() {
    let mut fake = FakeTable::new();
    fake.street = Street::Preflop;
    let outcomes = driver::take_actions(
        &mut fake,
        &[ActionToken::Fold, ActionToken::Fold, ActionToken::Call],
    )
    .unwrap();
    assert!(outcomes.iter().all(|o| o.street == Street::Preflop));
    let rendered = format::player_actions(&outcomes);
    assert!(rendered.starts_with("*** Preflop ***\n"));
    assert!(rendered.contains("  SB posts small blind 1\n"));
}

#[test]
fn winners_fallback_is_first_eligible_of_first_pot() {
    let mut fake = FakeTable::new();
    fake.pots = vec![Pot {
        size: 300,
        eligible: vec![5, 0],
    }];
    // the table reports no winners at all
    let rendered = format::winners(&fake, &fake.pots()).unwrap();
    assert_eq!(rendered, "*** Showdown ***\n  BB wins 300\n\n");
}

#[test]
fn peek_does_not_mutate_the_table() {
    let fake = FakeTable::new();
    let cards = chip::token::parse_cards("th tc").unwrap();
    let rendered = format::player_to_act(&fake, &cards).unwrap();
    assert_eq!(rendered, "\nSB is next to act with Th Tc\n");
    assert!(fake.taken.is_empty());
}
