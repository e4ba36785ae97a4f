use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, HandStrength};
use crate::player::{Action, ActionKind, Player};
use crate::pot::{compute_pots, Pot};
use crate::record::{ActionRecord, HandRecord};
use crate::rules::{validate_action, ValidatedAction};

/// A betting street in Texas Hold'em.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River => Street::River,
        }
    }
}

/// The table stakes: ante and blinds posted at the start of every hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ForcedBets {
    pub ante: u32,
    pub small_blind: u32,
    pub big_blind: u32,
}

/// Per-street betting state.
#[derive(Debug)]
struct BettingRound {
    current_bet: u32,
    min_raise_to: u32,
    to_act: Option<usize>,
    acted: Vec<bool>,
    actions_taken: u32,
}

/// Per-hand state, kept around after the hand completes so that the button,
/// original seating, and winners stay queryable until the next hand starts.
#[derive(Debug)]
struct Hand {
    /// Seats dealt into the hand. Folding never clears this.
    initial: Vec<bool>,
    /// Seats that have not folded.
    live: Vec<bool>,
    street: Street,
    board: Vec<Card>,
    betting_completed: bool,
    completed: bool,
    round: BettingRound,
    winners: Vec<Vec<usize>>,
    record: HandRecord,
}

const DEFAULT_SEED: u64 = 0xC41D_DEA1;

/// A stateful multi-seat no-limit hold'em table.
///
/// The table owns seat occupancy, the deck, the per-hand betting state
/// machine, pot construction, and showdown adjudication. Hands normally run
/// on the internally dealt cards, but a replay driver can override the
/// outcome with [`Table::manual_showdown`], supplying the community and hole
/// cards observed in a hand history.
///
/// # Examples
///
/// ```
/// use chip_engine::table::{ForcedBets, Table};
/// use chip_engine::player::Action;
///
/// let forced = ForcedBets { ante: 0, small_blind: 1, big_blind: 2 };
/// let mut table = Table::new(forced, 6);
/// table.sit_down(0, 100).unwrap();
/// table.sit_down(1, 200).unwrap();
/// table.sit_down(2, 300).unwrap();
/// table.start_hand(Some(0)).unwrap();
///
/// // Three-handed: the button acts first preflop.
/// assert_eq!(table.player_to_act(), Some(0));
/// table.take_action(Action::Call).unwrap();
/// table.take_action(Action::Call).unwrap();
/// table.take_action(Action::Check).unwrap();
/// assert!(!table.is_betting_round_in_progress());
/// table.end_betting_round().unwrap();
/// assert_eq!(table.pots()[0].size, 6);
/// ```
#[derive(Debug)]
pub struct Table {
    forced: ForcedBets,
    num_seats: usize,
    seats: Vec<Option<Player>>,
    deck: Deck,
    button: usize,
    hand: Option<Hand>,
    hand_no: u32,
    records: Vec<HandRecord>,
}

impl Table {
    pub fn new(forced: ForcedBets, num_seats: usize) -> Self {
        Self::with_seed(forced, num_seats, DEFAULT_SEED)
    }

    pub fn with_seed(forced: ForcedBets, num_seats: usize, seed: u64) -> Self {
        Self {
            forced,
            num_seats,
            seats: (0..num_seats).map(|_| None).collect(),
            deck: Deck::new_with_seed(seed),
            button: 0,
            hand: None,
            hand_no: 0,
            records: Vec::new(),
        }
    }

    pub fn forced_bets(&self) -> ForcedBets {
        self.forced
    }

    pub fn num_seats(&self) -> usize {
        self.num_seats
    }

    pub fn button(&self) -> usize {
        self.button
    }

    /// Seat occupancy as total chips per seat (`None` for empty seats).
    pub fn seats(&self) -> Vec<Option<u32>> {
        self.seats
            .iter()
            .map(|s| s.as_ref().map(|p| p.total_chips()))
            .collect()
    }

    pub fn sit_down(&mut self, seat: usize, buy_in: u32) -> Result<(), GameError> {
        self.check_seat(seat)?;
        if self.seats[seat].is_some() {
            return Err(GameError::SeatTaken(seat));
        }
        self.seats[seat] = Some(Player::new(buy_in));
        Ok(())
    }

    pub fn stand_up(&mut self, seat: usize) -> Result<(), GameError> {
        self.check_seat(seat)?;
        if self.seats[seat].is_none() {
            return Err(GameError::SeatEmpty(seat));
        }
        self.seats[seat] = None;
        Ok(())
    }

    pub fn is_hand_in_progress(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| !h.completed)
    }

    /// Start a new hand: stand up busted seats, place the button, deal hole
    /// cards, post antes and blinds, and open the preflop betting round.
    ///
    /// With `Some(seat)` the button is placed on that seat (or the next
    /// occupied seat clockwise if it is empty); with `None` it advances from
    /// its previous position.
    pub fn start_hand(&mut self, button: Option<usize>) -> Result<(), GameError> {
        if self.is_hand_in_progress() {
            return Err(GameError::HandInProgress);
        }
        for seat in self.seats.iter_mut() {
            if seat.as_ref().is_some_and(|p| p.stack() == 0) {
                *seat = None;
            }
        }
        let seated: Vec<usize> = (0..self.num_seats)
            .filter(|&i| self.seats[i].is_some())
            .collect();
        if seated.len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        self.button = match button {
            Some(b) => {
                self.check_seat(b)?;
                if self.seats[b].is_some() {
                    b
                } else {
                    self.next_occupied(b).ok_or(GameError::NotEnoughPlayers)?
                }
            }
            None => self
                .next_occupied(self.button)
                .ok_or(GameError::NotEnoughPlayers)?,
        };

        for &i in &seated {
            if let Some(p) = self.seats[i].as_mut() {
                p.reset_for_hand();
            }
        }

        self.deck.shuffle();
        for _ in 0..2 {
            for &i in &seated {
                let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                if let Some(p) = self.seats[i].as_mut() {
                    let mut hole = p.hole_cards();
                    if hole[0].is_none() {
                        hole[0] = Some(c);
                    } else {
                        hole[1] = Some(c);
                    }
                    p.set_hole_cards(hole);
                }
            }
        }

        let initial: Vec<bool> = self.seats.iter().map(|s| s.is_some()).collect();
        self.hand_no += 1;
        let record = HandRecord::new(self.hand_no, self.button, self.forced);

        // antes first, then blinds; short stacks post all-in for less
        let ante = self.forced.ante;
        if ante > 0 {
            for &i in &seated {
                if let Some(p) = self.seats[i].as_mut() {
                    p.post_ante(ante);
                }
            }
        }
        let (sb_seat, bb_seat) = if seated.len() == 2 {
            // heads-up: the button posts the small blind
            let other = self
                .next_occupied(self.button)
                .ok_or(GameError::NotEnoughPlayers)?;
            (self.button, other)
        } else {
            let sb = self
                .next_occupied(self.button)
                .ok_or(GameError::NotEnoughPlayers)?;
            let bb = self.next_occupied(sb).ok_or(GameError::NotEnoughPlayers)?;
            (sb, bb)
        };
        if let Some(p) = self.seats[sb_seat].as_mut() {
            p.commit(self.forced.small_blind);
        }
        if let Some(p) = self.seats[bb_seat].as_mut() {
            p.commit(self.forced.big_blind);
        }

        let mut hand = Hand {
            initial,
            live: self.seats.iter().map(|s| s.is_some()).collect(),
            street: Street::Preflop,
            board: Vec::with_capacity(5),
            betting_completed: false,
            completed: false,
            round: BettingRound {
                current_bet: self.forced.big_blind,
                min_raise_to: self.forced.big_blind * 2,
                to_act: None,
                acted: vec![false; self.num_seats],
                actions_taken: 0,
            },
            winners: Vec::new(),
            record,
        };
        hand.round.to_act = self.first_owing_from(&hand, bb_seat);
        self.hand = Some(hand);
        Ok(())
    }

    pub fn round_of_betting(&self) -> Street {
        self.hand.as_ref().map_or(Street::Preflop, |h| h.street)
    }

    pub fn player_to_act(&self) -> Option<usize> {
        let h = self.hand.as_ref()?;
        if h.completed || h.betting_completed {
            return None;
        }
        h.round.to_act
    }

    /// The kinds of action currently legal for the player to act. Empty when
    /// no one is to act.
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        let Some(seat) = self.player_to_act() else {
            return Vec::new();
        };
        let h = self.hand.as_ref().expect("player to act implies a hand");
        let p = self.seats[seat].as_ref().expect("actor is seated");
        let mut kinds = vec![ActionKind::Fold];
        if h.round.current_bet <= p.bet_this_round() {
            kinds.push(ActionKind::Check);
        } else {
            kinds.push(ActionKind::Call);
        }
        if h.round.current_bet == 0 {
            kinds.push(ActionKind::Bet);
        } else if p.stack() > h.round.current_bet.saturating_sub(p.bet_this_round()) {
            kinds.push(ActionKind::Raise);
        }
        kinds
    }

    /// Apply the action of the player to act.
    pub fn take_action(&mut self, action: Action) -> Result<(), GameError> {
        let seat = self
            .player_to_act()
            .ok_or(GameError::BettingRoundNotInProgress)?;
        let h = self.hand.as_mut().ok_or(GameError::NoHandInProgress)?;
        let street = h.street;
        let min_bet = self.forced.big_blind;
        let p = self.seats[seat].as_mut().ok_or(GameError::SeatEmpty(seat))?;

        let validated = validate_action(
            p.stack(),
            p.bet_this_round(),
            h.round.current_bet,
            h.round.min_raise_to,
            min_bet,
            action,
        )?;

        let recorded = match validated {
            ValidatedAction::Fold => {
                h.live[seat] = false;
                Action::Fold
            }
            ValidatedAction::Check => Action::Check,
            ValidatedAction::Call { pay } => {
                p.commit(pay);
                Action::Call
            }
            ValidatedAction::Bet { to, pay } => {
                p.commit(pay);
                let delta = to.max(min_bet);
                h.round.current_bet = to;
                h.round.min_raise_to = to + delta;
                for (i, acted) in h.round.acted.iter_mut().enumerate() {
                    if i != seat {
                        *acted = false;
                    }
                }
                Action::Bet(to)
            }
            ValidatedAction::Raise { to, pay, full } => {
                p.commit(pay);
                if to > h.round.current_bet {
                    let delta = (to - h.round.current_bet).max(min_bet);
                    h.round.current_bet = to;
                    if full {
                        h.round.min_raise_to = to + delta;
                        for (i, acted) in h.round.acted.iter_mut().enumerate() {
                            if i != seat {
                                *acted = false;
                            }
                        }
                    }
                }
                Action::Raise(to)
            }
        };

        h.round.acted[seat] = true;
        h.round.actions_taken += 1;
        h.record.actions.push(ActionRecord {
            seat,
            street,
            action: recorded,
        });
        let hand = self.hand.as_ref().expect("hand in progress");
        let next = self.first_owing_from(hand, seat);
        if let Some(h) = self.hand.as_mut() {
            h.round.to_act = next;
        }
        Ok(())
    }

    pub fn is_betting_round_in_progress(&self) -> bool {
        self.player_to_act().is_some()
    }

    /// True once a street has opened and no action has been taken on it yet.
    pub fn is_at_start_of_betting_round(&self) -> bool {
        self.hand
            .as_ref()
            .is_some_and(|h| !h.completed && !h.betting_completed && h.round.actions_taken == 0)
    }

    /// True while a street is partially acted: someone has acted, someone
    /// still owes action.
    pub fn is_in_middle_of_betting_round(&self) -> bool {
        self.hand
            .as_ref()
            .is_some_and(|h| h.round.actions_taken > 0)
            && self.is_betting_round_in_progress()
    }

    pub fn are_betting_rounds_completed(&self) -> bool {
        self.hand
            .as_ref()
            .is_some_and(|h| !h.completed && h.betting_completed)
    }

    /// Close the current betting round: sweep bets into the pot, then either
    /// advance the street (dealing the board) or mark betting complete when
    /// the river is closed, only one live seat remains, or everyone left is
    /// all-in (in which case the board is run out).
    pub fn end_betting_round(&mut self) -> Result<(), GameError> {
        if self.is_betting_round_in_progress() {
            return Err(GameError::BettingRoundInProgress);
        }
        let h = self.hand.as_mut().ok_or(GameError::NoHandInProgress)?;
        if h.completed || h.betting_completed {
            return Err(GameError::BettingRoundNotInProgress);
        }
        for seat in self.seats.iter_mut().flatten() {
            seat.collect_bet();
        }

        let live: Vec<usize> = (0..self.num_seats).filter(|&i| h.live[i]).collect();
        let can_still_bet = live
            .iter()
            .filter(|&&i| self.seats[i].as_ref().is_some_and(|p| p.stack() > 0))
            .count();
        if live.len() <= 1 {
            h.betting_completed = true;
            return Ok(());
        }
        if can_still_bet <= 1 || h.street == Street::River {
            // nothing left to bet: run out the remaining board
            while h.street != Street::River {
                h.street = h.street.next();
                Self::deal_street(&mut self.deck, &mut h.board, h.street)?;
            }
            h.betting_completed = true;
            return Ok(());
        }

        h.street = h.street.next();
        Self::deal_street(&mut self.deck, &mut h.board, h.street)?;
        h.round.current_bet = 0;
        h.round.min_raise_to = self.forced.big_blind;
        h.round.acted = vec![false; self.num_seats];
        h.round.actions_taken = 0;
        let hand = self.hand.as_ref().expect("hand in progress");
        let next = self.first_owing_from(hand, self.button);
        if let Some(h) = self.hand.as_mut() {
            h.round.to_act = next;
        }
        Ok(())
    }

    /// The current pots, built from every seat's total contribution with
    /// folded seats excluded from eligibility.
    pub fn pots(&self) -> Vec<Pot> {
        let Some(h) = self.hand.as_ref() else {
            return Vec::new();
        };
        let contributions: Vec<(usize, u32, bool)> = (0..self.num_seats)
            .filter_map(|i| {
                let contributed = self.seats[i]
                    .as_ref()
                    .map(|p| p.contributed())
                    .unwrap_or(0);
                (contributed > 0 || h.initial[i]).then_some((i, contributed, h.live[i]))
            })
            .collect();
        compute_pots(&contributions)
    }

    /// Adjudicate the hand with the engine-dealt cards and pay out the pots.
    /// A pot with a single eligible seat is won outright, no cards needed.
    pub fn showdown(&mut self) -> Result<(), GameError> {
        let pots = self.pots();
        let h = self.hand.as_ref().ok_or(GameError::NoHandInProgress)?;
        if h.completed || !h.betting_completed {
            return Err(GameError::BettingRoundsNotCompleted);
        }
        let board = h.board.clone();
        let winners: Vec<Vec<usize>> = pots
            .iter()
            .map(|pot| {
                if pot.eligible.len() == 1 {
                    pot.eligible.clone()
                } else {
                    let hands: Vec<(usize, HandStrength)> = pot
                        .eligible
                        .iter()
                        .map(|&i| (i, self.strength_of(i, &board)))
                        .collect();
                    best_of(hands)
                }
            })
            .collect();
        self.finish_hand(pots, winners, None)
    }

    /// Adjudicate the hand with externally observed cards: the community
    /// cards and, per seat, an optional pair of optional hole cards. Only
    /// eligible seats that revealed both cards contest a pot; a pot nobody
    /// revealed for falls to its first eligible seat.
    pub fn manual_showdown(
        &mut self,
        community: &[Card],
        holes: &[Option<[Option<Card>; 2]>],
    ) -> Result<(), GameError> {
        let pots = self.pots();
        let h = self.hand.as_ref().ok_or(GameError::NoHandInProgress)?;
        if h.completed || !h.betting_completed {
            return Err(GameError::BettingRoundsNotCompleted);
        }
        let winners: Vec<Vec<usize>> = pots
            .iter()
            .map(|pot| {
                let hands: Vec<(usize, HandStrength)> = pot
                    .eligible
                    .iter()
                    .filter_map(|&i| {
                        let pair = holes.get(i).copied().flatten()?;
                        let (a, b) = (pair[0]?, pair[1]?);
                        let mut cards = community.to_vec();
                        cards.push(a);
                        cards.push(b);
                        Some((i, evaluate_hand(&cards)))
                    })
                    .collect();
                if hands.is_empty() {
                    pot.eligible.first().copied().into_iter().collect()
                } else {
                    best_of(hands)
                }
            })
            .collect();
        self.finish_hand(pots, winners, Some(community.to_vec()))
    }

    /// Per-pot winning seats of the last showdown.
    pub fn winners(&self) -> Vec<Vec<usize>> {
        self.hand
            .as_ref()
            .map(|h| h.winners.clone())
            .unwrap_or_default()
    }

    /// Seats dealt into the current (or just-completed) hand.
    pub fn initial_hand_seats(&self) -> Vec<bool> {
        self.hand
            .as_ref()
            .map(|h| h.initial.clone())
            .unwrap_or_else(|| vec![false; self.num_seats])
    }

    /// Seats still contesting the hand (folded seats are cleared).
    pub fn hand_seats(&self) -> Vec<bool> {
        self.hand
            .as_ref()
            .map(|h| h.live.clone())
            .unwrap_or_else(|| vec![false; self.num_seats])
    }

    /// Drain the hand records accumulated since the last call.
    pub fn take_records(&mut self) -> Vec<HandRecord> {
        std::mem::take(&mut self.records)
    }

    fn finish_hand(
        &mut self,
        pots: Vec<Pot>,
        winners: Vec<Vec<usize>>,
        board_override: Option<Vec<Card>>,
    ) -> Result<(), GameError> {
        let button = self.button;
        let num_seats = self.num_seats;
        let mut payouts: Vec<(usize, u32)> = Vec::new();
        for (pot, pot_winners) in pots.iter().zip(&winners) {
            for (seat, share) in split_by_button_distance(pot.size, pot_winners, button, num_seats)
            {
                if let Some(p) = self.seats[seat].as_mut() {
                    p.add_chips(share);
                }
                payouts.push((seat, share));
            }
        }
        let h = self.hand.as_mut().ok_or(GameError::NoHandInProgress)?;
        h.winners = winners.clone();
        h.completed = true;
        h.record.board = board_override.unwrap_or_else(|| h.board.clone());
        h.record.winners = winners;
        h.record.payouts = payouts;
        self.records.push(h.record.clone());
        Ok(())
    }

    fn strength_of(&self, seat: usize, board: &[Card]) -> HandStrength {
        let mut cards = board.to_vec();
        if let Some(p) = self.seats[seat].as_ref() {
            cards.extend(p.hole_cards().iter().flatten());
        }
        evaluate_hand(&cards)
    }

    fn deal_street(deck: &mut Deck, board: &mut Vec<Card>, street: Street) -> Result<(), GameError> {
        let n = match street {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        };
        deck.burn_card();
        for _ in 0..n {
            board.push(deck.deal_card().ok_or(GameError::DeckExhausted)?);
        }
        Ok(())
    }

    fn check_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat >= self.num_seats {
            return Err(GameError::InvalidSeat {
                seat,
                num_seats: self.num_seats,
            });
        }
        Ok(())
    }

    fn next_occupied(&self, from: usize) -> Option<usize> {
        (1..=self.num_seats)
            .map(|step| (from + step) % self.num_seats)
            .find(|&i| self.seats[i].is_some())
    }

    // A seat owes action while it is live, has chips behind, and has either
    // not acted this round or faces a bet above its round commitment.
    fn owes_action(&self, h: &Hand, seat: usize) -> bool {
        if !h.live[seat] {
            return false;
        }
        let Some(p) = self.seats[seat].as_ref() else {
            return false;
        };
        if p.stack() == 0 {
            return false;
        }
        !h.round.acted[seat] || p.bet_this_round() < h.round.current_bet
    }

    fn first_owing_from(&self, h: &Hand, from: usize) -> Option<usize> {
        let live_count = (0..self.num_seats).filter(|&i| h.live[i]).count();
        if live_count <= 1 {
            return None;
        }
        (1..=self.num_seats)
            .map(|step| (from + step) % self.num_seats)
            .find(|&i| self.owes_action(h, i))
    }
}

fn best_of(hands: Vec<(usize, HandStrength)>) -> Vec<usize> {
    let mut best: Vec<usize> = Vec::new();
    let mut top: Option<HandStrength> = None;
    for (seat, strength) in hands {
        match &top {
            None => {
                top = Some(strength);
                best = vec![seat];
            }
            Some(t) => match compare_hands(&strength, t) {
                std::cmp::Ordering::Greater => {
                    top = Some(strength);
                    best = vec![seat];
                }
                std::cmp::Ordering::Equal => best.push(seat),
                std::cmp::Ordering::Less => {}
            },
        }
    }
    best.sort_unstable();
    best
}

/// Split `size` chips among `winners`, handing odd chips to the winners
/// closest to the button (button-relative distance, ascending). Returns
/// `(seat, share)` pairs in that order.
pub fn split_by_button_distance(
    size: u32,
    winners: &[usize],
    button: usize,
    num_seats: usize,
) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let mut sorted = winners.to_vec();
    sorted.sort_by_key(|&seat| (seat + num_seats - button) % num_seats);
    let base = size / sorted.len() as u32;
    let odd = (size % sorted.len() as u32) as usize;
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, seat)| (seat, base + u32::from(i < odd)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_handed() -> Table {
        let forced = ForcedBets {
            ante: 0,
            small_blind: 1,
            big_blind: 2,
        };
        let mut t = Table::new(forced, 6);
        t.sit_down(0, 100).unwrap();
        t.sit_down(1, 200).unwrap();
        t.sit_down(2, 300).unwrap();
        t.start_hand(Some(0)).unwrap();
        t
    }

    #[test]
    fn test_blinds_and_first_to_act() {
        let t = three_handed();
        // button 0, SB 1, BB 2; the button opens preflop three-handed
        assert_eq!(t.player_to_act(), Some(0));
        assert_eq!(t.seats(), vec![Some(100), Some(200), Some(300), None, None, None]);
    }

    #[test]
    fn test_raise_is_raise_to() {
        let mut t = three_handed();
        t.take_action(Action::Raise(4)).unwrap();
        t.take_action(Action::Raise(6)).unwrap();
        t.take_action(Action::Call).unwrap();
        // BB still owes a call of the raise to 6
        assert_eq!(t.player_to_act(), Some(0));
        t.take_action(Action::Call).unwrap();
        assert!(!t.is_betting_round_in_progress());
        t.end_betting_round().unwrap();
        let stacks = t.seats();
        assert_eq!(stacks, vec![Some(94), Some(194), Some(294), None, None, None]);
        assert_eq!(t.pots(), vec![Pot { size: 18, eligible: vec![0, 1, 2] }]);
    }

    #[test]
    fn test_fold_to_one_completes_betting() {
        let mut t = three_handed();
        t.take_action(Action::Fold).unwrap();
        t.take_action(Action::Fold).unwrap();
        assert!(!t.is_betting_round_in_progress());
        t.end_betting_round().unwrap();
        assert!(t.are_betting_rounds_completed());
        let pots = t.pots();
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].size, 3);
        assert_eq!(pots[0].eligible, vec![2]);
        t.showdown().unwrap();
        assert_eq!(t.winners(), vec![vec![2]]);
        assert!(!t.is_hand_in_progress());
        // BB keeps its blind and collects the small blind
        assert_eq!(t.seats()[2], Some(301));
    }

    #[test]
    fn test_positions_survive_to_next_hand_boundary() {
        let mut t = three_handed();
        t.take_action(Action::Fold).unwrap();
        t.take_action(Action::Fold).unwrap();
        t.end_betting_round().unwrap();
        t.showdown().unwrap();
        // completed hand still reports the original seating and button
        assert_eq!(t.button(), 0);
        assert_eq!(t.initial_hand_seats(), vec![true, true, true, false, false, false]);
        // next hand advances the button
        t.start_hand(None).unwrap();
        assert_eq!(t.button(), 1);
    }

    #[test]
    fn test_ante_goes_to_pot_not_round_bet() {
        let forced = ForcedBets {
            ante: 10,
            small_blind: 25,
            big_blind: 50,
        };
        let mut t = Table::new(forced, 6);
        for i in 0..6 {
            t.sit_down(i, 1000).unwrap();
        }
        t.start_hand(Some(5)).unwrap();
        // UTG is seat 2; calling costs the big blind, not blind plus ante
        assert_eq!(t.player_to_act(), Some(2));
        t.take_action(Action::Call).unwrap();
        // mid-round the call is still in front of the seat
        assert_eq!(t.seats()[2], Some(990));
        for _ in 0..4 {
            t.take_action(Action::Fold).unwrap();
        }
        // big blind closes with the option
        assert_eq!(t.player_to_act(), Some(1));
        t.take_action(Action::Check).unwrap();
        t.end_betting_round().unwrap();
        // bets swept: the ante and the call have left the stack
        assert_eq!(t.seats()[2], Some(940));
        // 6 antes + SB(dead) + BB + call = 60 + 25 + 100
        assert_eq!(t.pots()[0].size, 185);
        assert_eq!(t.pots()[0].eligible, vec![1, 2]);
    }

    #[test]
    fn test_all_in_runs_out_board() {
        let forced = ForcedBets {
            ante: 0,
            small_blind: 1,
            big_blind: 2,
        };
        let mut t = Table::new(forced, 2);
        t.sit_down(0, 50).unwrap();
        t.sit_down(1, 50).unwrap();
        t.start_hand(Some(0)).unwrap();
        // heads-up: button posts SB and acts first preflop
        assert_eq!(t.player_to_act(), Some(0));
        t.take_action(Action::Raise(50)).unwrap();
        t.take_action(Action::Call).unwrap();
        t.end_betting_round().unwrap();
        assert!(t.are_betting_rounds_completed());
        t.showdown().unwrap();
        let total: u32 = t.seats().iter().flatten().sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_split_by_button_distance_odd_chips() {
        let shares = split_by_button_distance(1000, &[1, 3, 5], 4, 6);
        assert_eq!(shares, vec![(5, 334), (1, 333), (3, 333)]);
        let shares = split_by_button_distance(900, &[1, 3, 5], 4, 6);
        assert_eq!(shares, vec![(5, 300), (1, 300), (3, 300)]);
    }
}
