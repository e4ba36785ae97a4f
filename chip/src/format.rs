//! Transcript rendering. Every section label and indent here is part of the
//! output contract.

use chip_engine::cards::Card;
use chip_engine::player::Action;
use chip_engine::pot::Pot;
use chip_engine::table::Street;

use crate::driver::ActionOutcome;
use crate::error::ParseError;
use crate::position::resolve_position;
use crate::table_api::TableApi;
use crate::token::NO_REVEAL;

const SHOWDOWN: &str = "*** Showdown ***";

/// `25/50 (ante: 10) - 6 seats`, followed by a blank line.
pub fn forced_bets<T: TableApi>(table: &T) -> String {
    let forced = table.forced_bets();
    format!(
        "{}/{} (ante: {}) - {} seats\n\n",
        forced.small_blind,
        forced.big_blind,
        forced.ante,
        table.num_seats()
    )
}

/// The `Stacks:` block, one line per seat (1-based), blank line after.
pub fn player_stacks<T: TableApi>(table: &T) -> String {
    let mut out = String::from("Stacks:\n");
    for (seat, chips) in table.seats().iter().enumerate() {
        match chips {
            Some(chips) => out.push_str(&format!("Seat {}: {}\n", seat + 1, chips)),
            None => out.push_str(&format!("Seat {}: empty\n", seat + 1)),
        }
    }
    out.push('\n');
    out
}

/// The `Positions:` block for the current hand, blank line after.
pub fn player_positions<T: TableApi>(table: &T) -> Result<String, ParseError> {
    let seating = table.initial_hand_seats();
    let button = table.button();
    let mut out = String::from("Positions:\n");
    for seat in 0..table.num_seats() {
        match resolve_position(&seating, button, seat)? {
            Some(pos) => out.push_str(&format!("Seat {}: {}\n", seat + 1, pos)),
            None => out.push_str(&format!("Seat {}: empty\n", seat + 1)),
        }
    }
    out.push('\n');
    Ok(out)
}

/// Render a batch of executed actions. Batches whose captured street is
/// preflop open with the street header and the forced-bet posts.
pub fn player_actions(outcomes: &[ActionOutcome]) -> String {
    let mut out = String::new();
    if let Some(first) = outcomes.first() {
        if first.street == Street::Preflop {
            out.push_str("*** Preflop ***\n");
            out.push_str(&format!("  All players post ante {}\n", first.forced.ante));
            out.push_str(&format!(
                "  SB posts small blind {}\n",
                first.forced.small_blind
            ));
            out.push_str(&format!("  BB posts big blind {}\n", first.forced.big_blind));
        }
    }
    for outcome in outcomes {
        let line = match outcome.action {
            Action::Fold => format!("  {} folds\n", outcome.pos),
            Action::Check => format!("  {} checks\n", outcome.pos),
            Action::Call => format!("  {} calls\n", outcome.pos),
            Action::Bet(amount) => format!("  {} bets {}\n", outcome.pos, amount),
            Action::Raise(amount) => format!("  {} raises to {}\n", outcome.pos, amount),
        };
        out.push_str(&line);
    }
    out
}

/// Two characters for a card (`Ah`), or the no-reveal marker.
pub fn card(card: Option<Card>) -> String {
    match card {
        Some(card) => format!("{}{}", card.rank.to_char(), card.suit.to_char()),
        None => NO_REVEAL.to_string(),
    }
}

fn card_list(cards: &[Option<Card>]) -> String {
    cards.iter().map(|&c| card(c)).collect::<Vec<_>>().join(" ")
}

/// A street header with the revealed community cards, e.g.
/// `*** Flop *** 2c Ad 6c`.
pub fn community_cards<T: TableApi>(table: &T, cards: &[Option<Card>]) -> String {
    let header = match table.round_of_betting() {
        Street::Flop => "*** Flop ***",
        Street::Turn => "*** Turn ***",
        Street::River => "*** River ***",
        Street::Preflop => return String::new(),
    };
    format!("{} {}\n", header, card_list(cards))
}

/// Mid-street informational peek at the next player's hand.
pub fn player_to_act<T: TableApi>(table: &T, cards: &[Option<Card>]) -> Result<String, ParseError> {
    let Some(seat) = table.player_to_act() else {
        return Ok(String::new());
    };
    let pos = resolve_position(&table.initial_hand_seats(), table.button(), seat)?;
    let label = pos.map_or_else(|| "empty".to_string(), |p| p.to_string());
    Ok(format!("\n{} is next to act with {}\n", label, card_list(cards)))
}

/// The showdown reveal block: each assigned seat shows its cards or, when
/// every card in its pair is hidden, "chucked".
pub fn hole_cards<T: TableApi>(
    table: &T,
    holes: &[Option<[Option<Card>; 2]>],
) -> Result<String, ParseError> {
    let seating = table.initial_hand_seats();
    let button = table.button();
    let mut out = format!("{}\n", SHOWDOWN);
    for seat in 0..table.num_seats() {
        let Some(pair) = holes.get(seat).copied().flatten() else {
            continue;
        };
        let pos = resolve_position(&seating, button, seat)?;
        let label = pos.map_or_else(|| "empty".to_string(), |p| p.to_string());
        if pair.iter().all(Option::is_none) {
            out.push_str(&format!("  {} chucked\n", label));
        } else {
            out.push_str(&format!("  {} shows {}\n", label, card_list(&pair)));
        }
    }
    Ok(out)
}

/// Split a pot among its winners: equal shares, odd chips to the winners
/// closest to the button (button-relative distance, ascending).
pub fn split_pot(
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

/// The pot distribution block: a showdown header plus one `<pos> wins <n>`
/// line per positive payout, pots in order, winners by button proximity.
/// Falls back to the first eligible seat of the first pot when the engine
/// reports no winners.
pub fn winners<T: TableApi>(table: &T, pots: &[Pot]) -> Result<String, ParseError> {
    let seating = table.initial_hand_seats();
    let button = table.button();
    let num_seats = table.num_seats();
    let label = |seat: usize| -> Result<String, ParseError> {
        Ok(resolve_position(&seating, button, seat)?
            .map_or_else(|| "empty".to_string(), |p| p.to_string()))
    };

    let mut out = format!("{}\n", SHOWDOWN);
    let winners = table.winners();
    if winners.iter().all(Vec::is_empty) {
        if let Some(pot) = pots.first() {
            if let Some(&seat) = pot.eligible.first() {
                out.push_str(&format!("  {} wins {}\n", label(seat)?, pot.size));
            }
        }
    } else {
        for (i, pot) in pots.iter().enumerate() {
            let pot_winners = match winners.get(i) {
                Some(w) if !w.is_empty() => w.clone(),
                _ => pot.eligible.clone(),
            };
            for (seat, share) in split_pot(pot.size, &pot_winners, button, num_seats) {
                if share > 0 {
                    out.push_str(&format!("  {} wins {}\n", label(seat)?, share));
                }
            }
        }
    }
    out.push('\n');
    Ok(out)
}
