//! The interpreter: settings/stacks/actions line parsers and the hand loop
//! that replays a whole document against the table engine.

use chip_engine::record::HandRecord;
use chip_engine::table::{ForcedBets, Table};

use crate::driver::{self, ActionToken, StackUpdate};
use crate::error::ParseError;
use crate::format;
use crate::lines;
use crate::table_api::TableApi;
use crate::token::{self, parse_chips};

/// Interpreter knobs. `strict_reveals` rejects showdown reveal lines whose
/// card count is not exactly two per live seat; by default ragged input is
/// accepted and the tail dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub strict_reveals: bool,
}

/// Table settings from the first document line, with defaults for anything
/// malformed. The button is 0-based here; the input is 1-based.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TableSettings {
    pub small_blind: u32,
    pub big_blind: u32,
    pub ante: u32,
    pub num_seats: usize,
    pub button_seat: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            small_blind: 1,
            big_blind: 2,
            ante: 0,
            num_seats: 6,
            button_seat: 4,
        }
    }
}

impl TableSettings {
    pub fn forced_bets(&self) -> ForcedBets {
        ForcedBets {
            ante: self.ante,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
        }
    }
}

/// Parse `smallBlind bigBlind [ante] numSeats buttonSeat`. Settings are
/// best-effort metadata: a line that is not 4 or 5 numeric tokens falls back
/// to the defaults entirely, and a zero where zero makes no sense falls back
/// per field.
pub fn parse_table_settings(line: &str) -> TableSettings {
    let defaults = TableSettings::default();
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(tokens.len() == 4 || tokens.len() == 5) || !tokens.iter().all(|t| token::is_numeric_token(t))
    {
        return defaults;
    }

    let nonzero = |tok: &str| parse_chips(tok).filter(|&v| v > 0);
    let small_blind = nonzero(tokens[0]).unwrap_or(defaults.small_blind);
    let big_blind = nonzero(tokens[1]).unwrap_or(defaults.big_blind);
    let (ante, seats_tok, button_tok) = if tokens.len() == 5 {
        (parse_chips(tokens[2]).unwrap_or(0), tokens[3], tokens[4])
    } else {
        (0, tokens[2], tokens[3])
    };
    let num_seats = nonzero(seats_tok).unwrap_or(defaults.num_seats as u32) as usize;
    // input button is 1-based
    let button_seat = nonzero(button_tok)
        .map(|v| (v - 1) as usize)
        .unwrap_or(defaults.button_seat);
    TableSettings {
        small_blind,
        big_blind,
        ante,
        num_seats,
        button_seat,
    }
}

/// Parse a stacks line into per-seat updates. `-` keeps the seat as is;
/// a malformed token is treated the same way.
pub fn parse_player_stacks(line: &str) -> Vec<StackUpdate> {
    line.split_whitespace()
        .map(|tok| {
            if tok == lines::SAME {
                StackUpdate::Keep
            } else {
                parse_chips(tok).map_or(StackUpdate::Keep, StackUpdate::Set)
            }
        })
        .collect()
}

/// Parse an actions line. Any token that is neither an action letter nor a
/// number is a fatal error.
pub fn parse_player_actions(line: &str) -> Result<Vec<ActionToken>, ParseError> {
    line.split_whitespace()
        .map(|tok| {
            if tok.eq_ignore_ascii_case("f") {
                Ok(ActionToken::Fold)
            } else if tok.eq_ignore_ascii_case("x") {
                Ok(ActionToken::Check)
            } else if tok.eq_ignore_ascii_case("c") {
                Ok(ActionToken::Call)
            } else if let Some(amount) = parse_chips(tok) {
                Ok(ActionToken::Amount(amount))
            } else {
                Err(ParseError::UnknownAction(tok.to_string()))
            }
        })
        .collect()
}

/// Interpret a whole CHIP document into its transcript.
///
/// # Examples
///
/// ```
/// let input = "25 50 10 6 5\n12.5k 25k 10k 25k 25k 15k\nf f 150 f c c";
/// let transcript = chip::parse(input).unwrap();
/// assert!(transcript.starts_with("25/50 (ante: 10) - 6 seats\n"));
/// assert!(transcript.contains("  CO raises to 150\n"));
/// ```
pub fn parse(input: &str) -> Result<String, ParseError> {
    parse_document(input, ParseOptions::default()).map(|(transcript, _)| transcript)
}

/// Like [`parse`], but also returns the hand records the engine accumulated,
/// for JSONL logging.
pub fn parse_document(
    input: &str,
    options: ParseOptions,
) -> Result<(String, Vec<HandRecord>), ParseError> {
    let lines: Vec<&str> = input
        .lines()
        .filter(|line| !line.trim().is_empty() && !lines::is_noise_line(line))
        .collect();
    let settings = parse_table_settings(lines.first().copied().unwrap_or(""));
    let mut table = Table::new(settings.forced_bets(), settings.num_seats);
    let transcript = run(&mut table, &lines, settings.button_seat, options)?;
    let records = TableApi::take_records(&mut table);
    Ok((transcript, records))
}

/// The hand loop, generic over the engine so tests can drive a fake table.
pub fn run<T: TableApi>(
    table: &mut T,
    lines: &[&str],
    button_seat: usize,
    options: ParseOptions,
) -> Result<String, ParseError> {
    let mut out = String::new();
    out.push_str(&format::forced_bets(table));

    let stacks = parse_player_stacks(lines.get(1).copied().unwrap_or(""));
    driver::update_stacks(table, &stacks)?;
    out.push_str(&format::player_stacks(table));

    table.start_hand(Some(button_seat))?;
    out.push_str(&format::player_positions(table)?);

    let mut community: Vec<chip_engine::cards::Card> = Vec::new();

    for &line in lines.iter().skip(2) {
        if !table.is_hand_in_progress() {
            // hand boundary: an optional stacks line is consumed here and
            // never reinterpreted as actions
            let consumed = if lines::is_stacks_line(line) {
                driver::update_stacks(table, &parse_player_stacks(line))?;
                true
            } else {
                false
            };
            out.push_str(&format::player_stacks(table));
            table.start_hand(None)?;
            out.push_str(&format::player_positions(table)?);
            community.clear();
            if consumed {
                continue;
            }
        }

        if lines::is_actions_line(line) {
            let actions = parse_player_actions(line)?;
            let outcomes = driver::take_actions(table, &actions)?;
            out.push_str(&format::player_actions(&outcomes));
            if !table.is_betting_round_in_progress() {
                table.end_betting_round()?;
                let pots = table.pots();
                if table.are_betting_rounds_completed()
                    && pots.first().is_some_and(|p| p.eligible.len() == 1)
                {
                    // everyone folded to one player: showdown without a reveal
                    table.showdown()?;
                    out.push_str(&format::winners(table, &pots)?);
                }
            }
        } else if lines::is_cards_line(line) {
            let cards = token::parse_cards(line).unwrap_or_default();
            if table.are_betting_rounds_completed() {
                let holes = driver::reveal_hole_cards(table, &cards, options.strict_reveals)?;
                out.push_str(&format::hole_cards(table, &holes)?);
                let pots = table.pots();
                table.manual_showdown(&community, &holes)?;
                out.push_str(&format::winners(table, &pots)?);
            } else if table.is_in_middle_of_betting_round() {
                out.push_str(&format::player_to_act(table, &cards)?);
            } else if table.is_at_start_of_betting_round() {
                let mut revealed = Vec::with_capacity(cards.len());
                for card in &cards {
                    revealed.push(card.ok_or(ParseError::HiddenCommunityCard)?);
                }
                community.extend(revealed);
                out.push_str(&format::community_cards(table, &cards));
            }
        }
        // anything else is inert
    }

    Ok(out)
}
