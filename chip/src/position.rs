//! Position labels, anchored at the button.
//!
//! Labels are computed from the hand's original (pre-fold) seating, so a
//! folded player's seat keeps reporting the position it had when the hand
//! started.

use std::fmt;

use crate::error::ParseError;

/// Canonical seat position for the current hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Pos {
    Button,
    SmallBlind,
    BigBlind,
    UnderTheGun,
    UnderTheGunPlusOne,
    MiddlePosition,
    Lojack,
    Hijack,
    CutOff,
    /// Heads-up only: the button is also the small blind.
    ButtonSmallBlind,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Pos::Button => "BTN",
            Pos::SmallBlind => "SB",
            Pos::BigBlind => "BB",
            Pos::UnderTheGun => "UTG",
            Pos::UnderTheGunPlusOne => "UTG+1",
            Pos::MiddlePosition => "MP",
            Pos::Lojack => "LJ",
            Pos::Hijack => "HJ",
            Pos::CutOff => "CO",
            Pos::ButtonSmallBlind => "BTN/SB",
        };
        f.write_str(label)
    }
}

use Pos::*;

/// Position order starting at the button, per live-player count.
fn ordering(players: usize) -> Option<&'static [Pos]> {
    match players {
        2 => Some(&[ButtonSmallBlind, BigBlind]),
        3 => Some(&[Button, SmallBlind, BigBlind]),
        4 => Some(&[Button, SmallBlind, BigBlind, UnderTheGun]),
        5 => Some(&[Button, SmallBlind, BigBlind, UnderTheGun, CutOff]),
        6 => Some(&[Button, SmallBlind, BigBlind, UnderTheGun, Hijack, CutOff]),
        7 => Some(&[Button, SmallBlind, BigBlind, UnderTheGun, Lojack, Hijack, CutOff]),
        8 => Some(&[
            Button,
            SmallBlind,
            BigBlind,
            UnderTheGun,
            MiddlePosition,
            Lojack,
            Hijack,
            CutOff,
        ]),
        9 => Some(&[
            Button,
            SmallBlind,
            BigBlind,
            UnderTheGun,
            UnderTheGunPlusOne,
            MiddlePosition,
            Lojack,
            Hijack,
            CutOff,
        ]),
        _ => None,
    }
}

/// Resolve the position label for `seat` given the hand's original seating
/// and the button seat. `Ok(None)` means the seat was empty when the hand
/// started. A player count with no ordering table is a fatal error.
pub fn resolve_position(
    initial_seating: &[bool],
    button: usize,
    seat: usize,
) -> Result<Option<Pos>, ParseError> {
    if !initial_seating.get(seat).copied().unwrap_or(false) {
        return Ok(None);
    }
    let players = initial_seating.iter().filter(|&&s| s).count();
    let order = ordering(players).ok_or(ParseError::UnsupportedPlayerCount(players))?;

    // ordinal among dealt-in seats, counting up to and including the index
    let ordinal =
        |up_to: usize| initial_seating[..=up_to.min(initial_seating.len() - 1)]
            .iter()
            .filter(|&&s| s)
            .count();
    let offset = (ordinal(seat) + players - ordinal(button)) % players;
    Ok(Some(order[offset]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_max_labels() {
        let seating = [true; 6];
        let labels: Vec<String> = (0..6)
            .map(|seat| resolve_position(&seating, 3, seat).unwrap().unwrap().to_string())
            .collect();
        assert_eq!(labels, vec!["UTG", "HJ", "CO", "BTN", "SB", "BB"]);
    }

    #[test]
    fn test_empty_seats_are_skipped_in_counting() {
        // five dealt in around an empty seat 2
        let seating = [true, true, false, true, true, true];
        assert_eq!(resolve_position(&seating, 3, 2).unwrap(), None);
        assert_eq!(resolve_position(&seating, 3, 3).unwrap(), Some(Pos::Button));
        assert_eq!(resolve_position(&seating, 3, 4).unwrap(), Some(Pos::SmallBlind));
        assert_eq!(resolve_position(&seating, 3, 5).unwrap(), Some(Pos::BigBlind));
        assert_eq!(resolve_position(&seating, 3, 0).unwrap(), Some(Pos::UnderTheGun));
        assert_eq!(resolve_position(&seating, 3, 1).unwrap(), Some(Pos::CutOff));
    }

    #[test]
    fn test_heads_up_button_is_small_blind() {
        let seating = [true, false, false, true, false, false];
        assert_eq!(
            resolve_position(&seating, 0, 0).unwrap(),
            Some(Pos::ButtonSmallBlind)
        );
        assert_eq!(resolve_position(&seating, 0, 3).unwrap(), Some(Pos::BigBlind));
    }

    #[test]
    fn test_full_ring_labels() {
        let seating = [true; 9];
        let labels: Vec<String> = (0..9)
            .map(|seat| resolve_position(&seating, 0, seat).unwrap().unwrap().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["BTN", "SB", "BB", "UTG", "UTG+1", "MP", "LJ", "HJ", "CO"]
        );
    }

    #[test]
    fn test_unsupported_count_is_fatal() {
        let seating = [true, false, false, false, false, false];
        assert_eq!(
            resolve_position(&seating, 0, 0),
            Err(ParseError::UnsupportedPlayerCount(1))
        );
    }
}
