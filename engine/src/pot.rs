use serde::{Deserialize, Serialize};

/// One pot at showdown: its size and the seats entitled to contest it.
/// Folded players' chips stay in the pot but folded players are never
/// eligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub size: u32,
    /// Eligible seat indices, ascending.
    pub eligible: Vec<usize>,
}

/// Build main and side pots from total per-seat contributions.
///
/// `contributions` holds `(seat, total_chips_committed, live)` where `live`
/// means the seat has not folded. Contributions are layered by amount: each
/// distinct contribution level forms a pot funded by everyone who committed
/// past the previous level, contestable by the live seats that reached it.
/// Adjacent layers with identical eligible sets collapse into one pot, so a
/// hand with no all-ins yields a single main pot.
pub fn compute_pots(contributions: &[(usize, u32, bool)]) -> Vec<Pot> {
    let mut levels: Vec<u32> = contributions
        .iter()
        .filter(|(_, amount, _)| *amount > 0)
        .map(|(_, amount, _)| *amount)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::new();
    let mut prev = 0u32;
    for level in levels {
        let slice = level - prev;
        let size: u32 = contributions
            .iter()
            .filter(|(_, amount, _)| *amount > prev)
            .map(|(_, amount, _)| slice.min(*amount - prev))
            .sum();
        let mut eligible: Vec<usize> = contributions
            .iter()
            .filter(|(_, amount, live)| *live && *amount >= level)
            .map(|(seat, _, _)| *seat)
            .collect();
        eligible.sort_unstable();

        match pots.last_mut() {
            Some(last) if last.eligible == eligible => last.size += size,
            _ => pots.push(Pot { size, eligible }),
        }
        prev = level;
    }
    pots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pot_when_no_all_in() {
        let pots = compute_pots(&[(0, 200, true), (1, 200, true), (2, 50, false)]);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].size, 450);
        assert_eq!(pots[0].eligible, vec![0, 1]);
    }

    #[test]
    fn test_side_pot_short_stack() {
        // Seat 0 all-in for 5000, seat 1 covered to 10000.
        let pots = compute_pots(&[(0, 5000, true), (1, 10000, true)]);
        assert_eq!(pots.len(), 2);
        assert_eq!(pots[0].size, 10000);
        assert_eq!(pots[0].eligible, vec![0, 1]);
        assert_eq!(pots[1].size, 5000);
        assert_eq!(pots[1].eligible, vec![1]);
    }

    #[test]
    fn test_folded_money_stays_in_merged_pot() {
        // Antes of 10 from six seats, betting only among two survivors.
        let pots = compute_pots(&[
            (0, 210, true),
            (1, 210, true),
            (2, 10, false),
            (3, 10, false),
            (4, 160, false),
            (5, 10, false),
        ]);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].size, 610);
        assert_eq!(pots[0].eligible, vec![0, 1]);
    }

    #[test]
    fn test_uncontested_layer_belongs_to_sole_survivor() {
        let pots = compute_pots(&[(0, 100, false), (1, 500, true), (2, 300, false)]);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].size, 900);
        assert_eq!(pots[0].eligible, vec![1]);
    }
}
