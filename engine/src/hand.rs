use std::cmp::Ordering;

use crate::cards::{Card, Suit};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Evaluate the best five-card poker hand from the given cards.
///
/// Accepts any number of cards up to seven; a showdown adjudicated before
/// the board is complete simply evaluates what is on the table. With fewer
/// than five cards only made categories that fit (pairs, trips, quads) or
/// high card can result.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        by_suit[suit_index(c.suit)].push(r);
    }

    let flush_suit = (0..4).find(|&s| by_suit[s].len() >= 5);

    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable();
        ranks.dedup();
        if let Some(high) = detect_straight_high(&ranks) {
            return HandStrength {
                category: Category::StraightFlush,
                kickers: [high, 0, 0, 0, 0],
            };
        }
    }

    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        };
    }

    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return HandStrength {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        };
    }

    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks[..5]);
        return HandStrength {
            category: Category::Flush,
            kickers: k,
        };
    }

    let mut uniq: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    uniq.sort_unstable();
    if let Some(high) = detect_straight_high(&uniq) {
        return HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    let (trips, pairs, singles) = classify_multiples(&rank_counts);
    if let Some(t) = trips.first().copied() {
        let mut remain: Vec<u8> = pairs.iter().chain(singles.iter()).copied().collect();
        remain.sort_unstable_by(|a, b| b.cmp(a));
        let k = [
            t,
            remain.first().copied().unwrap_or(0),
            remain.get(1).copied().unwrap_or(0),
            0,
            0,
        ];
        return HandStrength {
            category: Category::ThreeOfAKind,
            kickers: k,
        };
    }
    if pairs.len() >= 2 {
        let mut prs = pairs.clone();
        prs.sort_unstable_by(|a, b| b.cmp(a));
        let mut rest = singles.clone();
        rest.extend_from_slice(&prs[2..]);
        rest.sort_unstable_by(|a, b| b.cmp(a));
        let k = [prs[0], prs[1], rest.first().copied().unwrap_or(0), 0, 0];
        return HandStrength {
            category: Category::TwoPair,
            kickers: k,
        };
    }
    if let Some(p) = pairs.first().copied() {
        let mut rest = singles.clone();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        let mut k = [p, 0, 0, 0, 0];
        for i in 0..3 {
            k[i + 1] = rest.get(i).copied().unwrap_or(0);
        }
        return HandStrength {
            category: Category::OnePair,
            kickers: k,
        };
    }

    let mut highs = singles;
    highs.sort_unstable_by(|a, b| b.cmp(a));
    let mut k = [0u8; 5];
    for (i, slot) in k.iter_mut().enumerate() {
        *slot = highs.get(i).copied().unwrap_or(0);
    }
    HandStrength {
        category: Category::HighCard,
        kickers: k,
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

// `ranks` must be sorted ascending and deduplicated. Returns the high card
// of the best straight, counting the wheel (A-2-3-4-5).
fn detect_straight_high(ranks: &[u8]) -> Option<u8> {
    if ranks.is_empty() {
        return None;
    }
    let mut extended = ranks.to_vec();
    if ranks.contains(&14) {
        extended.insert(0, 1); // ace plays low in the wheel
    }
    let mut best = None;
    let mut run = 1usize;
    for w in extended.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            if run >= 5 {
                best = Some(w[1]);
            }
        } else {
            run = 1;
        }
    }
    best
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] >= 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trip = (2..=14u8).rev().find(|&r| rank_counts[r as usize] >= 3)?;
    let pair = (2..=14u8)
        .rev()
        .find(|&r| r != trip && rank_counts[r as usize] >= 2)?;
    Some((trip, pair))
}

// Returns (trip ranks, pair ranks, single ranks), each high -> low.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            0 => {}
            1 => singles.push(r),
            2 => pairs.push(r),
            _ => trips.push(r),
        }
    }
    (trips, pairs, singles)
}
