use chip_engine::cards::{Card, Rank, Suit};
use chip_engine::hand::{compare_hands, evaluate_hand, Category};
use std::cmp::Ordering;

fn cards(spec: &[(Rank, Suit)]) -> Vec<Card> {
    spec.iter().map(|&(rank, suit)| Card { rank, suit }).collect()
}

#[test]
fn full_house_beats_flush() {
    use Rank::*;
    use Suit::*;
    let board = [
        (Nine, Hearts),
        (Nine, Clubs),
        (Four, Hearts),
        (Two, Hearts),
        (King, Diamonds),
    ];
    let mut boat = cards(&board);
    boat.extend(cards(&[(Nine, Spades), (King, Clubs)]));
    let mut flush = cards(&board);
    flush.extend(cards(&[(Ace, Hearts), (Seven, Hearts)]));

    let boat = evaluate_hand(&boat);
    let flush = evaluate_hand(&flush);
    assert_eq!(boat.category, Category::FullHouse);
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(compare_hands(&boat, &flush), Ordering::Greater);
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    use Rank::*;
    use Suit::*;
    let hand = cards(&[
        (Ace, Clubs),
        (Two, Clubs),
        (Three, Clubs),
        (Four, Clubs),
        (Five, Clubs),
        (King, Hearts),
        (King, Diamonds),
    ]);
    let strength = evaluate_hand(&hand);
    assert_eq!(strength.category, Category::StraightFlush);
    // ace plays low: the straight is five high
    assert_eq!(strength.kickers[0], 5);
}

#[test]
fn board_plays_for_both_players() {
    use Rank::*;
    use Suit::*;
    let board = [
        (Ace, Hearts),
        (King, Clubs),
        (Queen, Hearts),
        (Jack, Spades),
        (Ten, Diamonds),
    ];
    let mut a = cards(&board);
    a.extend(cards(&[(Two, Clubs), (Three, Diamonds)]));
    let mut b = cards(&board);
    b.extend(cards(&[(Seven, Spades), (Eight, Hearts)]));
    assert_eq!(
        compare_hands(&evaluate_hand(&a), &evaluate_hand(&b)),
        Ordering::Equal
    );
}

#[test]
fn kicker_decides_between_equal_pairs() {
    use Rank::*;
    use Suit::*;
    let board = [
        (Queen, Hearts),
        (Queen, Clubs),
        (Seven, Diamonds),
        (Four, Spades),
        (Two, Hearts),
    ];
    let mut ace_kicker = cards(&board);
    ace_kicker.extend(cards(&[(Ace, Clubs), (Nine, Diamonds)]));
    let mut king_kicker = cards(&board);
    king_kicker.extend(cards(&[(King, Spades), (Nine, Hearts)]));
    assert_eq!(
        compare_hands(&evaluate_hand(&ace_kicker), &evaluate_hand(&king_kicker)),
        Ordering::Greater
    );
}
