use chip_engine::cards::{Card, Rank, Suit};
use chip_engine::player::Action;
use chip_engine::table::{ForcedBets, Table};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

fn six_handed() -> Table {
    let forced = ForcedBets {
        ante: 10,
        small_blind: 25,
        big_blind: 50,
    };
    let mut table = Table::new(forced, 6);
    let stacks = [12_500, 25_000, 10_000, 25_000, 25_000, 15_000];
    for (seat, &stack) in stacks.iter().enumerate() {
        table.sit_down(seat, stack).unwrap();
    }
    table.start_hand(Some(4)).unwrap();
    table
}

#[test]
fn six_max_preflop_order_and_pot() {
    let mut table = six_handed();
    // button 4, SB 5, BB 0: action opens on seat 1
    assert_eq!(table.player_to_act(), Some(1));
    table.take_action(Action::Fold).unwrap();
    table.take_action(Action::Fold).unwrap();
    table.take_action(Action::Raise(150)).unwrap();
    table.take_action(Action::Fold).unwrap();
    table.take_action(Action::Call).unwrap();
    table.take_action(Action::Call).unwrap();
    assert!(!table.is_betting_round_in_progress());
    table.end_betting_round().unwrap();

    // 6 antes plus three stacks of 150
    let pots = table.pots();
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].size, 510);
    assert_eq!(pots[0].eligible, vec![0, 3, 5]);
}

#[test]
fn partial_street_is_middle_of_betting_round() {
    let mut table = six_handed();
    for action in [
        Action::Fold,
        Action::Fold,
        Action::Raise(150),
        Action::Fold,
        Action::Call,
        Action::Call,
    ] {
        table.take_action(action).unwrap();
    }
    table.end_betting_round().unwrap();
    assert!(table.is_at_start_of_betting_round());

    // flop: SB checks, BB bets, the raiser folds, SB still owes a call
    table.take_action(Action::Check).unwrap();
    table.take_action(Action::Bet(50)).unwrap();
    table.take_action(Action::Fold).unwrap();
    assert!(table.is_in_middle_of_betting_round());
    assert_eq!(table.player_to_act(), Some(5));
}

#[test]
fn manual_showdown_awards_side_pots() {
    let forced = ForcedBets {
        ante: 0,
        small_blind: 1,
        big_blind: 2,
    };
    let mut table = Table::new(forced, 6);
    table.sit_down(0, 200).unwrap();
    table.sit_down(1, 100).unwrap();
    table.sit_down(2, 50).unwrap();
    table.start_hand(Some(0)).unwrap();

    // everyone all-in preflop
    table.take_action(Action::Raise(200)).unwrap();
    table.take_action(Action::Call).unwrap();
    table.take_action(Action::Call).unwrap();
    table.end_betting_round().unwrap();
    assert!(table.are_betting_rounds_completed());

    let pots = table.pots();
    assert_eq!(pots.len(), 3);
    assert_eq!(pots[0].size, 150);
    assert_eq!(pots[0].eligible, vec![0, 1, 2]);
    assert_eq!(pots[1].size, 100);
    assert_eq!(pots[1].eligible, vec![0, 1]);
    assert_eq!(pots[2].size, 100);
    assert_eq!(pots[2].eligible, vec![0]);

    // short stack flops a set, the middle stack holds top pair, the
    // covering stack misses
    let community = vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
    ];
    let holes = vec![
        Some([
            Some(card(Rank::King, Suit::Hearts)),
            Some(card(Rank::Queen, Suit::Diamonds)),
        ]),
        Some([
            Some(card(Rank::Ace, Suit::Hearts)),
            Some(card(Rank::Seven, Suit::Hearts)),
        ]),
        Some([
            Some(card(Rank::Two, Suit::Diamonds)),
            Some(card(Rank::Two, Suit::Spades)),
        ]),
        None,
        None,
        None,
    ];
    table.manual_showdown(&community, &holes).unwrap();
    assert_eq!(table.winners(), vec![vec![2], vec![1], vec![0]]);
    let seats = table.seats();
    assert_eq!(seats[2], Some(150));
    assert_eq!(seats[1], Some(100));
    assert_eq!(seats[0], Some(100));
}

#[test]
fn unrevealed_pot_falls_to_first_eligible_seat() {
    let forced = ForcedBets {
        ante: 0,
        small_blind: 1,
        big_blind: 2,
    };
    let mut table = Table::new(forced, 3);
    table.sit_down(0, 100).unwrap();
    table.sit_down(1, 100).unwrap();
    table.start_hand(Some(0)).unwrap();
    table.take_action(Action::Call).unwrap();
    table.take_action(Action::Check).unwrap();
    table.end_betting_round().unwrap();
    for _ in 0..3 {
        table.take_action(Action::Check).unwrap();
        table.take_action(Action::Check).unwrap();
        table.end_betting_round().unwrap();
    }
    assert!(table.are_betting_rounds_completed());

    // nobody shows: the pot goes to the first eligible seat
    table.manual_showdown(&[], &[None, None, None]).unwrap();
    assert_eq!(table.winners(), vec![vec![0]]);
    assert_eq!(table.seats(), vec![Some(102), Some(98), None]);
}

#[test]
fn busted_seat_stands_up_on_next_hand() {
    let forced = ForcedBets {
        ante: 0,
        small_blind: 1,
        big_blind: 2,
    };
    let mut table = Table::new(forced, 3);
    table.sit_down(0, 10).unwrap();
    table.sit_down(1, 10).unwrap();
    table.sit_down(2, 10).unwrap();
    table.start_hand(Some(0)).unwrap();
    table.take_action(Action::Raise(10)).unwrap();
    table.take_action(Action::Call).unwrap();
    table.take_action(Action::Call).unwrap();
    table.end_betting_round().unwrap();
    let community = [
        card(Rank::Two, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
    ];
    let holes = vec![
        Some([
            Some(card(Rank::Ace, Suit::Hearts)),
            Some(card(Rank::Ace, Suit::Spades)),
        ]),
        None,
        None,
    ];
    table.manual_showdown(&community, &holes).unwrap();
    assert_eq!(table.seats(), vec![Some(30), Some(0), Some(0)]);

    // two busted seats leave only one player
    assert!(table.start_hand(None).is_err());
}
