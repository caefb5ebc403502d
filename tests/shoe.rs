//! Shoe lifecycle tests.

use std::collections::HashSet;

use bjround::{Card, ConfigError, DECK_SIZE, Rank, Shoe, Suit};

#[test]
fn single_deck_has_every_card_once() {
    let mut shoe = Shoe::new(1, 15, 3).unwrap();
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let mut seen = HashSet::new();
    for expected_left in (0..DECK_SIZE).rev() {
        let card = shoe.draw().unwrap();
        assert!(seen.insert(card), "duplicate {card}");
        assert_eq!(shoe.remaining(), expected_left);
    }

    for rank in Rank::ALL {
        assert_eq!(seen.iter().filter(|c| c.rank == rank).count(), 4);
    }
    for suit in Suit::ALL {
        assert_eq!(seen.iter().filter(|c| c.suit == suit).count(), 13);
    }
    assert_eq!(shoe.reshuffles(), 0);
}

#[test]
fn empty_shoe_rebuilds_once() {
    let mut shoe = Shoe::new(1, 15, 9).unwrap();
    for _ in 0..DECK_SIZE {
        shoe.draw().unwrap();
    }
    assert_eq!(shoe.remaining(), 0);

    shoe.draw().unwrap();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);
}

#[test]
fn empty_shoe_reclaims_discards_first() {
    let mut shoe = Shoe::new(1, 15, 4).unwrap();
    for _ in 0..DECK_SIZE {
        let card = shoe.draw().unwrap();
        shoe.discard([card]);
    }
    assert_eq!(shoe.discarded(), DECK_SIZE);

    shoe.draw().unwrap();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.discarded(), 0);
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);
}

#[test]
fn multi_deck_capacity() {
    let shoe = Shoe::new(6, 15, 1).unwrap();
    assert_eq!(shoe.capacity(), 312);
    assert_eq!(shoe.remaining(), 312);
    assert_eq!(shoe.deck_count(), 6);
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(2, 15, 77).unwrap();
    let mut b = Shoe::new(2, 15, 77).unwrap();
    let mut c = Shoe::new(2, 15, 78).unwrap();

    let draw_a: Vec<Card> = (0..20).map(|_| a.draw().unwrap()).collect();
    let draw_b: Vec<Card> = (0..20).map(|_| b.draw().unwrap()).collect();
    let draw_c: Vec<Card> = (0..20).map(|_| c.draw().unwrap()).collect();

    assert_eq!(draw_a, draw_b);
    assert_ne!(draw_a, draw_c);
}

#[test]
fn stacked_shoe_draws_in_order() {
    let draws = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let mut shoe = Shoe::stacked(1, 1, 0, &draws).unwrap();
    assert_eq!(shoe.remaining(), DECK_SIZE);
    for expected in draws {
        assert_eq!(shoe.draw().unwrap(), expected);
    }

    let mut seen: HashSet<Card> = draws.into_iter().collect();
    while shoe.remaining() > 0 {
        let card = shoe.draw().unwrap();
        assert!(seen.insert(card), "duplicate {card}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert_eq!(shoe.reshuffles(), 0);
}

#[test]
fn stacked_shoe_rejects_cards_beyond_its_decks() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(
        Shoe::stacked(1, 1, 0, &[ace, ace]).unwrap_err(),
        ConfigError::StackedCardOverused {
            card: ace,
            deck_count: 1
        }
    );

    let shoe = Shoe::stacked(2, 1, 0, &[ace, ace]).unwrap();
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE);
    assert!(Shoe::stacked(2, 1, 0, &[ace; 3]).is_err());
}

#[test]
fn needs_reshuffle_below_threshold() {
    let mut shoe = Shoe::new(1, 15, 5).unwrap();
    for _ in 0..(DECK_SIZE - 15) {
        shoe.draw().unwrap();
    }
    assert_eq!(shoe.remaining(), 15);
    assert!(!shoe.needs_reshuffle());

    shoe.draw().unwrap();
    assert!(shoe.needs_reshuffle());

    shoe.discard([Card::new(Rank::Four, Suit::Hearts)]);
    shoe.reshuffle();
    assert!(!shoe.needs_reshuffle());
    assert_eq!(shoe.remaining(), DECK_SIZE);
    assert_eq!(shoe.discarded(), 0);
    assert_eq!(shoe.reshuffles(), 1);
}

#[test]
fn invalid_construction() {
    assert_eq!(Shoe::new(0, 15, 1).unwrap_err(), ConfigError::ZeroDecks);
    assert_eq!(
        Shoe::new(1, 0, 1).unwrap_err(),
        ConfigError::ZeroReshuffleThreshold
    );
    assert_eq!(
        Shoe::stacked(0, 1, 1, &[]).unwrap_err(),
        ConfigError::ZeroDecks
    );
}
