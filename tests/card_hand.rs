//! Card and hand valuation tests.

use bjround::{Card, DealerHand, Hand, Rank, Suit};

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn hand(ranks: &[Rank]) -> Hand {
    ranks.iter().copied().map(card).collect()
}

#[test]
fn nominal_values() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::Queen.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert_eq!(Rank::Ace.value(), 11);
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
}

#[test]
fn ace_nine_is_soft_twenty() {
    let value = hand(&[Rank::Ace, Rank::Nine]).best_total();
    assert_eq!(value.total, 20);
    assert!(value.is_soft);
}

#[test]
fn ace_demoted_when_needed() {
    let value = hand(&[Rank::Ace, Rank::Nine, Rank::Nine]).best_total();
    assert_eq!(value.total, 19);
    assert!(!value.is_soft);
}

#[test]
fn two_aces_and_nine_make_twenty_one() {
    let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    let value = h.best_total();
    assert_eq!(value.total, 21);
    assert!(value.is_soft);
    assert!(!h.is_blackjack());
}

#[test]
fn four_aces() {
    let value = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).best_total();
    assert_eq!(value.total, 14);
    assert!(value.is_soft);
}

#[test]
fn bust_is_never_soft() {
    let h = hand(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(h.value(), 24);
    assert!(h.is_bust());
    assert!(!h.is_soft());

    let h = hand(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(h.value(), 26);
    assert!(!h.is_soft());
}

#[test]
fn blackjack_is_two_cards_only() {
    assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
    assert!(hand(&[Rank::Queen, Rank::Ace]).is_blackjack());

    let three_card = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(three_card.value(), 21);
    assert!(!three_card.is_blackjack());

    let mut h = hand(&[Rank::Ten, Rank::Six]);
    h.add_card(card(Rank::Five));
    assert_eq!(h.value(), 21);
    assert!(!h.is_blackjack());
}

#[test]
fn best_total_is_max_not_exceeding_21_or_minimum() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            for c in Rank::ALL {
                let ranks = [a, b, c];
                let aces = ranks.iter().filter(|r| **r == Rank::Ace).count() as u16;
                let high: u16 = ranks.iter().map(|r| u16::from(r.value())).sum();
                let low = high - 10 * aces;

                let expected = (0..=aces)
                    .map(|k| low + 10 * k)
                    .filter(|t| *t <= 21)
                    .max()
                    .unwrap_or(low);

                let value = hand(&ranks).best_total();
                assert!((low..=high).contains(&value.total), "{ranks:?}");
                assert_eq!(value.total, expected, "{ranks:?}");
            }
        }
    }
}

#[test]
fn take_cards_empties_hand() {
    let mut h = hand(&[Rank::Two, Rank::Three]);
    let cards = h.take_cards();
    assert_eq!(cards.len(), 2);
    assert!(h.is_empty());
    assert_eq!(h.value(), 0);
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Ace));
    dealer.add_card(card(Rank::Six));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.hand().is_soft());

    let cards = dealer.take_cards();
    assert_eq!(cards.len(), 2);
    assert!(!dealer.is_hole_revealed());
    assert!(dealer.up_card().is_none());
}
