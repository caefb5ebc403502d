//! The shoe: one or more shuffled decks with a discard pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, trace, warn};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{ConfigError, FatalEngineError};

/// A multi-deck shoe.
///
/// Cards are drawn from the end of the draw pile. Cards that have been played
/// come back through [`Shoe::discard`], so between reshuffles
/// `remaining + discarded + cards in hands` equals [`Shoe::capacity`].
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    discard: Vec<Card>,
    deck_count: u8,
    reshuffle_threshold: usize,
    reshuffles: u32,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds and shuffles a shoe of `deck_count` decks.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck_count` or `reshuffle_threshold` is zero.
    pub fn new(deck_count: u8, reshuffle_threshold: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::check(deck_count, reshuffle_threshold)?;
        let mut shoe = Self {
            cards: build(deck_count),
            discard: Vec::new(),
            deck_count,
            reshuffle_threshold,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.shuffle();
        Ok(shoe)
    }

    /// Creates a shoe whose next draws are exactly `draws`, in draw order.
    ///
    /// The first card of `draws` is the first card drawn. The rest of the
    /// `deck_count` decks sits shuffled beneath them, so the shoe still holds
    /// every card exactly [`Shoe::capacity`] accounts for.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck_count` or `reshuffle_threshold` is zero, or if
    /// a card appears in `draws` more often than the decks contain it.
    pub fn stacked(
        deck_count: u8,
        reshuffle_threshold: usize,
        seed: u64,
        draws: &[Card],
    ) -> Result<Self, ConfigError> {
        Self::check(deck_count, reshuffle_threshold)?;
        let mut rest = build(deck_count);
        for &card in draws {
            let Some(index) = rest.iter().position(|&c| c == card) else {
                return Err(ConfigError::StackedCardOverused { card, deck_count });
            };
            rest.swap_remove(index);
        }

        let mut shoe = Self {
            cards: rest,
            discard: Vec::new(),
            deck_count,
            reshuffle_threshold,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.shuffle();
        shoe.cards.extend(draws.iter().rev());
        Ok(shoe)
    }

    const fn check(deck_count: u8, reshuffle_threshold: usize) -> Result<(), ConfigError> {
        if deck_count == 0 {
            return Err(ConfigError::ZeroDecks);
        }
        if reshuffle_threshold == 0 {
            return Err(ConfigError::ZeroReshuffleThreshold);
        }
        Ok(())
    }

    /// Applies a uniform random permutation to the draw pile.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws one card.
    ///
    /// An empty draw pile is refilled first: from the discard pile when it holds
    /// cards, otherwise by rebuilding the full shoe.
    ///
    /// # Errors
    ///
    /// Returns [`FatalEngineError::ShoeExhausted`] if no card could be produced.
    pub fn draw(&mut self) -> Result<Card, FatalEngineError> {
        if self.cards.is_empty() {
            self.refill();
        }
        let Some(card) = self.cards.pop() else {
            error!(deck_count = self.deck_count, "shoe exhausted");
            return Err(FatalEngineError::ShoeExhausted);
        };
        trace!(%card, remaining = self.cards.len(), "draw");
        Ok(card)
    }

    fn refill(&mut self) {
        self.reshuffles += 1;
        if self.discard.is_empty() {
            warn!(deck_count = self.deck_count, "shoe empty, rebuilding");
            self.cards = build(self.deck_count);
        } else {
            warn!(reclaimed = self.discard.len(), "shoe empty, reclaiming discards");
            self.cards.append(&mut self.discard);
        }
        self.shuffle();
    }

    /// Returns played cards to the discard pile.
    pub fn discard<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discard.extend(cards);
    }

    /// Number of cards left in the draw pile.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// Number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.deck_count as usize * DECK_SIZE
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Minimum cards required to start a round without reshuffling.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> usize {
        self.reshuffle_threshold
    }

    /// Number of reshuffles so far, proactive or implicit.
    #[must_use]
    pub const fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Returns whether fewer than the threshold of cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.remaining() < self.reshuffle_threshold
    }

    /// Rebuilds the full shoe and shuffles it, dropping the discard pile.
    ///
    /// Cards still held in hands are not part of the shoe's count.
    pub fn reshuffle(&mut self) {
        self.cards = build(self.deck_count);
        self.discard.clear();
        self.shuffle();
        self.reshuffles += 1;
        info!(deck_count = self.deck_count, cards = self.cards.len(), "shoe reshuffled");
    }
}

fn build(deck_count: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

    for _ in 0..deck_count {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards
}
