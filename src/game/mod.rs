//! Round engine and state management.

use tracing::{debug, info};

use crate::error::{ConfigError, EngineError, ValidationError};
use crate::hand::{DealerHand, Hand};
use crate::ledger::{Ledger, Payouts, Stats};
use crate::options::GameOptions;
use crate::result::{RoundResult, ShoeStatus};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, GameState};

/// A single-player blackjack table.
///
/// The game owns the shoe, the ledger, and both hands, and drives them through
/// one round at a time: [`place_bet`](Self::place_bet), [`deal`](Self::deal),
/// [`player_action`](Self::player_action), [`advance_dealer`](Self::advance_dealer),
/// then [`result`](Self::result). Settlement happens on whichever step ends
/// the round.
///
/// A round that never reaches [`GameState::Settled`] keeps its stake debited.
/// Before the deal it can be refunded with [`cancel_bet`](Self::cancel_bet).
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    payouts: Payouts,
    shoe: Shoe,
    ledger: Ledger,
    player: Hand,
    dealer: DealerHand,
    state: GameState,
    round: u64,
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with a freshly shuffled shoe seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.shoe_status().remaining, 6 * 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, options.reshuffle_threshold, seed)?;
        Ok(Self::assemble(options, shoe))
    }

    /// Creates a game around an existing shoe, such as a stacked one.
    ///
    /// The shoe's own deck count and threshold take precedence over the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_shoe(options: GameOptions, shoe: Shoe) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::assemble(options, shoe))
    }

    fn assemble(options: GameOptions, shoe: Shoe) -> Self {
        info!(
            decks = shoe.deck_count(),
            threshold = shoe.reshuffle_threshold(),
            balance = options.starting_balance,
            "table opened"
        );
        Self {
            payouts: Payouts::from_options(&options),
            ledger: Ledger::from_options(&options),
            options,
            shoe,
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: GameState::AwaitingBet,
            round: 0,
            last_result: None,
        }
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), ValidationError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ValidationError::InvalidState(self.state))
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the player's balance in minor units.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    /// Returns the player's lifetime statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.ledger.stats()
    }

    /// Returns the player's current hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's current hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the current round number. Zero before the first bet.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }

    /// Returns the shoe counters.
    #[must_use]
    pub fn shoe_status(&self) -> ShoeStatus {
        ShoeStatus {
            remaining: self.shoe.remaining(),
            discarded: self.shoe.discarded(),
            deck_count: self.shoe.deck_count(),
            reshuffles: self.shoe.reshuffles(),
        }
    }

    /// Rebuilds and reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are on the table.
    pub fn reshuffle(&mut self) -> Result<(), ValidationError> {
        match self.state {
            GameState::AwaitingBet | GameState::BetPlaced => {
                self.shoe.reshuffle();
                Ok(())
            }
            other => Err(ValidationError::InvalidState(other)),
        }
    }

    /// Adds funds to the player's balance between rounds.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero amount or a balance overflow.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, EngineError> {
        self.ledger.deposit(amount)
    }

    /// Removes funds from the player's balance. A stake on the table is not
    /// withdrawable.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero amount or an amount above the balance.
    pub fn withdraw(&mut self, amount: u64) -> Result<u64, ValidationError> {
        self.ledger.withdraw(amount)
    }

    /// Clears a settled round, returning its cards to the discard pile.
    ///
    /// Does nothing when no round is on the table.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn clear_round(&mut self) -> Result<(), ValidationError> {
        match self.state {
            GameState::AwaitingBet => Ok(()),
            GameState::Settled => {
                self.shoe.discard(self.player.take_cards());
                self.shoe.discard(self.dealer.take_cards());
                self.last_result = None;
                self.state = GameState::AwaitingBet;
                debug!(round = self.round, discarded = self.shoe.discarded(), "round cleared");
                Ok(())
            }
            other => Err(ValidationError::InvalidState(other)),
        }
    }
}
