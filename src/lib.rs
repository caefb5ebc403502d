//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against an
//! automated dealer: betting, the deal and naturals check, player decisions,
//! dealer play, and settlement in integer minor units.
//!
//! # Example
//!
//! ```
//! use bjround::{Action, Game, GameOptions, GameState};
//!
//! let options = GameOptions::default().with_starting_balance(1_000);
//! let mut game = Game::new(options, 42).unwrap();
//!
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//! if game.state() == GameState::PlayerActing {
//!     game.player_action(Action::Stand).unwrap();
//! }
//! game.advance_dealer().unwrap();
//!
//! let result = game.result().unwrap();
//! assert_eq!(result.balance_after, game.balance());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ConfigError, EngineError, FatalEngineError, ValidationError};
pub use game::{Action, Game, GameState};
pub use hand::{DealerHand, Hand, HandValue, MAX_TOTAL};
pub use ledger::{Dollars, Ledger, Payouts, Settlement, Stats, Wager};
pub use options::{GameOptions, PayoutRatio, RoundingMode};
pub use result::{ActionView, DealView, DealerView, Outcome, RoundHandle, RoundResult, ShoeStatus};
pub use shoe::Shoe;
