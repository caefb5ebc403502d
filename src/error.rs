//! Error types for engine operations.
//!
//! Errors fall into three groups:
//! - [`ConfigError`] rejects construction parameters.
//! - [`ValidationError`] rejects a single request and leaves the engine untouched,
//!   so the caller may retry with corrected input.
//! - [`FatalEngineError`] reports a broken shoe or ledger invariant. It is never a
//!   game outcome and should be surfaced to the host as a defect.

use thiserror::Error;

use crate::card::Card;
use crate::game::GameState;

/// Errors raised while validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("deck count must be at least 1")]
    ZeroDecks,
    /// The reshuffle threshold must be at least one card.
    #[error("reshuffle threshold must be at least 1")]
    ZeroReshuffleThreshold,
    /// A payout ratio has a zero denominator.
    #[error("payout ratio denominator is zero")]
    ZeroPayoutDenominator,
    /// The table minimum must be positive.
    #[error("minimum bet must be at least 1 minor unit")]
    ZeroMinimumBet,
    /// A stacked shoe lists a card more often than its decks hold it.
    #[error("stacked card {card} exceeds the {deck_count}-deck shoe")]
    StackedCardOverused {
        /// The overused card.
        card: Card,
        /// Decks in the shoe.
        deck_count: u8,
    },
    /// The table maximum is below the table minimum.
    #[error("maximum bet {max} is below minimum bet {min}")]
    BetLimitsInverted {
        /// Configured minimum.
        min: u64,
        /// Configured maximum.
        max: u64,
    },
}

/// A rejected request. No state has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is below the table minimum.
    #[error("bet {amount} is below the table minimum {min}")]
    BelowMinimum {
        /// Requested bet.
        amount: u64,
        /// Table minimum.
        min: u64,
    },
    /// Bet is above the table maximum.
    #[error("bet {amount} is above the table maximum {max}")]
    AboveMaximum {
        /// Requested bet.
        amount: u64,
        /// Table maximum.
        max: u64,
    },
    /// Amount exceeds the available balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Requested amount.
        requested: u64,
        /// Current balance.
        available: u64,
    },
    /// A bet is already outstanding.
    #[error("a bet is already outstanding")]
    BetOutstanding,
    /// There is no outstanding bet to cancel or settle.
    #[error("no outstanding bet")]
    NoOutstandingBet,
    /// The action is not legal in the current state.
    #[error("action not allowed in state {0:?}")]
    InvalidState(GameState),
    /// Surrender is disabled, or the hand has already drawn.
    #[error("surrender is not offered")]
    SurrenderNotOffered,
    /// The player hand already stands on 21 and cannot draw.
    #[error("hand is complete")]
    HandComplete,
    /// Deposit or withdrawal of zero.
    #[error("amount is zero")]
    ZeroAmount,
}

/// A broken shoe or ledger invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FatalEngineError {
    /// The shoe has no card to draw and nothing to rebuild from.
    #[error("shoe exhausted with nothing to reclaim")]
    ShoeExhausted,
    /// A credit would overflow the balance.
    #[error("balance overflow")]
    BalanceOverflow,
    /// A round reached settlement without an outstanding wager.
    #[error("round reached settlement without a wager")]
    MissingWager,
}

/// Error returned by operations that can both reject input and hit an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The request was rejected; retry with corrected input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An engine invariant was violated.
    #[error(transparent)]
    Fatal(#[from] FatalEngineError),
}

impl EngineError {
    /// Returns whether this error is a recoverable validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
