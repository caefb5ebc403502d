//! Game state types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// No bet placed for the next round.
    AwaitingBet,
    /// Bet debited, cards not yet dealt.
    BetPlaced,
    /// Waiting for player decisions.
    PlayerActing,
    /// Player stood; the dealer plays out their hand.
    DealerActing,
    /// Round is over and the wager has been settled.
    Settled,
}

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Give up half the stake and end the round.
    Surrender,
}
