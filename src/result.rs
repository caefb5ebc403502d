//! Round outcomes and the views handed to presentation layers.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::game::GameState;
use crate::hand::Hand;
use crate::ledger::Stats;

/// Result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Player natural against a dealer without one.
    PlayerBlackjack,
    /// Player wins on total or dealer bust.
    PlayerWin,
    /// Tie.
    Push,
    /// Dealer wins on total or with a natural.
    DealerWin,
    /// Player busted; the dealer never acts.
    PlayerBust,
    /// Player surrendered half the stake.
    Surrendered,
}

impl Outcome {
    /// Resolves a finished round from the two hands.
    ///
    /// A player bust loses before anything else is considered, then a dealer bust
    /// wins, then the higher total wins and equal totals push. Naturals are
    /// resolved separately right after the deal.
    #[must_use]
    pub fn compare(player: &Hand, dealer: &Hand) -> Self {
        if player.is_bust() {
            return Self::PlayerBust;
        }
        if dealer.is_bust() {
            return Self::PlayerWin;
        }
        match player.value().cmp(&dealer.value()) {
            core::cmp::Ordering::Greater => Self::PlayerWin,
            core::cmp::Ordering::Less => Self::DealerWin,
            core::cmp::Ordering::Equal => Self::Push,
        }
    }

    /// Resolves the naturals check. Returns `None` when neither side has one.
    #[must_use]
    pub fn naturals(player: &Hand, dealer: &Hand) -> Option<Self> {
        match (player.is_blackjack(), dealer.is_blackjack()) {
            (true, true) => Some(Self::Push),
            (true, false) => Some(Self::PlayerBlackjack),
            (false, true) => Some(Self::DealerWin),
            (false, false) => None,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::PlayerBlackjack | Self::PlayerWin)
    }
}

/// Identifies an accepted bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundHandle {
    /// Round number, starting at 1.
    pub round: u64,
    /// Stake in minor units.
    pub bet: u64,
}

/// What the player sees after the deal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DealView {
    /// The player's two cards.
    pub player_hand: Hand,
    /// The dealer's face-up card.
    pub dealer_upcard: Card,
    /// Whether the dealer's second card is still face down.
    pub dealer_hole_hidden: bool,
    /// Engine state after the naturals check.
    pub state: GameState,
}

/// What the player sees after a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionView {
    /// The player's hand after the action.
    pub player_hand: Hand,
    /// Card drawn by a hit.
    pub drawn: Option<Card>,
    /// No further player decisions are accepted this round.
    pub terminal: bool,
    /// Engine state after the action.
    pub state: GameState,
}

/// The dealer's hand after the dealer has played.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DealerView {
    /// The full dealer hand.
    pub dealer_hand: Hand,
    /// Cards the dealer drew during this call.
    pub drawn: Vec<Card>,
    /// The round is settled.
    pub terminal: bool,
}

/// Final result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundResult {
    /// Round number.
    pub round: u64,
    /// The outcome.
    pub outcome: Outcome,
    /// Stake in minor units.
    pub bet: u64,
    /// Amount credited back, stake included.
    pub credited: u64,
    /// Profit or loss relative to the balance before the bet.
    pub net: i64,
    /// Player's final total.
    pub player_total: u16,
    /// Dealer's final total.
    pub dealer_total: u16,
    /// Final player hand.
    pub player_hand: Hand,
    /// Final dealer hand.
    pub dealer_hand: Hand,
    /// Balance after settlement.
    pub balance_after: u64,
    /// Statistics including this round.
    pub stats: Stats,
}

/// Shoe counters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShoeStatus {
    /// Cards left in the draw pile.
    pub remaining: usize,
    /// Cards in the discard pile.
    pub discarded: usize,
    /// Decks in the shoe.
    pub deck_count: u8,
    /// Reshuffles so far.
    pub reshuffles: u32,
}
