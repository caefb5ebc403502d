//! Game configuration options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rounding mode for payouts that do not land on a whole minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves up.
    Nearest,
}

impl RoundingMode {
    /// Divides `numerator` by `denominator` under this rounding mode.
    ///
    /// `denominator` must be non-zero.
    #[must_use]
    pub const fn divide(self, numerator: u128, denominator: u128) -> u128 {
        match self {
            Self::Up => numerator.div_ceil(denominator),
            Self::Down => numerator / denominator,
            Self::Nearest => (numerator * 2 + denominator) / (denominator * 2),
        }
    }
}

/// Profit paid per unit staked, as an exact ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PayoutRatio {
    /// Numerator.
    pub numerator: u32,
    /// Denominator.
    pub denominator: u32,
}

impl PayoutRatio {
    /// 3:2, the standard blackjack payout.
    pub const THREE_TO_TWO: Self = Self::new(3, 2);
    /// 6:5.
    pub const SIX_TO_FIVE: Self = Self::new(6, 5);
    /// Even money.
    pub const ONE_TO_ONE: Self = Self::new(1, 1);
    /// Half the stake, used for surrender refunds.
    pub const ONE_TO_TWO: Self = Self::new(1, 2);

    /// Creates a ratio. A zero denominator is rejected by [`GameOptions::validate`].
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Applies the ratio to `amount`, rounding once at the end.
    ///
    /// Returns `None` if the result does not fit in `u64` or the denominator is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{PayoutRatio, RoundingMode};
    ///
    /// assert_eq!(PayoutRatio::THREE_TO_TWO.apply(100, RoundingMode::Nearest), Some(150));
    /// assert_eq!(PayoutRatio::THREE_TO_TWO.apply(5, RoundingMode::Nearest), Some(8));
    /// assert_eq!(PayoutRatio::THREE_TO_TWO.apply(5, RoundingMode::Down), Some(7));
    /// ```
    #[must_use]
    pub fn apply(self, amount: u64, mode: RoundingMode) -> Option<u64> {
        if self.denominator == 0 {
            return None;
        }
        let scaled = u128::from(amount) * u128::from(self.numerator);
        u64::try_from(mode.divide(scaled, u128::from(self.denominator))).ok()
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_reshuffle_threshold(20)
///     .with_stand_on_soft_17(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Reshuffle before a round when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Starting balance in minor units.
    pub starting_balance: u64,
    /// Table minimum in minor units.
    pub min_bet: u64,
    /// Table maximum in minor units, if any.
    pub max_bet: Option<u64>,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Blackjack profit ratio (typically 3:2).
    pub blackjack_pays: PayoutRatio,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether late surrender is offered.
    pub surrender: bool,
    /// Rounding mode for surrender refunds.
    pub rounding_surrender: RoundingMode,
    /// Whether a non-natural 21 ends the player's turn without an explicit stand.
    pub auto_stand_on_21: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: 15,
            starting_balance: 100_000,
            min_bet: 1,
            max_bet: None,
            stand_on_soft_17: true,
            blackjack_pays: PayoutRatio::THREE_TO_TWO,
            rounding_blackjack: RoundingMode::Nearest,
            surrender: false,
            rounding_surrender: RoundingMode::Nearest,
            auto_stand_on_21: true,
        }
    }
}

impl GameOptions {
    /// Checks the options for values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }
        if self.reshuffle_threshold == 0 {
            return Err(ConfigError::ZeroReshuffleThreshold);
        }
        if self.blackjack_pays.denominator == 0 {
            return Err(ConfigError::ZeroPayoutDenominator);
        }
        if self.min_bet == 0 {
            return Err(ConfigError::ZeroMinimumBet);
        }
        if let Some(max) = self.max_bet {
            if max < self.min_bet {
                return Err(ConfigError::BetLimitsInverted {
                    min: self.min_bet,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(26);
    /// assert_eq!(options.reshuffle_threshold, 26);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting balance in minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(1_000);
    /// assert_eq!(options.starting_balance, 1_000);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the table limits in minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_limits(500, Some(50_000));
    /// assert_eq!(options.min_bet, 500);
    /// assert_eq!(options.max_bet, Some(50_000));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: u64, max: Option<u64>) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, PayoutRatio};
    ///
    /// let options = GameOptions::default().with_blackjack_pays(PayoutRatio::SIX_TO_FIVE);
    /// assert_eq!(options.blackjack_pays, PayoutRatio::new(6, 5));
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Down);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Down);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether late surrender is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_surrender(true);
    /// assert!(options.surrender);
    /// ```
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets the rounding mode for surrender refunds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_surrender(RoundingMode::Up);
    /// assert_eq!(options.rounding_surrender, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: RoundingMode) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Sets whether a non-natural 21 ends the player's turn automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_stand_on_21(false);
    /// assert!(!options.auto_stand_on_21);
    /// ```
    #[must_use]
    pub const fn with_auto_stand_on_21(mut self, auto_stand: bool) -> Self {
        self.auto_stand_on_21 = auto_stand;
        self
    }
}
