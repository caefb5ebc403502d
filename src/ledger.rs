//! Player bankroll, wagers, and lifetime statistics.
//!
//! All amounts are integer minor units (cents).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{EngineError, FatalEngineError, ValidationError};
use crate::options::{GameOptions, PayoutRatio, RoundingMode};
use crate::result::Outcome;

/// A debited bet awaiting settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wager {
    /// Sequential wager id.
    pub id: u64,
    /// Stake in minor units.
    pub amount: u64,
}

/// Lifetime statistics of settled rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    /// Settled rounds.
    pub rounds: u64,
    /// Rounds won, blackjacks included.
    pub wins: u64,
    /// Rounds lost, surrenders included.
    pub losses: u64,
    /// Rounds pushed.
    pub pushes: u64,
    /// Natural blackjacks paid.
    pub blackjacks: u64,
    /// Rounds surrendered.
    pub surrenders: u64,
    /// Cumulative profit or loss in minor units. Saturates at the `i64` bounds.
    pub net: i64,
}

/// Payout rules applied at settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payouts {
    /// Profit ratio on a natural.
    pub blackjack: PayoutRatio,
    /// Rounding of the blackjack profit.
    pub rounding_blackjack: RoundingMode,
    /// Rounding of the surrender refund.
    pub rounding_surrender: RoundingMode,
}

impl Payouts {
    /// Extracts the payout rules from table options.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self {
            blackjack: options.blackjack_pays,
            rounding_blackjack: options.rounding_blackjack,
            rounding_surrender: options.rounding_surrender,
        }
    }

    /// Total credited back for `outcome` on a stake of `bet`, stake included.
    ///
    /// # Errors
    ///
    /// Returns [`FatalEngineError::BalanceOverflow`] if the amount does not fit.
    pub fn credit(&self, outcome: Outcome, bet: u64) -> Result<u64, FatalEngineError> {
        let credit = match outcome {
            Outcome::PlayerBlackjack => self
                .blackjack
                .apply(bet, self.rounding_blackjack)
                .and_then(|profit| bet.checked_add(profit)),
            Outcome::PlayerWin => bet.checked_mul(2),
            Outcome::Push => Some(bet),
            Outcome::Surrendered => PayoutRatio::ONE_TO_TWO.apply(bet, self.rounding_surrender),
            Outcome::DealerWin | Outcome::PlayerBust => Some(0),
        };
        credit.ok_or(FatalEngineError::BalanceOverflow)
    }
}

impl Default for Payouts {
    fn default() -> Self {
        Self::from_options(&GameOptions::default())
    }
}

/// The effect of settling one wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settlement {
    /// The settled wager.
    pub wager: Wager,
    /// Outcome it was settled against.
    pub outcome: Outcome,
    /// Amount credited back, stake included.
    pub credited: u64,
    /// Profit or loss relative to the balance before the bet, saturated to `i64`.
    pub net: i64,
    /// Balance after crediting.
    pub balance: u64,
}

/// A player's bankroll.
///
/// A bet is debited when placed and credited once when settled. At most one
/// wager is outstanding at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ledger {
    balance: u64,
    min_bet: u64,
    max_bet: Option<u64>,
    wager: Option<Wager>,
    next_wager_id: u64,
    stats: Stats,
}

impl Ledger {
    /// Creates a ledger with a balance and table limits.
    #[must_use]
    pub const fn new(balance: u64, min_bet: u64, max_bet: Option<u64>) -> Self {
        Self {
            balance,
            min_bet,
            max_bet,
            wager: None,
            next_wager_id: 1,
            stats: Stats {
                rounds: 0,
                wins: 0,
                losses: 0,
                pushes: 0,
                blackjacks: 0,
                surrenders: 0,
                net: 0,
            },
        }
    }

    /// Creates a ledger from table options.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self::new(options.starting_balance, options.min_bet, options.max_bet)
    }

    /// Current balance in minor units. Excludes any outstanding stake.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// The outstanding wager, if any.
    #[must_use]
    pub const fn outstanding(&self) -> Option<Wager> {
        self.wager
    }

    /// Lifetime statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Clears the statistics. Balance and wager are untouched.
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Checks a bet against the table limits and the balance.
    ///
    /// # Errors
    ///
    /// Returns the first rule the amount breaks.
    pub const fn validate_bet(&self, amount: u64) -> Result<(), ValidationError> {
        if amount == 0 {
            return Err(ValidationError::ZeroBet);
        }
        if amount < self.min_bet {
            return Err(ValidationError::BelowMinimum {
                amount,
                min: self.min_bet,
            });
        }
        if let Some(max) = self.max_bet {
            if amount > max {
                return Err(ValidationError::AboveMaximum { amount, max });
            }
        }
        if amount > self.balance {
            return Err(ValidationError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Returns whether a bet of `amount` would be accepted.
    #[must_use]
    pub const fn can_bet(&self, amount: u64) -> bool {
        self.wager.is_none() && self.validate_bet(amount).is_ok()
    }

    /// Debits a bet and records it as outstanding.
    ///
    /// # Errors
    ///
    /// Returns an error if a bet is already outstanding or the amount is invalid.
    pub fn place_bet(&mut self, amount: u64) -> Result<Wager, ValidationError> {
        if self.wager.is_some() {
            return Err(ValidationError::BetOutstanding);
        }
        self.validate_bet(amount)?;

        self.balance -= amount;
        let wager = Wager {
            id: self.next_wager_id,
            amount,
        };
        self.next_wager_id += 1;
        self.wager = Some(wager);
        debug!(wager = wager.id, amount, balance = self.balance, "bet placed");
        Ok(wager)
    }

    /// Refunds the outstanding bet without recording a round.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet is outstanding.
    pub fn cancel_bet(&mut self) -> Result<Wager, EngineError> {
        let wager = self.wager.ok_or(ValidationError::NoOutstandingBet)?;
        self.balance = self.credit_checked(wager.amount)?;
        self.wager = None;
        debug!(wager = wager.id, amount = wager.amount, "bet cancelled");
        Ok(wager)
    }

    /// Settles the outstanding wager against `outcome`.
    ///
    /// The wager is consumed, so a second call fails without touching the balance.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoOutstandingBet`] if there is nothing to settle,
    /// or [`FatalEngineError::BalanceOverflow`] if the credit does not fit.
    pub fn settle(&mut self, outcome: Outcome, payouts: &Payouts) -> Result<Settlement, EngineError> {
        let wager = self.wager.ok_or(ValidationError::NoOutstandingBet)?;
        let credited = payouts.credit(outcome, wager.amount)?;
        self.balance = self.credit_checked(credited)?;
        self.wager = None;

        let net = saturate(i128::from(credited) - i128::from(wager.amount));
        self.record(outcome, net);

        info!(
            wager = wager.id,
            ?outcome,
            bet = wager.amount,
            credited,
            balance = self.balance,
            "wager settled"
        );

        Ok(Settlement {
            wager,
            outcome,
            credited,
            net,
            balance: self.balance,
        })
    }

    /// Adds funds to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero amount or if the balance would overflow.
    pub fn deposit(&mut self, amount: u64) -> Result<u64, EngineError> {
        if amount == 0 {
            return Err(ValidationError::ZeroAmount.into());
        }
        self.balance = self.credit_checked(amount)?;
        Ok(self.balance)
    }

    /// Removes funds from the balance. An outstanding stake is not withdrawable.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero amount or an amount above the balance.
    pub fn withdraw(&mut self, amount: u64) -> Result<u64, ValidationError> {
        if amount == 0 {
            return Err(ValidationError::ZeroAmount);
        }
        if amount > self.balance {
            return Err(ValidationError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    fn credit_checked(&self, amount: u64) -> Result<u64, FatalEngineError> {
        self.balance.checked_add(amount).ok_or_else(|| {
            error!(balance = self.balance, amount, "balance overflow");
            FatalEngineError::BalanceOverflow
        })
    }

    fn record(&mut self, outcome: Outcome, net: i64) {
        let stats = &mut self.stats;
        stats.rounds += 1;
        stats.net = match stats.net.checked_add(net) {
            Some(total) => total,
            None => {
                warn!(net = stats.net, delta = net, "net statistic saturated");
                stats.net.saturating_add(net)
            }
        };

        if outcome.is_player_win() {
            stats.wins += 1;
        } else if outcome != Outcome::Push {
            stats.losses += 1;
        }
        match outcome {
            Outcome::PlayerBlackjack => stats.blackjacks += 1,
            Outcome::Push => stats.pushes += 1,
            Outcome::Surrendered => stats.surrenders += 1,
            Outcome::PlayerWin | Outcome::DealerWin | Outcome::PlayerBust => {}
        }
    }
}

fn saturate(amount: i128) -> i64 {
    i64::try_from(amount).unwrap_or(if amount < 0 { i64::MIN } else { i64::MAX })
}

/// Minor units formatted as dollars and cents.
///
/// ```
/// use bjround::Dollars;
///
/// assert_eq!(Dollars(1_150).to_string(), "$11.50");
/// assert_eq!(Dollars(-50).to_string(), "-$0.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dollars(pub i64);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}
