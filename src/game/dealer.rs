use alloc::vec::Vec;

use tracing::{debug, error};

use crate::error::{EngineError, FatalEngineError, ValidationError};
use crate::result::{DealerView, Outcome, RoundResult};

use super::{Game, GameState};

/// Dealer stands on this total or higher.
const DEALER_STANDS_ON: u16 = 17;

impl Game {
    /// Dealer plays their hand according to the rules, then the round is settled.
    ///
    /// The dealer draws until reaching 17 or higher. If `stand_on_soft_17` is
    /// false the dealer also hits a soft 17. A dealer bust stops the drawing
    /// immediately.
    ///
    /// Once the round is settled (player bust, natural, surrender) this is a
    /// no-op that reports the dealer hand as it stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has not finished acting, or a fatal error
    /// if the shoe cannot produce a card.
    pub fn advance_dealer(&mut self) -> Result<DealerView, EngineError> {
        match self.state {
            GameState::DealerActing => {}
            GameState::Settled => {
                return Ok(DealerView {
                    dealer_hand: self.dealer.hand().clone(),
                    drawn: Vec::new(),
                    terminal: true,
                });
            }
            other => return Err(ValidationError::InvalidState(other).into()),
        }

        self.dealer.reveal_hole();
        let mut drawn = Vec::new();

        while self.dealer_must_hit() {
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        debug!(
            round = self.round,
            value = self.dealer.hand().value(),
            bust = self.dealer.hand().is_bust(),
            drew = drawn.len(),
            "dealer done"
        );

        let outcome = Outcome::compare(&self.player, self.dealer.hand());
        self.settle(outcome)?;

        Ok(DealerView {
            dealer_hand: self.dealer.hand().clone(),
            drawn,
            terminal: true,
        })
    }

    fn dealer_must_hit(&self) -> bool {
        let value = self.dealer.hand().best_total();
        value.total < DEALER_STANDS_ON
            || (value.total == DEALER_STANDS_ON && value.is_soft && !self.options.stand_on_soft_17)
    }

    /// Settles the outstanding wager and ends the round.
    pub(super) fn settle(&mut self, outcome: Outcome) -> Result<(), EngineError> {
        let settlement = match self.ledger.settle(outcome, &self.payouts) {
            Ok(settlement) => settlement,
            Err(EngineError::Validation(ValidationError::NoOutstandingBet)) => {
                error!(round = self.round, ?outcome, "settlement without a wager");
                return Err(FatalEngineError::MissingWager.into());
            }
            Err(err) => return Err(err),
        };

        self.dealer.reveal_hole();
        self.state = GameState::Settled;
        self.last_result = Some(RoundResult {
            round: self.round,
            outcome,
            bet: settlement.wager.amount,
            credited: settlement.credited,
            net: settlement.net,
            player_total: self.player.value(),
            dealer_total: self.dealer.hand().value(),
            player_hand: self.player.clone(),
            dealer_hand: self.dealer.hand().clone(),
            balance_after: settlement.balance,
            stats: self.ledger.stats(),
        });

        Ok(())
    }

    /// Returns the result of the settled round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the current round has been settled.
    pub fn result(&self) -> Result<RoundResult, ValidationError> {
        self.last_result
            .clone()
            .filter(|_| self.state == GameState::Settled)
            .ok_or(ValidationError::InvalidState(self.state))
    }
}
