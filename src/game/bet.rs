use tracing::debug;

use crate::error::{EngineError, ValidationError};
use crate::result::{DealView, Outcome, RoundHandle};

use super::{Game, GameState};

impl Game {
    /// Places and debits a bet for the next round.
    ///
    /// A settled round still on the table is cleared first, once the amount has
    /// been validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero or outside
    /// the table limits, or the player lacks funds. Nothing changes on error.
    pub fn place_bet(&mut self, amount: u64) -> Result<RoundHandle, ValidationError> {
        match self.state {
            GameState::AwaitingBet => {}
            GameState::Settled => {
                self.ledger.validate_bet(amount)?;
                self.clear_round()?;
            }
            other => return Err(ValidationError::InvalidState(other)),
        }

        self.ledger.place_bet(amount)?;
        self.round += 1;
        self.state = GameState::BetPlaced;

        Ok(RoundHandle {
            round: self.round,
            bet: amount,
        })
    }

    /// Cancels the bet before any card is dealt and refunds it.
    ///
    /// Returns the refunded amount.
    ///
    /// # Errors
    ///
    /// Returns an error if no undealt bet is outstanding.
    pub fn cancel_bet(&mut self) -> Result<u64, EngineError> {
        self.ensure_state(GameState::BetPlaced)?;
        let wager = self.ledger.cancel_bet()?;
        self.round -= 1;
        self.state = GameState::AwaitingBet;
        Ok(wager.amount)
    }

    /// Deals two cards each, player first, then checks for naturals.
    ///
    /// The shoe is reshuffled beforehand if it has fallen below its threshold.
    /// When either side holds a natural the round is settled immediately and
    /// the player never acts.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, or a fatal error if the
    /// shoe cannot produce a card.
    pub fn deal(&mut self) -> Result<DealView, EngineError> {
        self.ensure_state(GameState::BetPlaced)?;

        if self.shoe.needs_reshuffle() {
            self.shoe.reshuffle();
        }

        self.player.add_card(self.shoe.draw()?);
        let up_card = self.shoe.draw()?;
        self.dealer.add_card(up_card);
        self.player.add_card(self.shoe.draw()?);
        self.dealer.add_card(self.shoe.draw()?);

        debug!(
            round = self.round,
            player = self.player.value(),
            %up_card,
            remaining = self.shoe.remaining(),
            "dealt"
        );

        if let Some(outcome) = Outcome::naturals(&self.player, self.dealer.hand()) {
            debug!(round = self.round, ?outcome, "natural");
            self.settle(outcome)?;
        } else {
            self.state = GameState::PlayerActing;
        }

        Ok(DealView {
            player_hand: self.player.clone(),
            dealer_upcard: up_card,
            dealer_hole_hidden: !self.dealer.is_hole_revealed(),
            state: self.state,
        })
    }
}
