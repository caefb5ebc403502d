use tracing::debug;

use crate::card::Card;
use crate::error::{EngineError, ValidationError};
use crate::hand::MAX_TOTAL;
use crate::result::{ActionView, Outcome};

use super::{Action, Game, GameState};

impl Game {
    /// Applies a player decision.
    ///
    /// # Errors
    ///
    /// See [`hit`](Self::hit), [`stand`](Self::stand) and [`surrender`](Self::surrender).
    pub fn player_action(&mut self, action: Action) -> Result<ActionView, EngineError> {
        match action {
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
            Action::Surrender => self.surrender(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round at once. Reaching 21 ends the turn when
    /// `auto_stand_on_21` is set; it is never treated as a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the hand already
    /// totals 21, or a fatal error if the shoe cannot produce a card.
    pub fn hit(&mut self) -> Result<ActionView, EngineError> {
        self.ensure_state(GameState::PlayerActing)?;
        if self.player.value() >= MAX_TOTAL {
            return Err(ValidationError::HandComplete.into());
        }

        let card = self.shoe.draw()?;
        self.player.add_card(card);
        let value = self.player.value();
        debug!(round = self.round, %card, value, "hit");

        if value > MAX_TOTAL {
            self.settle(Outcome::PlayerBust)?;
        } else if value == MAX_TOTAL && self.options.auto_stand_on_21 {
            self.begin_dealer_turn();
        }

        Ok(self.action_view(Some(card)))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<ActionView, EngineError> {
        self.ensure_state(GameState::PlayerActing)?;
        debug!(round = self.round, value = self.player.value(), "stand");
        self.begin_dealer_turn();
        Ok(self.action_view(None))
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// Only offered as the first decision on a two-card hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, surrender is disabled,
    /// or the player has already hit.
    pub fn surrender(&mut self) -> Result<ActionView, EngineError> {
        self.ensure_state(GameState::PlayerActing)?;
        if !self.options.surrender || self.player.len() != 2 {
            return Err(ValidationError::SurrenderNotOffered.into());
        }
        debug!(round = self.round, "surrender");
        self.settle(Outcome::Surrendered)?;
        Ok(self.action_view(None))
    }

    fn begin_dealer_turn(&mut self) {
        self.dealer.reveal_hole();
        self.state = GameState::DealerActing;
    }

    fn action_view(&self, drawn: Option<Card>) -> ActionView {
        ActionView {
            player_hand: self.player.clone(),
            drawn,
            terminal: self.state != GameState::PlayerActing,
            state: self.state,
        }
    }
}
