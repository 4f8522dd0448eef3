use crate::card::Card;
use crate::error::RoundError;

use super::{GameSession, Outcome, RoundState};

impl GameSession {
    /// Player action: hit (draw a card).
    ///
    /// If the card busts the hand the round resolves immediately with
    /// [`Outcome::PlayerBust`] and the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = self.draw_card();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.resolve(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: stand (take no further cards).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
