use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;

use super::{GameSession, Outcome, RoundState};

impl GameSession {
    /// Dealer plays their hand: draws while the total is below 17, then
    /// resolves the round by comparing totals.
    ///
    /// The dealer has no decisions; they stand on any 17 or higher, soft or
    /// hard. Each draw raises the total by at least one, so the loop always
    /// terminates.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;

        let mut drawn = Vec::new();
        while self.dealer.total() < 17 {
            let card = self.draw_card();
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.resolve(Outcome::from_totals(self.player.total(), self.dealer.total()));

        Ok(drawn)
    }
}
