//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::rng::Lcg;

mod actions;
mod dealer;
pub mod state;

pub use state::{Outcome, RoundState};

/// A blackjack session: the deck, the generator, both hands, and the round
/// state machine, owned together so independent games can run side by side.
///
/// A round moves `Dealing -> PlayerTurn -> DealerTurn -> Resolved`; a player
/// bust skips the dealer turn and resolves immediately.
#[derive(Debug, Clone)]
pub struct GameSession {
    deck: Deck,
    rng: Lcg,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session with the given seed and a canonical (unshuffled)
    /// deck, ready to deal.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: Deck::new(),
            rng: Lcg::new(seed),
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
            outcome: None,
        }
    }

    /// Deals the opening hands: shuffles the deck, then draws two cards each
    /// alternating player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the `Dealing` state.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Dealing)?;

        self.player.clear();
        self.dealer.clear();
        self.deck.shuffle(&mut self.rng);

        let card = self.deck.draw(&mut self.rng);
        self.player.add_card(card);
        let card = self.deck.draw(&mut self.rng);
        self.dealer.add_card(card);
        let card = self.deck.draw(&mut self.rng);
        self.player.add_card(card);
        let card = self.deck.draw(&mut self.rng);
        self.dealer.add_card(card);

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Resets the state machine for the next round.
    ///
    /// Hands are cleared by the next [`deal`](Self::deal); the deck and the
    /// generator carry over so the session stays deterministic.
    pub fn next_round(&mut self) {
        self.state = RoundState::Dealing;
        self.outcome = None;
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round outcome, once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the deck before the next
    /// transparent reshuffle.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    fn ensure_state(&self, required: RoundState) -> Result<(), RoundError> {
        if self.state == required {
            Ok(())
        } else {
            Err(RoundError::InvalidState {
                required,
                actual: self.state,
            })
        }
    }

    fn draw_card(&mut self) -> Card {
        self.deck.draw(&mut self.rng)
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.state = RoundState::Resolved;
    }
}
