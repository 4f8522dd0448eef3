//! The 52-card deck with sequential draw and reshuffle-on-exhaustion.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::rng::Lcg;

/// An ordered 52-card deck plus a cursor over the cards already drawn.
///
/// The card sequence is always a permutation of the canonical rank-by-suit
/// set; draws consume without replacement, so a card can never appear twice
/// between two shuffles.
#[derive(Debug, Clone)]
pub struct Deck {
    /// The card sequence (a permutation of the canonical 52-card set).
    cards: Vec<Card>,
    /// How many cards have been drawn since the last shuffle.
    cursor: usize,
}

impl Deck {
    /// Creates a deck in canonical order: suit-major (clubs through spades),
    /// ranks ascending within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards, cursor: 0 }
    }

    /// Shuffles the deck in place and rewinds the draw cursor.
    ///
    /// This is an unbiased Fisher-Yates pass: for each index `i` from 51 down
    /// to 1, the card at `i` is swapped with one at `rng.next_value() % (i + 1)`.
    pub fn shuffle(&mut self, rng: &mut Lcg) {
        for i in (1..self.cards.len()).rev() {
            let j = (rng.next_value() as usize) % (i + 1);
            self.cards.swap(i, j);
        }
        self.cursor = 0;
    }

    /// Draws the next card, reshuffling transparently if the deck is
    /// exhausted. Never fails.
    pub fn draw(&mut self, rng: &mut Lcg) -> Card {
        if self.cursor >= self.cards.len() {
            self.shuffle(rng);
        }
        let card = self.cards[self.cursor];
        self.cursor += 1;
        card
    }

    /// Returns the number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the full card sequence, drawn cards included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
