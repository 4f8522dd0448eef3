//! A deterministic blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that owns the deck, the seedable
//! generator, and both hands, and drives one round at a time through a small
//! state machine. All display and keyboard access goes through the
//! [`Terminal`] trait, so the engine runs the same against a real console or
//! a scripted test double.
//!
//! # Example
//!
//! ```
//! use twentyone::{GameSession, RoundState};
//!
//! let mut session = GameSession::new(100);
//! session.deal().unwrap();
//! assert_eq!(session.state(), RoundState::PlayerTurn);
//! assert_eq!(session.player_hand().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod rng;
pub mod session;
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::RoundError;
pub use game::{GameSession, Outcome, RoundState};
pub use hand::Hand;
pub use rng::Lcg;
pub use session::run;
#[cfg(feature = "std")]
pub use terminal::StdTerminal;
pub use terminal::Terminal;
