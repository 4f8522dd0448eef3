//! The session loop: repeats rounds against a [`Terminal`] until the player
//! declines to continue.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::game::{GameSession, Outcome, RoundState};
use crate::hand::Hand;
use crate::terminal::Terminal;

/// Runs a full blackjack session on the given terminal.
///
/// The first keystroke both starts the session and seeds the engine
/// (`seed = key * 31 + 17`); the generator is never reseeded afterwards, so a
/// scripted terminal replays a session exactly.
///
/// # Errors
///
/// Returns an error if the engine rejects an operation; with a well-formed
/// loop this cannot happen, but the engine's state checks are not bypassed.
pub fn run<T: Terminal>(term: &mut T) -> Result<(), RoundError> {
    term.clear_display();
    term.emit_line("=== BLACKJACK 21 ===");
    term.emit_line("Press any key to start...");

    let first_key = term.read_key();
    let seed = u32::from(first_key).wrapping_mul(31).wrapping_add(17);
    let mut session = GameSession::new(seed);

    loop {
        play_round(&mut session, term)?;

        term.emit_line("");
        term.emit_line("Play again? (Y/N)");
        let again = term.read_key();
        term.emit_char(again);

        if !matches!(again, 'y' | 'Y') {
            break;
        }
        session.next_round();
    }

    term.emit_line("");
    term.emit_line("Thanks for playing!");
    Ok(())
}

fn play_round<T: Terminal>(session: &mut GameSession, term: &mut T) -> Result<(), RoundError> {
    term.clear_display();
    term.emit_line("=== NEW ROUND ===");

    session.deal()?;

    loop {
        term.emit_line("");
        term.emit_line(&hand_line("Player", session.player_hand()));
        term.emit_line(&dealer_hidden_line(session.dealer_hand()));

        // A bust on the previous hit has already resolved the round; it is
        // rendered once more before the outcome line.
        if session.state() != RoundState::PlayerTurn {
            break;
        }

        term.emit_line("");
        term.emit_line("(H)it or (S)tand?");
        let choice = term.read_key();
        term.emit_char(choice);

        if matches!(choice, 'h' | 'H') {
            session.hit()?;
        } else {
            session.stand()?;
            break;
        }
    }

    if session.state() == RoundState::DealerTurn {
        term.emit_line("");
        term.emit_line("Dealer's turn...");
        session.dealer_play()?;
        term.emit_line(&hand_line("Dealer", session.dealer_hand()));
    }

    if let Some(outcome) = session.outcome() {
        term.emit_line(outcome_line(outcome));
    }

    Ok(())
}

fn format_card(card: Card) -> String {
    format!("{}{}", card.rank_label(), card.suit.symbol())
}

fn hand_line(owner: &str, hand: &Hand) -> String {
    let cards = hand
        .cards()
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{owner}: {cards} ({})", hand.total())
}

fn dealer_hidden_line(hand: &Hand) -> String {
    hand.cards().first().map_or_else(
        || String::from("Dealer: ?"),
        |card| format!("Dealer: {}, ?", format_card(*card)),
    )
}

const fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "Bust! You lose!",
        Outcome::DealerBust => "Dealer bust! You win!",
        Outcome::DealerWins => "Dealer wins!",
        Outcome::PlayerWins => "You win!",
        Outcome::Tie => "Tie!",
    }
}
