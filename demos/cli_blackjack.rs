//! Interactive terminal blackjack.
//!
//! Run with `cargo run --example cli_blackjack`. The first keypress seeds the
//! game; `h` hits, any other key stands, `y` plays another round.

use twentyone::StdTerminal;

fn main() {
    let mut term = StdTerminal::new();
    if let Err(err) = twentyone::run(&mut term) {
        eprintln!("session error: {err}");
    }
}
