//! The terminal collaborator the engine renders to and reads keys from.
//!
//! The engine never touches a concrete display or keyboard; everything goes
//! through the [`Terminal`] trait, so tests can drive full rounds with a
//! scripted queue of keystrokes.

/// Display and keyboard capabilities consumed by the session loop.
pub trait Terminal {
    /// Writes one line of text, followed by a line break.
    fn emit_line(&mut self, text: &str);

    /// Writes a single character (used to echo a keypress).
    fn emit_char(&mut self, c: char);

    /// Blocks until one keystroke is available and returns it.
    ///
    /// This call is total: implementations must always eventually return a
    /// character.
    fn read_key(&mut self) -> char;

    /// Resets the display to a blank state at round boundaries.
    fn clear_display(&mut self);
}

#[cfg(feature = "std")]
mod stdio {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use std::io::{self, BufRead, Write};

    use super::Terminal;

    /// A [`Terminal`] over stdin/stdout.
    ///
    /// Stdin is line-buffered, so `read_key` reads a whole line and hands its
    /// characters out one keystroke at a time; an empty line or end of input
    /// yields `'\n'`, which no prompt treats as hit or continue.
    #[derive(Debug, Default)]
    pub struct StdTerminal {
        pending: VecDeque<char>,
    }

    impl StdTerminal {
        /// Creates a terminal over stdin/stdout.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        fn flush() {
            let _ = io::stdout().flush();
        }
    }

    impl Terminal for StdTerminal {
        fn emit_line(&mut self, text: &str) {
            println!("{text}");
            Self::flush();
        }

        fn emit_char(&mut self, c: char) {
            print!("{c}");
            Self::flush();
        }

        fn read_key(&mut self) -> char {
            loop {
                if let Some(c) = self.pending.pop_front() {
                    return c;
                }

                // Output must be visible before we block on input.
                Self::flush();

                let mut line = String::new();
                match io::stdin().lock().read_line(&mut line) {
                    Ok(0) | Err(_) => return '\n',
                    Ok(_) => {}
                }

                let keys = line.trim_end_matches(['\r', '\n']);
                if keys.is_empty() {
                    return '\n';
                }
                self.pending.extend(keys.chars());
            }
        }

        fn clear_display(&mut self) {
            // ANSI clear-screen plus cursor home.
            print!("\u{1b}[2J\u{1b}[H");
            Self::flush();
        }
    }
}

#[cfg(feature = "std")]
pub use stdio::StdTerminal;
