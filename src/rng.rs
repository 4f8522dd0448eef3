//! A seedable linear-congruential generator.
//!
//! The generator is deliberately simple and deterministic: identical seeds
//! driven through identical call sequences produce identical streams, which
//! the deck shuffle and the golden-deal tests rely on. It is not suitable for
//! anything security-sensitive.

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// A linear-congruential pseudo-random generator over 32-bit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator with the given seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Resets the generator state to the given seed.
    pub const fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Steps the generator and returns a 15-bit value (bits 16..31 of the new
    /// state).
    pub const fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) & 0x7FFF
    }
}
