//! Card types, the compact card codec, and scoring values.

/// Card suit, in the canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Diamonds, Self::Spades];

    /// Returns the glyph used when rendering a card of this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '\u{2663}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
            Self::Spades => '\u{2660}',
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Spades => 3,
        }
    }

    const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Packs the card into one byte: suit in the high nibble, rank in the low.
    #[must_use]
    pub const fn code(self) -> u8 {
        (self.suit.index() << 4) | self.rank
    }

    /// Decodes a card from its packed byte form.
    ///
    /// Returns `None` if either nibble is out of range (rank must be 1..=13,
    /// suit 0..=3).
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        let rank = code & 0x0F;
        if rank == 0 || rank > 13 {
            return None;
        }
        match Suit::from_index(code >> 4) {
            Some(suit) => Some(Self { suit, rank }),
            None => None,
        }
    }

    /// Returns the card's base blackjack value: 10 for face cards, otherwise
    /// the rank itself.
    ///
    /// An ace scores 1 here; counting it as 11 when the hand allows is the
    /// hand evaluator's job.
    #[must_use]
    pub const fn blackjack_value(self) -> u8 {
        if self.rank >= 11 && self.rank <= 13 {
            10
        } else {
            self.rank
        }
    }

    /// Returns the display label for the card's rank.
    #[must_use]
    pub const fn rank_label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
