//! Round state and outcome types.

/// The phase a round is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Initial cards are about to be dealt.
    Dealing,
    /// Waiting for the player's hit/stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is available.
    Resolved,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player busted; the dealer never plays.
    PlayerBust,
    /// The dealer busted; the player wins.
    DealerBust,
    /// The dealer's total beats the player's.
    DealerWins,
    /// The player's total beats the dealer's.
    PlayerWins,
    /// Both totals are equal.
    Tie,
}

impl Outcome {
    /// Resolves an outcome from the two final totals.
    #[must_use]
    pub const fn from_totals(player: u8, dealer: u8) -> Self {
        if player > 21 {
            Self::PlayerBust
        } else if dealer > 21 {
            Self::DealerBust
        } else if dealer > player {
            Self::DealerWins
        } else if player > dealer {
            Self::PlayerWins
        } else {
            Self::Tie
        }
    }
}
