//! Round result types.

use core::fmt;

/// The winner of a resolved round. Ties go to the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player won (dealer busted or stopped short).
    Player,
    /// The dealer won (player busted or dealer caught up).
    Dealer,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("Player Wins!"),
            Self::Dealer => f.write_str("Dealer Wins!"),
        }
    }
}

/// Final values of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won the round.
    pub winner: Winner,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns whether the dealer won.
    #[must_use]
    pub const fn dealer_wins(&self) -> bool {
        matches!(self.winner, Winner::Dealer)
    }
}
