//! Game state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No complete deal yet. A new game must be started.
    #[default]
    AwaitingDeal,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and a winner is known.
    Resolved,
}

/// Who receives a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl Seat {
    /// Recipient of the `index`-th card of the initial deal.
    ///
    /// Cards alternate player, dealer, player, dealer.
    #[must_use]
    pub const fn for_deal_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Player } else { Self::Dealer }
    }
}
