use log::{debug, info};

use crate::error::ActionError;
use crate::hand::BUST_LIMIT;
use crate::provider::DeckProvider;
use crate::result::RoundResult;

use super::Table;
use super::round::DealerStep;

/// Dealer stops drawing once their hand reaches this value.
pub const DEALER_STAND_VALUE: u16 = 17;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerDecision {
    /// Dealer takes another card.
    Draw,
    /// Dealer stands having met or beaten the player.
    StandDealerWins,
    /// Dealer stands at the stopping value without catching the player.
    StandPlayerWins,
    /// Dealer went over 21.
    BustPlayerWins,
}

impl DealerDecision {
    /// Returns whether the dealer's turn is over.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Draw)
    }

    /// Returns whether the decision ends the round in the dealer's favor.
    #[must_use]
    pub const fn dealer_wins(self) -> bool {
        matches!(self, Self::StandDealerWins)
    }
}

/// Decides the dealer's next move.
///
/// Rules are checked in order: bust, meeting or beating the player (ties go
/// to the dealer), reaching 17, otherwise draw.
///
/// ```
/// use deckjack::{DealerDecision, decide};
///
/// assert_eq!(decide(17, 19), DealerDecision::StandPlayerWins);
/// assert_eq!(decide(20, 20), DealerDecision::StandDealerWins);
/// assert_eq!(decide(12, 20), DealerDecision::Draw);
/// ```
#[must_use]
pub const fn decide(dealer_value: u16, player_value: u16) -> DealerDecision {
    if dealer_value > BUST_LIMIT {
        DealerDecision::BustPlayerWins
    } else if dealer_value >= player_value {
        DealerDecision::StandDealerWins
    } else if dealer_value >= DEALER_STAND_VALUE {
        DealerDecision::StandPlayerWins
    } else {
        DealerDecision::Draw
    }
}

impl<P: DeckProvider> Table<P> {
    /// Plays out the dealer's hand and resolves the round.
    ///
    /// The dealer draws one card at a time until [`decide`] returns a final
    /// decision. If the player has already busted the dealer does not draw.
    /// Calling this on a resolved round returns its result again.
    ///
    /// Normally invoked by [`stay`](Self::stay) and [`hit`](Self::hit); call
    /// it directly to continue a dealer turn interrupted by a failed draw.
    ///
    /// # Errors
    ///
    /// Returns an error if another action is in flight, the round is not in
    /// the dealer turn, or a draw fails. A failed draw leaves the round in
    /// [`GameState::DealerTurn`](super::GameState::DealerTurn).
    pub async fn dealer_play(&self) -> Result<RoundResult, ActionError> {
        let _guard = self.busy.try_acquire().ok_or(ActionError::Busy)?;
        self.run_dealer().await
    }

    pub(super) async fn run_dealer(&self) -> Result<RoundResult, ActionError> {
        loop {
            let step = self.round.lock().dealer_step()?;
            match step {
                DealerStep::Draw => {
                    let card = self.draw_one().await.map_err(ActionError::DrawFailed)?;
                    debug!("dealer draws {card}");
                    self.round.lock().push_dealer(card);
                }
                DealerStep::Done(result) => {
                    info!(
                        "round over: {} (player {}, dealer {})",
                        result.winner, result.player_value, result.dealer_value
                    );
                    return Ok(result);
                }
            }
        }
    }
}
