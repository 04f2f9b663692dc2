use log::{debug, warn};

use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::provider::DeckProvider;
use crate::result::RoundResult;

use super::Table;
use super::round::GameRound;
use super::state::Seat;

/// Cards dealt at the start of a round.
const INITIAL_DEAL: usize = 4;

impl<P: DeckProvider> Table<P> {
    /// Starts a new round.
    ///
    /// The previous round is discarded, the deck is reshuffled if
    /// [`reshuffle_each_round`](crate::GameOptions::reshuffle_each_round) is
    /// set, and four cards are dealt one at a time: player, dealer, player,
    /// dealer. A failed reshuffle is logged and dealing continues.
    ///
    /// # Errors
    ///
    /// Returns an error if another action is in flight or a draw fails. After
    /// a failed draw the cards already dealt stay in their hands and the round
    /// remains in [`GameState::AwaitingDeal`](super::GameState::AwaitingDeal).
    pub async fn new_game(&self) -> Result<(), DealError> {
        let _guard = self.busy.try_acquire().ok_or(DealError::Busy)?;

        *self.round.lock() = GameRound::new();

        if self.options.reshuffle_each_round {
            if let Err(err) = self.provider.reshuffle(&self.deck).await {
                warn!("reshuffle of deck {} failed: {err}", self.deck);
            }
        }

        for index in 0..INITIAL_DEAL {
            let seat = Seat::for_deal_index(index);
            let card = self.draw_one().await.map_err(DealError::DrawFailed)?;
            debug!("dealt {card} to {seat:?}");
            self.round.lock().push_deal(seat, card);
        }

        self.round.lock().finish_deal();
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the card takes the player over 21 the round is resolved at once as
    /// a dealer win, without the dealer drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if another action is in flight, it is not the
    /// player's turn, or the draw fails. A failed draw leaves the hand as it was.
    pub async fn hit(&self) -> Result<Card, ActionError> {
        let _guard = self.busy.try_acquire().ok_or(ActionError::Busy)?;
        self.round.lock().ensure_player_turn()?;

        let card = self.draw_one().await.map_err(ActionError::DrawFailed)?;
        debug!("player hits {card}");

        let bust = self.round.lock().push_hit(card.clone())?;
        if bust {
            debug!("player busts");
            self.run_dealer().await?;
        }
        Ok(card)
    }

    /// Player action: Stay (end the turn and let the dealer play).
    ///
    /// # Errors
    ///
    /// Returns an error if another action is in flight, it is not the
    /// player's turn, or a dealer draw fails. See
    /// [`dealer_play`](Self::dealer_play) for resuming after a failed draw.
    pub async fn stay(&self) -> Result<RoundResult, ActionError> {
        let _guard = self.busy.try_acquire().ok_or(ActionError::Busy)?;
        self.round.lock().end_player_turn()?;
        debug!("player stays on {}", self.player_value());
        self.run_dealer().await
    }
}
