//! Game engine and round state management.

use log::warn;

use crate::card::{Card, CardFace};
use crate::error::{ProviderError, StartError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::provider::{DeckHandle, DeckProvider};
use crate::result::{RoundResult, Winner};
use crate::sync::{BusyFlag, Mutex};

mod actions;
pub mod dealer;
pub mod round;
pub mod state;

pub use dealer::{DEALER_STAND_VALUE, DealerDecision, decide};
pub use round::{DealerStep, GameRound};
pub use state::{GameState, Seat};

/// A blackjack table playing one round at a time against a deck provider.
///
/// The table owns the current [`GameRound`] and the handle of its remote
/// deck. Intents ([`new_game`](Self::new_game), [`hit`](Self::hit),
/// [`stay`](Self::stay)) draw cards one at a time and are rejected with a
/// `Busy` error while another intent is still waiting on the provider.
pub struct Table<P> {
    provider: P,
    deck: DeckHandle,
    options: GameOptions,
    round: Mutex<GameRound>,
    busy: BusyFlag,
}

impl<P: DeckProvider> Table<P> {
    /// Creates a shuffled deck with the provider and opens a table on it.
    ///
    /// The table starts in [`GameState::AwaitingDeal`]; call
    /// [`new_game`](Self::new_game) to deal the first round.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::ProviderUnavailable`] if the deck cannot be created.
    pub async fn connect(provider: P, options: GameOptions) -> Result<Self, StartError> {
        let deck = provider
            .create_shuffled_deck(options.deck_count)
            .await
            .map_err(|err| {
                warn!("failed to connect to the deck provider: {err}");
                StartError::ProviderUnavailable(err)
            })?;

        Ok(Self::with_deck(provider, deck, options))
    }

    /// Opens a table on a deck that already exists.
    #[must_use]
    pub fn with_deck(provider: P, deck: DeckHandle, options: GameOptions) -> Self {
        Self {
            provider,
            deck,
            options,
            round: Mutex::new(GameRound::new()),
            busy: BusyFlag::new(),
        }
    }

    /// Draws a single card.
    async fn draw_one(&self) -> Result<Card, ProviderError> {
        let cards = self.provider.draw(&self.deck, 1).await.inspect_err(|err| {
            warn!("draw from deck {} failed: {err}", self.deck);
        })?;
        cards.into_iter().next().ok_or(ProviderError::Empty)
    }
}

impl<P> Table<P> {
    /// Returns the handle of the deck this table draws from.
    #[must_use]
    pub const fn deck(&self) -> &DeckHandle {
        &self.deck
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns whether an intent is waiting on the deck provider.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Returns a snapshot of the current round.
    #[must_use]
    pub fn round(&self) -> GameRound {
        self.round.lock().clone()
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.round.lock().state()
    }

    /// Returns a clone of the player's hand.
    #[must_use]
    pub fn player_hand(&self) -> Hand {
        self.round.lock().player_hand().clone()
    }

    /// Returns the dealer's cards as they should be displayed.
    ///
    /// The hole card is [`CardFace::Down`] until the player's turn has ended,
    /// unless `reveal_all` is set.
    #[must_use]
    pub fn dealer_hand_for_display(&self, reveal_all: bool) -> Vec<CardFace> {
        self.round.lock().dealer_faces(reveal_all)
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.round.lock().player_value()
    }

    /// Returns the dealer's full hand value, hole card included.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.round.lock().dealer_value()
    }

    /// Returns the dealer's value counting only cards visible to the player.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u16 {
        self.round.lock().dealer_visible_value()
    }

    /// Returns whether the round is over.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.round.lock().is_game_over()
    }

    /// Returns whether the dealer won. Always `false` before the round is over.
    #[must_use]
    pub fn did_dealer_win(&self) -> bool {
        self.winner() == Some(Winner::Dealer)
    }

    /// Returns the winner once the round is over.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.round.lock().winner()
    }

    /// Returns the final result once the round is resolved.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.round.lock().result()
    }
}
