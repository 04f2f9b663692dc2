//! Deck providers: the source of shuffled cards.
//!
//! The rules engine never shuffles or stores a shoe itself. It holds a
//! [`DeckHandle`] and asks a [`DeckProvider`] for cards one draw at a time.

use core::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::card::Card;
use crate::error::ProviderError;

#[cfg(feature = "http")]
#[cfg_attr(docsrs, doc(cfg(feature = "http")))]
pub mod http;
pub mod local;

#[cfg(feature = "http")]
pub use http::HttpDeckProvider;
pub use local::LocalDeck;

/// Identifier of a shuffled deck session owned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeckHandle(String);

impl DeckHandle {
    /// Wraps a provider-issued deck id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the deck id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A remote (or local) service that shuffles and deals cards.
///
/// A failed call must leave nothing half-done on the caller's side: an `Err`
/// from [`draw`](Self::draw) means no card was dealt.
#[async_trait]
pub trait DeckProvider: Send + Sync {
    /// Creates a new shuffled shoe of `deck_count` decks.
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, ProviderError>;

    /// Returns every drawn card to the shoe and shuffles it.
    async fn reshuffle(&self, deck: &DeckHandle) -> Result<(), ProviderError>;

    /// Draws `count` cards from the top of the shoe.
    async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>, ProviderError>;
}

#[async_trait]
impl<P: DeckProvider + ?Sized> DeckProvider for Arc<P> {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, ProviderError> {
        (**self).create_shuffled_deck(deck_count).await
    }

    async fn reshuffle(&self, deck: &DeckHandle) -> Result<(), ProviderError> {
        (**self).reshuffle(deck).await
    }

    async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>, ProviderError> {
        (**self).draw(deck, count).await
    }
}
