//! Error types for deck and game operations.

use thiserror::Error;

/// Errors reported by a deck provider.
///
/// Every variant means the requested operation did not occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered but refused the request (`success: false`).
    #[error("deck provider rejected the request: {0}")]
    Rejected(String),
    /// The request failed in transit or the response could not be decoded.
    #[error("deck provider transport error: {0}")]
    Transport(String),
    /// The provider returned a rank this crate does not know.
    #[error("unknown card rank `{0}`")]
    UnknownRank(String),
    /// The provider returned a suit this crate does not know.
    #[error("unknown card suit `{0}`")]
    UnknownSuit(String),
    /// A draw succeeded but carried no cards.
    #[error("deck provider returned no cards")]
    Empty,
}

/// Errors that can occur while connecting a table to its deck provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    /// The shuffled deck could not be created.
    #[error("failed to connect to the deck provider: {0}")]
    ProviderUnavailable(#[source] ProviderError),
}

/// Errors that can occur while dealing a new round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    /// Another action is still waiting on the deck provider.
    #[error("another action is in progress")]
    Busy,
    /// A draw failed; cards dealt before it stay in their hands.
    #[error("draw failed while dealing: {0}")]
    DrawFailed(#[source] ProviderError),
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Another action is still waiting on the deck provider.
    #[error("another action is in progress")]
    Busy,
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The draw failed; the hand was left unchanged.
    #[error("draw failed: {0}")]
    DrawFailed(#[source] ProviderError),
}
