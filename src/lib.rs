//! A blackjack rules engine that deals from a remote card-deck API.
//!
//! The crate provides a [`Table`] type that runs one round at a time: the
//! initial deal, the player's turn, the dealer's turn, and resolution. Cards
//! come from a [`DeckProvider`], either the deckofcardsapi.com service
//! ([`HttpDeckProvider`], feature `http`) or an in-memory [`LocalDeck`].
//! Rendering is left to the caller, who reads the round back through the
//! table's query methods.
//!
//! # Example
//!
//! ```no_run
//! use deckjack::{GameOptions, LocalDeck, Table};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::connect(LocalDeck::new(42), GameOptions::default()).await?;
//! table.new_game().await?;
//! table.hit().await?;
//! if !table.is_round_over() {
//!     let result = table.stay().await?;
//!     println!("{}", result.winner);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod provider;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, CardFace, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, DealError, ProviderError, StartError};
pub use game::{
    DEALER_STAND_VALUE, DealerDecision, DealerStep, GameRound, GameState, Seat, Table, decide,
};
pub use hand::{BUST_LIMIT, Hand, hand_value, is_soft};
pub use options::GameOptions;
#[cfg(feature = "http")]
pub use provider::HttpDeckProvider;
pub use provider::{DeckHandle, DeckProvider, LocalDeck};
pub use result::{RoundResult, Winner};
