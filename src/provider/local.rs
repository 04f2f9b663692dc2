//! In-memory deck provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ProviderError;
use crate::sync::Mutex;

use super::{DeckHandle, DeckProvider};

struct Shoe {
    deck_count: u8,
    /// Remaining cards; the next card to draw is at the end.
    cards: Vec<Card>,
}

/// A deck provider that keeps its shoes in process memory.
///
/// Shuffles are driven by a seeded RNG, so two providers built with the same
/// seed deal identical sequences. It behaves like the remote deck API,
/// including rejecting draws larger than what is left in the shoe.
///
/// # Example
///
/// ```no_run
/// use deckjack::{GameOptions, LocalDeck, Table};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let table = Table::connect(LocalDeck::new(42), GameOptions::default()).await?;
/// table.new_game().await?;
/// # Ok(())
/// # }
/// ```
pub struct LocalDeck {
    shoes: Mutex<HashMap<String, Shoe>>,
    next_id: AtomicU64,
    rng: Mutex<ChaCha8Rng>,
}

impl LocalDeck {
    /// Creates a provider whose shuffles are derived from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            shoes: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the number of cards left in the given shoe.
    #[must_use]
    pub fn cards_remaining(&self, deck: &DeckHandle) -> Option<usize> {
        self.shoes.lock().get(deck.id()).map(|shoe| shoe.cards.len())
    }

    /// Creates and shuffles a shoe with the specified number of decks.
    fn create_shoe(&self, deck_count: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);

        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        cards.shuffle(&mut *self.rng.lock());
        cards
    }
}

#[async_trait]
impl DeckProvider for LocalDeck {
    async fn create_shuffled_deck(&self, deck_count: u8) -> Result<DeckHandle, ProviderError> {
        if deck_count == 0 {
            return Err(ProviderError::Rejected("deck count must be at least 1".into()));
        }

        let id = format!("local-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let cards = self.create_shoe(deck_count);
        debug!("created local shoe {id} with {} cards", cards.len());

        self.shoes
            .lock()
            .insert(id.clone(), Shoe { deck_count, cards });
        Ok(DeckHandle::new(id))
    }

    async fn reshuffle(&self, deck: &DeckHandle) -> Result<(), ProviderError> {
        let deck_count = self
            .shoes
            .lock()
            .get(deck.id())
            .map(|shoe| shoe.deck_count)
            .ok_or_else(|| ProviderError::Rejected(format!("deck {deck} does not exist")))?;

        let cards = self.create_shoe(deck_count);
        if let Some(shoe) = self.shoes.lock().get_mut(deck.id()) {
            shoe.cards = cards;
        }
        Ok(())
    }

    async fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<Card>, ProviderError> {
        let mut shoes = self.shoes.lock();
        let shoe = shoes
            .get_mut(deck.id())
            .ok_or_else(|| ProviderError::Rejected(format!("deck {deck} does not exist")))?;

        if count > shoe.cards.len() {
            return Err(ProviderError::Rejected(format!(
                "not enough cards remaining to draw {count} additional"
            )));
        }

        let split_at = shoe.cards.len() - count;
        let mut drawn = shoe.cards.split_off(split_at);
        drawn.reverse();
        Ok(drawn)
    }
}
