//! Table configuration options.

/// Card back shown for the dealer's hidden card.
pub const DEFAULT_CARD_BACK: &str = "https://deckofcardsapi.com/static/img/back.png";

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_deck_count(6)
///     .with_reshuffle_each_round(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the remote shoe.
    pub deck_count: u8,
    /// Whether all cards are returned and reshuffled before each new game.
    pub reshuffle_each_round: bool,
    /// Image reference rendered for a face-down card.
    pub card_back_image: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deck_count: 2,
            reshuffle_each_round: true,
            card_back_image: DEFAULT_CARD_BACK.into(),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_deck_count(6);
    /// assert_eq!(options.deck_count, 6);
    /// ```
    #[must_use]
    pub const fn with_deck_count(mut self, deck_count: u8) -> Self {
        self.deck_count = deck_count;
        self
    }

    /// Sets whether the deck is reshuffled before each new game.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_each_round(false);
    /// assert!(!options.reshuffle_each_round);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_each_round(mut self, reshuffle: bool) -> Self {
        self.reshuffle_each_round = reshuffle;
        self
    }

    /// Sets the card back image.
    #[must_use]
    pub fn with_card_back_image(mut self, image: impl Into<String>) -> Self {
        self.card_back_image = image.into();
        self
    }
}
