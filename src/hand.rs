//! Hands and blackjack scoring.

use crate::card::Card;

/// Hand values above this are bust.
pub const BUST_LIMIT: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(usize::from(card.value()));
    }

    let limit = usize::from(BUST_LIMIT);
    if value > limit && aces > 0 {
        // Downgrade only as many aces as needed to get back under the limit.
        let downgrades = (value - limit).div_ceil(10).min(aces);
        value -= downgrades * 10;
        aces -= downgrades;
    }

    let is_soft = aces > 0 && value <= limit;
    (u16::try_from(value).unwrap_or(u16::MAX), is_soft)
}

/// Computes the blackjack value of a sequence of cards.
///
/// Aces count as 11 and are downgraded to 1, one at a time, only while the
/// total would otherwise exceed 21. An empty slice is worth 0.
///
/// ```
/// use deckjack::{Card, Rank, Suit, hand_value};
///
/// let cards = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Hearts)];
/// assert_eq!(hand_value(&cards), 12);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether an Ace is still counted as 11 after scoring.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// An ordered hand of cards, kept in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
    }

    /// Returns the first card, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
