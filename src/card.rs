//! Card types and rank lookup.

use core::fmt;
use core::str::FromStr;

use crate::error::ProviderError;

/// Card suit.
///
/// Suits are cosmetic; they never influence a hand's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the name the deck API uses for this suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hearts => "HEARTS",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Spades => "SPADES",
        }
    }
}

impl FromStr for Suit {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProviderError::UnknownSuit(s.into()))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// Rank lookup table: deck API name and blackjack value (Ace counted high).
const RANKS: [(Rank, &str, u8); 13] = [
    (Rank::Two, "2", 2),
    (Rank::Three, "3", 3),
    (Rank::Four, "4", 4),
    (Rank::Five, "5", 5),
    (Rank::Six, "6", 6),
    (Rank::Seven, "7", 7),
    (Rank::Eight, "8", 8),
    (Rank::Nine, "9", 9),
    (Rank::Ten, "10", 10),
    (Rank::Jack, "JACK", 10),
    (Rank::Queen, "QUEEN", 10),
    (Rank::King, "KING", 10),
    (Rank::Ace, "ACE", 11),
];

impl Rank {
    /// All thirteen ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const fn entry(self) -> (Rank, &'static str, u8) {
        RANKS[self as usize]
    }

    /// Returns the blackjack value of the rank, counting an Ace as 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.entry().2
    }

    /// Returns the name the deck API uses for this rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Returns whether this rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl FromStr for Rank {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(rank, _, _)| rank)
            .ok_or_else(|| ProviderError::UnknownRank(s.into()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playing card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Image reference supplied by the deck provider, used only for display.
    pub image: Option<String>,
}

impl Card {
    /// Creates a new card without an image reference.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            image: None,
        }
    }

    /// Attaches a display image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the blackjack value of the card, counting an Ace as 11.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit.as_str())
    }
}

/// How a card is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    /// The card is face up.
    Up(Card),
    /// The card is face down (the dealer's hole card).
    Down,
}

impl CardFace {
    /// Returns the image to render, falling back to `card_back` for a face-down card.
    ///
    /// Face-up cards without an image reference yield `None`.
    #[must_use]
    pub fn image<'a>(&'a self, card_back: &'a str) -> Option<&'a str> {
        match self {
            Self::Up(card) => card.image.as_deref(),
            Self::Down => Some(card_back),
        }
    }

    /// Returns the card if it is face up.
    #[must_use]
    pub const fn card(&self) -> Option<&Card> {
        match self {
            Self::Up(card) => Some(card),
            Self::Down => None,
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
