//! Card types and deck-layout constants.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Card suit.
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
    /// All four suits in deck-layout order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Zero-based ordinal of the suit within the deck layout.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }

    /// Display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

/// Number of suits in a deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks (and therefore cards) per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANKS_PER_SUIT;

/// A playing card.
///
/// Cards are plain immutable values; availability tracking lives in the
/// [`Deck`](crate::Deck), so a `Card` can be copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Sentinel returned by [`value`](Self::value) for aces, distinct from
    /// every real card value. An ace is worth 1 or 11 depending on the rest
    /// of the hand, so the decision is deferred to hand scoring.
    pub const ACE_VALUE: u8 = 0;

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }

    /// Fixed point value of the card.
    ///
    /// Ranks 2-10 map to themselves, face cards to 10, and aces to the
    /// [`ACE_VALUE`](Self::ACE_VALUE) sentinel.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1 => Self::ACE_VALUE,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Display name of the rank ("Ace", "2", ..., "10", "Jack", ...).
    #[must_use]
    pub const fn rank_name(self) -> &'static str {
        match self.rank {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => "?",
        }
    }

    /// Formats the card for display as `"<rank> of <suit>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Spades, 1);
    /// assert_eq!(card.format_name(), "Ace of Spades");
    /// ```
    #[must_use]
    pub fn format_name(self) -> String {
        format!("{} of {}", self.rank_name(), self.suit.name())
    }
}
