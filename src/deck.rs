//! A single deck of 52 unique cards with availability tracking.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, Suit};
use crate::error::{ExhaustedDeckError, OutOfRangeError};

/// Bitmask with one set bit per deck slot.
const FULL_DECK_MASK: u64 = (1u64 << DECK_SIZE) - 1;

/// A full single deck of 52 unique cards.
///
/// The deck owns every card for its lifetime and tracks which cards are
/// currently available to draw. Drawing picks uniformly among the available
/// cards and commits the pick; [`release`](Self::release) (normally via
/// [`Hand::clear`](crate::Hand::clear)) returns cards to the pool.
///
/// Cards are laid out suit-major, rank-minor, with the ace first in each
/// suit block: index `(rank - 1) + suit.index() * RANKS_PER_SUIT`. The
/// layout only matters for [`at`](Self::at); drawing is order-independent.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Every unique card, in layout order.
    cards: [Card; DECK_SIZE],
    /// One bit per slot; a set bit means the card is available to draw.
    available: u64,
    /// Random number generator used for drawing.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck with the given seed; all 52 cards start available.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = [Card::new(Suit::Hearts, 1); DECK_SIZE];
        for suit in Suit::ALL {
            for rank in 1..=RANKS_PER_SUIT as u8 {
                cards[Self::index_of(suit, rank)] = Card::new(suit, rank);
            }
        }

        Self {
            cards,
            available: FULL_DECK_MASK,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Layout index of a `(suit, rank)` combination. Rank must be 1..=13.
    const fn index_of(suit: Suit, rank: u8) -> usize {
        (rank as usize - 1) + suit.index() * RANKS_PER_SUIT
    }

    /// Draws a uniformly random card from the currently available pool.
    ///
    /// The drawn card is committed: it stays unavailable until released
    /// (normally by [`Hand::clear`](crate::Hand::clear)).
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedDeckError`] if every card is already in use.
    pub fn draw_available_card(&mut self) -> Result<Card, ExhaustedDeckError> {
        let available = self.available.count_ones();
        if available == 0 {
            return Err(ExhaustedDeckError);
        }

        let mut remaining = self.rng.random_range(0..available);
        for index in 0..DECK_SIZE {
            let bit = 1u64 << index;
            if self.available & bit == 0 {
                continue;
            }
            if remaining == 0 {
                self.available &= !bit;
                return Ok(self.cards[index]);
            }
            remaining -= 1;
        }

        // Unreachable: `remaining` starts below the number of set bits.
        Err(ExhaustedDeckError)
    }

    /// Returns the card at the given layout index.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] for indices outside `0..52`.
    pub fn at(&self, index: usize) -> Result<Card, OutOfRangeError> {
        self.cards.get(index).copied().ok_or(OutOfRangeError {
            index,
            len: DECK_SIZE,
        })
    }

    /// Marks the card's slot available to draw again.
    ///
    /// Releasing a card that is already available is a no-op, as is releasing
    /// a card with a rank outside 1..=13 (which no deck slot corresponds to).
    pub const fn release(&mut self, card: Card) {
        if card.rank == 0 || card.rank as usize > RANKS_PER_SUIT {
            return;
        }
        self.available |= 1 << Self::index_of(card.suit, card.rank);
    }

    /// Returns whether the card at the given layout index is available.
    #[must_use]
    pub const fn is_available(&self, index: usize) -> bool {
        index < DECK_SIZE && self.available & (1 << index) != 0
    }

    /// Returns the number of cards still available to draw.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.available.count_ones() as usize
    }
}
