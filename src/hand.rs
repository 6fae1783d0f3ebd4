//! Hand representation and ace-aware scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::OutOfRangeError;

/// The highest value a hand may reach before it is bust.
pub const MAX_HAND_VALUE: u16 = 21;

/// An ordered, growable hand of cards drawn from a [`Deck`].
///
/// The hand preserves insertion order (it only matters for display) and
/// recomputes its value from the full card set on every query, so aces are
/// re-resolved as the hand grows.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// The card should come from [`Deck::draw_available_card`], which already
    /// removed it from the deck's available pool.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at the given position in draw order.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index` is past the end of the hand.
    pub fn at(&self, index: usize) -> Result<Card, OutOfRangeError> {
        self.cards.get(index).copied().ok_or(OutOfRangeError {
            index,
            len: self.cards.len(),
        })
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

    /// Calculates the value of the hand.
    ///
    /// Non-ace cards are summed first, then each ace is resolved greedily:
    /// it counts as 11 whenever the remaining room to 21 still leaves at
    /// least 1 point for every ace yet to be resolved, otherwise as 1. This
    /// maximizes the hand's value without busting a hand that could avoid it.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, 1));
    /// hand.add_card(Card::new(Suit::Spades, 11));
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        let mut sum: u16 = 0;
        let mut aces: u16 = 0;

        for card in &self.cards {
            if card.is_ace() {
                aces += 1;
            } else {
                sum += u16::from(card.value());
            }
        }

        // Aces are resolved after the hard cards so a high ace can still be
        // demoted to 1 by cards drawn later.
        while aces > 0 {
            aces -= 1;
            let remaining_points = i32::from(MAX_HAND_VALUE) - i32::from(sum);
            if remaining_points - i32::from(aces) >= 11 {
                sum += 11;
            } else {
                sum += 1;
            }
        }

        sum
    }

    /// Returns whether the hand's value exceeds [`MAX_HAND_VALUE`].
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > MAX_HAND_VALUE
    }

    /// Releases every held card back to the deck and empties the hand.
    ///
    /// Afterwards the released cards can be drawn again, so a hand can be
    /// reused across rounds without rebuilding the deck.
    pub fn clear(&mut self, deck: &mut Deck) {
        for card in self.cards.drain(..) {
            deck.release(card);
        }
    }
}
