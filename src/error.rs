//! Error types for deck and hand operations.

use thiserror::Error;

/// The deck has no available card left to draw.
///
/// Every card is currently held by a hand. Recover by clearing a hand (which
/// releases its cards back to the deck) or by building a fresh deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no available card to draw; every card in the deck is in use")]
pub struct ExhaustedDeckError;

/// An index into the deck or a hand was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("card index {index} is out of range for a collection of {len} cards")]
pub struct OutOfRangeError {
    /// The rejected index.
    pub index: usize,
    /// Number of cards in the indexed collection.
    pub len: usize,
}
