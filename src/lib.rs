//! A single-deck blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] of 52 unique cards with uniform duplicate-free
//! drawing, a [`Hand`] with ace-aware scoring and bust detection, and a
//! [`Round`] type that runs a dealer-versus-player round over them.
//!
//! # Example
//!
//! ```
//! use twentyone::{Deck, Hand};
//!
//! let mut deck = Deck::new(42);
//! let mut hand = Hand::new();
//!
//! hand.add_card(deck.draw_available_card()?);
//! hand.add_card(deck.draw_available_card()?);
//!
//! assert_eq!(hand.len(), 2);
//! assert_eq!(deck.cards_remaining(), 50);
//! assert!(!hand.is_bust());
//! # Ok::<(), twentyone::ExhaustedDeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS_PER_SUIT, SUIT_COUNT, Suit};
pub use deck::Deck;
pub use error::{ExhaustedDeckError, OutOfRangeError};
pub use hand::{Hand, MAX_HAND_VALUE};
pub use round::{DEALER_STAND_VALUE, Outcome, Round};
