//! Single-round flow: dealing, the dealer's draw loop, and the outcome.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ExhaustedDeckError;
use crate::hand::Hand;

/// The dealer draws until reaching this value or busting.
pub const DEALER_STAND_VALUE: u16 = 17;

/// Number of cards dealt to each hand at the start of a round.
const INITIAL_CARDS: usize = 2;

/// Result of comparing the player's hand against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts alone or player has the higher value).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher value).
    DealerWin,
    /// Nobody wins (equal values, or both hands bust).
    Push,
}

impl Outcome {
    /// Decides the round outcome from the two final hands.
    ///
    /// A bust dealer loses to any standing player; if both hands bust the
    /// round is a push. Otherwise the higher value wins and ties push.
    #[must_use]
    pub fn decide(player: &Hand, dealer: &Hand) -> Self {
        if dealer.is_bust() {
            return if player.is_bust() {
                Self::Push
            } else {
                Self::PlayerWin
            };
        }
        if player.is_bust() {
            return Self::DealerWin;
        }

        let player_value = player.value();
        let dealer_value = dealer.value();
        if player_value > dealer_value {
            Self::PlayerWin
        } else if player_value < dealer_value {
            Self::DealerWin
        } else {
            Self::Push
        }
    }
}

/// A single dealer-versus-player round over one deck.
///
/// The round owns the deck and both hands; console interaction stays with
/// the caller, which drives the player's hit/stand decisions through
/// [`hit_player`](Self::hit_player) and then hands control to
/// [`play_dealer`](Self::play_dealer).
#[derive(Debug, Clone)]
pub struct Round {
    /// The shared deck.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
}

impl Round {
    /// Creates a round with a fresh deck seeded from `seed` and empty hands.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::new(seed),
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Deals the opening two cards to each hand, alternating player first.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedDeckError`] if the deck runs out of cards, which
    /// cannot happen on a freshly cleared deck.
    pub fn deal_initial(&mut self) -> Result<(), ExhaustedDeckError> {
        for _ in 0..INITIAL_CARDS {
            self.player.add_card(self.deck.draw_available_card()?);
            self.dealer.add_card(self.deck.draw_available_card()?);
        }
        Ok(())
    }

    /// Draws one card into the player's hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedDeckError`] if every card is in use.
    pub fn hit_player(&mut self) -> Result<Card, ExhaustedDeckError> {
        let card = self.deck.draw_available_card()?;
        self.player.add_card(card);
        Ok(card)
    }

    /// Plays out the dealer's hand: draw while below
    /// [`DEALER_STAND_VALUE`] and not bust.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedDeckError`] if the deck runs out while the dealer
    /// must draw.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, ExhaustedDeckError> {
        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STAND_VALUE && !self.dealer.is_bust() {
            let card = self.deck.draw_available_card()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Decides the outcome from the current state of both hands.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::decide(&self.player, &self.dealer)
    }

    /// Releases both hands back to the deck for a new round.
    pub fn clear(&mut self) {
        self.player.clear(&mut self.deck);
        self.dealer.clear(&mut self.deck);
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }
}
