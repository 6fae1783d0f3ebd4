//! Deck, hand, and round integration tests.

use std::collections::HashSet;

use twentyone::{
    Card, DECK_SIZE, DEALER_STAND_VALUE, Deck, ExhaustedDeckError, Hand, Outcome, Round, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

#[test]
fn hand_without_aces_sums_card_values() {
    let hand = hand_of(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 7),
        card(Suit::Spades, 12), // Queen = 10
    ]);
    assert_eq!(hand.value(), 19);
    assert!(!hand.is_bust());
}

#[test]
fn single_ace_counts_high_when_room_allows() {
    let hand = hand_of(&[card(Suit::Hearts, 1), card(Suit::Clubs, 9)]);
    assert_eq!(hand.value(), 20);

    let maxed = hand_of(&[card(Suit::Hearts, 1), card(Suit::Clubs, 10)]);
    assert_eq!(maxed.value(), 21);
    assert!(!maxed.is_bust());
}

#[test]
fn single_ace_drops_to_one_when_high_would_bust() {
    let hand = hand_of(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 5),
        card(Suit::Spades, 6),
    ]);
    assert_eq!(hand.value(), 12);
}

#[test]
fn two_bare_aces_are_twelve() {
    let hand = hand_of(&[card(Suit::Hearts, 1), card(Suit::Spades, 1)]);
    assert_eq!(hand.value(), 12);
}

#[test]
fn ace_and_face_is_twentyone() {
    let hand = hand_of(&[card(Suit::Hearts, 1), card(Suit::Clubs, 11)]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_bust());
}

#[test]
fn ace_forced_low_by_two_tens() {
    let hand = hand_of(&[
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 13), // King = 10
    ]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_bust());
}

#[test]
fn four_bare_aces_are_fourteen() {
    let hand = hand_of(&[
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 1),
        card(Suit::Spades, 1),
    ]);
    assert_eq!(hand.value(), 14);
}

#[test]
fn ace_resolution_is_insertion_order_independent() {
    let cards = [
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 8),
        card(Suit::Diamonds, 1),
        card(Suit::Spades, 4),
    ];

    let expected = hand_of(&cards).value();

    // Every rotation and the reverse must score identically.
    for start in 0..cards.len() {
        let mut rotated = cards;
        rotated.rotate_left(start);
        assert_eq!(hand_of(&rotated).value(), expected);

        let mut reversed = rotated;
        reversed.reverse();
        assert_eq!(hand_of(&reversed).value(), expected);
    }
}

#[test]
fn bust_detection_over_twentyone() {
    let hand = hand_of(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 2),
    ]);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_bust());
}

#[test]
fn deck_indexed_access_covers_all_distinct_cards() {
    let deck = Deck::new(0);

    let mut seen = HashSet::new();
    for index in 0..DECK_SIZE {
        let card = deck.at(index).unwrap();
        assert!(seen.insert(card), "duplicate card at index {index}");
    }

    assert!(deck.at(DECK_SIZE).is_err());
    let err = deck.at(usize::MAX).unwrap_err();
    assert_eq!(err.len, DECK_SIZE);
}

#[test]
fn deck_layout_is_suit_major_with_ace_first() {
    let deck = Deck::new(7);

    assert_eq!(deck.at(0).unwrap().format_name(), "Ace of Hearts");
    assert_eq!(deck.at(9).unwrap().format_name(), "10 of Hearts");
    assert_eq!(deck.at(12).unwrap().format_name(), "King of Hearts");
    assert_eq!(deck.at(13).unwrap().format_name(), "Ace of Diamonds");
    assert_eq!(deck.at(51).unwrap().format_name(), "King of Spades");
}

#[test]
fn full_draw_cycle_yields_every_card_once() {
    let mut deck = Deck::new(42);
    let mut hand = Hand::new();
    let mut seen = HashSet::new();

    for _ in 0..DECK_SIZE {
        let card = deck.draw_available_card().unwrap();
        assert!(seen.insert(card), "card {card:?} drawn twice");
        hand.add_card(card);
    }

    assert_eq!(hand.len(), DECK_SIZE);
    assert_eq!(deck.cards_remaining(), 0);
}

#[test]
fn last_remaining_card_is_drawn_regardless_of_seed() {
    for seed in 0..20 {
        let mut deck = Deck::new(seed);

        let mut drawn = HashSet::new();
        for _ in 0..DECK_SIZE - 1 {
            drawn.insert(deck.draw_available_card().unwrap());
        }

        let expected: Vec<Card> = (0..DECK_SIZE)
            .map(|index| deck.at(index).unwrap())
            .filter(|card| !drawn.contains(card))
            .collect();
        assert_eq!(expected.len(), 1);

        assert_eq!(deck.draw_available_card().unwrap(), expected[0]);
    }
}

#[test]
fn drawing_from_exhausted_deck_fails() {
    let mut deck = Deck::new(3);
    for _ in 0..DECK_SIZE {
        deck.draw_available_card().unwrap();
    }

    assert_eq!(deck.draw_available_card().unwrap_err(), ExhaustedDeckError);
}

#[test]
fn clear_releases_cards_for_redrawing() {
    let mut deck = Deck::new(9);
    let mut hand = Hand::new();

    for _ in 0..DECK_SIZE {
        hand.add_card(deck.draw_available_card().unwrap());
    }
    assert_eq!(deck.cards_remaining(), 0);

    hand.clear(&mut deck);
    assert!(hand.is_empty());
    assert_eq!(deck.cards_remaining(), DECK_SIZE);

    // The full deck can be drawn down again after the release.
    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.draw_available_card().unwrap()));
    }
}

#[test]
fn hand_indexed_access_preserves_draw_order() {
    let hand = hand_of(&[card(Suit::Hearts, 4), card(Suit::Spades, 11)]);

    assert_eq!(hand.at(0).unwrap(), card(Suit::Hearts, 4));
    assert_eq!(hand.at(1).unwrap(), card(Suit::Spades, 11));

    let err = hand.at(2).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.len, 2);
}

#[test]
fn outcome_comparison_table() {
    let twenty = hand_of(&[card(Suit::Hearts, 10), card(Suit::Clubs, 10)]);
    let nineteen = hand_of(&[card(Suit::Hearts, 9), card(Suit::Clubs, 10)]);
    let bust = hand_of(&[
        card(Suit::Spades, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 5),
    ]);

    assert_eq!(Outcome::decide(&twenty, &nineteen), Outcome::PlayerWin);
    assert_eq!(Outcome::decide(&nineteen, &twenty), Outcome::DealerWin);
    assert_eq!(Outcome::decide(&twenty, &twenty), Outcome::Push);

    assert_eq!(Outcome::decide(&bust, &nineteen), Outcome::DealerWin);
    assert_eq!(Outcome::decide(&nineteen, &bust), Outcome::PlayerWin);
    assert_eq!(Outcome::decide(&bust, &bust), Outcome::Push);
}

#[test]
fn round_deal_and_dealer_play() {
    let mut round = Round::new(42);
    round.deal_initial().unwrap();

    assert_eq!(round.player().len(), 2);
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.deck().cards_remaining(), DECK_SIZE - 4);

    round.play_dealer().unwrap();
    let dealer_value = round.dealer().value();
    assert!(dealer_value >= DEALER_STAND_VALUE);

    // Outcome must be decidable whatever the dealer ended on.
    let _ = round.outcome();
}

#[test]
fn round_clear_restores_full_deck() {
    let mut round = Round::new(5);
    round.deal_initial().unwrap();
    round.hit_player().unwrap();
    assert_eq!(round.deck().cards_remaining(), DECK_SIZE - 5);

    round.clear();
    assert!(round.player().is_empty());
    assert!(round.dealer().is_empty());
    assert_eq!(round.deck().cards_remaining(), DECK_SIZE);
}

#[test]
fn rounds_are_deterministic_for_a_seed() {
    let mut first = Round::new(1234);
    let mut second = Round::new(1234);
    first.deal_initial().unwrap();
    second.deal_initial().unwrap();

    assert_eq!(first.player().cards(), second.player().cards());
    assert_eq!(first.dealer().cards(), second.dealer().cards());
}

#[test]
fn card_formatting_and_values() {
    assert_eq!(card(Suit::Diamonds, 12).format_name(), "Queen of Diamonds");
    assert_eq!(card(Suit::Clubs, 7).format_name(), "7 of Clubs");

    assert_eq!(card(Suit::Hearts, 13).value(), 10);
    assert_eq!(card(Suit::Hearts, 3).value(), 3);
    assert_eq!(card(Suit::Hearts, 1).value(), Card::ACE_VALUE);
    assert!(card(Suit::Hearts, 1).is_ace());
    assert!(!card(Suit::Hearts, 2).is_ace());
}
