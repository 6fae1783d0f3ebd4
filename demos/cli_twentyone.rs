//! CLI blackjack round example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Hand, Outcome, Round, Suit};

fn main() {
    println!("Twentyone CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(seed);

    loop {
        if let Err(err) = round.deal_initial() {
            println!("Deal error: {err}");
            return;
        }

        // Player hits or sticks until standing or busting.
        while !round.player().is_bust() {
            println!(
                "Your hand's value is {}. [{}]",
                round.player().value(),
                format_hand(round.player())
            );

            match prompt_line("Would you like to [h]it or [s]tick? ").as_str() {
                "h" | "hit" => match round.hit_player() {
                    Ok(card) => println!("You drew the {}.", card.format_name()),
                    Err(err) => {
                        println!("Draw error: {err}");
                        break;
                    }
                },
                "s" | "stick" | "stand" => break,
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        if let Err(err) = round.play_dealer() {
            println!("Dealer error: {err}");
        }

        print_hand("Player", round.player());
        print_hand("Dealer", round.dealer());

        match round.outcome() {
            Outcome::PlayerWin => println!("\nCongratulations, you have won!"),
            Outcome::DealerWin => println!("\nThe dealer has won!"),
            Outcome::Push => println!("\nTie! Nobody wins."),
        }

        round.clear();

        if prompt_line("\nPlay another round? (y/n): ") != "y" {
            println!("Goodbye.");
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_hand(label: &str, hand: &Hand) {
    let status = if hand.is_bust() { "Bust" } else { "Not Bust" };
    println!(
        "{label} Hand: {} | [{}/{status}]",
        format_hand(hand),
        hand.value()
    );
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.format_name(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
