//! Terminal blackjack against the deck API.
//!
//! Run with `RUST_LOG=deckjack=debug` to see every draw.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use deckjack::{
    Card, CardFace, DeckProvider, GameOptions, GameState, Hand, HttpDeckProvider, LocalDeck, Rank,
    Suit, Table,
};

#[derive(Debug, Parser)]
#[command(about = "Play blackjack in the terminal")]
struct Args {
    /// Deal from an in-memory shoe instead of the deck API.
    #[arg(long)]
    offline: bool,
    /// Shuffle seed for the in-memory shoe.
    #[arg(long)]
    seed: Option<u64>,
    /// Root of the deck API.
    #[arg(long, default_value = HttpDeckProvider::DEFAULT_BASE_URL)]
    api_url: String,
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 2)]
    decks: u8,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    let options = GameOptions::default().with_deck_count(args.decks);

    if args.offline {
        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
        run(LocalDeck::new(seed), options).await;
    } else {
        run(HttpDeckProvider::new(args.api_url), options).await;
    }
}

async fn run<P: DeckProvider>(provider: P, options: GameOptions) {
    println!("Blackjack (type 'q' to quit)");

    let table = match Table::connect(provider, options).await {
        Ok(table) => table,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    println!("Deck: {}", table.deck());

    loop {
        if let Err(err) = table.new_game().await {
            println!("Deal error: {err}");
            if !prompt_yes("Try a new game? (y/n): ") {
                return;
            }
            continue;
        }

        while table.state() == GameState::PlayerTurn {
            print_table(&table);

            let result = match prompt_line("[h]it [s]tay: ").as_str() {
                "h" | "hit" => table
                    .hit()
                    .await
                    .map(|card| println!("You draw {}", format_card(&card))),
                "s" | "stay" | "stand" => table.stay().await.map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        while table.state() == GameState::DealerTurn {
            if let Err(err) = table.dealer_play().await {
                println!("Dealer error: {err}");
                if !prompt_yes("Let the dealer try again? (y/n): ") {
                    break;
                }
            }
        }

        if let Some(result) = table.result() {
            print_table(&table);
            println!(
                "{} (player {}, dealer {})",
                result.winner, result.player_value, result.dealer_value
            );
        }

        if !prompt_yes("New game? (y/n): ") {
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

fn prompt_yes(prompt: &str) -> bool {
    matches!(prompt_line(prompt).as_str(), "y" | "yes")
}

fn print_table<P>(table: &Table<P>) {
    let dealer = table
        .dealer_hand_for_display(false)
        .iter()
        .map(|face| match face {
            CardFace::Up(card) => format_card(card),
            CardFace::Down => "??".to_string(),
        })
        .collect::<Vec<_>>();
    let dealer = if dealer.is_empty() {
        "(no cards)".to_string()
    } else {
        dealer.join(" ")
    };
    println!("\nDealer: {dealer} (value {})", table.dealer_visible_value());

    let hand = table.player_hand();
    println!("You:    {} (value {})\n", format_hand(&hand), hand.value());
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        other => other.as_str(),
    };

    format!("{}{}", rank, colorize(suit, color_code))
}
