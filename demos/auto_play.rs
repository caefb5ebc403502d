//! Plays a handful of rounds with a fixed strategy and prints each table.
//!
//! Set `RUST_LOG=bjround=debug` to see the engine's events.

use std::io::{self, Write};

use bjround::{Action, DealerHand, Dollars, Game, GameOptions, GameState, Hand, RoundResult};
use tracing_subscriber::EnvFilter;

/// Renders table state to an owned writer.
struct Table<W: Write> {
    out: W,
}

impl<W: Write> Table<W> {
    fn hand(&mut self, label: &str, hand: &Hand) -> io::Result<()> {
        writeln!(self.out, "  {label:<7}{hand}")
    }

    fn dealer(&mut self, dealer: &DealerHand) -> io::Result<()> {
        if dealer.is_hole_revealed() {
            return self.hand("Dealer", dealer.hand());
        }
        match dealer.up_card() {
            Some(card) => writeln!(self.out, "  Dealer {card} ??"),
            None => Ok(()),
        }
    }

    fn result(&mut self, result: &RoundResult) -> io::Result<()> {
        writeln!(
            self.out,
            "  => {:?}: {} vs {}, net {}, balance {}",
            result.outcome,
            result.player_total,
            result.dealer_total,
            Dollars(result.net),
            Dollars(i64::try_from(result.balance_after).unwrap_or(i64::MAX)),
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = GameOptions::default()
        .with_decks(2)
        .with_starting_balance(10_000)
        .with_bet_limits(100, Some(2_500));
    let mut game = Game::new(options, 7)?;
    let mut table = Table { out: io::stdout() };

    for _ in 0..10 {
        if !game.ledger().can_bet(500) {
            println!("Out of funds.");
            break;
        }
        let handle = game.place_bet(500)?;
        println!("Round {} (bet {})", handle.round, Dollars(500));

        game.deal()?;
        while game.state() == GameState::PlayerActing {
            table.hand("Player", game.player_hand())?;
            table.dealer(game.dealer_hand())?;
            let action = if game.player_hand().value() < 17 {
                Action::Hit
            } else {
                Action::Stand
            };
            game.player_action(action)?;
        }
        game.advance_dealer()?;

        let result = game.result()?;
        table.hand("Player", &result.player_hand)?;
        table.dealer(game.dealer_hand())?;
        table.result(&result)?;
    }

    let status = game.shoe_status();
    let stats = game.stats();
    println!(
        "{} rounds: {}W {}L {}P, net {}; {} cards left",
        stats.rounds,
        stats.wins,
        stats.losses,
        stats.pushes,
        Dollars(stats.net),
        status.remaining
    );
    Ok(())
}
