//! Advise command handler: one-shot recommendation for a hand in
//! progress.
//!
//! The shoe starts from a full `--decks` shoe, the visible cards (player
//! hand plus dealer up-card) are removed from it, and their Hi-Lo tags
//! are folded into the `--running` count the caller supplies for cards
//! seen earlier in the shoe.

use std::io::Write;
use std::str::FromStr;

use hilo_ai::advisor::advise;
use hilo_ai::PlayStrategy;
use hilo_engine::cards::Rank;
use hilo_engine::count::apply_draw;
use hilo_engine::hand::evaluate;
use hilo_engine::shoe::Shoe;

use crate::cli::AdviseArgs;
use crate::error::CliError;
use crate::formatters::format_money;
use crate::ui;

pub fn handle_advise_command(
    args: AdviseArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let player = parse_cards(&args.player)?;
    if player.len() < 2 {
        ui::write_error(err, "at least two player cards are required")?;
        return Err(CliError::InvalidInput(
            "at least two player cards are required".to_string(),
        ));
    }
    let dealer = Rank::from_str(&args.dealer).map_err(CliError::InvalidInput)?;
    if args.decks < 1 {
        ui::write_error(err, "decks must be >= 1")?;
        return Err(CliError::InvalidInput("decks must be >= 1".to_string()));
    }

    let mut shoe = Shoe::new(args.decks);
    let mut running = args.running;
    for &rank in player.iter().chain(std::iter::once(&dealer)) {
        if shoe.consume(rank).is_err() {
            let msg = format!("no {} left in a {}-deck shoe", rank, args.decks);
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
        running = apply_draw(running, rank);
    }

    let strategy = args.play.map(PlayStrategy::from).unwrap_or_default();
    let advice = advise(&shoe, &player, dealer, running, args.bankroll, strategy);

    if args.json {
        let display = serde_json::json!({
            "action": advice.action,
            "win_probability": advice.win_probability,
            "bet": advice.bet,
            "true_count": advice.true_count,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        let value = evaluate(&player);
        writeln!(
            out,
            "Hand: {} ({}{}) vs dealer {}",
            args.player.replace(',', " "),
            if value.is_soft { "soft " } else { "" },
            value.total,
            dealer
        )?;
        writeln!(out, "Action: {}", advice.action)?;
        writeln!(
            out,
            "Win probability: {:.1}%",
            advice.win_probability * 100.0
        )?;
        writeln!(out, "True count: {:+.1}", advice.true_count)?;
        writeln!(out, "Suggested bet: {}", format_money(advice.bet))?;
    }
    Ok(())
}

fn parse_cards(list: &str) -> Result<Vec<Rank>, CliError> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| Rank::from_str(s).map_err(CliError::InvalidInput))
        .collect()
}
