//! Configuration command handler.
//!
//! Displays the resolved configuration as JSON, with each value tagged
//! by its source (default, configuration file, or environment).

use std::io::Write;

use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        },
        "initial_bankroll": {
            "value": config.initial_bankroll,
            "source": sources.initial_bankroll,
        },
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "max_bet": {
            "value": config.max_bet,
            "source": sources.max_bet,
        },
        "play_strategy": {
            "value": config.play_strategy,
            "source": sources.play_strategy,
        },
        "bet_strategy": {
            "value": config.bet_strategy,
            "source": sources.bet_strategy,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
