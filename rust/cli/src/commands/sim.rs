//! Simulation command handler: run a configured number of hands and
//! report the bankroll outcome.
//!
//! Values resolve in three layers: built-in defaults, the configuration
//! file and environment (see the `config` module), then command-line
//! flags. With `--output`, the retained tail of the hand history is
//! written as JSONL.

use std::io::Write;

use hilo_engine::history::HistoryWriter;
use hilo_sim::config::SimConfig;
use hilo_sim::simulation::{run_with_progress, RunEnd, SimReport};

use crate::cli::SimArgs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_money, format_rate};
use crate::ui;

pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };
    apply_overrides(&mut cfg, &args);

    if cfg.hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    if let Err(e) = cfg.validate() {
        ui::write_error(err, &e.to_string())?;
        return Err(CliError::Config(e.to_string()));
    }

    let report = run_with_progress(&cfg, |pct| {
        let _ = write!(err, "\r{:>5.1}%", pct);
    });
    writeln!(err)?;

    if let Some(path) = args.output.as_deref() {
        let mut writer = match HistoryWriter::create(path) {
            Ok(w) => w,
            Err(e) => {
                ui::write_error(err, &format!("Failed to open {}: {}", path, e))?;
                return Err(CliError::Io(e));
            }
        };
        for record in &report.recent_hands {
            writer.write(record)?;
        }
    }

    if args.json {
        write_json_report(&report, out)?;
    } else {
        write_text_report(&report, &cfg, out)?;
    }

    match report.end {
        RunEnd::Failed(e) => Err(CliError::Engine(e.to_string())),
        _ => Ok(()),
    }
}

fn apply_overrides(cfg: &mut SimConfig, args: &SimArgs) {
    if let Some(v) = args.hands {
        cfg.hands = v;
    }
    if let Some(v) = args.decks {
        cfg.decks = v;
    }
    if let Some(v) = args.bankroll {
        cfg.initial_bankroll = v;
    }
    if let Some(v) = args.min_bet {
        cfg.min_bet = v;
    }
    if let Some(v) = args.max_bet {
        cfg.max_bet = v;
    }
    if let Some(v) = args.play {
        cfg.play_strategy = v.into();
    }
    if let Some(v) = args.bet {
        cfg.bet_strategy = v.into();
    }
    if let Some(v) = args.seed {
        cfg.seed = Some(v);
    }
}

fn end_label(end: &RunEnd) -> &'static str {
    match end {
        RunEnd::Completed => "completed",
        RunEnd::Bankrupt => "bankrupt",
        RunEnd::Failed(_) => "failed",
    }
}

fn write_json_report(report: &SimReport, out: &mut dyn Write) -> Result<(), CliError> {
    let display = serde_json::json!({
        "result": report.result,
        "ended": end_label(&report.end),
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn write_text_report(
    report: &SimReport,
    cfg: &SimConfig,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let r = &report.result;
    writeln!(
        out,
        "Hands played: {} (won {}, lost {}, pushed {})",
        r.hands_played, r.hands_won, r.hands_lost, r.hands_pushed
    )?;
    writeln!(out, "Win rate: {}", format_rate(r.win_rate))?;
    writeln!(
        out,
        "Net profit: {} (ROI {:.2}%)",
        format_money(r.net_profit),
        r.roi
    )?;
    writeln!(out, "Total wagered: {}", format_money(r.total_wagered))?;
    writeln!(out, "Max drawdown: {}", format_money(r.max_drawdown))?;
    writeln!(out, "Final bankroll: {}", format_money(r.final_bankroll))?;
    if report.end == RunEnd::Bankrupt {
        writeln!(
            out,
            "Stopped after {} of {} hands: bankroll fell below the {} minimum",
            r.hands_played,
            cfg.hands,
            format_money(cfg.min_bet)
        )?;
    }
    Ok(())
}
