//! Formatting helpers for terminal display of money, percentages, and
//! card lists. Pure functions, usable from any command handler.

use hilo_engine::cards::Rank;

/// Format a dollar amount with the sign outside the currency symbol,
/// e.g. `-12.5` becomes `-$12.50`.
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format a fraction in `[0, 1]` as a percentage, e.g. `0.431` becomes
/// `43.1%`.
pub fn format_rate(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format a list of card ranks, e.g. `[Ace, Nine]` becomes `A 9`.
pub fn format_cards(cards: &[Rank]) -> String {
    cards
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
