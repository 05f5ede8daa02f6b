//! Table-driven basic strategy.
//!
//! The dealer up-card is its point value (ace = 11). `can_double` is
//! true only for a two-card hand that has not yet acted; when doubling
//! is unavailable the table falls through to hit or stand.

use hilo_engine::cards::Action;

/// Basic-strategy recommendation, ignoring the count.
pub fn basic_action(total: u32, dealer_up: u32, is_soft: bool, can_double: bool) -> Action {
    if is_soft {
        return soft_action(total, dealer_up, can_double);
    }
    hard_action(total, dealer_up, can_double)
}

fn soft_action(total: u32, dealer_up: u32, can_double: bool) -> Action {
    match total {
        19.. => Action::Stand,
        18 => {
            if can_double && (2..=6).contains(&dealer_up) {
                Action::Double
            } else if dealer_up == 7 || dealer_up == 8 {
                Action::Stand
            } else {
                Action::Hit // vs 9, 10, A
            }
        }
        17 => {
            if can_double && (3..=6).contains(&dealer_up) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        15 | 16 => {
            if can_double && (4..=6).contains(&dealer_up) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        13 | 14 => {
            if can_double && (5..=6).contains(&dealer_up) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        _ => Action::Hit, // A,A through soft 12
    }
}

fn hard_action(total: u32, dealer_up: u32, can_double: bool) -> Action {
    match total {
        17.. => Action::Stand,
        13..=16 => {
            if dealer_up <= 6 {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        12 => {
            if (4..=6).contains(&dealer_up) {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        11 => {
            if can_double {
                Action::Double
            } else {
                Action::Hit
            }
        }
        10 => {
            if can_double && dealer_up <= 9 {
                Action::Double
            } else {
                Action::Hit
            }
        }
        9 => {
            if can_double && (3..=6).contains(&dealer_up) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        _ => Action::Hit,
    }
}
