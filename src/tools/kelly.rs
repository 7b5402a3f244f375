//! Kelly Criterion bet sizing calculator.
//!
//! The Kelly formula sizes a bet to maximise the expected logarithm of wealth,
//! which balances risk and reward optimally over the long run.
//!
//! Standard formula:
//!   f* = (b·p − q) / b
//! where
//!   b  = net odds received on the bet (profit per unit staked, from American odds)
//!   p  = estimated probability of winning
//!   q  = 1 − p  (probability of losing)
//!
//! We apply a *fractional* Kelly multiplier (0 < multiplier ≤ 1) to reduce
//! variance at the cost of slightly lower expected growth.

use crate::error::SharpResult;
use crate::models::KellyResult;
use crate::odds::{decimal_from_american, implied_probability, round_half_up};

/// Quarter-Kelly: the recommended conservative default.
pub const DEFAULT_FRACTIONAL_KELLY: f64 = 0.25;

/// Calculate the suggested stake for a single bet.
///
/// # Arguments
/// * `odds`             – American odds offered (non-zero).
/// * `probability`      – Model's estimated win probability (0.0–1.0).
/// * `bankroll`         – Total funds available. Must be non-negative; not validated.
/// * `fractional_kelly` – Safety multiplier applied to the full-Kelly fraction.
///
/// # Returns
/// A `KellyResult`. When the full-Kelly fraction is non-positive the bet has
/// no edge and `suggested_bet` is `0.0`; the other fields are still filled.
pub fn calculate_kelly_bet(
    odds: i32,
    probability: f64,
    bankroll: f64,
    fractional_kelly: f64,
) -> SharpResult<KellyResult> {
    debug_assert!((0.0..=1.0).contains(&probability), "probability out of range");

    let b = decimal_from_american(odds)?;
    let p = probability;
    let q = 1.0 - p;

    let kelly_fraction = (b * p - q) / b;

    // Break-even point of the price
    let implied = implied_probability(odds)?;
    let edge = p - implied;

    let suggested_bet = if kelly_fraction <= 0.0 {
        0.0 // no edge
    } else {
        round_half_up(bankroll * kelly_fraction * fractional_kelly, 2)
    };

    Ok(KellyResult {
        suggested_bet,
        kelly_fraction,
        decimal_odds: b,
        edge,
        implied_probability: implied,
    })
}
