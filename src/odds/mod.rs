//! American odds conversions shared by the EV engine and the Kelly calculator.
//!
//! American odds are signed integers:
//!   +150 → a 100 stake returns 150 profit (underdog)
//!   -110 → a 110 stake returns 100 profit (favourite)
//! Zero is undefined and rejected everywhere.

pub mod shop;

use serde::Serialize;

use crate::error::{SharpError, SharpResult};

/// Vig-free probabilities for the two sides of a market. `over + under == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VigFreePair {
    pub over: f64,
    pub under: f64,
}

fn ensure_nonzero(odds: i32) -> SharpResult<f64> {
    if odds == 0 {
        return Err(SharpError::InvalidOdds(odds));
    }
    Ok(odds as f64)
}

/// Break-even probability implied by American odds. Always in (0, 1).
pub fn implied_probability(odds: i32) -> SharpResult<f64> {
    let o = ensure_nonzero(odds)?;
    if o > 0.0 {
        Ok(100.0 / (o + 100.0))
    } else {
        Ok(o.abs() / (o.abs() + 100.0))
    }
}

/// Net odds received per unit staked (the Kelly `b`).
///
/// This is profit-only, so `+150` gives `1.5` and `-200` gives `0.5`.
pub fn decimal_from_american(odds: i32) -> SharpResult<f64> {
    let o = ensure_nonzero(odds)?;
    if o > 0.0 {
        Ok(o / 100.0)
    } else {
        Ok(100.0 / o.abs())
    }
}

/// Strip the bookmaker margin from a two-way market by normalising both
/// implied probabilities by their sum.
pub fn remove_vig(over_odds: i32, under_odds: i32) -> SharpResult<VigFreePair> {
    let over_prob = implied_probability(over_odds)?;
    let under_prob = implied_probability(under_odds)?;
    let total = over_prob + under_prob;
    Ok(VigFreePair {
        over: over_prob / total,
        under: under_prob / total,
    })
}

/// Parse American odds as typed by a user or returned by a book: `"+150"`,
/// `"-110"` or `"150"`.
pub fn parse_american(raw: &str) -> SharpResult<i32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    match digits.parse::<i32>() {
        Ok(0) => Err(SharpError::InvalidOdds(0)),
        Ok(odds) => Ok(odds),
        Err(_) => Err(SharpError::UnparseableOdds(raw.to_string())),
    }
}

/// Render odds with an explicit sign for non-negative values.
pub fn format_american(odds: i32) -> String {
    if odds >= 0 {
        format!("+{}", odds)
    } else {
        format!("{}", odds)
    }
}

/// Round to `decimals` places with ties going toward +∞.
///
/// `f64::round` sends -12.5 to -13; displayed scores and cent amounts expect -12.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale + 0.5).floor() / scale
}
