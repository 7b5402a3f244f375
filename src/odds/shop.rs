//! Line shopping: pick the book paying the best price for the same prop.

use serde::Serialize;

use super::{format_american, parse_american};
use crate::error::{SharpError, SharpResult};

/// One sportsbook's price for a prop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookQuote {
    pub book: String,
    pub odds: i32,
}

impl BookQuote {
    pub fn new(book: impl Into<String>, odds: i32) -> Self {
        BookQuote {
            book: book.into(),
            odds,
        }
    }

    /// Parse `Book=odds`, e.g. `DraftKings=-108`.
    pub fn parse(raw: &str) -> SharpResult<Self> {
        let (book, odds) = raw
            .split_once('=')
            .ok_or_else(|| SharpError::UnparseableOdds(raw.to_string()))?;
        Ok(BookQuote::new(book.trim(), parse_american(odds)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineComparison {
    /// Name of the best-paying book, or "Tie" when two books share the top price.
    pub best_book: String,
    pub best_odds: i32,
    pub best_odds_str: String,
    /// Points between the best and second-best price (0 with a single quote).
    pub edge_diff: i32,
    /// Every quote, best first.
    pub ranked: Vec<BookQuote>,
}

/// Rank quotes by price. A higher American number always pays more, for
/// favourites and underdogs alike.
pub fn compare_lines(quotes: &[BookQuote]) -> Option<LineComparison> {
    let mut ranked = quotes.to_vec();
    // Stable sort keeps input order among equal prices.
    ranked.sort_by(|a, b| b.odds.cmp(&a.odds));

    let best = ranked.first()?.clone();
    let (best_book, edge_diff) = match ranked.get(1) {
        Some(second) if second.odds == best.odds => ("Tie".to_string(), 0),
        Some(second) => (best.book.clone(), best.odds - second.odds),
        None => (best.book.clone(), 0),
    };

    Some(LineComparison {
        best_book,
        best_odds: best.odds,
        best_odds_str: format_american(best.odds),
        edge_diff,
        ranked,
    })
}
