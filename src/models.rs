use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Side of a player prop the sharp book favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Play {
    Over,
    Under,
}

/// What to do with an analysed DFS square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    LockIn,
    Pass,
}

/// Result of evaluating one DFS square against a sharp book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DfsAnalysis {
    pub player: String,
    pub stat: String,
    pub line: f64,
    pub suggested_play: Play,
    /// Vig-free win probability of the suggested side (0.0–1.0)
    pub true_prob: f64,
    /// Same probability rendered as e.g. "56.0%"
    pub true_win_probability: String,
    /// Percentage points above the DFS breakeven (negative when unprofitable)
    pub edge_percentage: f64,
    /// "+1.80%" or "Negative EV"
    pub dfs_edge: String,
    pub is_profitable: bool,
    pub action: Action,
    pub sharp_over: i32,
    pub sharp_under: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KellyResult {
    /// Stake in bankroll currency, rounded to cents. Zero means "no bet".
    pub suggested_bet: f64,
    /// Full-Kelly fraction before the safety multiplier; may be negative.
    pub kelly_fraction: f64,
    /// Net odds per unit staked.
    pub decimal_odds: f64,
    /// Model probability minus implied probability
    pub edge: f64,
    pub implied_probability: f64,
}

/// Latest quote for a tracked market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub market_id: String,
    pub label: String,
    pub current_odds: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveKind {
    /// Odds shortened: sharp money on this side
    Steam,
    /// Odds drifted out: public or no interest
    Drop,
}

/// Outcome of comparing an observation against the tracked baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movement {
    pub alert: bool,
    pub movement: i32,
    pub kind: Option<MoveKind>,
}

/// A threshold-crossing line move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAlert {
    pub market_id: String,
    pub label: String,
    pub old_odds: i32,
    pub new_odds: i32,
    pub movement_pts: i32,
    pub kind: MoveKind,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    /// -1.0 (bad news) to +1.0 (good news)
    pub polarity: f64,
    /// 0.0 (factual) to 1.0 (opinionated)
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalBand {
    StrongPositive,
    Positive,
    Neutral,
    Negative,
    StrongNegative,
}

impl SignalBand {
    pub fn label(&self) -> &'static str {
        match self {
            SignalBand::StrongPositive => "STRONG POSITIVE",
            SignalBand::Positive => "POSITIVE",
            SignalBand::Neutral => "NEUTRAL",
            SignalBand::Negative => "NEGATIVE",
            SignalBand::StrongNegative => "STRONG NEGATIVE",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            SignalBand::StrongPositive => {
                "Bullish signal: line likely moves UP. Consider favourites."
            }
            SignalBand::Positive => "Mild upward pressure expected on the line.",
            SignalBand::Neutral => "No clear directional signal from this headline.",
            SignalBand::Negative => "Mild downward pressure: markets may soften.",
            SignalBand::StrongNegative => {
                "Bearish signal: line likely moves DOWN or becomes unavailable."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalClassification {
    pub band: SignalBand,
    pub label: &'static str,
    pub detail: &'static str,
    pub polarity: f64,
}
