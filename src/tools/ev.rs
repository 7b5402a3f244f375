//! DFS square expected-value engine.
//!
//! A DFS platform pays a fixed multiple on an N-pick entry regardless of the
//! individual legs, so each leg only has to beat a fixed breakeven win rate.
//! A sharp sportsbook's two-way price on the *same* line, with the vig
//! removed, is our estimate of the true probability:
//!
//!   edge (pts) = (max(p_over, p_under) − breakeven) × 100
//!
//! The comparison is only meaningful at identical thresholds, so mismatched
//! lines are rejected instead of approximated.

use tracing::{debug, warn};

use crate::error::{SharpError, SharpResult};
use crate::models::{Action, DfsAnalysis, Play};
use crate::odds::remove_vig;
use crate::presets::PropPreset;

/// Breakeven win probability per leg on a 5-pick flex payout table.
pub const DFS_BREAKEVEN_PROB: f64 = 0.542;

/// Minimum edge (percentage points) to label a square LOCK_IN.
pub const LOCK_IN_EDGE_PCT: f64 = 1.5;

/// Edge (percentage points) at which premium subscribers get notified.
pub const PREMIUM_EDGE_THRESHOLD: f64 = 5.0;

/// Determine whether a DFS square is +EV against the sharp book.
pub fn analyze_dfs_square(
    player: &str,
    stat: &str,
    dfs_line: f64,
    sharp_line: f64,
    sharp_over: i32,
    sharp_under: i32,
) -> SharpResult<DfsAnalysis> {
    if dfs_line != sharp_line {
        return Err(SharpError::LinesMismatch {
            dfs_line,
            sharp_line,
        });
    }

    let fair = remove_vig(sharp_over, sharp_under)?;

    let (suggested_play, win_chance) = if fair.over > fair.under {
        (Play::Over, fair.over)
    } else {
        (Play::Under, fair.under)
    };

    let is_profitable = win_chance > DFS_BREAKEVEN_PROB;
    let edge_percentage = (win_chance - DFS_BREAKEVEN_PROB) * 100.0;

    let action = if is_profitable && edge_percentage >= LOCK_IN_EDGE_PCT {
        Action::LockIn
    } else {
        Action::Pass
    };

    let dfs_edge = if is_profitable {
        format!("+{:.2}%", edge_percentage)
    } else {
        "Negative EV".to_string()
    };

    Ok(DfsAnalysis {
        player: player.to_string(),
        stat: stat.to_string(),
        line: dfs_line,
        suggested_play,
        true_prob: win_chance,
        true_win_probability: format!("{:.1}%", win_chance * 100.0),
        edge_percentage,
        dfs_edge,
        is_profitable,
        action,
        sharp_over,
        sharp_under,
    })
}

impl DfsAnalysis {
    /// Whether this square clears the premium-notification bar.
    pub fn is_premium(&self, threshold: f64) -> bool {
        self.edge_percentage >= threshold
    }
}

/// Analyse a batch of props. Squares whose lines don't match (or whose odds
/// are invalid) are logged and skipped; the rest of the batch still runs.
pub fn scan(presets: &[PropPreset]) -> Vec<DfsAnalysis> {
    let mut out = Vec::with_capacity(presets.len());
    for p in presets {
        match analyze_dfs_square(
            p.player,
            p.stat,
            p.dfs_line,
            p.sharp_line,
            p.sharp_over,
            p.sharp_under,
        ) {
            Ok(analysis) => {
                debug!(
                    "{} {} {}: {:?} {} ({})",
                    analysis.player,
                    analysis.stat,
                    analysis.line,
                    analysis.suggested_play,
                    analysis.true_win_probability,
                    analysis.dfs_edge
                );
                out.push(analysis);
            }
            Err(e) => warn!("Skipping {} {}: {}", p.player, p.stat, e),
        }
    }
    out
}
