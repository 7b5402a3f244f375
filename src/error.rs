/// Errors raised by the betting-math tools.
///
/// "No edge" and "no alert" outcomes are ordinary results, not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SharpError {
    /// American odds of zero have no payout definition.
    #[error("Invalid American odds: {0} (odds must be non-zero)")]
    InvalidOdds(i32),

    /// The DFS line and the sharp book line are not the same threshold.
    /// Callers scanning a batch should skip the square and continue.
    #[error("Lines do not match exactly (DFS {dfs_line}, sharp {sharp_line}). Skip or run a different model.")]
    LinesMismatch { dfs_line: f64, sharp_line: f64 },

    #[error("Could not parse American odds from '{0}'")]
    UnparseableOdds(String),
}

pub type SharpResult<T> = std::result::Result<T, SharpError>;
