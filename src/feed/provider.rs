use anyhow::Result;
use async_trait::async_trait;

use crate::models::MarketSnapshot;

/// Trait that every odds source must implement.
#[async_trait]
pub trait OddsFeed: Send + Sync {
    /// Return the current quote for every market this feed covers.
    async fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
