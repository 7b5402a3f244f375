use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::provider::OddsFeed;
use crate::models::MarketSnapshot;
use crate::presets::SimulatedMarket;

/// Deterministic drift applied to a base line at a given tick.
///
/// Two out-of-phase waves give a wobble of up to ±14 points, enough to
/// cross the default alert threshold now and then.
pub fn simulate_live_odds(base: i32, tick: u64) -> i32 {
    let t = tick as f64;
    let b = base as f64;
    let drift = (t * 0.7 + b * 0.01).sin() * 8.0 + (t * 1.3 + b * 0.02).cos() * 6.0;
    base + (drift + 0.5).floor() as i32
}

/// Stand-in sportsbook that quotes a fixed set of markets with scripted drift.
/// Every fetch advances the tick by one.
pub struct SimulatedBook {
    name: String,
    markets: Vec<SimulatedMarket>,
    tick: AtomicU64,
}

impl SimulatedBook {
    pub fn new(name: &str, markets: &[SimulatedMarket]) -> Self {
        SimulatedBook {
            name: name.to_string(),
            markets: markets.to_vec(),
            tick: AtomicU64::new(0),
        }
    }

    pub fn markets(&self) -> &[SimulatedMarket] {
        &self.markets
    }
}

#[async_trait]
impl OddsFeed for SimulatedBook {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>> {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        debug!("{} quoting tick {}", self.name, tick);
        Ok(self
            .markets
            .iter()
            .map(|m| MarketSnapshot {
                market_id: m.id.to_string(),
                label: m.label.to_string(),
                current_odds: simulate_live_odds(m.base_line, tick),
                timestamp: now,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::LIVE_MARKETS;

    #[test]
    fn drift_is_bounded_and_deterministic() {
        for m in LIVE_MARKETS {
            for tick in 0..200 {
                let odds = simulate_live_odds(m.base_line, tick);
                assert!((odds - m.base_line).abs() <= 14);
                assert_eq!(odds, simulate_live_odds(m.base_line, tick));
            }
        }
    }

    #[tokio::test]
    async fn each_fetch_advances_one_tick() {
        let book = SimulatedBook::new("SimBook", LIVE_MARKETS);
        let first = book.fetch_snapshots().await.unwrap();
        let second = book.fetch_snapshots().await.unwrap();
        assert_eq!(first.len(), LIVE_MARKETS.len());
        for (i, m) in book.markets().iter().enumerate() {
            assert_eq!(first[i].market_id, m.id);
            assert_eq!(first[i].current_odds, simulate_live_odds(m.base_line, 1));
            assert_eq!(second[i].current_odds, simulate_live_odds(m.base_line, 2));
        }
    }
}
