pub mod provider;
pub mod simulated;

pub use provider::OddsFeed;
pub use simulated::{simulate_live_odds, SimulatedBook};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::models::LineAlert;
use crate::tools::lines::LineTracker;

/// Default poll interval for live odds.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(6);

/// Spawns a background task that polls every feed concurrently at
/// `poll_interval`, runs each quote through `tracker`, and sends a
/// `LineAlert` through the returned channel whenever a move crosses
/// `threshold`.
///
/// The task owns the tracker, so no locking is needed. It stops when the
/// receiver is dropped.
pub fn start_line_monitor(
    feeds: Vec<Arc<dyn OddsFeed>>,
    mut tracker: LineTracker,
    poll_interval: Duration,
    threshold: i32,
) -> mpsc::Receiver<LineAlert> {
    let (tx, rx) = mpsc::channel(256);

    tokio::spawn(async move {
        let feed_names: Vec<&str> = feeds.iter().map(|f| f.name()).collect();
        info!(
            "Line monitor started ({} feeds: {:?}, interval={:?}, threshold={})",
            feeds.len(),
            feed_names,
            poll_interval,
            threshold
        );

        let feed_timeout = poll_interval.min(Duration::from_secs(2));
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            interval.tick().await;

            let fetch_futures: Vec<_> = feeds
                .iter()
                .map(|f| {
                    let f = Arc::clone(f);
                    async move {
                        let res = tokio::time::timeout(feed_timeout, f.fetch_snapshots()).await;
                        let out = match res {
                            Ok(result) => result,
                            Err(_) => Err(anyhow::anyhow!("timed out after {:?}", feed_timeout)),
                        };
                        (f.name().to_string(), out)
                    }
                })
                .collect();

            let results = futures_util::future::join_all(fetch_futures).await;

            for (feed_name, result) in results {
                let snapshots = match result {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("Feed '{}' failed: {}", feed_name, e);
                        continue;
                    }
                };
                for snapshot in &snapshots {
                    let Some(alert) = tracker.observe(snapshot, threshold) else {
                        continue;
                    };
                    info!(
                        "{:?} {}: {} → {} ({:+} pts, via {})",
                        alert.kind,
                        alert.label,
                        alert.old_odds,
                        alert.new_odds,
                        alert.movement_pts,
                        feed_name
                    );
                    match tx.try_send(alert) {
                        Ok(()) => {}
                        Err(mpsc::error::TrySendError::Closed(_)) => {
                            info!("Line monitor receiver dropped, stopping");
                            return;
                        }
                        Err(e) => error!("Line alert channel full, alert DROPPED: {}", e),
                    }
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarketSnapshot, MoveKind};
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    /// Replays a fixed sequence of prices for one market, then repeats the last.
    struct Scripted {
        prices: Mutex<Vec<i32>>,
    }

    #[async_trait]
    impl OddsFeed for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        async fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>> {
            let mut prices = self.prices.lock().unwrap();
            let odds = if prices.len() > 1 {
                prices.remove(0)
            } else {
                prices[0]
            };
            Ok(vec![MarketSnapshot {
                market_id: "M".into(),
                label: "Market M".into(),
                current_odds: odds,
                timestamp: Utc::now(),
            }])
        }
    }

    struct Broken;

    #[async_trait]
    impl OddsFeed for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        async fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>> {
            anyhow::bail!("book offline")
        }
    }

    #[tokio::test]
    async fn monitor_emits_accumulated_steam_and_survives_broken_feed() {
        let feeds: Vec<Arc<dyn OddsFeed>> = vec![
            Arc::new(Broken),
            Arc::new(Scripted {
                prices: Mutex::new(vec![-114, -117, -121]),
            }),
        ];
        let mut tracker = LineTracker::new();
        tracker.seed("M", -110);

        let mut rx = start_line_monitor(feeds, tracker, Duration::from_millis(10), 10);
        let alert = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("alert within timeout")
            .expect("channel open");

        assert_eq!(alert.kind, MoveKind::Steam);
        assert_eq!(alert.old_odds, -110);
        assert_eq!(alert.new_odds, -121);
        assert_eq!(alert.movement_pts, -11);
    }

    #[tokio::test]
    async fn simulated_book_produces_alerts() {
        use crate::presets::LIVE_MARKETS;

        let book = Arc::new(SimulatedBook::new("SimBook", LIVE_MARKETS));
        let mut tracker = LineTracker::new();
        for m in LIVE_MARKETS {
            tracker.seed(m.id, m.base_line);
        }
        let mut rx = start_line_monitor(vec![book], tracker, Duration::from_millis(5), 10);
        let alert = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("alert within timeout")
            .expect("channel open");
        assert!(alert.movement_pts.abs() >= 10);
    }
}
