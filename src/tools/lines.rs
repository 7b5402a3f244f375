//! Line-movement detection.
//!
//! The tracker keeps one baseline price per market. A baseline only moves
//! when an alert fires, so a slow drift of small ticks accumulates until it
//! crosses the threshold instead of being reset on every observation.
//!
//! Not synchronised: callers sharing a tracker across threads must serialise
//! access themselves (the line monitor owns its tracker inside one task).

use std::collections::{HashMap, VecDeque};

use crate::models::{LineAlert, MarketSnapshot, MoveKind, Movement};

/// Default alert threshold in American-odds points.
pub const DEFAULT_THRESHOLD: i32 = 10;

/// Alerts kept by [`AlertLog`] before the oldest are dropped.
pub const MAX_ALERTS: usize = 30;

#[derive(Debug, Default)]
pub struct LineTracker {
    /// market_id → baseline odds (the last alert-triggering or seeded value)
    history: HashMap<String, i32>,
}

impl LineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a market's baseline without comparing.
    pub fn seed(&mut self, market_id: &str, odds: i32) {
        self.history.insert(market_id.to_string(), odds);
    }

    /// Compare `current_odds` against the market's baseline.
    ///
    /// Returns `None` the first time a market is seen (it becomes the
    /// baseline). Otherwise reports the movement; when `|movement| >=
    /// threshold` the move is classified and the baseline advances.
    pub fn check_for_movement(
        &mut self,
        market_id: &str,
        current_odds: i32,
        threshold: i32,
    ) -> Option<Movement> {
        let Some(&baseline) = self.history.get(market_id) else {
            self.history.insert(market_id.to_string(), current_odds);
            return None;
        };

        let movement = current_odds - baseline;
        if movement.abs() >= threshold {
            // Shorter odds = more implied probability = sharp money
            let kind = if movement < 0 {
                MoveKind::Steam
            } else {
                MoveKind::Drop
            };
            self.history.insert(market_id.to_string(), current_odds);
            Some(Movement {
                alert: true,
                movement,
                kind: Some(kind),
            })
        } else {
            Some(Movement {
                alert: false,
                movement,
                kind: None,
            })
        }
    }

    /// Run a snapshot through [`check_for_movement`](Self::check_for_movement)
    /// and build the alert record when one fires.
    pub fn observe(&mut self, snapshot: &MarketSnapshot, threshold: i32) -> Option<LineAlert> {
        let result =
            self.check_for_movement(&snapshot.market_id, snapshot.current_odds, threshold)?;
        let kind = result.kind.filter(|_| result.alert)?;
        Some(LineAlert {
            market_id: snapshot.market_id.clone(),
            label: snapshot.label.clone(),
            old_odds: snapshot.current_odds - result.movement,
            new_odds: snapshot.current_odds,
            movement_pts: result.movement,
            kind,
            timestamp: snapshot.timestamp,
        })
    }

    /// Copy of the current baselines.
    pub fn history(&self) -> HashMap<String, i32> {
        self.history.clone()
    }
}

/// Newest-first alert feed with a fixed capacity.
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: VecDeque<LineAlert>,
    total_moves: u64,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, alert: LineAlert) {
        self.alerts.push_front(alert);
        self.alerts.truncate(MAX_ALERTS);
        self.total_moves += 1;
    }

    pub fn alerts(&self) -> impl Iterator<Item = &LineAlert> {
        self.alerts.iter()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Every alert ever pushed, including ones that have rolled off.
    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    pub fn clear(&mut self) {
        self.alerts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snap(id: &str, odds: i32) -> MarketSnapshot {
        MarketSnapshot {
            market_id: id.to_string(),
            label: format!("{} label", id),
            current_odds: odds,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn first_observation_seeds_without_alert() {
        let mut t = LineTracker::new();
        assert_eq!(t.check_for_movement("M", -110, DEFAULT_THRESHOLD), None);
        assert_eq!(t.history().get("M"), Some(&-110));
    }

    #[test]
    fn sub_threshold_moves_accumulate_against_baseline() {
        let mut t = LineTracker::new();
        t.seed("M", -110);

        let r = t.check_for_movement("M", -114, DEFAULT_THRESHOLD).unwrap();
        assert!(!r.alert);
        assert_eq!(r.movement, -4);
        assert_eq!(r.kind, None);

        // Compared to -110, not -114
        let r = t.check_for_movement("M", -117, DEFAULT_THRESHOLD).unwrap();
        assert!(!r.alert);
        assert_eq!(r.movement, -7);
        assert_eq!(t.history().get("M"), Some(&-110));

        // Only -3 from the previous tick, but -11 from the baseline
        let r = t.check_for_movement("M", -121, DEFAULT_THRESHOLD).unwrap();
        assert!(r.alert);
        assert_eq!(r.movement, -11);
        assert_eq!(r.kind, Some(MoveKind::Steam));
        assert_eq!(t.history().get("M"), Some(&-121));
    }

    #[test]
    fn drift_out_is_drop() {
        let mut t = LineTracker::new();
        t.seed("M", -130);
        let r = t.check_for_movement("M", -118, DEFAULT_THRESHOLD).unwrap();
        assert_eq!(r.kind, Some(MoveKind::Drop));
        assert_eq!(r.movement, 12);
    }

    #[test]
    fn exactly_threshold_fires() {
        let mut t = LineTracker::new();
        t.seed("M", 105);
        let r = t.check_for_movement("M", 95, DEFAULT_THRESHOLD).unwrap();
        assert!(r.alert);
        assert_eq!(r.kind, Some(MoveKind::Steam));
    }

    #[test]
    fn custom_threshold_and_independent_markets() {
        let mut t = LineTracker::new();
        t.seed("A", -110);
        t.seed("B", -110);
        let r = t.check_for_movement("A", -115, 5).unwrap();
        assert!(r.alert);
        let r = t.check_for_movement("B", -115, 20).unwrap();
        assert!(!r.alert);
        assert_eq!(t.history().get("A"), Some(&-115));
        assert_eq!(t.history().get("B"), Some(&-110));
    }

    #[test]
    fn history_is_a_snapshot() {
        let mut t = LineTracker::new();
        t.seed("M", 100);
        let mut copy = t.history();
        copy.insert("M".into(), 999);
        assert_eq!(t.history().get("M"), Some(&100));
    }

    #[test]
    fn observe_builds_alert() {
        let mut t = LineTracker::new();
        assert!(t.observe(&snap("BOS_vs_LAL", -115), DEFAULT_THRESHOLD).is_none());
        assert!(t.observe(&snap("BOS_vs_LAL", -120), DEFAULT_THRESHOLD).is_none());
        let alert = t.observe(&snap("BOS_vs_LAL", -127), DEFAULT_THRESHOLD).unwrap();
        assert_eq!(alert.old_odds, -115);
        assert_eq!(alert.new_odds, -127);
        assert_eq!(alert.movement_pts, -12);
        assert_eq!(alert.kind, MoveKind::Steam);
        assert_eq!(alert.label, "BOS_vs_LAL label");
    }

    #[test]
    fn alert_log_is_capped_newest_first() {
        let mut t = LineTracker::new();
        let mut log = AlertLog::new();
        t.seed("M", 100);
        for i in 1..=40 {
            // Alternate 20 points either side so every tick fires
            let odds = if i % 2 == 0 { 100 } else { 120 };
            if let Some(a) = t.observe(&snap("M", odds), DEFAULT_THRESHOLD) {
                log.push(a);
            }
        }
        assert_eq!(log.len(), MAX_ALERTS);
        assert_eq!(log.total_moves(), 40);
        // Tick 40 moved back to +100: a steam move
        assert_eq!(log.alerts().next().unwrap().kind, MoveKind::Steam);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total_moves(), 40);
    }
}
