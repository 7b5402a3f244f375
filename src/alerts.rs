//! Premium-edge notifications.
//!
//! Squares at or above the premium edge are turned into payloads and handed
//! to a dispatcher. The only dispatcher shipped here writes the rendered
//! webhook and SMS messages to the log; delivery is someone else's job.

use serde::Serialize;
use tracing::{info, warn};

use crate::models::DfsAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPayload {
    pub player: String,
    pub stat: String,
    pub line: String,
    pub true_prob: String,
    /// Edge in percentage points, two decimals
    pub edge: String,
    pub bookmaker: String,
}

impl AlertPayload {
    pub fn from_analysis(analysis: &DfsAnalysis, bookmaker: &str) -> Self {
        AlertPayload {
            player: analysis.player.clone(),
            stat: analysis.stat.clone(),
            line: format!("{:?} {}", analysis.suggested_play, analysis.line).to_uppercase(),
            true_prob: analysis.true_win_probability.clone(),
            edge: format!("{:.2}", analysis.edge_percentage),
            bookmaker: bookmaker.to_string(),
        }
    }

    /// Multi-line message for the VIP channel webhook.
    pub fn vip_message(&self) -> String {
        format!(
            "🚨 MASSIVE EDGE DETECTED 🚨\nPlayer: {}\nStat: {}\nLine: {}\nTrue Prob: {}\nEdge: {}%\nBook: {}",
            self.player, self.stat, self.line, self.true_prob, self.edge, self.bookmaker
        )
    }

    /// One-line message suitable for SMS.
    pub fn sms_message(&self) -> String {
        format!(
            "VIP Alert: {} {} {}. Edge: {}% at {}.",
            self.player, self.stat, self.line, self.edge, self.bookmaker
        )
    }
}

pub trait AlertDispatcher {
    fn dispatch(&self, payload: &AlertPayload) -> anyhow::Result<()>;
}

/// Logs the rendered messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogDispatcher {
    /// SMS recipients; the webhook message is always logged.
    pub phones: Vec<String>,
}

impl AlertDispatcher for LogDispatcher {
    fn dispatch(&self, payload: &AlertPayload) -> anyhow::Result<()> {
        info!("[VIP WEBHOOK] {}", payload.vip_message());
        for phone in &self.phones {
            info!("[SMS {}] {}", phone, payload.sms_message());
        }
        Ok(())
    }
}

/// Dispatch a payload for every analysis with `edge_percentage >= threshold`.
/// Returns the number of alerts sent; a failed dispatch is logged and skipped.
pub fn dispatch_premium(
    analyses: &[DfsAnalysis],
    threshold: f64,
    bookmaker: &str,
    dispatcher: &dyn AlertDispatcher,
) -> usize {
    let mut sent = 0;
    for analysis in analyses.iter().filter(|a| a.is_premium(threshold)) {
        let payload = AlertPayload::from_analysis(analysis, bookmaker);
        match dispatcher.dispatch(&payload) {
            Ok(()) => sent += 1,
            Err(e) => warn!("Premium alert for {} failed: {}", analysis.player, e),
        }
    }
    sent
}
