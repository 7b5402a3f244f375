//! Betting-math and text-signal tools: DFS square EV, Kelly sizing, line
//! movement alerts and headline sentiment.

pub mod alerts;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod odds;
pub mod presets;
pub mod tools;

pub use error::{SharpError, SharpResult};
