use clap::{Parser, Subcommand, ValueEnum};

use crate::odds::parse_american;

/// Sharp betting tools: DFS EV, Kelly sizing, line movement, headline sentiment
#[derive(Parser, Debug, Clone)]
#[command(name = "sharp-tools", version, about)]
pub struct Config {
    /// Fractional Kelly multiplier applied to the full-Kelly stake (0.0–1.0)
    #[arg(long, env = "KELLY_FRACTION", default_value = "0.25", global = true)]
    pub kelly_fraction: f64,

    /// Line movement (American odds points) that triggers a STEAM/DROP alert
    #[arg(long, env = "LINE_ALERT_THRESHOLD", default_value = "10", global = true)]
    pub threshold: i32,

    /// Edge (percentage points) at which premium alerts are dispatched
    #[arg(long, env = "PREMIUM_EDGE", default_value = "5.0", global = true)]
    pub premium_edge: f64,

    /// Odds feed polling interval in milliseconds
    #[arg(long, env = "POLL_INTERVAL_MS", default_value = "6000", global = true)]
    pub poll_interval_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyse one DFS square against a sharp book's two-way price
    Ev {
        #[arg(long)]
        player: String,
        #[arg(long)]
        stat: String,
        #[arg(long)]
        dfs_line: f64,
        #[arg(long)]
        sharp_line: f64,
        /// Sharp OVER price, e.g. -145
        #[arg(long, allow_hyphen_values = true, value_parser = odds_arg)]
        over: i32,
        /// Sharp UNDER price, e.g. +115
        #[arg(long, allow_hyphen_values = true, value_parser = odds_arg)]
        under: i32,
    },
    /// Analyse the built-in prop presets and dispatch premium alerts
    Scan {
        /// Sportsbook named in premium alerts
        #[arg(long, default_value = "FanDuel")]
        bookmaker: String,
        /// Phone numbers to include in SMS alerts
        #[arg(long = "sms")]
        phones: Vec<String>,
    },
    /// Size a bet with the Kelly criterion
    Kelly {
        /// American odds, e.g. +150 or -110
        #[arg(long, allow_hyphen_values = true, value_parser = odds_arg)]
        odds: i32,
        /// Model win probability (0.0–1.0)
        #[arg(long)]
        probability: f64,
        #[arg(long)]
        bankroll: f64,
        /// Named fraction; overrides --kelly-fraction
        #[arg(long, value_enum)]
        preset: Option<KellyPreset>,
    },
    /// Score headline sentiment and map it to a market signal
    Sentiment {
        /// Headline text (omit with --presets)
        headline: Option<String>,
        /// Score the built-in sample headlines
        #[arg(long)]
        presets: bool,
    },
    /// Watch the simulated odds feed for STEAM/DROP moves
    Lines {
        /// Stop after this many polls
        #[arg(long, default_value = "20")]
        ticks: u32,
    },
    /// Compare one prop's price across books: --quote FanDuel=-115 --quote DraftKings=-108
    Shop {
        #[arg(long = "quote", required = true)]
        quotes: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KellyPreset {
    /// Max growth, high variance
    Full,
    /// Balanced risk
    Half,
    /// Recommended, conservative
    Quarter,
    /// Ultra-conservative
    Eighth,
}

impl KellyPreset {
    pub fn fraction(&self) -> f64 {
        match self {
            KellyPreset::Full => 1.0,
            KellyPreset::Half => 0.5,
            KellyPreset::Quarter => 0.25,
            KellyPreset::Eighth => 0.125,
        }
    }
}

fn odds_arg(raw: &str) -> Result<i32, String> {
    parse_american(raw).map_err(|e| e.to_string())
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.kelly_fraction > 0.0 && self.kelly_fraction <= 1.0) {
            anyhow::bail!("kelly_fraction must be in (0.0, 1.0]");
        }
        if self.threshold <= 0 {
            anyhow::bail!("threshold must be a positive number of odds points");
        }
        if self.premium_edge < 0.0 {
            anyhow::bail!("premium_edge must be non-negative");
        }
        if self.poll_interval_ms == 0 {
            anyhow::bail!("poll_interval_ms must be positive");
        }
        if let Command::Kelly {
            probability,
            bankroll,
            ..
        } = &self.command
        {
            if !(0.0..=1.0).contains(probability) {
                anyhow::bail!("probability must be between 0.0 and 1.0");
            }
            if *bankroll < 0.0 {
                anyhow::bail!("bankroll must be non-negative");
            }
        }
        if let Command::Sentiment { headline, presets } = &self.command {
            if headline.is_none() && !presets {
                anyhow::bail!("provide a headline or --presets");
            }
        }
        Ok(())
    }
}
