use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use sharp_tools::alerts::{dispatch_premium, LogDispatcher};
use sharp_tools::config::{Command, Config};
use sharp_tools::feed::{start_line_monitor, OddsFeed, SimulatedBook};
use sharp_tools::odds::shop::{compare_lines, BookQuote};
use sharp_tools::presets::{HEADLINE_PRESETS, LIVE_MARKETS, PROP_PRESETS};
use sharp_tools::tools::{
    analyze_dfs_square, calculate_kelly_bet, ev, get_news_sentiment, get_signal, AlertLog,
    LineTracker,
};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct HeadlineReport<'a> {
    headline: &'a str,
    polarity: f64,
    subjectivity: f64,
    signal: &'static str,
    detail: &'static str,
}

fn headline_report(headline: &str) -> HeadlineReport<'_> {
    let sentiment = get_news_sentiment(headline);
    let signal = get_signal(sentiment.polarity);
    HeadlineReport {
        headline,
        polarity: sentiment.polarity,
        subjectivity: sentiment.subjectivity,
        signal: signal.label,
        detail: signal.detail,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    match &config.command {
        Command::Ev {
            player,
            stat,
            dfs_line,
            sharp_line,
            over,
            under,
        } => {
            let analysis = analyze_dfs_square(player, stat, *dfs_line, *sharp_line, *over, *under)?;
            if analysis.is_premium(config.premium_edge) {
                info!(
                    "Premium edge: {} {} at {:.2} pts",
                    analysis.player, analysis.stat, analysis.edge_percentage
                );
            }
            print_json(&analysis)?;
        }

        Command::Scan { bookmaker, phones } => {
            let analyses = ev::scan(PROP_PRESETS);
            info!(
                "Analysed {}/{} props, {} profitable",
                analyses.len(),
                PROP_PRESETS.len(),
                analyses.iter().filter(|a| a.is_profitable).count()
            );
            let dispatcher = LogDispatcher {
                phones: phones.clone(),
            };
            let sent = dispatch_premium(&analyses, config.premium_edge, bookmaker, &dispatcher);
            if sent > 0 {
                info!("Dispatched {} premium alert(s)", sent);
            }
            print_json(&analyses)?;
        }

        Command::Kelly {
            odds,
            probability,
            bankroll,
            preset,
        } => {
            let fraction = preset.map(|p| p.fraction()).unwrap_or(config.kelly_fraction);
            let result = calculate_kelly_bet(*odds, *probability, *bankroll, fraction)?;
            if result.suggested_bet == 0.0 {
                warn!(
                    "No edge: model {:.1}% vs implied {:.1}%, don't bet",
                    probability * 100.0,
                    result.implied_probability * 100.0
                );
            }
            print_json(&result)?;
        }

        Command::Sentiment { headline, presets } => {
            let reports: Vec<HeadlineReport> = if *presets {
                HEADLINE_PRESETS
                    .iter()
                    .map(|(_, text)| headline_report(text))
                    .collect()
            } else {
                headline.iter().map(|h| headline_report(h)).collect()
            };
            print_json(&reports)?;
        }

        Command::Lines { ticks } => {
            let book = Arc::new(SimulatedBook::new("SimBook", LIVE_MARKETS));
            let mut tracker = LineTracker::new();
            for m in book.markets() {
                tracker.seed(m.id, m.base_line);
            }
            let feeds: Vec<Arc<dyn OddsFeed>> = vec![book];
            let poll_interval = Duration::from_millis(config.poll_interval_ms);
            let mut rx = start_line_monitor(feeds, tracker, poll_interval, config.threshold);

            let mut log = AlertLog::new();
            let deadline = tokio::time::sleep(poll_interval * *ticks);
            tokio::pin!(deadline);
            loop {
                tokio::select! {
                    Some(alert) = rx.recv() => log.push(alert),
                    _ = &mut deadline => break,
                }
            }
            info!("{} line move(s) over {} polls", log.total_moves(), ticks);
            let alerts: Vec<_> = log.alerts().collect();
            print_json(&alerts)?;
        }

        Command::Shop { quotes } => {
            let parsed = quotes
                .iter()
                .map(|q| BookQuote::parse(q))
                .collect::<Result<Vec<_>, _>>()?;
            match compare_lines(&parsed) {
                Some(cmp) => print_json(&cmp)?,
                None => warn!("No quotes to compare"),
            }
        }
    }

    Ok(())
}
