//! Built-in sample inputs for the CLI and the simulated odds feed.

/// A DFS square paired with the sharp book's price on the same line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropPreset {
    pub player: &'static str,
    pub stat: &'static str,
    pub dfs_line: f64,
    pub sharp_line: f64,
    pub sharp_over: i32,
    pub sharp_under: i32,
    pub sport: &'static str,
}

pub const PROP_PRESETS: &[PropPreset] = &[
    PropPreset { player: "Luka Dončić", stat: "Assists", dfs_line: 8.5, sharp_line: 8.5, sharp_over: -145, sharp_under: 115, sport: "NBA" },
    PropPreset { player: "Jayson Tatum", stat: "Points", dfs_line: 28.5, sharp_line: 28.5, sharp_over: -130, sharp_under: 105, sport: "NBA" },
    PropPreset { player: "Stephen Curry", stat: "Threes", dfs_line: 4.5, sharp_line: 4.5, sharp_over: -160, sharp_under: 130, sport: "NBA" },
    PropPreset { player: "Nikola Jokić", stat: "Rebounds", dfs_line: 12.5, sharp_line: 12.5, sharp_over: -140, sharp_under: 110, sport: "NBA" },
    PropPreset { player: "Patrick Mahomes", stat: "Pass Yds", dfs_line: 285.5, sharp_line: 285.5, sharp_over: -120, sharp_under: 100, sport: "NFL" },
    PropPreset { player: "Scottie Scheffler", stat: "Score", dfs_line: 69.5, sharp_line: 69.5, sharp_over: 110, sharp_under: -130, sport: "Golf" },
];

/// (sport, headline)
pub const HEADLINE_PRESETS: &[(&str, &str)] = &[
    ("NASCAR", "Kyle Busch cleared for race after practice crash"),
    ("NFL", "Starting QB ruled out Sunday with torn ligament"),
    ("NBA", "Star player returns from injury ahead of playoff series"),
    ("NHL", "Starting goalie suspended two games for hit"),
    ("UFC", "UFC fighter fails weight cut, bout now catchweight"),
    ("NBA", "Team acquires dominant scorer in blockbuster trade"),
    ("CFB", "Head coach fired amid team chaos and losing streak"),
    ("MLB", "Ace pitcher healthy and ready for season opener"),
];

/// A market quoted by the simulated book, drifting around `base_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedMarket {
    pub id: &'static str,
    pub label: &'static str,
    pub base_line: i32,
}

pub const LIVE_MARKETS: &[SimulatedMarket] = &[
    SimulatedMarket { id: "BOS_vs_LAL", label: "BOS Celtics vs LAL Lakers", base_line: -115 },
    SimulatedMarket { id: "GSW_vs_PHX", label: "GSW Warriors vs PHX Suns", base_line: 105 },
    SimulatedMarket { id: "MIA_vs_NYK", label: "MIA Heat vs NYK Knicks", base_line: -130 },
    SimulatedMarket { id: "DEN_vs_MIL", label: "DEN Nuggets vs MIL Bucks", base_line: -108 },
    SimulatedMarket { id: "OKC_vs_SAC", label: "OKC Thunder vs SAC Kings", base_line: -145 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ev::scan;

    #[test]
    fn every_prop_preset_analyses() {
        // All presets use matching lines and valid odds
        assert_eq!(scan(PROP_PRESETS).len(), PROP_PRESETS.len());
    }

    #[test]
    fn market_ids_are_unique() {
        let mut ids: Vec<_> = LIVE_MARKETS.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), LIVE_MARKETS.len());
    }
}
