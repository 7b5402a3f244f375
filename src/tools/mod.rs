pub mod ev;
pub mod kelly;
pub mod lines;
pub mod sentiment;

pub use ev::analyze_dfs_square;
pub use kelly::calculate_kelly_bet;
pub use lines::{AlertLog, LineTracker};
pub use sentiment::{get_news_sentiment, get_signal};
