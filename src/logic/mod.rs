//! Engine operations: seeding, simulation, head-to-head, seasons, statistics.

mod batch;
mod ledger;
mod loader;
mod season;
mod seeding;
mod simulation;
mod stats;

pub use batch::{run_batch, BatchReport, TournamentSummary};
pub use ledger::{HeadToHeadLedger, PairKey};
pub use loader::{derive_surface_wins, load_roster, load_tournaments};
pub use season::{partition_into_seasons, SeasonBook};
pub use seeding::{build_participants, reward_for_position, RewardTier, FIELD_SIZE};
pub use simulation::{simulate_bracket, BracketOutcome, MatchSimulator};
pub use stats::{
    division_leaderboard, first_serve_leader, highest_win_rate, most_aces_leader,
    notable_rivalries, percentage, player_matches, recent_matches, surface_preference, win_rate,
    PlayerStats, NO_PREFERENCE,
};
