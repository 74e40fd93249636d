//! Tennis engine: tournament seeding, bracket simulation, head-to-head ledger and
//! season statistics over a ranked roster.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{EngineConfig, IntRange, SeasonPolicy, SimulationPolicy};
pub use logic::{
    build_participants, derive_surface_wins, division_leaderboard, first_serve_leader,
    highest_win_rate, load_roster, load_tournaments, most_aces_leader, notable_rivalries,
    partition_into_seasons, percentage, player_matches, recent_matches, reward_for_position,
    run_batch, simulate_bracket, surface_preference, win_rate, BatchReport, BracketOutcome,
    HeadToHeadLedger, MatchSimulator, PairKey, PlayerStats, RewardTier, SeasonBook,
    TournamentSummary, FIELD_SIZE, NO_PREFERENCE,
};
pub use models::{
    Category, Division, EngineError, GameMatch, HeadToHead, MatchId, Participation, Player,
    PlayerId, PlayerRegistry, RoundType, SeasonStats, ServeStats, SetScore, Surface, Tournament,
    TournamentId,
};
