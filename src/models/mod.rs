//! Data structures for the engine: players, tournaments, matches and derived records.

mod error;
mod game;
mod head_to_head;
mod participation;
mod player;
mod ratio;
mod season;
mod tournament;

pub use error::EngineError;
pub use game::{GameMatch, MatchId, RoundType, ServeStats, SetScore};
pub use head_to_head::HeadToHead;
pub use participation::Participation;
pub use player::{Division, Player, PlayerId, PlayerRegistry, Surface};
pub use ratio::percentage;
pub use season::SeasonStats;
pub use tournament::{Category, Tournament, TournamentId};
