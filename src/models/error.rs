//! Errors raised by seeding, simulation, ledger and loading operations.

use crate::models::game::RoundType;
use crate::models::player::{Division, PlayerId};

/// Errors that can occur during engine operations.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// No player in the pool belongs to the tournament's division.
    EmptyPool { division: Division },
    /// Too few participants to stage a round; the round is skipped, not fatal.
    InsufficientParticipants {
        round: RoundType,
        needed: usize,
        available: usize,
    },
    /// Tournament ends before it starts.
    InvalidDateRange,
    /// Tournament prize pool is negative (or not a number).
    NegativePrizePool,
    /// A match or head-to-head needs two distinct players.
    SamePlayer(PlayerId),
    /// The reported winner is neither of the two players.
    WinnerNotInMatch(PlayerId),
    PlayerNotFound(PlayerId),
    /// A player with this id is already registered.
    DuplicatePlayer(PlayerId),
    /// Roster or tournament input could not be parsed.
    Roster(String),
    Config(String),
    Io(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptyPool { division } => {
                write!(f, "No {} players available to seed the tournament", division)
            }
            EngineError::InsufficientParticipants {
                round,
                needed,
                available,
            } => write!(
                f,
                "{} needs {} participants ({} available)",
                round.label(),
                needed,
                available
            ),
            EngineError::InvalidDateRange => {
                write!(f, "Tournament end date is before its start date")
            }
            EngineError::NegativePrizePool => {
                write!(f, "Tournament prize pool must be non-negative")
            }
            EngineError::SamePlayer(_) => write!(f, "A player cannot face themselves"),
            EngineError::WinnerNotInMatch(_) => write!(f, "Winner is not one of the two players"),
            EngineError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            EngineError::DuplicatePlayer(id) => write!(f, "Player {} is already registered", id),
            EngineError::Roster(msg) => write!(f, "Invalid input: {}", msg),
            EngineError::Config(msg) => write!(f, "Invalid config: {}", msg),
            EngineError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Io(e.to_string())
    }
}
