//! Match record, set scores, per-player serve figures and RoundType.

use crate::models::player::{PlayerId, Surface};
use crate::models::tournament::TournamentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Bracket stage a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum RoundType {
    Final,
    Semifinal,
    Quarterfinal,
}

impl RoundType {
    pub fn label(&self) -> &'static str {
        match self {
            RoundType::Final => "Final",
            RoundType::Semifinal => "Semifinal",
            RoundType::Quarterfinal => "Quarterfinal",
        }
    }
}

/// Games in one set, from the match winner's side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub winner_games: u32,
    pub loser_games: u32,
}

impl std::fmt::Display for SetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.winner_games, self.loser_games)
    }
}

/// Serve and return figures for one player in one match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServeStats {
    pub aces: u32,
    pub double_faults: u32,
    pub break_points: u32,
    /// Percentage with one decimal, e.g. 64.3.
    pub first_serve_percentage: f64,
}

/// A single match between two distinct players. Append-only once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player1: PlayerId,
    pub player2: PlayerId,
    /// None if not yet played; otherwise `player1` or `player2`.
    pub winner: Option<PlayerId>,
    pub date: NaiveDate,
    pub round: RoundType,
    pub surface: Surface,
    pub sets: Vec<SetScore>,
    pub player1_stats: ServeStats,
    pub player2_stats: ServeStats,
    pub duration_minutes: u32,
    pub total_points: u32,
    pub attendance: u32,
    pub highlights: String,
}

impl GameMatch {
    pub fn is_completed(&self) -> bool {
        self.winner.is_some()
    }

    /// Comma-separated set scores, or "Not played".
    pub fn score_summary(&self) -> String {
        if self.sets.is_empty() {
            return "Not played".to_string();
        }
        self.sets
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1 == player || self.player2 == player
    }

    /// The other player of a completed match.
    pub fn loser(&self) -> Option<PlayerId> {
        match self.winner {
            Some(w) if w == self.player1 => Some(self.player2),
            Some(w) if w == self.player2 => Some(self.player1),
            _ => None,
        }
    }

    /// A completed match has a set score and its winner is one of the two players.
    pub fn is_consistent(&self) -> bool {
        if self.player1 == self.player2 {
            return false;
        }
        match self.winner {
            None => true,
            Some(w) => !self.sets.is_empty() && (w == self.player1 || w == self.player2),
        }
    }
}
