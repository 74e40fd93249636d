//! Player, Division, Surface and the PlayerRegistry roster.

use crate::models::error::EngineError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, ledgers and lookups).
pub type PlayerId = Uuid;

/// Tour grouping a player belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "ATP", alias = "atp")]
    Atp,
    #[serde(rename = "WTA", alias = "wta")]
    Wta,
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Division::Atp => write!(f, "ATP"),
            Division::Wta => write!(f, "WTA"),
        }
    }
}

/// Court surface. Players only track wins on the first three.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Carpet,
}

impl Surface {
    /// Surfaces with per-player win counters, in tie-break order.
    pub const TRACKED: [Surface; 3] = [Surface::Hard, Surface::Clay, Surface::Grass];

    pub fn name(&self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
            Surface::Carpet => "Carpet",
        }
    }
}

/// A ranked player with cumulative career counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub country: String,
    /// Lower is better; 1 is the world number one.
    pub rank: u32,
    /// Ranking points.
    pub points: u32,
    pub division: Division,
    pub wins: u32,
    pub losses: u32,
    pub hard_wins: u32,
    pub clay_wins: u32,
    pub grass_wins: u32,
    pub career_prize_money: f64,
    pub best_ranking: Option<u32>,
    pub tournaments_played: u32,
    /// Career aces served.
    pub ace_count: u32,
    /// Career first-serve percentage (0-100).
    pub first_serve_percentage: f64,
}

impl Player {
    /// Create a player with the given name, division and rank. Counters start at zero.
    pub fn new(name: impl Into<String>, division: Division, rank: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            country: String::new(),
            rank,
            points: 0,
            division,
            wins: 0,
            losses: 0,
            hard_wins: 0,
            clay_wins: 0,
            grass_wins: 0,
            career_prize_money: 0.0,
            best_ranking: None,
            tournaments_played: 0,
            ace_count: 0,
            first_serve_percentage: 0.0,
        }
    }

    /// Builder-style helper to set career win/loss totals.
    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }

    /// Builder-style helper to set per-surface win totals.
    pub fn with_surface_wins(mut self, hard: u32, clay: u32, grass: u32) -> Self {
        self.hard_wins = hard;
        self.clay_wins = clay;
        self.grass_wins = grass;
        self
    }

    /// Wins plus losses, saturating at `u32::MAX`.
    pub fn total_matches(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Career win count on a tracked surface (carpet is not tracked).
    pub fn surface_wins(&self, surface: Surface) -> u32 {
        match surface {
            Surface::Hard => self.hard_wins,
            Surface::Clay => self.clay_wins,
            Surface::Grass => self.grass_wins,
            Surface::Carpet => 0,
        }
    }

    /// Record a completed win, crediting the surface when it is tracked.
    pub fn record_win(&mut self, surface: Surface) {
        self.wins += 1;
        match surface {
            Surface::Hard => self.hard_wins += 1,
            Surface::Clay => self.clay_wins += 1,
            Surface::Grass => self.grass_wins += 1,
            Surface::Carpet => {}
        }
    }

    /// Record a completed loss.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }
}

/// Roster of every known player, in load order.
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list, rejecting duplicate ids.
    pub fn from_players(players: Vec<Player>) -> Result<Self, EngineError> {
        let mut registry = Self::new();
        for p in players {
            registry.add(p)?;
        }
        Ok(registry)
    }

    /// Add a player. Ids must be unique.
    pub fn add(&mut self, player: Player) -> Result<(), EngineError> {
        if self.players.iter().any(|p| p.id == player.id) {
            return Err(EngineError::DuplicatePlayer(player.id));
        }
        self.players.push(player);
        Ok(())
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look up a player or fail with `PlayerNotFound`.
    pub fn require(&self, id: PlayerId) -> Result<&Player, EngineError> {
        self.get(id).ok_or(EngineError::PlayerNotFound(id))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
