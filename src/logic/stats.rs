//! Read-only statistics derived from stored counters.

use crate::logic::ledger::HeadToHeadLedger;
pub use crate::models::percentage;
use crate::models::{Division, GameMatch, HeadToHead, Player, PlayerId, Surface};
use serde::{Deserialize, Serialize};

/// Returned by `surface_preference` when a player has no surface wins.
pub const NO_PREFERENCE: &str = "N/A";

/// Career win rate in percent; 0 for a player with no matches.
pub fn win_rate(player: &Player) -> f64 {
    percentage(player.wins, player.total_matches())
}

/// Surface with the most career wins. Ties go to the earlier of Hard, Clay, Grass.
pub fn surface_preference(player: &Player) -> &'static str {
    let mut best: Option<(Surface, u32)> = None;
    for surface in Surface::TRACKED {
        let wins = player.surface_wins(surface);
        if wins > 0 && best.map_or(true, |(_, top)| wins > top) {
            best = Some((surface, wins));
        }
    }
    best.map_or(NO_PREFERENCE, |(s, _)| s.name())
}

/// Statistics view of a player (for presentation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,
    pub win_rate: f64,
    pub surface_preference: String,
}

impl PlayerStats {
    pub fn from_player(p: &Player) -> Self {
        Self {
            wins: p.wins,
            losses: p.losses,
            total_matches: p.total_matches(),
            win_rate: win_rate(p),
            surface_preference: surface_preference(p).to_string(),
        }
    }
}

/// Best-ranked players of one division, up to `limit`.
pub fn division_leaderboard(players: &[Player], division: Division, limit: usize) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().filter(|p| p.division == division).collect();
    ranked.sort_by_key(|p| p.rank);
    ranked.truncate(limit);
    ranked
}

/// Player with the highest career win rate; the first listed wins ties.
pub fn highest_win_rate(players: &[Player]) -> Option<&Player> {
    players.iter().fold(None, |best: Option<&Player>, p| match best {
        Some(b) if win_rate(b) >= win_rate(p) => Some(b),
        _ => Some(p),
    })
}

/// Player with the most career aces; the first listed wins ties.
pub fn most_aces_leader(players: &[Player]) -> Option<&Player> {
    players.iter().fold(None, |best: Option<&Player>, p| match best {
        Some(b) if b.ace_count >= p.ace_count => Some(b),
        _ => Some(p),
    })
}

/// Player with the best career first-serve percentage; the first listed wins ties.
pub fn first_serve_leader(players: &[Player]) -> Option<&Player> {
    players.iter().fold(None, |best: Option<&Player>, p| match best {
        Some(b) if b.first_serve_percentage >= p.first_serve_percentage => Some(b),
        _ => Some(p),
    })
}

/// The `n` pairs that met most often.
pub fn notable_rivalries(ledger: &HeadToHeadLedger, n: usize) -> Vec<&HeadToHead> {
    let mut records: Vec<&HeadToHead> = ledger.records().collect();
    records.sort_by(|a, b| b.total_matches.cmp(&a.total_matches));
    records.truncate(n);
    records
}

/// A player's matches, newest first.
pub fn player_matches(history: &[GameMatch], player: PlayerId) -> Vec<&GameMatch> {
    let mut matches: Vec<&GameMatch> = history.iter().filter(|m| m.involves(player)).collect();
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

/// The `n` most recent matches overall.
pub fn recent_matches(history: &[GameMatch], n: usize) -> Vec<&GameMatch> {
    let mut matches: Vec<&GameMatch> = history.iter().collect();
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches.truncate(n);
    matches
}
