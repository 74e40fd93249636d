//! A player's entry in one tournament.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};

/// Links a tournament and a player with seeded position and rewards.
/// Exactly one per (tournament, player); positions are unique within a tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    /// 1 = champion seed, 2 = runner-up, and so on.
    pub position: u32,
    pub prize_money_earned: f64,
    pub points_earned: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
}

impl Participation {
    /// Tally one completed match for this entry.
    pub fn record_match(&mut self, won: bool) {
        if won {
            self.matches_won += 1;
        } else {
            self.matches_lost += 1;
        }
    }
}
