//! Per-season slice of a player's career.

use crate::models::ratio::percentage;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One record per (player, season year). Never overwritten once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub player_id: PlayerId,
    pub season_year: i32,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub hard_wins: u32,
    pub hard_losses: u32,
    pub clay_wins: u32,
    pub clay_losses: u32,
    pub grass_wins: u32,
    pub grass_losses: u32,
    pub tournaments_played: u32,
    pub titles_won: u32,
    pub finals_reached: u32,
    pub semifinals_reached: u32,
    pub quarterfinals_reached: u32,
    pub prize_money: f64,
    pub points_earned: u32,
    pub career_high_ranking: u32,
}

impl SeasonStats {
    pub fn win_rate(&self) -> f64 {
        percentage(self.wins, self.matches_played)
    }
}
