//! Cumulative record between two players.

use crate::models::ratio::percentage;
use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One record per unordered player pair. `player1`/`player2` keep the order of
/// the first recorded meeting.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub player1: PlayerId,
    pub player2: PlayerId,
    /// Always `player1_wins + player2_wins`.
    pub total_matches: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub last_meeting: Option<MatchId>,
}

impl HeadToHead {
    pub fn new(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2,
            total_matches: 0,
            player1_wins: 0,
            player2_wins: 0,
            last_meeting: None,
        }
    }

    pub fn player1_win_percentage(&self) -> f64 {
        percentage(self.player1_wins, self.total_matches)
    }

    pub fn player2_win_percentage(&self) -> f64 {
        percentage(self.player2_wins, self.total_matches)
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1 == player || self.player2 == player
    }

    /// Wins for either player regardless of stored order.
    pub fn wins_for(&self, player: PlayerId) -> Option<u32> {
        if player == self.player1 {
            Some(self.player1_wins)
        } else if player == self.player2 {
            Some(self.player2_wins)
        } else {
            None
        }
    }
}
