//! Seeding: pick the ranked field for a tournament and assign positions and rewards.

use crate::models::{EngineError, Participation, Player, Tournament};

/// Maximum number of seeded participants per tournament.
pub const FIELD_SIZE: usize = 32;

/// Prize share and ranking points awarded for a final position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardTier {
    pub prize_fraction: f64,
    pub points: u32,
}

/// Reward tier for a 1-based position. Non-increasing as position grows.
pub fn reward_for_position(position: u32) -> RewardTier {
    let (prize_fraction, points) = match position {
        0 | 1 => (0.150, 2000),
        2 => (0.075, 1200),
        3..=4 => (0.040, 720),
        5..=8 => (0.025, 360),
        9..=16 => (0.015, 180),
        _ => (0.010, 90),
    };
    RewardTier {
        prize_fraction,
        points,
    }
}

/// Build the ordered participation list for a tournament.
///
/// 1. Keep players of the tournament's division (fails with `EmptyPool` if none).
/// 2. Sort ascending by rank; equal ranks keep pool order.
/// 3. Take the top `FIELD_SIZE`; position = index + 1.
/// 4. Attach the reward tier for each position.
pub fn build_participants(
    tournament: &Tournament,
    pool: &[Player],
) -> Result<Vec<Participation>, EngineError> {
    let division = tournament.division();
    let mut eligible: Vec<&Player> = pool.iter().filter(|p| p.division == division).collect();
    if eligible.is_empty() {
        return Err(EngineError::EmptyPool { division });
    }
    eligible.sort_by_key(|p| p.rank);
    eligible.truncate(FIELD_SIZE);

    let participations: Vec<Participation> = eligible
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let position = i as u32 + 1;
            let tier = reward_for_position(position);
            Participation {
                tournament_id: tournament.id,
                player_id: p.id,
                position,
                prize_money_earned: tournament.prize_money * tier.prize_fraction,
                points_earned: tier.points,
                matches_won: 0,
                matches_lost: 0,
            }
        })
        .collect();

    log::info!(
        "Seeded {} {} players into {}",
        participations.len(),
        division,
        tournament.name
    );
    Ok(participations)
}
