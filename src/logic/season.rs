//! Season aggregation: split career totals into per-season slices.

use crate::config::SeasonPolicy;
use crate::models::{GameMatch, Player, PlayerId, RoundType, SeasonStats};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Share of season losses booked against each surface.
const HARD_LOSS_SHARE: f64 = 0.4;
const CLAY_LOSS_SHARE: f64 = 0.3;
const GRASS_LOSS_SHARE: f64 = 0.3;

/// Season records keyed by (player, year). Records are insert-only.
#[derive(Clone, Debug, Default)]
pub struct SeasonBook {
    records: BTreeMap<(PlayerId, i32), SeasonStats>,
}

impl SeasonBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: PlayerId, year: i32) -> Option<&SeasonStats> {
        self.records.get(&(player, year))
    }

    pub fn contains(&self, player: PlayerId, year: i32) -> bool {
        self.records.contains_key(&(player, year))
    }

    /// A player's seasons, most recent first.
    pub fn for_player(&self, player: PlayerId) -> Vec<&SeasonStats> {
        self.records
            .range((player, i32::MIN)..=(player, i32::MAX))
            .rev()
            .map(|(_, s)| s)
            .collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &SeasonStats> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split `total` across `fractions.len() + 1` seasons, most recent first.
/// Each share is truncated and capped by what is left; the last slot takes the rest.
fn split_total(total: u32, fractions: &[f64]) -> Vec<u32> {
    let mut remaining = total;
    let mut shares: Vec<u32> = fractions
        .iter()
        .map(|f| {
            let share = ((total as f64 * f) as u32).min(remaining);
            remaining -= share;
            share
        })
        .collect();
    shares.push(remaining);
    shares
}

fn ratio_of(part: u32, whole: u32) -> f64 {
    part as f64 / whole.max(1) as f64
}

/// Create season records for `player` over `years`, skipping any that already exist.
///
/// Career wins and losses are partitioned with the policy fractions (most recent
/// year first, earliest year takes the remainder), so the seasons always sum to the
/// career totals. Surface wins follow the player's career surface ratios and are
/// truncated. Prize money, points and tournaments are split evenly. Round
/// tallies come from `history` matches dated in that year. Career counters are
/// never touched. Returns only the newly created records.
pub fn partition_into_seasons(
    player: &Player,
    years: &[i32],
    policy: &SeasonPolicy,
    history: &[GameMatch],
    book: &mut SeasonBook,
) -> Vec<SeasonStats> {
    let mut ordered: Vec<i32> = years.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();
    if ordered.is_empty() {
        return Vec::new();
    }

    let n = ordered.len() as u32;
    let fractions = policy.fractions_for(ordered.len());
    let wins = split_total(player.wins, &fractions);
    let losses = split_total(player.losses, &fractions);
    let career_high_ranking = player.best_ranking.unwrap_or(player.rank).min(player.rank);

    let mut created = Vec::new();
    for (k, &year) in ordered.iter().enumerate() {
        if book.contains(player.id, year) {
            log::debug!("Season {} for {} already recorded, skipping", year, player.name);
            continue;
        }
        let (season_wins, season_losses) = (wins[k], losses[k]);
        let surface_wins =
            |surface_total: u32| (season_wins as f64 * ratio_of(surface_total, player.wins)) as u32;

        let mut stats = SeasonStats {
            player_id: player.id,
            season_year: year,
            matches_played: season_wins.saturating_add(season_losses),
            wins: season_wins,
            losses: season_losses,
            hard_wins: surface_wins(player.hard_wins),
            hard_losses: (season_losses as f64 * HARD_LOSS_SHARE) as u32,
            clay_wins: surface_wins(player.clay_wins),
            clay_losses: (season_losses as f64 * CLAY_LOSS_SHARE) as u32,
            grass_wins: surface_wins(player.grass_wins),
            grass_losses: (season_losses as f64 * GRASS_LOSS_SHARE) as u32,
            tournaments_played: player.tournaments_played / n,
            titles_won: 0,
            finals_reached: 0,
            semifinals_reached: 0,
            quarterfinals_reached: 0,
            prize_money: player.career_prize_money / n as f64,
            points_earned: player.points / n,
            career_high_ranking,
        };

        for m in history
            .iter()
            .filter(|m| m.involves(player.id) && m.date.year() == year)
        {
            match m.round {
                RoundType::Final => {
                    stats.finals_reached += 1;
                    if m.winner == Some(player.id) {
                        stats.titles_won += 1;
                    }
                }
                RoundType::Semifinal => stats.semifinals_reached += 1,
                RoundType::Quarterfinal => stats.quarterfinals_reached += 1,
            }
        }

        book.records.insert((player.id, year), stats.clone());
        created.push(stats);
    }

    log::debug!(
        "Partitioned {} into {} new seasons",
        player.name,
        created.len()
    );
    created
}
