//! Match simulation and flattened bracket generation.

use crate::config::{IntRange, SimulationPolicy};
use crate::logic::ledger::HeadToHeadLedger;
use crate::models::{
    Division, EngineError, GameMatch, Participation, Player, PlayerId, PlayerRegistry, RoundType,
    ServeStats, SetScore, Tournament,
};
use chrono::Duration;
use rand::Rng;

/// Rounds staged for each tournament with the positions (0-based, half-open)
/// that contest them. Later rounds do not take earlier winners.
const ROUND_BANDS: [(RoundType, usize, usize); 3] = [
    (RoundType::Final, 0, 2),
    (RoundType::Semifinal, 2, 4),
    (RoundType::Quarterfinal, 4, 8),
];

/// Simulates matches with an explicitly owned RNG and policy, so seeded runs repeat exactly.
pub struct MatchSimulator<R: Rng> {
    policy: SimulationPolicy,
    rng: R,
}

impl<R: Rng> MatchSimulator<R> {
    pub fn new(policy: SimulationPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    /// Simulate one match and record it in the head-to-head ledger exactly once.
    ///
    /// The better-ranked player (lower rank; `player_a` on equal rank) wins when a
    /// uniform draw exceeds the upset threshold. ATP finals are best of five,
    /// everything else best of three, and every set slot is always filled.
    pub fn simulate_match(
        &mut self,
        player_a: &Player,
        player_b: &Player,
        tournament: &Tournament,
        round: RoundType,
        ledger: &mut HeadToHeadLedger,
    ) -> Result<GameMatch, EngineError> {
        if player_a.id == player_b.id {
            return Err(EngineError::SamePlayer(player_a.id));
        }

        let (favourite, underdog) = if player_b.rank < player_a.rank {
            (player_b, player_a)
        } else {
            (player_a, player_b)
        };
        let winner = if self.rng.gen::<f64>() > self.policy.upset_threshold {
            favourite
        } else {
            underdog
        };

        let atp_pairing = player_a.division == Division::Atp && player_b.division == Division::Atp;
        let num_sets = if round == RoundType::Final && atp_pairing {
            self.policy.final_best_of_atp
        } else {
            self.policy.best_of
        };
        let sets = self.draw_sets(num_sets);

        let player1_stats = self.draw_serve_stats();
        let player2_stats = self.draw_serve_stats();
        let duration_minutes = self.policy.duration_minutes.draw(&mut self.rng);
        let total_points = self.policy.total_points.draw(&mut self.rng);
        let attendance = self.draw_attendance(tournament);

        let offset = self.rng.gen_range(0..tournament.duration_days().max(1));
        let date = tournament.start_date + Duration::days(offset);
        let id = uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid();

        let game = GameMatch {
            id,
            tournament_id: tournament.id,
            player1: player_a.id,
            player2: player_b.id,
            winner: Some(winner.id),
            date,
            round,
            surface: tournament.surface,
            sets,
            player1_stats,
            player2_stats,
            duration_minutes,
            total_points,
            attendance,
            highlights: format!(
                "Exciting {} match between {} and {}.",
                round.label().to_lowercase(),
                player_a.name,
                player_b.name
            ),
        };

        ledger.record_result(player_a.id, player_b.id, winner.id, game.id)?;
        log::debug!(
            "{} {}: {} def. {} ({})",
            tournament.name,
            round.label(),
            winner.name,
            if winner.id == player_a.id { &player_b.name } else { &player_a.name },
            game.score_summary()
        );
        Ok(game)
    }

    /// Set scores from the winner's side. The first two sets go to the winner;
    /// later sets do with `won_set_probability`.
    fn draw_sets(&mut self, num_sets: usize) -> Vec<SetScore> {
        let p = &self.policy;
        let won_probability = if p.won_set_probability.is_finite() {
            p.won_set_probability.clamp(0.0, 1.0)
        } else {
            0.5
        };
        (0..num_sets)
            .map(|set_index| {
                if set_index < 2 || self.rng.gen_bool(won_probability) {
                    SetScore {
                        winner_games: p.won_set_winner_games.draw(&mut self.rng),
                        loser_games: p.won_set_loser_games.draw(&mut self.rng),
                    }
                } else {
                    SetScore {
                        winner_games: p.lost_set_winner_games.draw(&mut self.rng),
                        loser_games: p.lost_set_loser_games,
                    }
                }
            })
            .collect()
    }

    fn draw_serve_stats(&mut self) -> ServeStats {
        let p = &self.policy;
        let (mut lo, mut hi) = (p.first_serve_min, p.first_serve_max);
        if !(lo.is_finite() && hi.is_finite()) {
            log::warn!("Non-finite first-serve bounds, using 55-75");
            lo = 55.0;
            hi = 75.0;
        }
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        let first_serve: f64 = self.rng.gen_range(lo..=hi);
        ServeStats {
            aces: p.aces.draw(&mut self.rng),
            double_faults: p.double_faults.draw(&mut self.rng),
            break_points: p.break_points.draw(&mut self.rng),
            first_serve_percentage: (first_serve * 10.0).round() / 10.0,
        }
    }

    fn draw_attendance(&mut self, tournament: &Tournament) -> u32 {
        let floor = self.policy.attendance_min;
        let range = match tournament.capacity {
            Some(capacity) if capacity >= floor => IntRange::new(floor, capacity),
            Some(capacity) => {
                log::warn!(
                    "{} capacity {} below attendance floor, using fallback range",
                    tournament.name,
                    capacity
                );
                IntRange::new(floor, self.policy.attendance_fallback_max)
            }
            None => IntRange::new(floor, self.policy.attendance_fallback_max),
        };
        range.draw(&mut self.rng)
    }
}

/// Matches produced for one tournament plus the rounds that could not be staged.
#[derive(Clone, Debug, Default)]
pub struct BracketOutcome {
    pub matches: Vec<GameMatch>,
    /// `InsufficientParticipants` for each skipped round.
    pub skipped: Vec<EngineError>,
}

impl BracketOutcome {
    /// Winner of the final, if one was played.
    pub fn champion(&self) -> Option<PlayerId> {
        self.matches
            .iter()
            .find(|m| m.round == RoundType::Final)
            .and_then(|m| m.winner)
    }
}

/// Generate the flattened bracket for a seeded tournament.
///
/// Final: positions 1v2. Semifinal: 3v4. Quarterfinals: 5v6 and 7v8.
/// A round without enough participants is skipped and reported; rounds already
/// built are kept. Each participant's match tally is updated in place.
pub fn simulate_bracket<R: Rng>(
    tournament: &Tournament,
    participants: &mut [Participation],
    registry: &PlayerRegistry,
    simulator: &mut MatchSimulator<R>,
    ledger: &mut HeadToHeadLedger,
) -> Result<BracketOutcome, EngineError> {
    let mut order: Vec<usize> = (0..participants.len()).collect();
    order.sort_by_key(|&i| participants[i].position);

    let mut outcome = BracketOutcome::default();
    for (round, start, end) in ROUND_BANDS {
        if order.len() < end {
            log::warn!(
                "{}: skipping {} ({} of {} participants)",
                tournament.name,
                round.label(),
                order.len(),
                end
            );
            outcome.skipped.push(EngineError::InsufficientParticipants {
                round,
                needed: end,
                available: order.len(),
            });
            continue;
        }
        for pair in order[start..end].chunks_exact(2) {
            let (i, j) = (pair[0], pair[1]);
            let player_a = registry.require(participants[i].player_id)?;
            let player_b = registry.require(participants[j].player_id)?;
            let game = simulator.simulate_match(player_a, player_b, tournament, round, ledger)?;
            let a_won = game.winner == Some(player_a.id);
            participants[i].record_match(a_won);
            participants[j].record_match(!a_won);
            outcome.matches.push(game);
        }
    }

    log::info!(
        "{}: simulated {} matches, skipped {} rounds",
        tournament.name,
        outcome.matches.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}
