//! Engine configuration: randomness policy, season fractions and batch settings.
//! Every field has a default, so an empty JSON object is a valid config.

use crate::models::EngineError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Inclusive integer range. A reversed range is treated as its swap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Uniform draw in `[min, max]`.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        rng.gen_range(lo..=hi)
    }

    pub fn contains(&self, value: u32) -> bool {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        (lo..=hi).contains(&value)
    }
}

/// Every randomness seam of the match simulator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationPolicy {
    /// The better-ranked player wins when a uniform draw exceeds this value.
    pub upset_threshold: f64,
    /// Sets played in an ATP final.
    pub final_best_of_atp: usize,
    /// Sets played in every other match.
    pub best_of: usize,
    /// Chance that a set after the first two is still won by the match winner.
    pub won_set_probability: f64,
    pub won_set_winner_games: IntRange,
    pub won_set_loser_games: IntRange,
    pub lost_set_winner_games: IntRange,
    pub lost_set_loser_games: u32,
    pub aces: IntRange,
    pub double_faults: IntRange,
    pub break_points: IntRange,
    /// First-serve percentage bounds.
    pub first_serve_min: f64,
    pub first_serve_max: f64,
    pub duration_minutes: IntRange,
    pub total_points: IntRange,
    pub attendance_min: u32,
    /// Attendance ceiling when the tournament has no usable capacity.
    pub attendance_fallback_max: u32,
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        SimulationPolicy {
            upset_threshold: 0.3,
            final_best_of_atp: 5,
            best_of: 3,
            won_set_probability: 0.5,
            won_set_winner_games: IntRange::new(6, 7),
            won_set_loser_games: IntRange::new(3, 5),
            lost_set_winner_games: IntRange::new(4, 6),
            lost_set_loser_games: 6,
            aces: IntRange::new(3, 15),
            double_faults: IntRange::new(1, 6),
            break_points: IntRange::new(2, 8),
            first_serve_min: 55.0,
            first_serve_max: 75.0,
            duration_minutes: IntRange::new(90, 240),
            total_points: IntRange::new(120, 280),
            attendance_min: 5000,
            attendance_fallback_max: 15000,
        }
    }
}

/// Fractions of career totals assigned to each season, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonPolicy {
    /// Explicit fractions for the most recent seasons.
    pub leading_fractions: Vec<f64>,
    /// Multiplier applied to the previous fraction for seasons beyond the table.
    pub decay: f64,
}

impl Default for SeasonPolicy {
    fn default() -> Self {
        SeasonPolicy {
            leading_fractions: vec![0.40, 0.35],
            decay: 0.4,
        }
    }
}

impl SeasonPolicy {
    /// Fractions for the `n - 1` non-earliest seasons, most recent first.
    /// The earliest season always takes the remainder and has no entry.
    pub fn fractions_for(&self, n: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(n.saturating_sub(1));
        let mut last = 0.0;
        for k in 0..n.saturating_sub(1) {
            let f = match self.leading_fractions.get(k) {
                Some(f) => *f,
                None => last * self.decay,
            };
            let f = if f.is_finite() { f.clamp(0.0, 1.0) } else { 0.0 };
            out.push(f);
            last = f;
        }
        out
    }
}

fn default_season_years() -> Vec<i32> {
    vec![2023, 2024, 2025]
}

/// Top-level batch configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the batch RNG; None draws one from entropy.
    pub seed: Option<u64>,
    pub season_years: Vec<i32>,
    pub simulation: SimulationPolicy,
    pub seasons: SeasonPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: None,
            season_years: default_season_years(),
            simulation: SimulationPolicy::default(),
            seasons: SeasonPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EngineError> {
        serde_json::from_reader(reader).map_err(|e| EngineError::Config(e.to_string()))
    }
}
