//! Batch driver: seed, simulate and aggregate a whole season of tournaments.

use crate::config::EngineConfig;
use crate::logic::ledger::HeadToHeadLedger;
use crate::logic::season::{partition_into_seasons, SeasonBook};
use crate::logic::seeding::build_participants;
use crate::logic::simulation::{simulate_bracket, MatchSimulator};
use crate::models::{
    EngineError, GameMatch, HeadToHead, Participation, PlayerId, PlayerRegistry, SeasonStats,
    Tournament, TournamentId,
};
use rand::Rng;
use serde::Serialize;

/// Per-tournament result line.
#[derive(Clone, Debug, Serialize)]
pub struct TournamentSummary {
    pub tournament_id: TournamentId,
    pub name: String,
    pub participants: usize,
    pub total_matches: usize,
    /// Winner of the final, if one was staged.
    pub champion: Option<PlayerId>,
    pub skipped_rounds: Vec<String>,
}

/// Everything a batch run produced.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub tournaments: Vec<TournamentSummary>,
    pub participations: Vec<Participation>,
    pub matches: Vec<GameMatch>,
    pub head_to_head: Vec<HeadToHead>,
    pub seasons: Vec<SeasonStats>,
    #[serde(skip)]
    pub ledger: HeadToHeadLedger,
}

/// Run every tournament in order, then partition seasons for every player.
///
/// Each tournament is fully seeded before its bracket is simulated. A tournament
/// whose division pool is empty is recorded with no participants and skipped;
/// the batch moves on to the next one.
pub fn run_batch<R: Rng>(
    registry: &PlayerRegistry,
    tournaments: &[Tournament],
    config: &EngineConfig,
    rng: R,
) -> Result<BatchReport, EngineError> {
    let mut simulator = MatchSimulator::new(config.simulation.clone(), rng);
    let mut ledger = HeadToHeadLedger::new();
    let mut summaries = Vec::with_capacity(tournaments.len());
    let mut all_participations = Vec::new();
    let mut all_matches = Vec::new();

    for tournament in tournaments {
        let mut participations = match build_participants(tournament, registry.players()) {
            Ok(participations) => participations,
            Err(e @ EngineError::EmptyPool { .. }) => {
                log::warn!("{}: not seeded, {}", tournament.name, e);
                summaries.push(TournamentSummary {
                    tournament_id: tournament.id,
                    name: tournament.name.clone(),
                    participants: 0,
                    total_matches: 0,
                    champion: None,
                    skipped_rounds: vec![e.to_string()],
                });
                continue;
            }
            Err(e) => return Err(e),
        };
        let outcome = simulate_bracket(
            tournament,
            &mut participations,
            registry,
            &mut simulator,
            &mut ledger,
        )?;

        summaries.push(TournamentSummary {
            tournament_id: tournament.id,
            name: tournament.name.clone(),
            participants: participations.len(),
            total_matches: outcome.matches.len(),
            champion: outcome.champion(),
            skipped_rounds: outcome.skipped.iter().map(|e| e.to_string()).collect(),
        });
        all_participations.extend(participations);
        all_matches.extend(outcome.matches);
    }

    let mut book = SeasonBook::new();
    for player in registry.players() {
        partition_into_seasons(
            player,
            &config.season_years,
            &config.seasons,
            &all_matches,
            &mut book,
        );
    }
    log::info!(
        "Batch complete: {} tournaments, {} matches, {} rivalries, {} season records",
        summaries.len(),
        all_matches.len(),
        ledger.len(),
        book.len()
    );

    Ok(BatchReport {
        tournaments: summaries,
        participations: all_participations,
        matches: all_matches,
        head_to_head: ledger.records().cloned().collect(),
        seasons: book.records().cloned().collect(),
        ledger,
    })
}
