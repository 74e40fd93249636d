//! Input loading: CSV rosters and JSON tournament lists.

use crate::models::{Category, Division, EngineError, Player, PlayerRegistry, Surface, Tournament};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// One roster CSV row. Surface win columns may be left empty.
#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    country: String,
    rank: u32,
    #[serde(default)]
    points: u32,
    division: Division,
    wins: u32,
    losses: u32,
    #[serde(default)]
    hard_wins: Option<u32>,
    #[serde(default)]
    clay_wins: Option<u32>,
    #[serde(default)]
    grass_wins: Option<u32>,
    #[serde(default)]
    preferred_surface: Option<Surface>,
    #[serde(default)]
    prize_money: f64,
    #[serde(default)]
    best_ranking: Option<u32>,
    #[serde(default)]
    tournaments_played: u32,
    #[serde(default)]
    ace_count: Option<u32>,
    #[serde(default)]
    first_serve_percentage: Option<f64>,
}

/// One entry of the tournaments JSON array.
#[derive(Debug, Deserialize)]
struct TournamentRow {
    name: String,
    #[serde(default)]
    location: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    surface: Surface,
    prize_money: f64,
    category: Category,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(default)]
    division: Option<Division>,
}

/// Split career wins across (hard, clay, grass) by preferred surface.
/// Shares are truncated, so the sum never exceeds `wins`.
pub fn derive_surface_wins(wins: u32, preferred: Option<Surface>) -> (u32, u32, u32) {
    let share = |f: f64| (wins as f64 * f) as u32;
    match preferred {
        Some(Surface::Clay) => {
            let (clay, hard) = (share(0.5), share(0.3));
            (hard, clay, wins - clay - hard)
        }
        Some(Surface::Hard) => {
            let (hard, clay) = (share(0.6), share(0.2));
            (hard, clay, wins - hard - clay)
        }
        Some(Surface::Grass) => {
            let (grass, hard) = (share(0.5), share(0.3));
            (hard, wins - grass - hard, grass)
        }
        Some(Surface::Carpet) | None => (share(0.4), share(0.4), share(0.2)),
    }
}

/// Load a roster from CSV (header row required).
pub fn load_roster<R: Read>(reader: R) -> Result<PlayerRegistry, EngineError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut registry = PlayerRegistry::new();
    for (line, result) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = result.map_err(|e| EngineError::Roster(e.to_string()))?;
        if row.wins.checked_add(row.losses).is_none() {
            return Err(EngineError::Roster(format!(
                "row {}: wins plus losses for {} overflow",
                line + 1,
                row.name
            )));
        }
        let (hard, clay, grass) = derive_surface_wins(row.wins, row.preferred_surface);
        let hard = row.hard_wins.unwrap_or(hard);
        let clay = row.clay_wins.unwrap_or(clay);
        let grass = row.grass_wins.unwrap_or(grass);
        let surface_total = u64::from(hard) + u64::from(clay) + u64::from(grass);
        if surface_total > u64::from(row.wins) {
            return Err(EngineError::Roster(format!(
                "row {}: surface wins for {} exceed career wins",
                line + 1,
                row.name
            )));
        }

        let mut player = Player::new(row.name, row.division, row.rank)
            .with_record(row.wins, row.losses)
            .with_surface_wins(hard, clay, grass);
        player.country = row.country;
        player.points = row.points;
        player.career_prize_money = row.prize_money;
        player.best_ranking = row.best_ranking;
        player.tournaments_played = row.tournaments_played;
        player.ace_count = row.ace_count.unwrap_or(0);
        player.first_serve_percentage = row.first_serve_percentage.unwrap_or(0.0);
        registry.add(player)?;
    }
    log::info!("Loaded {} players", registry.len());
    Ok(registry)
}

/// Load tournaments from a JSON array, validating each through `Tournament::new`.
pub fn load_tournaments<R: Read>(reader: R) -> Result<Vec<Tournament>, EngineError> {
    let rows: Vec<TournamentRow> =
        serde_json::from_reader(reader).map_err(|e| EngineError::Roster(e.to_string()))?;
    let mut tournaments = Vec::with_capacity(rows.len());
    for row in rows {
        let mut t = Tournament::new(
            row.name,
            row.start_date,
            row.end_date,
            row.surface,
            row.prize_money,
            row.category,
        )?
        .with_location(row.location);
        t.capacity = row.capacity;
        t.division = row.division;
        tournaments.push(t);
    }
    log::info!("Loaded {} tournaments", tournaments.len());
    Ok(tournaments)
}
