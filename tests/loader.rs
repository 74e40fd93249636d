//! Integration tests for roster and tournament loading.

use tennis_engine::{
    derive_surface_wins, load_roster, load_tournaments, Category, Division, EngineError, Surface,
};

const ROSTER: &str = "\
name,country,rank,points,division,wins,losses,hard_wins,clay_wins,grass_wins,preferred_surface,prize_money,best_ranking,tournaments_played
Jannik Sinner,Italy,1,12050,ATP,100,20,,,,Hard,30000000,1,80
Carlos Alcaraz,Spain,2,11500,ATP,90,18,40,30,20,,40000000,1,70
Aryna Sabalenka,Belarus,1,10870,WTA,80,30,,,,,25000000,,90
";

#[test]
fn roster_rows_become_players() {
    let registry = load_roster(ROSTER.as_bytes()).unwrap();
    assert_eq!(registry.len(), 3);

    let sinner = &registry.players()[0];
    assert_eq!(sinner.name, "Jannik Sinner");
    assert_eq!(sinner.division, Division::Atp);
    assert_eq!((sinner.wins, sinner.losses), (100, 20));
    assert_eq!((sinner.hard_wins, sinner.clay_wins, sinner.grass_wins), (60, 20, 20));
    assert_eq!(sinner.best_ranking, Some(1));
    assert_eq!(sinner.tournaments_played, 80);

    let alcaraz = &registry.players()[1];
    assert_eq!((alcaraz.hard_wins, alcaraz.clay_wins, alcaraz.grass_wins), (40, 30, 20));

    let sabalenka = &registry.players()[2];
    assert_eq!(sabalenka.division, Division::Wta);
    assert_eq!((sabalenka.hard_wins, sabalenka.clay_wins, sabalenka.grass_wins), (32, 32, 16));
    assert_eq!(sabalenka.best_ranking, None);
    assert!(registry.get(sabalenka.id).is_some());
}

#[test]
fn surface_wins_above_career_wins_are_rejected() {
    let csv = "\
name,country,rank,points,division,wins,losses,hard_wins,clay_wins,grass_wins,preferred_surface,prize_money,best_ranking,tournaments_played
Bad Data,Nowhere,5,100,ATP,10,5,8,8,8,,0,,1
";
    assert!(matches!(load_roster(csv.as_bytes()), Err(EngineError::Roster(_))));
}

#[test]
fn oversized_counters_are_rejected_without_panicking() {
    let surfaces = "\
name,rank,division,wins,losses,hard_wins,clay_wins,grass_wins
X,1,ATP,10,0,4294967295,1,0
";
    assert!(matches!(load_roster(surfaces.as_bytes()), Err(EngineError::Roster(_))));

    let record = "\
name,rank,division,wins,losses
Y,1,ATP,4294967295,1
";
    assert!(matches!(load_roster(record.as_bytes()), Err(EngineError::Roster(_))));
}

#[test]
fn serve_columns_are_optional() {
    let csv = "\
name,rank,division,wins,losses,ace_count,first_serve_percentage
Big Server,3,ATP,50,10,4200,68.5
Baseliner,4,ATP,40,12,,
";
    let registry = load_roster(csv.as_bytes()).unwrap();
    let players = registry.players();
    assert_eq!(players[0].ace_count, 4200);
    assert_eq!(players[0].first_serve_percentage, 68.5);
    assert_eq!(players[1].ace_count, 0);
    assert_eq!(players[1].first_serve_percentage, 0.0);
}

#[test]
fn derived_surface_split_never_exceeds_wins() {
    for wins in [0u32, 1, 7, 33, 101] {
        for preferred in [None, Some(Surface::Hard), Some(Surface::Clay), Some(Surface::Grass)] {
            let (h, c, g) = derive_surface_wins(wins, preferred);
            assert!(h + c + g <= wins);
        }
    }
    assert_eq!(derive_surface_wins(100, Some(Surface::Clay)), (30, 50, 20));
    assert_eq!(derive_surface_wins(100, Some(Surface::Grass)), (30, 20, 50));
}

#[test]
fn tournaments_load_from_json() {
    let json = r#"[
        {"name": "Australian Open 2025", "location": "Melbourne, Australia",
         "start_date": "2025-01-15", "end_date": "2025-01-28", "surface": "Hard",
         "prize_money": 80000000, "category": "Grand Slam", "capacity": 15000},
        {"name": "Madrid Open", "start_date": "2025-04-23", "end_date": "2025-05-04",
         "surface": "Clay", "prize_money": 8000000, "category": "WTA 1000"}
    ]"#;
    let tournaments = load_tournaments(json.as_bytes()).unwrap();
    assert_eq!(tournaments.len(), 2);
    assert_eq!(tournaments[0].category, Category::GrandSlam);
    assert_eq!(tournaments[0].capacity, Some(15000));
    assert_eq!(tournaments[0].location, "Melbourne, Australia");
    assert_eq!(tournaments[0].duration_days(), 14);
    assert_eq!(tournaments[1].division(), Division::Wta);
    assert_eq!(tournaments[1].capacity, None);
}

#[test]
fn tournament_with_reversed_dates_is_rejected() {
    let json = r#"[{"name": "Backwards", "start_date": "2025-02-10", "end_date": "2025-02-01",
        "surface": "Hard", "prize_money": 1, "category": "ATP 250"}]"#;
    assert_eq!(load_tournaments(json.as_bytes()), Err(EngineError::InvalidDateRange));
}

#[test]
fn registry_rejects_duplicate_ids() {
    let mut registry = load_roster(ROSTER.as_bytes()).unwrap();
    let copy = registry.players()[0].clone();
    let id = copy.id;
    assert_eq!(registry.add(copy), Err(EngineError::DuplicatePlayer(id)));
    let missing = uuid::Uuid::nil();
    assert_eq!(registry.require(missing), Err(EngineError::PlayerNotFound(missing)));
}
