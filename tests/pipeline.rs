//! End-to-end batch runs over a small roster.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tennis_engine::{
    run_batch, Category, Division, EngineConfig, EngineError, Player, PlayerRegistry, Surface,
    Tournament,
};

fn roster(atp: u32, wta: u32) -> PlayerRegistry {
    let mut players = Vec::new();
    for r in 1..=atp {
        players.push(
            Player::new(format!("ATP {r}"), Division::Atp, r)
                .with_record(100 - r, 20 + r)
                .with_surface_wins(30, 30, 20),
        );
    }
    for r in 1..=wta {
        players.push(Player::new(format!("WTA {r}"), Division::Wta, r).with_record(80, 30));
    }
    PlayerRegistry::from_players(players).unwrap()
}

fn event(name: &str, category: Category, month: u32) -> Tournament {
    Tournament::new(
        name,
        NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, month, 14).unwrap(),
        Surface::Grass,
        10_000_000.0,
        category,
    )
    .unwrap()
}

#[test]
fn eight_player_tournament_end_to_end() {
    let registry = roster(8, 0);
    let tournaments = vec![event("Wimbledon 2025", Category::GrandSlam, 7)];
    let report = run_batch(
        &registry,
        &tournaments,
        &EngineConfig::default(),
        StdRng::seed_from_u64(2025),
    )
    .unwrap();

    assert_eq!(report.matches.len(), 4);
    assert_eq!(report.head_to_head.len(), 4);
    assert!(report.head_to_head.iter().all(|h| h.total_matches == 1));
    for m in &report.matches {
        let h = report.ledger.get(m.player2, m.player1).unwrap();
        assert_eq!(h.last_meeting, Some(m.id));
    }

    let summary = &report.tournaments[0];
    assert_eq!(summary.participants, 8);
    assert_eq!(summary.total_matches, 4);
    assert!(summary.skipped_rounds.is_empty());
    assert!(summary.champion.is_some());

    assert_eq!(report.participations.len(), 8);
    assert_eq!(report.seasons.len(), 8 * 3);
    for player in registry.players() {
        let seasons: Vec<_> = report.seasons.iter().filter(|s| s.player_id == player.id).collect();
        assert_eq!(seasons.iter().map(|s| s.wins).sum::<u32>(), player.wins);
        assert_eq!(seasons.iter().map(|s| s.losses).sum::<u32>(), player.losses);
        assert_eq!(player.wins + player.losses, player.total_matches());
    }
    let titles: u32 = report.seasons.iter().map(|s| s.titles_won).sum();
    assert_eq!(titles, 1);
}

#[test]
fn divisions_are_seeded_separately_and_rivalries_accumulate() {
    let registry = roster(4, 2);
    let tournaments = vec![
        event("Australian Open 2025", Category::GrandSlam, 1),
        event("WTA Finals", Category::WtaFinals, 11),
        event("US Open 2025", Category::GrandSlam, 8),
    ];
    let report = run_batch(
        &registry,
        &tournaments,
        &EngineConfig::default(),
        StdRng::seed_from_u64(9),
    )
    .unwrap();

    // Each ATP slam: final + semifinal; WTA finals: final only.
    assert_eq!(report.matches.len(), 5);
    assert_eq!(report.tournaments[1].skipped_rounds.len(), 2);
    assert_eq!(report.head_to_head.len(), 3);
    let total: u32 = report.head_to_head.iter().map(|h| h.total_matches).sum();
    assert_eq!(total, 5);
    assert!(report
        .head_to_head
        .iter()
        .all(|h| h.total_matches == h.player1_wins + h.player2_wins));
}

#[test]
fn same_seed_gives_identical_reports() {
    let registry = roster(8, 8);
    let tournaments = vec![
        event("Wimbledon 2025", Category::GrandSlam, 7),
        event("Wuhan Open", Category::Wta1000, 10),
    ];
    let config = EngineConfig::default();
    let a = run_batch(&registry, &tournaments, &config, StdRng::seed_from_u64(77)).unwrap();
    let b = run_batch(&registry, &tournaments, &config, StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a.matches, b.matches);
    assert_eq!(a.head_to_head, b.head_to_head);
    assert_eq!(a.seasons, b.seasons);
    assert!(serde_json::to_string(&a).is_ok());
}

#[test]
fn empty_division_skips_only_that_tournament() {
    let registry = roster(8, 0);
    let tournaments = vec![
        event("Wimbledon 2025", Category::GrandSlam, 7),
        event("WTA 250 Event", Category::Wta250, 9),
        event("US Open 2025", Category::GrandSlam, 8),
    ];
    let report = run_batch(
        &registry,
        &tournaments,
        &EngineConfig::default(),
        StdRng::seed_from_u64(1),
    )
    .unwrap();

    assert_eq!(report.tournaments.len(), 3);
    assert_eq!(report.matches.len(), 8);
    assert_eq!(report.participations.len(), 16);
    assert!(report
        .matches
        .iter()
        .all(|m| m.tournament_id != tournaments[1].id));

    let skipped = &report.tournaments[1];
    assert_eq!(skipped.participants, 0);
    assert_eq!(skipped.total_matches, 0);
    assert_eq!(skipped.champion, None);
    let pool_error = EngineError::EmptyPool {
        division: Division::Wta,
    };
    assert_eq!(skipped.skipped_rounds, vec![pool_error.to_string()]);

    assert_eq!(report.tournaments[0].total_matches, 4);
    assert_eq!(report.tournaments[2].total_matches, 4);
    assert_eq!(report.seasons.len(), 8 * 3);
}

#[test]
fn config_defaults_and_overrides_from_json() {
    let config = EngineConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.season_years, vec![2023, 2024, 2025]);
    assert_eq!(config.simulation.upset_threshold, 0.3);

    let json = r#"{"seed": 5, "season_years": [2025],
        "simulation": {"upset_threshold": 0.1, "aces": {"min": 10, "max": 2}}}"#;
    let config = EngineConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.simulation.upset_threshold, 0.1);
    assert_eq!(config.simulation.best_of, 3);
    assert!(config.simulation.aces.contains(7));

    assert!(matches!(
        EngineConfig::from_reader("{\"seed\": \"x\"}".as_bytes()),
        Err(EngineError::Config(_))
    ));
}
