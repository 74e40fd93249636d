//! Batch binary: load a roster and tournament list, simulate, print the report as JSON.
//! Run with: cargo run --bin simulate -- roster.csv tournaments.json [config.json]
//! Override the RNG seed with env: TENNIS_SEED (e.g. 1337).

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;
use tennis_engine::{load_roster, load_tournaments, run_batch, EngineConfig, EngineError};

fn open(path: &str) -> Result<BufReader<File>, EngineError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| EngineError::Io(format!("{}: {}", path, e)))
}

fn load_config(path: Option<&String>) -> Result<EngineConfig, EngineError> {
    let mut config = match path {
        Some(p) => EngineConfig::from_reader(open(p)?)?,
        None => EngineConfig::default(),
    };
    if let Ok(raw) = std::env::var("TENNIS_SEED") {
        let seed = raw.parse::<u64>().map_err(|_| {
            EngineError::Config(format!("TENNIS_SEED must be an integer, got {:?}", raw))
        })?;
        config.seed = Some(seed);
    }
    Ok(config)
}

fn run(args: &[String]) -> Result<(), EngineError> {
    let (roster_path, tournaments_path) = match args {
        [roster, tournaments, ..] => (roster, tournaments),
        _ => {
            return Err(EngineError::Config(
                "usage: simulate <roster.csv> <tournaments.json> [config.json]".to_string(),
            ))
        }
    };
    let config = load_config(args.get(2))?;
    let registry = load_roster(open(roster_path)?)?;
    let tournaments = load_tournaments(open(tournaments_path)?)?;

    let rng = match config.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let report = run_batch(&registry, &tournaments, &config, rng)?;

    let json = serde_json::to_string_pretty(&report).map_err(|e| EngineError::Io(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
