//! Trip Compat - Demo Entry Point
//!
//! Scores a sample pair of travelers against a sample trip and prints the
//! result as JSON. Set `TRIP_COMPAT_CONFIG` to a JSON config file to try
//! other weight tables; `RUST_LOG=debug` shows per-call scoring logs.

use std::env;
use std::process;

use log::info;
use rust_decimal::Decimal;

use trip_compat::ranking::{rank_trips, RankQuery};
use trip_compat::{
    Budget, BudgetRange, CompatibilityEngine, DateRange, Destination, EngineConfig, Result,
    TravelStyle, TripProposal, UserProfile,
};

fn window(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::from_ymd(start, end).unwrap_or_else(|| {
        eprintln!("Error: invalid sample date");
        process::exit(1);
    })
}

fn load_config() -> Result<EngineConfig> {
    match env::var("TRIP_COMPAT_CONFIG") {
        Ok(path) => {
            info!("loading config from {path}");
            EngineConfig::from_path(path)
        }
        Err(_) => Ok(EngineConfig::standard()),
    }
}

fn run() -> Result<()> {
    let engine = CompatibilityEngine::new(load_config()?)?;

    let trip = TripProposal::new(
        "lisbon-june",
        Destination::new("Lisbon", "Portugal").with_region("Europe"),
        window((2025, 6, 1), (2025, 6, 15)),
    )
    .with_budget(Budget::new(Decimal::from(1000), "USD"))
    .with_interests(["food", "history"])
    .with_style(TravelStyle::MidRange);

    let alice = UserProfile::new("alice")
        .with_interests(["adventure", "food"])
        .with_languages(["en", "pt"])
        .with_style(TravelStyle::MidRange)
        .with_destinations(["Lisbon", "Kyoto"])
        .with_budget(BudgetRange::new(Decimal::from(500), Decimal::from(1500), "USD"))
        .with_availability([window((2025, 5, 25), (2025, 6, 20))]);

    let bruno = UserProfile::new("bruno")
        .with_interests(["food", "culture"])
        .with_languages(["pt"])
        .with_style(TravelStyle::Luxury)
        .with_destinations(["lisbon", "Kyoto", "Lima"])
        .with_budget(BudgetRange::new(Decimal::from(800), Decimal::from(2000), "USD"))
        .with_availability([window((2025, 6, 10), (2025, 6, 20))]);

    println!("===========================================");
    println!("  Trip Compat - compatibility engine");
    println!("===========================================");
    println!();

    let result = engine.try_score(&alice, &bruno, &trip)?;
    println!("alice x bruno on {}:", trip.id);
    println!("{}", serde_json::to_string_pretty(&result)?);
    println!("fingerprint: {}", result.fingerprint());
    println!();

    let trips = CompatibilityEngine::trip_to_trip();
    let candidates = vec![
        TripProposal::new(
            "porto-june",
            Destination::new("Porto", "Portugal").with_region("Europe"),
            window((2025, 6, 5), (2025, 6, 12)),
        )
        .with_interests(["food", "wine"]),
        TripProposal::new(
            "rome-july",
            Destination::new("Rome", "Italy").with_region("Europe"),
            window((2025, 7, 1), (2025, 7, 10)),
        )
        .with_interests(["history"]),
    ];
    println!("similar trips to {}:", trip.id);
    for ranked in rank_trips(&trips, &trip, &candidates, &RankQuery::with_min_score(0)) {
        println!("  {:<12} {:>3}", ranked.id, ranked.result.score);
    }

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
