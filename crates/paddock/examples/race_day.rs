//! Race day: one full session from roster to final standings.
//!
//! Demonstrates:
//!   1. Building a store with a fixed seed
//!   2. Dispatching the roster and schedule actions
//!   3. Running every round and polling the pending handle
//!   4. Reading results back through the getters
//!
//! Run with:
//!   RUST_LOG=info cargo run -p paddock --example race_day

use std::time::Duration;

use paddock::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let store = RaceStore::new(StoreConfig {
        seed: Some(2024),
        race_duration: Duration::from_millis(500),
        ..Default::default()
    })?;

    store.dispatch(Action::GenerateHorses)?;
    store.dispatch(Action::GenerateRaceSchedule)?;

    store.with_state(|s| {
        for h in s.horse_list() {
            info!(name = %h.name, color = %h.color, condition = h.condition, "entered");
        }
    });

    loop {
        let Some(mut pending) = store.dispatch(Action::StartNextRound)?.into_round() else {
            break;
        };
        // A UI would redraw here; the example just polls.
        let outcome = loop {
            if let Some(outcome) = pending.wait_timeout(Duration::from_millis(100))? {
                break outcome;
            }
        };
        let RoundOutcome::Finished {
            round_number,
            results,
        } = outcome
        else {
            break;
        };
        for (place, h) in results.iter().take(3).enumerate() {
            info!(
                round = round_number,
                place = place + 1,
                name = %h.name,
                time = format!("{:.2}", h.finish_time.unwrap_or_default()),
                "podium"
            );
        }
    }

    let state = store.state();
    info!(
        rounds = state.race_results().len(),
        active = state.is_race_active(),
        "session over"
    );
    Ok(())
}
