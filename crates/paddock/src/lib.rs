//! Paddock: client-side state for a horse-racing simulation game.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Paddock sub-crates. For most users, adding `paddock` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use paddock::prelude::*;
//!
//! let store = RaceStore::new(StoreConfig {
//!     seed: Some(42),
//!     race_duration: Duration::ZERO,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! store.dispatch(Action::GenerateHorses).unwrap();
//! store.dispatch(Action::GenerateRaceSchedule).unwrap();
//!
//! let pending = store.start_next_round().unwrap();
//! let outcome = pending.wait().unwrap();
//! let winner = &outcome.results().unwrap()[0];
//!
//! assert_eq!(store.with_state(|s| s.current_round_number), 1);
//! assert!(store.with_state(|s| s.round_result_by_number(1).is_some()));
//! assert!(winner.finish_time.is_some());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `paddock-core` | Horses, rounds, results, name pool, palette, errors |
//! | [`sim`] | `paddock-sim` | Roster generation, schedule building, round simulation |
//! | [`store`] | `paddock-store` | State, mutations, actions, getters, pending rounds |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Domain types and errors (`paddock-core`).
pub use paddock_core as types;

/// Randomized session algorithms (`paddock-sim`).
///
/// Useful on their own with any [`rand::Rng`](https://docs.rs/rand), for
/// example to preview a schedule without a store.
pub use paddock_sim as sim;

/// The state container (`paddock-store`).
pub use paddock_store as store;

/// Common imports for typical Paddock usage.
///
/// ```rust
/// use paddock::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use paddock_core::{Horse, HorseId, RaceResult, RaceRound};

    // Errors
    pub use paddock_core::{ConfigError, StoreError};

    // Algorithm configs
    pub use paddock_sim::{RosterConfig, ScheduleConfig, SelectionStrategy, SimConfig};

    // Store
    pub use paddock_store::{
        Action, Dispatched, Mutation, PendingRound, RaceState, RaceStore, RoundOutcome,
        StoreConfig,
    };
}
