//! Randomized algorithms behind a Paddock race session.
//!
//! Every entry point is generic over [`rand::Rng`] and owns no state:
//! the store supplies its seeded RNG, tests supply their own. Each
//! algorithm has a config struct with a `Default` matching the classic
//! game rules and a `validate()` that reports a
//! [`ConfigError`](paddock_core::ConfigError).
//!
//! - [`roster`]: generate a batch of horses with unique names and colours.
//! - [`schedule`]: build the multi-round schedule from a roster.
//! - [`simulate`]: compute finish times and rank a round.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod roster;
pub mod schedule;
pub mod simulate;

pub use roster::{generate_roster, random_hex_color, RosterConfig};
pub use schedule::{build_schedule, select_entrants, ScheduleConfig, SelectionStrategy};
pub use simulate::{finish_time, run_round, SimConfig};
