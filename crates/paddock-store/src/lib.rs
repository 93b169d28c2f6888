//! State container for a Paddock race session.
//!
//! [`RaceStore`] owns a [`RaceState`] and the session RNG. UI layers
//! interact with it through three surfaces:
//!
//! - **Mutations** ([`Mutation`]): named, synchronous state edits applied
//!   with [`RaceStore::commit`].
//! - **Actions** ([`Action`]): named operations that generate data and
//!   commit mutations, run with [`RaceStore::dispatch`]. Starting a round
//!   returns a [`PendingRound`] that resolves after the race duration.
//! - **Getters**: read-only views on [`RaceState`], reached through
//!   [`RaceStore::state`] or [`RaceStore::with_state`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod mutation;
pub mod pending;
pub mod state;
pub mod store;

pub use action::{Action, Dispatched};
pub use config::{StoreConfig, DEFAULT_RACE_DURATION};
pub use mutation::Mutation;
pub use pending::{PendingRound, RoundOutcome};
pub use state::RaceState;
pub use store::RaceStore;
