//! Core types and errors for the Paddock race state container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the domain entities shared by the simulation algorithms and the
//! store: horses, race rounds, round results, the built-in name pool
//! and colour palette, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pools;
pub mod race;

pub use error::{ConfigError, StoreError};
pub use id::HorseId;
pub use pools::{default_names, default_palette, DEFAULT_PALETTE, HORSE_NAMES};
pub use race::{Horse, RaceResult, RaceRound};
