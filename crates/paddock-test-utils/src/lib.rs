//! Test fixtures and assertions for Paddock development.
//!
//! Builders for hand-made horses and rounds, plus [`assert_ranked`] which
//! checks the ordering contract every simulated round must satisfy.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{assert_ranked, horse, numbered_roster, round};
