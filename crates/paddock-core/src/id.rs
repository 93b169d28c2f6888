//! Strongly-typed horse identifier.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Identifies a horse across the roster, the schedule copies and results.
///
/// Generated rosters use `horse-{index}-{unix_millis}`, so ids from two
/// generations never collide even when the index repeats. Fixtures and
/// callers may use any string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HorseId(pub String);

impl HorseId {
    /// Build the id for the `index`-th horse of a roster generated at
    /// `millis` milliseconds since the Unix epoch.
    pub fn generated(index: usize, millis: u128) -> Self {
        Self(format!("horse-{index}-{millis}"))
    }

    /// Build the id for the `index`-th horse of a roster generated now.
    ///
    /// A system clock set before the epoch yields a timestamp of 0.
    pub fn now(index: usize) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        Self::generated(index, millis)
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HorseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HorseId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for HorseId {
    fn from(v: String) -> Self {
        Self(v)
    }
}
