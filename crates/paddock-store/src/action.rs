//! Named actions dispatched against the store.

use crate::pending::PendingRound;

/// An operation that generates data and commits mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the roster with a freshly generated one.
    GenerateHorses,
    /// Build a new schedule from the current roster and rewind to round 0.
    GenerateRaceSchedule,
    /// Start the next scheduled round.
    StartNextRound,
}

impl Action {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GenerateHorses => "generateHorses",
            Self::GenerateRaceSchedule => "generateRaceSchedule",
            Self::StartNextRound => "startNextRound",
        }
    }
}

/// What [`RaceStore::dispatch`](crate::RaceStore::dispatch) hands back.
#[derive(Debug)]
pub enum Dispatched {
    /// A synchronous action completed.
    Done,
    /// A round was started (or the session was already complete).
    Round(PendingRound),
}

impl Dispatched {
    /// The pending round, if this dispatch produced one.
    pub fn into_round(self) -> Option<PendingRound> {
        match self {
            Self::Done => None,
            Self::Round(p) => Some(p),
        }
    }
}
