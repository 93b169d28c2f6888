//! Named, synchronous state mutations.

use paddock_core::{Horse, HorseId, RaceResult, RaceRound};

/// A single edit to [`RaceState`](crate::RaceState).
///
/// Mutations are the only way state changes. Actions are built from
/// them, and UI layers may commit them directly.
///
/// # Examples
///
/// ```
/// use paddock_store::{Mutation, RaceState};
///
/// let mut state = RaceState::default();
/// state.apply(Mutation::SetCurrentRoundNumber(3));
/// state.apply(Mutation::SetRaceInProgress(true));
///
/// assert_eq!(state.current_round_number, 3);
/// assert!(state.is_race_active());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// Replace the roster.
    SetHorses(Vec<Horse>),
    /// Append one horse to the roster.
    AddHorse(Horse),
    /// Replace the schedule.
    SetRaceSchedule(Vec<RaceRound>),
    /// Set the current round number. 0 means not started.
    SetCurrentRoundNumber(u32),
    /// Append a finished round.
    AddRaceResult(RaceResult),
    /// Replace all finished rounds.
    SetRaceResults(Vec<RaceResult>),
    /// Set the race-in-progress flag.
    SetRaceInProgress(bool),
    /// Move one horse of the current round. No-op if either is missing.
    UpdateHorsePosition {
        /// The horse to move.
        horse_id: HorseId,
        /// Its new track position.
        position: u32,
    },
    /// Set every position, roster and schedule copies alike, to 0.
    ResetHorsePositions,
}

impl Mutation {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetHorses(_) => "SET_HORSES",
            Self::AddHorse(_) => "ADD_HORSE",
            Self::SetRaceSchedule(_) => "SET_RACE_SCHEDULE",
            Self::SetCurrentRoundNumber(_) => "SET_CURRENT_ROUND_NUMBER",
            Self::AddRaceResult(_) => "ADD_RACE_RESULT",
            Self::SetRaceResults(_) => "SET_RACE_RESULTS",
            Self::SetRaceInProgress(_) => "SET_RACE_IN_PROGRESS",
            Self::UpdateHorsePosition { .. } => "UPDATE_HORSE_POSITION",
            Self::ResetHorsePositions => "RESET_HORSE_POSITIONS",
        }
    }
}
