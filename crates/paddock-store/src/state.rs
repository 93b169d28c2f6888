//! Root state and its derived views.

use paddock_core::{default_palette, Horse, RaceResult, RaceRound};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::mutation::Mutation;

/// Everything a race session knows.
///
/// Fields are public for reading; edits go through [`apply`](Self::apply)
/// so that every change is a named [`Mutation`]. Serialises to camelCase
/// JSON for UI consumption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceState {
    /// The roster.
    pub horses: Vec<Horse>,
    /// The schedule, in round order.
    pub race_schedule: Vec<RaceRound>,
    /// 1-based number of the round last started. 0 before the first.
    pub current_round_number: u32,
    /// Finished rounds, in completion order.
    pub race_results: Vec<RaceResult>,
    /// Whether a round has been started and the session is not over.
    pub is_race_in_progress: bool,
    /// Palette that roster generation draws colours from.
    pub available_colors: Vec<String>,
}

impl Default for RaceState {
    fn default() -> Self {
        Self::new(default_palette())
    }
}

impl RaceState {
    /// Empty state with the given palette.
    pub fn new(available_colors: Vec<String>) -> Self {
        Self {
            horses: Vec::new(),
            race_schedule: Vec::new(),
            current_round_number: 0,
            race_results: Vec::new(),
            is_race_in_progress: false,
            available_colors,
        }
    }

    /// Apply one mutation.
    pub fn apply(&mut self, mutation: Mutation) {
        trace!(mutation = mutation.name(), "commit");
        match mutation {
            Mutation::SetHorses(horses) => self.horses = horses,
            Mutation::AddHorse(horse) => self.horses.push(horse),
            Mutation::SetRaceSchedule(schedule) => self.race_schedule = schedule,
            Mutation::SetCurrentRoundNumber(n) => {
                if n as usize > self.race_schedule.len() {
                    warn!(
                        round = n,
                        scheduled = self.race_schedule.len(),
                        "current round number set beyond schedule"
                    );
                }
                self.current_round_number = n;
            }
            Mutation::AddRaceResult(result) => self.race_results.push(result),
            Mutation::SetRaceResults(results) => self.race_results = results,
            Mutation::SetRaceInProgress(flag) => self.is_race_in_progress = flag,
            Mutation::UpdateHorsePosition { horse_id, position } => {
                let current = self.current_round_number;
                let horse = self
                    .race_schedule
                    .iter_mut()
                    .find(|r| r.round_number == current)
                    .and_then(|r| r.horses.iter_mut().find(|h| h.id == horse_id));
                match horse {
                    Some(h) => h.position = Some(position),
                    None => trace!(%horse_id, round = current, "position update matched no horse"),
                }
            }
            Mutation::ResetHorsePositions => {
                let schedule = self.race_schedule.iter_mut().flat_map(|r| r.horses.iter_mut());
                for h in schedule.chain(self.horses.iter_mut()) {
                    h.position = Some(0);
                }
            }
        }
    }

    // ── Getters ─────────────────────────────────────────────────

    /// The roster.
    pub fn horse_list(&self) -> &[Horse] {
        &self.horses
    }

    /// The schedule.
    pub fn race_schedule(&self) -> &[RaceRound] {
        &self.race_schedule
    }

    /// Finished rounds.
    pub fn race_results(&self) -> &[RaceResult] {
        &self.race_results
    }

    /// The round last started, or `None` before the first round and
    /// whenever the round number lies beyond the schedule.
    pub fn current_round(&self) -> Option<&RaceRound> {
        let n = self.current_round_number as usize;
        if n == 0 {
            return None;
        }
        self.race_schedule.get(n - 1)
    }

    /// Whether a race is in progress.
    pub fn is_race_active(&self) -> bool {
        self.is_race_in_progress
    }

    /// First finished round with the given number.
    pub fn round_result_by_number(&self, round_number: u32) -> Option<&RaceResult> {
        self.race_results
            .iter()
            .find(|r| r.round_number() == round_number)
    }
}
