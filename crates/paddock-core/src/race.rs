//! Horses, race rounds and round results.

use serde::{Deserialize, Serialize};

use crate::id::HorseId;

/// A single horse.
///
/// Rosters own the master copy of each horse; schedule rounds and results
/// hold independent clones, so mutating one never affects the others.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    /// Unique identifier.
    pub id: HorseId,
    /// Display name.
    pub name: String,
    /// Display colour, `#RRGGBB`.
    pub color: String,
    /// Fitness score in `[50, 100]`. Higher runs faster.
    pub condition: u8,
    /// Track position, reset to `Some(0)` between sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Simulated finish time, set only on result copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<f64>,
}

impl Horse {
    /// Create a horse at position 0 with no finish time.
    pub fn new(
        id: impl Into<HorseId>,
        name: impl Into<String>,
        color: impl Into<String>,
        condition: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            condition,
            position: Some(0),
            finish_time: None,
        }
    }

    /// Clone of this horse with its transient race fields cleared.
    pub fn fresh_entry(&self) -> Self {
        Self {
            position: Some(0),
            finish_time: None,
            ..self.clone()
        }
    }
}

/// One race instance: a distance and the horses entered in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRound {
    /// 1-based position in the schedule.
    pub round_number: u32,
    /// Race length in metres.
    pub distance: u32,
    /// Entrants (copies of roster horses).
    pub horses: Vec<Horse>,
}

/// A finished round: the round itself plus its ranked entrants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// The round as scheduled.
    #[serde(flatten)]
    pub round: RaceRound,
    /// The round's horses ordered by ascending finish time.
    pub results: Vec<Horse>,
}

impl RaceResult {
    /// Round number of the underlying round.
    pub fn round_number(&self) -> u32 {
        self.round.round_number
    }

    /// The winning horse, if the round had any entrants.
    pub fn winner(&self) -> Option<&Horse> {
        self.results.first()
    }
}
