//! Round simulation.
//!
//! Each entrant's finish time is `distance / (condition * m)` where `m`
//! is a per-horse speed multiplier drawn uniformly from
//! `[min_multiplier, max_multiplier)`. Higher condition and luckier
//! multipliers finish sooner. Ranking is a stable ascending sort.

use paddock_core::{ConfigError, Horse, RaceRound};
use rand::Rng;

/// Configuration for [`run_round`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Lower multiplier bound (inclusive). Default: 0.8.
    pub min_multiplier: f64,
    /// Upper multiplier bound (exclusive). Default: 1.3.
    pub max_multiplier: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            min_multiplier: 0.8,
            max_multiplier: 1.3,
        }
    }
}

impl SimConfig {
    /// Multipliers must be finite, positive, and span a non-empty range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_multiplier, self.max_multiplier);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(ConfigError::InvalidMultiplier { min, max });
        }
        Ok(())
    }

    /// Draw one speed multiplier.
    pub fn sample_multiplier<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min_multiplier + rng.gen::<f64>() * (self.max_multiplier - self.min_multiplier)
    }
}

/// Simulated time for a horse of `condition` to cover `distance` metres.
pub fn finish_time(distance: u32, condition: u8, multiplier: f64) -> f64 {
    f64::from(distance) / (f64::from(condition) * multiplier)
}

/// Run `round` once: time every entrant, then rank them.
///
/// Returns copies of the round's horses with `finish_time` set, ordered
/// by non-decreasing finish time. Ties keep entry order. The round
/// itself is not modified.
pub fn run_round<R: Rng + ?Sized>(rng: &mut R, round: &RaceRound, config: &SimConfig) -> Vec<Horse> {
    let mut results: Vec<Horse> = round
        .horses
        .iter()
        .map(|h| Horse {
            finish_time: Some(finish_time(
                round.distance,
                h.condition,
                config.sample_multiplier(rng),
            )),
            ..h.clone()
        })
        .collect();

    results.sort_by(|a, b| {
        let ta = a.finish_time.unwrap_or(f64::INFINITY);
        let tb = b.finish_time.unwrap_or(f64::INFINITY);
        ta.total_cmp(&tb)
    });
    results
}
