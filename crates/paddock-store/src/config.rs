//! Store configuration and validation.
//!
//! [`StoreConfig`] bundles the per-algorithm configs with the session
//! seed, the race duration and the initial colour palette.
//! [`validate()`](StoreConfig::validate) runs once, in
//! [`RaceStore::new`](crate::RaceStore::new).

use std::time::Duration;

use paddock_core::{default_palette, ConfigError};
use paddock_sim::{RosterConfig, ScheduleConfig, SimConfig};

/// How long a round runs before its results are committed.
pub const DEFAULT_RACE_DURATION: Duration = Duration::from_secs(4);

/// Complete configuration for a [`RaceStore`](crate::RaceStore).
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// RNG seed. `None` draws a fresh seed, which the store logs and
    /// exposes through [`RaceStore::seed`](crate::RaceStore::seed).
    pub seed: Option<u64>,
    /// Roster generation.
    pub roster: RosterConfig,
    /// Schedule building.
    pub schedule: ScheduleConfig,
    /// Finish-time simulation.
    pub sim: SimConfig,
    /// Delay between starting a round and committing its result.
    /// Zero resolves as soon as the timer thread runs. Default: 4 s.
    pub race_duration: Duration,
    /// Initial `available_colors`. Default: the 20 built-in colours.
    pub palette: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roster: RosterConfig::default(),
            schedule: ScheduleConfig::default(),
            sim: SimConfig::default(),
            race_duration: DEFAULT_RACE_DURATION,
            palette: default_palette(),
        }
    }
}

impl StoreConfig {
    /// Validate all nested configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.roster.validate()?;
        self.schedule.validate()?;
        self.sim.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.race_duration, Duration::from_secs(4));
        assert_eq!(cfg.palette.len(), 20);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn rejects_empty_palette() {
        let cfg = StoreConfig {
            palette: vec![],
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn nested_errors_surface() {
        let cfg = StoreConfig {
            sim: SimConfig {
                min_multiplier: 2.0,
                max_multiplier: 1.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidMultiplier { .. })
        ));

        let cfg = StoreConfig {
            schedule: ScheduleConfig {
                horses_per_round: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroHorsesPerRound));
    }
}
