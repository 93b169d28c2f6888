//! Error types for the Paddock race state container.
//!
//! Two families: [`ConfigError`] for rejected configuration at store
//! construction, and [`StoreError`] for failed actions at runtime.

use std::error::Error;
use std::fmt;

/// Errors detected while validating store, roster, schedule or
/// simulation configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Roster size is zero.
    EmptyRoster,
    /// The name pool cannot cover the requested roster size.
    NotEnoughNames {
        /// Configured roster size.
        roster_size: usize,
        /// Number of names available.
        names: usize,
    },
    /// Condition range is empty, inverted, or outside `[1, 100]`.
    InvalidCondition {
        /// Lower bound (inclusive).
        min: u8,
        /// Upper bound (inclusive).
        max: u8,
    },
    /// Colour palette is empty.
    EmptyPalette,
    /// No round distances configured.
    NoRounds,
    /// A round distance of zero metres.
    ZeroDistance {
        /// 1-based round whose distance is zero.
        round_number: u32,
    },
    /// `horses_per_round` is zero.
    ZeroHorsesPerRound,
    /// Speed multiplier range is non-finite, non-positive, or inverted.
    InvalidMultiplier {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoster => write!(f, "roster size must be at least 1"),
            Self::NotEnoughNames { roster_size, names } => {
                write!(f, "roster of {roster_size} needs as many names, only {names} available")
            }
            Self::InvalidCondition { min, max } => {
                write!(f, "condition range {min}..={max} must lie within 1..=100")
            }
            Self::EmptyPalette => write!(f, "colour palette is empty"),
            Self::NoRounds => write!(f, "schedule has no round distances"),
            Self::ZeroDistance { round_number } => {
                write!(f, "round {round_number} has zero distance")
            }
            Self::ZeroHorsesPerRound => write!(f, "horses_per_round must be at least 1"),
            Self::InvalidMultiplier { min, max } => {
                write!(
                    f,
                    "speed multiplier range [{min}, {max}) must be finite, positive and non-empty"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from store actions.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreError {
    /// The advanced round number has no matching round in the schedule.
    RoundNotFound {
        /// The round number that was looked up.
        round_number: u32,
    },
    /// The race timer exited before reporting the round's results.
    RaceAbandoned {
        /// The round that was running.
        round_number: u32,
    },
    /// The race timer thread could not be spawned.
    TimerSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
    /// Store configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundNotFound { round_number } => {
                write!(f, "current round {round_number} not found in schedule")
            }
            Self::RaceAbandoned { round_number } => {
                write!(f, "round {round_number} was abandoned before finishing")
            }
            Self::TimerSpawnFailed { reason } => {
                write!(f, "race timer spawn failed: {reason}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for StoreError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
