//! Roster generation.
//!
//! Produces a batch of horses with names drawn without replacement from
//! the configured pool and colours drawn without replacement from the
//! palette. Once the palette runs dry, each further horse gets a random
//! `#RRGGBB` colour, which may repeat.

use paddock_core::{default_names, ConfigError, Horse, HorseId};
use rand::Rng;

/// Configuration for [`generate_roster`].
#[derive(Clone, Debug, PartialEq)]
pub struct RosterConfig {
    /// Horses per roster. Default: 20.
    pub size: usize,
    /// Name pool. Must hold at least `size` names. Default: the built-in 30.
    pub names: Vec<String>,
    /// Lowest condition (inclusive). Default: 50.
    pub min_condition: u8,
    /// Highest condition (inclusive). Default: 99.
    pub max_condition: u8,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            size: 20,
            names: default_names(),
            min_condition: 50,
            max_condition: 99,
        }
    }
}

impl RosterConfig {
    /// Check that a roster of `size` can be generated from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyRoster);
        }
        if self.names.len() < self.size {
            return Err(ConfigError::NotEnoughNames {
                roster_size: self.size,
                names: self.names.len(),
            });
        }
        if self.min_condition == 0
            || self.max_condition > 100
            || self.min_condition > self.max_condition
        {
            return Err(ConfigError::InvalidCondition {
                min: self.min_condition,
                max: self.max_condition,
            });
        }
        Ok(())
    }
}

/// A uniformly random colour below `#FFFFFF`, uppercase and zero-padded.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06X}", rng.gen_range(0..0xFF_FFFFu32))
}

/// Generate `config.size` horses.
///
/// Each horse takes a random remaining palette colour (falling back to
/// [`random_hex_color`]), a random remaining name, and a condition drawn
/// uniformly from the configured range. Positions start at 0.
pub fn generate_roster<R: Rng + ?Sized>(
    rng: &mut R,
    config: &RosterConfig,
    palette: &[String],
) -> Result<Vec<Horse>, ConfigError> {
    config.validate()?;

    let mut colors = palette.to_vec();
    let mut names = config.names.clone();
    let mut horses = Vec::with_capacity(config.size);

    for i in 0..config.size {
        let color = if colors.is_empty() {
            random_hex_color(rng)
        } else {
            colors.remove(rng.gen_range(0..colors.len()))
        };
        // validate() guarantees the pool outlasts the loop.
        let name = names.remove(rng.gen_range(0..names.len()));
        let condition = rng.gen_range(config.min_condition..=config.max_condition);

        horses.push(Horse::new(HorseId::now(i), name, color, condition));
    }

    Ok(horses)
}
