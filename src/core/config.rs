//! Combat configuration with documented defaults
//!
//! Values can be loaded from a TOML file. Any field left out of the file
//! keeps its default.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::combat::constants::{DEFAULT_CRITICAL_CHANCE, DEFAULT_HEALTH, DEFAULT_RNG_SEED};
use crate::combat::Weapon;
use crate::core::error::{CombatError, Result};

/// Configuration for characters, critical hits and the weapon roster
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Starting health for characters built from this config
    pub default_health: u32,

    /// Probability that a random calculator reports a critical hit
    ///
    /// Must lie within [0.0, 1.0].
    pub critical_chance: f64,

    /// Seed for the random critical-hit calculator
    ///
    /// A fixed seed makes a sequence of attacks reproducible.
    pub rng_seed: u64,

    /// Weapons available by name
    pub weapons: Vec<Weapon>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            default_health: DEFAULT_HEALTH,
            critical_chance: DEFAULT_CRITICAL_CHANCE,
            rng_seed: DEFAULT_RNG_SEED,
            weapons: vec![Weapon::sword(), Weapon::bow()],
        }
    }
}

impl CombatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded combat config from {} ({} weapons)",
            path.display(),
            config.weapons.len()
        );
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.default_health == 0 {
            return Err(CombatError::InvalidConfig(
                "default_health must be positive".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.critical_chance) {
            return Err(CombatError::InvalidChance(self.critical_chance));
        }

        let mut seen = HashSet::new();
        for weapon in &self.weapons {
            if !seen.insert(weapon.name()) {
                return Err(CombatError::InvalidConfig(format!(
                    "duplicate weapon name {:?}",
                    weapon.name()
                )));
            }
        }

        Ok(())
    }

    /// Look up a configured weapon by name
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name() == name)
    }
}
