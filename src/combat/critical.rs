//! Critical-hit decision sources
//!
//! The combat system never rolls dice itself. It asks an injected
//! [`CriticalHitCalculator`], which may be random, rule-based or a test double.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::Weapon;
use crate::core::config::CombatConfig;
use crate::core::error::{CombatError, Result};

pub trait CriticalHitCalculator {
    /// Decide whether the current attack is a critical hit
    fn check_critical_hit(&mut self) -> bool;

    /// Extra damage added on a critical hit with `weapon`
    fn critical_bonus(&self, weapon: &Weapon) -> u32 {
        weapon.critical_bonus()
    }
}

impl<T: CriticalHitCalculator + ?Sized> CriticalHitCalculator for &mut T {
    fn check_critical_hit(&mut self) -> bool {
        (**self).check_critical_hit()
    }

    fn critical_bonus(&self, weapon: &Weapon) -> u32 {
        (**self).critical_bonus(weapon)
    }
}

impl<T: CriticalHitCalculator + ?Sized> CriticalHitCalculator for Box<T> {
    fn check_critical_hit(&mut self) -> bool {
        (**self).check_critical_hit()
    }

    fn critical_bonus(&self, weapon: &Weapon) -> u32 {
        (**self).critical_bonus(weapon)
    }
}

/// Seeded random critical hits with a fixed probability
#[derive(Debug, Clone)]
pub struct RandomCritical {
    rng: ChaCha8Rng,
    chance: f64,
}

impl RandomCritical {
    /// Critical with probability `chance`; fails outside [0.0, 1.0]
    pub fn new(chance: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(CombatError::InvalidChance(chance));
        }
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            chance,
        })
    }

    /// Use the configured chance and seed
    pub fn from_config(config: &CombatConfig) -> Result<Self> {
        Self::new(config.critical_chance, config.rng_seed)
    }

    pub fn chance(&self) -> f64 {
        self.chance
    }
}

impl CriticalHitCalculator for RandomCritical {
    fn check_critical_hit(&mut self) -> bool {
        self.rng.gen_bool(self.chance)
    }
}

/// Deterministic calculator that always gives the same answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCritical {
    critical: bool,
    bonus: Option<u32>,
}

impl FixedCritical {
    /// Every attack is a critical hit
    pub fn always() -> Self {
        Self {
            critical: true,
            bonus: None,
        }
    }

    /// No attack is ever a critical hit
    pub fn never() -> Self {
        Self {
            critical: false,
            bonus: None,
        }
    }

    /// Use `bonus` instead of the weapon's own critical bonus
    pub fn with_bonus(mut self, bonus: u32) -> Self {
        self.bonus = Some(bonus);
        self
    }
}

impl CriticalHitCalculator for FixedCritical {
    fn check_critical_hit(&mut self) -> bool {
        self.critical
    }

    fn critical_bonus(&self, weapon: &Weapon) -> u32 {
        self.bonus.unwrap_or_else(|| weapon.critical_bonus())
    }
}
