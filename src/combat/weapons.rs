//! Weapon definitions
//!
//! A weapon deals a fixed base damage per attack. The critical bonus it
//! carries is only added when a calculator reports a critical hit.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{BOW_BASE_DAMAGE, STANDARD_CRITICAL_BONUS, SWORD_BASE_DAMAGE};
use crate::core::error::{CombatError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeaponDef")]
pub struct Weapon {
    name: String,
    base_damage: u32,
    critical_bonus: u32,
}

/// Unvalidated weapon as written in data files
#[derive(Deserialize)]
struct WeaponDef {
    name: String,
    base_damage: u32,
    #[serde(default)]
    critical_bonus: u32,
}

impl TryFrom<WeaponDef> for Weapon {
    type Error = CombatError;

    fn try_from(def: WeaponDef) -> Result<Self> {
        Weapon::new(def.name, def.base_damage, def.critical_bonus)
    }
}

impl Weapon {
    /// Create a weapon; base damage must be positive
    pub fn new(name: impl Into<String>, base_damage: u32, critical_bonus: u32) -> Result<Self> {
        let name = name.into();
        if base_damage == 0 {
            return Err(CombatError::InvalidWeapon {
                name,
                base_damage,
            });
        }
        Ok(Self {
            name,
            base_damage,
            critical_bonus,
        })
    }

    /// Common weapon: Sword
    pub fn sword() -> Self {
        Self {
            name: "sword".to_string(),
            base_damage: SWORD_BASE_DAMAGE,
            critical_bonus: STANDARD_CRITICAL_BONUS,
        }
    }

    /// Common weapon: Bow
    pub fn bow() -> Self {
        Self {
            name: "bow".to_string(),
            base_damage: BOW_BASE_DAMAGE,
            critical_bonus: STANDARD_CRITICAL_BONUS,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_damage(&self) -> u32 {
        self.base_damage
    }

    pub fn critical_bonus(&self) -> u32 {
        self.critical_bonus
    }
}
