//! Skirmish - turn-based combat core
//!
//! Weapons deal base damage, an injected calculator decides critical hits,
//! and armor mitigates what finally reaches a character's health.

pub mod combat;
pub mod core;

pub use crate::combat::{
    reduce_by_percent, Armor, ArmorKind, AttackResult, Character, CombatSystem,
    CriticalHitCalculator, FixedCritical, HeavyArmor, LightArmor, RandomCritical, Weapon,
};
pub use crate::core::{CombatConfig, CombatError, Result};
