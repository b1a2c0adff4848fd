//! Armor capability for damage mitigation
//!
//! Armor maps incoming damage to the damage that actually lands. The two
//! standard variants remove a fixed percentage, truncating the removed
//! amount. Callers may supply their own policy by implementing [`Armor`].

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    HEAVY_ARMOR_DEFENSE, HEAVY_ARMOR_REDUCTION_PERCENT, LIGHT_ARMOR_DEFENSE,
    LIGHT_ARMOR_REDUCTION_PERCENT,
};

/// Damage-reduction policy plus an informational defense rating
///
/// Implementations hold no mutable state, so one instance can be shared
/// by any number of characters.
pub trait Armor: Debug + Send + Sync {
    /// Damage remaining after mitigation
    fn calculate_damage_reduction(&self, incoming_damage: u32) -> u32;

    /// Display rating; not used in damage math
    fn defense_value(&self) -> u32;

    /// Percentage removed, for armor that follows a flat-percentage policy
    ///
    /// Custom armor keeps the default `None` and is treated as opaque.
    fn reduction_percent(&self) -> Option<u32> {
        None
    }
}

/// `damage - floor(damage * percent / 100)`, computed without floats
pub fn reduce_by_percent(damage: u32, percent: u32) -> u32 {
    let removed = u64::from(damage) * u64::from(percent.min(100)) / 100;
    damage - removed as u32
}

/// Leather-grade armor: removes 30% of incoming damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightArmor {
    defense: u32,
    reduction_percent: u32,
}

impl LightArmor {
    /// 30% reduction, defense 5
    pub fn new() -> Self {
        Self {
            defense: LIGHT_ARMOR_DEFENSE,
            reduction_percent: LIGHT_ARMOR_REDUCTION_PERCENT,
        }
    }
}

impl Default for LightArmor {
    fn default() -> Self {
        Self::new()
    }
}

impl Armor for LightArmor {
    fn calculate_damage_reduction(&self, incoming_damage: u32) -> u32 {
        reduce_by_percent(incoming_damage, self.reduction_percent)
    }

    fn defense_value(&self) -> u32 {
        self.defense
    }

    fn reduction_percent(&self) -> Option<u32> {
        Some(self.reduction_percent)
    }
}

/// Plate-grade armor: removes 50% of incoming damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeavyArmor {
    defense: u32,
    reduction_percent: u32,
}

impl HeavyArmor {
    /// 50% reduction, defense 10
    pub fn new() -> Self {
        Self {
            defense: HEAVY_ARMOR_DEFENSE,
            reduction_percent: HEAVY_ARMOR_REDUCTION_PERCENT,
        }
    }
}

impl Default for HeavyArmor {
    fn default() -> Self {
        Self::new()
    }
}

impl Armor for HeavyArmor {
    fn calculate_damage_reduction(&self, incoming_damage: u32) -> u32 {
        reduce_by_percent(incoming_damage, self.reduction_percent)
    }

    fn defense_value(&self) -> u32 {
        self.defense
    }

    fn reduction_percent(&self) -> Option<u32> {
        Some(self.reduction_percent)
    }
}

/// Standard armor variants by name, for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorKind {
    Light,
    Heavy,
}

impl ArmorKind {
    /// Build a shareable instance of this variant
    pub fn build(self) -> Arc<dyn Armor> {
        match self {
            ArmorKind::Light => Arc::new(LightArmor::new()),
            ArmorKind::Heavy => Arc::new(HeavyArmor::new()),
        }
    }
}
