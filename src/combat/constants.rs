//! Combat constants - all tunable values in one place

// Armor
pub const LIGHT_ARMOR_REDUCTION_PERCENT: u32 = 30;
pub const LIGHT_ARMOR_DEFENSE: u32 = 5;
pub const HEAVY_ARMOR_REDUCTION_PERCENT: u32 = 50;
pub const HEAVY_ARMOR_DEFENSE: u32 = 10;

// Weapons
pub const SWORD_BASE_DAMAGE: u32 = 15;
pub const BOW_BASE_DAMAGE: u32 = 12;
pub const STANDARD_CRITICAL_BONUS: u32 = 10;

// Characters
pub const DEFAULT_HEALTH: u32 = 100;

// Critical hits
pub const DEFAULT_CRITICAL_CHANCE: f64 = 0.1;
pub const DEFAULT_RNG_SEED: u64 = 42;
