pub mod armor;
pub mod character;
pub mod constants;
pub mod critical;
pub mod system;
pub mod weapons;

pub use armor::{reduce_by_percent, Armor, ArmorKind, HeavyArmor, LightArmor};
pub use character::Character;
pub use critical::{CriticalHitCalculator, FixedCritical, RandomCritical};
pub use system::{AttackResult, CombatSystem};
pub use weapons::Weapon;
