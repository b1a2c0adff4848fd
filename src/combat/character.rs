//! Character health and equipped armor
//!
//! A character is alive exactly while its health is above zero. Death is
//! permanent: healing a dead character does nothing.
//!
//! Mutation goes through `&mut self`; a character shared between threads
//! must be serialised by its owner.

use std::sync::Arc;

use crate::combat::armor::Armor;
use crate::combat::constants::DEFAULT_HEALTH;
use crate::core::config::CombatConfig;

#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    health: u32,
    is_alive: bool,
    armor: Option<Arc<dyn Armor>>,
}

impl Character {
    /// Unarmored character at default health
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: DEFAULT_HEALTH,
            is_alive: true,
            armor: None,
        }
    }

    /// Unarmored character at the configured default health
    pub fn from_config(name: impl Into<String>, config: &CombatConfig) -> Self {
        Self::new(name).with_health(config.default_health)
    }

    /// Set starting health; zero health starts the character dead
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self.is_alive = health > 0;
        self
    }

    /// Start with `armor` equipped
    pub fn with_armor(mut self, armor: Arc<dyn Armor>) -> Self {
        self.armor = Some(armor);
        self
    }

    /// Identity; fixed at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health, never negative
    pub fn health(&self) -> u32 {
        self.health
    }

    /// True exactly while health is above zero
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Currently worn armor, if any
    pub fn armor(&self) -> Option<&Arc<dyn Armor>> {
        self.armor.as_ref()
    }

    /// Apply incoming damage through equipped armor
    ///
    /// Returns the mitigated damage, which may exceed the health actually lost
    /// when the hit is lethal.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let mitigated = match &self.armor {
            Some(armor) => armor.calculate_damage_reduction(damage),
            None => damage,
        };
        self.apply_mitigated(mitigated);
        mitigated
    }

    /// Subtract damage that has already been through mitigation
    pub(crate) fn apply_mitigated(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
        if self.health == 0 && self.is_alive {
            self.is_alive = false;
            tracing::info!("{} has fallen", self.name);
        }
    }

    /// Restore health; no effect on a dead character and no upper cap
    pub fn heal(&mut self, amount: u32) {
        if self.is_alive {
            self.health = self.health.saturating_add(amount);
        }
    }

    /// Replace the worn armor, regardless of whether the character is alive
    pub fn equip_armor(&mut self, armor: Arc<dyn Armor>) {
        tracing::debug!(
            "{} equips armor with defense {}",
            self.name,
            armor.defense_value()
        );
        self.armor = Some(armor);
    }

    /// Remove and return the worn armor
    pub fn unequip_armor(&mut self) -> Option<Arc<dyn Armor>> {
        self.armor.take()
    }

    /// Defense rating of the worn armor, or 0 when unarmored
    pub fn total_defense(&self) -> u32 {
        self.armor.as_ref().map_or(0, |armor| armor.defense_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::armor::{HeavyArmor, LightArmor};

    #[test]
    fn test_unarmored_takes_full_damage() {
        let mut hero = Character::new("Hero");
        assert_eq!(hero.take_damage(20), 20);
        assert_eq!(hero.health(), 80);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_light_armor_reduces_damage() {
        let mut hero = Character::new("Hero").with_armor(Arc::new(LightArmor::new()));
        assert_eq!(hero.take_damage(30), 21);
        assert_eq!(hero.health(), 79);
    }

    #[test]
    fn test_lethal_hit_clamps_to_zero() {
        let mut hero = Character::new("Hero").with_health(50);
        assert_eq!(hero.take_damage(60), 60);
        assert_eq!(hero.health(), 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_heavy_armor_prevents_death() {
        let mut tank = Character::new("Tank")
            .with_health(50)
            .with_armor(Arc::new(HeavyArmor::new()));
        tank.take_damage(60);
        assert_eq!(tank.health(), 20);
        assert!(tank.is_alive());
    }

    #[test]
    fn test_death_is_permanent() {
        let mut hero = Character::new("Hero").with_health(10);
        hero.take_damage(10);
        assert!(!hero.is_alive());

        hero.heal(50);
        assert_eq!(hero.health(), 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_heal_has_no_cap() {
        let mut hero = Character::new("Hero");
        hero.heal(25);
        assert_eq!(hero.health(), 125);
    }

    #[test]
    fn test_zero_health_starts_dead() {
        let ghost = Character::new("Ghost").with_health(0);
        assert!(!ghost.is_alive());
    }

    #[test]
    fn test_total_defense() {
        let mut hero = Character::new("Hero");
        assert_eq!(hero.total_defense(), 0);

        hero.equip_armor(Arc::new(HeavyArmor::new()));
        assert_eq!(hero.total_defense(), 10);

        hero.equip_armor(Arc::new(LightArmor::new()));
        assert_eq!(hero.total_defense(), 5);

        assert!(hero.unequip_armor().is_some());
        assert_eq!(hero.total_defense(), 0);
    }

    #[test]
    fn test_equip_after_death() {
        let mut hero = Character::new("Hero").with_health(1);
        hero.take_damage(5);
        hero.equip_armor(Arc::new(LightArmor::new()));
        assert_eq!(hero.total_defense(), 5);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_from_config_uses_default_health() {
        let config = CombatConfig {
            default_health: 60,
            ..CombatConfig::default()
        };
        let hero = Character::from_config("Hero", &config);
        assert_eq!(hero.health(), 60);
        assert_eq!(hero.name(), "Hero");
    }
}
