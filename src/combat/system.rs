//! Single-attack resolution
//!
//! Weapon base damage plus any critical bonus makes the raw hit. Against
//! flat-percentage armor the landed damage is rounded up,
//! `ceil(raw * (100 - p) / 100)`. Any other armor is opaque and decides
//! for itself through [`Character::take_damage`].

use crate::combat::{Character, CriticalHitCalculator, Weapon};

/// Result of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Did the calculator report a critical hit?
    pub critical: bool,
    /// Damage before mitigation
    pub raw_damage: u32,
    /// Damage after mitigation, as subtracted from health
    pub damage_applied: u32,
    /// Is the defender still standing?
    pub defender_alive: bool,
}

/// Landed damage against `percent` reduction, rounded up
fn reconciled_damage(raw: u32, percent: u32) -> u32 {
    let kept = u64::from(100 - percent.min(100));
    (u64::from(raw) * kept).div_ceil(100) as u32
}

/// Resolves attacks using an injected critical-hit calculator
#[derive(Debug, Clone)]
pub struct CombatSystem<C: CriticalHitCalculator> {
    calculator: C,
}

impl<C: CriticalHitCalculator> CombatSystem<C> {
    /// Build a combat system around its critical-hit source
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Mutable access, e.g. to replace or reseed the calculator between attacks
    pub fn calculator_mut(&mut self) -> &mut C {
        &mut self.calculator
    }

    pub fn into_inner(self) -> C {
        self.calculator
    }

    /// Attack `defender` with `weapon`, returning the damage applied
    pub fn perform_attack(
        &mut self,
        attacker: &Character,
        weapon: &Weapon,
        defender: &mut Character,
    ) -> u32 {
        self.resolve_attack(attacker, weapon, defender).damage_applied
    }

    /// Attack `defender` with `weapon`
    ///
    /// # Arguments
    /// * `attacker` - The character wielding the weapon
    /// * `weapon` - Source of base damage and the critical bonus
    /// * `defender` - The character receiving the hit
    ///
    /// # Returns
    /// Attack result with the critical flag and damage before/after armor
    pub fn resolve_attack(
        &mut self,
        attacker: &Character,
        weapon: &Weapon,
        defender: &mut Character,
    ) -> AttackResult {
        let critical = self.calculator.check_critical_hit();
        let bonus = if critical {
            self.calculator.critical_bonus(weapon)
        } else {
            0
        };
        let raw_damage = weapon.base_damage().saturating_add(bonus);

        let percent = defender.armor().and_then(|armor| armor.reduction_percent());
        let damage_applied = match percent {
            // Already mitigated here; take_damage would apply the armor again
            Some(percent) => {
                let landed = reconciled_damage(raw_damage, percent);
                defender.apply_mitigated(landed);
                landed
            }
            None => defender.take_damage(raw_damage),
        };

        tracing::debug!(
            "{} hits {} with {} for {} ({} raw{})",
            attacker.name(),
            defender.name(),
            weapon.name(),
            damage_applied,
            raw_damage,
            if critical { ", critical" } else { "" }
        );

        AttackResult {
            critical,
            raw_damage,
            damage_applied,
            defender_alive: defender.is_alive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::armor::{Armor, HeavyArmor, LightArmor};
    use crate::combat::critical::FixedCritical;
    use std::sync::Arc;

    #[test]
    fn test_reconciled_damage_rounds_up() {
        assert_eq!(reconciled_damage(15, 50), 8);
        assert_eq!(reconciled_damage(22, 30), 16);
        assert_eq!(reconciled_damage(100, 30), 70);
        assert_eq!(reconciled_damage(1, 50), 1);
        assert_eq!(reconciled_damage(0, 50), 0);
    }

    #[test]
    fn test_reconciled_matches_armor_for_standard_variants() {
        let light = LightArmor::new();
        let heavy = HeavyArmor::new();
        for raw in 0..500 {
            assert_eq!(reconciled_damage(raw, 30), light.calculate_damage_reduction(raw));
            assert_eq!(reconciled_damage(raw, 50), heavy.calculate_damage_reduction(raw));
        }
    }

    #[test]
    fn test_critical_bow_vs_light_armor() {
        let mut combat = CombatSystem::new(FixedCritical::always());
        let attacker = Character::new("Rogue");
        let mut defender = Character::new("Guardian").with_armor(Arc::new(LightArmor::new()));

        let result = combat.resolve_attack(&attacker, &Weapon::bow(), &mut defender);

        assert!(result.critical);
        assert_eq!(result.raw_damage, 22);
        assert_eq!(result.damage_applied, 16);
        assert_eq!(defender.health(), 84);
        assert!(result.defender_alive);
    }

    #[test]
    fn test_sword_vs_heavy_armor() {
        let mut combat = CombatSystem::new(FixedCritical::never());
        let attacker = Character::new("Warrior");
        let mut defender = Character::new("Knight").with_armor(Arc::new(HeavyArmor::new()));

        let applied = combat.perform_attack(&attacker, &Weapon::sword(), &mut defender);

        assert_eq!(applied, 8);
        assert_eq!(defender.health(), 92);
    }

    #[test]
    fn test_unarmored_defender_takes_raw_damage() {
        let mut combat = CombatSystem::new(FixedCritical::always().with_bonus(5));
        let attacker = Character::new("Warrior");
        let mut defender = Character::new("Peasant");

        let applied = combat.perform_attack(&attacker, &Weapon::sword(), &mut defender);

        assert_eq!(applied, 20);
        assert_eq!(defender.health(), 80);
    }

    #[test]
    fn test_lethal_attack_reports_death() {
        let mut combat = CombatSystem::new(FixedCritical::never());
        let attacker = Character::new("Warrior");
        let mut defender = Character::new("Peasant").with_health(10);

        let result = combat.resolve_attack(&attacker, &Weapon::sword(), &mut defender);

        assert_eq!(result.damage_applied, 15);
        assert!(!result.defender_alive);
        assert_eq!(defender.health(), 0);
    }

    #[test]
    fn test_bonus_saturates() {
        let mut combat = CombatSystem::new(FixedCritical::always().with_bonus(u32::MAX));
        let attacker = Character::new("Giant");
        let mut defender = Character::new("Ant");

        let result = combat.resolve_attack(&attacker, &Weapon::bow(), &mut defender);

        assert_eq!(result.raw_damage, u32::MAX);
        assert!(!defender.is_alive());
    }

    #[test]
    fn test_calculator_can_be_swapped_between_attacks() {
        let mut combat = CombatSystem::new(FixedCritical::never());
        let attacker = Character::new("Rogue");
        let mut defender = Character::new("Dummy");

        assert_eq!(combat.perform_attack(&attacker, &Weapon::bow(), &mut defender), 12);

        *combat.calculator_mut() = FixedCritical::always();
        assert_eq!(combat.perform_attack(&attacker, &Weapon::bow(), &mut defender), 22);
        assert_eq!(defender.health(), 66);
    }

    #[test]
    fn test_calculator_is_recoverable() {
        let combat = CombatSystem::new(FixedCritical::always());
        assert_eq!(*combat.calculator(), FixedCritical::always());
        assert_eq!(combat.into_inner(), FixedCritical::always());
    }
}
