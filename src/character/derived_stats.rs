use crate::catalog::{ItemDefinition, ItemKind};
use crate::core::constants::*;
use crate::dice::DiceExpr;
use serde::Serialize;

/// Combat stats computed from level and equipment.
///
/// Never stored on the character; recompute whenever level or equipment
/// changes so that level bonuses and gear can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStats {
    pub attack_damage: DiceExpr,
    pub flat_damage_bonus: u32,
    pub defense: u32,
}

impl DerivedStats {
    /// Calculates derived stats from level and the equipped items.
    ///
    /// Damage die = equipped weapon die, else the level base die.
    /// Flat damage = DAMAGE_BONUS_PER_LEVEL per level above 1.
    /// Defense = armor value + DEFENSE_PER_LEVEL per level above 1.
    pub fn calculate_derived_stats(
        level: u32,
        weapon: Option<&ItemDefinition>,
        armor: Option<&ItemDefinition>,
    ) -> Self {
        let levels_gained = level.saturating_sub(STARTING_LEVEL);

        let attack_damage = match weapon.map(|w| w.kind) {
            Some(ItemKind::Weapon { damage }) => damage,
            _ => base_damage_for_level(level),
        };

        let armor_defense = match armor.map(|a| a.kind) {
            Some(ItemKind::Armor { defense }) => defense,
            _ => 0,
        };

        Self {
            attack_damage,
            flat_damage_bonus: levels_gained * DAMAGE_BONUS_PER_LEVEL,
            defense: armor_defense + levels_gained * DEFENSE_PER_LEVEL,
        }
    }

    /// Expected damage of a successful hit.
    pub fn expected_damage(&self) -> f64 {
        self.attack_damage.average() + self.flat_damage_bonus as f64
    }
}

/// Unarmed damage die: d4 at level 1, d6 at level 2, d8 from level 3.
pub fn base_damage_for_level(level: u32) -> DiceExpr {
    match level {
        0 | 1 => DiceExpr::d(4),
        2 => DiceExpr::d(6),
        _ => DiceExpr::d(8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_item;

    #[test]
    fn test_derived_stats_base() {
        let stats = DerivedStats::calculate_derived_stats(1, None, None);
        assert_eq!(stats.attack_damage, DiceExpr::d(4));
        assert_eq!(stats.flat_damage_bonus, 0);
        assert_eq!(stats.defense, 0);
    }

    #[test]
    fn test_base_die_upgrades_with_level() {
        assert_eq!(base_damage_for_level(1), DiceExpr::d(4));
        assert_eq!(base_damage_for_level(2), DiceExpr::d(6));
        assert_eq!(base_damage_for_level(3), DiceExpr::d(8));
        assert_eq!(base_damage_for_level(9), DiceExpr::d(8));
    }

    #[test]
    fn test_weapon_overrides_level_die() {
        let sword = find_item("Sword");
        let stats = DerivedStats::calculate_derived_stats(3, sword, None);
        // Level 3 base would be d8, the equipped Sword wins
        assert_eq!(stats.attack_damage, DiceExpr::d(6));
        assert_eq!(stats.flat_damage_bonus, 2);
    }

    #[test]
    fn test_armor_and_level_defense_add_up() {
        let chainmail = find_item("Chainmail Armor");
        let stats = DerivedStats::calculate_derived_stats(2, None, chainmail);
        assert_eq!(stats.defense, 3); // 2 armor + 1 level
    }

    #[test]
    fn test_non_weapon_in_weapon_slot_is_ignored() {
        let rope = find_item("Rope");
        let stats = DerivedStats::calculate_derived_stats(1, rope, rope);
        assert_eq!(stats.attack_damage, DiceExpr::d(4));
        assert_eq!(stats.defense, 0);
    }

    #[test]
    fn test_recalculation_is_stable() {
        let sword = find_item("Great Sword");
        let armor = find_item("Leather Armor");
        let a = DerivedStats::calculate_derived_stats(2, sword, armor);
        let b = DerivedStats::calculate_derived_stats(2, sword, armor);
        assert_eq!(a, b);
    }

    #[test]
    fn test_better_weapon_raises_expected_damage() {
        let sword = DerivedStats::calculate_derived_stats(1, find_item("Sword"), None);
        let great = DerivedStats::calculate_derived_stats(1, find_item("Great Sword"), None);
        assert!(great.expected_damage() > sword.expected_damage());
    }
}
