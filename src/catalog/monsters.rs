use super::items::LOOT_DROPS;
use crate::combat::specials::SpecialEffect;
use crate::dice::DiceExpr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonsterTier {
    Weak,
    Tough,
    Boss,
}

/// Immutable monster definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub tier: MonsterTier,
    pub base_points: u32,
    /// Overrides `base_points` when the monster is killed.
    pub kill_points: Option<u32>,
    pub damage: DiceExpr,
    pub max_hp: u32,
    /// Target the player's d6 attack roll must meet or exceed.
    pub difficulty: u32,
    pub special: Option<SpecialEffect>,
    pub loot_table: Option<&'static [&'static str]>,
}

impl MonsterTemplate {
    pub fn is_boss(&self) -> bool {
        self.tier == MonsterTier::Boss
    }

    pub fn points_for_kill(&self) -> u32 {
        self.kill_points.unwrap_or(self.base_points)
    }

    /// The monster's own loot table, or the global one.
    pub fn loot(&self) -> &'static [&'static str] {
        self.loot_table.unwrap_or(&LOOT_DROPS)
    }
}

const fn monster(
    name: &'static str,
    tier: MonsterTier,
    base_points: u32,
    damage: DiceExpr,
    max_hp: u32,
    difficulty: u32,
) -> MonsterTemplate {
    MonsterTemplate {
        name,
        tier,
        base_points,
        kill_points: None,
        damage,
        max_hp,
        difficulty,
        special: None,
        loot_table: None,
    }
}

pub static WEAK_MONSTERS: [MonsterTemplate; 4] = [
    monster("Blood-drenched Skeleton", MonsterTier::Weak, 3, DiceExpr::d(4), 6, 2),
    MonsterTemplate {
        loot_table: Some(&["Rope", "Potion"]),
        ..monster("Catacomb Cultist", MonsterTier::Weak, 3, DiceExpr::d(4), 6, 2)
    },
    monster("Goblin", MonsterTier::Weak, 3, DiceExpr::d(4), 5, 2),
    monster("Undead Hound", MonsterTier::Weak, 4, DiceExpr::d(4), 6, 3),
];

pub static TOUGH_MONSTERS: [MonsterTemplate; 4] = [
    monster("Necro-Sorcerer", MonsterTier::Tough, 4, DiceExpr::d(6), 8, 3),
    MonsterTemplate {
        loot_table: Some(&["Leather Armor", "Chainmail Armor"]),
        ..monster("Small Stone Troll", MonsterTier::Tough, 5, DiceExpr::d(6), 9, 4)
    },
    MonsterTemplate {
        special: Some(SpecialEffect::PetrifyingGaze),
        ..monster("Medusa", MonsterTier::Tough, 4, DiceExpr::d(6), 10, 3)
    },
    MonsterTemplate {
        special: Some(SpecialEffect::BasiliskBlood),
        ..monster("Ruin Basilisk", MonsterTier::Tough, 4, DiceExpr::d(6), 11, 3)
    },
];

pub static FORTRESS_LORD: MonsterTemplate =
    monster("Fortress Lord", MonsterTier::Boss, 20, DiceExpr::d(6), 25, 4);

pub fn find_monster(name: &str) -> Option<&'static MonsterTemplate> {
    WEAK_MONSTERS
        .iter()
        .chain(TOUGH_MONSTERS.iter())
        .chain(std::iter::once(&FORTRESS_LORD))
        .find(|m| m.name == name)
}
