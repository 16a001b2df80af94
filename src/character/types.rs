use super::derived_stats::DerivedStats;
use crate::catalog::{find_item, EquipmentSlot};
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiset of item names. Order is irrelevant, duplicates are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut inventory = Self::new();
        for name in names {
            inventory.add(name);
        }
        inventory
    }

    pub fn add(&mut self, name: &str) {
        *self.items.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Remove one unit. Returns false if none was owned.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.items.get_mut(name) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.items.remove(name);
                true
            }
            None => false,
        }
    }

    pub fn count(&self, name: &str) -> u32 {
        self.items.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units.
    pub fn len(&self) -> u32 {
        self.items.values().sum()
    }

    /// Distinct item names with their counts, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// The player character.
///
/// Invariants: `hp <= max_hp`, and an equipped item is always in the
/// inventory. Attack damage and defense are not stored; see
/// [`Character::derived_stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    pub profession: String,
    pub hp: u32,
    pub max_hp: u32,
    pub silver: u32,
    pub points: u32,
    pub level: u32,
    pub inventory: Inventory,
    pub equipped_weapon: Option<String>,
    pub equipped_armor: Option<String>,
}

impl Character {
    pub fn new(name: impl Into<String>, profession: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profession: profession.into(),
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            silver: 0,
            points: 0,
            level: STARTING_LEVEL,
            inventory: Inventory::new(),
            equipped_weapon: None,
            equipped_armor: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, flooring hp at 0. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        before - self.hp
    }

    /// Heal, capping at max_hp. Returns the hp actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&str> {
        match slot {
            EquipmentSlot::Weapon => self.equipped_weapon.as_deref(),
            EquipmentSlot::Armor => self.equipped_armor.as_deref(),
        }
    }

    pub fn is_equipped(&self, name: &str) -> bool {
        self.equipped_weapon.as_deref() == Some(name) || self.equipped_armor.as_deref() == Some(name)
    }

    pub(crate) fn set_equipped(&mut self, slot: EquipmentSlot, name: Option<String>) -> Option<String> {
        match slot {
            EquipmentSlot::Weapon => std::mem::replace(&mut self.equipped_weapon, name),
            EquipmentSlot::Armor => std::mem::replace(&mut self.equipped_armor, name),
        }
    }

    /// Attack damage, flat damage bonus and defense from level and gear.
    pub fn derived_stats(&self) -> DerivedStats {
        let weapon = self.equipped_weapon.as_deref().and_then(find_item);
        let armor = self.equipped_armor.as_deref().and_then(find_item);
        DerivedStats::calculate_derived_stats(self.level, weapon, armor)
    }
}
