use crate::dice::DiceExpr;
use serde::Serialize;

/// What an item does when owned or equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    Weapon { damage: DiceExpr },
    Armor { defense: u32 },
    Potion,
    Utility,
    Misc,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon { .. } => "Weapon",
            ItemKind::Armor { .. } => "Armor",
            ItemKind::Potion => "Potion",
            ItemKind::Utility => "Utility",
            ItemKind::Misc => "Misc",
        }
    }

    pub fn equip_slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon { .. } => Some(EquipmentSlot::Weapon),
            ItemKind::Armor { .. } => Some(EquipmentSlot::Armor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemDefinition {
    pub name: &'static str,
    pub kind: ItemKind,
    pub price: u32,
    pub description: &'static str,
}

impl ItemDefinition {
    /// Silver credited when selling one unit.
    pub fn sell_price(&self) -> u32 {
        self.price / 2
    }
}

pub static SHOP_ITEMS: [ItemDefinition; 6] = [
    ItemDefinition {
        name: "Potion",
        kind: ItemKind::Potion,
        price: 5,
        description: "Heals 2d6 HP.",
    },
    ItemDefinition {
        name: "Sword",
        kind: ItemKind::Weapon {
            damage: DiceExpr::d(6),
        },
        price: 10,
        description: "A basic weapon (d6 damage).",
    },
    ItemDefinition {
        name: "Great Sword",
        kind: ItemKind::Weapon {
            damage: DiceExpr::d(8),
        },
        price: 25,
        description: "A better weapon (d8 damage).",
    },
    ItemDefinition {
        name: "Leather Armor",
        kind: ItemKind::Armor { defense: 1 },
        price: 15,
        description: "Basic armor (1 defense).",
    },
    ItemDefinition {
        name: "Chainmail Armor",
        kind: ItemKind::Armor { defense: 2 },
        price: 30,
        description: "Better armor (2 defense).",
    },
    ItemDefinition {
        name: "Rope",
        kind: ItemKind::Utility,
        price: 5,
        description: "Helps avoid pit traps.",
    },
];

/// Drops used by monsters without their own loot table.
pub static LOOT_DROPS: [&str; 3] = ["Sword", "Leather Armor", "Potion"];

/// Look up an item by name.
pub fn find_item(name: &str) -> Option<&'static ItemDefinition> {
    SHOP_ITEMS.iter().find(|item| item.name == name)
}
