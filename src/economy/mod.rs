//! The peddler's shop and equipment management.
//!
//! Equipping is always a manual choice: buying or looting an item only
//! puts it in the inventory.

use crate::catalog::{find_item, EquipmentSlot, ItemDefinition};
use crate::challenges::ChallengeKind;
use crate::core::constants::SELL_FALLBACK_CREDIT;
use crate::core::{GameError, GameEvent, GameSession, Phase};
use serde::Serialize;

const EQUIP_PHASES: [Phase; 3] = [Phase::Exploring, Phase::PreCombatChoice, Phase::InShop];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Purchase {
    pub item: &'static ItemDefinition,
    pub silver_left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    pub item: String,
    pub credited: u32,
    /// The last copy was equipped and has been taken off.
    pub unequipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipChange {
    pub slot: EquipmentSlot,
    pub equipped: Option<String>,
    pub previous: Option<String>,
}

/// Silver credited for selling one unit of `name`.
pub fn sell_price(name: &str) -> u32 {
    find_item(name).map_or(SELL_FALLBACK_CREDIT, ItemDefinition::sell_price)
}

pub fn buy(session: &mut GameSession, name: &str) -> Result<Purchase, GameError> {
    session.require_phase("buy", &[Phase::InShop])?;
    let item = find_item(name).ok_or_else(|| GameError::UnknownItem(name.to_string()))?;
    let silver = session.character.silver;
    if silver < item.price {
        return Err(GameError::InsufficientFunds {
            item: item.name.to_string(),
            price: item.price,
            silver,
        });
    }

    session.character.silver -= item.price;
    session.character.inventory.add(item.name);
    session.stats.items_bought += 1;
    session.push_event(GameEvent::Buy);
    session.record_progress(ChallengeKind::SpendSilver, None, item.price);
    tracing::debug!("Bought {} for {} silver", item.name, item.price);

    Ok(Purchase {
        item,
        silver_left: session.character.silver,
    })
}

pub fn sell(session: &mut GameSession, name: &str) -> Result<Sale, GameError> {
    session.require_phase("sell", &[Phase::InShop])?;
    if !session.character.inventory.remove(name) {
        return Err(GameError::ItemNotOwned(name.to_string()));
    }
    let credited = sell_price(name);
    session.character.silver += credited;

    let mut unequipped = false;
    if !session.character.inventory.contains(name) {
        for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
            if session.character.equipped(slot) == Some(name) {
                session.character.set_equipped(slot, None);
                unequipped = true;
            }
        }
    }

    session.stats.items_sold += 1;
    session.push_event(GameEvent::Sell);
    tracing::debug!("Sold {} for {} silver", name, credited);

    Ok(Sale {
        item: name.to_string(),
        credited,
        unequipped,
    })
}

/// Put an owned weapon or armor in its slot, replacing what was there.
pub fn equip(session: &mut GameSession, name: &str) -> Result<EquipChange, GameError> {
    session.require_phase("equip", &EQUIP_PHASES)?;
    if !session.character.inventory.contains(name) {
        return Err(GameError::ItemNotOwned(name.to_string()));
    }
    let slot = find_item(name)
        .and_then(|item| item.kind.equip_slot())
        .ok_or_else(|| GameError::NotEquippable(name.to_string()))?;

    let previous = session.character.set_equipped(slot, Some(name.to_string()));
    tracing::debug!("Equipped {} (was {:?})", name, previous);
    Ok(EquipChange {
        slot,
        equipped: Some(name.to_string()),
        previous,
    })
}

pub fn unequip(session: &mut GameSession, slot: EquipmentSlot) -> Result<EquipChange, GameError> {
    session.require_phase("unequip", &EQUIP_PHASES)?;
    let previous = session.character.set_equipped(slot, None);
    Ok(EquipChange {
        slot,
        equipped: None,
        previous,
    })
}

/// Toggle an item: unequip it if worn, otherwise equip it.
pub fn toggle_equip(session: &mut GameSession, name: &str) -> Result<EquipChange, GameError> {
    let worn = [EquipmentSlot::Weapon, EquipmentSlot::Armor]
        .into_iter()
        .find(|slot| session.character.equipped(*slot) == Some(name));
    match worn {
        Some(slot) => unequip(session, slot),
        None => equip(session, name),
    }
}

pub fn leave_shop(session: &mut GameSession) -> Result<(), GameError> {
    session.require_phase("leave the shop", &[Phase::InShop])?;
    session.phase = Phase::Exploring;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, Inventory};
    use crate::core::Rules;
    use crate::dice::DiceExpr;

    fn shop(silver: u32) -> GameSession {
        let mut c = Character::new("Tester", "Merchant");
        c.silver = silver;
        c.inventory = Inventory::from_items(["Sword", "Potion"]);
        c.equipped_weapon = Some("Sword".to_string());
        let mut session = GameSession::with_character(c, Rules::default());
        session.phase = Phase::InShop;
        session
    }

    #[test]
    fn test_buy_deducts_and_does_not_equip() {
        let mut s = shop(30);
        let purchase = buy(&mut s, "Great Sword").unwrap();
        assert_eq!(purchase.silver_left, 5);
        assert!(s.character.inventory.contains("Great Sword"));
        assert_eq!(s.character.equipped_weapon.as_deref(), Some("Sword"));
        assert_eq!(s.take_events(), vec![GameEvent::Buy]);
        assert_eq!(s.challenges.progress_for("big-spender"), 25);
    }

    #[test]
    fn test_buy_with_exact_silver() {
        let mut s = shop(5);
        assert!(buy(&mut s, "Rope").is_ok());
        assert_eq!(s.character.silver, 0);
    }

    #[test]
    fn test_insufficient_funds_leaves_session_unchanged() {
        let mut s = shop(24);
        let before = s.character.clone();
        assert_eq!(
            buy(&mut s, "Great Sword"),
            Err(GameError::InsufficientFunds {
                item: "Great Sword".to_string(),
                price: 25,
                silver: 24
            })
        );
        assert_eq!(s.character, before);
        assert!(s.take_events().is_empty());
    }

    #[test]
    fn test_unknown_item() {
        let mut s = shop(100);
        assert_eq!(
            buy(&mut s, "Banana"),
            Err(GameError::UnknownItem("Banana".to_string()))
        );
    }

    #[test]
    fn test_buy_then_sell_loses_half() {
        let mut s = shop(20);
        buy(&mut s, "Potion").unwrap();
        let sale = sell(&mut s, "Potion").unwrap();
        assert_eq!(sale.credited, 2);
        assert_eq!(s.character.silver, 17);
    }

    #[test]
    fn test_sell_last_equipped_copy_unequips() {
        let mut s = shop(0);
        let sale = sell(&mut s, "Sword").unwrap();
        assert!(sale.unequipped);
        assert_eq!(s.character.silver, 5);
        assert!(s.character.equipped_weapon.is_none());
        assert_eq!(s.derived().attack_damage, DiceExpr::d(4));
    }

    #[test]
    fn test_sell_spare_copy_keeps_equipment() {
        let mut s = shop(0);
        s.character.inventory.add("Sword");
        let sale = sell(&mut s, "Sword").unwrap();
        assert!(!sale.unequipped);
        assert_eq!(s.character.equipped_weapon.as_deref(), Some("Sword"));
    }

    #[test]
    fn test_sell_unowned_and_non_catalog() {
        let mut s = shop(0);
        assert_eq!(
            sell(&mut s, "Rope"),
            Err(GameError::ItemNotOwned("Rope".to_string()))
        );
        s.character.inventory.add("Rusty Key");
        assert_eq!(sell(&mut s, "Rusty Key").unwrap().credited, SELL_FALLBACK_CREDIT);
    }

    #[test]
    fn test_equip_swaps_and_updates_derived_stats() {
        let mut s = shop(0);
        s.character.inventory.add("Great Sword");
        let change = equip(&mut s, "Great Sword").unwrap();
        assert_eq!(change.previous.as_deref(), Some("Sword"));
        assert_eq!(s.derived().attack_damage, DiceExpr::d(8));

        s.character.inventory.add("Leather Armor");
        equip(&mut s, "Leather Armor").unwrap();
        assert_eq!(s.derived().defense, 1);
        unequip(&mut s, EquipmentSlot::Armor).unwrap();
        assert_eq!(s.derived().defense, 0);
    }

    #[test]
    fn test_equip_errors() {
        let mut s = shop(0);
        assert_eq!(
            equip(&mut s, "Chainmail Armor"),
            Err(GameError::ItemNotOwned("Chainmail Armor".to_string()))
        );
        assert_eq!(
            equip(&mut s, "Potion"),
            Err(GameError::NotEquippable("Potion".to_string()))
        );
        s.phase = Phase::InCombat;
        assert!(matches!(
            unequip(&mut s, EquipmentSlot::Weapon),
            Err(GameError::InvalidOperationForPhase { .. })
        ));
        assert_eq!(s.character.equipped_weapon.as_deref(), Some("Sword"));
    }

    #[test]
    fn test_toggle_equip() {
        let mut s = shop(0);
        toggle_equip(&mut s, "Sword").unwrap();
        assert!(s.character.equipped_weapon.is_none());
        toggle_equip(&mut s, "Sword").unwrap();
        assert_eq!(s.character.equipped_weapon.as_deref(), Some("Sword"));
    }

    #[test]
    fn test_shop_operations_need_the_shop() {
        let mut s = shop(50);
        leave_shop(&mut s).unwrap();
        assert_eq!(s.phase, Phase::Exploring);
        assert!(buy(&mut s, "Potion").is_err());
        assert!(sell(&mut s, "Potion").is_err());
        assert!(leave_shop(&mut s).is_err());
        assert_eq!(s.character.silver, 50);
    }
}
