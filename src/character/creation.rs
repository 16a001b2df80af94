use super::types::{Character, Inventory};
use crate::catalog::{PLAYER_NAMES, PLAYER_PROFESSIONS};
use crate::core::constants::*;
use crate::core::Rules;
use crate::dice::Dice;

/// Pick a uniform entry from a non-empty table.
fn pick<'a>(table: &[&'a str], dice: &mut impl Dice) -> &'a str {
    let index = (dice.roll_die(table.len() as u32) as usize).saturating_sub(1);
    table[index.min(table.len() - 1)]
}

/// Roll a fresh starting character.
///
/// Roll order: name, profession, silver d6, extra potion chance, rope
/// chance. Tests that script the dice rely on it.
pub fn roll_starting_character(rules: &Rules, dice: &mut impl Dice) -> Character {
    let name = pick(&PLAYER_NAMES, dice);
    let profession = pick(&PLAYER_PROFESSIONS, dice);

    let mut character = Character::new(name, profession);
    character.hp = rules.starting_hp;
    character.max_hp = rules.starting_hp;
    character.silver = STARTING_SILVER_BASE + dice.roll_die(STARTING_SILVER_DIE);

    let mut inventory = Inventory::from_items([STARTING_WEAPON, POTION]);
    if dice.chance(EXTRA_POTION_CHANCE) {
        inventory.add(POTION);
    }
    if dice.chance(STARTING_ROPE_CHANCE) {
        inventory.add(ROPE);
    }
    character.inventory = inventory;
    character.equipped_weapon = Some(STARTING_WEAPON.to_string());

    tracing::debug!(
        "Rolled {} the {}: {} silver, {:?}",
        character.name,
        character.profession,
        character.silver,
        character.inventory
    );
    character
}
