//! Room exploration.
//!
//! Each step deeper rolls a d6 on the room table, unless the Fortress Lord
//! is waiting:
//!
//! | d6  | room                                   |
//! |-----|----------------------------------------|
//! | 1-2 | empty                                  |
//! | 3   | pit trap, d4 damage unless you carry Rope |
//! | 4   | weak monster                           |
//! | 5   | tough monster                          |
//! | 6   | the peddler's shop                     |

use crate::catalog::{MonsterTemplate, FORTRESS_LORD, TOUGH_MONSTERS, WEAK_MONSTERS};
use crate::challenges::ChallengeKind;
use crate::core::constants::*;
use crate::core::{Ending, GameError, GameEvent, GameSession, Phase};
use crate::dice::Dice;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomEvent {
    /// The Fortress Lord blocks the way. Does not count as a room.
    BossLair(MonsterTemplate),
    Empty,
    TrapAvoided,
    Trap { damage: u32 },
    WeakMonster(MonsterTemplate),
    ToughMonster(MonsterTemplate),
    Shop,
}

impl RoomEvent {
    /// The monster now awaiting the attack/flee choice, if any.
    pub fn monster(&self) -> Option<&MonsterTemplate> {
        match self {
            RoomEvent::BossLair(m) | RoomEvent::WeakMonster(m) | RoomEvent::ToughMonster(m) => {
                Some(m)
            }
            _ => None,
        }
    }
}

fn pick_monster(table: &[MonsterTemplate], dice: &mut impl Dice) -> MonsterTemplate {
    let index = (dice.roll_die(table.len() as u32) as usize).saturating_sub(1);
    table[index.min(table.len() - 1)]
}

fn boss_blocks_the_way(session: &GameSession, dice: &mut impl Dice) -> bool {
    if session.boss_defeated || session.character.level < session.rules.boss_level {
        return false;
    }
    if !session.boss_encountered {
        return true;
    }
    let chance = session.rules.boss_retrigger_chance;
    chance > 0.0 && dice.chance(chance)
}

fn face(session: &mut GameSession, monster: MonsterTemplate) {
    session.encounter = Some(monster);
    session.phase = Phase::PreCombatChoice;
}

/// Step into the next room.
pub fn explore_room(session: &mut GameSession, dice: &mut impl Dice) -> Result<RoomEvent, GameError> {
    session.require_phase("explore", &[Phase::Exploring])?;
    if !session.character.is_alive() {
        return Err(GameError::wrong_phase("explore", session.phase));
    }
    session.push_event(GameEvent::Explore);

    if boss_blocks_the_way(session, dice) {
        session.boss_encountered = true;
        face(session, FORTRESS_LORD);
        tracing::info!("The {} blocks the way", FORTRESS_LORD.name);
        return Ok(RoomEvent::BossLair(FORTRESS_LORD));
    }

    session.rooms_explored += 1;
    session.character.points += 1;
    session.record_progress(ChallengeKind::ExploreRooms, None, 1);

    let roll = dice.roll_die(ROOM_DIE);
    let event = match roll {
        1 | 2 => RoomEvent::Empty,
        3 if session.character.inventory.contains(ROPE) => RoomEvent::TrapAvoided,
        3 => {
            let damage = dice.roll_die(TRAP_DAMAGE_DIE);
            session.character.take_damage(damage);
            session.stats.traps_triggered += 1;
            session.push_event(GameEvent::PlayerHit);
            RoomEvent::Trap { damage }
        }
        4 => {
            let monster = pick_monster(&WEAK_MONSTERS, dice);
            face(session, monster);
            RoomEvent::WeakMonster(monster)
        }
        5 => {
            let monster = pick_monster(&TOUGH_MONSTERS, dice);
            face(session, monster);
            RoomEvent::ToughMonster(monster)
        }
        _ => {
            session.phase = Phase::InShop;
            session.push_event(GameEvent::Shop);
            RoomEvent::Shop
        }
    };
    tracing::debug!("Room {} rolled {}: {:?}", session.rooms_explored, roll, event);

    if !session.character.is_alive() {
        session.finish(Ending::Trap);
    }
    Ok(event)
}
