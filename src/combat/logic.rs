use super::specials::SpecialOutcome;
use super::types::*;
use crate::catalog::MonsterTemplate;
use crate::challenges::ChallengeKind;
use crate::core::constants::*;
use crate::core::{Ending, GameError, GameEvent, GameSession, Phase};
use crate::dice::Dice;
use crate::progression::advance_level;

fn current_monster(session: &GameSession, operation: &'static str) -> Result<MonsterInstance, GameError> {
    session
        .current_monster
        .ok_or_else(|| GameError::wrong_phase(operation, session.phase))
}

/// Start a pending encounter: `PreCombatChoice -> InCombat`.
pub fn engage(session: &mut GameSession) -> Result<MonsterInstance, GameError> {
    session.require_phase("engage", &[Phase::PreCombatChoice])?;
    let template = session
        .encounter
        .take()
        .ok_or_else(|| GameError::wrong_phase("engage", session.phase))?;
    let monster = MonsterInstance::new(template);
    session.current_monster = Some(monster);
    session.phase = Phase::InCombat;
    tracing::debug!("Engaged {} ({} hp)", monster.name(), monster.current_hp);
    Ok(monster)
}

/// One combat round: the player's attack, then the monster's
/// counter-attack unless the monster died.
pub fn attack(session: &mut GameSession, dice: &mut impl Dice) -> Result<AttackResult, GameError> {
    session.require_phase("attack", &[Phase::InCombat])?;
    let mut monster = current_monster(session, "attack")?;
    let derived = session.derived();

    let roll = dice.roll_die(ATTACK_DIE);
    let hit = roll >= monster.template.difficulty;
    let mut damage = 0;
    if hit {
        damage = derived
            .attack_damage
            .roll(dice)
            .saturating_add(derived.flat_damage_bonus)
            .max(1);
        monster.take_damage(damage);
        session.push_event(GameEvent::Hit);
        session.push_event(GameEvent::MonsterHit);
        tracing::debug!(
            "Rolled {} vs {}: hit {} for {} ({} hp left)",
            roll,
            monster.template.difficulty,
            monster.name(),
            damage,
            monster.current_hp
        );
    } else {
        session.push_event(GameEvent::Miss);
        tracing::debug!("Rolled {} vs {}: missed {}", roll, monster.template.difficulty, monster.name());
    }
    session.current_monster = Some(monster);

    if !monster.is_alive() {
        let report = resolve_victory(session, monster.template, dice);
        return Ok(AttackResult {
            roll,
            hit,
            damage,
            monster_hp: 0,
            retaliation: None,
            outcome: CombatOutcome::Victory(report),
        });
    }

    let retaliation = monster_retaliates(session, &monster, dice);
    Ok(AttackResult {
        roll,
        hit,
        damage,
        monster_hp: monster.current_hp,
        retaliation: Some(retaliation),
        outcome: if retaliation.player_died {
            CombatOutcome::PlayerDied
        } else {
            CombatOutcome::Ongoing
        },
    })
}

/// The monster strikes back for `max(0, damage roll - defense)`.
fn monster_retaliates(session: &mut GameSession, monster: &MonsterInstance, dice: &mut impl Dice) -> Retaliation {
    let rolled = monster.template.damage.roll(dice);
    let damage = rolled.saturating_sub(session.derived().defense);
    session.character.take_damage(damage);
    if damage > 0 {
        session.push_event(GameEvent::PlayerHit);
    }
    tracing::debug!("{} hits back for {} ({} rolled)", monster.name(), damage, rolled);

    let player_died = !session.character.is_alive();
    if player_died {
        session.finish(Ending::SlainBy(monster.name().to_string()));
    }
    Retaliation {
        rolled,
        damage,
        player_died,
    }
}

/// Run away from a pending or ongoing fight. Always succeeds, at the cost
/// of d4 hp. The room count is not advanced.
pub fn flee(session: &mut GameSession, dice: &mut impl Dice) -> Result<FleeResult, GameError> {
    session.require_phase("flee", &[Phase::PreCombatChoice, Phase::InCombat])?;
    let damage = dice.roll_die(FLEE_DAMAGE_DIE);
    session.character.take_damage(damage);
    session.encounter = None;
    session.current_monster = None;
    session.phase = Phase::Exploring;
    session.push_event(GameEvent::Flee);
    session.push_event(GameEvent::PlayerHit);
    tracing::debug!("Fled, taking {} damage", damage);

    let died = !session.character.is_alive();
    if died {
        session.finish(Ending::FledToDeath);
    }
    Ok(FleeResult { damage, died })
}

/// Drink a potion for 2d6 hp. Mid-fight the monster gets a free strike.
pub fn use_potion(session: &mut GameSession, dice: &mut impl Dice) -> Result<PotionResult, GameError> {
    session.require_phase("drink a potion", &[Phase::Exploring, Phase::InCombat])?;
    if !session.character.inventory.remove(POTION) {
        return Err(GameError::ItemNotOwned(POTION.to_string()));
    }
    let healing: u32 = (0..POTION_HEAL_DICE_COUNT)
        .map(|_| dice.roll_die(POTION_HEAL_DIE))
        .sum();
    let healed = session.character.heal(healing);
    session.stats.potions_used += 1;
    session.push_event(GameEvent::Potion);
    tracing::debug!("Potion rolled {}, healed {}", healing, healed);

    let retaliation = match (session.phase, session.current_monster) {
        (Phase::InCombat, Some(monster)) => Some(monster_retaliates(session, &monster, dice)),
        _ => None,
    };
    Ok(PotionResult {
        healed,
        hp: session.character.hp,
        retaliation,
    })
}

fn pick_loot(template: &MonsterTemplate, dice: &mut impl Dice) -> Option<&'static str> {
    let table = template.loot();
    if table.is_empty() {
        return None;
    }
    let index = (dice.roll_die(table.len() as u32) as usize).saturating_sub(1);
    table.get(index).copied()
}

/// Pay out a kill and move the session on.
///
/// Order: points, silver, loot, bonus potion, special effect, then the
/// phase change (`Victory` for the boss, otherwise `Exploring`).
pub(crate) fn resolve_victory(
    session: &mut GameSession,
    template: MonsterTemplate,
    dice: &mut impl Dice,
) -> VictoryReport {
    session.current_monster = None;
    let name = template.name;

    let points_gained = template.points_for_kill();
    session.character.points += points_gained;

    let silver_found = dice.roll_die(SILVER_FOUND_DIE) + template.difficulty;
    session.character.silver += silver_found;
    session.stats.total_silver_collected += silver_found;

    let loot_chance = LOOT_BASE_CHANCE + LOOT_CHANCE_PER_DIFFICULTY * template.difficulty as f64;
    let loot = if dice.chance(loot_chance) {
        pick_loot(&template, dice)
    } else {
        None
    };
    if let Some(item) = loot {
        session.character.inventory.add(item);
    }

    let bonus_potion = dice.chance(BONUS_POTION_CHANCE);
    if bonus_potion {
        session.character.inventory.add(POTION);
    }

    session.stats.monsters_defeated += 1;
    session.push_event(GameEvent::WinCombat);
    session.record_progress(ChallengeKind::Slay, Some(name), 1);
    session.record_progress(ChallengeKind::CollectSilver, None, silver_found);
    tracing::info!(
        "Defeated {}: +{} points, +{} silver, loot {:?}",
        name,
        points_gained,
        silver_found,
        loot
    );

    let special = template.special.and_then(|effect| effect.resolve(dice));
    match special {
        Some(SpecialOutcome::InstantDeath) => session.finish(Ending::Petrified(name.to_string())),
        Some(SpecialOutcome::FreeLevelUp) => {
            advance_level(session, 0);
        }
        None => {}
    }

    let boss_slain = template.is_boss();
    if boss_slain {
        session.boss_defeated = true;
        session.finish(Ending::BossSlain);
    } else if !session.is_over() {
        session.phase = Phase::Exploring;
    }

    VictoryReport {
        monster: name,
        points_gained,
        silver_found,
        loot,
        bonus_potion,
        special,
        boss_slain,
    }
}
