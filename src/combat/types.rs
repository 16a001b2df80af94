use super::specials::SpecialOutcome;
use crate::catalog::MonsterTemplate;
use serde::Serialize;

/// A monster being fought. `current_hp` never exceeds the template's max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonsterInstance {
    pub template: MonsterTemplate,
    pub current_hp: u32,
}

impl MonsterInstance {
    pub fn new(template: MonsterTemplate) -> Self {
        Self {
            template,
            current_hp: template.max_hp,
        }
    }

    pub fn name(&self) -> &'static str {
        self.template.name
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Returns the hp actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_sub(amount);
        before - self.current_hp
    }
}

/// The monster's counter-attack after a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Retaliation {
    /// Raw damage roll before defense.
    pub rolled: u32,
    /// Damage after defense, floored at 0.
    pub damage: u32,
    pub player_died: bool,
}

/// What happened to the fight after a player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CombatOutcome {
    Ongoing,
    /// The monster died. The report's special outcome may still have
    /// killed the player.
    Victory(VictoryReport),
    PlayerDied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackResult {
    pub roll: u32,
    pub hit: bool,
    pub damage: u32,
    pub monster_hp: u32,
    /// `None` when the attack killed the monster.
    pub retaliation: Option<Retaliation>,
    pub outcome: CombatOutcome,
}

/// Rewards and side effects of killing a monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VictoryReport {
    pub monster: &'static str,
    pub points_gained: u32,
    pub silver_found: u32,
    pub loot: Option<&'static str>,
    pub bonus_potion: bool,
    pub special: Option<SpecialOutcome>,
    pub boss_slain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleeResult {
    pub damage: u32,
    pub died: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PotionResult {
    pub healed: u32,
    pub hp: u32,
    /// Set when the potion was drunk mid-fight.
    pub retaliation: Option<Retaliation>,
}
