//! Post-victory effects attached to specific monsters.

use crate::core::constants::*;
use crate::dice::Dice;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialEffect {
    /// Medusa: the corpse's gaze may still turn the victor to stone.
    PetrifyingGaze,
    /// Ruin Basilisk: drinking its blood may grant a level.
    BasiliskBlood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialOutcome {
    InstantDeath,
    /// A level gained without spending points.
    FreeLevelUp,
}

impl SpecialEffect {
    /// Roll the effect's d6. Returns `None` when it does not trigger.
    pub fn resolve(self, dice: &mut impl Dice) -> Option<SpecialOutcome> {
        let roll = dice.roll_die(SPECIAL_EFFECT_DIE);
        let outcome = match self {
            SpecialEffect::PetrifyingGaze if roll <= PETRIFYING_GAZE_MAX_ROLL => {
                Some(SpecialOutcome::InstantDeath)
            }
            SpecialEffect::BasiliskBlood if roll <= BASILISK_BLOOD_MAX_ROLL => {
                Some(SpecialOutcome::FreeLevelUp)
            }
            _ => None,
        };
        tracing::debug!("{:?} rolled {} -> {:?}", self, roll, outcome);
        outcome
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpecialEffect::PetrifyingGaze => "Its dying gaze may petrify you.",
            SpecialEffect::BasiliskBlood => "Its blood may make you stronger.",
        }
    }
}
