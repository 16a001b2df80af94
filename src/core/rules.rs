//! Tunable rule settings.
//!
//! Defaults mirror `core::constants`. The host may load overrides from a
//! JSON file; missing fields keep their defaults.

use super::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Points spent per level-up.
    pub level_up_threshold: u32,
    /// Level at which the Fortress Lord blocks the next room.
    pub boss_level: u32,
    /// Chance per exploration that a fled boss blocks the way again.
    pub boss_retrigger_chance: f64,
    /// Starting (and maximum) hit points.
    pub starting_hp: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            level_up_threshold: LEVEL_UP_THRESHOLD,
            boss_level: BOSS_LEVEL,
            boss_retrigger_chance: BOSS_RETRIGGER_CHANCE,
            starting_hp: STARTING_HP,
        }
    }
}

impl Rules {
    /// Clamp values that would break the rules engine.
    pub fn sanitized(mut self) -> Self {
        self.level_up_threshold = self.level_up_threshold.max(1);
        self.boss_level = self.boss_level.max(STARTING_LEVEL + 1);
        self.boss_retrigger_chance = self.boss_retrigger_chance.clamp(0.0, 1.0);
        self.starting_hp = self.starting_hp.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"level_up_threshold": 15}"#).unwrap();
        assert_eq!(rules.level_up_threshold, 15);
        assert_eq!(rules.boss_level, BOSS_LEVEL);
        assert_eq!(rules.starting_hp, STARTING_HP);
    }

    #[test]
    fn test_sanitized_clamps_nonsense() {
        let rules = Rules {
            level_up_threshold: 0,
            boss_level: 0,
            boss_retrigger_chance: 7.5,
            starting_hp: 0,
        }
        .sanitized();
        assert_eq!(rules.level_up_threshold, 1);
        assert_eq!(rules.boss_level, 2);
        assert!((rules.boss_retrigger_chance - 1.0).abs() < f64::EPSILON);
        assert_eq!(rules.starting_hp, 1);
    }
}
