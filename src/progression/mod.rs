//! Leveling.
//!
//! Levels are bought with points. The bonus per level is fixed (see
//! [`crate::character::DerivedStats`]): +1 defense and +1 flat damage per
//! level above 1, and the unarmed die grows d4 -> d6 -> d8.

use crate::challenges::ChallengeKind;
use crate::character::{base_damage_for_level, Character, DerivedStats};
use crate::core::{GameError, GameEvent, GameSession, Phase, Rules};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelUpReport {
    pub new_level: u32,
    /// 0 for a free level.
    pub points_spent: u32,
    pub before: DerivedStats,
    pub after: DerivedStats,
    /// The unarmed damage die grew with this level.
    pub die_upgraded: bool,
}

pub fn can_level_up(character: &Character, rules: &Rules) -> bool {
    character.points >= rules.level_up_threshold
}

/// Spend `rules.level_up_threshold` points for one level.
pub fn level_up(session: &mut GameSession) -> Result<LevelUpReport, GameError> {
    session.require_phase("level up", &[Phase::Exploring, Phase::InShop])?;
    let need = session.rules.level_up_threshold;
    if !can_level_up(&session.character, &session.rules) {
        return Err(GameError::NotEnoughPoints {
            have: session.character.points,
            need,
        });
    }
    session.character.points -= need;
    Ok(advance_level(session, need))
}

/// Raise the level by one. Points must already be settled by the caller.
pub(crate) fn advance_level(session: &mut GameSession, points_spent: u32) -> LevelUpReport {
    let before = session.derived();
    let old_level = session.character.level;
    session.character.level += 1;
    let after = session.derived();
    let new_level = session.character.level;

    session.push_event(GameEvent::LevelUp);
    session.record_progress(ChallengeKind::ReachLevel, None, new_level);
    tracing::info!(
        "{} reached level {} (spent {} points)",
        session.character.name,
        new_level,
        points_spent
    );

    LevelUpReport {
        new_level,
        points_spent,
        before,
        after,
        die_upgraded: base_damage_for_level(new_level) != base_damage_for_level(old_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceExpr;

    fn session_with_points(points: u32) -> GameSession {
        let mut character = Character::new("Tester", "Hunter");
        character.points = points;
        GameSession::with_character(character, Rules::default())
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rules = Rules::default();
        let mut c = Character::new("Tester", "Hunter");
        c.points = 9;
        assert!(!can_level_up(&c, &rules));
        c.points = 10;
        assert!(can_level_up(&c, &rules));
    }

    #[test]
    fn test_level_up_spends_threshold() {
        let mut session = session_with_points(13);
        let report = level_up(&mut session).unwrap();
        assert_eq!(report.new_level, 2);
        assert_eq!(report.points_spent, 10);
        assert_eq!(session.character.points, 3);
        assert_eq!(report.after.defense, report.before.defense + 1);
        assert_eq!(report.after.flat_damage_bonus, 1);
        assert!(report.die_upgraded);
        assert_eq!(session.take_events(), vec![GameEvent::LevelUp]);
    }

    #[test]
    fn test_unarmed_die_grows() {
        let mut session = session_with_points(30);
        assert_eq!(session.derived().attack_damage, DiceExpr::d(4));
        level_up(&mut session).unwrap();
        assert_eq!(session.derived().attack_damage, DiceExpr::d(6));
        level_up(&mut session).unwrap();
        assert_eq!(session.derived().attack_damage, DiceExpr::d(8));
        let report = level_up(&mut session).unwrap();
        assert!(!report.die_upgraded);
        assert_eq!(session.derived().attack_damage, DiceExpr::d(8));
        assert_eq!(session.derived().defense, 3);
    }

    #[test]
    fn test_not_enough_points_leaves_session_unchanged() {
        let mut session = session_with_points(9);
        assert_eq!(
            level_up(&mut session),
            Err(GameError::NotEnoughPoints { have: 9, need: 10 })
        );
        assert_eq!(session.character.level, 1);
        assert_eq!(session.character.points, 9);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_level_up_rejected_in_combat() {
        let mut session = session_with_points(10);
        session.phase = Phase::InCombat;
        assert!(matches!(
            level_up(&mut session),
            Err(GameError::InvalidOperationForPhase { .. })
        ));
        assert_eq!(session.character.points, 10);
    }

    #[test]
    fn test_custom_threshold() {
        let mut session = session_with_points(5);
        session.rules.level_up_threshold = 5;
        assert!(level_up(&mut session).is_ok());
        assert_eq!(session.character.points, 0);
    }

    #[test]
    fn test_free_level_spends_nothing() {
        let mut session = session_with_points(4);
        let report = advance_level(&mut session, 0);
        assert_eq!(report.points_spent, 0);
        assert_eq!(session.character.points, 4);
        assert_eq!(session.character.level, 2);
    }
}
