//! Integration test: a whole run
//!
//! Plays one scripted adventure from character creation to the Fortress
//! Lord's death, checking phases, events and challenge progress on the way.

use darkfort::combat::CombatOutcome;
use darkfort::dice::ScriptedDice;
use darkfort::{
    attack, buy, engage, equip, explore_room, flee, leave_shop, level_up, use_potion,
    ChallengeBook, ChallengeKind, Ending, GameEvent, GameSession, Phase, RoomEvent, Rules,
};

#[test]
fn test_scripted_run_from_start_to_victory() {
    // name 1, profession 5, silver d6 = 6; extra potion, no rope
    let mut dice = ScriptedDice::new([1, 5, 6]).with_chances([true, false]);
    let mut session = GameSession::new(Rules::default(), ChallengeBook::default(), &mut dice);
    assert_eq!(session.character.name, "Vytautas");
    assert_eq!(session.character.profession, "Warrior");
    assert_eq!(session.character.silver, 31);
    assert_eq!(session.character.inventory.count("Potion"), 2);
    assert_eq!(session.take_events(), vec![GameEvent::Start]);

    // Room 1: a Goblin. Kill it in one blow.
    let mut dice = ScriptedDice::new([4, 3, 6, 6, 3]);
    let event = explore_room(&mut session, &mut dice).unwrap();
    assert!(matches!(event, RoomEvent::WeakMonster(m) if m.name == "Goblin"));
    engage(&mut session).unwrap();
    let result = attack(&mut session, &mut dice).unwrap();
    assert!(matches!(result.outcome, CombatOutcome::Victory(_)));
    assert_eq!(session.character.points, 1 + 3);
    assert_eq!(session.character.silver, 31 + 3 + 2);

    // Room 2: the peddler. Buy a Great Sword and wield it.
    explore_room(&mut session, &mut ScriptedDice::new([6])).unwrap();
    assert_eq!(session.phase, Phase::InShop);
    buy(&mut session, "Great Sword").unwrap();
    equip(&mut session, "Great Sword").unwrap();
    assert_eq!(session.derived().attack_damage.sides, 8);
    leave_shop(&mut session).unwrap();
    assert_eq!(session.challenges.progress_for("big-spender"), 25);

    // Rooms 3-8: empty
    for _ in 0..6 {
        explore_room(&mut session, &mut ScriptedDice::new([1])).unwrap();
    }
    assert_eq!(session.rooms_explored, 8);
    assert_eq!(session.character.points, 11);
    level_up(&mut session).unwrap();
    assert_eq!(session.character.level, 2);
    assert_eq!(session.character.points, 1);

    // The boss blocks the way. Flee once, taking 2.
    let event = explore_room(&mut session, &mut ScriptedDice::new([])).unwrap();
    assert!(matches!(event, RoomEvent::BossLair(_)));
    flee(&mut session, &mut ScriptedDice::new([2])).unwrap();
    assert_eq!(session.character.hp, 18);
    assert_eq!(session.rooms_explored, 8);

    // The boss does not come back this time.
    let mut dice = ScriptedDice::new([2]).with_chances([false]);
    assert_eq!(explore_room(&mut session, &mut dice).unwrap(), RoomEvent::Empty);

    // Now it does.
    let mut dice = ScriptedDice::new([]).with_chances([true]);
    assert!(matches!(
        explore_room(&mut session, &mut dice).unwrap(),
        RoomEvent::BossLair(_)
    ));
    engage(&mut session).unwrap();

    // Trade blows: the Fortress Lord has 25 hp. Each round: hit 6,
    // d8 damage 8, flat +1, boss hits back 3 - 1 defense.
    for _ in 0..2 {
        let result = attack(&mut session, &mut ScriptedDice::new([6, 8, 3])).unwrap();
        assert_eq!(result.outcome, CombatOutcome::Ongoing);
        assert_eq!(result.retaliation.map(|r| r.damage), Some(2));
    }
    assert_eq!(session.current_monster.map(|m| m.current_hp), Some(7));
    assert_eq!(session.character.hp, 14);

    use_potion(&mut session, &mut ScriptedDice::new([3, 3, 1])).unwrap();
    assert_eq!(session.character.hp, 20);

    let result = attack(&mut session, &mut ScriptedDice::new([6, 8, 1])).unwrap();
    assert!(matches!(result.outcome, CombatOutcome::Victory(ref r) if r.boss_slain));
    assert_eq!(session.phase, Phase::Victory);
    assert_eq!(session.ending, Some(Ending::BossSlain));
    assert_eq!(session.stats.monsters_defeated, 2);
    assert!(session.challenges.is_completed("fortress-breaker"));
}

#[test]
fn test_restart_keeps_challenge_progress() {
    let mut dice = ScriptedDice::new([]);
    let mut session = GameSession::new(Rules::default(), ChallengeBook::default(), &mut dice);
    session.record_progress(ChallengeKind::Slay, Some("Goblin"), 4);
    session.character.hp = 1;
    explore_room(&mut session, &mut ScriptedDice::new([3, 4])).unwrap();
    assert_eq!(session.phase, Phase::Defeat);
    assert_eq!(session.ending, Some(Ending::Trap));

    session.restart(&mut ScriptedDice::new([]));
    assert_eq!(session.phase, Phase::Exploring);
    assert_eq!(session.character.hp, 20);
    assert_eq!(session.challenges.progress_for("goblin-bane"), 4);
    assert!(session.ending.is_none());
}

#[test]
fn test_terminal_phases_reject_everything() {
    let mut session =
        GameSession::new(Rules::default(), ChallengeBook::default(), &mut ScriptedDice::new([]));
    session.character.hp = 1;
    explore_room(&mut session, &mut ScriptedDice::new([3, 1])).unwrap();
    assert!(session.is_over());

    let silver = session.character.silver;
    let mut dice = ScriptedDice::new([1, 1, 1]);
    assert!(explore_room(&mut session, &mut dice).is_err());
    assert!(attack(&mut session, &mut dice).is_err());
    assert!(flee(&mut session, &mut dice).is_err());
    assert!(use_potion(&mut session, &mut dice).is_err());
    assert!(level_up(&mut session).is_err());
    assert!(buy(&mut session, "Potion").is_err());
    assert!(equip(&mut session, "Sword").is_err());
    assert_eq!(session.character.silver, silver);
    assert_eq!(dice.remaining_rolls(), 3);
}

#[test]
fn test_challenge_book_round_trips_as_json() {
    let mut book = ChallengeBook::default();
    book.record_progress(ChallengeKind::CollectSilver, None, 100);
    let json = serde_json::to_string(&book).unwrap();
    let loaded: ChallengeBook = serde_json::from_str(&json).unwrap();
    assert!(loaded.is_completed("hoarder"));
}
