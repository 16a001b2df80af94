use super::error::GameError;
use super::events::GameEvent;
use super::rules::Rules;
use crate::catalog::MonsterTemplate;
use crate::challenges::{ChallengeBook, ChallengeDef, ChallengeKind};
use crate::character::creation::roll_starting_character;
use crate::character::{Character, DerivedStats};
use crate::combat::types::MonsterInstance;
use crate::dice::Dice;
use crate::progression::can_level_up;
use serde::Serialize;
use std::fmt;

/// What the session is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Exploring,
    /// A monster blocks the way; the player may attack or flee.
    PreCombatChoice,
    InCombat,
    InShop,
    /// Terminal: the Fortress Lord is dead.
    Victory,
    /// Terminal: the character is dead.
    Defeat,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Victory | Phase::Defeat)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Exploring => "exploring",
            Phase::PreCombatChoice => "facing a monster",
            Phase::InCombat => "in combat",
            Phase::InShop => "in the shop",
            Phase::Victory => "victorious",
            Phase::Defeat => "dead",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Ending {
    BossSlain,
    SlainBy(String),
    Trap,
    FledToDeath,
    Petrified(String),
}

/// Per-run tallies shown on the end screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub monsters_defeated: u32,
    pub total_silver_collected: u32,
    pub potions_used: u32,
    pub traps_triggered: u32,
    pub items_bought: u32,
    pub items_sold: u32,
}

/// One run of the game. Every rule operation takes this by `&mut`.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    pub character: Character,
    pub phase: Phase,
    /// Monster awaiting the attack/flee choice.
    pub encounter: Option<MonsterTemplate>,
    pub current_monster: Option<MonsterInstance>,
    pub rooms_explored: u32,
    pub boss_encountered: bool,
    pub boss_defeated: bool,
    pub stats: RunStats,
    pub ending: Option<Ending>,
    pub rules: Rules,
    /// Challenge progress, kept across restarts.
    #[serde(skip)]
    pub challenges: ChallengeBook,
    #[serde(skip)]
    events: Vec<GameEvent>,
    #[serde(skip)]
    completed_challenges: Vec<&'static ChallengeDef>,
}

impl GameSession {
    /// Start a new run with a freshly rolled character.
    pub fn new(rules: Rules, challenges: ChallengeBook, dice: &mut impl Dice) -> Self {
        let character = roll_starting_character(&rules, dice);
        let mut session = Self::with_character(character, rules);
        session.challenges = challenges;
        session.push_event(GameEvent::Start);
        tracing::info!(
            "{} the {} enters the Dark Fort with {} silver",
            session.character.name,
            session.character.profession,
            session.character.silver
        );
        session
    }

    /// Start a run with a prepared character.
    pub fn with_character(character: Character, rules: Rules) -> Self {
        Self {
            character,
            phase: Phase::Exploring,
            encounter: None,
            current_monster: None,
            rooms_explored: 0,
            boss_encountered: false,
            boss_defeated: false,
            stats: RunStats::default(),
            ending: None,
            rules,
            challenges: ChallengeBook::default(),
            events: Vec::new(),
            completed_challenges: Vec::new(),
        }
    }

    /// Throw the run away and roll a new character. Rules and challenge
    /// progress carry over.
    pub fn restart(&mut self, dice: &mut impl Dice) {
        let rules = self.rules.clone();
        let challenges = std::mem::take(&mut self.challenges);
        *self = Self::new(rules, challenges, dice);
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn derived(&self) -> DerivedStats {
        self.character.derived_stats()
    }

    /// Drain the events queued since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain the challenges completed since the last call.
    pub fn take_completed_challenges(&mut self) -> Vec<&'static ChallengeDef> {
        std::mem::take(&mut self.completed_challenges)
    }

    /// Immutable view for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            character: self.character.clone(),
            derived: self.derived(),
            phase: self.phase,
            encounter: self.encounter,
            current_monster: self.current_monster,
            rooms_explored: self.rooms_explored,
            boss_encountered: self.boss_encountered,
            can_level_up: can_level_up(&self.character, &self.rules),
            stats: self.stats.clone(),
            ending: self.ending.clone(),
        }
    }

    /// Add challenge progress. Returns challenges completed by this update.
    pub fn record_progress(
        &mut self,
        kind: ChallengeKind,
        target: Option<&str>,
        amount: u32,
    ) -> Vec<&'static ChallengeDef> {
        let completed = self.challenges.record_progress(kind, target, amount);
        for def in &completed {
            tracing::info!("Challenge complete: {}", def.name);
        }
        self.completed_challenges.extend(completed.iter().copied());
        completed
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn require_phase(
        &self,
        operation: &'static str,
        allowed: &[Phase],
    ) -> Result<(), GameError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::wrong_phase(operation, self.phase))
        }
    }

    /// Enter a terminal phase.
    pub(crate) fn finish(&mut self, ending: Ending) {
        self.encounter = None;
        self.current_monster = None;
        if ending == Ending::BossSlain {
            self.phase = Phase::Victory;
            self.push_event(GameEvent::Win);
            tracing::info!(
                "Victory after {} rooms with {} points",
                self.rooms_explored,
                self.character.points
            );
        } else {
            self.character.hp = 0;
            self.phase = Phase::Defeat;
            self.push_event(GameEvent::GameOver);
            tracing::info!("Game over: {:?} after {} rooms", ending, self.rooms_explored);
        }
        self.ending = Some(ending);
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub character: Character,
    pub derived: DerivedStats,
    pub phase: Phase,
    pub encounter: Option<MonsterTemplate>,
    pub current_monster: Option<MonsterInstance>,
    pub rooms_explored: u32,
    pub boss_encountered: bool,
    pub can_level_up: bool,
    pub stats: RunStats,
    pub ending: Option<Ending>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn test_session() -> GameSession {
        GameSession::with_character(Character::new("Tester", "Smith"), Rules::default())
    }

    #[test]
    fn test_new_session_starts_exploring_with_start_event() {
        let mut dice = ScriptedDice::new([1, 1, 3]);
        let mut session = GameSession::new(Rules::default(), ChallengeBook::default(), &mut dice);
        assert_eq!(session.phase, Phase::Exploring);
        assert_eq!(session.rooms_explored, 0);
        assert_eq!(session.take_events(), vec![GameEvent::Start]);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_require_phase() {
        let session = test_session();
        assert!(session.require_phase("explore", &[Phase::Exploring]).is_ok());
        assert_eq!(
            session.require_phase("attack", &[Phase::InCombat]),
            Err(GameError::InvalidOperationForPhase {
                operation: "attack",
                phase: Phase::Exploring
            })
        );
    }

    #[test]
    fn test_finish_defeat_zeroes_hp() {
        let mut session = test_session();
        session.finish(Ending::Trap);
        assert_eq!(session.phase, Phase::Defeat);
        assert_eq!(session.character.hp, 0);
        assert!(session.is_over());
        assert_eq!(session.take_events(), vec![GameEvent::GameOver]);
    }

    #[test]
    fn test_finish_victory() {
        let mut session = test_session();
        session.finish(Ending::BossSlain);
        assert_eq!(session.phase, Phase::Victory);
        assert!(session.character.hp > 0);
        assert_eq!(session.ending, Some(Ending::BossSlain));
    }

    #[test]
    fn test_restart_keeps_challenges_and_rules() {
        let mut session = test_session();
        session.rules.level_up_threshold = 12;
        session.record_progress(ChallengeKind::ExploreRooms, None, 3);
        session.finish(Ending::Trap);

        let mut dice = ScriptedDice::new([2]);
        session.restart(&mut dice);
        assert_eq!(session.phase, Phase::Exploring);
        assert_eq!(session.rules.level_up_threshold, 12);
        assert_eq!(session.challenges.progress_for("deep-delver"), 3);
        assert!(session.ending.is_none());
    }

    #[test]
    fn test_snapshot_reflects_level_up_readiness() {
        let mut session = test_session();
        session.character.points = 10;
        let snap = session.snapshot();
        assert!(snap.can_level_up);
        assert_eq!(snap.phase, Phase::Exploring);
        assert_eq!(snap.character.points, 10);
    }

    #[test]
    fn test_completed_challenges_are_queued() {
        let mut session = test_session();
        session.record_progress(ChallengeKind::Slay, Some("Fortress Lord"), 1);
        let done = session.take_completed_challenges();
        assert!(done.iter().any(|d| d.id == "fortress-breaker"));
        assert!(session.take_completed_challenges().is_empty());
    }
}
