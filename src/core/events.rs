//! Discrete cues emitted by rule operations.
//!
//! The host decides what to do with them (sounds, flashes, notifications).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    Start,
    Explore,
    /// Player attack connected.
    Hit,
    /// Player attack missed.
    Miss,
    /// A monster took damage.
    MonsterHit,
    /// The player took damage.
    PlayerHit,
    WinCombat,
    Flee,
    Potion,
    Shop,
    Buy,
    Sell,
    LevelUp,
    Win,
    GameOver,
}

impl GameEvent {
    /// Cue name a host keys sounds and flashes on.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Start => "start",
            GameEvent::Explore => "explore",
            GameEvent::Hit => "hit",
            GameEvent::Miss => "miss",
            GameEvent::MonsterHit => "monsterHit",
            GameEvent::PlayerHit => "playerHit",
            GameEvent::WinCombat => "winCombat",
            GameEvent::Flee => "flee",
            GameEvent::Potion => "potion",
            GameEvent::Shop => "shop",
            GameEvent::Buy => "buy",
            GameEvent::Sell => "sell",
            GameEvent::LevelUp => "levelUp",
            GameEvent::Win => "win",
            GameEvent::GameOver => "gameOver",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
