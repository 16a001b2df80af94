//! Dark Fort - a dice-driven dungeon crawl rules engine.
//!
//! The library holds every rule of the game and nothing else: no
//! rendering, no file access, no clock. A host drives a [`GameSession`]
//! through the operations below, then reads a [`Snapshot`] and drains
//! [`GameEvent`]s to decide what to show.
//!
//! All randomness comes in through the [`Dice`] trait. Pass any
//! `rand::Rng` in play, or a [`dice::ScriptedDice`] in tests.

pub mod catalog;
pub mod challenges;
pub mod character;
pub mod combat;
pub mod core;
pub mod dice;
pub mod economy;
pub mod encounter;
pub mod progression;

pub use crate::core::{Ending, GameError, GameEvent, GameSession, Phase, Rules, RunStats, Snapshot};
pub use challenges::{ChallengeBook, ChallengeKind};
pub use combat::{attack, engage, flee, use_potion};
pub use dice::{roll_dice, roll_die, Dice, DiceExpr};
pub use economy::{buy, equip, leave_shop, sell, toggle_equip, unequip};
pub use encounter::{explore_room, RoomEvent};
pub use progression::{can_level_up, level_up};
