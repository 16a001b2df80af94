//! Turn-based fights: engage, attack, flee, potions and kill rewards.

pub mod logic;
pub mod specials;
pub mod types;

pub use logic::{attack, engage, flee, use_potion};
pub use specials::{SpecialEffect, SpecialOutcome};
pub use types::*;
