//! Character state, derived stats and starting rolls.

pub mod creation;
pub mod derived_stats;
pub mod types;

pub use creation::roll_starting_character;
pub use derived_stats::{base_damage_for_level, DerivedStats};
pub use types::{Character, Inventory};
