//! Static game data: monsters, shop items, loot drops and character names.

pub mod items;
pub mod monsters;
pub mod names;

pub use items::*;
pub use monsters::*;
pub use names::*;
