//! Session state, phases, rule settings, events and errors.

pub mod constants;
pub mod error;
pub mod events;
pub mod game_state;
pub mod rules;

pub use error::GameError;
pub use events::GameEvent;
pub use game_state::{Ending, GameSession, Phase, RunStats, Snapshot};
pub use rules::Rules;
