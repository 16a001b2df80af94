//! Challenges: long-running goals tracked across runs.
//!
//! Progress is a plain `{id -> count}` map. Rule operations feed it; the
//! host loads and saves it.

pub mod data;
pub mod types;

pub use data::{get_challenge_def, ALL_CHALLENGES};
pub use types::{ChallengeBook, ChallengeDef, ChallengeKind};
