use super::game_state::Phase;
use thiserror::Error;

/// Errors returned by rule operations.
///
/// All of them are recoverable: a rejected operation leaves the session
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Not enough silver to pay for an item.
    #[error("{item} costs {price} silver but only {silver} is available")]
    InsufficientFunds {
        item: String,
        price: u32,
        silver: u32,
    },

    /// The inventory does not contain the item.
    #[error("item not owned: {0}")]
    ItemNotOwned(String),

    /// The shop does not sell an item with that name.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Only weapons and armor can be equipped.
    #[error("{0} cannot be equipped")]
    NotEquippable(String),

    /// Level-up requested below the point threshold.
    #[error("not enough points to level up: have {have}, need {need}")]
    NotEnoughPoints { have: u32, need: u32 },

    /// The operation is not allowed in the current phase.
    #[error("cannot {operation} while {phase}")]
    InvalidOperationForPhase {
        operation: &'static str,
        phase: Phase,
    },

    /// A dice string that does not match `d{N}` or `d{N}+{K}`.
    #[error("malformed dice expression: {0:?}")]
    MalformedDice(String),
}

impl GameError {
    pub(crate) fn wrong_phase(operation: &'static str, phase: Phase) -> Self {
        GameError::InvalidOperationForPhase { operation, phase }
    }
}
