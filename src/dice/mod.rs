//! Dice rolling.
//!
//! Damage values are written as `d6` or `d6+2`. They are parsed once into a
//! [`DiceExpr`] when the data is defined, so rolling never touches strings.
//! All randomness goes through the [`Dice`] trait so that tests (and
//! replays) can script the exact rolls.

use crate::core::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Source of die rolls and percentage checks.
///
/// Every `rand::Rng` is a `Dice`; [`ScriptedDice`] replays fixed values.
pub trait Dice {
    /// Roll a single die, uniform in `[1, sides]`. A 0-sided die yields 1.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Returns true with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool;
}

impl<R: Rng> Dice for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 1;
        }
        self.gen_range(1..=sides)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays a fixed sequence of rolls.
///
/// Die rolls and chance checks are kept in separate queues. Once a queue is
/// exhausted, dice roll 1 and chance checks fail. Scripted values larger
/// than the die are clamped to its sides.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    chances: VecDeque<bool>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            chances: VecDeque::new(),
        }
    }

    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances = chances.into_iter().collect();
        self
    }

    /// Rolls not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = self.rolls.pop_front().unwrap_or(1);
        value.clamp(1, sides.max(1))
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

/// Replays raw values with no clamping, then rolls 0. Stands in for a
/// `Dice` impl that breaks the `[1, sides]` contract.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct UncheckedDice {
    rolls: VecDeque<u32>,
}

#[cfg(test)]
impl UncheckedDice {
    pub(crate) fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl Dice for UncheckedDice {
    fn roll_die(&mut self, _sides: u32) -> u32 {
        self.rolls.pop_front().unwrap_or(0)
    }

    fn chance(&mut self, _p: f64) -> bool {
        false
    }
}

/// A parsed dice expression: one die plus a flat bonus.
///
/// Serialized as its notation (`"d6+2"`). Deserializing goes through
/// [`FromStr`], so a zero-sided die is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceExpr {
    pub sides: u32,
    pub bonus: u32,
}

impl DiceExpr {
    /// Value used for unparseable expressions: always rolls 1.
    pub const FALLBACK: DiceExpr = DiceExpr::new(1, 0);

    pub const fn new(sides: u32, bonus: u32) -> Self {
        Self { sides, bonus }
    }

    /// A plain die with no bonus.
    pub const fn d(sides: u32) -> Self {
        Self::new(sides, 0)
    }

    /// Parse leniently: malformed input becomes [`DiceExpr::FALLBACK`].
    pub fn parse_lenient(notation: &str) -> Self {
        match notation.parse() {
            Ok(expr) => expr,
            Err(e) => {
                tracing::warn!("{}; falling back to {}", e, DiceExpr::FALLBACK);
                DiceExpr::FALLBACK
            }
        }
    }

    /// Saturates at `u32::MAX` for absurd bonuses.
    pub fn roll(&self, dice: &mut impl Dice) -> u32 {
        dice.roll_die(self.sides).saturating_add(self.bonus)
    }

    pub fn min(&self) -> u32 {
        self.bonus.saturating_add(1)
    }

    pub fn max(&self) -> u32 {
        self.sides.max(1).saturating_add(self.bonus)
    }

    /// Expected value of a roll.
    pub fn average(&self) -> f64 {
        (1.0 + self.sides.max(1) as f64) / 2.0 + self.bonus as f64
    }
}

impl FromStr for DiceExpr {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim().to_lowercase();
        let malformed = || GameError::MalformedDice(s.to_string());

        let rest = notation.strip_prefix('d').ok_or_else(malformed)?;
        let (sides_str, bonus_str) = match rest.split_once('+') {
            Some((sides, bonus)) => (sides, Some(bonus)),
            None => (rest, None),
        };

        let sides: u32 = sides_str.parse().map_err(|_| malformed())?;
        if sides == 0 {
            return Err(malformed());
        }
        let bonus: u32 = match bonus_str {
            Some(b) => b.parse().map_err(|_| malformed())?,
            None => 0,
        };

        Ok(DiceExpr { sides, bonus })
    }
}

impl TryFrom<String> for DiceExpr {
    type Error = GameError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        notation.parse()
    }
}

impl From<DiceExpr> for String {
    fn from(expr: DiceExpr) -> Self {
        expr.to_string()
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bonus > 0 {
            write!(f, "d{}+{}", self.sides, self.bonus)
        } else {
            write!(f, "d{}", self.sides)
        }
    }
}

/// Roll a single die.
pub fn roll_die(sides: u32, dice: &mut impl Dice) -> u32 {
    dice.roll_die(sides)
}

/// Roll a dice string such as `"d6+2"`. Unparseable strings roll 1.
pub fn roll_dice(notation: &str, dice: &mut impl Dice) -> u32 {
    DiceExpr::parse_lenient(notation).roll(dice)
}
