//! Dice and dice sets.
//!
//! A [`Die`] is a single six-sided value and a [`DiceSet`] is the fixed group
//! of six dice produced by one roll. Both validate their contents on
//! construction, so any value of these types is always in range.

pub mod generate;

pub use generate::{generate_dice_set, generate_dice_set_with};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// Number of faces on every die.
pub const FACES: u8 = 6;

/// Number of dice in a set.
pub const DICE_PER_SET: usize = 6;

/// A single six-sided die value in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Create a die, rejecting values outside `1..=6`.
    pub fn new(value: u8) -> DiceResult<Self> {
        if (1..=FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DiceError::InvalidInput(format!(
                "die value {value} is outside 1..={FACES}"
            )))
        }
    }

    /// The face value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Wrap a value the caller has already drawn from `1..=FACES`.
    pub(crate) fn from_roll(value: u8) -> Self {
        debug_assert!((1..=FACES).contains(&value));
        Self(value)
    }
}

impl TryFrom<u8> for Die {
    type Error = DiceError;

    fn try_from(value: u8) -> DiceResult<Self> {
        Self::new(value)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six dice produced by one roll.
///
/// Order is kept for display; classification only looks at the multiset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DiceSet([Die; DICE_PER_SET]);

impl DiceSet {
    /// Create a set from six already-valid dice.
    pub fn new(dice: [Die; DICE_PER_SET]) -> Self {
        Self(dice)
    }

    /// Build a set from raw values, checking the length and every value.
    pub fn from_values(values: &[u8]) -> DiceResult<Self> {
        if values.len() != DICE_PER_SET {
            return Err(DiceError::InvalidInput(format!(
                "expected {DICE_PER_SET} dice, got {}",
                values.len()
            )));
        }
        let mut dice = [Die::from_roll(1); DICE_PER_SET];
        for (slot, &value) in dice.iter_mut().zip(values) {
            *slot = Die::new(value)?;
        }
        Ok(Self(dice))
    }

    /// The dice in display order.
    pub fn dice(&self) -> &[Die; DICE_PER_SET] {
        &self.0
    }

    /// The face values in display order.
    pub fn values(&self) -> [u8; DICE_PER_SET] {
        self.0.map(Die::value)
    }

    /// Iterate over the dice in display order.
    pub fn iter(&self) -> impl Iterator<Item = Die> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all face values.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|d| u32::from(d.value())).sum()
    }
}

impl TryFrom<&[u8]> for DiceSet {
    type Error = DiceError;

    fn try_from(values: &[u8]) -> DiceResult<Self> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<u8>> for DiceSet {
    type Error = DiceError;

    fn try_from(values: Vec<u8>) -> DiceResult<Self> {
        Self::from_values(&values)
    }
}

impl From<DiceSet> for Vec<u8> {
    fn from(set: DiceSet) -> Vec<u8> {
        set.values().to_vec()
    }
}

/// Parses values separated by commas and/or whitespace, e.g. `"1,2,3,4,5,6"`.
impl FromStr for DiceSet {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>().map_err(|_| {
                    DiceError::InvalidInput(format!("'{part}' is not a die value"))
                })
            })
            .collect::<DiceResult<Vec<u8>>>()?;
        Self::from_values(&values)
    }
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}
