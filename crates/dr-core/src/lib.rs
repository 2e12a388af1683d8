//! Core engine for DiceRoll.
//!
//! Rolls a set of six dice, classifies the result into a named outcome
//! (Straight, Full House, Three Pairs, ...), and tracks the timing of a
//! single roll from the moment it starts animating until its outcome is
//! revealed. Everything here is synchronous and owns its own state; the
//! terminal UI and CLI crates sit on top of it.

pub mod config;
pub mod dice;
pub mod error;
pub mod outcome;
pub mod roller;
pub mod stats;

pub use config::RollerConfig;
pub use dice::{DICE_PER_SET, DiceSet, Die, FACES, generate_dice_set, generate_dice_set_with};
pub use error::{DiceError, DiceResult};
pub use outcome::{FrequencyCount, Outcome, evaluate, evaluate_values};
pub use roller::{Phase, Roller};
pub use stats::RollStats;
