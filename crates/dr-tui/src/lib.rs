//! Terminal UI for DiceRoll.
//!
//! A single ratatui screen: the outcome label, a 2×3 grid of dice that
//! tumble for a moment after every roll, and a roll prompt. The event loop
//! wakes on a frame timer so the animation and the delayed evaluation run
//! without any input.

pub mod app;
pub mod faces;
pub mod logging;
pub mod shared;
pub mod terminal;
pub mod view;
