//! Roll lifecycle: `Idle → Rolling → Resolved`.
//!
//! A [`Roller`] owns the current dice, the RNG that produces new ones, and an
//! animation clock. Front ends call [`Roller::roll`] on user action and feed
//! elapsed time through [`Roller::tick`]; the outcome is evaluated only once
//! the resolve delay has passed, while the faces keep tweening from the old
//! values to the new ones for the length of the animation. The initial dice
//! are named the same way: once the resolve delay has passed after creation.

use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::RollerConfig;
use crate::dice::{DICE_PER_SET, DiceSet, FACES, generate_dice_set_with};
use crate::error::DiceResult;
use crate::outcome::{Outcome, evaluate};

/// Where a roller is in its roll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the initial dice, waiting for the resolve delay to name them.
    Idle,
    /// New dice are chosen and animating; the outcome is not revealed yet.
    Rolling,
    /// The outcome of the current dice has been evaluated.
    Resolved(Outcome),
}

/// Drives a single on-screen dice set through its roll cycle.
#[derive(Debug, Clone)]
pub struct Roller<R> {
    config: RollerConfig,
    rng: R,
    dice: DiceSet,
    /// Tween positions on screen when the current roll started.
    from: [f32; DICE_PER_SET],
    elapsed: Duration,
    phase: Phase,
    roll_count: u64,
}

impl Roller<StdRng> {
    /// Validate `config` and build a roller seeded from it, or from OS
    /// entropy when no seed is set.
    pub fn from_config(config: RollerConfig) -> DiceResult<Self> {
        config.validate()?;
        let rng = config.rng();
        Ok(Self::new(config, rng))
    }
}

impl<R: Rng> Roller<R> {
    /// Create a roller showing an initial random set. The set is evaluated
    /// on the first tick that reaches the resolve delay.
    pub fn new(config: RollerConfig, mut rng: R) -> Self {
        let dice = generate_dice_set_with(&mut rng);
        Self {
            config,
            rng,
            from: positions(&dice),
            dice,
            elapsed: Duration::ZERO,
            phase: Phase::Idle,
            roll_count: 0,
        }
    }

    /// Start a new roll, replacing the current dice.
    ///
    /// Rolling while a roll is still pending restarts the cycle: the tween
    /// continues from the exact positions currently on screen and the
    /// earlier roll is never evaluated.
    pub fn roll(&mut self) -> DiceSet {
        self.from = self.displayed_positions();
        self.dice = generate_dice_set_with(&mut self.rng);
        self.elapsed = Duration::ZERO;
        self.phase = Phase::Rolling;
        self.roll_count += 1;
        debug!(roll = self.roll_count, dice = %self.dice, "roll started");
        self.dice
    }

    /// Advance the clock by `dt`.
    ///
    /// Returns the outcome on the tick that resolves the pending dice (the
    /// initial set or a roll), and `None` otherwise.
    pub fn tick(&mut self, dt: Duration) -> Option<Outcome> {
        self.elapsed = self.elapsed.saturating_add(dt);
        if matches!(self.phase, Phase::Resolved(_))
            || self.elapsed < self.config.resolve_delay()
        {
            return None;
        }
        let outcome = evaluate(&self.dice);
        self.phase = Phase::Resolved(outcome);
        debug!(roll = self.roll_count, %outcome, "dice resolved");
        Some(outcome)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The revealed outcome, if the current dice have resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The current dice (the final values, not the tween).
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    /// Number of rolls since creation.
    pub fn roll_count(&self) -> u64 {
        self.roll_count
    }

    /// The configuration this roller runs with.
    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    /// Fraction of the roll animation that has played, in `0.0..=1.0`.
    /// Always `1.0` before the first roll.
    pub fn animation_progress(&self) -> f32 {
        let total = self.config.animation();
        if self.roll_count == 0 || total.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
    }

    /// Whether the faces are still tweening.
    pub fn is_animating(&self) -> bool {
        self.animation_progress() < 1.0
    }

    /// Fractional tween position of every slot.
    ///
    /// While animating, each slot moves from where it was when the roll
    /// started toward its rolled face along the fast-out/slow-in curve.
    pub fn displayed_positions(&self) -> [f32; DICE_PER_SET] {
        let to = positions(&self.dice);
        let progress = self.animation_progress();
        if progress >= 1.0 {
            return to;
        }
        let eased = fast_out_slow_in(progress);
        std::array::from_fn(|slot| self.from[slot] + (to[slot] - self.from[slot]) * eased)
    }

    /// Faces to draw right now: the tween positions truncated to whole faces.
    pub fn displayed_faces(&self) -> [u8; DICE_PER_SET] {
        self.displayed_positions().map(face_at)
    }
}

fn positions(dice: &DiceSet) -> [f32; DICE_PER_SET] {
    dice.values().map(f32::from)
}

fn face_at(position: f32) -> u8 {
    // Truncation toward zero; the clamp keeps float drift inside the die.
    (position.trunc() as u8).clamp(1, FACES)
}

/// Cubic bezier easing with control points (0.4, 0) and (0.2, 1).
fn fast_out_slow_in(t: f32) -> f32 {
    const X1: f32 = 0.4;
    const Y1: f32 = 0.0;
    const X2: f32 = 0.2;
    const Y2: f32 = 1.0;

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // x(s) is monotonic on [0, 1]; bisect for the curve parameter.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if cubic(mid, X1, X2) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    cubic((lo + hi) / 2.0, Y1, Y2)
}

/// One coordinate of a cubic bezier from 0 to 1 with inner points `p1`, `p2`.
fn cubic(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}
