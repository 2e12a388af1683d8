//! Outcome and face frequencies across many rolls.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::dice::{DICE_PER_SET, DiceSet, Die, FACES, generate_dice_set_with};
use crate::outcome::{Outcome, evaluate};

/// Running tally of rolled dice sets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RollStats {
    /// Number of dice sets recorded.
    pub rolls: u64,
    /// How often each outcome occurred. Outcomes never seen are absent.
    pub outcomes: BTreeMap<Outcome, u64>,
    /// `slot_faces[slot][face - 1]`: how often `face` landed in `slot`.
    pub slot_faces: [[u64; FACES as usize]; DICE_PER_SET],
}

impl RollStats {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll `rolls` dice sets with `rng` and tally them.
    pub fn simulate<R: Rng + ?Sized>(rolls: u64, rng: &mut R) -> Self {
        let mut stats = Self::new();
        for _ in 0..rolls {
            stats.record(&generate_dice_set_with(rng));
        }
        debug!(rolls, distinct_outcomes = stats.outcomes.len(), "simulation finished");
        stats
    }

    /// Tally every one of the 6^6 possible dice sets exactly once.
    ///
    /// Frequencies of the result are the exact outcome probabilities.
    pub fn exhaustive() -> Self {
        let mut stats = Self::new();
        let mut values = [1u8; DICE_PER_SET];
        loop {
            stats.record(&DiceSet::new(values.map(Die::from_roll)));
            // Odometer step over 1..=FACES in every slot.
            let Some(slot) = values.iter().position(|&v| v < FACES) else {
                break;
            };
            values[slot] += 1;
            values[..slot].fill(1);
        }
        stats
    }

    /// Add one dice set to the tally.
    pub fn record(&mut self, set: &DiceSet) {
        self.rolls += 1;
        *self.outcomes.entry(evaluate(set)).or_default() += 1;
        for (slot, die) in set.iter().enumerate() {
            self.slot_faces[slot][usize::from(die.value() - 1)] += 1;
        }
    }

    /// How many times `outcome` occurred.
    pub fn outcome_count(&self, outcome: Outcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Share of rolls that produced `outcome`, or 0 with no rolls.
    pub fn outcome_frequency(&self, outcome: Outcome) -> f64 {
        ratio(self.outcome_count(outcome), self.rolls)
    }

    /// How many times `face` landed across all slots.
    pub fn face_count(&self, face: u8) -> u64 {
        match face {
            1..=FACES => self
                .slot_faces
                .iter()
                .map(|slot| slot[usize::from(face - 1)])
                .sum(),
            _ => 0,
        }
    }

    /// Share of all dice that showed `face`, or 0 with no rolls.
    pub fn face_frequency(&self, face: u8) -> f64 {
        ratio(self.face_count(face), self.rolls * DICE_PER_SET as u64)
    }
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_stats() {
        let stats = RollStats::new();
        assert_eq!(stats.rolls, 0);
        assert_eq!(stats.outcome_count(Outcome::Straight), 0);
        assert_eq!(stats.outcome_frequency(Outcome::Straight), 0.0);
        assert_eq!(stats.face_frequency(3), 0.0);
    }

    #[test]
    fn record_counts_outcomes_and_faces() {
        let mut stats = RollStats::new();
        stats.record(&DiceSet::from_values(&[1, 2, 3, 4, 5, 6]).unwrap());
        stats.record(&DiceSet::from_values(&[6, 6, 6, 6, 6, 6]).unwrap());
        assert_eq!(stats.rolls, 2);
        assert_eq!(stats.outcome_count(Outcome::Straight), 1);
        assert_eq!(stats.outcome_count(Outcome::SixOfAKind), 1);
        assert_eq!(stats.outcome_frequency(Outcome::Straight), 0.5);
        assert_eq!(stats.face_count(6), 7);
        assert_eq!(stats.face_count(1), 1);
        assert_eq!(stats.face_count(0), 0);
        assert_eq!(stats.slot_faces[0], [1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn simulate_totals_add_up() {
        let mut rng = StdRng::seed_from_u64(42);
        let stats = RollStats::simulate(1_000, &mut rng);
        assert_eq!(stats.rolls, 1_000);
        assert_eq!(stats.outcomes.values().sum::<u64>(), 1_000);
        let faces: u64 = (1..=FACES).map(|f| stats.face_count(f)).sum();
        assert_eq!(faces, 6_000);
        assert_eq!(stats.outcome_count(Outcome::NoMatches), 0);
    }

    #[test]
    fn exhaustive_matches_exact_counts() {
        let stats = RollStats::exhaustive();
        assert_eq!(stats.rolls, 46_656);
        assert_eq!(stats.outcome_count(Outcome::Straight), 720);
        assert_eq!(stats.outcome_count(Outcome::ThreePairs), 1_800);
        assert_eq!(stats.outcome_count(Outcome::TwoPairs), 16_200);
        assert_eq!(stats.outcome_count(Outcome::NoMatches), 0);
        for slot in stats.slot_faces {
            assert!(slot.iter().all(|&c| c == 7_776));
        }
    }

    #[test]
    fn simulated_faces_are_uniform() {
        let mut rng = StdRng::seed_from_u64(9);
        let stats = RollStats::simulate(20_000, &mut rng);
        for face in 1..=FACES {
            let freq = stats.face_frequency(face);
            assert!((freq - 1.0 / 6.0).abs() < 0.01, "face {face}: {freq}");
        }
    }

    #[test]
    fn simulated_two_pairs_is_most_common() {
        // Exact odds: 16200 / 46656 ~ 0.347.
        let mut rng = StdRng::seed_from_u64(3);
        let stats = RollStats::simulate(20_000, &mut rng);
        let two_pairs = stats.outcome_frequency(Outcome::TwoPairs);
        assert!((two_pairs - 0.347).abs() < 0.02, "two pairs: {two_pairs}");
        for outcome in Outcome::ALL {
            assert!(stats.outcome_count(outcome) <= stats.outcome_count(Outcome::TwoPairs));
        }
    }
}
