//! Named outcomes for a rolled dice set.
//!
//! Classification is an ordered decision list over the frequency count of
//! face values; see [`evaluate`] for the rule order.

pub mod evaluate;

pub use evaluate::{FrequencyCount, evaluate, evaluate_values};

use serde::{Deserialize, Serialize};

/// The classification of a dice set.
///
/// Variants are listed in evaluation priority order, which is not a
/// poker-style strength ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// All six dice show different faces.
    Straight,
    /// All six dice show the same face.
    SixOfAKind,
    /// Five dice share a face.
    FiveOfAKind,
    /// Four dice share a face.
    FourOfAKind,
    /// Three of one face and two of another.
    FullHouse,
    /// Three dice share a face (also covers two triples).
    ThreeOfAKind,
    /// Three different faces each appear twice.
    ThreePairs,
    /// Two different faces each appear twice.
    TwoPairs,
    /// One face appears twice.
    OnePair,
    /// No face repeats.
    NoMatches,
}

impl Outcome {
    /// Every outcome in evaluation priority order.
    pub const ALL: [Outcome; 10] = [
        Outcome::Straight,
        Outcome::SixOfAKind,
        Outcome::FiveOfAKind,
        Outcome::FourOfAKind,
        Outcome::FullHouse,
        Outcome::ThreeOfAKind,
        Outcome::ThreePairs,
        Outcome::TwoPairs,
        Outcome::OnePair,
        Outcome::NoMatches,
    ];

    /// Human-readable label shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Self::Straight => "Straight",
            Self::SixOfAKind => "Six of a Kind",
            Self::FiveOfAKind => "Five of a Kind",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::ThreeOfAKind => "Three of a kind",
            Self::ThreePairs => "Three Pairs",
            Self::TwoPairs => "Two Pairs",
            Self::OnePair => "One Pair",
            Self::NoMatches => "No matches",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Straight.to_string(), "Straight");
        assert_eq!(Outcome::SixOfAKind.to_string(), "Six of a Kind");
        assert_eq!(Outcome::FullHouse.to_string(), "Full House");
        assert_eq!(Outcome::ThreePairs.to_string(), "Three Pairs");
        assert_eq!(Outcome::NoMatches.to_string(), "No matches");
        assert_eq!(Outcome::ThreeOfAKind.to_string(), "Three of a kind");
    }

    #[test]
    fn all_is_priority_ordered() {
        let mut sorted = Outcome::ALL;
        sorted.sort();
        assert_eq!(sorted, Outcome::ALL);
    }

    #[test]
    fn serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&Outcome::TwoPairs).unwrap(),
            "\"TwoPairs\""
        );
    }
}
