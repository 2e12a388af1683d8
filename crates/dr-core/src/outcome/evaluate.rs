//! Frequency counting and the outcome decision list.

use tracing::trace;

use super::Outcome;
use crate::dice::{DiceSet, FACES};
use crate::error::DiceResult;

/// How many dice show each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyCount {
    counts: [u8; FACES as usize],
}

impl FrequencyCount {
    /// Count the faces of a dice set.
    pub fn of(set: &DiceSet) -> Self {
        let mut counts = [0u8; FACES as usize];
        for die in set.iter() {
            counts[usize::from(die.value() - 1)] += 1;
        }
        Self { counts }
    }

    /// Number of dice showing `face`; zero for faces outside 1..=6.
    pub fn count(&self, face: u8) -> u8 {
        match face {
            1..=FACES => self.counts[usize::from(face - 1)],
            _ => 0,
        }
    }

    /// Number of distinct faces present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether some face appears exactly `n` times.
    pub fn has_count(&self, n: u8) -> bool {
        self.counts.contains(&n)
    }

    /// How many distinct faces appear exactly `n` times.
    pub fn faces_with_count(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    /// `(face, count)` pairs for every face present, lowest face first.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (1..=FACES)
            .zip(self.counts.iter().copied())
            .filter(|&(_, c)| c > 0)
    }
}

/// Classify a dice set. The first matching rule wins:
///
/// 1. six distinct faces: [`Outcome::Straight`]
/// 2. a face six times: [`Outcome::SixOfAKind`]
/// 3. a face five times: [`Outcome::FiveOfAKind`]
/// 4. a face four times: [`Outcome::FourOfAKind`]
/// 5. a face three times and another twice: [`Outcome::FullHouse`]
/// 6. a face three times: [`Outcome::ThreeOfAKind`]
/// 7. three faces twice each: [`Outcome::ThreePairs`]
/// 8. two faces twice each: [`Outcome::TwoPairs`]
/// 9. a face twice: [`Outcome::OnePair`]
/// 10. otherwise [`Outcome::NoMatches`]
pub fn evaluate(set: &DiceSet) -> Outcome {
    let freq = FrequencyCount::of(set);
    let outcome = if freq.distinct() == FACES as usize {
        Outcome::Straight
    } else if freq.has_count(6) {
        Outcome::SixOfAKind
    } else if freq.has_count(5) {
        Outcome::FiveOfAKind
    } else if freq.has_count(4) {
        Outcome::FourOfAKind
    } else if freq.has_count(3) && freq.has_count(2) {
        Outcome::FullHouse
    } else if freq.has_count(3) {
        Outcome::ThreeOfAKind
    } else if freq.faces_with_count(2) == 3 {
        Outcome::ThreePairs
    } else if freq.faces_with_count(2) == 2 {
        Outcome::TwoPairs
    } else if freq.has_count(2) {
        Outcome::OnePair
    } else {
        Outcome::NoMatches
    };
    trace!(dice = %set, %outcome, "evaluated dice set");
    outcome
}

/// Validate raw values and classify them.
///
/// Fails with [`crate::DiceError::InvalidInput`] unless there are exactly six
/// values, each in `1..=6`.
pub fn evaluate_values(values: &[u8]) -> DiceResult<Outcome> {
    let set = DiceSet::from_values(values)?;
    Ok(evaluate(&set))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::DiceError;
    use crate::dice::DICE_PER_SET;
    use proptest::prelude::*;

    fn eval(values: [u8; 6]) -> Outcome {
        evaluate(&DiceSet::from_values(&values).unwrap())
    }

    #[test]
    fn frequency_count() {
        let set = DiceSet::from_values(&[2, 2, 2, 5, 5, 1]).unwrap();
        let freq = FrequencyCount::of(&set);
        assert_eq!(freq.count(2), 3);
        assert_eq!(freq.count(5), 2);
        assert_eq!(freq.count(1), 1);
        assert_eq!(freq.count(6), 0);
        assert_eq!(freq.count(0), 0);
        assert_eq!(freq.distinct(), 3);
        assert_eq!(freq.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 3), (5, 2)]);
    }

    #[test]
    fn straight() {
        assert_eq!(eval([1, 2, 3, 4, 5, 6]), Outcome::Straight);
        assert_eq!(eval([6, 4, 2, 5, 3, 1]), Outcome::Straight);
    }

    #[test]
    fn n_of_a_kind() {
        assert_eq!(eval([3, 3, 3, 3, 3, 3]), Outcome::SixOfAKind);
        assert_eq!(eval([5, 5, 5, 5, 5, 2]), Outcome::FiveOfAKind);
        assert_eq!(eval([1, 1, 1, 1, 2, 3]), Outcome::FourOfAKind);
        assert_eq!(eval([4, 4, 4, 4, 6, 6]), Outcome::FourOfAKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(eval([2, 2, 2, 5, 5, 1]), Outcome::FullHouse);
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(eval([6, 6, 6, 1, 2, 3]), Outcome::ThreeOfAKind);
    }

    #[test]
    fn two_triples_is_three_of_a_kind() {
        assert_eq!(eval([1, 1, 1, 2, 2, 2]), Outcome::ThreeOfAKind);
    }

    #[test]
    fn pairs() {
        assert_eq!(eval([4, 4, 1, 1, 6, 6]), Outcome::ThreePairs);
        assert_eq!(eval([2, 2, 5, 5, 1, 3]), Outcome::TwoPairs);
        assert_eq!(eval([1, 1, 2, 3, 4, 5]), Outcome::OnePair);
        assert_eq!(eval([1, 2, 3, 4, 5, 1]), Outcome::OnePair);
    }

    #[test]
    fn evaluate_values_validates() {
        assert_eq!(
            evaluate_values(&[1, 2, 3, 4, 5, 6]).unwrap(),
            Outcome::Straight
        );
        assert!(matches!(
            evaluate_values(&[1, 2, 3, 4, 5]),
            Err(DiceError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate_values(&[1, 2, 3, 4, 5, 0]),
            Err(DiceError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate_values(&[7, 7, 7, 7, 7, 7]),
            Err(DiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn exhaustive_distribution() {
        let mut tally: HashMap<Outcome, usize> = HashMap::new();
        let mut values = [1u8; DICE_PER_SET];
        loop {
            *tally.entry(eval(values)).or_default() += 1;
            // Odometer increment over 1..=6 in every slot.
            let mut slot = 0;
            while slot < DICE_PER_SET && values[slot] == FACES {
                values[slot] = 1;
                slot += 1;
            }
            if slot == DICE_PER_SET {
                break;
            }
            values[slot] += 1;
        }

        let count = |o: Outcome| tally.get(&o).copied().unwrap_or(0);
        assert_eq!(count(Outcome::Straight), 720);
        assert_eq!(count(Outcome::SixOfAKind), 6);
        assert_eq!(count(Outcome::FiveOfAKind), 180);
        assert_eq!(count(Outcome::FourOfAKind), 2250);
        assert_eq!(count(Outcome::FullHouse), 7200);
        assert_eq!(count(Outcome::ThreeOfAKind), 7500);
        assert_eq!(count(Outcome::ThreePairs), 1800);
        assert_eq!(count(Outcome::TwoPairs), 16200);
        assert_eq!(count(Outcome::OnePair), 10800);
        // Six dice over six faces either are all distinct or repeat a face.
        assert_eq!(count(Outcome::NoMatches), 0);
        assert_eq!(tally.values().sum::<usize>(), 6usize.pow(6));
    }

    proptest! {
        #[test]
        fn order_does_not_matter(
            values in prop::array::uniform6(1u8..=6),
            rotate in 0usize..6,
        ) {
            let mut shuffled = values;
            shuffled.rotate_left(rotate);
            shuffled.reverse();
            prop_assert_eq!(eval(values), eval(shuffled));
        }

        #[test]
        fn evaluation_is_deterministic(values in prop::array::uniform6(1u8..=6)) {
            prop_assert_eq!(eval(values), eval(values));
            prop_assert!(Outcome::ALL.contains(&eval(values)));
        }
    }
}
