//! Random dice set generation.

use rand::Rng;

use super::{DICE_PER_SET, DiceSet, Die, FACES};

/// Roll six independent, uniformly distributed dice using the given RNG.
pub fn generate_dice_set_with<R: Rng + ?Sized>(rng: &mut R) -> DiceSet {
    let dice: [Die; DICE_PER_SET] =
        std::array::from_fn(|_| Die::from_roll(rng.random_range(1..=FACES)));
    DiceSet::new(dice)
}

/// Roll six dice using the thread-local RNG.
pub fn generate_dice_set() -> DiceSet {
    generate_dice_set_with(&mut rand::rng())
}
