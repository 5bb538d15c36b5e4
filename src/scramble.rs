use crate::prelude::*;

use rand::seq::IteratorRandom;
use rand::Rng;

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Draws `length` moves uniformly from the alphabet, never turning the same
/// face twice in a row.
pub fn random_scramble(length: usize, rng: &mut impl Rng) -> Vec<Move> {
    let mut scramble: Vec<Move> = Vec::with_capacity(length);
    for _ in 0..length {
        let previous = scramble.last().map(|m| m.face);
        let next = Move::all().filter(|m| Some(m.face) != previous).choose(rng);
        scramble.extend(next);
    }
    scramble
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[quickcheck]
    fn never_repeats_a_face(length: u8, seed: u64) -> bool {
        let mut rng = StdRng::seed_from_u64(seed);
        let scramble = random_scramble(length as usize, &mut rng);
        scramble.len() == length as usize
            && scramble.windows(2).all(|pair| pair[0].face != pair[1].face)
    }

    #[test]
    fn same_seed_same_scramble() {
        let a = random_scramble(DEFAULT_SCRAMBLE_LENGTH, &mut StdRng::seed_from_u64(7));
        let b = random_scramble(DEFAULT_SCRAMBLE_LENGTH, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_SCRAMBLE_LENGTH);
    }

    #[test]
    fn empty_scramble() {
        assert!(random_scramble(0, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}
