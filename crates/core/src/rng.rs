//! RNG module - random sources and the bag randomizer
//!
//! A bag is one uniformly shuffled permutation of all seven shapes. The shuffle
//! is Fisher-Yates driven by an injectable [`RandomSource`], so a session can be
//! replayed exactly from its seed.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::types::{PieceKind, BAG_SIZE};

/// Anything that can drive a shuffle.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, bound)
    ///
    /// Uses the high bits of `next_u32` (multiply-shift), which are the well
    /// mixed ones for an LCG.
    fn next_below(&mut self, bound: u32) -> u32 {
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state, usable as the seed of a continuation.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Shuffle a slice in place using Fisher-Yates
pub fn shuffle_in_place<T, R: RandomSource>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_below((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

/// Uniform random permutation of the given shapes.
///
/// For a bag, pass all seven distinct shapes; each comes back exactly once.
pub fn shuffle<R: RandomSource>(
    mut shapes: [PieceKind; BAG_SIZE],
    rng: &mut R,
) -> [PieceKind; BAG_SIZE] {
    shuffle_in_place(&mut shapes, rng);
    shapes
}

/// A freshly shuffled bag of all seven shapes.
pub fn new_bag<R: RandomSource>(rng: &mut R) -> [PieceKind; BAG_SIZE] {
    shuffle(PieceKind::ALL, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of values.
    struct Scripted(Vec<u32>, usize);

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in 1..=7 {
            for _ in 0..200 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_bag_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..50 {
            let mut bag = new_bag(&mut rng);
            bag.sort();
            assert_eq!(bag, PieceKind::ALL);
        }
    }

    #[test]
    fn test_zero_draws_reverse_into_known_order() {
        // next_below always 0: each i swaps with index 0.
        let mut rng = Scripted(vec![0], 0);
        let bag = shuffle(PieceKind::ALL, &mut rng);
        assert_eq!(
            bag,
            [
                PieceKind::O,
                PieceKind::T,
                PieceKind::S,
                PieceKind::Z,
                PieceKind::J,
                PieceKind::L,
                PieceKind::I,
            ]
        );
    }

    #[test]
    fn test_max_draws_keep_identity() {
        // next_below(i + 1) == i for every step: every swap is a no-op.
        let mut rng = Scripted(vec![u32::MAX], 0);
        assert_eq!(shuffle(PieceKind::ALL, &mut rng), PieceKind::ALL);
    }

    #[test]
    fn test_every_shape_can_lead_a_bag() {
        let mut rng = SimpleRng::new(2024);
        let mut seen = [false; BAG_SIZE];
        for _ in 0..200 {
            seen[new_bag(&mut rng)[0].index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
