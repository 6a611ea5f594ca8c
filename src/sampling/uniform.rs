//! Bias-free index sampling.
//!
//! Mapping a random word onto `[0, bound)` with a bare modulus skews
//! the distribution toward low indices whenever `bound` does not divide
//! the word range. The draw here rejects values above the largest
//! multiple of `bound` that fits in a `u32`, then reduces; within the
//! accepted zone every residue is equally likely.

use rand_core::{CryptoRng, RngCore};

/// Draws a uniform index in `[0, bound)` from a cryptographic source.
///
/// The `CryptoRng` bound restricts callers to unpredictable sources;
/// seedable general-purpose generators do not qualify.
///
/// Expected draws per call is below `1 + bound / 2^32`, effectively one
/// for any realistic alphabet size.
///
/// # Panics
///
/// Panics if `bound` is zero or exceeds `u32::MAX`.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> usize
where
    R: RngCore + CryptoRng,
{
    assert!(bound > 0, "bound must be non-zero");
    let bound = u32::try_from(bound).expect("bound must fit in u32");

    // Largest multiple of `bound` representable in u32. Draws at or
    // above it are rejected so the reduction below stays uniform.
    let zone = (u32::MAX / bound) * bound;

    loop {
        let draw = rng.next_u32();
        if draw < zone {
            return (draw % bound) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::SecureRng;

    #[test]
    fn test_index_within_bound() {
        let mut rng = SecureRng::from_seed_for_testing([0x11; 32]);
        for bound in [1, 2, 10, 62, 88] {
            for _ in 0..1_000 {
                assert!(uniform_index(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn test_bound_one_always_zero() {
        let mut rng = SecureRng::from_seed_for_testing([0x22; 32]);
        for _ in 0..100 {
            assert_eq!(uniform_index(&mut rng, 1), 0);
        }
    }

    #[test]
    fn test_every_index_reachable() {
        let mut rng = SecureRng::from_seed_for_testing([0x33; 32]);
        let bound = 10;
        let mut counts = vec![0u32; bound];

        for _ in 0..10_000 {
            counts[uniform_index(&mut rng, bound)] += 1;
        }

        // With 10k draws over 10 buckets the expected count is 1000;
        // a bucket below 800 or above 1200 is over 6 sigma out.
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "index {} drawn {} times",
                index,
                count
            );
        }
    }

    #[test]
    #[should_panic(expected = "bound must be non-zero")]
    fn test_zero_bound_panics() {
        let mut rng = SecureRng::from_seed_for_testing([0x44; 32]);
        uniform_index(&mut rng, 0);
    }
}
