//! A bit-exact model of `java.util.Random`.
//!
//! The sorting driver seeds `new Random(42)` and draws a fixed-size sample. Modelling
//! the generator here lets the README state the exact array the driver prints.

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const ADDEND: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// The 48-bit linear congruential generator behind `java.util.Random`.
#[derive(Debug, Clone)]
pub struct JavaRandom {
    seed: i64,
}

impl JavaRandom {
    /// Equivalent to `new java.util.Random(seed)`.
    pub fn new(seed: i64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    fn next(&mut self, bits: u32) -> i32 {
        self.seed = (self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND)) & MASK;
        (self.seed >> (48 - bits)) as i32
    }

    /// Equivalent to `Random.nextInt(bound)`; `bound` must be positive.
    pub fn next_int(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        if bound & -bound == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }
}

/// The array `Random(seed)` fills with `len` draws of `nextInt(bound)`.
pub fn sample(seed: i64, len: usize, bound: i32) -> Vec<i32> {
    let mut rng = JavaRandom::new(seed);
    (0..len).map(|_| rng.next_int(bound)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_reproducible() {
        assert_eq!(sample(42, 12, 100), sample(42, 12, 100));
    }

    #[test]
    fn test_sample_within_bound() {
        let values = sample(42, 12, 100);
        assert_eq!(values.len(), 12);
        assert!(values.iter().all(|v| (0..100).contains(v)));
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(sample(42, 12, 100), sample(43, 12, 100));
    }

    #[test]
    fn test_power_of_two_bound() {
        let mut rng = JavaRandom::new(7);
        for _ in 0..64 {
            let v = rng.next_int(16);
            assert!((0..16).contains(&v));
        }
    }

    #[test]
    fn test_sample_matches_jdk() {
        // new Random(42), 12 x nextInt(100), as printed by a JVM.
        assert_eq!(
            sample(42, 12, 100),
            vec![30, 63, 48, 84, 70, 25, 5, 18, 19, 93, 82, 2]
        );
    }

    #[test]
    fn test_power_of_two_bound_matches_jdk() {
        let mut rng = JavaRandom::new(7);
        let drawn: Vec<i32> = (0..8).map(|_| rng.next_int(16)).collect();
        assert_eq!(drawn, vec![11, 10, 11, 0, 5, 7, 14, 11]);
    }

    #[test]
    fn test_scrambled_seed_matches_jdk() {
        // Random(0) stores 0 ^ 0x5DEECE66D.
        assert_eq!(JavaRandom::new(0).seed, 0x5_DEEC_E66D);
    }
}
