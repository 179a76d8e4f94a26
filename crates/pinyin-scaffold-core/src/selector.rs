//! Deterministic name → (template index, seed) mapping.
//!
//! The checksum is the sum of every character's Unicode scalar value. It never
//! touches `std::hash`, so the mapping is identical across processes, platforms,
//! and Rust versions.

use std::num::{NonZeroU32, NonZeroUsize};

/// The `(index, seed)` pair derived from a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Template index in `[0, pool_size)`.
    pub index: usize,
    /// Seed in `[0, seed_bound)`.
    pub seed: u32,
}

/// Sum of the code points of every `char` in `name`.
pub fn checksum(name: &str) -> u64 {
    name.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Reduce the checksum of `name` into a template index and a seed.
pub fn select(name: &str, pool_size: NonZeroUsize, seed_bound: NonZeroU32) -> Selection {
    let sum = checksum(name);
    Selection {
        index: (sum % pool_size.get() as u64) as usize,
        seed: (sum % u64::from(seed_bound.get())) as u32,
    }
}
