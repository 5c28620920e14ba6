//! Deterministic seed splitting.
//!
//! All randomness in this crate flows through seeds derived here. Child
//! seeds are drawn in order from a ChaCha8 stream keyed by the parent, so
//! the whole derivation tree, and every generated layout with it, is a
//! pure function of the top-level seed.
//!
//! Split order is part of the determinism contract: the foraging generator
//! splits into `[food, agents, levels, residual]` and the open-field
//! generator into `[agents, levels, residual]`, with one further child per
//! food item. Reordering any split changes every downstream draw.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deterministic RNG keyed by a single `u64` seed.
pub fn rng_from(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Derive `N` child seeds from `seed`, in order.
pub fn split_seed<const N: usize>(seed: u64) -> [u64; N] {
    let mut rng = rng_from(seed);
    let mut out = [0u64; N];
    for child in &mut out {
        *child = rng.next_u64();
    }
    out
}

/// Derive `n` child seeds from `seed`, in order, for runtime counts.
pub fn split_seed_n(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = rng_from(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}
