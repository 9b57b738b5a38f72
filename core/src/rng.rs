//! Deterministic random number generation.
//!
//! RULE: Nothing that produces a record field may call a platform RNG
//! directly. All randomness flows through IdentityRng instances, either
//! derived from a caller seed or forked from an entropy-seeded ambient stream.
//!
//! Each component gets its own stream, seeded deterministically
//! from (seed XOR stream_slot * golden ratio). This means:
//!   - The person and address draws never share a stream.
//!   - Each stream is fully reproducible in isolation from one seed.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::types::Seed;

/// A named, deterministic RNG for a single component.
pub struct IdentityRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl IdentityRng {
    /// Create a stream from the caller seed and a stable slot.
    pub fn new(seed: Seed, slot: StreamSlot) -> Self {
        let derived_seed = (seed as u64) ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: slot.name(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Ambient stream for unseeded use. The only place entropy enters.
    pub fn from_entropy(slot: StreamSlot) -> Self {
        Self {
            name: slot.name(),
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    /// Split off an independent child stream. Advances `self` by one draw.
    pub fn fork(&mut self) -> Self {
        Self {
            name: self.name,
            inner: Pcg64Mcg::seed_from_u64(self.inner.next_u64()),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an integer in [min, max], both inclusive. Bounds are swapped if reversed.
    pub fn int_in_range(&mut self, min: u64, max: u64) -> u64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        lo + self.next_u64_below(hi - lo + 1)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly. One draw.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }

    /// A string of `len` decimal digits, one draw per digit.
    pub fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.next_u64_below(10) as u8))
            .collect()
    }

    /// Sixteen raw bytes, two draws.
    pub fn bytes16(&mut self) -> [u8; 16] {
        let hi = self.inner.next_u64().to_be_bytes();
        let lo = self.inner.next_u64().to_be_bytes();
        let mut out = [0u8; 16];
        out[..8].copy_from_slice(&hi);
        out[8..].copy_from_slice(&lo);
        out
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stream derived from a seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Person = 0,
    Address = 1,
    // Add new streams here — append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Address => "address",
        }
    }
}
