//! Deterministic RNG derivation.
//!
//! A master seed generates a deterministic sub-seed per generation counter.
//! Sub-seeds are derived via BLAKE3 hashing, so replaying a session with the
//! same master seed and generation numbers reproduces every sample set
//! exactly, regardless of what happened in between.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Master seed plus derivation of per-generation RNGs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeedPlan {
    master_seed: u64,
}

impl SeedPlan {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the deterministic sub-seed for one generation.
    pub fn sub_seed(&self, generation: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&generation.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Create a seeded StdRng for one generation.
    pub fn rng_for(&self, generation: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(generation))
    }
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::new(0x6265_6c6c_6375_7276)
    }
}
