//! Deterministic per-symbol RNG streams.
//!
//! A master seed is expanded into one sub-seed per symbol via BLAKE3, so each
//! synthetic series depends only on `(seed, symbol)` and not on the order in
//! which symbols are generated or on how many other symbols are configured.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Derive the sub-seed for `symbol`.
    pub fn sub_seed(&self, symbol: &str) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(symbol.as_bytes());
        let hash = hasher.finalize();
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(seed)
    }

    /// Seeded StdRng for `symbol`.
    pub fn rng_for(&self, symbol: &str) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(symbol))
    }
}
