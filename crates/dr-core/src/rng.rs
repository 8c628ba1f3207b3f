//! Deterministic RNG wrapper for the engine.
//!
//! Fault injection (and the random graph generator) must be reproducible:
//! the same seed over the same route always removes the same edge, which is
//! what makes reroute tests and demo runs repeatable.  `SmallRng` is fast
//! and non-cryptographic — exactly right for simulation randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded deterministic RNG used wherever the engine needs randomness.
pub struct EngineRng(SmallRng);

impl EngineRng {
    /// Seed deterministically.  The same seed always produces the same
    /// sequence of draws.
    pub fn new(seed: u64) -> Self {
        EngineRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `EngineRng` with a different seed offset — useful for
    /// giving each subsystem its own independent stream from one root seed.
    pub fn child(&mut self, offset: u64) -> EngineRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        EngineRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
