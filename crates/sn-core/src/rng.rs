//! Deterministic per-agent and world-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Wander jitter of one snake never depends on how many other snakes drew
//!   random numbers earlier in the tick.
//! - Spawning or eating an agent does not disturb the streams of the others,
//!   so a replay with the same seed and the same cursor path is identical.
//!
//! World-level randomness (spawn points, obstacle radii, snake lengths) comes
//! from a single [`SimRng`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, stored next to the agent it drives.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ agent.raw().wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
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

    /// Uniform value in `[-half_width, half_width)`; `0.0` when the width is
    /// not positive, so a zero jitter is legal configuration.
    #[inline]
    pub fn symmetric(&mut self, half_width: f32) -> f32 {
        if half_width > 0.0 {
            self.0.gen_range(-half_width..half_width)
        } else {
            0.0
        }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// World-level RNG for spawning and level population.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
