//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents never share RNG state, and adding agents at the end of the list
//! does not disturb the draws of existing ones.

use std::f32::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform scalar in the closed interval `[min, max]`.
    ///
    /// `min == max` returns `min`.  Callers validate `min <= max` up front;
    /// reversed bounds are swapped rather than panicking mid-frame.
    #[inline]
    pub fn range_inclusive(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.0.gen_range(lo..=hi)
    }

    /// Uniform point inside the unit disk.
    ///
    /// Uses the polar form with `r = sqrt(u)` so area, not radius, is uniform.
    pub fn inside_unit_circle(&mut self) -> Vec2 {
        let r = self.0.r#gen::<f32>().sqrt();
        let theta = self.0.r#gen::<f32>() * TAU;
        Vec2::new(r * theta.cos(), r * theta.sin())
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for host-side decisions (spawn layout, scripted
/// events) that do not belong to any single agent.
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
