//! Host services handed to every agent callback.

use hw_core::{AgentRng, Transform};
use hw_tween::Scheduler;

/// Everything an agent callback may consult or drive during one call.
///
/// Built by the host for a single call and dropped afterwards.  `transform`
/// is a copy: agents never write their transform directly, they schedule
/// tweens that the host applies.
pub struct AgentContext<'a> {
    /// Host clock, seconds since start.
    pub now: f64,

    /// The agent's transform as of this call.
    pub transform: Transform,

    /// The agent's own deterministic RNG.
    pub rng: &'a mut AgentRng,

    /// Tween scheduling capability.
    pub scheduler: &'a mut dyn Scheduler,
}

impl<'a> AgentContext<'a> {
    #[inline]
    pub fn new(
        now:       f64,
        transform: Transform,
        rng:       &'a mut AgentRng,
        scheduler: &'a mut dyn Scheduler,
    ) -> Self {
        Self { now, transform, rng, scheduler }
    }
}
