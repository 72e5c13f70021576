//! What an agent reports back to the host.

use std::fmt;

use hw_core::{Quat, Vec3};

/// A wander move that was just issued.
#[derive(Clone, Debug, PartialEq)]
pub struct WanderMove {
    /// Destination; its height equals the agent's height when the move began.
    pub target: Vec3,
    /// Seconds the planar move takes at the configured speed.
    pub duration: f32,
    /// Facing the agent turns to, or `None` when the target is directly
    /// above or below (zero planar displacement).
    pub facing: Option<Quat>,
}

/// Outcome of one drop event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dropping {
    InZone(String),
    Outside,
}

impl fmt::Display for Dropping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dropping::InZone(zone) => write!(f, "Robot pooped in {zone}!"),
            Dropping::Outside      => write!(f, "Robot pooped outside of any cube!"),
        }
    }
}

/// Which timed behaviors fired during one `update`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub moved:   Option<WanderMove>,
    pub dropped: Option<Dropping>,
}

impl TickOutcome {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.moved.is_none() && self.dropped.is_none()
    }
}
