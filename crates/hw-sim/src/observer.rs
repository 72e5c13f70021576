//! Observer trait for progress reporting and event collection.

use hw_agent::{Dropping, WanderMove};
use hw_core::AgentId;

/// Callbacks invoked by [`Sim`][crate::Sim] as agents act.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — drop counter
///
/// ```rust,ignore
/// struct DropCounter { in_zone: usize, outside: usize }
///
/// impl SimObserver for DropCounter {
///     fn on_drop(&mut self, _agent: AgentId, dropping: &Dropping) {
///         match dropping {
///             Dropping::InZone(_) => self.in_zone += 1,
///             Dropping::Outside   => self.outside += 1,
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each frame, before the clock advances.
    fn on_frame_start(&mut self, _frame: u64, _now: f64) {}

    /// Called after all of a frame's work is done.
    fn on_frame_end(&mut self, _frame: u64, _now: f64) {}

    /// An agent issued a wander move (including the first one at start).
    fn on_wander(&mut self, _agent: AgentId, _mv: &WanderMove) {}

    /// An agent's drop timer fired.
    fn on_drop(&mut self, _agent: AgentId, _dropping: &Dropping) {}

    /// An agent's collider started overlapping a trigger volume.
    fn on_zone_enter(&mut self, _agent: AgentId, _zone: &str) {}

    /// An agent's collider stopped overlapping a trigger volume.
    fn on_zone_exit(&mut self, _agent: AgentId, _zone: &str) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
