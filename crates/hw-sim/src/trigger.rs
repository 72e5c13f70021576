//! Trigger volumes and overlap tracking.
//!
//! Volumes are axis-aligned boxes; each agent is a sphere.  Nothing is
//! pushed apart: volumes only report when an agent starts or stops
//! overlapping them.

use std::collections::BTreeSet;

use hw_core::{AgentId, Vec3};

/// A named axis-aligned box that reports overlaps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerVolume {
    pub name: String,
    pub min:  Vec3,
    pub max:  Vec3,
}

impl TriggerVolume {
    /// Box spanning `a` and `b` (any two opposite corners).
    pub fn new(name: impl Into<String>, a: Vec3, b: Vec3) -> Self {
        Self { name: name.into(), min: a.min(b), max: a.max(b) }
    }

    /// Cube of edge length `size` centered on `center`.
    pub fn cube(name: impl Into<String>, center: Vec3, size: f32) -> Self {
        let half = Vec3::splat(size.abs() * 0.5);
        Self::new(name, center - half, center + half)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// `true` if a sphere at `center` with `radius` touches the box.
    pub fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        closest.distance_squared(center) <= radius * radius
    }
}

/// A change in overlap between one agent and one volume.
///
/// The payload is the volume's index in the slice passed to
/// [`TriggerTracker::detect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter(usize),
    Exit(usize),
}

/// Remembers which volumes each agent overlapped last step and reports the
/// difference.
#[derive(Clone, Debug, Default)]
pub struct TriggerTracker {
    overlaps: Vec<BTreeSet<usize>>,
}

impl TriggerTracker {
    pub fn new(agent_count: usize) -> Self {
        Self { overlaps: vec![BTreeSet::new(); agent_count] }
    }

    /// Compare `agent`'s current overlaps against the previous call.
    ///
    /// Exits are reported before enters, each in ascending volume order.
    pub fn detect(
        &mut self,
        agent:   AgentId,
        center:  Vec3,
        radius:  f32,
        volumes: &[TriggerVolume],
    ) -> Vec<TriggerEvent> {
        let Some(previous) = self.overlaps.get_mut(agent.index()) else {
            return vec![];
        };
        let current: BTreeSet<usize> = volumes
            .iter()
            .enumerate()
            .filter(|(_, v)| v.overlaps_sphere(center, radius))
            .map(|(i, _)| i)
            .collect();

        let mut events: Vec<TriggerEvent> = previous
            .difference(&current)
            .map(|&i| TriggerEvent::Exit(i))
            .collect();
        events.extend(current.difference(previous).map(|&i| TriggerEvent::Enter(i)));

        *previous = current;
        events
    }

    /// Volumes `agent` overlapped at the last [`detect`](Self::detect).
    pub fn overlapping(&self, agent: AgentId) -> impl Iterator<Item = usize> + '_ {
        self.overlaps.get(agent.index()).into_iter().flatten().copied()
    }

    /// Forget `agent`'s overlaps without reporting exits.
    pub fn forget(&mut self, agent: AgentId) {
        if let Some(set) = self.overlaps.get_mut(agent.index()) {
            set.clear();
        }
    }
}
