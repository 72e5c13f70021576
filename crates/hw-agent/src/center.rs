//! The point an agent wanders around.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use hw_core::Vec3;

/// A world position owned by the host and shared with any number of agents.
///
/// The host moves the point by `set`ting the cell; agents only hold a
/// [`Weak`] to it and see the new position on their next wander move.
pub type SharedPoint = Rc<Cell<Vec3>>;

/// Where an agent's wander disk is centered.
#[derive(Clone, Debug)]
pub enum CenterRef {
    /// Anchor created by the agent itself at start.
    Owned(Vec3),
    /// Externally owned point.  Goes dead when the host drops it.
    Borrowed(Weak<Cell<Vec3>>),
}

impl CenterRef {
    pub fn borrowed(point: &SharedPoint) -> Self {
        CenterRef::Borrowed(Rc::downgrade(point))
    }

    /// Ground-level anchor directly beneath `start`.
    pub fn synthesize_below(start: Vec3) -> Self {
        CenterRef::Owned(Vec3::new(start.x, 0.0, start.z))
    }

    /// Current center position, or `None` if a borrowed point was dropped.
    pub fn position(&self) -> Option<Vec3> {
        match self {
            CenterRef::Owned(p)    => Some(*p),
            CenterRef::Borrowed(w) => w.upgrade().map(|p| p.get()),
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, CenterRef::Owned(_))
    }
}
