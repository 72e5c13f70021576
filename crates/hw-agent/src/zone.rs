//! Trigger-zone membership.

/// Name of the trigger zone an agent most recently entered.
///
/// No stack is kept: entering a second zone while still inside the first
/// replaces it, and leaving the first afterwards does not clear the second.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneTracker {
    current: String,
}

impl ZoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the tracked zone; empty when outside every tracked zone.
    #[inline]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        !self.current.is_empty()
    }

    /// Track `name` unconditionally.
    pub fn enter(&mut self, name: &str) {
        self.current.clear();
        self.current.push_str(name);
    }

    /// Stop tracking `name` if it is the tracked zone.
    ///
    /// Returns `true` if tracking was cleared.
    pub fn exit(&mut self, name: &str) -> bool {
        if self.current == name {
            self.current.clear();
            true
        } else {
            false
        }
    }
}
