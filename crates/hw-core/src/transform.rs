//! Per-agent world transform.

use crate::{Quat, Vec3};

/// World position and rotation of one agent.
///
/// The host keeps one `Transform` per agent, indexed by `AgentId`.  Tweens
/// write into it; behaviors read a copy of it each frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn from_position(position: Vec3) -> Self {
        Self { position, rotation: Quat::IDENTITY }
    }

    /// Unit vector the transform is facing (`+Z` rotated by `rotation`).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}
