//! Planar geometry helpers on top of `glam`.
//!
//! The world is Y-up.  "Planar" means the XZ ground plane: wandering,
//! distances, and facing all ignore the vertical axis so that hovering never
//! changes how far or which way an agent walks.

pub use glam::{Quat, Vec2, Vec3};

/// Project a world position onto the ground plane as `(x, z)`.
#[inline]
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Lift a ground-plane point back into the world at height `y`.
#[inline]
pub fn from_planar(p: Vec2, y: f32) -> Vec3 {
    Vec3::new(p.x, y, p.y)
}

/// Distance between two positions measured in the XZ plane only.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    planar(a).distance(planar(b))
}

/// Yaw-only rotation that makes `+Z` look along `direction`.
///
/// The vertical component of `direction` is discarded.  Returns `None` when
/// the flattened direction is exactly zero: there is no facing to turn to.
pub fn yaw_facing(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat == Vec3::ZERO {
        return None;
    }
    Some(Quat::from_rotation_y(flat.x.atan2(flat.z)))
}
