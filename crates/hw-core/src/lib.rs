//! `hw-core` — foundational types for the hoverwander agent workspace.
//!
//! This crate is a dependency of every other `hw-*` crate.  It has no `hw-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TweenId`                                  |
//! | [`geo`]         | `Vec2`/`Vec3`/`Quat` re-exports, planar helpers       |
//! | [`time`]        | `FrameClock`, `ClockConfig`                           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`transform`]   | `Transform` (position + rotation)                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transform;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Quat, Vec2, Vec3};
pub use ids::{AgentId, TweenId};
pub use rng::{AgentRng, SimRng};
pub use time::{ClockConfig, FrameClock};
pub use transform::Transform;
