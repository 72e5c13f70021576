//! `hw-sim` — the host frame loop that drives wandering agents.
//!
//! # Frame loop
//!
//! ```text
//! step(delta):
//!   ① Clock     — advance FrameClock; count fixed steps that became due.
//!   ② Fixed     — per fixed step: advance Fixed tweens (hover), then diff
//!                 trigger overlaps and dispatch enter/exit to agents.
//!   ③ Update    — WanderingAgent::update for every running agent
//!                 (wander moves, drops).
//!   ④ Frame     — advance Frame tweens (glide, turn) by the frame delta.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hw_agent::WanderConfig;
//! use hw_sim::{NoopObserver, SimBuilder, SimConfig, TriggerVolume};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .agent(WanderConfig::default())
//!     .initial_positions(vec![Vec3::new(0.0, 1.5, 0.0)])
//!     .zone(TriggerVolume::cube("Cube", Vec3::new(2.0, 1.0, 0.0), 3.0))
//!     .build()?;
//! sim.start(&mut NoopObserver)?;
//! sim.run_frames(600, 1.0 / 60.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trigger;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use trigger::{TriggerEvent, TriggerTracker, TriggerVolume};
