//! `hw-agent` — a hovering agent that wanders around a center point.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`agent`]   | `WanderingAgent`, `Lifecycle`                                   |
//! | [`config`]  | `WanderConfig` (hover, wander, and drop timing parameters)      |
//! | [`center`]  | `CenterRef` — owned or borrowed wander center                   |
//! | [`zone`]    | `ZoneTracker` — last-entered trigger zone                       |
//! | [`context`] | `AgentContext<'a>` — clock, transform, RNG, and scheduler       |
//! | [`event`]   | `WanderMove`, `Dropping`, `TickOutcome`                         |
//! | [`gizmos`]  | `GizmoSink` trait, `GizmoRecorder`, `Color`                     |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                  |
//!
//! # Host contract
//!
//! The host calls [`WanderingAgent::start`] once, then
//! [`WanderingAgent::update`] every frame, and forwards trigger overlaps to
//! [`WanderingAgent::on_trigger_enter`] / [`WanderingAgent::on_trigger_exit`].
//! Every call that needs time, randomness, or animation receives them
//! through [`AgentContext`]; the agent never reaches for globals.

pub mod agent;
pub mod center;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod gizmos;
pub mod zone;


pub use agent::{Lifecycle, WanderingAgent};
pub use center::{CenterRef, SharedPoint};
pub use config::WanderConfig;
pub use context::AgentContext;
pub use error::{AgentError, AgentResult};
pub use event::{Dropping, TickOutcome, WanderMove};
pub use gizmos::{Color, GizmoRecorder, GizmoShape, GizmoSink};
pub use zone::ZoneTracker;
