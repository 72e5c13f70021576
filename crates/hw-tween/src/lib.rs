//! `hw-tween` — the animation engine agents drive their transforms through.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`ease`]      | `Ease` curves                                                 |
//! | [`tween`]     | `TweenSpec`, `TweenProperty`, `Loops`, `LoopKind`, `UpdateKind` |
//! | [`scheduler`] | `Scheduler` trait, `TweenHandle`                              |
//! | [`engine`]    | `TweenEngine` — the concrete scheduler                        |
//! | [`error`]     | `TweenError`, `TweenResult<T>`                                |
//!
//! # Model
//!
//! A tween interpolates one property of one agent's [`Transform`] from a
//! start value to an end value over `duration` seconds.  Behaviors only see
//! the [`Scheduler`] trait: they request a tween and get back a handle they
//! can cancel later.  The host owns the [`TweenEngine`] and advances it once
//! per fixed step (`UpdateKind::Fixed`) and once per frame
//! (`UpdateKind::Frame`), handing it the transform slice to write into.
//!
//! [`Transform`]: hw_core::Transform

pub mod ease;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod tween;


pub use ease::Ease;
pub use engine::TweenEngine;
pub use error::{TweenError, TweenResult};
pub use scheduler::{Scheduler, TweenHandle};
pub use tween::{LoopKind, Loops, TweenProperty, TweenSpec, UpdateKind};
