//! Tween descriptors and their sampling rules.

use hw_core::geo::from_planar;
use hw_core::{Quat, Transform, Vec2};

use crate::{Ease, TweenError, TweenResult};

/// Which host clock advances a tween.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateKind {
    /// Once per rendered frame, by the variable frame delta.
    #[default]
    Frame,
    /// Once per fixed step, by the fixed delta.
    Fixed,
}

/// How a looping tween starts its next cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopKind {
    /// Jump back to the start value.
    Restart,
    /// Play the previous cycle backwards.
    Yoyo,
}

/// How many cycles a tween runs for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Loops {
    #[default]
    Once,
    Count(u32, LoopKind),
    Infinite(LoopKind),
}

/// The transform property a tween drives, with its start and end values.
///
/// Start values are captured by the caller at scheduling time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TweenProperty {
    /// `position.y` only.
    Height { from: f32, to: f32 },
    /// `position.x` and `position.z`; height is left to other tweens.
    Planar { from: Vec2, to: Vec2 },
    /// Full rotation, spherically interpolated.
    Rotation { from: Quat, to: Quat },
}

impl TweenProperty {
    /// Write the value at eased progress `e` into `transform`.
    pub fn apply(&self, e: f32, transform: &mut Transform) {
        match *self {
            TweenProperty::Height { from, to } => {
                transform.position.y = from + (to - from) * e;
            }
            TweenProperty::Planar { from, to } => {
                let p = from.lerp(to, e);
                transform.position = from_planar(p, transform.position.y);
            }
            TweenProperty::Rotation { from, to } => {
                transform.rotation = from.slerp(to, e).normalize();
            }
        }
    }
}

/// A tween request: what to animate, for how long, and how.
///
/// Defaults mirror a plain one-shot: `Ease::OutQuad`, `Loops::Once`,
/// advanced on the frame clock, starting from its first value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenSpec {
    pub property: TweenProperty,
    /// Seconds per cycle.
    pub duration: f32,
    pub ease:     Ease,
    pub loops:    Loops,
    pub update:   UpdateKind,
    /// Seconds of playback treated as already elapsed when scheduled.
    pub start_at: f32,
}

impl TweenSpec {
    pub fn new(property: TweenProperty, duration: f32) -> Self {
        Self {
            property,
            duration,
            ease:     Ease::default(),
            loops:    Loops::default(),
            update:   UpdateKind::default(),
            start_at: 0.0,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_loops(mut self, loops: Loops) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_update(mut self, update: UpdateKind) -> Self {
        self.update = update;
        self
    }

    /// Begin playback `seconds` in, as if that much time had already passed.
    pub fn starting_at(mut self, seconds: f32) -> Self {
        self.start_at = seconds;
        self
    }

    /// Length of one full repeat of an endless tween; `None` for finite ones.
    ///
    /// A yoyo repeats every two cycles, a restart every cycle.
    pub fn loop_period(&self) -> Option<f32> {
        match self.loops {
            Loops::Infinite(LoopKind::Yoyo)    => Some(self.duration * 2.0),
            Loops::Infinite(LoopKind::Restart) => Some(self.duration),
            _ => None,
        }
    }

    pub fn validate(&self) -> TweenResult<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(TweenError::InvalidDuration(self.duration));
        }
        if self.duration == 0.0 && matches!(self.loops, Loops::Infinite(_)) {
            return Err(TweenError::ZeroLengthLoop);
        }
        if !(self.start_at.is_finite() && self.start_at >= 0.0) {
            return Err(TweenError::InvalidStart(self.start_at));
        }
        Ok(())
    }

    /// Eased progress after `elapsed` seconds, and whether the tween is done.
    ///
    /// Finished tweens report the progress of their final frame, so applying
    /// it lands exactly on the end value of the last cycle.
    pub fn sample(&self, elapsed: f32) -> (f32, bool) {
        let total = match self.loops {
            Loops::Once           => Some(self.duration),
            Loops::Count(n, _)    => Some(self.duration * n.max(1) as f32),
            Loops::Infinite(_)    => None,
        };

        if let Some(total) = total {
            if elapsed >= total {
                let last = match self.loops {
                    Loops::Count(n, LoopKind::Yoyo) if n.max(1) % 2 == 0 => 0.0,
                    _ => 1.0,
                };
                return (self.ease.apply(last), true);
            }
        }

        let cycles = elapsed / self.duration;
        let cycle = cycles.floor();
        let mut t = cycles - cycle;
        let yoyo = matches!(
            self.loops,
            Loops::Count(_, LoopKind::Yoyo) | Loops::Infinite(LoopKind::Yoyo)
        );
        if yoyo && (cycle as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        (self.ease.apply(t), false)
    }
}
