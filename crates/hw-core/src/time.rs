//! Host frame clock.
//!
//! # Design
//!
//! The host advances time once per rendered frame by a variable `delta`.
//! Some work (hover tweens, trigger detection) must instead run at a fixed
//! rate so it stays smooth when the frame rate fluctuates.  `FrameClock`
//! tracks both:
//!
//!   time        += min(delta, maximum_delta)
//!   fixed steps  = how many `fixed_delta` boundaries `time` crossed
//!
//! `time` is `f64` seconds so timers set hours into a session still compare
//! exactly against the clock; per-frame deltas and durations stay `f32`.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── ClockConfig ───────────────────────────────────────────────────────────────

/// Timing parameters for a [`FrameClock`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Seconds per fixed step.  Default: 0.02 (50 Hz).
    pub fixed_delta: f32,

    /// Longest frame delta the clock accepts; longer frames are clamped so a
    /// stall does not trigger a burst of fixed steps.  Default: 1/3 s.
    pub maximum_delta: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fixed_delta:   0.02,
            maximum_delta: 1.0 / 3.0,
        }
    }
}

impl ClockConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.fixed_delta.is_finite() && self.fixed_delta > 0.0) {
            return Err(CoreError::Config(format!(
                "fixed_delta must be positive, got {}",
                self.fixed_delta
            )));
        }
        if !(self.maximum_delta.is_finite() && self.maximum_delta >= self.fixed_delta) {
            return Err(CoreError::Config(format!(
                "maximum_delta must be at least fixed_delta ({}), got {}",
                self.fixed_delta, self.maximum_delta
            )));
        }
        Ok(())
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Monotonic host clock with a fixed-step accumulator.
#[derive(Clone, Debug)]
pub struct FrameClock {
    config:     ClockConfig,
    time:       f64,
    delta:      f32,
    fixed_time: f64,
    frame:      u64,
}

impl FrameClock {
    pub fn new(config: ClockConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            time:       0.0,
            delta:      0.0,
            fixed_time: 0.0,
            frame:      0,
        })
    }

    /// Advance by one frame of `delta` seconds.
    ///
    /// Returns the number of fixed steps that became due during this frame.
    /// The caller runs its fixed-rate work that many times, each with
    /// [`fixed_delta`](Self::fixed_delta).
    pub fn advance(&mut self, delta: f32) -> CoreResult<u32> {
        if !(delta.is_finite() && delta >= 0.0) {
            return Err(CoreError::InvalidDelta(delta));
        }
        let delta = delta.min(self.config.maximum_delta);
        self.delta = delta;
        self.time += delta as f64;
        self.frame += 1;

        let step = self.config.fixed_delta as f64;
        let mut steps = 0;
        while self.fixed_time + step <= self.time {
            self.fixed_time += step;
            steps += 1;
        }
        Ok(steps)
    }

    /// Seconds since the clock started.  Never decreases.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Delta applied by the most recent [`advance`](Self::advance).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    #[inline]
    pub fn fixed_delta(&self) -> f32 {
        self.config.fixed_delta
    }

    /// Number of frames advanced so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} @ {:.3}s", self.frame, self.time)
    }
}
