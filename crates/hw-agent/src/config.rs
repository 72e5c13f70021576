//! Per-agent tuning parameters.

use crate::{AgentError, AgentResult};

/// Hover, wander, and drop timing parameters for one [`WanderingAgent`].
///
/// Set once before the agent starts.  Hover amplitude and frequency can be
/// changed later through
/// [`WanderingAgent::update_hover_parameters`][crate::WanderingAgent::update_hover_parameters].
///
/// [`WanderingAgent`]: crate::WanderingAgent
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Height above the base height reached at the top of a hover.
    pub hover_amplitude: f32,

    /// Hover half-cycles per second.  Must be positive.
    pub hover_frequency: f32,

    /// Radius of the disk around the center that wander targets are drawn from.
    pub move_radius: f32,

    /// Seconds between wander moves.
    pub move_interval: f32,

    /// Planar speed in units per second.  Must be positive.
    pub move_speed: f32,

    /// Lower bound of the drop interval, seconds.
    pub min_poop_interval: f32,

    /// Upper bound of the drop interval, seconds.
    pub max_poop_interval: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            hover_amplitude:   0.5,
            hover_frequency:   1.0,
            move_radius:       5.0,
            move_interval:     3.0,
            move_speed:        2.0,
            min_poop_interval: 5.0,
            max_poop_interval: 15.0,
        }
    }
}

impl WanderConfig {
    pub fn validate(&self) -> AgentResult<()> {
        let fields = [
            ("hover_amplitude", self.hover_amplitude),
            ("hover_frequency", self.hover_frequency),
            ("move_radius", self.move_radius),
            ("move_interval", self.move_interval),
            ("move_speed", self.move_speed),
            ("min_poop_interval", self.min_poop_interval),
            ("max_poop_interval", self.max_poop_interval),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AgentError::Config(format!("{name} must be finite, got {value}")));
            }
        }

        if self.hover_frequency <= 0.0 {
            return Err(AgentError::Config(format!(
                "hover_frequency must be positive, got {}",
                self.hover_frequency
            )));
        }
        if self.move_speed <= 0.0 {
            return Err(AgentError::Config(format!(
                "move_speed must be positive, got {}",
                self.move_speed
            )));
        }
        if !self.hover_half_period().is_finite() {
            return Err(AgentError::Config(format!(
                "hover_frequency {} is too small to give a finite hover period",
                self.hover_frequency
            )));
        }
        if !(self.move_radius / self.move_speed).is_finite() {
            return Err(AgentError::Config(format!(
                "move_speed {} is too small to cross move_radius {} in finite time",
                self.move_speed, self.move_radius
            )));
        }
        if self.move_radius < 0.0 || self.move_interval < 0.0 || self.min_poop_interval < 0.0 {
            return Err(AgentError::Config(
                "move_radius, move_interval and min_poop_interval must be non-negative".into(),
            ));
        }
        if self.min_poop_interval > self.max_poop_interval {
            return Err(AgentError::Config(format!(
                "min_poop_interval ({}) exceeds max_poop_interval ({})",
                self.min_poop_interval, self.max_poop_interval
            )));
        }
        Ok(())
    }

    /// Seconds for one half of a hover cycle (base → top, or top → base).
    #[inline]
    pub fn hover_half_period(&self) -> f32 {
        1.0 / self.hover_frequency
    }
}
