//! Host-level configuration.

use hw_core::ClockConfig;

use crate::{SimError, SimResult};

/// Top-level host configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Fixed-step and frame-clamp timing.
    pub clock: ClockConfig,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Radius of the sphere collider each agent uses against trigger volumes.
    pub collider_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            clock:           ClockConfig::default(),
            seed:            42,
            collider_radius: 0.5,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        self.clock.validate()?;
        if !(self.collider_radius.is_finite() && self.collider_radius >= 0.0) {
            return Err(SimError::Config(format!(
                "collider_radius must be finite and non-negative, got {}",
                self.collider_radius
            )));
        }
        Ok(())
    }
}
