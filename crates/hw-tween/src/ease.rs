//! Easing curves.

use std::f32::consts::PI;

/// Maps linear progress `t ∈ [0, 1]` onto eased progress.
///
/// Every curve here satisfies `f(0) = 0`, `f(1) = 1` and stays within
/// `[0, 1]` in between, so an eased value never overshoots its endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ease {
    Linear,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    #[default]
    OutQuad,
    InOutQuad,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear    => t,
            Ease::InSine    => 1.0 - (t * PI * 0.5).cos(),
            Ease::OutSine   => (t * PI * 0.5).sin(),
            Ease::InOutSine => -0.5 * ((PI * t).cos() - 1.0),
            Ease::InQuad    => t * t,
            Ease::OutQuad   => -t * (t - 2.0),
            Ease::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
        .clamp(0.0, 1.0)
    }

    /// Linear progress at which this curve reaches eased progress `e`.
    ///
    /// Inverse of [`apply`](Self::apply) on `[0, 1]`; `e` is clamped first.
    pub fn invert(self, e: f32) -> f32 {
        let e = e.clamp(0.0, 1.0);
        match self {
            Ease::Linear    => e,
            Ease::InSine    => (1.0 - e).acos() * 2.0 / PI,
            Ease::OutSine   => e.asin() * 2.0 / PI,
            Ease::InOutSine => (1.0 - 2.0 * e).clamp(-1.0, 1.0).acos() / PI,
            Ease::InQuad    => e.sqrt(),
            Ease::OutQuad   => 1.0 - (1.0 - e).sqrt(),
            Ease::InOutQuad => {
                if e < 0.5 {
                    (e * 0.5).sqrt()
                } else {
                    1.0 - ((1.0 - e) * 2.0).sqrt() * 0.5
                }
            }
        }
        .clamp(0.0, 1.0)
    }
}
