//! The capability behaviors use to request and cancel tweens.

use hw_core::{AgentId, TweenId};

use crate::{LoopKind, TweenResult, TweenSpec};

/// Cancellable reference to a scheduled tween.
///
/// Holding a handle does not keep the tween alive; once it completes or is
/// cancelled the handle simply goes stale and `cancel` becomes a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenHandle(pub TweenId);

impl TweenHandle {
    #[inline]
    pub fn id(self) -> TweenId {
        self.0
    }
}

/// Tween scheduling as seen from a behavior.
///
/// [`TweenEngine`][crate::TweenEngine] is the production implementation;
/// tests substitute recorders to inspect exactly what was requested.
pub trait Scheduler {
    /// Run `spec` for a single cycle, overriding `spec.loops`.
    fn schedule_once(&mut self, owner: AgentId, spec: TweenSpec) -> TweenResult<TweenHandle>;

    /// Run `spec` forever, cycling with `kind`, overriding `spec.loops`.
    fn schedule_interval(
        &mut self,
        owner: AgentId,
        spec:  TweenSpec,
        kind:  LoopKind,
    ) -> TweenResult<TweenHandle>;

    /// Stop the tween immediately, leaving the property at its current value.
    ///
    /// Returns `false` if the handle was already completed or cancelled.
    fn cancel(&mut self, handle: TweenHandle) -> bool;

    /// `true` while the tween is still being advanced.
    fn is_active(&self, handle: TweenHandle) -> bool;
}
