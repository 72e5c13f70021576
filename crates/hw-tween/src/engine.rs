//! The concrete tween engine owned by the host.

use hw_core::{AgentId, Transform, TweenId};
use log::trace;

use crate::{LoopKind, Loops, Scheduler, TweenHandle, TweenResult, TweenSpec, UpdateKind};

/// One running tween.
struct ActiveTween {
    id:      TweenId,
    owner:   AgentId,
    spec:    TweenSpec,
    elapsed: f32,
}

/// Owns every running tween and advances them against a transform slice.
///
/// Tweens are kept in scheduling order, so when two tweens drive the same
/// property in one step the later request wins.
#[derive(Default)]
pub struct TweenEngine {
    active:  Vec<ActiveTween>,
    next_id: u64,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `spec` as given, including its `loops` setting.
    pub fn schedule(&mut self, owner: AgentId, spec: TweenSpec) -> TweenResult<TweenHandle> {
        spec.validate()?;
        let id = TweenId(self.next_id);
        self.next_id += 1;
        trace!("tween {id} scheduled for {owner}: {:?}", spec.property);
        self.active.push(ActiveTween { id, owner, spec, elapsed: spec.start_at });
        Ok(TweenHandle(id))
    }

    /// Advance every tween driven by `update` by `delta` seconds and write
    /// the new values into `transforms[owner]`.
    ///
    /// Returns the number of tweens that completed during this step.
    /// Tweens whose owner has no transform slot are dropped.
    pub fn advance(
        &mut self,
        update:     UpdateKind,
        delta:      f32,
        transforms: &mut [Transform],
    ) -> usize {
        let before = self.active.len();
        let mut completed = 0;

        self.active.retain_mut(|tween| {
            if tween.spec.update != update {
                return true;
            }
            let Some(transform) = transforms.get_mut(tween.owner.index()) else {
                return false;
            };
            tween.elapsed += delta;
            // Endless tweens never carry more than one period of elapsed time.
            if let Some(period) = tween.spec.loop_period() {
                tween.elapsed %= period;
            }
            let (e, done) = tween.spec.sample(tween.elapsed);
            tween.spec.property.apply(e, transform);
            if done {
                completed += 1;
            }
            !done
        });

        let dropped = before - self.active.len() - completed;
        if dropped > 0 {
            trace!("dropped {dropped} tween(s) with no transform slot");
        }
        completed
    }

    /// Number of running tweens across all owners.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of running tweens owned by `owner`.
    pub fn count_for(&self, owner: AgentId) -> usize {
        self.active.iter().filter(|t| t.owner == owner).count()
    }
}

impl Scheduler for TweenEngine {
    fn schedule_once(&mut self, owner: AgentId, spec: TweenSpec) -> TweenResult<TweenHandle> {
        self.schedule(owner, spec.with_loops(Loops::Once))
    }

    fn schedule_interval(
        &mut self,
        owner: AgentId,
        spec:  TweenSpec,
        kind:  LoopKind,
    ) -> TweenResult<TweenHandle> {
        self.schedule(owner, spec.with_loops(Loops::Infinite(kind)))
    }

    fn cancel(&mut self, handle: TweenHandle) -> bool {
        let Some(pos) = self.active.iter().position(|t| t.id == handle.id()) else {
            return false;
        };
        self.active.remove(pos);
        trace!("tween {} cancelled", handle.id());
        true
    }

    fn is_active(&self, handle: TweenHandle) -> bool {
        self.active.iter().any(|t| t.id == handle.id())
    }
}
