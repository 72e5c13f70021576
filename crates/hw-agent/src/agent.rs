//! The `WanderingAgent` behavior.

use hw_core::geo::{planar, planar_distance, yaw_facing};
use hw_core::{AgentId, Vec3};
use hw_tween::{Ease, LoopKind, Loops, Scheduler, TweenHandle, TweenProperty, TweenSpec, UpdateKind};
use log::{debug, info, warn};

use crate::{
    AgentContext, AgentError, AgentResult, CenterRef, Color, Dropping, GizmoSink, SharedPoint,
    TickOutcome, WanderConfig, WanderMove, ZoneTracker,
};

/// Log target for the agent's user-facing event messages.
pub const LOG_TARGET: &str = "hw_agent::robot";

/// Seconds the agent takes to turn toward a new wander target.
pub const TURN_DURATION: f32 = 0.2;

/// Where an agent is in its life.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Destroyed,
}

/// A hovering agent that wanders to random points around a center,
/// periodically drops something, and remembers which trigger zone it is in.
///
/// # Animation handles
///
/// At most one hover tween and one move tween (plus the short turn that
/// accompanies it) are alive at any time.  Starting a new one cancels the
/// previous one of the same kind first.
pub struct WanderingAgent {
    id:             AgentId,
    config:         WanderConfig,
    center:         Option<CenterRef>,
    lifecycle:      Lifecycle,

    start_position: Vec3,
    base_height:    f32,

    hover:          Option<TweenHandle>,
    motion:         Option<TweenHandle>,
    turn:           Option<TweenHandle>,

    next_move_at:   f64,
    next_poop_at:   f64,

    zone:           ZoneTracker,
}

impl WanderingAgent {
    /// Create an agent with a validated configuration and no center.
    ///
    /// Without [`with_center`](Self::with_center) the agent synthesizes a
    /// ground-level center beneath its start position when it starts.
    pub fn new(id: AgentId, config: WanderConfig) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self {
            id,
            config,
            center:         None,
            lifecycle:      Lifecycle::Created,
            start_position: Vec3::ZERO,
            base_height:    0.0,
            hover:          None,
            motion:         None,
            turn:           None,
            next_move_at:   0.0,
            next_poop_at:   0.0,
            zone:           ZoneTracker::new(),
        })
    }

    /// Wander around an externally owned point instead of a synthetic one.
    pub fn with_center(mut self, point: &SharedPoint) -> Self {
        self.center = Some(CenterRef::borrowed(point));
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    #[inline]
    pub fn center(&self) -> Option<&CenterRef> {
        self.center.as_ref()
    }

    #[inline]
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    #[inline]
    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    #[inline]
    pub fn hover_handle(&self) -> Option<TweenHandle> {
        self.hover
    }

    #[inline]
    pub fn move_handle(&self) -> Option<TweenHandle> {
        self.motion
    }

    #[inline]
    pub fn turn_handle(&self) -> Option<TweenHandle> {
        self.turn
    }

    #[inline]
    pub fn next_move_at(&self) -> f64 {
        self.next_move_at
    }

    #[inline]
    pub fn next_poop_at(&self) -> f64 {
        self.next_poop_at
    }

    /// Name of the tracked trigger zone; empty when outside all of them.
    #[inline]
    pub fn current_zone(&self) -> &str {
        self.zone.current()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Capture the start pose, resolve the center, and kick off hovering,
    /// the first wander move, and the first drop timer.
    pub fn start(&mut self, ctx: &mut AgentContext<'_>) -> AgentResult<Option<WanderMove>> {
        if self.lifecycle != Lifecycle::Created {
            return Err(AgentError::AlreadyStarted(self.id));
        }
        self.lifecycle = Lifecycle::Running;

        self.start_position = ctx.transform.position;
        self.base_height = self.start_position.y;

        let live = self.center.as_ref().and_then(CenterRef::position).is_some();
        if !live {
            let anchor = CenterRef::synthesize_below(self.start_position);
            debug!("{} synthesized wander center at {:?}", self.id, anchor.position());
            self.center = Some(anchor);
        }

        self.start_hover_effect(ctx)?;
        let first = self.move_to_new_position(ctx)?;
        self.schedule_next_poop(ctx);
        Ok(first)
    }

    /// Run whichever timed behaviors are due at `ctx.now`.
    ///
    /// A timer that is overdue by several intervals fires once; no catch-up.
    pub fn update(&mut self, ctx: &mut AgentContext<'_>) -> AgentResult<TickOutcome> {
        let mut outcome = TickOutcome::default();
        if !self.is_running() {
            return Ok(outcome);
        }

        if ctx.now >= self.next_move_at {
            outcome.moved = self.move_to_new_position(ctx)?;
        }
        if ctx.now >= self.next_poop_at {
            outcome.dropped = Some(self.poop(ctx));
        }
        Ok(outcome)
    }

    /// Cancel every outstanding animation.  Safe to call more than once.
    pub fn on_destroy(&mut self, scheduler: &mut dyn Scheduler) {
        for handle in [self.hover.take(), self.motion.take(), self.turn.take()]
            .into_iter()
            .flatten()
        {
            scheduler.cancel(handle);
        }
        if self.lifecycle != Lifecycle::Destroyed {
            debug!("{} destroyed", self.id);
        }
        self.lifecycle = Lifecycle::Destroyed;
    }

    // ── Hover ─────────────────────────────────────────────────────────────

    /// (Re)start the endless hover between the base height and
    /// `base_height + hover_amplitude`, on the fixed-step clock.
    ///
    /// The new hover picks up at the phase matching the current height, so
    /// a restart mid-hover does not jump.
    pub fn start_hover_effect(&mut self, ctx: &mut AgentContext<'_>) -> AgentResult<()> {
        let base = self.base_height;
        let top = base + self.config.hover_amplitude;
        let half_period = self.config.hover_half_period();

        let y = ctx.transform.position.y.clamp(base.min(top), base.max(top));
        let progress = if top != base { (y - base) / (top - base) } else { 0.0 };
        let ease = Ease::InOutSine;

        let spec = TweenSpec::new(TweenProperty::Height { from: base, to: top }, half_period)
            .with_ease(ease)
            .with_update(UpdateKind::Fixed)
            .with_loops(Loops::Infinite(LoopKind::Yoyo))
            .starting_at(ease.invert(progress) * half_period);
        spec.validate()?;

        if let Some(old) = self.hover.take() {
            ctx.scheduler.cancel(old);
        }
        self.hover = Some(ctx.scheduler.schedule_interval(self.id, spec, LoopKind::Yoyo)?);
        Ok(())
    }

    /// Change hover amplitude and frequency, then restart the hover so the
    /// new values take effect immediately.
    pub fn update_hover_parameters(
        &mut self,
        amplitude: f32,
        frequency: f32,
        ctx:       &mut AgentContext<'_>,
    ) -> AgentResult<()> {
        let config = WanderConfig {
            hover_amplitude: amplitude,
            hover_frequency: frequency,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;

        if self.is_running() {
            self.start_hover_effect(ctx)?;
        }
        Ok(())
    }

    // ── Wander ────────────────────────────────────────────────────────────

    /// Pick a random point in the wander disk and glide to it at constant
    /// planar speed, turning to face it.
    ///
    /// Returns `None` when the borrowed center has been dropped by its
    /// owner; the move is skipped but the next one is still scheduled.
    /// A move whose duration is unusable fails before touching the running
    /// move or the timer.
    pub fn move_to_new_position(
        &mut self,
        ctx: &mut AgentContext<'_>,
    ) -> AgentResult<Option<WanderMove>> {
        let Some(center) = self.center.as_ref().and_then(CenterRef::position) else {
            self.cancel_move(ctx.scheduler);
            self.next_move_at = ctx.now + self.config.move_interval as f64;
            warn!("{} has no wander center; skipping move", self.id);
            return Ok(None);
        };

        let current = ctx.transform.position;
        let offset = ctx.rng.inside_unit_circle() * self.config.move_radius;
        let target = Vec3::new(center.x + offset.x, current.y, center.z + offset.y);

        let duration = planar_distance(current, target) / self.config.move_speed;
        let glide = TweenSpec::new(
            TweenProperty::Planar { from: planar(current), to: planar(target) },
            duration,
        )
        .with_ease(Ease::InOutSine);
        glide.validate()?;

        let facing = yaw_facing(target - current);
        let turn = facing.map(|facing| {
            TweenSpec::new(
                TweenProperty::Rotation { from: ctx.transform.rotation, to: facing },
                TURN_DURATION,
            )
        });

        self.cancel_move(ctx.scheduler);
        self.next_move_at = ctx.now + self.config.move_interval as f64;

        self.motion = Some(ctx.scheduler.schedule_once(self.id, glide)?);
        if let Some(turn) = turn {
            self.turn = Some(ctx.scheduler.schedule_once(self.id, turn)?);
        }

        debug!("{} wandering to {target} over {duration:.2}s", self.id);
        Ok(Some(WanderMove { target, duration, facing }))
    }

    fn cancel_move(&mut self, scheduler: &mut dyn Scheduler) {
        for handle in [self.motion.take(), self.turn.take()].into_iter().flatten() {
            scheduler.cancel(handle);
        }
    }

    // ── Dropping ──────────────────────────────────────────────────────────

    /// Log a drop in the current zone (or outside all zones) and schedule
    /// the next one.
    pub fn poop(&mut self, ctx: &mut AgentContext<'_>) -> Dropping {
        let dropping = if self.zone.is_inside() {
            Dropping::InZone(self.zone.current().to_owned())
        } else {
            Dropping::Outside
        };
        info!(target: LOG_TARGET, "{dropping}");

        self.schedule_next_poop(ctx);
        dropping
    }

    /// Set the drop timer to `now` plus a fresh draw from
    /// `[min_poop_interval, max_poop_interval]`.
    pub fn schedule_next_poop(&mut self, ctx: &mut AgentContext<'_>) {
        let wait = ctx
            .rng
            .range_inclusive(self.config.min_poop_interval, self.config.max_poop_interval);
        self.next_poop_at = ctx.now + wait as f64;
    }

    // ── Trigger zones ─────────────────────────────────────────────────────

    pub fn on_trigger_enter(&mut self, zone: &str) {
        self.zone.enter(zone);
        info!(target: LOG_TARGET, "Entered cube: {zone}");
    }

    pub fn on_trigger_exit(&mut self, zone: &str) {
        info!(target: LOG_TARGET, "Exited cube: {zone}");
        self.zone.exit(zone);
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Outline the wander disk as a wire sphere around the center.
    pub fn draw_gizmos_selected(&self, gizmos: &mut dyn GizmoSink) {
        if let Some(center) = self.center.as_ref().and_then(CenterRef::position) {
            gizmos.wire_sphere(center, self.config.move_radius, Color::YELLOW);
        }
    }
}
