//! The `Sim` struct and its frame loop.

use hw_agent::{AgentContext, GizmoSink, Lifecycle, WanderingAgent};
use hw_core::{AgentId, AgentRng, FrameClock, Transform};
use hw_tween::{TweenEngine, UpdateKind};
use log::debug;

use crate::{SimConfig, SimError, SimObserver, SimResult, TriggerEvent, TriggerTracker, TriggerVolume};

/// The host that owns every agent and the services they consume.
///
/// Per-agent state is kept in parallel `Vec`s indexed by `AgentId`:
/// `agents[i]`, `transforms[i]`, and `rngs[i]` all belong to `AgentId(i)`.
/// Keeping transforms outside the agents lets the tween engine write them
/// while agents are borrowed elsewhere.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Host configuration (clock timing, seed, collider radius).
    pub config: SimConfig,

    /// Frame clock with fixed-step accumulator.
    pub clock: FrameClock,

    /// The behaviors, one per agent.
    pub agents: Vec<WanderingAgent>,

    /// World transforms, written by `tweens`.
    pub transforms: Vec<Transform>,

    /// Per-agent deterministic RNGs.
    pub rngs: Vec<AgentRng>,

    /// Every running hover, glide, and turn.
    pub tweens: TweenEngine,

    /// Trigger volumes agents can enter and exit.
    pub zones: Vec<TriggerVolume>,

    /// Last-known overlaps between agents and `zones`.
    pub triggers: TriggerTracker,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Start every agent that has not been started yet.
    pub fn start<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.time();
        for (i, agent) in self.agents.iter_mut().enumerate() {
            if agent.lifecycle() != Lifecycle::Created {
                continue;
            }
            let mut ctx = AgentContext::new(
                now,
                self.transforms[i],
                &mut self.rngs[i],
                &mut self.tweens,
            );
            if let Some(mv) = agent.start(&mut ctx)? {
                observer.on_wander(agent.id(), &mv);
            }
        }
        debug!("started {} agent(s) at {:.3}s", self.agents.len(), now);
        Ok(())
    }

    /// Advance one frame of `delta` seconds.
    pub fn step<O: SimObserver>(&mut self, delta: f32, observer: &mut O) -> SimResult<()> {
        let frame = self.clock.frame();
        observer.on_frame_start(frame, self.clock.time());

        let fixed_steps = self.clock.advance(delta)?;
        let fixed_delta = self.clock.fixed_delta();
        for _ in 0..fixed_steps {
            self.tweens.advance(UpdateKind::Fixed, fixed_delta, &mut self.transforms);
            self.detect_triggers(observer);
        }

        let now = self.clock.time();
        for (i, agent) in self.agents.iter_mut().enumerate() {
            if !agent.is_running() {
                continue;
            }
            let mut ctx = AgentContext::new(
                now,
                self.transforms[i],
                &mut self.rngs[i],
                &mut self.tweens,
            );
            let outcome = agent.update(&mut ctx)?;
            if let Some(mv) = &outcome.moved {
                observer.on_wander(agent.id(), mv);
            }
            if let Some(dropping) = &outcome.dropped {
                observer.on_drop(agent.id(), dropping);
            }
        }

        self.tweens.advance(UpdateKind::Frame, self.clock.delta(), &mut self.transforms);

        observer.on_frame_end(frame, now);
        Ok(())
    }

    /// Run exactly `n` frames of `delta` seconds each.
    pub fn run_frames<O: SimObserver>(
        &mut self,
        n:        u64,
        delta:    f32,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            self.step(delta, observer)?;
        }
        Ok(())
    }

    /// Tear down one agent: its animations are cancelled and its trigger
    /// overlaps forgotten without exit notifications.
    pub fn destroy(&mut self, agent: AgentId) -> SimResult<()> {
        let behavior = self
            .agents
            .get_mut(agent.index())
            .ok_or(SimError::UnknownAgent(agent))?;
        behavior.on_destroy(&mut self.tweens);
        self.triggers.forget(agent);
        Ok(())
    }

    /// Destroy every agent.
    pub fn shutdown(&mut self) {
        for agent in self.agents.iter_mut() {
            agent.on_destroy(&mut self.tweens);
            self.triggers.forget(agent.id());
        }
    }

    /// Change one agent's hover and restart it.
    pub fn update_hover_parameters(
        &mut self,
        agent:     AgentId,
        amplitude: f32,
        frequency: f32,
    ) -> SimResult<()> {
        let i = agent.index();
        let behavior = self.agents.get_mut(i).ok_or(SimError::UnknownAgent(agent))?;
        let mut ctx = AgentContext::new(
            self.clock.time(),
            self.transforms[i],
            &mut self.rngs[i],
            &mut self.tweens,
        );
        behavior.update_hover_parameters(amplitude, frequency, &mut ctx)?;
        Ok(())
    }

    /// Draw the selected agent's diagnostic gizmos into `gizmos`.
    pub fn draw_gizmos_selected(&self, agent: AgentId, gizmos: &mut dyn GizmoSink) -> SimResult<()> {
        self.agent(agent)
            .ok_or(SimError::UnknownAgent(agent))?
            .draw_gizmos_selected(gizmos);
        Ok(())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn agent(&self, agent: AgentId) -> Option<&WanderingAgent> {
        self.agents.get(agent.index())
    }

    pub fn transform(&self, agent: AgentId) -> Option<&Transform> {
        self.transforms.get(agent.index())
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(WanderingAgent::id)
    }

    // ── Trigger dispatch ──────────────────────────────────────────────────

    /// Diff every running agent's collider against the zones and forward
    /// the changes to the agent and the observer.
    fn detect_triggers<O: SimObserver>(&mut self, observer: &mut O) {
        let radius = self.config.collider_radius;
        for (i, agent) in self.agents.iter_mut().enumerate() {
            if !agent.is_running() {
                continue;
            }
            let position = self.transforms[i].position;
            for event in self.triggers.detect(agent.id(), position, radius, &self.zones) {
                match event {
                    TriggerEvent::Enter(v) => {
                        let zone = &self.zones[v].name;
                        agent.on_trigger_enter(zone);
                        observer.on_zone_enter(agent.id(), zone);
                    }
                    TriggerEvent::Exit(v) => {
                        let zone = &self.zones[v].name;
                        agent.on_trigger_exit(zone);
                        observer.on_zone_exit(agent.id(), zone);
                    }
                }
            }
        }
    }
}
