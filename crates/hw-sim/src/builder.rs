//! Fluent builder for constructing a [`Sim`].

use hw_agent::{SharedPoint, WanderConfig, WanderingAgent};
use hw_core::{AgentId, AgentRng, FrameClock, Transform, Vec3};
use hw_tween::TweenEngine;

use crate::{Sim, SimConfig, SimError, SimResult, TriggerTracker, TriggerVolume};

/// One agent waiting to be built.
struct AgentSeed {
    config: WanderConfig,
    center: Option<SharedPoint>,
}

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.agent(c)`              | No agents                        |
/// | `.initial_positions(v)`  | Every agent at the origin        |
/// | `.zone(z)` / `.zones(v)` | No trigger volumes               |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .agent(WanderConfig::default())
///     .agent_with_center(WanderConfig::default(), &pond)
///     .initial_positions(vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(8.0, 2.0, 8.0)])
///     .zones(zones)
///     .build()?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    agents:    Vec<AgentSeed>,
    positions: Option<Vec<Vec3>>,
    zones:     Vec<TriggerVolume>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            agents:    Vec::new(),
            positions: None,
            zones:     Vec::new(),
        }
    }

    /// Add an agent that synthesizes its own ground-level center at start.
    /// Agents get `AgentId`s in the order they are added.
    pub fn agent(mut self, config: WanderConfig) -> Self {
        self.agents.push(AgentSeed { config, center: None });
        self
    }

    /// Add an agent that wanders around a host-owned point.
    pub fn agent_with_center(mut self, config: WanderConfig, center: &SharedPoint) -> Self {
        self.agents.push(AgentSeed { config, center: Some(center.clone()) });
        self
    }

    /// Supply each agent's starting position (must match the agent count).
    pub fn initial_positions(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn zone(mut self, zone: TriggerVolume) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn zones(mut self, zones: impl IntoIterator<Item = TriggerVolume>) -> Self {
        self.zones.extend(zones);
        self
    }

    /// Validate inputs and return a [`Sim`] whose agents are not started yet.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let agent_count = self.agents.len();

        let positions = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                p
            }
            None => vec![Vec3::ZERO; agent_count],
        };

        let mut agents = Vec::with_capacity(agent_count);
        let mut rngs = Vec::with_capacity(agent_count);
        for (i, seed) in self.agents.into_iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SimError::Config(format!("too many agents ({agent_count})")))?;
            let mut agent = WanderingAgent::new(id, seed.config)?;
            if let Some(center) = &seed.center {
                agent = agent.with_center(center);
            }
            agents.push(agent);
            rngs.push(AgentRng::new(self.config.seed, id));
        }

        Ok(Sim {
            clock:      FrameClock::new(self.config.clock.clone())?,
            config:     self.config,
            agents,
            transforms: positions.into_iter().map(Transform::from_position).collect(),
            rngs,
            tweens:     TweenEngine::new(),
            zones:      self.zones,
            triggers:   TriggerTracker::new(agent_count),
        })
    }
}
