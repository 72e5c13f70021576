//! Integration tests for hw-sim.

use hw_agent::{Dropping, WanderConfig, WanderMove};
use hw_core::{AgentId, Vec3};

use crate::{SimBuilder, SimConfig, SimObserver, TriggerVolume};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FRAME: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, PartialEq)]
enum Seen {
    Wander(AgentId),
    Drop(AgentId, Dropping),
    Enter(AgentId, String),
    Exit(AgentId, String),
}

#[derive(Default)]
struct Recorder {
    seen:   Vec<Seen>,
    frames: u64,
}

impl Recorder {
    fn drops(&self) -> Vec<&Dropping> {
        self.seen
            .iter()
            .filter_map(|s| match s {
                Seen::Drop(_, d) => Some(d),
                _ => None,
            })
            .collect()
    }
}

impl SimObserver for Recorder {
    fn on_frame_end(&mut self, _frame: u64, _now: f64) {
        self.frames += 1;
    }

    fn on_wander(&mut self, agent: AgentId, _mv: &WanderMove) {
        self.seen.push(Seen::Wander(agent));
    }

    fn on_drop(&mut self, agent: AgentId, dropping: &Dropping) {
        self.seen.push(Seen::Drop(agent, dropping.clone()));
    }

    fn on_zone_enter(&mut self, agent: AgentId, zone: &str) {
        self.seen.push(Seen::Enter(agent, zone.to_owned()));
    }

    fn on_zone_exit(&mut self, agent: AgentId, zone: &str) {
        self.seen.push(Seen::Exit(agent, zone.to_owned()));
    }
}

// ── TriggerVolume / TriggerTracker ────────────────────────────────────────────

#[cfg(test)]
mod trigger_tests {
    use super::*;
    use crate::{TriggerEvent, TriggerTracker};

    #[test]
    fn corners_are_normalized() {
        let v = TriggerVolume::new("A", Vec3::new(2.0, 2.0, 2.0), Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(v.min, Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(v.max, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(v.center(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn sphere_overlap_uses_closest_point() {
        let v = TriggerVolume::cube("A", Vec3::ZERO, 2.0);
        assert!(v.overlaps_sphere(Vec3::ZERO, 0.0));
        assert!(v.overlaps_sphere(Vec3::new(1.4, 0.0, 0.0), 0.5));
        assert!(!v.overlaps_sphere(Vec3::new(1.6, 0.0, 0.0), 0.5));
        // Diagonal: closest corner is (1,1,1), ~0.69 away.
        assert!(!v.overlaps_sphere(Vec3::new(1.4, 1.4, 1.4), 0.5));
    }

    #[test]
    fn detect_reports_changes_only() {
        let zones = vec![
            TriggerVolume::cube("A", Vec3::ZERO, 2.0),
            TriggerVolume::cube("B", Vec3::new(5.0, 0.0, 0.0), 2.0),
        ];
        let mut tracker = TriggerTracker::new(1);
        let a = AgentId(0);

        assert_eq!(tracker.detect(a, Vec3::ZERO, 0.1, &zones), vec![TriggerEvent::Enter(0)]);
        assert!(tracker.detect(a, Vec3::ZERO, 0.1, &zones).is_empty());
        assert_eq!(
            tracker.detect(a, Vec3::new(5.0, 0.0, 0.0), 0.1, &zones),
            vec![TriggerEvent::Exit(0), TriggerEvent::Enter(1)]
        );
        assert_eq!(tracker.overlapping(a).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn forget_clears_without_events() {
        let zones = vec![TriggerVolume::cube("A", Vec3::ZERO, 2.0)];
        let mut tracker = TriggerTracker::new(1);
        tracker.detect(AgentId(0), Vec3::ZERO, 0.1, &zones);
        tracker.forget(AgentId(0));
        assert_eq!(tracker.overlapping(AgentId(0)).count(), 0);
    }

    #[test]
    fn unknown_agent_is_ignored() {
        let zones = vec![TriggerVolume::cube("A", Vec3::ZERO, 2.0)];
        let mut tracker = TriggerTracker::new(1);
        assert!(tracker.detect(AgentId(9), Vec3::ZERO, 0.1, &zones).is_empty());
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .agent(WanderConfig::default())
            .build()
            .unwrap();
        assert_eq!(sim.agents.len(), 2);
        assert_eq!(sim.transforms.len(), 2);
        assert_eq!(sim.agent_ids().collect::<Vec<_>>(), vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .initial_positions(vec![Vec3::ZERO; 2])
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { expected: 1, got: 2, .. })));
    }

    #[test]
    fn invalid_agent_config_errors() {
        let bad = WanderConfig { move_speed: 0.0, ..WanderConfig::default() };
        let result = SimBuilder::new(SimConfig::default()).agent(bad).build();
        assert!(matches!(result, Err(SimError::Agent(_))));
    }

    #[test]
    fn invalid_sim_config_errors() {
        let cfg = SimConfig { collider_radius: -1.0, ..SimConfig::default() };
        assert!(matches!(SimBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use hw_core::geo::planar_distance;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn start_issues_first_wander_for_each_agent() {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .agent(WanderConfig::default())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.start(&mut rec).unwrap();
        assert_eq!(rec.seen, vec![Seen::Wander(AgentId(0)), Seen::Wander(AgentId(1))]);

        // Starting again leaves running agents alone.
        sim.start(&mut rec).unwrap();
        assert_eq!(rec.seen.len(), 2);
    }

    #[test]
    fn agent_hovers_and_stays_in_wander_disk() {
        let center = Rc::new(Cell::new(Vec3::new(3.0, 0.0, -2.0)));
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent_with_center(WanderConfig::default(), &center)
            .initial_positions(vec![Vec3::new(3.0, 1.5, -2.0)])
            .build()
            .unwrap();
        sim.start(&mut NoopObserver).unwrap();

        for _ in 0..1_200 {
            sim.step(FRAME, &mut NoopObserver).unwrap();
            let p = sim.transform(AgentId(0)).unwrap().position;
            assert!((1.5..=2.0).contains(&p.y), "height {} left hover band", p.y);
            assert!(planar_distance(p, center.get()) <= 5.0 + 1e-3);
        }
    }

    #[test]
    fn wanders_every_interval() {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.start(&mut rec).unwrap();
        // 10 s at 60 fps: moves at 0 (start), 3, 6, 9.
        sim.run_frames(600, FRAME, &mut rec).unwrap();
        let wanders = rec.seen.iter().filter(|s| matches!(s, Seen::Wander(_))).count();
        assert_eq!(wanders, 4);
        assert_eq!(rec.frames, 600);
    }

    #[test]
    fn drops_report_the_zone_the_agent_is_in() {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .initial_positions(vec![Vec3::new(0.0, 1.0, 0.0)])
            .zone(TriggerVolume::cube("Meadow", Vec3::ZERO, 40.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.start(&mut rec).unwrap();
        sim.run_frames(60 * 40, FRAME, &mut rec).unwrap();

        assert_eq!(rec.seen[1], Seen::Enter(AgentId(0), "Meadow".into()));
        assert_eq!(sim.agents[0].current_zone(), "Meadow");
        let drops = rec.drops();
        assert!(!drops.is_empty());
        assert!(drops.iter().all(|d| **d == Dropping::InZone("Meadow".into())));
    }

    #[test]
    fn drops_outside_without_zones() {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.start(&mut rec).unwrap();
        sim.run_frames(60 * 16, FRAME, &mut rec).unwrap();
        let drops = rec.drops();
        // First drop is due within 15 s.
        assert!(!drops.is_empty());
        assert!(drops.iter().all(|d| **d == Dropping::Outside));
    }

    #[test]
    fn overlapping_zones_keep_the_last_entered() {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig { move_radius: 0.0, ..WanderConfig::default() })
            .initial_positions(vec![Vec3::new(0.0, 1.0, 0.0)])
            .zone(TriggerVolume::cube("A", Vec3::ZERO, 10.0))
            .zone(TriggerVolume::cube("B", Vec3::ZERO, 10.0))
            .build()
            .unwrap();
        sim.start(&mut NoopObserver).unwrap();
        // Long enough for at least one fixed step.
        sim.step(0.05, &mut NoopObserver).unwrap();
        assert_eq!(sim.agents[0].current_zone(), "B");
    }

    #[test]
    fn leaving_a_zone_clears_it() {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig { move_radius: 0.0, ..WanderConfig::default() })
            .initial_positions(vec![Vec3::new(0.0, 1.0, 0.0)])
            .zone(TriggerVolume::cube("A", Vec3::ZERO, 4.0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.start(&mut rec).unwrap();
        sim.step(0.05, &mut rec).unwrap();
        assert_eq!(sim.agents[0].current_zone(), "A");

        // Move the zone away from the agent; the next fixed step sees the exit.
        sim.zones[0] = TriggerVolume::cube("A", Vec3::new(50.0, 0.0, 0.0), 4.0);
        sim.step(0.05, &mut rec).unwrap();
        assert_eq!(sim.agents[0].current_zone(), "");
        assert!(rec.seen.contains(&Seen::Exit(AgentId(0), "A".into())));
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = SimBuilder::new(SimConfig { seed: 7, ..SimConfig::default() })
                .agent(WanderConfig::default())
                .agent(WanderConfig::default())
                .build()
                .unwrap();
            sim.start(&mut NoopObserver).unwrap();
            sim.run_frames(300, FRAME, &mut NoopObserver).unwrap();
            sim.transforms.clone()
        };
        assert_eq!(run(), run());
    }
}

// ── Teardown & host controls ──────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use hw_agent::{GizmoRecorder, GizmoShape, Lifecycle};

    use super::*;
    use crate::{NoopObserver, SimError};

    fn running_pair() -> crate::Sim {
        let mut sim = SimBuilder::new(SimConfig::default())
            .agent(WanderConfig::default())
            .agent(WanderConfig::default())
            .initial_positions(vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(20.0, 1.0, 0.0)])
            .build()
            .unwrap();
        sim.start(&mut NoopObserver).unwrap();
        sim
    }

    #[test]
    fn destroy_cancels_only_that_agents_tweens() {
        let mut sim = running_pair();
        assert!(sim.tweens.count_for(AgentId(0)) > 0);
        sim.destroy(AgentId(0)).unwrap();
        assert_eq!(sim.tweens.count_for(AgentId(0)), 0);
        assert!(sim.tweens.count_for(AgentId(1)) > 0);
        assert_eq!(sim.agents[0].lifecycle(), Lifecycle::Destroyed);

        let frozen = *sim.transform(AgentId(0)).unwrap();
        let mut rec = Recorder::default();
        sim.run_frames(600, FRAME, &mut rec).unwrap();
        assert_eq!(*sim.transform(AgentId(0)).unwrap(), frozen);
        assert!(rec.seen.iter().all(|s| !matches!(s, Seen::Wander(AgentId(0)))));
    }

    #[test]
    fn destroy_unknown_agent_errors() {
        let mut sim = running_pair();
        assert!(matches!(sim.destroy(AgentId(5)), Err(SimError::UnknownAgent(AgentId(5)))));
    }

    #[test]
    fn shutdown_releases_every_tween() {
        let mut sim = running_pair();
        sim.shutdown();
        assert!(sim.tweens.is_empty());
        sim.shutdown();
    }

    #[test]
    fn hover_parameters_can_be_changed_live() {
        let mut sim = running_pair();
        sim.update_hover_parameters(AgentId(0), 1.0, 2.0).unwrap();
        sim.run_frames(120, FRAME, &mut NoopObserver).unwrap();
        let y = sim.transform(AgentId(0)).unwrap().position.y;
        assert!((1.0..=2.0).contains(&y));
        assert!(sim.update_hover_parameters(AgentId(9), 1.0, 2.0).is_err());
    }

    #[test]
    fn hover_restart_at_the_top_stays_continuous() {
        let mut sim = running_pair();
        // One second at 60 fps: half a hover cycle, so agent 0 is at the top.
        sim.run_frames(60, FRAME, &mut NoopObserver).unwrap();
        let top = sim.transform(AgentId(0)).unwrap().position.y;
        assert!(top > 1.45, "expected the top of the hover, got {top}");

        sim.update_hover_parameters(AgentId(0), 0.5, 1.0).unwrap();
        sim.run_frames(2, FRAME, &mut NoopObserver).unwrap();
        let y = sim.transform(AgentId(0)).unwrap().position.y;
        assert!((y - top).abs() < 0.05, "height jumped from {top} to {y}");

        // And it keeps hovering: half a second later it is well on the way down.
        sim.run_frames(30, FRAME, &mut NoopObserver).unwrap();
        let y = sim.transform(AgentId(0)).unwrap().position.y;
        assert!((1.0..=1.5).contains(&y));
        assert!(y < top - 0.1, "hover stalled at {y}");
    }

    #[test]
    fn gizmos_for_selected_agent() {
        let sim = running_pair();
        let mut gizmos = GizmoRecorder::new();
        sim.draw_gizmos_selected(AgentId(1), &mut gizmos).unwrap();
        assert!(matches!(
            gizmos.shapes.as_slice(),
            [GizmoShape::WireSphere { center, radius, .. }]
                if *center == Vec3::new(20.0, 0.0, 0.0) && *radius == 5.0
        ));
    }
}
