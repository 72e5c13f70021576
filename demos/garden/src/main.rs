//! garden: a handful of hovering robots wandering a small yard.
//!
//! Four robots share a pond as their wander center, two more wander around
//! their own start points.  Three cube zones (flower bed, lawn, patio) are
//! laid out on the ground; each drop is reported with the zone it landed in.
//!
//! ```text
//! RUST_LOG=info cargo run -p garden
//! RUST_LOG=hw_agent::robot=info cargo run -p garden -- garden.json
//! ```
//!
//! The optional JSON file overrides [`GardenConfig`]; missing fields keep
//! their defaults.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use hw_agent::{Dropping, GizmoRecorder, WanderConfig, WanderMove};
use hw_core::{AgentId, SimRng, Vec3};
use hw_sim::{SimBuilder, SimConfig, SimObserver, TriggerVolume};

// ── Constants ─────────────────────────────────────────────────────────────────

const POND_ROBOTS:   usize = 4;
const LONE_ROBOTS:   usize = 2;
const FRAME_RATE:    f32   = 60.0;
const YARD_HALF:     f32   = 12.0;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct GardenConfig {
    sim:      SimConfig,
    wander:   WanderConfig,
    zones:    Vec<TriggerVolume>,
    seconds:  f32,
    /// Where the pond drifts to halfway through the run.
    pond_to:  [f32; 3],
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            sim:     SimConfig::default(),
            wander:  WanderConfig::default(),
            zones:   vec![
                TriggerVolume::new("FlowerBed", Vec3::new(-8.0, -1.0, -8.0), Vec3::new(-2.0, 4.0, -2.0)),
                TriggerVolume::new("Lawn",      Vec3::new(-2.0, -1.0, -6.0), Vec3::new(8.0, 4.0, 6.0)),
                TriggerVolume::cube("Patio",    Vec3::new(-6.0, 1.0, 6.0), 5.0),
            ],
            seconds: 60.0,
            pond_to: [4.0, 0.0, 2.0],
        }
    }
}

fn load_config() -> Result<GardenConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(GardenConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    info!("loaded config from {path}");
    Ok(config)
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    wanders: usize,
    enters:  usize,
    exits:   usize,
    drops:   BTreeMap<String, usize>,
    per_bot: BTreeMap<AgentId, usize>,
}

impl SimObserver for Tally {
    fn on_wander(&mut self, _agent: AgentId, _mv: &WanderMove) {
        self.wanders += 1;
    }

    fn on_drop(&mut self, agent: AgentId, dropping: &Dropping) {
        let key = match dropping {
            Dropping::InZone(zone) => zone.clone(),
            Dropping::Outside      => "(outside)".to_owned(),
        };
        *self.drops.entry(key).or_default() += 1;
        *self.per_bot.entry(agent).or_default() += 1;
    }

    fn on_zone_enter(&mut self, _agent: AgentId, _zone: &str) {
        self.enters += 1;
    }

    fn on_zone_exit(&mut self, _agent: AgentId, _zone: &str) {
        self.exits += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    let total = POND_ROBOTS + LONE_ROBOTS;
    println!("=== garden — hovering wanderers ===");
    println!(
        "Robots: {total}  |  Zones: {}  |  Seconds: {}  |  Seed: {}",
        config.zones.len(),
        config.seconds,
        config.sim.seed
    );
    println!();

    // 1. Scatter start points across the yard at hover height.
    let mut rng = SimRng::new(config.sim.seed);
    let positions: Vec<Vec3> = (0..total)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-YARD_HALF..=YARD_HALF),
                rng.gen_range(1.0..=2.5),
                rng.gen_range(-YARD_HALF..=YARD_HALF),
            )
        })
        .collect();

    // 2. Build the sim.  Pond robots borrow the pond; the others anchor
    //    beneath their start point.
    let pond = Rc::new(Cell::new(Vec3::new(-3.0, 0.0, -3.0)));
    let mut builder = SimBuilder::new(config.sim.clone());
    for _ in 0..POND_ROBOTS {
        builder = builder.agent_with_center(config.wander.clone(), &pond);
    }
    for _ in 0..LONE_ROBOTS {
        builder = builder.agent(config.wander.clone());
    }
    let mut sim = builder
        .initial_positions(positions)
        .zones(config.zones.iter().cloned())
        .build()?;

    // 3. Run, moving the pond halfway through.
    let delta = 1.0 / FRAME_RATE;
    let frames = (config.seconds * FRAME_RATE).round() as u64;
    let mut tally = Tally::default();

    let t0 = Instant::now();
    sim.start(&mut tally)?;
    sim.run_frames(frames / 2, delta, &mut tally)?;
    pond.set(Vec3::from_array(config.pond_to));
    info!("pond moved to {}", pond.get());
    sim.run_frames(frames - frames / 2, delta, &mut tally)?;
    let elapsed = t0.elapsed();
    println!("Simulated {} in {:.3} s wall", sim.clock, elapsed.as_secs_f64());
    println!(
        "  wanders: {}  |  zone enters: {}  |  zone exits: {}",
        tally.wanders, tally.enters, tally.exits
    );
    println!();

    // 4. Drops per zone.
    println!("{:<12} {:<22} {:>6}", "Zone", "Center", "Drops");
    println!("{}", "-".repeat(42));
    for zone in &sim.zones {
        let c = zone.center();
        println!(
            "{:<12} {:<22} {:>6}",
            zone.name,
            format!("({:.1}, {:.1}, {:.1})", c.x, c.y, c.z),
            tally.drops.get(&zone.name).copied().unwrap_or(0),
        );
    }
    println!("{:<12} {:<22} {:>6}", "(outside)", "", tally.drops.get("(outside)").copied().unwrap_or(0));
    println!();

    // 5. Final robot table.
    println!(
        "{:<6} {:<6} {:<26} {:>8} {:<10} {:>8} {:>6} {:>6}",
        "Robot", "Center", "Position", "Heading", "Zone", "Overlaps", "Tweens", "Drops"
    );
    println!("{}", "-".repeat(85));
    for id in sim.agent_ids() {
        let (Some(t), Some(robot)) = (sim.transform(id), sim.agent(id)) else { continue };
        let center = match robot.center() {
            Some(c) if c.is_owned() => "own",
            Some(_)                 => "pond",
            None                    => "-",
        };
        let forward = t.forward();
        let heading = forward.x.atan2(forward.z).to_degrees();
        let zone = robot.current_zone();
        let p = t.position;
        println!(
            "{:<6} {:<6} {:<26} {:>8.1} {:<10} {:>8} {:>6} {:>6}",
            id.0,
            center,
            format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
            heading,
            if zone.is_empty() { "-" } else { zone },
            sim.triggers.overlapping(id).count(),
            sim.tweens.count_for(id),
            tally.per_bot.get(&id).copied().unwrap_or(0),
        );
    }
    println!("Active tweens: {}", sim.tweens.len());
    println!();

    // 6. Gizmos per robot, as a host editor would draw the selection.
    let mut gizmos = GizmoRecorder::new();
    for id in sim.agent_ids() {
        gizmos.clear();
        sim.draw_gizmos_selected(id, &mut gizmos)?;
        println!("Gizmos {}: {}", id, serde_json::to_string(&gizmos.shapes)?);
    }

    sim.shutdown();
    Ok(())
}
