//! merge — smallest end-to-end scenario for the rust_hw automaton builder.
//!
//! A three-lane highway with randomly placed slow traffic ahead of the car:
//! build the full reachable-state automaton over a short horizon and print
//! what survived.  The goal is the slow outer lane well down the road — the
//! highway exit the driver wants.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hw_core::{
    GoalRegion, Lane, LaneVelocityTable, OccupancyGrid, Position, SearchConfig, TimeStep, Velocity,
};
use hw_search::{GraphBuilder, SearchObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const MAX_TIME: u32 = 5;
const OBSTACLE_COUNT: usize = 6;

// ── Progress printing ─────────────────────────────────────────────────────────

struct PrintLevels;

impl SearchObserver for PrintLevels {
    fn on_level(&mut self, time: TimeStep, frontier: usize, accepted: usize) {
        println!("{time}: expanded {frontier} nodes, accepted {accepted} transitions");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let lanes = vec![Lane(0), Lane(1), Lane(2)];
    let velocities = vec![Velocity(1), Velocity(2), Velocity(3)];

    // outer lane slow, middle mixed, inner fast
    let mut legal = LaneVelocityTable::new();
    legal.insert(Lane(0), [Velocity(1), Velocity(2)])?;
    legal.insert(Lane(1), [Velocity(1), Velocity(2), Velocity(3)])?;
    legal.insert(Lane(2), [Velocity(2), Velocity(3)])?;

    let config = SearchConfig {
        initial_lane: Lane(1),
        initial_position: Position(0),
        initial_velocity: Velocity(2),
        max_time: TimeStep(MAX_TIME),
        lanes: lanes.clone(),
        velocities,
        legal_velocities: legal.clone(),
        goals: vec![GoalRegion { lane: Lane(0), min_position: Position(8) }],
    };

    // Random slow traffic somewhere ahead of the car.  Obstacles advance at
    // their lane's minimum legal speed, per the crash model.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let obstacles: Vec<(Lane, Position)> = (0..OBSTACLE_COUNT)
        .map(|_| {
            (
                Lane(rng.gen_range(0..3u8)),
                Position(rng.gen_range(2..12i64)),
            )
        })
        .collect();

    // Position window 0..40 covers every reachable cell (3 cells/step over 5
    // steps plus sweep slack) and the obstacle trajectories.
    let grid = OccupancyGrid::from_trajectories(
        &lanes,
        0..40,
        TimeStep(MAX_TIME),
        &legal,
        &obstacles,
    )?;
    println!(
        "{} obstacle cells over {} time steps",
        grid.occupied_count(),
        MAX_TIME + 1
    );

    let builder = GraphBuilder::new(config)?;
    let automaton = builder.build_observed(&grid, &mut PrintLevels);

    println!();
    println!(
        "automaton: {} nodes ({} leaves)",
        automaton.node_count(),
        automaton.leaf_count()
    );
    println!("  at goal:  {}", automaton.goal_count());
    println!("  speeding: {}", automaton.speeding_count());

    Ok(())
}
