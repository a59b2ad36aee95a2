//! Integration tests for hw-search.

use hw_core::{
    CarState, EmptyRoad, GoalRegion, Lane, LaneVelocityTable, NodeId, OccupancyGrid, Position,
    SearchConfig, TimeStep, Velocity,
};
use hw_graph::Automaton;

use crate::{adjacent_lanes, has_crashed, is_at_goal, is_speeding, GraphBuilder, SearchObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Two lanes, velocities {1, 2} legal everywhere, goal far out of reach.
fn two_lane_config(max_time: u32) -> SearchConfig {
    let lanes = vec![Lane(0), Lane(1)];
    let velocities = vec![Velocity(1), Velocity(2)];
    let legal_velocities = LaneVelocityTable::uniform(&lanes, &velocities).unwrap();
    SearchConfig {
        initial_lane: Lane(0),
        initial_position: Position(0),
        initial_velocity: Velocity(1),
        max_time: TimeStep(max_time),
        lanes,
        velocities,
        legal_velocities,
        goals: vec![GoalRegion { lane: Lane(1), min_position: Position(1_000) }],
    }
}

fn build(config: SearchConfig) -> Automaton {
    GraphBuilder::new(config).unwrap().build(&EmptyRoad)
}

/// Walk every edge of `automaton`, calling `f(parent, child)`.
fn for_each_edge(automaton: &Automaton, mut f: impl FnMut(&CarState, &CarState)) {
    for (id, node) in automaton.iter() {
        for &child in automaton.children(id) {
            f(&node.state, &automaton.node(child).state);
        }
    }
}

// ── Lane expansion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod expand_tests {
    use super::*;

    const FOUR_LANES: [Lane; 4] = [Lane(0), Lane(1), Lane(2), Lane(3)];

    #[test]
    fn interior_lane_has_three_neighbours() {
        assert_eq!(
            adjacent_lanes(Lane(2), &FOUR_LANES),
            vec![Lane(1), Lane(2), Lane(3)]
        );
    }

    #[test]
    fn boundary_lanes_have_two_neighbours() {
        assert_eq!(adjacent_lanes(Lane(0), &FOUR_LANES), vec![Lane(0), Lane(1)]);
        assert_eq!(adjacent_lanes(Lane(3), &FOUR_LANES), vec![Lane(2), Lane(3)]);
    }

    #[test]
    fn results_stay_inside_the_domain() {
        for lane in FOUR_LANES {
            for adj in adjacent_lanes(lane, &FOUR_LANES) {
                assert!(FOUR_LANES.contains(&adj), "{adj} escaped the domain");
            }
        }
    }

    #[test]
    fn single_lane_highway_stays_put() {
        assert_eq!(adjacent_lanes(Lane(0), &[Lane(0)]), vec![Lane(0)]);
    }

    #[test]
    fn domain_order_does_not_matter() {
        let shuffled = [Lane(3), Lane(0), Lane(2), Lane(1)];
        assert_eq!(
            adjacent_lanes(Lane(1), &shuffled),
            vec![Lane(0), Lane(1), Lane(2)]
        );
    }
}

// ── Predicates ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod predicate_tests {
    use super::*;

    #[test]
    fn speeding_needs_legality_in_both_lanes() {
        // Scenario D: lane 0 allows only v2, lane 1 only v1.  Driving v1 from
        // lane 0 into lane 1 is speeding — v1 is not legal in the lane left.
        let mut table = LaneVelocityTable::new();
        table.insert(Lane(0), [Velocity(2)]).unwrap();
        table.insert(Lane(1), [Velocity(1)]).unwrap();

        let leaving = table.get(Lane(0)).unwrap();
        let entering = table.get(Lane(1)).unwrap();
        assert!(is_speeding(Velocity(1), leaving, entering));
        // v2 fails on the entering side instead
        assert!(is_speeding(Velocity(2), leaving, entering));
        // legal in both only when both sets contain it
        assert!(!is_speeding(Velocity(2), leaving, leaving));
    }

    #[test]
    fn goal_requires_strict_position() {
        // Scenario C: goal (lane 1, min position 5).
        let goals = [GoalRegion { lane: Lane(1), min_position: Position(5) }];
        assert!(is_at_goal(Lane(1), Position(6), &goals));
        assert!(!is_at_goal(Lane(1), Position(5), &goals));
        assert!(!is_at_goal(Lane(0), Position(6), &goals));
    }

    #[test]
    fn only_first_goal_entry_is_consulted() {
        let goals = [
            GoalRegion { lane: Lane(1), min_position: Position(5) },
            GoalRegion { lane: Lane(0), min_position: Position(0) },
        ];
        // matches the second entry, which is ignored
        assert!(!is_at_goal(Lane(0), Position(3), &goals));
    }

    #[test]
    fn crash_sweeps_the_entered_lane() {
        // Obstacle beside the car: lane 1, position 0, time 0.  Changing into
        // lane 1 at v2 (baseline 1) sweeps that cell; v1 sweeps nothing.
        let lanes = [Lane(0), Lane(1)];
        let mut grid = OccupancyGrid::new(&lanes, 0..4, TimeStep(1));
        grid.set(Lane(1), Position(0), TimeStep(0));

        let crashed = |v: u32| {
            has_crashed(
                Lane(0),
                Velocity(v),
                Lane(1),
                Position(v as i64),
                TimeStep(1),
                Velocity(1),
                Velocity(1),
                &grid,
            )
        };
        assert!(crashed(2));
        assert!(!crashed(1));
    }

    #[test]
    fn crash_sweeps_the_left_lane() {
        // Obstacle in the car's own prior cell: overtaking in-lane traffic
        // at v2 (baseline 1) sweeps it even while changing into lane 1.
        let lanes = [Lane(0), Lane(1)];
        let mut grid = OccupancyGrid::new(&lanes, 0..4, TimeStep(1));
        grid.set(Lane(0), Position(0), TimeStep(0));

        assert!(has_crashed(
            Lane(0),
            Velocity(2),
            Lane(1),
            Position(2),
            TimeStep(1),
            Velocity(1),
            Velocity(1),
            &grid,
        ));
    }

    #[test]
    fn baseline_speed_checks_nothing() {
        // v == min legal speed in both lanes: zero sweep cells, so the
        // occupancy table is never queried — even one with a tiny window.
        let grid = OccupancyGrid::new(&[Lane(0)], 0..1, TimeStep(0));
        assert!(!has_crashed(
            Lane(0),
            Velocity(3),
            Lane(0),
            Position(3),
            TimeStep(1),
            Velocity(3),
            Velocity(3),
            &grid,
        ));
    }

    #[test]
    fn slower_than_baseline_checks_nothing() {
        let grid = OccupancyGrid::new(&[Lane(0)], 0..1, TimeStep(0));
        assert!(!has_crashed(
            Lane(0),
            Velocity(1),
            Lane(0),
            Position(1),
            TimeStep(1),
            Velocity(4),
            Velocity(4),
            &grid,
        ));
    }
}

// ── Builder: free road ────────────────────────────────────────────────────────

#[cfg(test)]
mod free_road_tests {
    use super::*;

    #[test]
    fn two_lane_one_step_enumeration() {
        // Scenario A: lanes {0,1}, velocities {1,2}, empty road, one step.
        let automaton = build(two_lane_config(1));

        assert_eq!(automaton.node_count(), 5); // root + 4 children
        let children = automaton.children(automaton.start_id());
        assert_eq!(children.len(), 4);

        // lane-then-velocity enumeration order
        let got: Vec<(Lane, Position)> = children
            .iter()
            .map(|&id| {
                let s = automaton.node(id).state;
                (s.lane, s.position)
            })
            .collect();
        assert_eq!(
            got,
            vec![
                (Lane(0), Position(1)),
                (Lane(0), Position(2)),
                (Lane(1), Position(1)),
                (Lane(1), Position(2)),
            ]
        );

        for &id in children {
            let node = automaton.node(id);
            assert_eq!(node.state.time_step, TimeStep(1));
            assert!(!node.obs.crashed);
            assert!(!node.obs.speeding);
        }
    }

    #[test]
    fn parent_child_invariants_hold_on_every_edge() {
        let automaton = build(two_lane_config(3));
        for_each_edge(&automaton, |parent, child| {
            assert_eq!(child.time_step, parent.time_step.next());
            assert_eq!(child.position, parent.position + child.arrival_velocity);
            assert_eq!(child.arrival_lane, parent.lane);
        });
    }

    #[test]
    fn horizon_nodes_are_leaves() {
        let automaton = build(two_lane_config(2));
        for (_, node) in automaton.iter() {
            if node.state.time_step == TimeStep(2) {
                assert!(node.is_leaf());
            } else {
                assert!(!node.is_leaf());
            }
        }
    }

    #[test]
    fn no_crashed_node_is_ever_materialized() {
        let automaton = build(two_lane_config(3));
        assert!(automaton.iter().all(|(_, n)| !n.obs.crashed));
    }

    #[test]
    fn node_count_follows_branching_factor() {
        // Both lanes of a two-lane road are boundary lanes: branching is
        // always 2 lanes × 2 velocities = 4.
        let automaton = build(two_lane_config(3));
        assert_eq!(automaton.node_count(), 1 + 4 + 16 + 64);
    }

    #[test]
    fn zero_horizon_yields_only_the_root() {
        let automaton = build(two_lane_config(0));
        assert_eq!(automaton.node_count(), 1);
        assert!(automaton.start().is_leaf());
        assert_eq!(automaton.start().state.time_step, TimeStep::ZERO);
    }

    #[test]
    fn root_records_initial_configuration() {
        let automaton = build(two_lane_config(1));
        let root = automaton.start().state;
        assert_eq!(root.lane, Lane(0));
        assert_eq!(root.position, Position(0));
        assert_eq!(root.arrival_lane, Lane(0));
        assert_eq!(root.arrival_velocity, Velocity(1));
    }
}

// ── Builder: obstacles ────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacle_tests {
    use super::*;

    #[test]
    fn overtaking_past_an_obstacle_is_pruned() {
        // Scenario B shape: an obstacle beside the car (lane 1, position 0,
        // time 0).  Entering lane 1 at v2 sweeps the occupied cell and is
        // rejected; the v1 equivalent is accepted.
        let mut config = two_lane_config(1);
        config.legal_velocities = LaneVelocityTable::new();
        config
            .legal_velocities
            .insert(Lane(0), [Velocity(1)])
            .unwrap();
        config
            .legal_velocities
            .insert(Lane(1), [Velocity(1), Velocity(2)])
            .unwrap();

        let mut grid = OccupancyGrid::new(&config.lanes, 0..8, config.max_time);
        grid.set(Lane(1), Position(0), TimeStep(0));

        let automaton = GraphBuilder::new(config).unwrap().build(&grid);
        let children: Vec<CarState> = automaton
            .children(automaton.start_id())
            .iter()
            .map(|&id| automaton.node(id).state)
            .collect();

        // (lane 1, v2) was pruned; the other three candidates survive.
        assert_eq!(children.len(), 3);
        assert!(!children
            .iter()
            .any(|s| s.lane == Lane(1) && s.arrival_velocity == Velocity(2)));
        assert!(children
            .iter()
            .any(|s| s.lane == Lane(1) && s.arrival_velocity == Velocity(1)));
    }

    #[test]
    fn in_lane_overtaking_sweeps_intermediate_cells() {
        // Single lane, velocities {1, 3}, baseline 1.  An obstacle one cell
        // ahead at time 0 sits inside the v3 sweep (cells 0 and 1) but
        // outside the v1 sweep (no cells).
        let lanes = vec![Lane(0)];
        let velocities = vec![Velocity(1), Velocity(3)];
        let legal_velocities = LaneVelocityTable::uniform(&lanes, &velocities).unwrap();
        let config = SearchConfig {
            initial_lane: Lane(0),
            initial_position: Position(0),
            initial_velocity: Velocity(1),
            max_time: TimeStep(1),
            lanes,
            velocities,
            legal_velocities,
            goals: vec![GoalRegion { lane: Lane(0), min_position: Position(100) }],
        };

        let mut grid = OccupancyGrid::new(&config.lanes, 0..8, config.max_time);
        grid.set(Lane(0), Position(1), TimeStep(0));

        let automaton = GraphBuilder::new(config).unwrap().build(&grid);
        let children = automaton.children(automaton.start_id());
        assert_eq!(children.len(), 1);
        assert_eq!(
            automaton.node(children[0]).state.arrival_velocity,
            Velocity(1)
        );
    }

    #[test]
    fn frontier_can_die_before_the_horizon() {
        // Every candidate from the root crashes: the search ends early and
        // the automaton is just the root.
        let lanes = vec![Lane(0)];
        let velocities = vec![Velocity(2)];
        let legal_velocities =
            LaneVelocityTable::uniform(&lanes, &[Velocity(1), Velocity(2)]).unwrap();
        let config = SearchConfig {
            initial_lane: Lane(0),
            initial_position: Position(0),
            initial_velocity: Velocity(1),
            max_time: TimeStep(5),
            lanes,
            velocities,
            legal_velocities,
            goals: vec![GoalRegion { lane: Lane(0), min_position: Position(100) }],
        };

        let mut grid = OccupancyGrid::new(&config.lanes, 0..16, config.max_time);
        grid.set(Lane(0), Position(0), TimeStep(0));

        let automaton = GraphBuilder::new(config).unwrap().build(&grid);
        assert_eq!(automaton.node_count(), 1);
        assert!(automaton.start().is_leaf());
    }
}

// ── Builder: observations ─────────────────────────────────────────────────────

#[cfg(test)]
mod observation_tests {
    use super::*;

    #[test]
    fn goal_nodes_are_flagged() {
        let mut config = two_lane_config(3);
        config.goals = vec![GoalRegion { lane: Lane(1), min_position: Position(4) }];
        let automaton = build(config);

        let flagged = automaton.goal_count();
        assert!(flagged > 0);
        for (_, node) in automaton.iter() {
            let expect = node.state.lane == Lane(1) && node.state.position > Position(4);
            // the root predates the goal test and is never flagged
            let expect = expect && node.state.time_step > TimeStep::ZERO;
            assert_eq!(node.obs.at_goal, expect, "at {}", node.state);
        }
    }

    #[test]
    fn illegal_velocities_are_observed_not_pruned() {
        // Lane 1 only allows v1; driving v2 into or out of it is recorded as
        // speeding but the node still exists — legality never prunes.
        let mut config = two_lane_config(1);
        config.legal_velocities = LaneVelocityTable::new();
        config
            .legal_velocities
            .insert(Lane(0), [Velocity(1), Velocity(2)])
            .unwrap();
        config
            .legal_velocities
            .insert(Lane(1), [Velocity(1)])
            .unwrap();

        let automaton = build(config);
        let children = automaton.children(automaton.start_id());
        assert_eq!(children.len(), 4, "speeding must not reduce branching");

        for &id in children {
            let node = automaton.node(id);
            let legal_both =
                node.state.arrival_velocity == Velocity(1) || node.state.lane == Lane(0);
            assert_eq!(node.obs.speeding, !legal_both, "at {}", node.state);
        }
    }
}

// ── Builder: determinism and observers ────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    fn shape(automaton: &Automaton) -> Vec<(CarState, Vec<NodeId>)> {
        automaton
            .iter()
            .map(|(_, n)| (n.state, n.children.clone()))
            .collect()
    }

    #[test]
    fn identical_configs_build_identical_graphs() {
        let a = build(two_lane_config(3));
        let b = build(two_lane_config(3));
        assert_eq!(shape(&a), shape(&b));
        assert_eq!(a.start_id(), b.start_id());
    }

    #[derive(Default)]
    struct LevelLog {
        levels: Vec<(TimeStep, usize, usize)>,
        completed_with: Option<usize>,
    }

    impl SearchObserver for LevelLog {
        fn on_level(&mut self, time: TimeStep, frontier: usize, accepted: usize) {
            self.levels.push((time, frontier, accepted));
        }
        fn on_complete(&mut self, node_count: usize) {
            self.completed_with = Some(node_count);
        }
    }

    #[test]
    fn observer_sees_every_level() {
        let builder = GraphBuilder::new(two_lane_config(2)).unwrap();
        let mut log = LevelLog::default();
        let automaton = builder.build_observed(&EmptyRoad, &mut log);

        assert_eq!(
            log.levels,
            vec![(TimeStep(0), 1, 4), (TimeStep(1), 4, 16)]
        );
        assert_eq!(log.completed_with, Some(automaton.node_count()));
    }
}

// ── Configuration errors ──────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn invalid_configs_never_reach_the_search() {
        let mut empty_lanes = two_lane_config(1);
        empty_lanes.lanes.clear();
        assert!(GraphBuilder::new(empty_lanes).is_err());

        let mut empty_velocities = two_lane_config(1);
        empty_velocities.velocities.clear();
        assert!(GraphBuilder::new(empty_velocities).is_err());

        let mut no_goal = two_lane_config(1);
        no_goal.goals.clear();
        assert!(GraphBuilder::new(no_goal).is_err());

        let mut missing_entry = two_lane_config(1);
        missing_entry.legal_velocities = LaneVelocityTable::new();
        missing_entry
            .legal_velocities
            .insert(Lane(0), [Velocity(1)])
            .unwrap();
        assert!(GraphBuilder::new(missing_entry).is_err());
    }

    #[test]
    fn valid_config_is_kept_by_the_builder() {
        let config = two_lane_config(1);
        let builder = GraphBuilder::new(config).unwrap();
        assert_eq!(builder.config().lanes.len(), 2);
    }
}
