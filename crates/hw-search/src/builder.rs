//! The breadth-first graph builder.

use hw_core::{CarState, NodeId, Observation, Occupancy, SearchConfig, TimeStep};
use hw_graph::{Automaton, Node, NodeArena};

use crate::expand::adjacent_lanes;
use crate::observer::{NoopObserver, SearchObserver};
use crate::predicates::{has_crashed, is_at_goal, is_speeding};
use crate::SearchResult;

/// Breadth-first builder of the reachable-state automaton.
///
/// `GraphBuilder` holds a validated [`SearchConfig`] and drives the
/// level-synchronous search loop:
///
/// 1. **Produce**: every node in the current frontier is expanded — adjacent
///    lanes × the full velocity domain, crash test applied per candidate.
///    With the `parallel` feature this phase runs on Rayon's thread pool.
/// 2. **Apply** (sequential, frontier order): accepted children are pushed
///    into the node arena, their handles appended to the parent's adjacency
///    list, and the next frontier collected.
///
/// The split mirrors a produce/apply tick loop: the produce phase only reads
/// immutable data, so parallel and sequential runs yield identical arenas.
///
/// Termination is by construction: time steps strictly increase, nodes at
/// `max_time` are never expanded, and both domains are finite.
pub struct GraphBuilder {
    config: SearchConfig,
}

impl GraphBuilder {
    // ── Public API ────────────────────────────────────────────────────────

    /// Validate `config` and wrap it in a builder.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`](crate::SearchError::Config) for any
    /// precondition violation: empty lane/velocity/goal domains, gaps in the
    /// lane range, or a lane without a legal-velocity entry.  A configuration
    /// that passes cannot fail inside the search loop.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this builder runs with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search against `occupancy` and assemble the automaton.
    pub fn build<O: Occupancy>(&self, occupancy: &O) -> Automaton {
        self.build_observed(occupancy, &mut NoopObserver)
    }

    /// As [`build`][Self::build], with observer callbacks at every level
    /// boundary.
    pub fn build_observed<O, S>(&self, occupancy: &O, observer: &mut S) -> Automaton
    where
        O: Occupancy,
        S: SearchObserver,
    {
        let cfg = &self.config;

        let mut arena = NodeArena::new();
        let root_state =
            CarState::initial(cfg.initial_lane, cfg.initial_position, cfg.initial_velocity);
        let root = arena.push(Node::new(root_state, Observation::CLEAR));

        let mut frontier: Vec<NodeId> = vec![root];
        let mut time = TimeStep::ZERO;

        // The frontier can die early if every candidate of every node crashes.
        while time < cfg.max_time && !frontier.is_empty() {
            // ── Produce ───────────────────────────────────────────────────
            //
            // Parent states are copied out first so expansion (which may run
            // in parallel) only reads immutable data.
            let parents: Vec<CarState> =
                frontier.iter().map(|&id| arena.node(id).state).collect();
            let batches = self.expand_level(&parents, occupancy);

            // ── Apply ─────────────────────────────────────────────────────
            //
            // Sequential appends in frontier order keep arena handles
            // deterministic and every parent's adjacency list in
            // lane-then-velocity enumeration order.
            let mut next: Vec<NodeId> = Vec::new();
            let mut accepted = 0usize;
            for (&parent, children) in frontier.iter().zip(batches) {
                accepted += children.len();
                for (state, obs) in children {
                    let child = arena.push(Node::new(state, obs));
                    arena.node_mut(parent).children.push(child);
                    next.push(child);
                }
            }

            observer.on_level(time, frontier.len(), accepted);
            frontier = next;
            time = time.next();
        }

        observer.on_complete(arena.len());
        Automaton::new(arena, root)
    }

    // ── Level expansion ───────────────────────────────────────────────────

    #[cfg(not(feature = "parallel"))]
    fn expand_level<O: Occupancy>(
        &self,
        parents: &[CarState],
        occupancy: &O,
    ) -> Vec<Vec<(CarState, Observation)>> {
        parents
            .iter()
            .map(|parent| self.expand_node(parent, occupancy))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn expand_level<O: Occupancy>(
        &self,
        parents: &[CarState],
        occupancy: &O,
    ) -> Vec<Vec<(CarState, Observation)>> {
        use rayon::prelude::*;

        parents
            .par_iter()
            .map(|parent| self.expand_node(parent, occupancy))
            .collect()
    }

    /// Enumerate and filter one node's candidate transitions.
    ///
    /// Candidates are the cross product of adjacent lanes and the FULL
    /// velocity domain, in lane-then-velocity order — legality of a velocity
    /// in the candidate lane is observed (speeding flag), not pruned.
    /// Crashing candidates are dropped here: normal branch pruning, not an
    /// error.
    fn expand_node<O: Occupancy>(
        &self,
        parent: &CarState,
        occupancy: &O,
    ) -> Vec<(CarState, Observation)> {
        let cfg = &self.config;
        let leaving = &cfg.legal_velocities[parent.lane];

        let mut out = Vec::new();
        for lane in adjacent_lanes(parent.lane, &cfg.lanes) {
            let entering = &cfg.legal_velocities[lane];
            for &velocity in &cfg.velocities {
                let candidate = parent.successor(lane, velocity);

                if has_crashed(
                    parent.lane,
                    velocity,
                    lane,
                    candidate.position,
                    candidate.time_step,
                    leaving.min_speed(),
                    entering.min_speed(),
                    occupancy,
                ) {
                    continue;
                }

                let obs = Observation {
                    at_goal: is_at_goal(lane, candidate.position, &cfg.goals),
                    crashed: false,
                    speeding: is_speeding(velocity, leaving, entering),
                };
                out.push((candidate, obs));
            }
        }
        out
    }
}
