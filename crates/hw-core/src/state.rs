//! Immutable car state records and their derived observations.

use std::fmt;

use crate::{Lane, Position, TimeStep, Velocity};

// ── CarState ──────────────────────────────────────────────────────────────────

/// One reachable configuration of the car.
///
/// A state records where the car is (`lane`, `position`, `time_step`) and how
/// it got there (`arrival_lane` — the lane occupied one step earlier,
/// `arrival_velocity` — the velocity chosen for the transition).
///
/// States are immutable once built.  The only constructors are
/// [`CarState::initial`] for the search root and [`CarState::successor`] for
/// transitions, which together enforce the path invariants:
///
/// - `position(child) = position(parent) + arrival_velocity(child)`
/// - `time_step(child) = time_step(parent) + 1`
/// - `arrival_lane(child) = lane(parent)`
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarState {
    /// Lane currently occupied.
    pub lane: Lane,
    /// Cumulative distance travelled down the highway.
    pub position: Position,
    /// Discrete time step, zero at the search root.
    pub time_step: TimeStep,
    /// Lane occupied during the preceding time step.
    pub arrival_lane: Lane,
    /// Velocity chosen to reach this state from its parent.
    pub arrival_velocity: Velocity,
}

impl CarState {
    /// The root state at time step zero.
    ///
    /// The root's arrival fields record the car's starting lane and velocity,
    /// as if it had just driven into the modelled stretch of highway.
    pub fn initial(lane: Lane, position: Position, velocity: Velocity) -> Self {
        Self {
            lane,
            position,
            time_step: TimeStep::ZERO,
            arrival_lane: lane,
            arrival_velocity: velocity,
        }
    }

    /// The state reached by changing to `lane` at `velocity` for one step.
    pub fn successor(self, lane: Lane, velocity: Velocity) -> Self {
        Self {
            lane,
            position: self.position + velocity,
            time_step: self.time_step.next(),
            arrival_lane: self.lane,
            arrival_velocity: velocity,
        }
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lane {}, {}, {})",
            self.lane.0, self.position, self.time_step
        )
    }
}

// ── Observation ───────────────────────────────────────────────────────────────

/// Derived flags attached to a state once it is accepted into the graph.
///
/// `crashed` is carried for completeness of the record: crashing candidates
/// are discarded before materialization, so every stored observation has
/// `crashed == false`.  `at_goal` and `speeding` are informational.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub at_goal: bool,
    pub crashed: bool,
    pub speeding: bool,
}

impl Observation {
    /// All flags false — the observation attached to the search root.
    pub const CLEAR: Observation = Observation {
        at_goal: false,
        crashed: false,
        speeding: false,
    };
}
