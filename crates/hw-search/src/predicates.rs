//! Safety predicates over one candidate transition.
//!
//! All three are pure functions of the transition and read-only
//! configuration.  The crash test is the only one that consults the occupancy
//! table, and the only one evaluated before a candidate is admitted — a
//! crashing candidate is discarded, never materialized.  Speeding and goal
//! are informational observations attached to accepted nodes.

use hw_core::{GoalRegion, Lane, LaneVelocities, Occupancy, Position, TimeStep, Velocity};

/// Speeding test for a transition driven at `arrival_velocity`.
///
/// Returns `false` iff the velocity is legal in BOTH lanes the maneuver
/// touches — the lane being left and the lane being entered.  A velocity
/// legal in only one of the two still violates the stricter lane's limit
/// during the lane change.
pub fn is_speeding(
    arrival_velocity: Velocity,
    leaving: &LaneVelocities,
    entering: &LaneVelocities,
) -> bool {
    !(leaving.is_legal(arrival_velocity) && entering.is_legal(arrival_velocity))
}

/// Crash test for the transition into `(candidate_lane, candidate_position)`
/// at `candidate_time`.
///
/// Obstacle cars are assumed to travel at their lane's minimum legal speed,
/// so a car driving at `arrival_velocity` overtakes baseline traffic through
/// `arrival_velocity - min_speed` cells per lane it touches, measured from
/// its prior position at the prior time step.  Both the lane being left and
/// the lane being entered are swept; any occupied cell is a collision.
/// A sweep of zero or fewer cells checks nothing.
#[allow(clippy::too_many_arguments)]
pub fn has_crashed<O: Occupancy + ?Sized>(
    arrival_lane: Lane,
    arrival_velocity: Velocity,
    candidate_lane: Lane,
    candidate_position: Position,
    candidate_time: TimeStep,
    min_speed_arrival_lane: Velocity,
    min_speed_candidate_lane: Velocity,
    occupancy: &O,
) -> bool {
    let prior_position = candidate_position - arrival_velocity;
    let prior_time = candidate_time.prev();

    let swept = |lane: Lane, baseline: Velocity| {
        let cells = arrival_velocity.cells_past(baseline) as i64;
        (0..cells).any(|i| occupancy.occupied(lane, prior_position.offset(i), prior_time))
    };

    swept(arrival_lane, min_speed_arrival_lane) || swept(candidate_lane, min_speed_candidate_lane)
}

/// Goal test: `true` iff the candidate sits in the goal lane strictly past
/// the goal's minimum position.
///
/// Only the first configured goal region is consulted; later entries are
/// ignored.
pub fn is_at_goal(
    candidate_lane: Lane,
    candidate_position: Position,
    goals: &[GoalRegion],
) -> bool {
    match goals.first() {
        None => false,
        Some(goal) => candidate_lane == goal.lane && candidate_position > goal.min_position,
    }
}
