//! Obstacle occupancy — the read-only `(lane, position, time)` predicate.
//!
//! The search never mutates occupancy data; it only asks "is this grid cell
//! blocked at this time step?".  That contract is the [`Occupancy`] trait.
//! Queries outside a table's defined window are a caller error: the search
//! configuration must guarantee the table spans the reachable grid for the
//! chosen horizon and velocity range, so an out-of-window query panics rather
//! than guessing an answer.

use std::ops::Range;

use crate::{HwResult, Lane, LaneVelocityTable, Position, TimeStep};

// ── Occupancy trait ───────────────────────────────────────────────────────────

/// A queryable obstacle table over the `(lane, position, time)` grid.
///
/// `Send + Sync` so a table can be shared across worker threads when the
/// search runs with the `parallel` feature.
pub trait Occupancy: Send + Sync {
    /// `true` if an obstacle occupies `(lane, position, time)`.
    ///
    /// # Panics
    /// Implementations with a bounded domain panic on queries outside it.
    fn occupied(&self, lane: Lane, position: Position, time: TimeStep) -> bool;
}

/// A road with no obstacles, defined over the entire grid.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyRoad;

impl Occupancy for EmptyRoad {
    #[inline]
    fn occupied(&self, _lane: Lane, _position: Position, _time: TimeStep) -> bool {
        false
    }
}

// ── OccupancyGrid ─────────────────────────────────────────────────────────────

/// Dense boolean occupancy over a rectangular grid window.
///
/// The window covers the configured lanes, a half-open position range, and
/// time steps `0..=max_time`.  Storage is a flat `Vec<bool>` in
/// lane-major, then position, then time order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    lane_base: u8,
    lane_count: usize,
    position_base: i64,
    position_count: usize,
    time_count: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-clear grid over `lanes` × `positions` × `0..=max_time`.
    ///
    /// # Panics
    /// Panics if `lanes` is empty or `positions` is empty.
    pub fn new(lanes: &[Lane], positions: Range<i64>, max_time: TimeStep) -> Self {
        assert!(!lanes.is_empty(), "occupancy grid needs at least one lane");
        assert!(
            positions.start < positions.end,
            "occupancy grid needs a non-empty position window"
        );

        let lane_base = lanes.iter().map(|l| l.0).min().unwrap_or(0);
        let lane_max = lanes.iter().map(|l| l.0).max().unwrap_or(0);
        let lane_count = (lane_max - lane_base) as usize + 1;
        let position_count = (positions.end - positions.start) as usize;
        let time_count = max_time.0 as usize + 1;

        Self {
            lane_base,
            lane_count,
            position_base: positions.start,
            position_count,
            time_count,
            cells: vec![false; lane_count * position_count * time_count],
        }
    }

    /// Build a grid from obstacle trajectories.
    ///
    /// Each obstacle starts at `(lane, position)` at time step zero and
    /// advances by its lane's minimum legal speed every step (the baseline
    /// traffic assumption behind the crash sweep).  Trajectory points that
    /// leave the position window are clipped silently.
    ///
    /// # Errors
    ///
    /// Returns [`HwError::LaneNotConfigured`](crate::HwError::LaneNotConfigured)
    /// if an obstacle sits in a lane missing from `table`.
    pub fn from_trajectories(
        lanes: &[Lane],
        positions: Range<i64>,
        max_time: TimeStep,
        table: &LaneVelocityTable,
        obstacles: &[(Lane, Position)],
    ) -> HwResult<Self> {
        let mut grid = Self::new(lanes, positions, max_time);
        for &(lane, start) in obstacles {
            let speed = table.get(lane)?.min_speed();
            for t in 0..=max_time.0 {
                let position = start.offset(speed.0 as i64 * t as i64);
                let time = TimeStep(t);
                if grid.contains(lane, position, time) {
                    grid.set(lane, position, time);
                }
            }
        }
        Ok(grid)
    }

    /// `true` if `(lane, position, time)` falls inside the grid window.
    pub fn contains(&self, lane: Lane, position: Position, time: TimeStep) -> bool {
        let lane_ok = lane.0 >= self.lane_base
            && ((lane.0 - self.lane_base) as usize) < self.lane_count;
        let pos_ok = position.0 >= self.position_base
            && ((position.0 - self.position_base) as usize) < self.position_count;
        let time_ok = (time.0 as usize) < self.time_count;
        lane_ok && pos_ok && time_ok
    }

    /// Mark `(lane, position, time)` occupied.
    ///
    /// # Panics
    /// Panics outside the grid window.
    pub fn set(&mut self, lane: Lane, position: Position, time: TimeStep) {
        let i = self.flat_index(lane, position, time);
        self.cells[i] = true;
    }

    /// Number of occupied cells (test and reporting convenience).
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn flat_index(&self, lane: Lane, position: Position, time: TimeStep) -> usize {
        if !self.contains(lane, position, time) {
            panic!(
                "occupancy query outside the configured grid window: ({lane}, {position}, {time})"
            );
        }
        let l = (lane.0 - self.lane_base) as usize;
        let p = (position.0 - self.position_base) as usize;
        let t = time.0 as usize;
        (l * self.position_count + p) * self.time_count + t
    }
}

impl Occupancy for OccupancyGrid {
    #[inline]
    fn occupied(&self, lane: Lane, position: Position, time: TimeStep) -> bool {
        self.cells[self.flat_index(lane, position, time)]
    }
}
