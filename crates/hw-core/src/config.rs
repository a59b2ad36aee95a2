//! Search configuration and its validation.

use crate::{HwError, HwResult, Lane, LaneVelocityTable, Position, TimeStep, Velocity};

// ── GoalRegion ────────────────────────────────────────────────────────────────

/// A highway exit the driver wants to take: a target lane and the minimum
/// position that must be *exceeded* (strict) to count as reached.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalRegion {
    pub lane: Lane,
    pub min_position: Position,
}

// ── SearchConfig ──────────────────────────────────────────────────────────────

/// Everything the graph builder needs besides the occupancy table.
///
/// Typically constructed in application code and validated once before the
/// search starts.  All fields are read-only during a search.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Lane the car starts in.
    pub initial_lane: Lane,

    /// Position the car starts at.
    pub initial_position: Position,

    /// Velocity the car enters the modelled stretch with (recorded on the
    /// root state's arrival fields).
    pub initial_velocity: Velocity,

    /// Search horizon.  Nodes at this time step are leaves.
    pub max_time: TimeStep,

    /// All lane indices, in enumeration order.  Must form a contiguous
    /// integer range: lane adjacency is numeric ±1.
    pub lanes: Vec<Lane>,

    /// Velocities tried at every expansion step, in enumeration order.
    ///
    /// This is the FULL velocity domain, not a per-lane legal set: expansion
    /// tries every velocity in every candidate lane and records illegal
    /// choices through the speeding observation instead of pruning them.
    pub velocities: Vec<Velocity>,

    /// Per-lane legal velocities; must cover every lane in `lanes`.
    pub legal_velocities: LaneVelocityTable,

    /// Goal regions.  Only the first entry is consulted by the goal test.
    pub goals: Vec<GoalRegion>,
}

impl SearchConfig {
    /// Check the preconditions the search relies on.
    ///
    /// A configuration that passes here cannot fail inside the search loop;
    /// everything after this point is pure enumeration and pruning.
    pub fn validate(&self) -> HwResult<()> {
        if self.lanes.is_empty() {
            return Err(HwError::Config("lane domain is empty".into()));
        }
        if self.velocities.is_empty() {
            return Err(HwError::Config("velocity domain is empty".into()));
        }
        if self.goals.is_empty() {
            return Err(HwError::Config("goal list is empty".into()));
        }

        // Numeric ±1 adjacency assumes a contiguous, duplicate-free lane range.
        let mut sorted: Vec<Lane> = self.lanes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != self.lanes.len() {
            return Err(HwError::Config("lane domain contains duplicates".into()));
        }
        let span = (sorted[sorted.len() - 1].0 - sorted[0].0) as usize + 1;
        if span != sorted.len() {
            return Err(HwError::Config(
                "lane indices must form a contiguous range".into(),
            ));
        }

        if !self.lanes.contains(&self.initial_lane) {
            return Err(HwError::Config(format!(
                "initial lane {} is not in the lane domain",
                self.initial_lane
            )));
        }

        // Every searchable lane needs a legal-velocity entry (crash baseline
        // and speeding test both read it).
        for &lane in &self.lanes {
            self.legal_velocities.get(lane)?;
        }

        Ok(())
    }
}
