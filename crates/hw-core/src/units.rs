//! Scalar units of the highway grid: velocity, position, and time step.
//!
//! # Design
//!
//! Everything is an integer.  The highway is a discrete grid of cells, a
//! velocity is a whole number of cells covered per time step, and time is a
//! monotonically increasing step counter.  Integer units mean all position
//! arithmetic is exact (no floating-point drift) and comparisons are O(1).

use std::fmt;
use std::ops::{Add, Sub};

// ── Velocity ──────────────────────────────────────────────────────────────────

/// A car velocity in grid cells per time step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity(pub u32);

impl Velocity {
    /// Number of cells a car at `self` sweeps past traffic moving at
    /// `baseline` during one time step.  Saturates at zero when the baseline
    /// is at least as fast.
    #[inline]
    pub fn cells_past(self, baseline: Velocity) -> u32 {
        self.0.saturating_sub(baseline.0)
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// Cumulative distance travelled down the highway, in grid cells.
///
/// Signed so that windowed occupancy tables can start below the car's initial
/// position without a separate offset convention.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position(pub i64);

impl Position {
    pub const ZERO: Position = Position(0);

    /// The position `cells` cells further down the highway (negative moves back).
    #[inline]
    pub fn offset(self, cells: i64) -> Position {
        Position(self.0 + cells)
    }
}

impl Add<Velocity> for Position {
    type Output = Position;
    #[inline]
    fn add(self, v: Velocity) -> Position {
        Position(self.0 + v.0 as i64)
    }
}

impl Sub<Velocity> for Position {
    type Output = Position;
    #[inline]
    fn sub(self, v: Velocity) -> Position {
        Position(self.0 - v.0 as i64)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y{}", self.0)
    }
}

// ── TimeStep ──────────────────────────────────────────────────────────────────

/// An absolute simulation time-step counter, starting at zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeStep(pub u32);

impl TimeStep {
    pub const ZERO: TimeStep = TimeStep(0);

    /// The following time step.
    #[inline]
    pub fn next(self) -> TimeStep {
        TimeStep(self.0 + 1)
    }

    /// The preceding time step.
    ///
    /// # Panics
    /// Panics in debug mode at step zero (the root has no predecessor).
    #[inline]
    pub fn prev(self) -> TimeStep {
        TimeStep(self.0 - 1)
    }
}

impl Add<u32> for TimeStep {
    type Output = TimeStep;
    #[inline]
    fn add(self, rhs: u32) -> TimeStep {
        TimeStep(self.0 + rhs)
    }
}

impl Sub for TimeStep {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: TimeStep) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
