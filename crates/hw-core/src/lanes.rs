//! Per-lane legal-velocity configuration.
//!
//! Each lane carries its own set of legal velocities.  Two derived quantities
//! drive the safety predicates:
//!
//! - membership (`is_legal`) feeds the speeding test, and
//! - the minimum legal speed (`min_speed`) is the baseline obstacle traffic
//!   speed used by the crash sweep.
//!
//! The minimum is pre-computed at insertion so the hot search loop never
//! scans a set.

use std::ops::Index;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{HwError, HwResult, Lane, Velocity};

// ── LaneVelocities ────────────────────────────────────────────────────────────

/// The legal-velocity set of a single lane, with its cached minimum.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneVelocities {
    legal: FxHashSet<Velocity>,
    min: Velocity,
}

impl LaneVelocities {
    /// `true` if `velocity` is legal in this lane.
    #[inline]
    pub fn is_legal(&self, velocity: Velocity) -> bool {
        self.legal.contains(&velocity)
    }

    /// The slowest legal velocity — the assumed speed of obstacle traffic.
    #[inline]
    pub fn min_speed(&self) -> Velocity {
        self.min
    }

    /// Number of legal velocities (always ≥ 1).
    pub fn len(&self) -> usize {
        self.legal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legal.is_empty()
    }
}

// ── LaneVelocityTable ─────────────────────────────────────────────────────────

/// Mapping from lane index to that lane's legal velocities.
///
/// Built once from configuration and read-only during a search.  Empty
/// velocity sets are rejected at insertion: a lane without a legal velocity
/// has no defined minimum speed and would poison the crash baseline.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneVelocityTable {
    inner: FxHashMap<Lane, LaneVelocities>,
}

impl LaneVelocityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the legal velocities of `lane`, replacing any earlier entry.
    ///
    /// # Errors
    ///
    /// Returns [`HwError::EmptyVelocitySet`] if `velocities` yields nothing.
    pub fn insert(
        &mut self,
        lane: Lane,
        velocities: impl IntoIterator<Item = Velocity>,
    ) -> HwResult<()> {
        let legal: FxHashSet<Velocity> = velocities.into_iter().collect();
        let min = legal
            .iter()
            .copied()
            .min()
            .ok_or(HwError::EmptyVelocitySet(lane))?;
        self.inner.insert(lane, LaneVelocities { legal, min });
        Ok(())
    }

    /// Build a table giving every lane in `lanes` the same velocity set.
    pub fn uniform(lanes: &[Lane], velocities: &[Velocity]) -> HwResult<Self> {
        let mut table = Self::new();
        for &lane in lanes {
            table.insert(lane, velocities.iter().copied())?;
        }
        Ok(table)
    }

    /// The velocity entry for `lane`.
    ///
    /// # Errors
    ///
    /// Returns [`HwError::LaneNotConfigured`] for lanes without an entry.
    pub fn get(&self, lane: Lane) -> HwResult<&LaneVelocities> {
        self.inner.get(&lane).ok_or(HwError::LaneNotConfigured(lane))
    }

    pub fn contains(&self, lane: Lane) -> bool {
        self.inner.contains_key(&lane)
    }

    /// Number of configured lanes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Index<Lane> for LaneVelocityTable {
    type Output = LaneVelocities;

    /// Direct lookup for the validated search hot path.
    ///
    /// # Panics
    /// Panics if `lane` has no entry.  Configuration validation guarantees an
    /// entry for every searchable lane before any search starts.
    fn index(&self, lane: Lane) -> &LaneVelocities {
        self.inner
            .get(&lane)
            .unwrap_or_else(|| panic!("no legal velocities configured for {lane}"))
    }
}
