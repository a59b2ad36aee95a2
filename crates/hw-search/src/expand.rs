//! Single-step lane expansion.

use hw_core::Lane;

/// Lanes reachable from `current` with at most one lane change, restricted to
/// the configured lane domain.
///
/// Boundary lanes yield two entries, interior lanes three, always including
/// `current` itself (staying put is a lane choice).  Enumeration order is
/// lower lane index first; the builder's adjacency lists inherit it.
///
/// Lane adjacency is numeric ±1 over a contiguous domain —
/// `SearchConfig::validate` rejects gaps and an empty domain before any
/// search starts, so an empty `lanes` slice here just yields nothing.
pub fn adjacent_lanes(current: Lane, lanes: &[Lane]) -> Vec<Lane> {
    let (Some(min), Some(max)) = (
        lanes.iter().copied().min(),
        lanes.iter().copied().max(),
    ) else {
        return Vec::new();
    };

    if min == max {
        // single-lane highway: nowhere to change to
        vec![current]
    } else if current == max {
        vec![Lane(current.0 - 1), current]
    } else if current == min {
        vec![current, Lane(current.0 + 1)]
    } else {
        vec![Lane(current.0 - 1), current, Lane(current.0 + 1)]
    }
}
