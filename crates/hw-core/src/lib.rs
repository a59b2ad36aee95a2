//! `hw-core` — foundational types for the `rust_hw` highway automaton builder.
//!
//! This crate is a dependency of every other `hw-*` crate.  It intentionally
//! has no `hw-*` dependencies and minimal external ones (only `rustc-hash`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `Lane`, `NodeId`                                       |
//! | [`units`]     | `Velocity`, `Position`, `TimeStep`                     |
//! | [`state`]     | `CarState`, `Observation`                              |
//! | [`lanes`]     | `LaneVelocities`, `LaneVelocityTable`                  |
//! | [`occupancy`] | `Occupancy` trait, `OccupancyGrid`, `EmptyRoad`        |
//! | [`config`]    | `SearchConfig`, `GoalRegion`                           |
//! | [`error`]     | `HwError`, `HwResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.          |

pub mod config;
pub mod error;
pub mod ids;
pub mod lanes;
pub mod occupancy;
pub mod state;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GoalRegion, SearchConfig};
pub use error::{HwError, HwResult};
pub use ids::{Lane, NodeId};
pub use lanes::{LaneVelocities, LaneVelocityTable};
pub use occupancy::{EmptyRoad, Occupancy, OccupancyGrid};
pub use state::{CarState, Observation};
pub use units::{Position, TimeStep, Velocity};
