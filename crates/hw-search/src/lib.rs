//! `hw-search` — breadth-first reachable-state search for `rust_hw`.
//!
//! Builds the finite transition graph of a single car on a multi-lane
//! highway over discrete time steps: every `(lane, position, time)` state
//! reachable without a collision, annotated with speeding and goal-reached
//! observations.
//!
//! # Level loop
//!
//! ```text
//! for time in 0..max_time, while the frontier is non-empty:
//!   ① Produce — expand every frontier node (parallel with the `parallel`
//!               feature): adjacent lanes × full velocity domain; the crash
//!               test drops a candidate before it is materialized, survivors
//!               get speeding/goal observations.
//!   ② Apply   — sequentially, in frontier order: push accepted children
//!               into the node arena, wire the parent's adjacency list,
//!               collect the next frontier.
//! ```
//!
//! Nodes at `max_time` are never expanded — they stay leaves.  When the
//! frontier is exhausted the arena and root are packaged into an
//! [`Automaton`](hw_graph::Automaton).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the produce phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hw_core::EmptyRoad;
//! use hw_search::GraphBuilder;
//!
//! let builder = GraphBuilder::new(config)?;
//! let automaton = builder.build(&EmptyRoad);
//! println!("{} reachable states", automaton.node_count());
//! ```

pub mod builder;
pub mod error;
pub mod expand;
pub mod observer;
pub mod predicates;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::GraphBuilder;
pub use error::{SearchError, SearchResult};
pub use expand::adjacent_lanes;
pub use observer::{NoopObserver, SearchObserver};
pub use predicates::{has_crashed, is_at_goal, is_speeding};
