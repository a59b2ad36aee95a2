//! `hw-graph` — node storage for the `rust_hw` highway automaton builder.
//!
//! Two pieces:
//!
//! - [`NodeArena`] — the single, append-only owner of every [`Node`] a search
//!   produces; adjacency lists hold [`hw_core::NodeId`] handles into it.
//! - [`Automaton`] — the read-only output container packaging the arena with
//!   its start node.
//!
//! The search logic that fills these lives in `hw-search`; this crate holds
//! no policy, only storage.

pub mod automaton;
pub mod node;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use automaton::Automaton;
pub use node::{Node, NodeArena};
