//! The finished transition system.

use hw_core::NodeId;

use crate::{Node, NodeArena};

/// The output artifact of a search: every accepted node plus the designated
/// start node.
///
/// Created once, after the builder's frontier is exhausted, and read-only
/// thereafter — downstream planning and verification tools only ever walk it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Automaton {
    arena: NodeArena,
    start: NodeId,
}

impl Automaton {
    /// Package a completed arena and its root.
    ///
    /// # Panics
    /// Panics in debug mode if `start` is not a handle into `arena`.
    pub fn new(arena: NodeArena, start: NodeId) -> Self {
        debug_assert!(start.index() < arena.len());
        Self { arena, start }
    }

    /// Handle of the start node.
    #[inline]
    pub fn start_id(&self) -> NodeId {
        self.start
    }

    /// The start node itself.
    #[inline]
    pub fn start(&self) -> &Node {
        self.arena.node(self.start)
    }

    /// The node behind `id`.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.node(id)
    }

    /// Outgoing edges of `id`, in acceptance order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.arena.node(id).children
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Iterate all nodes with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.arena.iter()
    }

    // ── Derived statistics ────────────────────────────────────────────────

    /// Number of nodes observed at the goal.
    pub fn goal_count(&self) -> usize {
        self.arena.iter().filter(|(_, n)| n.obs.at_goal).count()
    }

    /// Number of nodes observed speeding.
    pub fn speeding_count(&self) -> usize {
        self.arena.iter().filter(|(_, n)| n.obs.speeding).count()
    }

    /// Number of nodes with no outgoing edges.
    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|(_, n)| n.is_leaf()).count()
    }
}
