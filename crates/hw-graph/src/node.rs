//! Graph node records and the arena that owns them.
//!
//! # Ownership model
//!
//! Every node produced by a search lives in exactly one [`NodeArena`].
//! Adjacency is stored as [`NodeId`] handles into that arena rather than
//! owning pointers, so the data model stays free of ownership cycles — the
//! graph is acyclic anyway because time steps strictly increase along every
//! edge, but handles also keep nodes `Copy`-indexable and the arena a single
//! flat allocation.

use hw_core::{CarState, NodeId, Observation};

// ── Node ──────────────────────────────────────────────────────────────────────

/// One accepted state in the transition graph, with its observation and
/// outgoing edges.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// The car state this node represents.
    pub state: CarState,

    /// Derived flags attached when the state was accepted.
    pub obs: Observation,

    /// Outgoing edges as arena handles, in acceptance order (the order the
    /// builder admitted the corresponding child transitions).
    pub children: Vec<NodeId>,
}

impl Node {
    /// A node with no children yet.
    pub fn new(state: CarState, obs: Observation) -> Self {
        Self {
            state,
            obs,
            children: Vec::new(),
        }
    }

    /// `true` if this node has no outgoing edges (horizon nodes, and interior
    /// nodes whose every candidate transition crashed).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// ── NodeArena ─────────────────────────────────────────────────────────────────

/// Append-only owner of every node produced by one search.
///
/// Handles are stable: a `NodeId` returned by [`push`][Self::push] stays
/// valid for the arena's lifetime.  Nodes are never removed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append `node` and return its handle.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// The node behind `id`.
    ///
    /// # Panics
    /// Panics on a handle from a different arena (or `NodeId::INVALID`).
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutable access, used by the builder to wire adjacency.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes pushed so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all nodes with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}

impl std::ops::IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_mut(id)
    }
}
