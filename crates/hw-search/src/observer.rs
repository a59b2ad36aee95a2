//! Observer hooks for search progress.
//!
//! The builder reports at level boundaries — one callback per expanded time
//! step — so applications can print progress or collect statistics without
//! the search crates carrying an output dependency.

use hw_core::TimeStep;

/// Callbacks invoked by [`GraphBuilder`](crate::GraphBuilder) as the
/// breadth-first search advances.
///
/// All methods have empty default bodies; implement only what you need.
pub trait SearchObserver {
    /// Called after the frontier at `time` has been fully expanded.
    ///
    /// `frontier` is the number of nodes that were expanded and `accepted`
    /// the number of child transitions that survived the crash test.
    fn on_level(&mut self, time: TimeStep, frontier: usize, accepted: usize) {
        let _ = (time, frontier, accepted);
    }

    /// Called once when the frontier is exhausted, with the final node count.
    fn on_complete(&mut self, node_count: usize) {
        let _ = node_count;
    }
}

/// An observer that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
