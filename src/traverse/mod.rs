//! Traversal strategies.
//!
//! Every strategy is driven the same way:
//!
//! 1. `init_nodes()` or `init_edges()` resets per-component state through the walker
//! 2. `walk_nodes()` or `walk_edges()` runs the algorithm, calling `walker.visit`
//! 3. `finish()` tells the walker the caller is done
//!
//! | Strategy | Working set | Order |
//! |----------|-------------|-------|
//! | [`BasicGraphTraversal`] | none | collection order, no adjacency |
//! | [`BreadthFirstTraversal`] | FIFO queue | non-decreasing hop distance |
//! | [`DepthFirstTraversal`] | LIFO stack | pre-order, see [`SiblingOrder`] |
//! | [`ReverseDepthFirstTraversal`] | LIFO stack | visit on discovery, pop when exhausted |
//! | [`DijkstraTraversal`] | indexed min-heap | non-decreasing path cost |
//! | [`TopologicalTraversal`] | FIFO queue | Kahn order, nodes only |

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Component;

pub mod base;
pub mod basic;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;
pub mod reverse_depth_first;
pub mod topological;

pub use base::{Phase, TraversalCore};
pub use basic::BasicGraphTraversal;
pub use breadth_first::BreadthFirstTraversal;
pub use depth_first::{DepthFirstTraversal, SiblingOrder};
pub use dijkstra::{CostFunction, CostNode, DijkstraTraversal, EdgeWeightCost, UnitCost};
pub use reverse_depth_first::ReverseDepthFirstTraversal;
pub use topological::TopologicalTraversal;

/// The lifecycle shared by all strategies.
pub trait GraphTraversal {
    /// Calls `walker.init` on every node, in index order.
    fn init_nodes(&mut self);

    /// Calls `walker.init` on every edge, in index order.
    fn init_edges(&mut self);

    /// Walks over nodes.
    ///
    /// # Errors
    /// Fails if the traversal was never initialized, if its source is not in
    /// the graph, or if the strategy cannot walk nodes.
    fn walk_nodes(&mut self) -> Result<WalkSummary>;

    /// Walks over edges.
    ///
    /// # Errors
    /// As for [`GraphTraversal::walk_nodes`].
    fn walk_edges(&mut self) -> Result<WalkSummary>;

    /// Notifies the walker that the caller is done. Never called implicitly.
    fn finish(&mut self);
}

/// Strategies rooted at a single source component.
///
/// Rooted strategies do not distinguish node walks from edge walks: both entry
/// points run the same algorithm, and the source plus the graph's adjacency
/// decide which collection is covered.
pub trait SourceTraversal: GraphTraversal {
    /// The starting component.
    fn source(&self) -> Component;

    /// Snapshot of the working set (queue, stack or heap).
    ///
    /// Left as the last walk ended, so after a STOP it holds the components
    /// that were still pending; cleared when the next walk starts.
    fn active_elements(&self) -> Vec<Component>;
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkStatus {
    /// The working set (or collection) was exhausted.
    Completed,
    /// The walker returned [`WalkControl::Stop`](crate::walker::WalkControl::Stop).
    Stopped,
}

/// Outcome of one `walk_nodes` / `walk_edges` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkSummary {
    /// How the walk ended.
    pub status: WalkStatus,
    /// Number of `visit` calls made, including the one that stopped the walk.
    pub visited: usize,
}

impl WalkSummary {
    /// Returns `true` if the walker stopped the walk.
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        matches!(self.status, WalkStatus::Stopped)
    }

    /// Returns `true` if the walk ran to exhaustion.
    #[inline]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, WalkStatus::Completed)
    }
}
