//! Depth-first traversal over a LIFO stack.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Component, Graph};
use crate::traverse::{GraphTraversal, SourceTraversal, TraversalCore, WalkSummary};
use crate::walker::{GraphWalker, WorkingSet};

/// Order in which siblings are visited by [`DepthFirstTraversal`].
///
/// Neighbors are pushed onto a stack, so pushing them in adjacency order makes
/// the *last* neighbor come off first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiblingOrder {
    /// Push in adjacency order; siblings are visited last-to-first.
    #[default]
    Reversed,
    /// Push in reverse; siblings are visited in adjacency order.
    Adjacency,
}

/// Pre-order depth-first traversal.
///
/// ```text
/// 0 -> 1, 2 ; 1 -> 3 ; 2 -> 3
///
/// SiblingOrder::Reversed  : 0, 2, 3, 1
/// SiblingOrder::Adjacency : 0, 1, 3, 2
/// ```
pub struct DepthFirstTraversal<'g, G, W> {
    core: TraversalCore<'g, G, W>,
    source: Component,
    order: SiblingOrder,
    stack: Vec<Component>,
}

impl<'g, G, W> DepthFirstTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    /// Creates a depth-first traversal rooted at `source` with [`SiblingOrder::Reversed`].
    pub fn new(graph: &'g G, walker: W, source: Component) -> Self {
        Self {
            core: TraversalCore::new("depth_first", graph, walker),
            source,
            order: SiblingOrder::default(),
            stack: Vec::new(),
        }
    }

    /// Sets the sibling order.
    #[must_use]
    pub fn with_sibling_order(mut self, order: SiblingOrder) -> Self {
        self.order = order;
        self
    }

    /// The configured sibling order.
    pub fn sibling_order(&self) -> SiblingOrder {
        self.order
    }

    /// Shared traversal state.
    pub fn core(&self) -> &TraversalCore<'g, G, W> {
        &self.core
    }

    /// Shared traversal state, mutably.
    pub fn core_mut(&mut self) -> &mut TraversalCore<'g, G, W> {
        &mut self.core
    }

    /// Returns the walker.
    pub fn into_walker(self) -> W {
        self.core.into_walker()
    }

    fn walk(&mut self) -> Result<WalkSummary> {
        self.core.begin_walk(self.source.kind(), Some(self.source))?;
        let graph = self.core.graph();

        self.stack.clear();
        self.stack.push(self.source);

        while let Some(current) = self.stack.pop() {
            if self.core.is_visited(current) {
                continue;
            }
            if self
                .core
                .visit(current, WorkingSet::Stack(&self.stack))
                .is_stop()
            {
                return self.core.stopped();
            }

            let base = self.stack.len();
            for next in graph.adjacent(current) {
                if !self.core.is_visited(next) {
                    self.stack.push(next);
                }
            }
            if self.order == SiblingOrder::Adjacency {
                self.stack[base..].reverse();
            }
        }

        self.core.completed()
    }
}

impl<'g, G, W> GraphTraversal for DepthFirstTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    fn init_nodes(&mut self) {
        self.core.init_nodes();
    }

    fn init_edges(&mut self) {
        self.core.init_edges();
    }

    fn walk_nodes(&mut self) -> Result<WalkSummary> {
        self.walk()
    }

    fn walk_edges(&mut self) -> Result<WalkSummary> {
        self.walk()
    }

    fn finish(&mut self) {
        self.core.finish();
    }
}

impl<'g, G, W> SourceTraversal for DepthFirstTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    fn source(&self) -> Component {
        self.source
    }

    fn active_elements(&self) -> Vec<Component> {
        self.stack.clone()
    }
}
