//! Flat enumeration of a component collection.

use crate::error::Result;
use crate::graph::{Component, ComponentKind, Graph};
use crate::traverse::{GraphTraversal, TraversalCore, WalkSummary};
use crate::walker::{GraphWalker, WorkingSet};

/// Visits every node (or edge) once, in index order.
///
/// There is no adjacency and no visited check: each call to `walk_nodes`
/// hands every node to the walker exactly once, unless the walker stops early.
pub struct BasicGraphTraversal<'g, G, W> {
    core: TraversalCore<'g, G, W>,
}

impl<'g, G, W> BasicGraphTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    /// Creates a linear traversal over `graph`.
    pub fn new(graph: &'g G, walker: W) -> Self {
        Self {
            core: TraversalCore::new("basic", graph, walker),
        }
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

    fn scan(
        &mut self,
        kind: ComponentKind,
        components: impl Iterator<Item = Component>,
    ) -> Result<WalkSummary> {
        self.core.begin_walk(kind, None)?;
        for component in components {
            if self.core.visit(component, WorkingSet::Empty).is_stop() {
                return self.core.stopped();
            }
        }
        self.core.completed()
    }
}

impl<'g, G, W> GraphTraversal for BasicGraphTraversal<'g, G, W>
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
        let graph = self.core.graph();
        self.scan(ComponentKind::Node, graph.nodes())
    }

    fn walk_edges(&mut self) -> Result<WalkSummary> {
        let graph = self.core.graph();
        self.scan(ComponentKind::Edge, graph.edges())
    }

    fn finish(&mut self) {
        self.core.finish();
    }
}
