//! Breadth-first traversal over a FIFO queue.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Component, Graph};
use crate::traverse::{GraphTraversal, SourceTraversal, TraversalCore, WalkSummary};
use crate::walker::{GraphWalker, WorkingSet};

/// Visits components in non-decreasing hop distance from the source.
///
/// Neighbors are enqueued whenever they are unvisited at push time, so a
/// component can sit in the queue more than once; duplicates are discarded
/// when popped.
pub struct BreadthFirstTraversal<'g, G, W> {
    core: TraversalCore<'g, G, W>,
    source: Component,
    queue: VecDeque<Component>,
}

impl<'g, G, W> BreadthFirstTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    /// Creates a breadth-first traversal rooted at `source`.
    pub fn new(graph: &'g G, walker: W, source: Component) -> Self {
        Self {
            core: TraversalCore::new("breadth_first", graph, walker),
            source,
            queue: VecDeque::new(),
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

    fn walk(&mut self) -> Result<WalkSummary> {
        self.core.begin_walk(self.source.kind(), Some(self.source))?;
        let graph = self.core.graph();

        self.queue.clear();
        self.queue.push_back(self.source);

        while let Some(current) = self.queue.pop_front() {
            if self.core.is_visited(current) {
                continue;
            }
            if self
                .core
                .visit(current, WorkingSet::Queue(&self.queue))
                .is_stop()
            {
                return self.core.stopped();
            }
            for next in graph.adjacent(current) {
                if !self.core.is_visited(next) {
                    self.queue.push_back(next);
                }
            }
        }

        self.core.completed()
    }
}

impl<'g, G, W> GraphTraversal for BreadthFirstTraversal<'g, G, W>
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

impl<'g, G, W> SourceTraversal for BreadthFirstTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    fn source(&self) -> Component {
        self.source
    }

    fn active_elements(&self) -> Vec<Component> {
        self.queue.iter().copied().collect()
    }
}
