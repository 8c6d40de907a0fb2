//! Depth-first traversal that keeps parents on the stack until exhausted.

use crate::error::Result;
use crate::graph::{Component, Graph};
use crate::traverse::{GraphTraversal, SourceTraversal, TraversalCore, WalkSummary};
use crate::walker::{GraphWalker, WorkingSet};

/// Depth-first traversal driven by the top of the stack.
///
/// The source is visited immediately. Each step peeks at the top of the stack:
/// the first unvisited neighbor is visited and pushed on top of its parent;
/// a top with no unvisited neighbor is popped. Components therefore leave the
/// stack in post-order (last discovered branch finishes first), while visits
/// happen on discovery.
pub struct ReverseDepthFirstTraversal<'g, G, W> {
    core: TraversalCore<'g, G, W>,
    source: Component,
    stack: Vec<Component>,
}

impl<'g, G, W> ReverseDepthFirstTraversal<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    /// Creates a reverse depth-first traversal rooted at `source`.
    pub fn new(graph: &'g G, walker: W, source: Component) -> Self {
        Self {
            core: TraversalCore::new("reverse_depth_first", graph, walker),
            source,
            stack: Vec::new(),
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

        self.stack.clear();
        if self
            .core
            .visit(self.source, WorkingSet::Stack(&self.stack))
            .is_stop()
        {
            return self.core.stopped();
        }
        self.stack.push(self.source);

        while let Some(&top) = self.stack.last() {
            let next = graph
                .adjacent(top)
                .find(|&candidate| !self.core.is_visited(candidate));
            match next {
                Some(child) => {
                    if self
                        .core
                        .visit(child, WorkingSet::Stack(&self.stack))
                        .is_stop()
                    {
                        return self.core.stopped();
                    }
                    self.stack.push(child);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        self.core.completed()
    }
}

impl<'g, G, W> GraphTraversal for ReverseDepthFirstTraversal<'g, G, W>
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

impl<'g, G, W> SourceTraversal for ReverseDepthFirstTraversal<'g, G, W>
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
