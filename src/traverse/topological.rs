//! Topological traversal (Kahn's algorithm) over directed graphs.

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Component, ComponentKind, DirectedGraph};
use crate::traverse::{GraphTraversal, TraversalCore, WalkSummary};
use crate::walker::{GraphWalker, WorkingSet};

/// Visits nodes so that every node comes after all of its in-neighbors.
///
/// `init_nodes` seeds the queue with every node of in-degree 0. Visiting a node
/// bumps the scratch `count` of each out-neighbor; a neighbor is queued once
/// its count reaches its in-degree.
///
/// Cycles are not an error. Nodes on a cycle, and nodes only reachable through
/// one, are never released and the walk completes without visiting them.
/// [`TopologicalTraversal::blocked_nodes`] lists them afterwards.
///
/// Only nodes are ordered: [`GraphTraversal::walk_edges`] returns
/// [`TraversalError::Unsupported`](crate::error::TraversalError::Unsupported).
pub struct TopologicalTraversal<'g, G, W> {
    core: TraversalCore<'g, G, W>,
    queue: VecDeque<Component>,
}

impl<'g, G, W> TopologicalTraversal<'g, G, W>
where
    G: DirectedGraph,
    W: GraphWalker<G>,
{
    /// Creates a topological traversal.
    pub fn new(graph: &'g G, walker: W) -> Self {
        Self {
            core: TraversalCore::new("topological", graph, walker),
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

    /// Nodes waiting in the queue.
    pub fn active_elements(&self) -> Vec<Component> {
        self.queue.iter().copied().collect()
    }

    /// Nodes with incoming edges whose predecessors were not all visited.
    ///
    /// After a completed walk this is exactly the set of nodes on or behind a
    /// cycle; it is empty for acyclic graphs.
    pub fn blocked_nodes(&self) -> Vec<Component> {
        let graph = self.core.graph();
        let scratch = self.core.scratch();
        (0..graph.node_count())
            .filter(|&node| {
                let in_degree = graph.in_degree(node);
                in_degree > 0 && scratch.count(Component::Node(node)) < in_degree
            })
            .map(Component::Node)
            .collect()
    }

    fn walk(&mut self) -> Result<WalkSummary> {
        self.core.begin_walk(ComponentKind::Node, None)?;
        let graph = self.core.graph();

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
            for next in graph.out_nodes(current.index()) {
                let released = self.core.scratch_mut().increment_count(Component::Node(next));
                if released == graph.in_degree(next) {
                    self.queue.push_back(Component::Node(next));
                }
            }
        }

        #[cfg(feature = "tracing")]
        {
            let unvisited = graph.node_count()
                - self.core.scratch().visited_count(ComponentKind::Node);
            if unvisited > 0 {
                walk_debug!(unvisited, "topological walk left nodes unreleased");
            }
        }
        self.core.completed()
    }
}

impl<'g, G, W> GraphTraversal for TopologicalTraversal<'g, G, W>
where
    G: DirectedGraph,
    W: GraphWalker<G>,
{
    fn init_nodes(&mut self) {
        self.core.init_nodes();
        let graph = self.core.graph();
        self.queue.clear();
        self.queue.extend(
            (0..graph.count_of(ComponentKind::Node))
                .filter(|&node| graph.in_degree(node) == 0)
                .map(Component::Node),
        );
    }

    fn init_edges(&mut self) {
        self.core.init_edges();
        self.queue.clear();
    }

    fn walk_nodes(&mut self) -> Result<WalkSummary> {
        self.walk()
    }

    fn walk_edges(&mut self) -> Result<WalkSummary> {
        Err(self.core.unsupported("walk_edges"))
    }

    fn finish(&mut self) {
        self.core.finish();
    }
}
