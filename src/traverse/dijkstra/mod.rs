//! Shortest-path traversal (Dijkstra) with decrease-key.
//!
//! `init_nodes` / `init_edges` build one [`CostNode`] per component of that
//! collection in an arena indexed by component index, and load every slot
//! into an [`IndexedMinHeap`](heap::IndexedMinHeap). The walk repeatedly
//! extracts the cheapest slot, visits it, and relaxes its unvisited neighbors.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `init_*` | \(O(n)\) | Arena fill + bottom-up heapify |
//! | `walk_*` | \(O((n + m) \log n)\) | One extraction per component, one decrease-key per improving edge |
//! | `cost_node` | \(O(1)\) | Arena lookup |
//! | `path_to` | \(O(\text{path length})\) | Follows parent links |
//!
//! Components that cannot be reached keep cost `+inf`; they are still
//! extracted and visited once every reachable component is done. Walkers that
//! must tell "unreachable" from "expensive" should check
//! [`VisitContext::cost`](crate::walker::VisitContext::cost).

mod cost;
pub(crate) mod heap;

pub use cost::{CostFunction, CostNode, EdgeWeightCost, UnitCost};

use heap::IndexedMinHeap;

use crate::error::{Result, TraversalError};
use crate::graph::{Component, ComponentKind, Graph};
use crate::traverse::{GraphTraversal, SourceTraversal, TraversalCore, WalkSummary};
use crate::walker::{GraphWalker, WorkingSet};

/// Visits components in non-decreasing shortest-path cost from the source.
///
/// Ties between equal costs are broken by component index; callers should not
/// rely on that order.
pub struct DijkstraTraversal<'g, G, W, C> {
    core: TraversalCore<'g, G, W>,
    source: Component,
    cost_fn: C,
    domain: Option<ComponentKind>,
    arena: Vec<CostNode>,
    heap: IndexedMinHeap,
}

impl<'g, G, W, C> DijkstraTraversal<'g, G, W, C>
where
    G: Graph,
    W: GraphWalker<G>,
    C: CostFunction<G>,
{
    /// Creates a shortest-path traversal rooted at `source`.
    pub fn new(graph: &'g G, walker: W, source: Component, cost_fn: C) -> Self {
        Self {
            core: TraversalCore::new("dijkstra", graph, walker),
            source,
            cost_fn,
            domain: None,
            arena: Vec::new(),
            heap: IndexedMinHeap::default(),
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

    /// The cost function.
    pub fn cost_function(&self) -> &C {
        &self.cost_fn
    }

    /// The collection the last `init_*` call prepared costs for.
    pub fn domain(&self) -> Option<ComponentKind> {
        self.domain
    }

    /// Current best cost and parent of `component`.
    ///
    /// Returns `None` before initialization or for components outside the
    /// initialized collection.
    pub fn cost_node(&self, component: Component) -> Option<&CostNode> {
        if self.domain != Some(component.kind()) {
            return None;
        }
        self.arena.get(component.index())
    }

    /// All cost nodes of the initialized collection, in index order.
    pub fn cost_nodes(&self) -> &[CostNode] {
        &self.arena
    }

    /// The best known path from the source to `target`, source first.
    ///
    /// Returns `None` if `target` is unknown or has not been reached.
    pub fn path_to(&self, target: Component) -> Option<Vec<Component>> {
        let node = self.cost_node(target)?;
        if !node.is_reachable() {
            return None;
        }
        let mut path = vec![target];
        let mut current = *node;
        while let Some(parent) = current.parent() {
            // Parents are always settled before their children, so a chain
            // longer than the arena means the links were corrupted.
            if path.len() > self.arena.len() {
                return None;
            }
            path.push(parent);
            current = *self.cost_node(parent)?;
        }
        path.reverse();
        Some(path)
    }

    fn prepare(&mut self, kind: ComponentKind) {
        let graph = self.core.graph();
        let source = self.source;
        self.arena = (0..graph.count_of(kind))
            .map(|i| {
                let component = kind.component(i);
                let cost = if component == source {
                    0.0
                } else {
                    f64::INFINITY
                };
                CostNode::new(component, cost, None)
            })
            .collect();
        self.heap = IndexedMinHeap::from_costs(self.arena.iter().map(CostNode::cost));
        self.domain = Some(kind);
    }

    fn walk(&mut self) -> Result<WalkSummary> {
        let Some(kind) = self.domain else {
            return Err(TraversalError::NotInitialized);
        };
        if self.source.kind() != kind {
            return Err(TraversalError::SourceOutOfDomain(self.source));
        }
        self.core.begin_walk(kind, Some(self.source))?;
        let graph = self.core.graph();

        while let Some(entry) = self.heap.pop() {
            let current = self.arena[entry.slot];
            debug_assert!(
                self.heap.peek().map_or(true, |next| next.cost >= current.cost()),
                "extracted costs must be non-decreasing"
            );
            if self.core.is_visited(current.component()) {
                continue;
            }
            let working = WorkingSet::Heap {
                entries: self.heap.entries(),
                arena: &self.arena,
            };
            if self
                .core
                .visit_with_cost(current.component(), current, working)
                .is_stop()
            {
                return self.core.stopped();
            }

            for next in graph.adjacent(current.component()) {
                if next.kind() != kind || self.core.is_visited(next) {
                    continue;
                }
                let slot = next.index();
                if !self.heap.contains(slot) {
                    continue;
                }
                let candidate =
                    current.cost() + self.cost_fn.cost(graph, current.component(), next);
                let Some(node) = self.arena.get_mut(slot) else {
                    continue;
                };
                if candidate < node.cost() {
                    node.relax(candidate, current.component());
                    self.heap.decrease_key(slot, candidate);
                    walk_trace!(component = %next, cost = candidate, "decrease-key");
                }
            }
        }

        self.core.completed()
    }
}

impl<'g, G, W, C> GraphTraversal for DijkstraTraversal<'g, G, W, C>
where
    G: Graph,
    W: GraphWalker<G>,
    C: CostFunction<G>,
{
    fn init_nodes(&mut self) {
        self.core.init_nodes();
        self.prepare(ComponentKind::Node);
    }

    fn init_edges(&mut self) {
        self.core.init_edges();
        self.prepare(ComponentKind::Edge);
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

impl<'g, G, W, C> SourceTraversal for DijkstraTraversal<'g, G, W, C>
where
    G: Graph,
    W: GraphWalker<G>,
    C: CostFunction<G>,
{
    fn source(&self) -> Component {
        self.source
    }

    fn active_elements(&self) -> Vec<Component> {
        let mut active = Vec::with_capacity(self.heap.len());
        active.extend(self.heap.slots().map(|slot| self.arena[slot].component()));
        active
    }
}
