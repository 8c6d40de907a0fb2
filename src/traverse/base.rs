//! State shared by every strategy: graph, walker, scratch table, lifecycle.

use crate::error::{Result, TraversalError};
use crate::graph::{Component, ComponentKind, Graph, Scratch};
use crate::traverse::dijkstra::CostNode;
use crate::traverse::{WalkStatus, WalkSummary};
use crate::walker::{GraphWalker, VisitContext, WalkControl, WorkingSet};

/// Lifecycle of a traversal.
///
/// `Uninitialized -> Initialized -> Walking -> Finished`; `init_*` may be
/// called again from any phase to start a fresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No `init_*` call yet.
    Uninitialized,
    /// Per-component state has been reset.
    Initialized,
    /// A walk is in progress.
    Walking,
    /// The last walk returned.
    Finished,
}

/// Graph, walker and per-pass state, with the operations all strategies share.
///
/// Strategies embed one of these and implement only their walking algorithm.
pub struct TraversalCore<'g, G, W> {
    strategy: &'static str,
    graph: &'g G,
    walker: W,
    scratch: Scratch,
    phase: Phase,
    initialized: Option<ComponentKind>,
    visits: usize,
}

impl<'g, G, W> TraversalCore<'g, G, W>
where
    G: Graph,
    W: GraphWalker<G>,
{
    /// Creates the shared state with a scratch table sized for `graph`.
    pub fn new(strategy: &'static str, graph: &'g G, walker: W) -> Self {
        Self {
            strategy,
            graph,
            walker,
            scratch: Scratch::for_graph(graph),
            phase: Phase::Uninitialized,
            initialized: None,
            visits: 0,
        }
    }

    /// Name of the owning strategy, used in errors and log events.
    #[inline]
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// The graph being walked.
    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The walker.
    #[inline]
    pub fn walker(&self) -> &W {
        &self.walker
    }

    /// The walker, mutably.
    #[inline]
    pub fn walker_mut(&mut self) -> &mut W {
        &mut self.walker
    }

    /// Consumes the traversal state and returns the walker.
    pub fn into_walker(self) -> W {
        self.walker
    }

    /// Per-component scratch state of the current pass.
    #[inline]
    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    #[inline]
    pub(crate) fn scratch_mut(&mut self) -> &mut Scratch {
        &mut self.scratch
    }

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The collection the last `init_*` call reset, if any.
    #[inline]
    pub fn initialized(&self) -> Option<ComponentKind> {
        self.initialized
    }

    /// Runs `walker.init` on every node.
    pub fn init_nodes(&mut self) {
        let graph = self.graph;
        for component in graph.nodes() {
            self.walker.init(component, &mut self.scratch);
        }
        self.phase = Phase::Initialized;
        self.initialized = Some(ComponentKind::Node);
        walk_trace!(strategy = self.strategy, count = graph.node_count(), "nodes initialized");
    }

    /// Runs `walker.init` on every edge.
    pub fn init_edges(&mut self) {
        let graph = self.graph;
        for component in graph.edges() {
            self.walker.init(component, &mut self.scratch);
        }
        self.phase = Phase::Initialized;
        self.initialized = Some(ComponentKind::Edge);
        walk_trace!(strategy = self.strategy, count = graph.edge_count(), "edges initialized");
    }

    /// Checks preconditions and enters [`Phase::Walking`].
    ///
    /// `kind` is the collection the walk covers; the last `init_*` call must
    /// have reset that collection. Nothing changes when a precondition fails.
    pub(crate) fn begin_walk(
        &mut self,
        kind: ComponentKind,
        source: Option<Component>,
    ) -> Result<()> {
        if self.initialized != Some(kind) {
            return Err(TraversalError::NotInitialized);
        }
        if let Some(source) = source {
            if !self.graph.contains(source) {
                return Err(TraversalError::UnknownComponent(source));
            }
        }
        self.phase = Phase::Walking;
        self.visits = 0;
        walk_debug!(strategy = self.strategy, ?source, "walk started");
        Ok(())
    }

    /// Walker's view of whether `component` was already visited.
    #[inline]
    pub(crate) fn is_visited(&self, component: Component) -> bool {
        self.walker.is_visited(component, &self.scratch)
    }

    /// Visits `component` through the walker, exposing the pending `working` set.
    #[inline]
    pub(crate) fn visit(&mut self, component: Component, working: WorkingSet<'_>) -> WalkControl {
        self.visits += 1;
        let mut cx =
            VisitContext::new(self.graph, &mut self.scratch).with_working_set(working);
        self.walker.visit(component, &mut cx)
    }

    /// Visits `component` with its Dijkstra cost exposed to the walker.
    #[inline]
    pub(crate) fn visit_with_cost(
        &mut self,
        component: Component,
        node: CostNode,
        working: WorkingSet<'_>,
    ) -> WalkControl {
        self.visits += 1;
        let mut cx = VisitContext::new(self.graph, &mut self.scratch)
            .with_cost(node)
            .with_working_set(working);
        self.walker.visit(component, &mut cx)
    }

    /// Leaves [`Phase::Walking`] and summarizes the walk.
    pub(crate) fn end_walk(&mut self, status: WalkStatus) -> WalkSummary {
        self.phase = Phase::Finished;
        walk_debug!(
            strategy = self.strategy,
            ?status,
            visited = self.visits,
            "walk ended"
        );
        WalkSummary {
            status,
            visited: self.visits,
        }
    }

    /// Shorthand for ending a walk the walker stopped.
    #[inline]
    pub(crate) fn stopped(&mut self) -> Result<WalkSummary> {
        Ok(self.end_walk(WalkStatus::Stopped))
    }

    /// Shorthand for ending a walk that ran to exhaustion.
    #[inline]
    pub(crate) fn completed(&mut self) -> Result<WalkSummary> {
        Ok(self.end_walk(WalkStatus::Completed))
    }

    /// The error for an entry point the strategy does not implement.
    pub(crate) fn unsupported(&self, operation: &'static str) -> TraversalError {
        TraversalError::Unsupported {
            strategy: self.strategy,
            operation,
        }
    }

    /// Notifies the walker.
    pub fn finish(&mut self) {
        self.walker.finish();
    }
}
