//! Walkers: the per-component policy driven by a traversal.
//!
//! A traversal decides *order*; a [`GraphWalker`] decides what visiting means,
//! which components count as already visited, and when to stop. Walkers that
//! only need the built-in visited flag can wrap a plain [`Visitor`] in a
//! [`SimpleGraphWalker`].

use std::collections::{vec_deque, VecDeque};
use std::slice;

use serde::{Deserialize, Serialize};

use crate::graph::{Component, Scratch};
use crate::traverse::dijkstra::heap::HeapEntry;
use crate::traverse::dijkstra::CostNode;

pub mod simple;

pub use simple::{SimpleGraphWalker, Visitor};

/// Returned from every visit to continue or abandon the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkControl {
    /// Keep walking.
    #[default]
    Continue,
    /// Abandon the walk immediately; queued components are not processed.
    Stop,
}

impl WalkControl {
    /// Returns `true` for [`WalkControl::Stop`].
    #[inline]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Borrowed view of a traversal's pending components.
#[derive(Debug, Clone, Copy)]
pub(crate) enum WorkingSet<'a> {
    Empty,
    Queue(&'a VecDeque<Component>),
    Stack(&'a [Component]),
    /// Heap entries index into the cost arena.
    Heap {
        entries: &'a [HeapEntry],
        arena: &'a [CostNode],
    },
}

/// Iterator over the components a traversal still holds while a visit runs.
///
/// Returned by [`VisitContext::active_elements`]. Order follows the underlying
/// container: front to back for a queue, bottom to top for a stack, and heap
/// array order for Dijkstra.
#[derive(Debug, Clone)]
pub struct ActiveElements<'a> {
    inner: ActiveInner<'a>,
}

#[derive(Debug, Clone)]
enum ActiveInner<'a> {
    Empty,
    Queue(vec_deque::Iter<'a, Component>),
    Stack(slice::Iter<'a, Component>),
    Heap {
        entries: slice::Iter<'a, HeapEntry>,
        arena: &'a [CostNode],
    },
}

impl Iterator for ActiveElements<'_> {
    type Item = Component;

    #[inline]
    fn next(&mut self) -> Option<Component> {
        match &mut self.inner {
            ActiveInner::Empty => None,
            ActiveInner::Queue(iter) => iter.next().copied(),
            ActiveInner::Stack(iter) => iter.next().copied(),
            ActiveInner::Heap { entries, arena } => {
                let entry = entries.next()?;
                arena.get(entry.slot).map(CostNode::component)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.inner {
            ActiveInner::Empty => 0,
            ActiveInner::Queue(iter) => iter.len(),
            ActiveInner::Stack(iter) => iter.len(),
            ActiveInner::Heap { entries, .. } => entries.len(),
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for ActiveElements<'_> {}

/// What a walker sees while visiting a component.
///
/// Gives access to the graph, the traversal's scratch table, the components
/// still pending in its queue, stack, or heap, and, during a Dijkstra walk,
/// the visited component's settled cost and predecessor plus the current
/// cost estimate of every other component.
pub struct VisitContext<'a, G> {
    graph: &'a G,
    scratch: &'a mut Scratch,
    cost: Option<CostNode>,
    working: WorkingSet<'a>,
}

impl<'a, G> VisitContext<'a, G> {
    pub(crate) fn new(graph: &'a G, scratch: &'a mut Scratch) -> Self {
        Self {
            graph,
            scratch,
            cost: None,
            working: WorkingSet::Empty,
        }
    }

    pub(crate) fn with_working_set(mut self, working: WorkingSet<'a>) -> Self {
        self.working = working;
        self
    }

    pub(crate) fn with_cost(mut self, node: CostNode) -> Self {
        self.cost = Some(node);
        self
    }

    /// The graph being walked.
    #[inline]
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Read access to the scratch table.
    #[inline]
    pub fn scratch(&self) -> &Scratch {
        self.scratch
    }

    /// Write access to the scratch table.
    #[inline]
    pub fn scratch_mut(&mut self) -> &mut Scratch {
        self.scratch
    }

    /// The full cost node of the component being visited (Dijkstra only).
    #[inline]
    pub fn cost_node(&self) -> Option<&CostNode> {
        self.cost.as_ref()
    }

    /// Shortest known cost from the source (Dijkstra only).
    #[inline]
    pub fn cost(&self) -> Option<f64> {
        self.cost.map(|n| n.cost())
    }

    /// Predecessor on the shortest known path (Dijkstra only; `None` at the source).
    #[inline]
    pub fn parent(&self) -> Option<Component> {
        self.cost.and_then(|n| n.parent())
    }

    /// Components still waiting in the traversal's queue, stack, or heap.
    ///
    /// The component being visited has already been taken out. Linear scans
    /// have no working set and yield nothing.
    #[inline]
    pub fn active_elements(&self) -> ActiveElements<'a> {
        let inner = match self.working {
            WorkingSet::Empty => ActiveInner::Empty,
            WorkingSet::Queue(queue) => ActiveInner::Queue(queue.iter()),
            WorkingSet::Stack(stack) => ActiveInner::Stack(stack.iter()),
            WorkingSet::Heap { entries, arena } => ActiveInner::Heap {
                entries: entries.iter(),
                arena,
            },
        };
        ActiveElements { inner }
    }

    /// Current best cost and parent of any component of the walked collection
    /// (Dijkstra only).
    ///
    /// Settled components report their final cost; pending ones report the
    /// best estimate so far, `+inf` if not yet reached.
    #[inline]
    pub fn cost_of(&self, component: Component) -> Option<&'a CostNode> {
        let WorkingSet::Heap { arena, .. } = self.working else {
            return None;
        };
        arena
            .get(component.index())
            .filter(|node| node.component() == component)
    }
}

/// Per-component policy for a traversal.
///
/// Contract:
/// - `init` runs once per component, before a pass, from `init_nodes` / `init_edges`.
/// - `is_visited` must agree with what `visit` records: once `visit` has run
///   for a component, `is_visited` must return `true` for it until the next
///   `init`. Rooted traversals rely on this to terminate on cyclic graphs.
/// - `visit` returning [`WalkControl::Stop`] ends the walk right away.
/// - `finish` runs when the caller finishes the traversal.
pub trait GraphWalker<G> {
    /// Resets scratch state for `component`.
    fn init(&mut self, component: Component, scratch: &mut Scratch);

    /// Returns `true` if `component` must be skipped.
    fn is_visited(&self, component: Component, scratch: &Scratch) -> bool;

    /// Visits `component`.
    fn visit(&mut self, component: Component, cx: &mut VisitContext<'_, G>) -> WalkControl;

    /// Called once after a walk, when the caller finishes the traversal.
    fn finish(&mut self);
}

impl<G, W> GraphWalker<G> for &mut W
where
    W: GraphWalker<G> + ?Sized,
{
    #[inline]
    fn init(&mut self, component: Component, scratch: &mut Scratch) {
        (**self).init(component, scratch);
    }

    #[inline]
    fn is_visited(&self, component: Component, scratch: &Scratch) -> bool {
        (**self).is_visited(component, scratch)
    }

    #[inline]
    fn visit(&mut self, component: Component, cx: &mut VisitContext<'_, G>) -> WalkControl {
        (**self).visit(component, cx)
    }

    #[inline]
    fn finish(&mut self) {
        (**self).finish();
    }
}
