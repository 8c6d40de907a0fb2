//! Adapter from a bare visit callback to a full [`GraphWalker`].

use crate::graph::{Component, Scratch};
use crate::walker::{GraphWalker, VisitContext, WalkControl};

/// The minimal visiting capability: look at a component, decide whether to go on.
pub trait Visitor {
    /// Called once per visited component.
    fn visit(&mut self, component: Component) -> WalkControl;
}

impl<F> Visitor for F
where
    F: FnMut(Component) -> WalkControl,
{
    #[inline]
    fn visit(&mut self, component: Component) -> WalkControl {
        self(component)
    }
}

/// A [`GraphWalker`] that tracks visits with the scratch table's own flag.
///
/// `init` clears the flag and zeroes the counter, `is_visited` reads the flag,
/// `visit` sets it before calling the wrapped [`Visitor`], `finish` does nothing.
///
/// ```
/// use halo_traverse::graph::{Component, EdgeListGraph};
/// use halo_traverse::traverse::{BreadthFirstTraversal, GraphTraversal};
/// use halo_traverse::walker::{SimpleGraphWalker, WalkControl};
///
/// let graph = EdgeListGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]).unwrap();
/// let mut order = Vec::new();
/// let mut walker = SimpleGraphWalker::new(|c: Component| {
///     order.push(c.index());
///     WalkControl::Continue
/// });
///
/// let mut bfs = BreadthFirstTraversal::new(&graph, &mut walker, Component::Node(0));
/// bfs.init_nodes();
/// bfs.walk_nodes().unwrap();
/// drop(bfs);
/// drop(walker);
///
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleGraphWalker<V> {
    visitor: V,
}

impl<V: Visitor> SimpleGraphWalker<V> {
    /// Wraps `visitor`.
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    /// The wrapped visitor.
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// The wrapped visitor, mutably.
    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    /// Unwraps the visitor.
    pub fn into_inner(self) -> V {
        self.visitor
    }
}

impl<G, V: Visitor> GraphWalker<G> for SimpleGraphWalker<V> {
    #[inline]
    fn init(&mut self, component: Component, scratch: &mut Scratch) {
        scratch.reset(component);
    }

    #[inline]
    fn is_visited(&self, component: Component, scratch: &Scratch) -> bool {
        scratch.is_visited(component)
    }

    #[inline]
    fn visit(&mut self, component: Component, cx: &mut VisitContext<'_, G>) -> WalkControl {
        cx.scratch_mut().set_visited(component, true);
        self.visitor.visit(component)
    }

    #[inline]
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeListGraph;

    #[test]
    fn test_init_clears_flag_and_count() {
        let mut walker = SimpleGraphWalker::new(|_: Component| WalkControl::Continue);
        let mut scratch = Scratch::new(1, 0);
        let n = Component::Node(0);
        scratch.set_visited(n, true);
        scratch.set_count(n, 3);

        GraphWalker::<EdgeListGraph>::init(&mut walker, n, &mut scratch);
        assert!(!scratch.is_visited(n));
        assert_eq!(scratch.count(n), 0);
    }

    #[test]
    fn test_visit_marks_then_delegates() {
        let g = EdgeListGraph::directed(1, []).unwrap();
        let mut scratch = Scratch::new(1, 0);
        let mut seen = Vec::new();
        let mut walker = SimpleGraphWalker::new(|c: Component| {
            seen.push(c);
            WalkControl::Stop
        });
        let n = Component::Node(0);

        let control = {
            let mut cx = VisitContext::new(&g, &mut scratch);
            walker.visit(n, &mut cx)
        };
        assert_eq!(control, WalkControl::Stop);
        assert!(GraphWalker::<EdgeListGraph>::is_visited(&walker, n, &scratch));
        drop(walker);
        assert_eq!(seen, vec![n]);
    }
}
