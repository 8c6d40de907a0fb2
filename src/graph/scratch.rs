//! Per-pass scratch state for graph components.
//!
//! Every node and edge gets a `{visited, count}` slot, indexed by the
//! component's dense id. The table is owned by a traversal, so two traversals
//! over the same graph never observe each other's flags. Walkers reset slots
//! in `init` and read/write them while visiting.

use crate::graph::{Component, ComponentKind, Graph};

/// Scratch state of a single component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScratchEntry {
    /// Set once the component has been visited in the current pass.
    pub visited: bool,
    /// Free-form counter; the topological walk uses it for released in-edges.
    pub count: usize,
}

/// Side table of [`ScratchEntry`] values for all nodes and edges of a graph.
///
/// Reads of components outside the table return the default entry and writes
/// to them are ignored.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    nodes: Vec<ScratchEntry>,
    edges: Vec<ScratchEntry>,
}

impl Scratch {
    /// Creates a table with cleared slots for `node_count` nodes and `edge_count` edges.
    pub fn new(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: vec![ScratchEntry::default(); node_count],
            edges: vec![ScratchEntry::default(); edge_count],
        }
    }

    /// Creates a table sized for `graph`.
    pub fn for_graph<G: Graph>(graph: &G) -> Self {
        Self::new(graph.node_count(), graph.edge_count())
    }

    #[inline]
    fn slots(&self, kind: ComponentKind) -> &[ScratchEntry] {
        match kind {
            ComponentKind::Node => &self.nodes,
            ComponentKind::Edge => &self.edges,
        }
    }

    #[inline]
    fn slot_mut(&mut self, component: Component) -> Option<&mut ScratchEntry> {
        let slots = match component.kind() {
            ComponentKind::Node => &mut self.nodes,
            ComponentKind::Edge => &mut self.edges,
        };
        slots.get_mut(component.index())
    }

    /// Returns the entry for `component`.
    #[inline]
    pub fn entry(&self, component: Component) -> ScratchEntry {
        self.slots(component.kind())
            .get(component.index())
            .copied()
            .unwrap_or_default()
    }

    /// Returns `true` if `component` has a slot in this table.
    #[inline]
    pub fn contains(&self, component: Component) -> bool {
        component.index() < self.slots(component.kind()).len()
    }

    /// Reads the visited flag.
    #[inline]
    pub fn is_visited(&self, component: Component) -> bool {
        self.entry(component).visited
    }

    /// Writes the visited flag.
    #[inline]
    pub fn set_visited(&mut self, component: Component, visited: bool) {
        if let Some(slot) = self.slot_mut(component) {
            slot.visited = visited;
        }
    }

    /// Reads the counter.
    #[inline]
    pub fn count(&self, component: Component) -> usize {
        self.entry(component).count
    }

    /// Writes the counter.
    #[inline]
    pub fn set_count(&mut self, component: Component, count: usize) {
        if let Some(slot) = self.slot_mut(component) {
            slot.count = count;
        }
    }

    /// Increments the counter and returns the new value.
    #[inline]
    pub fn increment_count(&mut self, component: Component) -> usize {
        match self.slot_mut(component) {
            Some(slot) => {
                slot.count += 1;
                slot.count
            }
            None => 0,
        }
    }

    /// Clears the visited flag and zeroes the counter.
    #[inline]
    pub fn reset(&mut self, component: Component) {
        if let Some(slot) = self.slot_mut(component) {
            *slot = ScratchEntry::default();
        }
    }

    /// Number of visited components of the given kind.
    pub fn visited_count(&self, kind: ComponentKind) -> usize {
        self.slots(kind).iter().filter(|e| e.visited).count()
    }

    /// Visited components of the given kind, in index order.
    pub fn visited(&self, kind: ComponentKind) -> impl Iterator<Item = Component> + '_ {
        self.slots(kind)
            .iter()
            .enumerate()
            .filter(|(_, e)| e.visited)
            .map(move |(i, _)| kind.component(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_and_counts_are_independent_per_kind() {
        let mut scratch = Scratch::new(3, 2);
        scratch.set_visited(Component::Node(1), true);
        scratch.set_count(Component::Edge(1), 4);

        assert!(scratch.is_visited(Component::Node(1)));
        assert!(!scratch.is_visited(Component::Edge(1)));
        assert_eq!(scratch.count(Component::Edge(1)), 4);
        assert_eq!(scratch.count(Component::Node(1)), 0);
        assert_eq!(scratch.visited_count(ComponentKind::Node), 1);
        assert_eq!(
            scratch.visited(ComponentKind::Node).collect::<Vec<_>>(),
            vec![Component::Node(1)]
        );
    }

    #[test]
    fn test_increment_and_reset() {
        let mut scratch = Scratch::new(1, 0);
        let n = Component::Node(0);
        assert_eq!(scratch.increment_count(n), 1);
        assert_eq!(scratch.increment_count(n), 2);
        scratch.set_visited(n, true);
        scratch.reset(n);
        assert_eq!(scratch.entry(n), ScratchEntry::default());
    }

    #[test]
    fn test_out_of_range_is_inert() {
        let mut scratch = Scratch::new(1, 1);
        let missing = Component::Node(9);
        assert!(!scratch.contains(missing));
        scratch.set_visited(missing, true);
        assert!(!scratch.is_visited(missing));
        assert_eq!(scratch.increment_count(missing), 0);
    }
}
