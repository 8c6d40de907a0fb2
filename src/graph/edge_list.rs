//! An immutable weighted graph stored as an edge list plus CSR incidence.
//!
//! This is the reference collaborator for the traversals: nodes and edges are
//! dense indices, and adjacency is answered from two incidence tables.
//!
//! Memory layout:
//! - `edges`: one record per edge (`source`, `target`, `weight`), in insertion order
//! - `out_offsets` / `out_edges`: row offsets (length `n + 1`) and edge ids leaving each node
//! - `in_offsets` / `in_edges`: the same for edges entering each node
//!
//! Undirected graphs store each edge in the incidence rows of both endpoints
//! (once for self-loops), and use the same rows for "in" and "out".
//!
//! Adjacency:
//! - a node is adjacent to the far endpoint of each edge leaving it
//! - an edge is adjacent to the other edges that continue from it: for directed
//!   graphs the edges leaving its target, for undirected graphs every other edge
//!   touching either endpoint

use crate::error::{Result, TraversalError};
use crate::graph::{Component, DirectedGraph, EdgeId, Graph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeRecord {
    source: NodeId,
    target: NodeId,
    weight: f64,
}

/// A weighted graph with fixed topology.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `directed` / `undirected` | \(O(n + m)\) | Counting-sort build of both incidence tables |
/// | `adjacent(node)` | \(O(1)\) + \(O(\text{degree})\) iteration | Slice of the out row |
/// | `adjacent(edge)` | \(O(1)\) + \(O(\text{degree})\) iteration | Rows of the continuing endpoint(s) |
/// | `in_degree` | \(O(1)\) | Row length |
/// | `edges_between` | \(O(\text{out-degree})\) | Linear scan of the out row |
#[derive(Debug, Clone)]
pub struct EdgeListGraph {
    directed: bool,
    node_count: usize,
    edges: Vec<EdgeRecord>,
    out_offsets: Vec<usize>,
    out_edges: Vec<EdgeId>,
    in_offsets: Vec<usize>,
    in_edges: Vec<EdgeId>,
}

impl EdgeListGraph {
    /// Builds a directed graph from `(source, target, weight)` triples.
    ///
    /// Edge ids follow the iteration order of `edges`.
    ///
    /// # Errors
    /// Returns [`TraversalError::UnknownComponent`] if an endpoint is not below `node_count`.
    pub fn directed<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        Self::build(true, node_count, edges)
    }

    /// Builds an undirected graph from `(a, b, weight)` triples.
    ///
    /// # Errors
    /// Returns [`TraversalError::UnknownComponent`] if an endpoint is not below `node_count`.
    pub fn undirected<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        Self::build(false, node_count, edges)
    }

    /// Builds a directed graph with unit weights from adjacency lists.
    ///
    /// # Errors
    /// Returns [`TraversalError::UnknownComponent`] if a target is out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<NodeId>]) -> Result<Self> {
        let edges = adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, nbrs)| nbrs.iter().map(move |&v| (u, v, 1.0)));
        Self::directed(adjacency.len(), edges)
    }

    fn build<I>(directed: bool, node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut records = Vec::new();
        for (source, target, weight) in edges {
            for node in [source, target] {
                if node >= node_count {
                    return Err(TraversalError::UnknownComponent(Component::Node(node)));
                }
            }
            records.push(EdgeRecord {
                source,
                target,
                weight,
            });
        }

        let (out_offsets, out_edges, in_offsets, in_edges) = if directed {
            let out = incidence(
                node_count,
                records.iter().enumerate().map(|(e, r)| (r.source, e)),
            );
            let inc = incidence(
                node_count,
                records.iter().enumerate().map(|(e, r)| (r.target, e)),
            );
            (out.0, out.1, inc.0, inc.1)
        } else {
            let both = incidence(
                node_count,
                records.iter().enumerate().flat_map(|(e, r)| {
                    let far = (r.source != r.target).then_some((r.target, e));
                    core::iter::once((r.source, e)).chain(far)
                }),
            );
            (both.0.clone(), both.1.clone(), both.0, both.1)
        };

        Ok(Self {
            directed,
            node_count,
            edges: records,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        })
    }

    /// Returns `true` for graphs built with [`EdgeListGraph::directed`].
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns `(source, target)` of `edge`.
    pub fn endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge).map(|r| (r.source, r.target))
    }

    /// Returns the weight of `edge`.
    pub fn weight(&self, edge: EdgeId) -> Option<f64> {
        self.edges.get(edge).map(|r| r.weight)
    }

    /// Edge ids leaving `node` (all incident edges when undirected).
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        row(&self.out_offsets, &self.out_edges, node)
    }

    /// Edge ids entering `node` (all incident edges when undirected).
    pub fn in_edges(&self, node: NodeId) -> &[EdgeId] {
        row(&self.in_offsets, &self.in_edges, node)
    }

    /// Edges that lead from `from` to `to`.
    pub fn edges_between(&self, from: NodeId, to: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_edges(from)
            .iter()
            .copied()
            .filter(move |&e| self.opposite(e, from) == to)
    }

    /// The endpoint of `edge` that is not `node`; `node` itself for self-loops.
    #[inline]
    fn opposite(&self, edge: EdgeId, node: NodeId) -> NodeId {
        let r = &self.edges[edge];
        if r.source == node {
            r.target
        } else {
            r.source
        }
    }
}

fn row<'a>(offsets: &[usize], ids: &'a [EdgeId], node: NodeId) -> &'a [EdgeId] {
    match (offsets.get(node), offsets.get(node + 1)) {
        (Some(&start), Some(&end)) => &ids[start..end],
        _ => &[],
    }
}

/// Counting-sort `(node, edge)` pairs into CSR rows, keeping edge order per row.
fn incidence<I>(node_count: usize, pairs: I) -> (Vec<usize>, Vec<EdgeId>)
where
    I: Iterator<Item = (NodeId, EdgeId)> + Clone,
{
    let mut offsets = vec![0usize; node_count + 1];
    for (node, _) in pairs.clone() {
        offsets[node + 1] += 1;
    }
    for i in 0..node_count {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets.clone();
    let mut ids = vec![0; offsets[node_count]];
    for (node, edge) in pairs {
        ids[cursor[node]] = edge;
        cursor[node] += 1;
    }
    (offsets, ids)
}

impl Graph for EdgeListGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn adjacent(&self, component: Component) -> impl Iterator<Item = Component> + '_ {
        let pending: [&[EdgeId]; 2] = match component {
            Component::Node(node) => [self.out_edges(node), &[]],
            Component::Edge(edge) => match self.edges.get(edge) {
                Some(r) if self.directed => [self.out_edges(r.target), &[]],
                Some(r) if r.source == r.target => [self.out_edges(r.source), &[]],
                Some(r) => [self.out_edges(r.source), self.out_edges(r.target)],
                None => [&[], &[]],
            },
        };
        Adjacent {
            graph: self,
            from: component,
            pending,
        }
    }
}

impl DirectedGraph for EdgeListGraph {
    fn in_degree(&self, node: NodeId) -> usize {
        self.in_edges(node).len()
    }

    fn out_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(node)
            .iter()
            .map(move |&e| self.opposite(e, node))
    }

    fn in_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.in_edges(node)
            .iter()
            .map(move |&e| self.opposite(e, node))
    }
}

/// Iterator returned by [`EdgeListGraph`]'s `adjacent`.
struct Adjacent<'a> {
    graph: &'a EdgeListGraph,
    from: Component,
    pending: [&'a [EdgeId]; 2],
}

impl Iterator for Adjacent<'_> {
    type Item = Component;

    fn next(&mut self) -> Option<Component> {
        loop {
            let slot = self.pending.iter().position(|ids| !ids.is_empty())?;
            let (&edge, rest) = self.pending[slot].split_first()?;
            self.pending[slot] = rest;

            match self.from {
                Component::Node(node) => {
                    return Some(Component::Node(self.graph.opposite(edge, node)));
                }
                Component::Edge(origin) if edge != origin => return Some(Component::Edge(edge)),
                Component::Edge(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(it: impl Iterator<Item = Component>) -> Vec<usize> {
        it.map(Component::index).collect()
    }

    #[test]
    fn test_directed_node_adjacency_and_degrees() {
        // 0 -> 1, 0 -> 2, 1 -> 2
        let g = EdgeListGraph::directed(3, [(0, 1, 1.0), (0, 2, 4.0), (1, 2, 1.0)]).unwrap();

        assert!(g.is_directed());
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(nodes(g.adjacent(Component::Node(0))), vec![1, 2]);
        assert!(g.adjacent(Component::Node(2)).next().is_none());

        assert_eq!(g.in_degree(0), 0);
        assert_eq!(g.in_degree(2), 2);
        assert_eq!(g.out_nodes(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.in_nodes(2).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_undirected_adjacency_is_symmetric() {
        let g = EdgeListGraph::undirected(3, [(0, 1, 1.0), (1, 2, 2.0)]).unwrap();

        assert_eq!(nodes(g.adjacent(Component::Node(1))), vec![0, 2]);
        assert_eq!(nodes(g.adjacent(Component::Node(2))), vec![1]);
        assert_eq!(g.in_degree(1), 2);
        assert_eq!(g.edges_between(2, 1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_edge_adjacency() {
        // e0: 0->1, e1: 1->2, e2: 1->3, e3: 2->0
        let g = EdgeListGraph::directed(4, [(0, 1, 1.0), (1, 2, 1.0), (1, 3, 1.0), (2, 0, 1.0)])
            .unwrap();
        let next: Vec<_> = g.adjacent(Component::Edge(0)).collect();
        assert_eq!(next, vec![Component::Edge(1), Component::Edge(2)]);

        let u = EdgeListGraph::undirected(3, [(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let touching: Vec<_> = u.adjacent(Component::Edge(0)).collect();
        assert_eq!(touching, vec![Component::Edge(1)]);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let g = EdgeListGraph::undirected(2, [(0, 0, 1.0), (0, 1, 1.0), (0, 1, 3.0)]).unwrap();
        assert_eq!(nodes(g.adjacent(Component::Node(0))), vec![0, 1, 1]);
        assert_eq!(g.edges_between(0, 1).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.weight(2), Some(3.0));
        assert_eq!(g.endpoints(1), Some((0, 1)));
    }

    #[test]
    fn test_rejects_out_of_range_endpoint() {
        let err = EdgeListGraph::directed(2, [(0, 5, 1.0)]).unwrap_err();
        assert_eq!(err, TraversalError::UnknownComponent(Component::Node(5)));
    }

    #[test]
    fn test_from_adjacency() {
        let g = EdgeListGraph::from_adjacency(&[vec![1, 2], vec![3], vec![3], vec![]]).unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.in_degree(3), 2);
        assert_eq!(g.weight(0), Some(1.0));
        assert!(g.adjacent(Component::Node(9)).next().is_none());
    }
}
