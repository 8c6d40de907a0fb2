#![allow(dead_code)]

use halo_traverse::{
    Component, EdgeListGraph, GraphWalker, Scratch, VisitContext, WalkControl,
};
use proptest::prelude::*;

/// Walker that records every visit, the Dijkstra cost seen at each visit, and
/// how often `finish` ran. Optionally stops after a fixed number of visits.
#[derive(Debug, Default)]
pub struct Recorder {
    pub visits: Vec<Component>,
    pub costs: Vec<f64>,
    pub stop_after: Option<usize>,
    pub finished: usize,
}

impl Recorder {
    pub fn stopping_after(visits: usize) -> Self {
        Self {
            stop_after: Some(visits),
            ..Self::default()
        }
    }

    pub fn indices(&self) -> Vec<usize> {
        self.visits.iter().map(|c| c.index()).collect()
    }
}

impl<G> GraphWalker<G> for Recorder {
    fn init(&mut self, component: Component, scratch: &mut Scratch) {
        scratch.reset(component);
    }

    fn is_visited(&self, component: Component, scratch: &Scratch) -> bool {
        scratch.is_visited(component)
    }

    fn visit(&mut self, component: Component, cx: &mut VisitContext<'_, G>) -> WalkControl {
        cx.scratch_mut().set_visited(component, true);
        self.visits.push(component);
        if let Some(cost) = cx.cost() {
            self.costs.push(cost);
        }
        if self.stop_after == Some(self.visits.len()) {
            WalkControl::Stop
        } else {
            WalkControl::Continue
        }
    }

    fn finish(&mut self) {
        self.finished += 1;
    }
}

pub const A: usize = 0;
pub const B: usize = 1;
pub const C: usize = 2;
pub const D: usize = 3;

/// A-B 1, B-D 1, A-C 4, C-D 1.
pub fn scenario() -> EdgeListGraph {
    EdgeListGraph::undirected(4, [(A, B, 1.0), (B, D, 1.0), (A, C, 4.0), (C, D, 1.0)])
        .expect("scenario endpoints are valid")
}

/// Directed chain `0 -> 1 -> ... -> n-1`.
pub fn chain(n: usize) -> EdgeListGraph {
    EdgeListGraph::directed(n, (1..n).map(|i| (i - 1, i, 1.0))).expect("chain endpoints are valid")
}

/// Edge lists over `1..=max_nodes` nodes with small integer weights, so path
/// sums are exact in `f64`.
pub fn weighted_edges(
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (1..=max_nodes).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, 1u32..20).prop_map(|(a, b, w)| (a, b, f64::from(w)));
        (Just(n), proptest::collection::vec(edge, 0..=max_edges))
    })
}

/// Edge lists whose edges always point from a lower to a higher index.
pub fn dag_edges(
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (2..=max_nodes).prop_flat_map(move |n| {
        let edge = (0..n - 1)
            .prop_flat_map(move |a| (Just(a), a + 1..n))
            .prop_map(|(a, b)| (a, b, 1.0));
        (Just(n), proptest::collection::vec(edge, 0..=max_edges))
    })
}

/// All-pairs shortest distances, `+inf` where unreachable.
pub fn floyd_warshall(n: usize, edges: &[(usize, usize, f64)], directed: bool) -> Vec<Vec<f64>> {
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for &(a, b, w) in edges {
        dist[a][b] = dist[a][b].min(w);
        if !directed {
            dist[b][a] = dist[b][a].min(w);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

/// Hop distances from `source` following `adjacency` (directed, unweighted).
pub fn hop_distances(n: usize, edges: &[(usize, usize, f64)], source: usize) -> Vec<Option<usize>> {
    let unit: Vec<_> = edges.iter().map(|&(a, b, _)| (a, b, 1.0)).collect();
    floyd_warshall(n, &unit, true)[source]
        .iter()
        .map(|&d| d.is_finite().then_some(d as usize))
        .collect()
}
