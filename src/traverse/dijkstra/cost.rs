//! Cost bookkeeping for shortest-path walks.

use serde::{Deserialize, Serialize};

use crate::graph::{Component, EdgeListGraph};

/// Best known cost and predecessor of one component during a Dijkstra pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostNode {
    component: Component,
    cost: f64,
    parent: Option<Component>,
}

impl CostNode {
    /// Creates a cost node.
    pub fn new(component: Component, cost: f64, parent: Option<Component>) -> Self {
        Self {
            component,
            cost,
            parent,
        }
    }

    /// The component this node tracks.
    #[inline]
    pub fn component(&self) -> Component {
        self.component
    }

    /// Best known cost from the source; `+inf` while unreached.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Predecessor on the best known path; `None` for the source and unreached components.
    #[inline]
    pub fn parent(&self) -> Option<Component> {
        self.parent
    }

    /// Returns `true` once a finite-cost path has been found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    #[inline]
    pub(crate) fn relax(&mut self, cost: f64, parent: Component) {
        self.cost = cost;
        self.parent = Some(parent);
    }
}

/// Cost of stepping from one component to an adjacent one.
///
/// Costs must be non-negative. Negative costs are not detected; they simply
/// make the resulting distances meaningless.
pub trait CostFunction<G> {
    /// Cost of the step `from -> to`.
    fn cost(&self, graph: &G, from: Component, to: Component) -> f64;
}

impl<G, F> CostFunction<G> for F
where
    F: Fn(Component, Component) -> f64,
{
    #[inline]
    fn cost(&self, _graph: &G, from: Component, to: Component) -> f64 {
        self(from, to)
    }
}

/// Every step costs `1.0`, so distances are hop counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl<G> CostFunction<G> for UnitCost {
    #[inline]
    fn cost(&self, _graph: &G, _from: Component, _to: Component) -> f64 {
        1.0
    }
}

/// Reads step costs from [`EdgeListGraph`] edge weights.
///
/// - node to node: the lightest edge leading from `from` to `to`
/// - edge to edge: the weight of `to`
///
/// Steps with no connecting edge cost `+inf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeWeightCost;

impl CostFunction<EdgeListGraph> for EdgeWeightCost {
    fn cost(&self, graph: &EdgeListGraph, from: Component, to: Component) -> f64 {
        match (from, to) {
            (Component::Node(a), Component::Node(b)) => graph
                .edges_between(a, b)
                .filter_map(|e| graph.weight(e))
                .fold(f64::INFINITY, f64::min),
            (Component::Edge(_), Component::Edge(e)) => {
                graph.weight(e).unwrap_or(f64::INFINITY)
            }
            _ => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_weight_cost_picks_lightest_parallel_edge() {
        let g = EdgeListGraph::undirected(2, [(0, 1, 5.0), (0, 1, 2.0)]).unwrap();
        let cost = EdgeWeightCost.cost(&g, Component::Node(1), Component::Node(0));
        assert_eq!(cost, 2.0);
    }

    #[test]
    fn test_edge_weight_cost_for_edges_and_missing_steps() {
        let g = EdgeListGraph::directed(3, [(0, 1, 1.5), (1, 2, 2.5)]).unwrap();
        assert_eq!(
            EdgeWeightCost.cost(&g, Component::Edge(0), Component::Edge(1)),
            2.5
        );
        assert_eq!(
            EdgeWeightCost.cost(&g, Component::Node(2), Component::Node(0)),
            f64::INFINITY
        );
        assert_eq!(
            EdgeWeightCost.cost(&g, Component::Node(0), Component::Edge(0)),
            f64::INFINITY
        );
    }

    #[test]
    fn test_closure_and_unit_costs() {
        let g = EdgeListGraph::directed(2, [(0, 1, 9.0)]).unwrap();
        let doubled = |a: Component, b: Component| 2.0 * (a.index() + b.index()) as f64;
        assert_eq!(doubled.cost(&g, Component::Node(0), Component::Node(1)), 2.0);
        assert_eq!(
            CostFunction::<EdgeListGraph>::cost(&UnitCost, &g, Component::Node(0), Component::Node(1)),
            1.0
        );
    }

    #[test]
    fn test_cost_node_accessors_and_serde() {
        let mut node = CostNode::new(Component::Node(3), f64::INFINITY, None);
        assert!(!node.is_reachable());
        node.relax(4.0, Component::Node(1));
        assert!(node.is_reachable());
        assert_eq!(node.parent(), Some(Component::Node(1)));

        let json = serde_json::to_string(&node).unwrap();
        let back: CostNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
