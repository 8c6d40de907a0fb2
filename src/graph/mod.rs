//! The graph contract consumed by every traversal.
//!
//! Traversals never build or mutate topology. They only need a way to enumerate
//! nodes and edges and to ask which components are adjacent to a given one.
//! Components are addressed by dense indices, so per-pass state (visited flags,
//! counters, Dijkstra costs) lives in side tables indexed the same way instead
//! of inside the graph.
//!
//! - [`Graph`]: enumeration + adjacency, required by all strategies
//! - [`DirectedGraph`]: in/out adjacency, required by the topological walk
//! - [`Scratch`]: the per-pass `{visited, count}` side table
//! - [`EdgeListGraph`]: an immutable reference implementation

use core::fmt;

use serde::{Deserialize, Serialize};

pub mod edge_list;
pub mod scratch;

pub use edge_list::EdgeListGraph;
pub use scratch::{Scratch, ScratchEntry};

/// Dense index of a node, in `0..node_count()`.
pub type NodeId = usize;

/// Dense index of an edge, in `0..edge_count()`.
pub type EdgeId = usize;

/// A node or an edge of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// A node, by index.
    Node(NodeId),
    /// An edge, by index.
    Edge(EdgeId),
}

/// Which collection a [`Component`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// The node collection.
    Node,
    /// The edge collection.
    Edge,
}

impl Component {
    /// Returns the dense index within the component's own collection.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Node(i) | Self::Edge(i) => i,
        }
    }

    /// Returns the collection this component belongs to.
    #[inline]
    pub const fn kind(self) -> ComponentKind {
        match self {
            Self::Node(_) => ComponentKind::Node,
            Self::Edge(_) => ComponentKind::Edge,
        }
    }

    /// Returns `true` for [`Component::Node`].
    #[inline]
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Returns `true` for [`Component::Edge`].
    #[inline]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Edge(_))
    }
}

impl ComponentKind {
    /// Builds a component of this kind.
    #[inline]
    pub const fn component(self, index: usize) -> Component {
        match self {
            Self::Node => Component::Node(index),
            Self::Edge => Component::Edge(index),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(i) => write!(f, "node {i}"),
            Self::Edge(i) => write!(f, "edge {i}"),
        }
    }
}

/// Node/edge enumeration and adjacency.
///
/// What "adjacent" means is up to the implementation: a node may expose its
/// neighboring nodes or its incident edges, an edge its endpoints or the edges
/// it touches. Rooted traversals simply follow whatever this returns.
pub trait Graph {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Components reachable in one step from `component`.
    ///
    /// Every yielded component must exist in the graph.
    fn adjacent(&self, component: Component) -> impl Iterator<Item = Component> + '_;

    /// All nodes, in index order.
    fn nodes(&self) -> impl Iterator<Item = Component> + '_ {
        (0..self.node_count()).map(Component::Node)
    }

    /// All edges, in index order.
    fn edges(&self) -> impl Iterator<Item = Component> + '_ {
        (0..self.edge_count()).map(Component::Edge)
    }

    /// Size of the collection `kind` refers to.
    fn count_of(&self, kind: ComponentKind) -> usize {
        match kind {
            ComponentKind::Node => self.node_count(),
            ComponentKind::Edge => self.edge_count(),
        }
    }

    /// Returns `true` if `component` indexes into its collection.
    fn contains(&self, component: Component) -> bool {
        component.index() < self.count_of(component.kind())
    }
}

/// Nodes with separate in- and out-adjacency.
///
/// Degrees count edges, so parallel edges contribute once each and
/// `out_nodes` / `in_nodes` repeat the neighbor accordingly.
pub trait DirectedGraph: Graph {
    /// Number of edges entering `node`.
    fn in_degree(&self, node: NodeId) -> usize;

    /// Heads of the edges leaving `node`.
    fn out_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Tails of the edges entering `node`.
    fn in_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_;
}
