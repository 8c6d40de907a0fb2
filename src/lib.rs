//! # `halo-traverse` - Graph Traversal Framework
//!
//! Classic graph-walking strategies behind one walker contract. A traversal
//! decides the *order* in which components are reached; a walker decides what
//! visiting means, what counts as visited, and when to stop.
//!
//! ## Key Features
//!
//! - **Six strategies**: linear scan, breadth-first, depth-first, reverse
//!   depth-first, Dijkstra shortest path, and Kahn topological order
//! - **Nodes and edges**: every rooted strategy walks either collection through
//!   the same adjacency contract
//! - **Cooperative early exit**: a walker returns [`WalkControl::Stop`] and the
//!   walk ends immediately
//! - **Arena scratch state**: per-component `visited`/`count` fields live in a
//!   side table indexed by component index, so graphs stay immutable
//! - **Optional tracing**: enable the `tracing` feature for walk-level events
//!
//! ## Architecture
//!
//! 1. **Graph contract** ([`graph::Graph`], [`graph::DirectedGraph`]):
//!    - Dense node and edge indices
//!    - Adjacency defined by the collaborator
//!    - [`graph::EdgeListGraph`] as a ready-made CSR-backed implementation
//!
//! 2. **Walkers** ([`walker::GraphWalker`]):
//!    - `init` / `is_visited` / `visit` / `finish`
//!    - [`walker::SimpleGraphWalker`] adapts a plain closure
//!
//! 3. **Traversals** ([`traverse`]):
//!    - Shared lifecycle in [`traverse::TraversalCore`]
//!    - `init_nodes` / `init_edges`, then `walk_nodes` / `walk_edges`, then `finish`
//!
//! ## Example
//!
//! ```rust
//! use halo_traverse::{
//!     Component, DijkstraTraversal, EdgeListGraph, EdgeWeightCost, GraphTraversal,
//!     SimpleGraphWalker, WalkControl,
//! };
//!
//! // A-B 1, B-D 1, A-C 4, C-D 1
//! let graph = EdgeListGraph::undirected(
//!     4,
//!     [(0, 1, 1.0), (1, 3, 1.0), (0, 2, 4.0), (2, 3, 1.0)],
//! )?;
//!
//! let walker = SimpleGraphWalker::new(|_: Component| WalkControl::Continue);
//! let mut dijkstra = DijkstraTraversal::new(&graph, walker, Component::Node(0), EdgeWeightCost);
//! dijkstra.init_nodes();
//! dijkstra.walk_nodes()?;
//! dijkstra.finish();
//!
//! assert_eq!(dijkstra.cost_node(Component::Node(3)).map(|n| n.cost()), Some(2.0));
//! assert_eq!(
//!     dijkstra.path_to(Component::Node(3)),
//!     Some(vec![Component::Node(0), Component::Node(1), Component::Node(3)])
//! );
//! # Ok::<(), halo_traverse::TraversalError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;
pub mod traverse;
pub mod walker;

pub use error::{Result, TraversalError};
pub use graph::{Component, ComponentKind, DirectedGraph, EdgeListGraph, Graph, Scratch};
pub use traverse::{
    BasicGraphTraversal, BreadthFirstTraversal, CostFunction, CostNode, DepthFirstTraversal,
    DijkstraTraversal, EdgeWeightCost, GraphTraversal, ReverseDepthFirstTraversal, SiblingOrder,
    SourceTraversal, TopologicalTraversal, UnitCost, WalkStatus, WalkSummary,
};
pub use walker::{
    ActiveElements, GraphWalker, SimpleGraphWalker, VisitContext, Visitor, WalkControl,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Components are a tag plus one index.
    assert!(mem::size_of::<Component>() <= mem::size_of::<usize>() * 2);

    // Scratch entries stay two words so the side table is a flat array.
    assert!(mem::size_of::<graph::ScratchEntry>() <= mem::size_of::<usize>() * 2);

    assert!(mem::size_of::<WalkControl>() == 1);
};
