//! Errors surfaced by traversals and the reference graph.

use core::fmt;

use crate::graph::Component;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, TraversalError>;

/// The error type for traversal failures.
///
/// Precondition violations that the algorithms cannot detect cheaply
/// (negative Dijkstra costs, cycles fed to a topological walk) are not
/// represented here; they produce documented partial results instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// The strategy does not implement the requested entry point.
    Unsupported {
        /// Name of the strategy that rejected the call.
        strategy: &'static str,
        /// The rejected operation.
        operation: &'static str,
    },
    /// A walk was requested before the matching `init_nodes` / `init_edges` call:
    /// either nothing was initialized or the other collection was.
    NotInitialized,
    /// The component does not exist in the graph.
    UnknownComponent(Component),
    /// The source is not part of the collection the traversal was initialized over.
    SourceOutOfDomain(Component),
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported {
                strategy,
                operation,
            } => write!(f, "{strategy} traversal does not support {operation}"),
            Self::NotInitialized => {
                f.write_str("traversal walked before the matching init_nodes or init_edges call")
            }
            Self::UnknownComponent(component) => {
                write!(f, "{component} is not part of the graph")
            }
            Self::SourceOutOfDomain(component) => write!(
                f,
                "source {component} is outside the initialized component collection"
            ),
        }
    }
}

impl std::error::Error for TraversalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TraversalError::Unsupported {
            strategy: "topological",
            operation: "walk_edges",
        };
        assert_eq!(
            err.to_string(),
            "topological traversal does not support walk_edges"
        );
        assert_eq!(
            TraversalError::UnknownComponent(Component::Node(7)).to_string(),
            "node 7 is not part of the graph"
        );
        assert!(TraversalError::SourceOutOfDomain(Component::Edge(1))
            .to_string()
            .contains("edge 1"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&TraversalError::NotInitialized);
    }
}
