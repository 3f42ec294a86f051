use thiserror::Error;

/// Failures surfaced by graph mutations and algorithms.
///
/// Every failure aborts the current call and leaves the container unchanged;
/// none is retried or recovered internally. Missing-entity lookups are not
/// errors and return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id is already registered.
    #[error("a node with the id '{0}' already exists")]
    DuplicateNodeId(String),
    /// An edge with this id is already registered.
    #[error("an edge with the id '{0}' already exists")]
    DuplicateEdgeId(String),
    /// Dijkstra refuses to run on a graph with any negative edge weight,
    /// reachable or not.
    #[error("Dijkstra's algorithm cannot handle graphs with negative edge weights")]
    NegativeWeight,
    /// Bellman-Ford found a cycle whose total weight is negative.
    #[error("the graph contains a negative weight cycle")]
    NegativeCycle,
    /// An acyclic-only operation was invoked on a cyclic graph.
    #[error("the graph contains a cycle")]
    Cycle,
}

pub type Result<T> = std::result::Result<T, GraphError>;
