//! Graph algorithms: shortest paths, cycle checks, closure, reduction,
//! and topological ordering.

mod bellman_ford;
pub use self::bellman_ford::*;
mod closure;
mod cycle;
mod dijkstra;
mod reduction;
mod toposort;

/// Outcome of a single-pair shortest-path query.
///
/// `path` holds the node ids from start to end inclusive; it is empty and
/// `cost` is `f64::INFINITY` when the end is unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Vec<String>,
    pub cost: f64,
}
