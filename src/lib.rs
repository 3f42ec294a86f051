//! Weighted directed and undirected graphs and their classic algorithms.
//!
//! # The data model
//!
//! A [Node] is a string id plus an opaque payload.
//! An [Edge] connects two node ids and carries a weight;
//! its own id is derived from its endpoints unless overridden.
//! Both are registered into a [Graph] container, which is generic over an
//! edge-[Orientation] policy: [UnGraph] treats endpoints as an unordered
//! pair, [DiGraph] reads them as source and target.
//! Internally the container interns ids to integer handles and keeps
//! adjacency sets keyed by them, so neighbor and predecessor queries do not
//! scan the whole edge table.
//!
//! # Algorithms
//!
//! Queries never mutate the graph.
//! Shortest paths come in two flavors:
//! [`shortest_path_dijkstra`](Graph::shortest_path_dijkstra) on either
//! orientation (non-negative weights only, checked up front) and
//! [`bellman_ford`](Graph::bellman_ford) on directed graphs (negative
//! weights allowed, negative cycles detected).
//! [`transitive_closure`](Graph::transitive_closure) yields the full
//! reachability relation, and both orientations have a
//! [`has_cycle`](Graph::has_cycle) check.
//! The acyclic-only operations [`toposort`](Graph::toposort) and
//! [`transitive_reduction`](Graph::transitive_reduction) verify acyclicity
//! first and refuse to run on a cyclic graph; the latter is the one
//! algorithm that mutates the graph in place.
//!
//! ```rust
//! use graphkit::{DiGraph, Edge, Node};
//!
//! let mut g = DiGraph::new();
//! g.add_node(Node::new("a"))?;
//! g.add_node(Node::new("b"))?;
//! g.add_node(Node::new("c"))?;
//! g.add_edge(Edge::new("a", "b").with_weight(5.0))?;
//! g.add_edge(Edge::new("b", "c").with_weight(2.0))?;
//!
//! let sp = g.shortest_path_dijkstra("a", "c")?;
//! assert_eq!(sp.path, ["a", "b", "c"]);
//! assert_eq!(sp.cost, 7.0);
//! # Ok::<(), graphkit::GraphError>(())
//! ```

pub mod algorithm;
pub use self::algorithm::*;
mod error;
pub use self::error::*;
pub mod graph;
pub use self::graph::*;

#[cfg(test)]
mod test_util;
