//! The graph data model: nodes, edges, and the orientation-generic container.
//!
//! Public identity is string-based: nodes are keyed by their id and edges by
//! a derived or explicit id. Internally every id is interned once into an
//! integer handle, and adjacency is kept as ordered `(node, other, edge)`
//! sets keyed by handle, so structural queries run off indexes rather than
//! scans over the full edge table. Handles are an implementation detail and
//! never appear in the public API.

mod container;
pub use self::container::*;
mod edge;
pub use self::edge::*;
mod handle;
pub(crate) use self::handle::*;
mod matrix;
pub use self::matrix::*;
mod node;
pub use self::node::*;
mod orientation;
pub use self::orientation::*;
