use ahash::RandomState;
use std::collections::HashMap;

/// A square weight matrix over a graph's registered nodes.
///
/// Rows and columns follow node-registration order. Each cell is a genuine
/// tri-state: `Some(weight)` when an edge exists — including `Some(0.0)` for
/// a zero-weight edge — and `None` when there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    ids: Vec<String>,
    index: HashMap<String, usize, RandomState>,
    cells: Vec<Vec<Option<f64>>>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(ids: Vec<String>, cells: Vec<Vec<Option<f64>>>) -> Self {
        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self { ids, index, cells }
    }

    /// Node ids in registration order; also the row/column order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The cell for a pair of node ids; `None` for unknown ids as well as
    /// for absent edges.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.cells[i][j]
    }

    /// Positional access. Panics when out of bounds.
    pub fn at(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i][j]
    }
}

/// The 0/1 reachability relation over a graph's registered nodes.
///
/// Produced by [`Graph::transitive_closure`](super::Graph::transitive_closure);
/// row/column order is node-registration order, as with [AdjacencyMatrix].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    ids: Vec<String>,
    index: HashMap<String, usize, RandomState>,
    bits: Vec<Vec<bool>>,
}

impl Reachability {
    pub(crate) fn from_adjacency(adjacency: &AdjacencyMatrix) -> Self {
        let ids = adjacency.ids().to_vec();
        let n = ids.len();
        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let bits = (0..n)
            .map(|i| (0..n).map(|j| adjacency.at(i, j).is_some()).collect())
            .collect();
        Self { ids, index, bits }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Whether a path (of one or more edges) leads from `from` to `to`.
    /// False for unknown ids.
    pub fn reachable(&self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.bits[i][j],
            _ => false,
        }
    }

    /// Positional access. Panics when out of bounds.
    pub fn at(&self, i: usize, j: usize) -> bool {
        self.bits[i][j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize) {
        self.bits[i][j] = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use crate::test_util::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn zero_weight_edge_is_not_an_absent_edge() {
        let mut g = UnGraph::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("a", "b").with_weight(0.0)).unwrap();
        let m = g.adjacency_matrix();
        assert_eq!(m.weight("a", "b"), Some(0.0));
        assert_eq!(m.weight("a", "c"), None);
    }

    #[quickcheck]
    fn undirected_matrix_is_symmetric(u: RandomUnGraph) {
        let m = u.build().adjacency_matrix();
        for i in 0..m.len() {
            for j in 0..m.len() {
                assert_eq!(m.at(i, j), m.at(j, i));
            }
        }
    }

    #[test]
    fn directed_matrix_is_one_way() {
        let mut g = DiGraph::new();
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("a", "b").with_weight(3.0)).unwrap();
        let m = g.adjacency_matrix();
        assert_eq!(m.weight("a", "b"), Some(3.0));
        assert_eq!(m.weight("b", "a"), None);
    }

    #[test]
    fn rows_follow_registration_order() {
        let mut g = DiGraph::new();
        for id in ["z", "m", "a"] {
            g.add_node(Node::new(id)).unwrap();
        }
        assert_eq!(g.adjacency_matrix().ids(), ["z", "m", "a"]);
    }
}
