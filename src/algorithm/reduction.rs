use crate::error::{GraphError, Result};
use crate::graph::*;

impl<D> Graph<Directed, D> {
    /// Drops every direct edge whose endpoints stay connected through an
    /// intermediate node, leaving the minimal edge set with the same
    /// reachability.
    ///
    /// Fails with [GraphError::Cycle] on a cyclic graph before any mutation.
    /// This is the one algorithm here that rewrites the graph in place;
    /// callers who need the original must clone it first. Returns the
    /// removed edges in insertion order.
    ///
    /// Each edge is decided once, against the closure computed up front:
    /// edge i→j goes iff some k outside the pair has both i→k and k→j in the
    /// closure.
    pub fn transitive_reduction(&mut self) -> Result<Vec<Edge>> {
        if self.has_cycle() {
            return Err(GraphError::Cycle);
        }
        let closure = self.transitive_closure();
        let mut condemned = vec![];
        for edge in self.edges() {
            let (i, j) = edge.nodes();
            let (Some(i), Some(j)) = (closure.index_of(i), closure.index_of(j)) else {
                continue;
            };
            for k in 0..closure.len() {
                if k != i && k != j && closure.at(i, k) && closure.at(k, j) {
                    condemned.push(edge.id().to_owned());
                    break;
                }
            }
        }
        let mut removed = Vec::with_capacity(condemned.len());
        for id in condemned {
            if let Some(edge) = self.remove_edge(&id) {
                log::trace!("transitive reduction drops '{}'", edge.id());
                removed.push(edge);
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::*;
    use crate::test_util::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn shortcut_edge_is_dropped() {
        let mut g = DiGraph::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("a", "b")).unwrap();
        g.add_edge(Edge::new("b", "c")).unwrap();
        g.add_edge(Edge::new("a", "c")).unwrap();

        let removed = g.transitive_reduction().unwrap();
        let removed_ids: Vec<_> = removed.iter().map(|e| e.id()).collect();
        assert_eq!(removed_ids, ["a-c"]);
        assert!(g.edge_between("a", "c").is_none());
        assert!(g.edge_between("a", "b").is_some());
        assert!(g.edge_between("b", "c").is_some());
    }

    #[test]
    fn custom_edge_ids_reduce_too() {
        let mut g = DiGraph::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("a", "b").with_id("one")).unwrap();
        g.add_edge(Edge::new("b", "c").with_id("two")).unwrap();
        g.add_edge(Edge::new("a", "c").with_id("shortcut")).unwrap();
        let removed = g.transitive_reduction().unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id(), "shortcut");
    }

    #[test]
    fn cyclic_graph_is_refused_untouched() {
        let mut g = DiGraph::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("a", "b")).unwrap();
        g.add_edge(Edge::new("b", "c")).unwrap();
        g.add_edge(Edge::new("c", "a")).unwrap();
        assert_eq!(g.transitive_reduction().unwrap_err(), GraphError::Cycle);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn already_minimal_graph_keeps_its_edges() {
        let mut g = DiGraph::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("a", "b")).unwrap();
        g.add_edge(Edge::new("b", "c")).unwrap();
        assert!(g.transitive_reduction().unwrap().is_empty());
        assert_eq!(g.edge_count(), 2);
    }

    #[quickcheck]
    fn reachability_is_preserved_with_no_more_edges(d: RandomDag) {
        let mut g = d.build();
        let before = g.transitive_closure();
        let edges_before = g.edge_count();
        g.transitive_reduction().unwrap();
        assert_eq!(g.transitive_closure(), before);
        assert!(g.edge_count() <= edges_before);
    }
}
