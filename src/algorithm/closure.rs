use crate::graph::*;

impl<O: Orientation, D> Graph<O, D> {
    /// The full reachability relation, by Floyd–Warshall over the adjacency
    /// matrix reduced to presence bits.
    ///
    /// The diagonal is set only for nodes on a cycle through themselves
    /// (a self-loop at the shortest). Symmetric for undirected graphs.
    /// O(V³) time, O(V²) space; the graph is not mutated.
    pub fn transitive_closure(&self) -> Reachability {
        let mut tc = Reachability::from_adjacency(&self.adjacency_matrix());
        let n = tc.len();
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if tc.at(i, k) && tc.at(k, j) {
                        tc.set(i, j);
                    }
                }
            }
        }
        tc
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use crate::test_util::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn chains_compose() {
        let mut g = DiGraph::new();
        for id in ["a", "b", "c", "d"] {
            g.add_node(Node::new(id)).unwrap();
        }
        g.add_edge(Edge::new("a", "b")).unwrap();
        g.add_edge(Edge::new("b", "c")).unwrap();
        let tc = g.transitive_closure();
        assert!(tc.reachable("a", "c"));
        assert!(!tc.reachable("c", "a"));
        assert!(!tc.reachable("a", "d"));
    }

    #[test]
    fn diagonal_stays_clear_without_a_self_cycle() {
        let mut g = DiGraph::new();
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("a", "b")).unwrap();
        let tc = g.transitive_closure();
        assert!(!tc.reachable("a", "a"));
        assert!(!tc.reachable("b", "b"));
    }

    #[test]
    fn self_loop_sets_the_diagonal() {
        let mut g = DiGraph::new();
        g.add_node(Node::new("a")).unwrap();
        g.add_edge(Edge::new("a", "a")).unwrap();
        assert!(g.transitive_closure().reachable("a", "a"));
    }

    #[test]
    fn two_cycle_reaches_back() {
        let mut g = DiGraph::new();
        g.add_node(Node::new("a")).unwrap();
        g.add_node(Node::new("b")).unwrap();
        g.add_edge(Edge::new("a", "b")).unwrap();
        g.add_edge(Edge::new("b", "a")).unwrap();
        let tc = g.transitive_closure();
        assert!(tc.reachable("a", "a"));
        assert!(tc.reachable("b", "b"));
    }

    #[quickcheck]
    fn closure_is_transitive(d: RandomDigraph) {
        let tc = d.build().transitive_closure();
        let n = tc.len();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    if tc.at(i, j) && tc.at(j, k) {
                        assert!(tc.at(i, k));
                    }
                }
            }
        }
    }

    #[quickcheck]
    fn closure_is_idempotent_on_an_unchanged_graph(d: RandomDigraph) {
        let g = d.build();
        assert_eq!(g.transitive_closure(), g.transitive_closure());
    }

    #[quickcheck]
    fn undirected_closure_is_symmetric(u: RandomUnGraph) {
        let tc = u.build().transitive_closure();
        for i in 0..tc.len() {
            for j in 0..tc.len() {
                assert_eq!(tc.at(i, j), tc.at(j, i));
            }
        }
    }
}
