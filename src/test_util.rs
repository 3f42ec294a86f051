//! Random graph generators shared by the quickcheck properties.
//!
//! Nodes are `n0..n{k}`; every edge gets its own explicit id so parallel
//! edges are representable, and weights are small non-negative integers so
//! path costs stay exact in `f64`.

use crate::graph::*;
use quickcheck::{Arbitrary, Gen};

#[derive(Debug, Clone)]
pub(crate) struct RandomDigraph {
    nodes: usize,
    edges: Vec<(usize, usize, u8)>,
}

impl Arbitrary for RandomDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let nodes = usize::arbitrary(g) % 7 + 1;
        let edge_count = usize::arbitrary(g) % (nodes * nodes);
        let edges = (0..edge_count)
            .map(|_| {
                (
                    usize::arbitrary(g) % nodes,
                    usize::arbitrary(g) % nodes,
                    u8::arbitrary(g) % 10,
                )
            })
            .collect();
        Self { nodes, edges }
    }
}

impl RandomDigraph {
    pub(crate) fn build(&self) -> DiGraph {
        build_graph(self.nodes, &self.edges)
    }
}

/// Edges only run from lower to higher node index, so the result is acyclic.
#[derive(Debug, Clone)]
pub(crate) struct RandomDag {
    nodes: usize,
    edges: Vec<(usize, usize, u8)>,
}

impl Arbitrary for RandomDag {
    fn arbitrary(g: &mut Gen) -> Self {
        let RandomDigraph { nodes, edges } = RandomDigraph::arbitrary(g);
        let edges = edges.into_iter().filter(|(u, v, _)| u < v).collect();
        Self { nodes, edges }
    }
}

impl RandomDag {
    pub(crate) fn build(&self) -> DiGraph {
        build_graph(self.nodes, &self.edges)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RandomUnGraph {
    nodes: usize,
    edges: Vec<(usize, usize, u8)>,
}

impl Arbitrary for RandomUnGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let RandomDigraph { nodes, edges } = RandomDigraph::arbitrary(g);
        Self { nodes, edges }
    }
}

impl RandomUnGraph {
    pub(crate) fn build(&self) -> UnGraph {
        build_graph(self.nodes, &self.edges)
    }
}

fn build_graph<O: Orientation>(nodes: usize, edges: &[(usize, usize, u8)]) -> Graph<O> {
    let mut g = Graph::new();
    for i in 0..nodes {
        g.add_node(Node::new(format!("n{i}"))).unwrap();
    }
    for (k, (u, v, w)) in edges.iter().enumerate() {
        g.add_edge(
            Edge::new(format!("n{u}"), format!("n{v}"))
                .with_id(format!("e{k}"))
                .with_weight(*w as f64),
        )
        .unwrap();
    }
    g
}
