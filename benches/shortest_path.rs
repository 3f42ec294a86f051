use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkit::{DiGraph, Edge, Node};
use rand::Rng;

const NODES: usize = 200;
const EDGES: usize = 2000;

criterion_group!(benches, shortest_paths);
criterion_main!(benches);

fn random_digraph() -> DiGraph {
    let mut rng = rand::thread_rng();
    let mut g = DiGraph::new();
    for i in 0..NODES {
        g.add_node(Node::new(format!("n{i}"))).unwrap();
    }
    for k in 0..EDGES {
        let u = rng.gen::<usize>() % NODES;
        let v = rng.gen::<usize>() % NODES;
        let w = (rng.gen::<u8>() % 100) as f64;
        g.add_edge(
            Edge::new(format!("n{u}"), format!("n{v}"))
                .with_id(format!("e{k}"))
                .with_weight(w),
        )
        .unwrap();
    }
    g
}

fn shortest_paths(c: &mut Criterion) {
    let g = random_digraph();
    c.bench_function("dijkstra", |b| {
        b.iter(|| {
            g.shortest_path_dijkstra(black_box("n0"), black_box("n199"))
                .unwrap()
        })
    });
    c.bench_function("bellman_ford", |b| {
        b.iter(|| {
            g.shortest_path_bellman_ford(black_box("n0"), black_box("n199"))
                .unwrap()
        })
    });
}
