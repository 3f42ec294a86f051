use crate::algorithm::ShortestPath;
use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap};

/// Single-source relaxation outcome: the distance and predecessor of every
/// registered node, keyed by node id.
///
/// `previous` is `None` for the source itself and for unreachable nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    pub distances: BTreeMap<String, f64>,
    pub previous: BTreeMap<String, Option<String>>,
}

impl<D> Graph<Directed, D> {
    /// Single-source shortest paths by the Bellman-Ford algorithm.
    ///
    /// Handles negative weights; relaxes the full edge set up to |V|−1
    /// times, then fails with [GraphError::NegativeCycle] if one more pass
    /// would still improve a distance. Partial results are discarded on
    /// failure. Runs in O(V·E).
    pub fn bellman_ford(&self, source: &str) -> Result<ShortestPathTree> {
        let mut dist: HashMap<NodeIdx, f64, RandomState> =
            HashMap::with_hasher(RandomState::new());
        let mut prev: HashMap<NodeIdx, NodeIdx, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for (ix, node) in self.registered() {
            let d = if node.id() == source { 0.0 } else { f64::INFINITY };
            dist.insert(ix, d);
        }
        let links: Vec<_> = self
            .edge_links()
            .into_iter()
            .filter(|(u, v, _)| self.is_registered(*u) && self.is_registered(*v))
            .collect();

        for _ in 1..self.node_count() {
            let mut changed = false;
            for &(u, v, w) in &links {
                let du = dist[&u];
                if du != f64::INFINITY && du + w < dist[&v] {
                    dist.insert(v, du + w);
                    prev.insert(v, u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        for &(u, v, w) in &links {
            let du = dist[&u];
            if du != f64::INFINITY && du + w < dist[&v] {
                log::debug!(
                    "bellman-ford: negative cycle via {} -> {}",
                    self.id_of(u),
                    self.id_of(v)
                );
                return Err(GraphError::NegativeCycle);
            }
        }

        let mut distances = BTreeMap::new();
        let mut previous = BTreeMap::new();
        for (ix, node) in self.registered() {
            distances.insert(node.id().to_owned(), dist[&ix]);
            previous.insert(
                node.id().to_owned(),
                prev.get(&ix).map(|p| self.id_of(*p).to_owned()),
            );
        }
        Ok(ShortestPathTree {
            distances,
            previous,
        })
    }

    /// Single-pair shortest path on top of [`bellman_ford`](Self::bellman_ford).
    ///
    /// Reconstructs the path by walking `previous` backward from
    /// `destination`; an unreachable destination yields an empty path with
    /// infinite cost. Propagates [GraphError::NegativeCycle].
    pub fn shortest_path_bellman_ford(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<ShortestPath> {
        let tree = self.bellman_ford(source)?;
        let cost = tree
            .distances
            .get(destination)
            .copied()
            .unwrap_or(f64::INFINITY);
        if cost.is_infinite() {
            return Ok(ShortestPath {
                path: vec![],
                cost: f64::INFINITY,
            });
        }
        let mut path = vec![destination.to_owned()];
        let mut cur = destination.to_owned();
        while let Some(Some(p)) = tree.previous.get(&cur) {
            path.push(p.clone());
            cur = p.clone();
        }
        path.reverse();
        Ok(ShortestPath { path, cost })
    }
}
