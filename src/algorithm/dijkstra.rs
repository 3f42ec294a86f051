use crate::algorithm::ShortestPath;
use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;

/// A tentative distance usable as a priority-queue key.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl<O: Orientation, D> Graph<O, D> {
    /// Single-pair shortest path by Dijkstra's algorithm.
    ///
    /// Fails with [GraphError::NegativeWeight] if *any* edge in the graph
    /// has negative weight, reachable from `start` or not — the check is
    /// eager because the algorithm is unsound on such graphs as a whole.
    /// Ties between equal-cost paths break by queue extraction order.
    pub fn shortest_path_dijkstra(&self, start: &str, end: &str) -> Result<ShortestPath> {
        if self.contains_negative_weight() {
            return Err(GraphError::NegativeWeight);
        }
        log::debug!("dijkstra from '{start}' to '{end}'");

        let mut dist: HashMap<NodeIdx, f64, RandomState> =
            HashMap::with_hasher(RandomState::new());
        let mut prev: HashMap<NodeIdx, NodeIdx, RandomState> =
            HashMap::with_hasher(RandomState::new());
        let mut queue: KeyedPriorityQueue<NodeIdx, Reverse<Cost>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.node_count(), RandomState::new());
        for (ix, node) in self.registered() {
            let d = if node.id() == start { 0.0 } else { f64::INFINITY };
            dist.insert(ix, d);
            queue.push(ix, Reverse(Cost(d)));
        }
        let end_ix = self.node_ix(end).filter(|ix| self.is_registered(*ix));

        while let Some((cur, Reverse(Cost(cur_dist)))) = queue.pop() {
            if Some(cur) == end_ix || cur_dist.is_infinite() {
                break;
            }
            for (e, other) in self.incident(cur) {
                // popped nodes are settled; their priority entry is gone
                if queue.get_priority(&other).is_none() {
                    continue;
                }
                let Some(edge) = self.edge_at(e) else {
                    continue;
                };
                let alt = cur_dist + edge.weight();
                if alt < dist[&other] {
                    dist.insert(other, alt);
                    prev.insert(other, cur);
                    queue.set_priority(&other, Reverse(Cost(alt))).unwrap();
                }
            }
        }

        let Some(end_ix) = end_ix else {
            return Ok(ShortestPath {
                path: vec![],
                cost: f64::INFINITY,
            });
        };
        let cost = dist.get(&end_ix).copied().unwrap_or(f64::INFINITY);
        if cost.is_infinite() {
            return Ok(ShortestPath {
                path: vec![],
                cost: f64::INFINITY,
            });
        }
        let mut path = vec![self.id_of(end_ix).to_owned()];
        let mut cur = end_ix;
        while let Some(p) = prev.get(&cur) {
            cur = *p;
            path.push(self.id_of(cur).to_owned());
        }
        path.reverse();
        if path.first().map(String::as_str) != Some(start) {
            path.clear();
        }
        Ok(ShortestPath { path, cost })
    }
}
