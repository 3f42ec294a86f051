use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

impl<D> Graph<Directed, D> {
    /// The registered nodes in topological order: every node before all of
    /// its successors.
    ///
    /// Fails with [GraphError::Cycle] on a cyclic graph. DFS post-order,
    /// reversed; the result is deterministic for a given registration and
    /// edge-insertion order, but is just *a* valid ordering, not a canonical
    /// one.
    pub fn toposort(&self) -> Result<Vec<&Node<D>>> {
        if self.has_cycle() {
            return Err(GraphError::Cycle);
        }
        let mut visited: HashSet<NodeIdx, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut stack = Vec::with_capacity(self.node_count());
        for (ix, _) in self.registered() {
            if !visited.contains(&ix) {
                self.finish_order(ix, &mut visited, &mut stack);
            }
        }
        Ok(stack
            .into_iter()
            .rev()
            .filter_map(|ix| self.node_at(ix))
            .collect())
    }

    fn finish_order(
        &self,
        cur: NodeIdx,
        visited: &mut HashSet<NodeIdx, RandomState>,
        stack: &mut Vec<NodeIdx>,
    ) {
        visited.insert(cur);
        for (_, next) in self.incident(cur) {
            if self.is_registered(next) && !visited.contains(&next) {
                self.finish_order(next, visited, stack);
            }
        }
        stack.push(cur);
    }
}
