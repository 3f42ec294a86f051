use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

impl<D> Graph<Undirected, D> {
    /// Whether the graph contains a cycle.
    ///
    /// DFS from each unvisited node; an edge back to a visited node that is
    /// not the immediate DFS parent signals a cycle. Correct for simple
    /// graphs only: two nodes joined by parallel edges are reported as a
    /// cycle, because each of the edges looks like a back edge to the other.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<NodeIdx, RandomState> = HashSet::with_hasher(RandomState::new());
        for (ix, _) in self.registered() {
            if !visited.contains(&ix) && self.back_edge_from(ix, None, &mut visited) {
                return true;
            }
        }
        false
    }

    fn back_edge_from(
        &self,
        cur: NodeIdx,
        parent: Option<NodeIdx>,
        visited: &mut HashSet<NodeIdx, RandomState>,
    ) -> bool {
        visited.insert(cur);
        for (_, next) in self.incident(cur) {
            if !self.is_registered(next) {
                continue;
            }
            if !visited.contains(&next) {
                if self.back_edge_from(next, Some(cur), visited) {
                    return true;
                }
            } else if parent != Some(next) {
                return true;
            }
        }
        false
    }
}

impl<D> Graph<Directed, D> {
    /// Whether the graph contains a directed cycle.
    ///
    /// DFS keeping a recursion-stack marker besides the visited one; an edge
    /// into a node currently on the stack signals a cycle.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<NodeIdx, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut on_stack: HashSet<NodeIdx, RandomState> = HashSet::with_hasher(RandomState::new());
        for (ix, _) in self.registered() {
            if !visited.contains(&ix) && self.cycle_from(ix, &mut visited, &mut on_stack) {
                return true;
            }
        }
        false
    }

    fn cycle_from(
        &self,
        cur: NodeIdx,
        visited: &mut HashSet<NodeIdx, RandomState>,
        on_stack: &mut HashSet<NodeIdx, RandomState>,
    ) -> bool {
        visited.insert(cur);
        on_stack.insert(cur);
        for (_, next) in self.incident(cur) {
            if !self.is_registered(next) {
                continue;
            }
            if !visited.contains(&next) {
                if self.cycle_from(next, visited, on_stack) {
                    return true;
                }
            } else if on_stack.contains(&next) {
                return true;
            }
        }
        on_stack.remove(&cur);
        false
    }
}
