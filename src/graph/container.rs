use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

/// An in-memory weighted graph, generic over its edge-[Orientation].
///
/// `D` is the node payload type. Nodes and edges are owned by the container;
/// removal only unregisters them here and hands them back to the caller.
///
/// Node and edge tables iterate in registration order. Adjacency is kept as
/// ordered `(node, other, edge)` sets, the same layout for both directions,
/// so neighbors, predecessors, and edge lookups are range scans instead of
/// passes over the whole edge table.
pub struct Graph<O: Orientation, D = ()> {
    node_seq: NodeIdxFactory,
    edge_seq: EdgeIdxFactory,
    node_ids: BiHashMap<NodeIdx, String, RandomState, RandomState>,
    edge_ids: BiHashMap<EdgeIdx, String, RandomState, RandomState>,
    nodes: BTreeMap<NodeIdx, Node<D>>,
    edges: BTreeMap<EdgeIdx, Edge>,
    out_edges: BTreeSet<(NodeIdx, NodeIdx, EdgeIdx)>,
    in_edges: BTreeSet<(NodeIdx, NodeIdx, EdgeIdx)>,
    _orientation: PhantomData<O>,
}

/// An undirected graph: edges are unordered endpoint pairs.
pub type UnGraph<D = ()> = Graph<Undirected, D>;

/// A directed graph: edges run from source to target.
pub type DiGraph<D = ()> = Graph<Directed, D>;

impl<O: Orientation, D> Graph<O, D> {
    pub fn new() -> Self {
        Self {
            node_seq: NodeIdxFactory::new(),
            edge_seq: EdgeIdxFactory::new(),
            node_ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            edge_ids: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            out_edges: BTreeSet::new(),
            in_edges: BTreeSet::new(),
            _orientation: PhantomData,
        }
    }

    /// Registers a node.
    ///
    /// Fails with [GraphError::DuplicateNodeId] if a node with the same id is
    /// already registered. An id stays bound to its internal handle for the
    /// container's life, so a node that is removed and later re-added resumes
    /// its original registration position.
    pub fn add_node(&mut self, node: Node<D>) -> Result<()> {
        let ix = self.intern(node.id());
        if self.nodes.contains_key(&ix) {
            return Err(GraphError::DuplicateNodeId(node.id().to_owned()));
        }
        self.nodes.insert(ix, node);
        Ok(())
    }

    /// Unregisters a node and cascades to every incident edge, in either
    /// endpoint position, self-loops included.
    ///
    /// Returns the detached edges in insertion order. A no-op on an absent
    /// id, not an error.
    pub fn remove_node(&mut self, id: &str) -> Vec<Edge> {
        let Some(ix) = self.node_ix(id) else {
            return vec![];
        };
        self.nodes.remove(&ix);
        let lo = (ix, NodeIdx::MIN, EdgeIdx::MIN);
        let hi = (ix.next(), NodeIdx::MIN, EdgeIdx::MIN);
        let incident: BTreeSet<EdgeIdx> = self
            .out_edges
            .range(lo..hi)
            .map(|(_, _, e)| *e)
            .chain(self.in_edges.range(lo..hi).map(|(_, _, e)| *e))
            .collect();
        incident.into_iter().filter_map(|e| self.detach(e)).collect()
    }

    /// Registers an edge.
    ///
    /// Fails with [GraphError::DuplicateEdgeId] if the id is taken. The
    /// endpoints need not be registered nodes; edges to unregistered ids are
    /// stored but invisible to algorithms that walk the node table.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edge_ids.contains_right(edge.id()) {
            return Err(GraphError::DuplicateEdgeId(edge.id().to_owned()));
        }
        let a = self.intern(edge.node_a());
        let b = self.intern(edge.node_b());
        let ix = self.edge_seq.one_more();
        self.edge_ids.insert(ix, edge.id().to_owned());
        self.out_edges.insert((a, b, ix));
        self.in_edges.insert((b, a, ix));
        self.edges.insert(ix, edge);
        Ok(())
    }

    /// Unregisters an edge by id, releasing the id for reuse.
    ///
    /// Returns the edge, or `None` if absent.
    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let ix = self.edge_ids.get_by_right(id).copied()?;
        self.detach(ix)
    }

    pub fn edge_by_id(&self, id: &str) -> Option<&Edge> {
        let ix = self.edge_ids.get_by_right(id)?;
        self.edges.get(ix)
    }

    /// Mutable access to a registered edge, e.g. to adjust its weight.
    pub fn edge_by_id_mut(&mut self, id: &str) -> Option<&mut Edge> {
        let ix = self.edge_ids.get_by_right(id).copied()?;
        self.edges.get_mut(&ix)
    }

    pub fn node(&self, id: &str) -> Option<&Node<D>> {
        let ix = self.node_ids.get_by_right(id)?;
        self.nodes.get(ix)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node<D>> {
        let ix = self.node_ids.get_by_right(id).copied()?;
        self.nodes.get_mut(&ix)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Registered nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<D>> {
        self.nodes.values()
    }

    /// Registered edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// The adjacent node ids of `id`, in edge-insertion order.
    ///
    /// Undirected graphs yield the other endpoint of every incident edge
    /// (a self-loop once); directed graphs yield targets of outgoing edges
    /// only. Parallel edges produce duplicates — the result is a sequence,
    /// not a set.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        let Some(ix) = self.node_ix(id) else {
            return vec![];
        };
        self.incident(ix)
            .into_iter()
            .map(|(_, other)| self.id_of(other))
            .collect()
    }

    /// The first-inserted edge between `a` and `b`.
    ///
    /// Undirected graphs match either endpoint order; directed graphs only
    /// `source == a && target == b`.
    pub fn edge_between(&self, a: &str, b: &str) -> Option<&Edge> {
        let a = self.node_ix(a)?;
        let b = self.node_ix(b)?;
        let mut first = self.first_connecting(a, b);
        if !O::IS_DIRECTED {
            first = match (first, self.first_connecting(b, a)) {
                (Some(x), Some(y)) => Some(x.min(y)),
                (x, y) => x.or(y),
            };
        }
        first.and_then(|e| self.edges.get(&e))
    }

    /// The id of the first-inserted edge whose `node_a` is `source` and
    /// `node_b` is `target` — a directed-looking match even on the
    /// undirected container.
    pub fn find_edge_id(&self, source: &str, target: &str) -> Option<&str> {
        let a = self.node_ix(source)?;
        let b = self.node_ix(target)?;
        let e = self.first_connecting(a, b)?;
        self.edge_ids.get_by_left(&e).map(String::as_str)
    }

    /// True iff any registered edge has a weight below zero.
    pub fn contains_negative_weight(&self) -> bool {
        self.edges.values().any(|e| e.weight() < 0.0)
    }

    /// The weight matrix over all registered nodes, in registration order.
    ///
    /// A cell is `Some(weight)` when an edge exists and `None` otherwise, so
    /// a zero-weight edge is never conflated with the absence of one.
    /// Mirrored for undirected graphs, one-way for directed ones.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let ids: Vec<String> = self.nodes.values().map(|n| n.id().to_owned()).collect();
        let n = ids.len();
        let mut cells = vec![vec![None; n]; n];
        for (i, from) in ids.iter().enumerate() {
            for (j, to) in ids.iter().enumerate() {
                if let Some(edge) = self.edge_between(from, to) {
                    cells[i][j] = Some(edge.weight());
                }
            }
        }
        AdjacencyMatrix::new(ids, cells)
    }

    fn intern(&mut self, id: &str) -> NodeIdx {
        if let Some(ix) = self.node_ids.get_by_right(id) {
            return *ix;
        }
        let ix = self.node_seq.one_more();
        self.node_ids.insert(ix, id.to_owned());
        ix
    }

    fn detach(&mut self, ix: EdgeIdx) -> Option<Edge> {
        let edge = self.edges.remove(&ix)?;
        let a = self.node_ix(edge.node_a()).unwrap();
        let b = self.node_ix(edge.node_b()).unwrap();
        self.out_edges.remove(&(a, b, ix));
        self.in_edges.remove(&(b, a, ix));
        self.edge_ids.remove_by_left(&ix);
        Some(edge)
    }

    fn first_connecting(&self, a: NodeIdx, b: NodeIdx) -> Option<EdgeIdx> {
        self.out_edges
            .range((a, b, EdgeIdx::MIN)..=(a, b, EdgeIdx::MAX))
            .map(|(_, _, e)| *e)
            .next()
    }

    pub(crate) fn node_ix(&self, id: &str) -> Option<NodeIdx> {
        self.node_ids.get_by_right(id).copied()
    }

    pub(crate) fn id_of(&self, ix: NodeIdx) -> &str {
        self.node_ids.get_by_left(&ix).unwrap()
    }

    pub(crate) fn is_registered(&self, ix: NodeIdx) -> bool {
        self.nodes.contains_key(&ix)
    }

    pub(crate) fn node_at(&self, ix: NodeIdx) -> Option<&Node<D>> {
        self.nodes.get(&ix)
    }

    pub(crate) fn registered(&self) -> impl Iterator<Item = (NodeIdx, &Node<D>)> {
        self.nodes.iter().map(|(ix, n)| (*ix, n))
    }

    pub(crate) fn edge_at(&self, ix: EdgeIdx) -> Option<&Edge> {
        self.edges.get(&ix)
    }

    /// Incident `(edge, other endpoint)` pairs of `ix` in edge-insertion
    /// order, following the orientation policy: outgoing edges only when
    /// directed, both endpoint positions (a self-loop once) when not.
    pub(crate) fn incident(&self, ix: NodeIdx) -> Vec<(EdgeIdx, NodeIdx)> {
        let lo = (ix, NodeIdx::MIN, EdgeIdx::MIN);
        let hi = (ix.next(), NodeIdx::MIN, EdgeIdx::MIN);
        let mut found: Vec<(EdgeIdx, NodeIdx)> = self
            .out_edges
            .range(lo..hi)
            .map(|(_, other, e)| (*e, *other))
            .collect();
        if !O::IS_DIRECTED {
            found.extend(
                self.in_edges
                    .range(lo..hi)
                    .filter(|(v, other, _)| other != v)
                    .map(|(_, other, e)| (*e, *other)),
            );
        }
        found.sort_unstable();
        found
    }

    /// Edge endpoints as handles, in insertion order, with weights.
    pub(crate) fn edge_links(&self) -> Vec<(NodeIdx, NodeIdx, f64)> {
        self.edges
            .values()
            .filter_map(|e| {
                let a = self.node_ix(e.node_a())?;
                let b = self.node_ix(e.node_b())?;
                Some((a, b, e.weight()))
            })
            .collect()
    }
}

impl<D> Graph<Directed, D> {
    /// The ids of nodes with an edge into `id`, in edge-insertion order.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        let Some(ix) = self.node_ix(id) else {
            return vec![];
        };
        let lo = (ix, NodeIdx::MIN, EdgeIdx::MIN);
        let hi = (ix.next(), NodeIdx::MIN, EdgeIdx::MIN);
        let mut found: Vec<(EdgeIdx, NodeIdx)> = self
            .in_edges
            .range(lo..hi)
            .map(|(_, src, e)| (*e, *src))
            .collect();
        found.sort_unstable();
        found.into_iter().map(|(_, src)| self.id_of(src)).collect()
    }
}

impl<O: Orientation, D> Default for Graph<O, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Orientation, D: Clone> Clone for Graph<O, D> {
    fn clone(&self) -> Self {
        Self {
            node_seq: self.node_seq.clone(),
            edge_seq: self.edge_seq.clone(),
            node_ids: self.node_ids.clone(),
            edge_ids: self.edge_ids.clone(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            out_edges: self.out_edges.clone(),
            in_edges: self.in_edges.clone(),
            _orientation: PhantomData,
        }
    }
}

impl<O: Orientation, D> std::fmt::Display for Graph<O, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph:")?;
        for node in self.nodes.values() {
            writeln!(f, "{} -> {}", node.id(), self.neighbors(node.id()).join(", "))?;
        }
        Ok(())
    }
}

impl<O: Orientation, D> std::fmt::Debug for Graph<O, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        for node in self.nodes.values() {
            writeln!(f, "  {}:", node.id())?;
            let ix = self.node_ix(node.id()).unwrap();
            let lo = (ix, NodeIdx::MIN, EdgeIdx::MIN);
            let hi = (ix.next(), NodeIdx::MIN, EdgeIdx::MIN);
            for (_, snk, e) in self.out_edges.range(lo..hi) {
                let eid = self.edge_ids.get_by_left(e).unwrap();
                writeln!(f, "    -> {} by {}", self.id_of(*snk), eid)?;
            }
        }
        write!(f, "}}")
    }
}
