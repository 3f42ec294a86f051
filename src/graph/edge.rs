/// A weighted connection between two node ids.
///
/// The endpoints and the id are fixed for the edge's lifetime; to "move" an
/// edge, remove it and add a new one. The id defaults to
/// `"{node_a}-{node_b}"` and can be overridden with [`with_id`](Edge::with_id),
/// which is also what allows parallel edges between the same endpoints.
///
/// Whether the endpoint pair is ordered is decided by the container the edge
/// is registered into, not by the edge itself. [`source`](Edge::source) and
/// [`target`](Edge::target) are the directed reading of
/// [`node_a`](Edge::node_a) and [`node_b`](Edge::node_b).
///
/// Negative weights are legal at construction; algorithms enforce their own
/// preconditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: String,
    node_a: String,
    node_b: String,
    weight: f64,
}

impl Edge {
    /// Creates an edge with weight `0.0` and the derived id.
    pub fn new(node_a: impl Into<String>, node_b: impl Into<String>) -> Self {
        let node_a = node_a.into();
        let node_b = node_b.into();
        let id = format!("{node_a}-{node_b}");
        Self {
            id,
            node_a,
            node_b,
            weight: 0.0,
        }
    }

    /// Replaces the derived id with an explicit one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ordered endpoint pair `(node_a, node_b)`.
    pub fn nodes(&self) -> (&str, &str) {
        (&self.node_a, &self.node_b)
    }

    pub fn node_a(&self) -> &str {
        &self.node_a
    }

    pub fn node_b(&self) -> &str {
        &self.node_b
    }

    /// Directed alias of [`node_a`](Edge::node_a).
    pub fn source(&self) -> &str {
        &self.node_a
    }

    /// Directed alias of [`node_b`](Edge::node_b).
    pub fn target(&self) -> &str {
        &self.node_b
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replaces the weight, returning `self` for chaining.
    pub fn set_weight(&mut self, weight: f64) -> &mut Self {
        self.weight = weight;
        self
    }
}
