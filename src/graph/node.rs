/// A uniquely identified vertex carrying an opaque payload.
///
/// The id is fixed at construction; only the payload is mutable. A node
/// becomes part of a graph once registered via
/// [`Graph::add_node`](super::Graph::add_node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<D = ()> {
    id: String,
    data: D,
}

impl Node<()> {
    /// Creates a node without a payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_data(id, ())
    }
}

impl<D> Node<D> {
    pub fn with_data(id: impl Into<String>, data: D) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Replaces the payload, returning `self` for chaining.
    pub fn set_data(&mut self, data: D) -> &mut Self {
        self.data = data;
        self
    }
}
