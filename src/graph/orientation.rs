/// Edge-orientation policy of a [Graph](super::Graph) container.
///
/// The policy decides how an edge's endpoint pair is read: as an unordered
/// pair ([Undirected]) or as source and target ([Directed]). Operations that
/// only make sense on one orientation live in inherent impl blocks on the
/// corresponding concrete container type.
pub trait Orientation {
    const IS_DIRECTED: bool;
}

/// Marker for graphs whose edges run from source to target.
#[derive(Debug, Clone, Copy)]
pub enum Directed {}

/// Marker for graphs whose edges are unordered endpoint pairs.
#[derive(Debug, Clone, Copy)]
pub enum Undirected {}

impl Orientation for Directed {
    const IS_DIRECTED: bool = true;
}

impl Orientation for Undirected {
    const IS_DIRECTED: bool = false;
}
