/// Handle of an interned node id, essentially a `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeIdx(usize);

/// A factory to generate `NodeIdx` uniquely.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeIdxFactory(usize);

impl NodeIdxFactory {
    pub(crate) fn new() -> Self {
        Self(0)
    }

    pub(crate) fn one_more(&mut self) -> NodeIdx {
        let cur = self.0;
        self.0 += 1;
        NodeIdx(cur)
    }
}

impl NodeIdx {
    pub(crate) const MIN: NodeIdx = NodeIdx(0);

    pub(crate) fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

/// Handle of an interned edge id.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub(crate) struct EdgeIdx(usize);

/// A factory to generate `EdgeIdx` uniquely.
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeIdxFactory(usize);

impl EdgeIdxFactory {
    pub(crate) fn new() -> Self {
        Self(0)
    }

    pub(crate) fn one_more(&mut self) -> EdgeIdx {
        let cur = self.0;
        self.0 += 1;
        EdgeIdx(cur)
    }
}

impl EdgeIdx {
    pub(crate) const MIN: EdgeIdx = EdgeIdx(0);
    pub(crate) const MAX: EdgeIdx = EdgeIdx(usize::MAX);
}
