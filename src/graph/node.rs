//! Vertex identity.
//!
//! [`NodeId`] is the only handle callers hold on a vertex. Identities are issued by
//! [`Graph::add_node`](crate::graph::Graph::add_node) in increasing order and are never
//! handed out twice, even after the vertex they named has been removed.

use std::fmt;

/// A strongly-typed vertex identity.
///
/// `NodeId` wraps the vertex's slot index in its graph. Because removed slots are
/// tombstoned rather than recycled, a `NodeId` obtained from one graph either names the
/// same vertex forever or names nothing; it never silently starts naming a different one.
///
/// Algorithms that keep per-vertex state size their tables by
/// [`Graph::node_bound`](crate::graph::Graph::node_bound) and index them with
/// [`NodeId::index`].
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a: NodeId = graph.add_node("A");
/// let b: NodeId = graph.add_node("B");
///
/// assert_ne!(a, b);
/// assert_eq!(a.index(), 0);
/// assert_eq!(b.to_string(), "n1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw slot index.
    ///
    /// Mostly useful in tests and when rebuilding identities from a dense index table.
    /// The result is only meaningful against a graph that actually has a live vertex in
    /// that slot.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index of this vertex.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
