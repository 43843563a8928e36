//! Edge identity and the lightweight edge view handed to algorithms and visitors.

use std::fmt;

use crate::graph::NodeId;

/// A strongly-typed edge identity.
///
/// Like [`NodeId`], edge identities are issued in increasing order by
/// [`Graph::add_edge`](crate::graph::Graph::add_edge) and never reused after removal.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::Graph;
///
/// let mut graph: Graph<(), &str> = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let e = graph.add_edge(a, b, "a->b")?;
///
/// assert_eq!(graph.edge(e), Some(&"a->b"));
/// assert_eq!(graph.edge_endpoints(e), Some((a, b)));
/// assert_eq!(e.to_string(), "e0");
/// # Ok::<(), dagscope::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates an `EdgeId` from a raw slot index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw slot index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// An edge as seen from one traversal step: its identity plus the oriented endpoints.
///
/// On a directed graph `source`/`target` are the stored endpoints. On an undirected graph
/// the incidence lists hand out each edge oriented away from the vertex being expanded,
/// so `source` is always the vertex the walk is standing on.
///
/// `EdgeRef` is `Copy` and carries no payload; use [`Graph::edge`](crate::graph::Graph::edge)
/// with [`EdgeRef::id`] to reach the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    /// The edge identity
    pub id: EdgeId,
    /// The vertex the edge leaves
    pub source: NodeId,
    /// The vertex the edge enters
    pub target: NodeId,
}

impl EdgeRef {
    /// Creates an edge view.
    #[must_use]
    pub const fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        EdgeRef { id, source, target }
    }

    /// Returns the same edge with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        EdgeRef {
            id: self.id,
            source: self.target,
            target: self.source,
        }
    }

    /// Returns `true` if the edge starts and ends on the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.id, self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_edge_id_as_map_key() {
        let mut map: HashMap<EdgeId, &str> = HashMap::new();
        map.insert(EdgeId::new(1), "one");
        map.insert(EdgeId::new(2), "two");
        map.insert(EdgeId::new(1), "uno");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&EdgeId::new(1)), Some(&"uno"));
    }

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(9);
        assert_eq!(format!("{edge:?}"), "EdgeId(9)");
        assert_eq!(format!("{edge}"), "e9");
    }

    #[test]
    fn test_edge_ref_reversed() {
        let edge = EdgeRef::new(EdgeId::new(0), NodeId::new(1), NodeId::new(2));
        let back = edge.reversed();

        assert_eq!(back.id, edge.id);
        assert_eq!(back.source, NodeId::new(2));
        assert_eq!(back.target, NodeId::new(1));
        assert!(!edge.is_self_loop());
        assert_eq!(edge.to_string(), "e0 (n1 -> n2)");
    }

    #[test]
    fn test_edge_ref_self_loop() {
        let edge = EdgeRef::new(EdgeId::new(3), NodeId::new(5), NodeId::new(5));
        assert!(edge.is_self_loop());
        assert_eq!(edge.reversed(), edge);
    }
}
