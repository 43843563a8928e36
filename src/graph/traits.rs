//! Capability traits the algorithms are written against.
//!
//! Every packaged algorithm in [`crate::graph::algorithms`] is generic over these traits
//! rather than over [`Graph`](crate::graph::Graph) itself, so a caller-owned graph type
//! only needs to expose the capabilities an algorithm actually uses.
//!
//! - [`GraphBase`] - vertex enumeration, counts, slot bound, directedness
//! - [`IncidenceGraph`] - out-edges of a vertex
//! - [`BidirectionalGraph`] - in-edges of a vertex
//! - [`EdgeListGraph`] - enumeration of all edges
//!
//! All adjacency queries return iterators. Out-edge order is insertion order; the
//! traversal engine and every algorithm built on it rely on that for determinism.

use crate::graph::{EdgeRef, NodeId};

/// Core vertex-level properties of a graph.
pub trait GraphBase {
    /// Number of live vertices.
    fn node_count(&self) -> usize;

    /// One past the largest vertex slot index ever issued.
    ///
    /// Per-vertex tables indexed by [`NodeId::index`] must be at least this long.
    fn node_bound(&self) -> usize;

    /// Live vertices in ascending identity order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` names a live vertex.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Returns `true` if edges are directed.
    fn is_directed(&self) -> bool;
}

/// Graphs whose out-edges can be enumerated per vertex.
///
/// For undirected graphs each incident edge is yielded oriented away from `node`.
pub trait IncidenceGraph: GraphBase {
    /// Out-edges of `node` in insertion order. Unknown vertices yield nothing.
    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef>;

    /// Number of out-edges of `node`.
    fn out_degree(&self, node: NodeId) -> usize {
        self.out_edges(node).count()
    }

    /// Targets of the out-edges of `node`, one entry per edge.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.out_edges(node).map(|edge| edge.target)
    }
}

/// Graphs that can also enumerate in-edges per vertex.
pub trait BidirectionalGraph: IncidenceGraph {
    /// In-edges of `node` in insertion order. Unknown vertices yield nothing.
    fn in_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef>;

    /// Number of in-edges of `node`.
    fn in_degree(&self, node: NodeId) -> usize {
        self.in_edges(node).count()
    }

    /// Sources of the in-edges of `node`, one entry per edge.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.in_edges(node).map(|edge| edge.source)
    }
}

/// Graphs whose edges can be enumerated as a whole.
pub trait EdgeListGraph: GraphBase {
    /// Number of live edges.
    fn edge_count(&self) -> usize;

    /// One past the largest edge slot index ever issued.
    fn edge_bound(&self) -> usize;

    /// Live edges in ascending identity order, with their stored orientation.
    fn edge_refs(&self) -> impl Iterator<Item = EdgeRef>;
}
