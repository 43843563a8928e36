//! A borrowed view of a graph with every edge turned around.

use crate::graph::{BidirectionalGraph, EdgeRef, GraphBase, IncidenceGraph, NodeId};

/// Presents the in-edges of the wrapped graph as out-edges and vice versa.
///
/// Running a forward traversal on `Reversed(&graph)` walks `graph` backwards, which is
/// how "which vertices can reach `v`" questions are answered with the regular engine.
/// On an undirected graph the view is identical to the graph itself.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, Reversed, algorithms::reachable};
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
///
/// assert_eq!(reachable(&graph, b)?, vec![b]);
/// assert_eq!(reachable(&Reversed(&graph), b)?, vec![b, a]);
/// # Ok::<(), dagscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'g, G>(pub &'g G);

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    fn node_count(&self) -> usize {
        self.0.node_count()
    }

    fn node_bound(&self) -> usize {
        self.0.node_bound()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.0.node_ids()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.0.contains_node(node)
    }

    fn is_directed(&self) -> bool {
        self.0.is_directed()
    }
}

impl<G: BidirectionalGraph> IncidenceGraph for Reversed<'_, G> {
    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef> {
        self.0.in_edges(node).map(EdgeRef::reversed)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.0.in_degree(node)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for Reversed<'_, G> {
    fn in_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef> {
        self.0.out_edges(node).map(EdgeRef::reversed)
    }

    fn in_degree(&self, node: NodeId) -> usize {
        self.0.out_degree(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_reversed_swaps_directions() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let ab = graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();

        let view = Reversed(&graph);
        assert_eq!(view.out_degree(a), 0);
        assert_eq!(view.in_degree(a), 2);
        assert_eq!(view.out_edges(b).collect::<Vec<_>>(), vec![EdgeRef::new(ab, b, a)]);
        assert_eq!(view.node_count(), 3);
    }

    #[test]
    fn test_reversed_undirected_is_identity() {
        let mut graph: Graph = Graph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();

        let view = Reversed(&graph);
        let forward: Vec<EdgeRef> = IncidenceGraph::out_edges(&graph, a).collect();
        let backward: Vec<EdgeRef> = view.out_edges(a).collect();
        assert_eq!(forward, backward);
    }
}
