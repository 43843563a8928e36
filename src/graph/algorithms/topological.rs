//! Depth-first topological ordering.
//!
//! The sort is a [`DfsVisitor`] that appends each vertex to the result when it finishes
//! and fails on the first back edge. The result is therefore in finish order: every
//! vertex appears after all vertices it has edges to. That is the "dependencies first"
//! order a scheduler wants when edges point from a unit to what it depends on; reverse
//! the vector for a sources-first order.

use log::debug;

use crate::{
    graph::{
        algorithms::{depth_first_search, DfsVisitor},
        EdgeRef, IncidenceGraph, NodeId,
    },
    Error, Result,
};

struct TopologicalSorter {
    order: Vec<NodeId>,
}

impl DfsVisitor for TopologicalSorter {
    fn back_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Err(Error::CyclicGraph {
            edge: edge.id,
            from: edge.source,
            to: edge.target,
        })
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        self.order.push(node);
        Ok(())
    }
}

/// Orders all vertices so that for every edge `u -> v`, `v` comes before `u`.
///
/// Roots are taken in ascending identity order and out-edges in insertion order, so the
/// result is deterministic for a given graph.
///
/// # Arguments
///
/// * `graph` - The graph to sort
///
/// # Errors
///
/// Returns [`Error::CyclicGraph`] carrying the first back edge found if the graph has a
/// cycle. No partial order is returned. An undirected graph with at least one edge is
/// always cyclic.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::topological_sort};
///
/// // A -> B -> D, A -> C -> D
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
/// graph.add_edge(b, d, ())?;
/// graph.add_edge(c, d, ())?;
///
/// let order = topological_sort(&graph)?;
/// assert_eq!(order, vec![d, b, c, a]);
/// # Ok::<(), dagscope::Error>(())
/// ```
pub fn topological_sort<G: IncidenceGraph>(graph: &G) -> Result<Vec<NodeId>> {
    let mut sorter = TopologicalSorter {
        order: Vec::with_capacity(graph.node_count()),
    };

    if let Err(err) = depth_first_search(graph, &mut sorter, None) {
        debug!("topological sort aborted: {err}");
        return Err(err);
    }
    Ok(sorter.order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn create_linear_graph() -> (Graph<&'static str>, Vec<NodeId>) {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, c, ()).unwrap();
        (graph, vec![a, b, c])
    }

    fn assert_dependencies_first(graph: &Graph<impl Sized>, order: &[NodeId]) {
        let position = |node: NodeId| order.iter().position(|&n| n == node).unwrap();
        for edge in graph.edge_refs() {
            assert!(
                position(edge.target) < position(edge.source),
                "{edge} violates the order"
            );
        }
    }

    #[test]
    fn test_linear_chain_finish_order() {
        let (graph, nodes) = create_linear_graph();
        assert_eq!(
            topological_sort(&graph).unwrap(),
            vec![nodes[2], nodes[1], nodes[0]]
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph = Graph::new();
        assert!(topological_sort(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_disconnected_vertices_included() {
        let (mut graph, _) = create_linear_graph();
        let lonely = graph.add_node("D");
        let order = topological_sort(&graph).unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order.last(), Some(&lonely));
        assert_dependencies_first(&graph, &order);
    }

    #[test]
    fn test_four_vertex_example() {
        let mut graph: Graph<u32> = Graph::new();
        let n: Vec<NodeId> = (1..=4).map(|i| graph.add_node(i)).collect();
        graph.add_edge(n[0], n[1], ()).unwrap();
        graph.add_edge(n[1], n[2], ()).unwrap();
        graph.add_edge(n[2], n[3], ()).unwrap();
        graph.add_edge(n[1], n[3], ()).unwrap();

        let mut order = topological_sort(&graph).unwrap();
        assert_dependencies_first(&graph, &order);
        order.reverse();
        let labels: Vec<u32> = order.iter().map(|&node| *graph.node(node).unwrap()).collect();
        assert_eq!(labels, vec![1, 2, 3, 4]);

        let closing = graph.add_edge(n[3], n[0], ()).unwrap();
        assert_eq!(
            topological_sort(&graph),
            Err(Error::CyclicGraph {
                edge: closing,
                from: n[3],
                to: n[0],
            })
        );
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let lo = graph.add_edge(a, a, ()).unwrap();
        assert_eq!(
            topological_sort(&graph),
            Err(Error::CyclicGraph {
                edge: lo,
                from: a,
                to: a,
            })
        );
    }

    #[test]
    fn test_undirected_edge_is_cyclic() {
        let mut graph: Graph = Graph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        assert_eq!(topological_sort(&graph).unwrap().len(), 2);

        graph.add_edge(a, b, ()).unwrap();
        assert!(matches!(
            topological_sort(&graph),
            Err(Error::CyclicGraph { .. })
        ));
    }

    #[test]
    fn test_parallel_edges_in_dag() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), vec![b, a]);
    }
}
