//! Collapsing strongly connected components into a reduced acyclic graph.

use log::debug;

use crate::{
    graph::{algorithms::Components, Graph, GraphConfig, IncidenceGraph, NodeId},
    Result,
};

/// Builds the condensation of `graph` with a caller-computed payload per component.
///
/// The result is a directed graph with one vertex per component; `NodeId::new(c)` is
/// component `c`. For every original edge whose endpoints lie in different components,
/// at most one condensation edge joins the two component vertices.
///
/// `on_component(id, members)` runs once per component, in id order, before any
/// condensation edge is added. Its return value becomes the vertex payload.
///
/// Parallel condensation edges are filtered with [`Graph::find_edge`], a linear scan over
/// the out-edges of the component vertex.
///
/// # Arguments
///
/// * `graph` - The original graph
/// * `components` - Its strongly connected components
/// * `on_component` - Construction callback receiving the component id and its members
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `components` names a
/// component id that does not exist, which can only happen when it was computed for a
/// different graph.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{
///     Graph, NodeId,
///     algorithms::{condensation_graph, strongly_connected_components},
/// };
///
/// let mut graph: Graph<&str> = Graph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let c = graph.add_node("c");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let components = strongly_connected_components(&graph);
/// let condensed = condensation_graph(&graph, &components, |_, members| {
///     members
///         .iter()
///         .filter_map(|&node| graph.node(node).copied())
///         .collect::<Vec<_>>()
///         .join("+")
/// })?;
///
/// assert_eq!(condensed.node_count(), 2);
/// assert_eq!(condensed.node(NodeId::new(1)).map(String::as_str), Some("a+b"));
/// assert_eq!(condensed.edge_count(), 1);
/// # Ok::<(), dagscope::Error>(())
/// ```
pub fn condensation_graph<G, N, F>(
    graph: &G,
    components: &Components,
    mut on_component: F,
) -> Result<Graph<N>>
where
    G: IncidenceGraph,
    F: FnMut(usize, &[NodeId]) -> N,
{
    let members = components.members();
    let mut condensed = Graph::with_capacity(GraphConfig::directed(), members.len(), 0);
    for (id, group) in members.iter().enumerate() {
        condensed.add_node(on_component(id, group));
    }

    let mut collapsed = 0usize;
    for (node, from) in components.iter() {
        for edge in graph.out_edges(node) {
            let Some(to) = components.component(edge.target) else {
                continue;
            };
            if from == to {
                continue;
            }
            let (from, to) = (NodeId::new(from), NodeId::new(to));
            if condensed.find_edge(from, to).is_some() {
                collapsed += 1;
                continue;
            }
            condensed.add_edge(from, to, ())?;
        }
    }

    debug!(
        "condensation has {} vertices and {} edges ({} parallel edges collapsed)",
        condensed.node_count(),
        condensed.edge_count(),
        collapsed
    );
    Ok(condensed)
}

/// Builds the condensation of `graph` whose vertex payload is the member list.
///
/// # Errors
///
/// See [`condensation_graph`].
pub fn condensation<G: IncidenceGraph>(
    graph: &G,
    components: &Components,
) -> Result<Graph<Vec<NodeId>>> {
    condensation_graph(graph, components, |_, members| members.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algorithms::{has_cycle, strongly_connected_components};

    fn create_two_cycles_graph() -> (Graph, Vec<NodeId>) {
        // {A, B} -> {C, D}, plus A -> C, B -> D and D -> E
        let mut graph = Graph::new();
        let n: Vec<NodeId> = (0..5).map(|_| graph.add_node(())).collect();
        graph.add_edge(n[0], n[1], ()).unwrap();
        graph.add_edge(n[1], n[0], ()).unwrap();
        graph.add_edge(n[2], n[3], ()).unwrap();
        graph.add_edge(n[3], n[2], ()).unwrap();
        graph.add_edge(n[0], n[2], ()).unwrap();
        graph.add_edge(n[1], n[3], ()).unwrap();
        graph.add_edge(n[3], n[4], ()).unwrap();
        (graph, n)
    }

    #[test]
    fn test_condensation_collapses_parallel_edges() {
        let (graph, n) = create_two_cycles_graph();
        let components = strongly_connected_components(&graph);
        let condensed = condensation(&graph, &components).unwrap();

        assert_eq!(condensed.node_count(), components.count());
        assert_eq!(condensed.node_count(), 3);
        assert_eq!(condensed.edge_count(), 2);
        assert!(!has_cycle(&condensed));

        let ab = NodeId::new(components.component(n[0]).unwrap());
        let cd = NodeId::new(components.component(n[2]).unwrap());
        let e = NodeId::new(components.component(n[4]).unwrap());
        assert_eq!(condensed.node(ab), Some(&vec![n[0], n[1]]));
        assert!(condensed.find_edge(ab, cd).is_some());
        assert!(condensed.find_edge(cd, e).is_some());
        assert!(condensed.find_edge(ab, e).is_none());
    }

    #[test]
    fn test_condensation_events_once_per_component() {
        let (graph, _) = create_two_cycles_graph();
        let components = strongly_connected_components(&graph);

        let mut seen = Vec::new();
        let condensed = condensation_graph(&graph, &components, |id, members| {
            seen.push((id, members.len()));
            members.len()
        })
        .unwrap();

        assert_eq!(seen, vec![(0, 1), (1, 2), (2, 2)]);
        assert_eq!(condensed.node(NodeId::new(0)), Some(&1));
    }

    #[test]
    fn test_condensation_of_dag_is_isomorphic() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, c, ()).unwrap();

        let components = strongly_connected_components(&graph);
        let condensed = condensation(&graph, &components).unwrap();
        assert_eq!(condensed.node_count(), 3);
        assert_eq!(condensed.edge_count(), 2);
    }

    #[test]
    fn test_condensation_empty_graph() {
        let graph: Graph = Graph::new();
        let components = strongly_connected_components(&graph);
        let condensed = condensation(&graph, &components).unwrap();
        assert!(condensed.is_empty());
    }
}
