//! Strongly connected components, Tarjan style, on top of the DFS hooks.
//!
//! The labeller keeps, per vertex, a discovery time, a root candidate (the vertex with the
//! smallest discovery time known to be reachable and still unassigned) and an explicit
//! stack of discovered but unassigned vertices:
//!
//! - `discover_vertex(v)`: `root[v] = v`, stamp `v`, push it
//! - `finish_vertex(v)`: for every out-edge `v -> w` with `w` unassigned, keep whichever
//!   of `root[v]` and `root[w]` was discovered first; if `root[v]` is still `v`, pop the
//!   stack down to `v` and give all popped vertices the next component id
//!
//! Component ids come out in reverse topological order of the condensation graph: a
//! component is numbered before every component that has an edge into it.

use log::debug;

use crate::{
    graph::{
        algorithms::{depth_first_search, DfsVisitor},
        IncidenceGraph, NodeId,
    },
    Result,
};

/// A vertex to component-id map produced by [`strongly_connected_components`].
///
/// Two vertices share a component iff each is reachable from the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    component: Vec<Option<usize>>,
    count: usize,
}

impl Components {
    /// Component id of `node`, or `None` if `node` was not in the graph.
    #[must_use]
    pub fn component(&self, node: NodeId) -> Option<usize> {
        self.component.get(node.index()).copied().flatten()
    }

    /// Number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if there are no components (the graph had no vertices).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Vertices of every component, indexed by component id, each in ascending order.
    #[must_use]
    pub fn members(&self) -> Vec<Vec<NodeId>> {
        let mut members = vec![Vec::new(); self.count];
        for (node, id) in self.iter() {
            members[id].push(node);
        }
        members
    }

    /// Returns `true` if both vertices are known and in the same component.
    #[must_use]
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.component(a), self.component(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// `(vertex, component id)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.component
            .iter()
            .enumerate()
            .filter_map(|(index, id)| id.map(|id| (NodeId::new(index), id)))
    }
}

struct TarjanLabeller<'g, G> {
    graph: &'g G,
    root: Vec<NodeId>,
    discover_time: Vec<usize>,
    component: Vec<Option<usize>>,
    stack: Vec<NodeId>,
    clock: usize,
    count: usize,
}

impl<'g, G: IncidenceGraph> TarjanLabeller<'g, G> {
    fn new(graph: &'g G) -> Self {
        let bound = graph.node_bound();
        TarjanLabeller {
            graph,
            root: (0..bound).map(NodeId::new).collect(),
            discover_time: vec![0; bound],
            component: vec![None; bound],
            stack: Vec::new(),
            clock: 0,
            count: 0,
        }
    }
}

impl<G: IncidenceGraph> DfsVisitor for TarjanLabeller<'_, G> {
    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        self.root[node.index()] = node;
        self.component[node.index()] = None;
        self.discover_time[node.index()] = self.clock;
        self.clock += 1;
        self.stack.push(node);
        Ok(())
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        let v = node.index();
        for target in self.graph.successors(node) {
            if self.component[target.index()].is_some() {
                continue;
            }
            let candidate = self.root[target.index()];
            if self.discover_time[candidate.index()] < self.discover_time[self.root[v].index()] {
                self.root[v] = candidate;
            }
        }

        if self.root[v] == node {
            while let Some(member) = self.stack.pop() {
                self.component[member.index()] = Some(self.count);
                if member == node {
                    break;
                }
            }
            self.count += 1;
        }
        Ok(())
    }
}

/// Computes the strongly connected components of a graph.
///
/// On an undirected graph the result is the connected components.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::strongly_connected_components};
///
/// // A -> B -> C -> A, plus isolated D
/// let mut graph: Graph<char> = Graph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// let d = graph.add_node('D');
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// graph.add_edge(c, a, ())?;
///
/// let components = strongly_connected_components(&graph);
/// assert_eq!(components.count(), 2);
/// assert!(components.same_component(a, c));
/// assert!(!components.same_component(a, d));
/// # Ok::<(), dagscope::Error>(())
/// ```
#[must_use]
pub fn strongly_connected_components<G: IncidenceGraph>(graph: &G) -> Components {
    let mut labeller = TarjanLabeller::new(graph);
    let walk = depth_first_search(graph, &mut labeller, None);
    debug_assert!(walk.is_ok(), "component labelling never fails");

    debug!(
        "labelled {} vertices into {} strongly connected components",
        graph.node_count(),
        labeller.count
    );
    Components {
        component: labeller.component,
        count: labeller.count,
    }
}
