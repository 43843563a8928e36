//! The mutable graph store.
//!
//! [`Graph`] owns vertices and edges, issues their identities and answers adjacency
//! queries. Storage is slot based: vertices and edges live in vectors indexed by their
//! identity, removed entries become tombstones, and identities are never handed out
//! twice. Per-vertex incidence lists keep edge identities in insertion order, which is
//! the order every traversal follows.

use log::trace;

use crate::{
    graph::{
        traits::{BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph},
        EdgeId, EdgeRef, GraphConfig, NodeId, RemovalPolicy,
    },
    Error, Result,
};

/// Stored endpoints and payload of one edge.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    source: NodeId,
    target: NodeId,
    data: E,
}

/// A graph with a payload per vertex (`N`) and per edge (`E`).
///
/// The graph is directed by default; pass a [`GraphConfig`] to build an undirected graph
/// or to restrict parallel edges and self-loops. In an undirected graph every edge is
/// incident to both endpoints and adjacency queries orient it relative to the vertex
/// being asked about.
///
/// # Complexity
///
/// - `add_node` / `add_edge`: O(1) amortized (O(out-degree) when parallel edges are disallowed)
/// - `out_edges(v)`: proportional to the out-degree of `v`
/// - `remove_edge`: proportional to the degrees of its endpoints
///
/// # Mutation during traversal
///
/// Algorithms borrow the graph immutably for the duration of a call, so the borrow
/// checker already rules out mutation during an in-flight traversal.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::Graph;
///
/// let mut graph: Graph<&str, u32> = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, 10)?;
/// graph.add_edge(a, c, 20)?;
///
/// let targets: Vec<_> = graph.successors(a).collect();
/// assert_eq!(targets, vec![b, c]);
/// assert_eq!(graph.predecessors(c).collect::<Vec<_>>(), vec![a]);
/// # Ok::<(), dagscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N = (), E = ()> {
    config: GraphConfig,
    nodes: Vec<Option<N>>,
    edges: Vec<Option<EdgeData<E>>>,
    /// Out-edges per vertex; for undirected graphs, all incident edges
    outgoing: Vec<Vec<EdgeId>>,
    /// In-edges per vertex; unused for undirected graphs
    incoming: Vec<Vec<EdgeId>>,
    live_nodes: usize,
    live_edges: usize,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    /// Creates an empty directed graph accepting parallel edges and self-loops.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with the given configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            live_nodes: 0,
            live_edges: 0,
        }
    }

    /// Shorthand for `Graph::with_config(GraphConfig::directed())`.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    /// Shorthand for `Graph::with_config(GraphConfig::undirected())`.
    #[must_use]
    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    /// Creates an empty graph with room for `nodes` vertices and `edges` edges.
    #[must_use]
    pub fn with_capacity(config: GraphConfig, nodes: usize, edges: usize) -> Self {
        Graph {
            config,
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            outgoing: Vec::with_capacity(nodes),
            incoming: Vec::with_capacity(nodes),
            live_nodes: 0,
            live_edges: 0,
        }
    }

    /// Adds a vertex carrying `data` and returns its identity.
    ///
    /// Identities are issued in increasing order starting from 0.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(data));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.live_nodes += 1;
        id
    }

    /// Adds an edge from `from` to `to` carrying `data`.
    ///
    /// # Arguments
    ///
    /// * `from` - Source vertex
    /// * `to` - Target vertex
    /// * `data` - Edge payload
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVertex`] if either endpoint is not in the graph
    /// - [`Error::SelfLoop`] if `from == to` and self-loops are disallowed
    /// - [`Error::ParallelEdge`] if an edge between the pair exists and parallel edges are
    ///   disallowed (for undirected graphs either orientation counts)
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, data: E) -> Result<EdgeId> {
        self.require_node(from)?;
        self.require_node(to)?;

        if from == to && !self.config.allows_self_loops() {
            return Err(Error::SelfLoop(from));
        }
        if !self.config.allows_parallel_edges() && self.find_edge(from, to).is_some() {
            return Err(Error::ParallelEdge { from, to });
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeData {
            source: from,
            target: to,
            data,
        }));
        self.outgoing[from.index()].push(id);
        if self.config.is_directed() {
            self.incoming[to.index()].push(id);
        } else if from != to {
            self.outgoing[to.index()].push(id);
        }
        self.live_edges += 1;
        Ok(id)
    }

    /// Removes a vertex and returns its payload.
    ///
    /// What happens to incident edges depends on the graph's [`RemovalPolicy`].
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownVertex`] if `node` is not in the graph
    /// - [`Error::VertexHasIncidentEdges`] under [`RemovalPolicy::Reject`] when edges are
    ///   still attached
    pub fn remove_node(&mut self, node: NodeId) -> Result<N> {
        self.require_node(node)?;

        let incident = self.incident_edge_ids(node);
        if !incident.is_empty() {
            match self.config.removal_policy {
                RemovalPolicy::Reject => {
                    return Err(Error::VertexHasIncidentEdges {
                        node,
                        count: incident.len(),
                    })
                }
                RemovalPolicy::ClearEdges => {
                    trace!("clearing {} incident edges of {node}", incident.len());
                    for edge in incident {
                        self.remove_edge(edge)?;
                    }
                }
            }
        }

        let data = self.nodes[node.index()]
            .take()
            .ok_or(Error::UnknownVertex(node))?;
        self.outgoing[node.index()] = Vec::new();
        self.incoming[node.index()] = Vec::new();
        self.live_nodes -= 1;
        Ok(data)
    }

    /// Removes an edge and returns its payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEdge`] if `edge` is not in the graph.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<E> {
        let stored = self
            .edges
            .get_mut(edge.index())
            .and_then(Option::take)
            .ok_or(Error::UnknownEdge(edge))?;

        self.outgoing[stored.source.index()].retain(|&id| id != edge);
        if self.config.is_directed() {
            self.incoming[stored.target.index()].retain(|&id| id != edge);
        } else {
            self.outgoing[stored.target.index()].retain(|&id| id != edge);
        }
        self.live_edges -= 1;
        Ok(stored.data)
    }

    /// Removes every edge incident to `node` and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `node` is not in the graph.
    pub fn clear_node_edges(&mut self, node: NodeId) -> Result<usize> {
        self.require_node(node)?;
        let incident = self.incident_edge_ids(node);
        let count = incident.len();
        for edge in incident {
            self.remove_edge(edge)?;
        }
        Ok(count)
    }

    /// Payload of `node`, if it exists.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index()).and_then(Option::as_ref)
    }

    /// Mutable payload of `node`, if it exists.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(node.index()).and_then(Option::as_mut)
    }

    /// Payload of `edge`, if it exists.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edge_data(edge).map(|stored| &stored.data)
    }

    /// Mutable payload of `edge`, if it exists.
    pub fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut E> {
        self.edges
            .get_mut(edge.index())
            .and_then(Option::as_mut)
            .map(|stored| &mut stored.data)
    }

    /// The edge with its stored orientation, if it exists.
    #[must_use]
    pub fn edge_ref(&self, edge: EdgeId) -> Option<EdgeRef> {
        self.edge_data(edge)
            .map(|stored| EdgeRef::new(edge, stored.source, stored.target))
    }

    /// Stored `(source, target)` of `edge`, if it exists.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edge_data(edge)
            .map(|stored| (stored.source, stored.target))
    }

    /// Live vertices in ascending identity order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| NodeId::new(index))
    }

    /// Live vertices with their payloads.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|data| (NodeId::new(index), data)))
    }

    /// Live edges in ascending identity order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| EdgeId::new(index))
    }

    /// Live edges with their payloads.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.edges.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|stored| (EdgeId::new(index), &stored.data))
        })
    }

    /// Live edges with their stored orientation.
    pub fn edge_refs(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.edges.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|stored| EdgeRef::new(EdgeId::new(index), stored.source, stored.target))
        })
    }

    /// Out-edges of `node` in insertion order.
    ///
    /// On an undirected graph this is every incident edge, each oriented so that
    /// `source == node`. A self-loop appears once. Unknown vertices yield nothing.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef> + '_ {
        self.outgoing
            .get(node.index())
            .into_iter()
            .flatten()
            .filter_map(move |&edge| self.oriented_from(edge, node))
    }

    /// In-edges of `node` in insertion order, each oriented so that `target == node`.
    ///
    /// On an undirected graph these are the same edges as [`out_edges`](Self::out_edges),
    /// reversed.
    pub fn in_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef> + '_ {
        let lists = if self.config.is_directed() {
            &self.incoming
        } else {
            &self.outgoing
        };
        lists
            .get(node.index())
            .into_iter()
            .flatten()
            .filter_map(move |&edge| self.oriented_from(edge, node))
            .map(EdgeRef::reversed)
    }

    /// Targets of the out-edges of `node`, one per edge.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(node).map(|edge| edge.target)
    }

    /// Sources of the in-edges of `node`, one per edge.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.in_edges(node).map(|edge| edge.source)
    }

    /// Number of out-edges of `node` (incident edges on an undirected graph).
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing.get(node.index()).map_or(0, Vec::len)
    }

    /// Number of in-edges of `node` (incident edges on an undirected graph).
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        if self.config.is_directed() {
            self.incoming.get(node.index()).map_or(0, Vec::len)
        } else {
            self.out_degree(node)
        }
    }

    /// Number of edge endpoints at `node`; a self-loop counts twice.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        if self.config.is_directed() {
            return self.out_degree(node) + self.in_degree(node);
        }
        self.out_edges(node)
            .map(|edge| if edge.is_self_loop() { 2 } else { 1 })
            .sum()
    }

    /// First edge from `from` to `to` in insertion order.
    ///
    /// On an undirected graph an edge stored as `to -> from` also matches. This is a
    /// linear scan over the out-edges of `from`.
    #[must_use]
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from)
            .find(|edge| edge.target == to)
            .map(|edge| edge.id)
    }

    /// Returns `true` if `node` is a live vertex.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.index()), Some(Some(_)))
    }

    /// Returns `true` if `edge` is a live edge.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edge_data(edge).is_some()
    }

    /// Number of live vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// One past the largest vertex index ever issued, tombstones included.
    #[must_use]
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// One past the largest edge index ever issued, tombstones included.
    #[must_use]
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Returns `true` if edges are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.is_directed()
    }

    /// Returns `true` if parallel edges are accepted.
    #[must_use]
    pub fn allows_parallel_edges(&self) -> bool {
        self.config.allows_parallel_edges()
    }

    /// Returns `true` if self-loops are accepted.
    #[must_use]
    pub fn allows_self_loops(&self) -> bool {
        self.config.allows_self_loops()
    }

    /// The configuration this graph was created with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    fn require_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(node))
        }
    }

    fn edge_data(&self, edge: EdgeId) -> Option<&EdgeData<E>> {
        self.edges.get(edge.index()).and_then(Option::as_ref)
    }

    /// Orients `edge` so that it leaves `node` whenever `node` is one of its ends.
    fn oriented_from(&self, edge: EdgeId, node: NodeId) -> Option<EdgeRef> {
        let stored = self.edge_data(edge)?;
        if stored.source == node {
            Some(EdgeRef::new(edge, stored.source, stored.target))
        } else {
            Some(EdgeRef::new(edge, stored.target, stored.source))
        }
    }

    /// Distinct edges touching `node`, ascending.
    fn incident_edge_ids(&self, node: NodeId) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = self.outgoing[node.index()]
            .iter()
            .chain(self.incoming[node.index()].iter())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl<N, E> GraphBase for Graph<N, E> {
    fn node_count(&self) -> usize {
        self.live_nodes
    }

    fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        Graph::node_ids(self)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        Graph::contains_node(self, node)
    }

    fn is_directed(&self) -> bool {
        self.config.is_directed()
    }
}

impl<N, E> IncidenceGraph for Graph<N, E> {
    fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef> {
        Graph::out_edges(self, node)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        Graph::out_degree(self, node)
    }
}

impl<N, E> BidirectionalGraph for Graph<N, E> {
    fn in_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeRef> {
        Graph::in_edges(self, node)
    }

    fn in_degree(&self, node: NodeId) -> usize {
        Graph::in_degree(self, node)
    }
}

impl<N, E> EdgeListGraph for Graph<N, E> {
    fn edge_count(&self) -> usize {
        self.live_edges
    }

    fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    fn edge_refs(&self) -> impl Iterator<Item = EdgeRef> {
        Graph::edge_refs(self)
    }
}
