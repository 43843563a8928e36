//! Key-addressed graph wrapper.
//!
//! [`IndexedGraph`] stores domain keys as vertex payloads of a directed [`Graph`] and
//! keeps a reverse map from key to [`NodeId`], so callers can build a graph from their
//! own identifiers, run the algorithms on [`IndexedGraph::inner`], and map the results
//! back.
//!
//! # Examples
//!
//! ```rust
//! use dagscope::graph::IndexedGraph;
//!
//! let mut graph: IndexedGraph<&str> = IndexedGraph::new();
//! graph.add_edge("A", "B", ())?;
//! graph.add_edge("B", "C", ())?;
//! graph.add_edge("C", "A", ())?;
//!
//! assert_eq!(graph.find_cycle_from(&"A"), Some(vec!["A", "B", "C", "A"]));
//! # Ok::<(), dagscope::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    graph::{
        algorithms::{self, Components},
        Graph, GraphConfig, NodeId,
    },
    Result,
};

/// A directed graph whose vertices are addressed by keys of type `K`.
///
/// # Type Parameters
///
/// * `K` - The domain key type for vertices
/// * `E` - The edge payload type
#[derive(Debug, Clone)]
pub struct IndexedGraph<K, E = ()>
where
    K: Hash + Eq + Clone,
{
    graph: Graph<K, E>,
    key_to_node: HashMap<K, NodeId>,
}

impl<K, E> Default for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty indexed graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            key_to_node: HashMap::new(),
        }
    }

    /// Creates a new indexed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(GraphConfig::directed(), node_capacity, edge_capacity),
            key_to_node: HashMap::with_capacity(node_capacity),
        }
    }

    /// Adds a vertex for `key`, or returns the existing one.
    ///
    /// Calling it repeatedly with the same key always returns the same `NodeId`.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&node_id) = self.key_to_node.get(&key) {
            return node_id;
        }

        let node_id = self.graph.add_node(key.clone());
        self.key_to_node.insert(key, node_id);
        node_id
    }

    /// Adds a directed edge between two keys, creating missing vertices.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a new edge was added
    /// * `Ok(false)` if an edge `from -> to` already existed
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the edge.
    pub fn add_edge(&mut self, from: K, to: K, data: E) -> Result<bool> {
        let from_node = self.add_node(from);
        let to_node = self.add_node(to);

        if self.graph.find_edge(from_node, to_node).is_some() {
            return Ok(false);
        }

        self.graph.add_edge(from_node, to_node, data)?;
        Ok(true)
    }

    /// Returns the `NodeId` for a given key, if it exists.
    #[must_use]
    pub fn get_node_id(&self, key: &K) -> Option<NodeId> {
        self.key_to_node.get(key).copied()
    }

    /// Returns the key for a given `NodeId`, if it exists.
    #[must_use]
    pub fn get_key(&self, node_id: NodeId) -> Option<&K> {
        self.graph.node(node_id)
    }

    /// Returns `true` if `key` has a vertex.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.key_to_node.contains_key(key)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// The underlying graph, for running algorithms on it directly.
    #[must_use]
    pub fn inner(&self) -> &Graph<K, E> {
        &self.graph
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.graph.nodes().map(|(_, key)| key)
    }

    /// Keys of the direct successors of `key`.
    pub fn successors<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a K> + 'a {
        let node = self.get_node_id(key);
        node.into_iter()
            .flat_map(move |node| self.graph.successors(node))
            .filter_map(move |succ| self.graph.node(succ))
    }

    /// Maps vertex identities back to keys, skipping unknown ones.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<K> {
        nodes
            .iter()
            .filter_map(|&node_id| self.graph.node(node_id).cloned())
            .collect()
    }

    /// Maps components back to key groups, indexed by component id.
    #[must_use]
    pub fn map_components_to_keys(&self, components: &Components) -> Vec<Vec<K>> {
        components
            .members()
            .iter()
            .map(|members| self.map_nodes_to_keys(members))
            .collect()
    }
}

// Algorithm convenience methods
impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Finds a cycle among the vertices reachable from `start`.
    #[must_use]
    pub fn find_cycle_from(&self, start: &K) -> Option<Vec<K>> {
        let start_node = self.key_to_node.get(start)?;
        let cycle_nodes = algorithms::find_cycle_from(&self.graph, *start_node)?;
        Some(self.map_nodes_to_keys(&cycle_nodes))
    }

    /// Checks if a cycle is reachable from `start`.
    #[must_use]
    pub fn has_cycle_from(&self, start: &K) -> bool {
        self.find_cycle_from(start).is_some()
    }

    /// Finds any cycle in the graph.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<K>> {
        let cycle_nodes = algorithms::find_cycle(&self.graph)?;
        Some(self.map_nodes_to_keys(&cycle_nodes))
    }

    /// Returns `true` if the graph contains a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(&self.graph)
    }

    /// Strongly connected components as key groups, in reverse topological order.
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<K>> {
        let components = algorithms::strongly_connected_components(&self.graph);
        self.map_components_to_keys(&components)
    }

    /// Keys in dependencies-first order: for every edge `from -> to`, `to` comes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the graph has a cycle.
    pub fn topological_sort(&self) -> Result<Vec<K>> {
        let order = algorithms::topological_sort(&self.graph)?;
        Ok(self.map_nodes_to_keys(&order))
    }
}
