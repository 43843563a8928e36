//! Graph-level policy configuration.
//!
//! A [`GraphConfig`] is fixed when a [`Graph`](crate::graph::Graph) is created and decides
//! directedness, whether parallel edges and self-loops are accepted, and what
//! [`Graph::remove_node`](crate::graph::Graph::remove_node) does with a vertex that still
//! has edges attached.
//!
//! # Presets
//!
//! - [`GraphConfig::directed`] (also the [`Default`]): directed, parallel edges and self-loops allowed
//! - [`GraphConfig::undirected`]: undirected, parallel edges and self-loops allowed
//! - [`GraphConfig::simple`]: directed, no parallel edges, no self-loops
//!
//! Presets can be refined with the `with_*` / `without_*` builders.
//!
//! [`SpanningTreeConfig`] tunes the unrooted random spanning tree search.

use bitflags::bitflags;

bitflags! {
    /// Structural policy flags of a graph.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GraphFlags: u8 {
        /// Edges have a direction; otherwise each edge is incident to both endpoints
        const DIRECTED = 0x01;
        /// More than one edge may connect the same ordered pair of vertices
        const ALLOW_PARALLEL_EDGES = 0x02;
        /// An edge may start and end on the same vertex
        const ALLOW_SELF_LOOPS = 0x04;
    }
}

impl Default for GraphFlags {
    fn default() -> Self {
        GraphFlags::all()
    }
}

/// What happens when a vertex with incident edges is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemovalPolicy {
    /// Fail with [`Error::VertexHasIncidentEdges`](crate::Error::VertexHasIncidentEdges)
    #[default]
    Reject,
    /// Remove every incident edge first, then the vertex
    ClearEdges,
}

/// Configuration of a [`Graph`](crate::graph::Graph).
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, GraphConfig, RemovalPolicy};
///
/// let config = GraphConfig::undirected().with_removal_policy(RemovalPolicy::ClearEdges);
/// let graph: Graph = Graph::with_config(config);
///
/// assert!(!graph.is_directed());
/// assert!(graph.allows_parallel_edges());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphConfig {
    /// Structural policy flags
    pub flags: GraphFlags,
    /// Behavior of `remove_node` on vertices with incident edges
    pub removal_policy: RemovalPolicy,
}

impl GraphConfig {
    /// Directed graph accepting parallel edges and self-loops.
    #[must_use]
    pub fn directed() -> Self {
        Self::default()
    }

    /// Undirected graph accepting parallel edges and self-loops.
    #[must_use]
    pub fn undirected() -> Self {
        Self {
            flags: GraphFlags::ALLOW_PARALLEL_EDGES | GraphFlags::ALLOW_SELF_LOOPS,
            removal_policy: RemovalPolicy::Reject,
        }
    }

    /// Directed graph with neither parallel edges nor self-loops.
    #[must_use]
    pub fn simple() -> Self {
        Self {
            flags: GraphFlags::DIRECTED,
            removal_policy: RemovalPolicy::Reject,
        }
    }

    /// Replaces the removal policy.
    #[must_use]
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Rejects a second edge between the same pair of vertices.
    #[must_use]
    pub fn without_parallel_edges(mut self) -> Self {
        self.flags.remove(GraphFlags::ALLOW_PARALLEL_EDGES);
        self
    }

    /// Rejects edges whose endpoints coincide.
    #[must_use]
    pub fn without_self_loops(mut self) -> Self {
        self.flags.remove(GraphFlags::ALLOW_SELF_LOOPS);
        self
    }

    /// Returns `true` if edges are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.flags.contains(GraphFlags::DIRECTED)
    }

    /// Returns `true` if parallel edges are accepted.
    #[must_use]
    pub fn allows_parallel_edges(&self) -> bool {
        self.flags.contains(GraphFlags::ALLOW_PARALLEL_EDGES)
    }

    /// Returns `true` if self-loops are accepted.
    #[must_use]
    pub fn allows_self_loops(&self) -> bool {
        self.flags.contains(GraphFlags::ALLOW_SELF_LOOPS)
    }
}

/// Configuration of the unrooted random spanning tree search.
///
/// The unrooted cycle-popping loop retries until a single-root tree comes out. It ends
/// with probability 1 but has no deterministic bound; `max_attempts` adds one.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::SpanningTreeConfig;
///
/// let bounded = SpanningTreeConfig::default().with_max_attempts(64);
/// assert_eq!(bounded.max_attempts, Some(64));
/// assert_eq!(SpanningTreeConfig::unbounded().max_attempts, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpanningTreeConfig {
    /// Give up with [`Error::AttemptsExhausted`](crate::Error::AttemptsExhausted) after this
    /// many failed attempts; `None` retries forever
    pub max_attempts: Option<usize>,
}

impl SpanningTreeConfig {
    /// Retries until a tree is found.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Caps the number of attempts.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_config_presets() {
        let directed = GraphConfig::directed();
        assert!(directed.is_directed());
        assert!(directed.allows_parallel_edges());
        assert!(directed.allows_self_loops());
        assert_eq!(directed.removal_policy, RemovalPolicy::Reject);

        let undirected = GraphConfig::undirected();
        assert!(!undirected.is_directed());
        assert!(undirected.allows_parallel_edges());
        assert!(undirected.allows_self_loops());

        let simple = GraphConfig::simple();
        assert!(simple.is_directed());
        assert!(!simple.allows_parallel_edges());
        assert!(!simple.allows_self_loops());
    }

    #[test]
    fn test_default_config() {
        assert_eq!(GraphConfig::default(), GraphConfig::directed());
        assert_eq!(GraphFlags::default(), GraphFlags::all());
    }

    #[test]
    fn test_graph_config_builders() {
        let config = GraphConfig::undirected()
            .without_parallel_edges()
            .without_self_loops()
            .with_removal_policy(RemovalPolicy::ClearEdges);

        assert!(!config.is_directed());
        assert!(!config.allows_parallel_edges());
        assert!(!config.allows_self_loops());
        assert_eq!(config.removal_policy, RemovalPolicy::ClearEdges);
    }
}
