use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a caller-visible failure of a graph operation or algorithm. None of
/// them are used for normal control flow, and none are retried internally.
///
/// # Error Categories
///
/// ## Graph Store Errors
/// - [`Error::UnknownVertex`] - Referenced vertex is not in the graph
/// - [`Error::UnknownEdge`] - Referenced edge is not in the graph
/// - [`Error::VertexHasIncidentEdges`] - Vertex removal rejected by the removal policy
/// - [`Error::ParallelEdge`] - Parallel edge on a graph that disallows them
/// - [`Error::SelfLoop`] - Self-loop on a graph that disallows them
///
/// ## Algorithm Errors
/// - [`Error::CyclicGraph`] - Topological sort found a back edge
/// - [`Error::ImpossibleEulerianGraph`] - Odd number of odd-degree vertices
/// - [`Error::EmptyGraph`] - Algorithm needs at least one vertex
/// - [`Error::Unreachable`] - A required path does not exist
/// - [`Error::NotOnCircuit`] - Eulerian anchor vertex has no edge on the circuit
/// - [`Error::AttemptsExhausted`] - Unrooted spanning tree hit its attempt cap
///
/// ## Caller Errors
/// - [`Error::Aborted`] - Raised by a visitor callback to cancel a traversal
/// - [`Error::Scheduling`] - Dependency scheduler could not produce an order
///
/// # Examples
///
/// ```rust
/// use dagscope::{graph::Graph, graph::algorithms::topological_sort, Error};
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
///
/// match topological_sort(&graph) {
///     Err(Error::CyclicGraph { from, to, .. }) => println!("cycle through {from} -> {to}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(order) => println!("order: {order:?}"),
/// }
/// # Ok::<(), Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced vertex does not exist in the graph.
    ///
    /// Either it was never added, or it has since been removed. Vertex identities are never
    /// reused, so a stale `NodeId` always reports this error.
    #[error("vertex {0} does not exist in the graph")]
    UnknownVertex(NodeId),

    /// The referenced edge does not exist in the graph.
    #[error("edge {0} does not exist in the graph")]
    UnknownEdge(EdgeId),

    /// A vertex cannot be removed while edges are still attached to it.
    ///
    /// Only returned under [`RemovalPolicy::Reject`](crate::graph::RemovalPolicy::Reject).
    #[error("vertex {node} still has {count} incident edges")]
    VertexHasIncidentEdges {
        /// The vertex whose removal was rejected
        node: NodeId,
        /// Number of edges still attached to it
        count: usize,
    },

    /// The graph disallows parallel edges and an edge between this pair already exists.
    #[error("an edge {from} -> {to} already exists and parallel edges are disallowed")]
    ParallelEdge {
        /// Source vertex of the rejected edge
        from: NodeId,
        /// Target vertex of the rejected edge
        to: NodeId,
    },

    /// The graph disallows self-loops.
    #[error("self-loop on {0} is disallowed")]
    SelfLoop(NodeId),

    /// A topological sort encountered a back edge.
    ///
    /// The back edge proves the graph is not acyclic, so no ordering is returned at all.
    #[error("graph is cyclic: back edge {edge} ({from} -> {to})")]
    CyclicGraph {
        /// The back edge that closed the cycle
        edge: EdgeId,
        /// Source of the back edge
        from: NodeId,
        /// Target of the back edge (a vertex still on the DFS stack)
        to: NodeId,
    },

    /// The graph has an odd number of odd-degree vertices and cannot be covered by trails.
    #[error("graph has an odd number ({0}) of odd-degree vertices")]
    ImpossibleEulerianGraph(usize),

    /// The algorithm requires a start vertex but the graph has none.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// No path exists between two vertices where one is required.
    #[error("vertex {to} is not reachable from {from}")]
    Unreachable {
        /// Where the path had to start
        from: NodeId,
        /// Where the path had to end
        to: NodeId,
    },

    /// The eulerian anchor vertex has no edge on the circuit.
    #[error("vertex {0} has no edge on the eulerian circuit")]
    NotOnCircuit(NodeId),

    /// The unrooted cycle-popping loop exceeded its caller-imposed attempt cap.
    #[error("no spanning tree found within {0} attempts")]
    AttemptsExhausted(usize),

    /// A visitor callback aborted the traversal.
    #[error("traversal aborted: {0}")]
    Aborted(String),

    /// The dependency scheduler could not produce an execution order.
    #[error("cannot schedule: {0}")]
    Scheduling(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
