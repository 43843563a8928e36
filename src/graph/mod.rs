//! Graph store, identities and capability traits.
//!
//! # Architecture
//!
//! - [`Graph`] - the mutable store, generic over vertex and edge payloads
//! - [`NodeId`] / [`EdgeId`] - stable, never reused identities; [`EdgeRef`] is an edge
//!   oriented the way a walk crosses it
//! - [`GraphBase`], [`IncidenceGraph`], [`BidirectionalGraph`], [`EdgeListGraph`] - the
//!   capabilities algorithms are written against
//! - [`Reversed`] - a borrowed view with every edge flipped
//! - [`IndexedGraph`] - a directed graph addressed by domain keys instead of identities
//! - [`algorithms`] - traversal engine and the algorithms built on it
//!
//! # Examples
//!
//! ```rust
//! use dagscope::graph::{Graph, GraphConfig, RemovalPolicy};
//!
//! let config = GraphConfig::simple().with_removal_policy(RemovalPolicy::ClearEdges);
//! let mut graph: Graph<&str> = Graph::with_config(config);
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! graph.add_edge(a, b, ())?;
//!
//! // Parallel edges are rejected by the simple preset
//! assert!(graph.add_edge(a, b, ()).is_err());
//!
//! // ClearEdges drops incident edges before removing the vertex
//! assert_eq!(graph.remove_node(a)?, "a");
//! assert_eq!(graph.edge_count(), 0);
//! # Ok::<(), dagscope::Error>(())
//! ```

pub mod algorithms;
mod config;
mod edge;
mod indexed;
mod node;
mod reversed;
mod store;
mod traits;

pub use config::{GraphConfig, GraphFlags, RemovalPolicy, SpanningTreeConfig};
pub use edge::{EdgeId, EdgeRef};
pub use indexed::IndexedGraph;
pub use node::NodeId;
pub use reversed::Reversed;
pub use store::Graph;
pub use traits::{BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph};
