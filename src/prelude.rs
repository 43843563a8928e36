//! # dagscope Prelude
//!
//! The most commonly used types, traits and algorithms in one import.
//!
//! ```rust
//! use dagscope::prelude::*;
//!
//! let mut graph: Graph = Graph::new();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! graph.add_edge(a, b, ())?;
//!
//! let components = strongly_connected_components(&graph);
//! assert_eq!(components.count(), 2);
//! # Ok::<(), dagscope::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dagscope operations
pub use crate::Error;

/// The result type used throughout dagscope
pub use crate::Result;

// ================================================================================================
// Graph Store
// ================================================================================================

/// The mutable graph store and its keyed wrapper
pub use crate::graph::{Graph, IndexedGraph};

/// Vertex and edge identities
pub use crate::graph::{EdgeId, EdgeRef, NodeId};

/// Graph configuration
pub use crate::graph::{GraphConfig, GraphFlags, RemovalPolicy, SpanningTreeConfig};

/// Capability traits the algorithms are generic over
pub use crate::graph::{BidirectionalGraph, EdgeListGraph, GraphBase, IncidenceGraph, Reversed};

// ================================================================================================
// Traversal Engine
// ================================================================================================

/// Callback-driven walks and their hook traits
pub use crate::graph::algorithms::{
    breadth_first_search, depth_first_search, BfsEvent, BfsVisitor, Color, DfsEvent, DfsVisitor,
    OnBfsEvent, OnDfsEvent,
};

/// Packaged observers and convenience walks
pub use crate::graph::algorithms::{
    postorder, reachable, reverse_postorder, FinishOrder, PredecessorRecorder, TimeStamper,
};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Ordering, cycles and components
pub use crate::graph::algorithms::{
    condensation, condensation_graph, find_cycle, has_cycle, strongly_connected_components,
    topological_sort, Components,
};

/// Random spanning trees
pub use crate::graph::algorithms::{
    random_spanning_tree, random_spanning_tree_with_config, EdgeChain, SpanningTree,
    UniformEdgeChain, VanishingEdgeChain, WeightedEdgeChain,
};

/// Eulerian trails
pub use crate::graph::algorithms::{
    eulerian_circuit, eulerian_path_count, eulerian_trails, odd_vertices,
};

// ================================================================================================
// Scheduling
// ================================================================================================

/// Dependency scheduler built on the topological sort
pub use crate::schedule::DependencyScheduler;
