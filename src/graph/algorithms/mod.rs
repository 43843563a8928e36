//! Graph algorithms built on the traversal engine.
//!
//! Every algorithm here is generic over the capability traits in [`crate::graph`] and,
//! where it walks the graph, does so by attaching a visitor to [`depth_first_search`] or
//! [`breadth_first_search`] rather than running a walk of its own.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`depth_first_search`] / [`breadth_first_search`] - callback-driven walks
//! - [`DfsVisitor`] / [`BfsVisitor`] - the hook traits; [`OnDfsEvent`] / [`OnBfsEvent`]
//!   adapt closures
//! - [`PredecessorRecorder`], [`TimeStamper`], [`FinishOrder`] - packaged observers
//! - [`postorder`], [`reverse_postorder`], [`reachable`] - convenience walks
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check if a graph contains any cycle
//! - [`find_cycle`] / [`find_cycle_from`] - Return one cycle if it exists
//!
//! ## Topological Ordering
//!
//! - [`topological_sort`] - Dependencies-first ordering, fails on cycles
//!
//! ## Strongly Connected Components
//!
//! - [`strongly_connected_components`] - Tarjan's algorithm on the DFS hooks
//! - [`condensation_graph`] / [`condensation`] - Collapse components into a DAG
//!
//! ## Random Spanning Trees
//!
//! - [`random_spanning_tree`] - Wilson / Propp-Wilson cycle popping
//! - [`EdgeChain`] - Pluggable successor selection: [`UniformEdgeChain`],
//!   [`WeightedEdgeChain`], [`VanishingEdgeChain`]
//!
//! ## Eulerian Trails
//!
//! - [`eulerian_trails`] - Cover all edges with edge-disjoint trails
//! - [`eulerian_circuit`] - A single closed walk, if one exists
//! - [`odd_vertices`], [`eulerian_path_count`]
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal, custom analyses |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | SCC | O(V + E) | Mutual reachability, cycle grouping |
//! | Condensation | O(V + E·d) | Reducing a cyclic graph to a DAG |
//! | Random Spanning Tree | expected O(mean hitting time) | Sampling, maze generation |
//! | Eulerian Trails | O(E²) worst case | Route covering, test sequence generation |
//!
//! # Examples
//!
//! ```rust
//! use dagscope::graph::{Graph, algorithms};
//!
//! let mut dag: Graph = Graph::new();
//! let a = dag.add_node(());
//! let b = dag.add_node(());
//! dag.add_edge(a, b, ())?;
//! assert!(!algorithms::has_cycle(&dag));
//!
//! dag.add_edge(b, a, ())?;
//! assert_eq!(algorithms::find_cycle(&dag), Some(vec![a, b, a]));
//! # Ok::<(), dagscope::Error>(())
//! ```

mod condensation;
mod cycles;
mod eulerian;
mod markov;
mod observers;
mod scc;
mod spanning;
mod topological;
mod traversal;

pub use condensation::{condensation, condensation_graph};
pub use cycles::{find_cycle, find_cycle_from, has_cycle};
pub use eulerian::{eulerian_circuit, eulerian_path_count, eulerian_trails, odd_vertices};
pub use markov::{EdgeChain, UniformEdgeChain, VanishingEdgeChain, WeightedEdgeChain};
pub use observers::{FinishOrder, PredecessorRecorder, TimeStamper};
pub use scc::{strongly_connected_components, Components};
pub use spanning::{random_spanning_tree, random_spanning_tree_with_config, SpanningTree};
pub use topological::topological_sort;
pub use traversal::{
    breadth_first_search, depth_first_search, postorder, reachable, reverse_postorder,
    BfsEvent, BfsVisitor, Color, DfsEvent, DfsVisitor, OnBfsEvent, OnDfsEvent,
};
