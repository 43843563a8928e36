// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # dagscope
//!
//! A directed-graph library built around a single, callback-driven traversal engine.
//! Every packaged algorithm in this crate is expressed as a set of visitor callbacks
//! attached to that engine plus a small post-processing step, rather than as its
//! own hand-rolled walk.
//!
//! ## Features
//!
//! - **Graph store** - [`graph::Graph`] with typed [`graph::NodeId`] / [`graph::EdgeId`]
//!   identities, per-vertex and per-edge payloads, directed and undirected modes and a
//!   configurable parallel-edge, self-loop and removal policy
//! - **Traversal engine** - depth-first and breadth-first walks parameterized by
//!   [`graph::algorithms::DfsVisitor`] / [`graph::algorithms::BfsVisitor`] hooks
//! - **Topological sort** with cycle detection
//! - **Strongly connected components** (Tarjan-style, layered on DFS callbacks)
//! - **Condensation graphs** collapsing each component to a single vertex
//! - **Random spanning trees** via Wilson-Propp cycle-popping with pluggable
//!   Markov edge chains
//! - **Eulerian trails** with degree-balancing augmentation
//! - **Dependency scheduling** on top of the topological sort
//!
//! ## Quick Start
//!
//! ```rust
//! use dagscope::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, ())?;
//! graph.add_edge(b, c, ())?;
//!
//! // Finish order: every vertex appears after everything it points to
//! let order = topological_sort(&graph)?;
//! assert_eq!(order, vec![c, b, a]);
//! # Ok::<(), dagscope::Error>(())
//! ```
//!
//! ## Custom Traversals
//!
//! ```rust
//! use dagscope::prelude::*;
//!
//! struct EdgeCounter(usize);
//!
//! impl DfsVisitor for EdgeCounter {
//!     fn tree_edge(&mut self, _edge: EdgeRef) -> dagscope::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut graph: Graph = Graph::new();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! graph.add_edge(a, b, ())?;
//!
//! let mut counter = EdgeCounter(0);
//! depth_first_search(&graph, &mut counter, None)?;
//! assert_eq!(counter.0, 1);
//! # Ok::<(), dagscope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Visitor callbacks
//! return the same `Result`, and an error raised by a callback unwinds the traversal
//! immediately; this is also the only way to cancel a walk early.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade (`debug!` summaries, `trace!` detail)
//! and never installs a logger itself.

pub(crate) mod error;

pub mod graph;
pub mod prelude;
pub mod schedule;

pub use error::{Error, Result};
