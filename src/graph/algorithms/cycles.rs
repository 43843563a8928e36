//! Cycle detection on top of the depth-first back-edge hook.
//!
//! A directed graph has a cycle iff a depth-first walk reports a back edge. The finder
//! keeps the tree edge of every vertex, so the first back edge `u -> v` can be turned
//! into the cycle `v -> ... -> u -> v` by following tree edges up from `u`.
//!
//! On undirected graphs the edge a vertex was discovered through is skipped when it shows
//! up again from the other end; any other back edge (including a parallel edge or a
//! self-loop) closes a real cycle.

use log::debug;

use crate::graph::{
    algorithms::{depth_first_search, DfsVisitor},
    EdgeRef, IncidenceGraph, NodeId,
};
use crate::Result;

struct CycleFinder {
    directed: bool,
    tree_edge: Vec<Option<EdgeRef>>,
    closing_edge: Option<EdgeRef>,
}

impl CycleFinder {
    fn new(node_bound: usize, directed: bool) -> Self {
        CycleFinder {
            directed,
            tree_edge: vec![None; node_bound],
            closing_edge: None,
        }
    }

    fn into_cycle(self) -> Option<Vec<NodeId>> {
        let closing = self.closing_edge?;

        let mut cycle = vec![closing.source];
        let mut current = closing.source;
        while current != closing.target {
            let edge = self.tree_edge[current.index()]?;
            current = edge.source;
            cycle.push(current);
        }
        cycle.reverse();
        cycle.push(closing.target);
        Some(cycle)
    }
}

impl DfsVisitor for CycleFinder {
    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.tree_edge[edge.target.index()] = Some(edge);
        Ok(())
    }

    fn back_edge(&mut self, edge: EdgeRef) -> Result<()> {
        if self.closing_edge.is_some() {
            return Ok(());
        }
        let reenters_parent = !self.directed
            && self.tree_edge[edge.source.index()].is_some_and(|parent| parent.id == edge.id);
        if !reenters_parent {
            self.closing_edge = Some(edge);
        }
        Ok(())
    }
}

/// Returns `true` if the graph contains a cycle.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::has_cycle};
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// assert!(!has_cycle(&graph));
///
/// graph.add_edge(b, a, ())?;
/// assert!(has_cycle(&graph));
/// # Ok::<(), dagscope::Error>(())
/// ```
#[must_use]
pub fn has_cycle<G: IncidenceGraph>(graph: &G) -> bool {
    find_cycle(graph).is_some()
}

/// Finds a cycle anywhere in the graph.
///
/// The cycle is returned as the vertices along it, starting and ending with the same
/// vertex (`[a, b, c, a]`; a self-loop is `[a, a]`).
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
#[must_use]
pub fn find_cycle<G: IncidenceGraph>(graph: &G) -> Option<Vec<NodeId>> {
    search(graph, None)
}

/// Finds a cycle among the vertices reachable from `start`.
///
/// Returns `None` if there is none or if `start` is not in the graph.
#[must_use]
pub fn find_cycle_from<G: IncidenceGraph>(graph: &G, start: NodeId) -> Option<Vec<NodeId>> {
    search(graph, Some(start))
}

fn search<G: IncidenceGraph>(graph: &G, start: Option<NodeId>) -> Option<Vec<NodeId>> {
    let mut finder = CycleFinder::new(graph.node_bound(), graph.is_directed());
    depth_first_search(graph, &mut finder, start).ok()?;

    let cycle = finder.into_cycle();
    if let Some(cycle) = &cycle {
        debug!("found cycle of length {}", cycle.len() - 1);
    }
    cycle
}
