//! The callback-driven traversal engine.
//!
//! [`depth_first_search`] and [`breadth_first_search`] walk a graph and report every
//! step to a visitor. The visitor traits ([`DfsVisitor`], [`BfsVisitor`]) have one hook
//! per lifecycle point, each with a no-op default, so a visitor only implements the hooks
//! it cares about. Every packaged algorithm in this crate is a visitor plus a small
//! post-processing step.
//!
//! # Hook order
//!
//! | Hook | DFS | BFS |
//! |------|-----|-----|
//! | `initialize_vertex` | once per vertex before the walk | same |
//! | `start_vertex` | each traversal root | same |
//! | `discover_vertex` | first visit, color becomes in-progress | same |
//! | `examine_vertex` | - | vertex leaves the queue |
//! | `examine_edge` | every out-edge | same |
//! | `tree_edge` | target unvisited | same |
//! | `back_edge` | target in-progress | - |
//! | `forward_or_cross_edge` | target finished | - |
//! | `non_tree_edge` | - | target already discovered |
//! | `gray_target` / `black_target` | - | after `non_tree_edge`, by target color |
//! | `finish_vertex` | all out-edges examined | same |
//!
//! Out-edges are followed in insertion order. On an undirected graph every edge is seen
//! from both ends, so the edge a vertex was discovered through is reported again as a
//! back edge (DFS) or gray-target edge (BFS) when its target is expanded.
//!
//! # Cancellation
//!
//! Hooks return [`Result`]. The first error unwinds the walk and is returned to the
//! caller unchanged; [`Error::Aborted`](crate::Error::Aborted) is the conventional way
//! to stop a walk early.
//!
//! # Composition
//!
//! Visitors are implemented for `&mut V` and for pairs `(A, B)`, so several observers can
//! ride on one walk:
//!
//! ```rust
//! use dagscope::graph::{Graph, algorithms::{depth_first_search, FinishOrder, TimeStamper}};
//!
//! let mut graph: Graph = Graph::new();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! graph.add_edge(a, b, ())?;
//!
//! let mut order = FinishOrder::new();
//! let mut times = TimeStamper::new();
//! depth_first_search(&graph, (&mut order, &mut times), None)?;
//!
//! assert_eq!(order.order(), &[b, a]);
//! assert_eq!(times.discover_time(a), Some(0));
//! # Ok::<(), dagscope::Error>(())
//! ```

use std::collections::VecDeque;

use strum::Display;

use crate::{
    graph::{algorithms::FinishOrder, EdgeRef, IncidenceGraph, NodeId},
    Error, Result,
};

/// Per-vertex traversal state, owned by a single traversal invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    /// Not discovered yet
    #[default]
    Unvisited,
    /// Discovered; on the DFS stack or in the BFS queue
    InProgress,
    /// All out-edges examined
    Finished,
}

/// Depth-first lifecycle hooks.
///
/// Every hook defaults to `Ok(())`. Returning an error aborts the traversal.
#[allow(unused_variables)]
pub trait DfsVisitor {
    /// Called once per vertex before the walk starts.
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called for each vertex that becomes the root of a DFS tree.
    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called when a vertex is first reached.
    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called for every out-edge before it is classified.
    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// The edge leads to an undiscovered vertex.
    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a vertex still on the DFS stack.
    fn back_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a vertex that is already finished.
    fn forward_or_cross_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// Called once every out-edge of the vertex has been examined.
    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }
}

/// Breadth-first lifecycle hooks.
///
/// Every hook defaults to `Ok(())`. Returning an error aborts the traversal.
#[allow(unused_variables)]
pub trait BfsVisitor {
    /// Called once per vertex before the walk starts.
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called for each vertex that seeds the queue.
    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called when a vertex is first reached and queued.
    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called when a vertex is taken off the queue for edge scanning.
    fn examine_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }

    /// Called for every out-edge before it is classified.
    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// The edge leads to an undiscovered vertex.
    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a vertex that was already discovered.
    fn non_tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// Follows `non_tree_edge` when the target is still queued.
    fn gray_target(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// Follows `non_tree_edge` when the target is finished.
    fn black_target(&mut self, edge: EdgeRef) -> Result<()> {
        Ok(())
    }

    /// Called once every out-edge of the vertex has been examined.
    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        Ok(())
    }
}

impl<V: DfsVisitor + ?Sized> DfsVisitor for &mut V {
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).initialize_vertex(node)
    }

    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).start_vertex(node)
    }

    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).discover_vertex(node)
    }

    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).examine_edge(edge)
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).tree_edge(edge)
    }

    fn back_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).back_edge(edge)
    }

    fn forward_or_cross_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).forward_or_cross_edge(edge)
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).finish_vertex(node)
    }
}

impl<A: DfsVisitor, B: DfsVisitor> DfsVisitor for (A, B) {
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.initialize_vertex(node)?;
        self.1.initialize_vertex(node)
    }

    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.start_vertex(node)?;
        self.1.start_vertex(node)
    }

    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.discover_vertex(node)?;
        self.1.discover_vertex(node)
    }

    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.examine_edge(edge)?;
        self.1.examine_edge(edge)
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.tree_edge(edge)?;
        self.1.tree_edge(edge)
    }

    fn back_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.back_edge(edge)?;
        self.1.back_edge(edge)
    }

    fn forward_or_cross_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.forward_or_cross_edge(edge)?;
        self.1.forward_or_cross_edge(edge)
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.finish_vertex(node)?;
        self.1.finish_vertex(node)
    }
}

impl<V: BfsVisitor + ?Sized> BfsVisitor for &mut V {
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).initialize_vertex(node)
    }

    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).start_vertex(node)
    }

    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).discover_vertex(node)
    }

    fn examine_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).examine_vertex(node)
    }

    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).examine_edge(edge)
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).tree_edge(edge)
    }

    fn non_tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).non_tree_edge(edge)
    }

    fn gray_target(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).gray_target(edge)
    }

    fn black_target(&mut self, edge: EdgeRef) -> Result<()> {
        (**self).black_target(edge)
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        (**self).finish_vertex(node)
    }
}

impl<A: BfsVisitor, B: BfsVisitor> BfsVisitor for (A, B) {
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.initialize_vertex(node)?;
        self.1.initialize_vertex(node)
    }

    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.start_vertex(node)?;
        self.1.start_vertex(node)
    }

    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.discover_vertex(node)?;
        self.1.discover_vertex(node)
    }

    fn examine_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.examine_vertex(node)?;
        self.1.examine_vertex(node)
    }

    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.examine_edge(edge)?;
        self.1.examine_edge(edge)
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.tree_edge(edge)?;
        self.1.tree_edge(edge)
    }

    fn non_tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.non_tree_edge(edge)?;
        self.1.non_tree_edge(edge)
    }

    fn gray_target(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.gray_target(edge)?;
        self.1.gray_target(edge)
    }

    fn black_target(&mut self, edge: EdgeRef) -> Result<()> {
        self.0.black_target(edge)?;
        self.1.black_target(edge)
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        self.0.finish_vertex(node)?;
        self.1.finish_vertex(node)
    }
}

/// A depth-first lifecycle event, as delivered to [`OnDfsEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// See [`DfsVisitor::initialize_vertex`]
    InitializeVertex(NodeId),
    /// See [`DfsVisitor::start_vertex`]
    StartVertex(NodeId),
    /// See [`DfsVisitor::discover_vertex`]
    DiscoverVertex(NodeId),
    /// See [`DfsVisitor::examine_edge`]
    ExamineEdge(EdgeRef),
    /// See [`DfsVisitor::tree_edge`]
    TreeEdge(EdgeRef),
    /// See [`DfsVisitor::back_edge`]
    BackEdge(EdgeRef),
    /// See [`DfsVisitor::forward_or_cross_edge`]
    ForwardOrCrossEdge(EdgeRef),
    /// See [`DfsVisitor::finish_vertex`]
    FinishVertex(NodeId),
}

/// A breadth-first lifecycle event, as delivered to [`OnBfsEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsEvent {
    /// See [`BfsVisitor::initialize_vertex`]
    InitializeVertex(NodeId),
    /// See [`BfsVisitor::start_vertex`]
    StartVertex(NodeId),
    /// See [`BfsVisitor::discover_vertex`]
    DiscoverVertex(NodeId),
    /// See [`BfsVisitor::examine_vertex`]
    ExamineVertex(NodeId),
    /// See [`BfsVisitor::examine_edge`]
    ExamineEdge(EdgeRef),
    /// See [`BfsVisitor::tree_edge`]
    TreeEdge(EdgeRef),
    /// See [`BfsVisitor::non_tree_edge`]
    NonTreeEdge(EdgeRef),
    /// See [`BfsVisitor::gray_target`]
    GrayTarget(EdgeRef),
    /// See [`BfsVisitor::black_target`]
    BlackTarget(EdgeRef),
    /// See [`BfsVisitor::finish_vertex`]
    FinishVertex(NodeId),
}

/// Adapts a closure over [`DfsEvent`] into a [`DfsVisitor`].
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::{depth_first_search, DfsEvent, OnDfsEvent}};
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
///
/// let mut back_edges = 0;
/// depth_first_search(&graph, OnDfsEvent(|event| {
///     if let DfsEvent::BackEdge(_) = event {
///         back_edges += 1;
///     }
///     Ok(())
/// }), None)?;
/// assert_eq!(back_edges, 1);
/// # Ok::<(), dagscope::Error>(())
/// ```
pub struct OnDfsEvent<F>(pub F);

impl<F: FnMut(DfsEvent) -> Result<()>> DfsVisitor for OnDfsEvent<F> {
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(DfsEvent::InitializeVertex(node))
    }

    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(DfsEvent::StartVertex(node))
    }

    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(DfsEvent::DiscoverVertex(node))
    }

    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(DfsEvent::ExamineEdge(edge))
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(DfsEvent::TreeEdge(edge))
    }

    fn back_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(DfsEvent::BackEdge(edge))
    }

    fn forward_or_cross_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(DfsEvent::ForwardOrCrossEdge(edge))
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(DfsEvent::FinishVertex(node))
    }
}

/// Adapts a closure over [`BfsEvent`] into a [`BfsVisitor`].
pub struct OnBfsEvent<F>(pub F);

impl<F: FnMut(BfsEvent) -> Result<()>> BfsVisitor for OnBfsEvent<F> {
    fn initialize_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(BfsEvent::InitializeVertex(node))
    }

    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(BfsEvent::StartVertex(node))
    }

    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(BfsEvent::DiscoverVertex(node))
    }

    fn examine_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(BfsEvent::ExamineVertex(node))
    }

    fn examine_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(BfsEvent::ExamineEdge(edge))
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(BfsEvent::TreeEdge(edge))
    }

    fn non_tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(BfsEvent::NonTreeEdge(edge))
    }

    fn gray_target(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(BfsEvent::GrayTarget(edge))
    }

    fn black_target(&mut self, edge: EdgeRef) -> Result<()> {
        (self.0)(BfsEvent::BlackTarget(edge))
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        (self.0)(BfsEvent::FinishVertex(node))
    }
}

/// Walks `graph` depth-first, reporting every step to `visitor`.
///
/// With `Some(start)` only the vertices reachable from `start` are visited. With `None`
/// every vertex still unvisited becomes a new root, in ascending identity order.
///
/// The walk keeps an explicit stack of `(vertex, remaining out-edges)` frames instead of
/// recursing, so graph depth is bounded by heap memory only.
///
/// # Arguments
///
/// * `graph` - The graph to walk
/// * `visitor` - Receives the lifecycle hooks; pass `&mut v` to keep ownership
/// * `start` - Optional single root
///
/// # Errors
///
/// - [`Error::UnknownVertex`] if `start` is not in the graph
/// - Any error returned by a visitor hook, unchanged
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn depth_first_search<G, V>(graph: &G, mut visitor: V, start: Option<NodeId>) -> Result<()>
where
    G: IncidenceGraph,
    V: DfsVisitor,
{
    if let Some(root) = start {
        if !graph.contains_node(root) {
            return Err(Error::UnknownVertex(root));
        }
    }

    let mut colors = vec![Color::Unvisited; graph.node_bound()];
    for node in graph.node_ids() {
        visitor.initialize_vertex(node)?;
    }

    match start {
        Some(root) => dfs_visit(graph, &mut visitor, &mut colors, root),
        None => {
            for node in graph.node_ids() {
                if colors[node.index()] == Color::Unvisited {
                    dfs_visit(graph, &mut visitor, &mut colors, node)?;
                }
            }
            Ok(())
        }
    }
}

fn dfs_visit<G, V>(graph: &G, visitor: &mut V, colors: &mut [Color], root: NodeId) -> Result<()>
where
    G: IncidenceGraph,
    V: DfsVisitor,
{
    visitor.start_vertex(root)?;
    colors[root.index()] = Color::InProgress;
    visitor.discover_vertex(root)?;

    let mut stack = vec![(root, graph.out_edges(root))];
    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let next = frame.1.next();

        let Some(edge) = next else {
            colors[node.index()] = Color::Finished;
            stack.pop();
            visitor.finish_vertex(node)?;
            continue;
        };

        visitor.examine_edge(edge)?;
        match colors[edge.target.index()] {
            Color::Unvisited => {
                visitor.tree_edge(edge)?;
                colors[edge.target.index()] = Color::InProgress;
                visitor.discover_vertex(edge.target)?;
                stack.push((edge.target, graph.out_edges(edge.target)));
            }
            Color::InProgress => visitor.back_edge(edge)?,
            Color::Finished => visitor.forward_or_cross_edge(edge)?,
        }
    }

    Ok(())
}

/// Walks `graph` breadth-first, reporting every step to `visitor`.
///
/// With `Some(start)` only the vertices reachable from `start` are visited. With `None`
/// every vertex still unvisited seeds a new wave, in ascending identity order. Vertices
/// are discovered in queue order, which follows out-edge insertion order.
///
/// # Errors
///
/// - [`Error::UnknownVertex`] if `start` is not in the graph
/// - Any error returned by a visitor hook, unchanged
pub fn breadth_first_search<G, V>(graph: &G, mut visitor: V, start: Option<NodeId>) -> Result<()>
where
    G: IncidenceGraph,
    V: BfsVisitor,
{
    if let Some(root) = start {
        if !graph.contains_node(root) {
            return Err(Error::UnknownVertex(root));
        }
    }

    let mut colors = vec![Color::Unvisited; graph.node_bound()];
    for node in graph.node_ids() {
        visitor.initialize_vertex(node)?;
    }

    let roots: Vec<NodeId> = match start {
        Some(root) => vec![root],
        None => graph.node_ids().collect(),
    };

    let mut queue = VecDeque::new();
    for root in roots {
        if colors[root.index()] != Color::Unvisited {
            continue;
        }
        visitor.start_vertex(root)?;
        colors[root.index()] = Color::InProgress;
        visitor.discover_vertex(root)?;
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            visitor.examine_vertex(node)?;
            for edge in graph.out_edges(node) {
                visitor.examine_edge(edge)?;
                match colors[edge.target.index()] {
                    Color::Unvisited => {
                        visitor.tree_edge(edge)?;
                        colors[edge.target.index()] = Color::InProgress;
                        visitor.discover_vertex(edge.target)?;
                        queue.push_back(edge.target);
                    }
                    Color::InProgress => {
                        visitor.non_tree_edge(edge)?;
                        visitor.gray_target(edge)?;
                    }
                    Color::Finished => {
                        visitor.non_tree_edge(edge)?;
                        visitor.black_target(edge)?;
                    }
                }
            }
            colors[node.index()] = Color::Finished;
            visitor.finish_vertex(node)?;
        }
    }

    Ok(())
}

/// Vertices reachable from `start` in depth-first post-order.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `start` is not in the graph.
pub fn postorder<G: IncidenceGraph>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let mut order = FinishOrder::new();
    depth_first_search(graph, &mut order, Some(start))?;
    Ok(order.into_inner())
}

/// Vertices reachable from `start` in reverse depth-first post-order.
///
/// In an acyclic graph every vertex appears before all of its successors, which is the
/// usual iteration order for forward data-flow problems.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `start` is not in the graph.
pub fn reverse_postorder<G: IncidenceGraph>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let mut order = postorder(graph, start)?;
    order.reverse();
    Ok(order)
}

/// Vertices reachable from `start` (including `start`) in breadth-first discovery order.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] if `start` is not in the graph.
pub fn reachable<G: IncidenceGraph>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let mut discovered = Vec::new();
    breadth_first_search(
        graph,
        OnBfsEvent(|event| {
            if let BfsEvent::DiscoverVertex(node) = event {
                discovered.push(node);
            }
            Ok(())
        }),
        Some(start),
    )?;
    Ok(discovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn create_linear_graph() -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::new();
        let nodes: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], ()).unwrap();
        }
        (graph, nodes)
    }

    fn create_diamond_graph() -> (Graph, Vec<NodeId>) {
        //     A
        //    / \
        //   B   C
        //    \ /
        //     D
        let mut graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(b, d, ()).unwrap();
        graph.add_edge(c, d, ()).unwrap();
        (graph, vec![a, b, c, d])
    }

    fn record_dfs(graph: &Graph, start: Option<NodeId>) -> Vec<DfsEvent> {
        let mut events = Vec::new();
        depth_first_search(
            graph,
            OnDfsEvent(|event| {
                events.push(event);
                Ok(())
            }),
            start,
        )
        .unwrap();
        events
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Unvisited.to_string(), "unvisited");
        assert_eq!(Color::InProgress.to_string(), "in_progress");
        assert_eq!(Color::default(), Color::Unvisited);
    }

    #[test]
    fn test_dfs_event_sequence_linear() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let e = graph.add_edge(a, b, ()).unwrap();
        let edge = EdgeRef::new(e, a, b);

        let events = record_dfs(&graph, None);
        assert_eq!(
            events,
            vec![
                DfsEvent::InitializeVertex(a),
                DfsEvent::InitializeVertex(b),
                DfsEvent::StartVertex(a),
                DfsEvent::DiscoverVertex(a),
                DfsEvent::ExamineEdge(edge),
                DfsEvent::TreeEdge(edge),
                DfsEvent::DiscoverVertex(b),
                DfsEvent::FinishVertex(b),
                DfsEvent::FinishVertex(a),
            ]
        );
    }

    #[test]
    fn test_dfs_classifies_edges() {
        let (mut graph, nodes) = create_diamond_graph();
        let back = graph.add_edge(nodes[3], nodes[0], ()).unwrap();

        let events = record_dfs(&graph, Some(nodes[0]));
        let back_edges: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                DfsEvent::BackEdge(edge) => Some(edge.id),
                _ => None,
            })
            .collect();
        let cross_edges: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                DfsEvent::ForwardOrCrossEdge(edge) => Some((edge.source, edge.target)),
                _ => None,
            })
            .collect();

        assert_eq!(back_edges, vec![back]);
        // C -> D is examined after D finished under B
        assert_eq!(cross_edges, vec![(nodes[2], nodes[3])]);
    }

    #[test]
    fn test_dfs_from_start_only_reachable() {
        let (graph, nodes) = create_linear_graph();
        let events = record_dfs(&graph, Some(nodes[2]));
        let discovered: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                DfsEvent::DiscoverVertex(node) => Some(*node),
                _ => None,
            })
            .collect();
        assert_eq!(discovered, vec![nodes[2], nodes[3]]);
    }

    #[test]
    fn test_dfs_whole_graph_restarts_in_vertex_order() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(b, a, ()).unwrap();

        let roots: Vec<_> = record_dfs(&graph, None)
            .into_iter()
            .filter_map(|event| match event {
                DfsEvent::StartVertex(node) => Some(node),
                _ => None,
            })
            .collect();
        assert_eq!(roots, vec![a, b, c]);
    }

    #[test]
    fn test_dfs_unknown_start() {
        let (graph, _) = create_linear_graph();
        let mut order = FinishOrder::new();
        assert_eq!(
            depth_first_search(&graph, &mut order, Some(NodeId::new(99))),
            Err(Error::UnknownVertex(NodeId::new(99)))
        );
    }

    #[test]
    fn test_dfs_abort_unwinds() {
        let (graph, nodes) = create_linear_graph();
        let mut finished = Vec::new();
        let result = depth_first_search(
            &graph,
            OnDfsEvent(|event| match event {
                DfsEvent::DiscoverVertex(node) if node == nodes[2] => {
                    Err(Error::Aborted("stop at third vertex".into()))
                }
                DfsEvent::FinishVertex(node) => {
                    finished.push(node);
                    Ok(())
                }
                _ => Ok(()),
            }),
            None,
        );

        assert_eq!(result, Err(Error::Aborted("stop at third vertex".into())));
        assert!(finished.is_empty());
    }

    #[test]
    fn test_dfs_deep_graph_does_not_overflow() {
        let mut graph: Graph = Graph::new();
        let mut prev = graph.add_node(());
        let first = prev;
        for _ in 0..200_000 {
            let next = graph.add_node(());
            graph.add_edge(prev, next, ()).unwrap();
            prev = next;
        }

        let order = postorder(&graph, first).unwrap();
        assert_eq!(order.len(), 200_001);
        assert_eq!(order[0], prev);
        assert_eq!(order[200_000], first);
    }

    #[test]
    fn test_bfs_event_classification() {
        let (graph, nodes) = create_diamond_graph();
        let mut events = Vec::new();
        breadth_first_search(
            &graph,
            OnBfsEvent(|event| {
                events.push(event);
                Ok(())
            }),
            Some(nodes[0]),
        )
        .unwrap();

        let examined: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                BfsEvent::ExamineVertex(node) => Some(*node),
                _ => None,
            })
            .collect();
        assert_eq!(examined, nodes);

        // C -> D finds D still queued
        let gray: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                BfsEvent::GrayTarget(edge) => Some((edge.source, edge.target)),
                _ => None,
            })
            .collect();
        assert_eq!(gray, vec![(nodes[2], nodes[3])]);
    }

    #[test]
    fn test_bfs_black_target() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, a, ()).unwrap();

        let mut black = Vec::new();
        breadth_first_search(
            &graph,
            OnBfsEvent(|event| {
                if let BfsEvent::BlackTarget(edge) = event {
                    black.push((edge.source, edge.target));
                }
                Ok(())
            }),
            None,
        )
        .unwrap();
        assert_eq!(black, vec![(b, a)]);
    }

    #[test]
    fn test_postorder_and_reverse_postorder() {
        let (graph, nodes) = create_diamond_graph();
        let (a, b, c, d) = (nodes[0], nodes[1], nodes[2], nodes[3]);

        assert_eq!(postorder(&graph, a).unwrap(), vec![d, b, c, a]);
        assert_eq!(reverse_postorder(&graph, a).unwrap(), vec![a, c, b, d]);
    }

    #[test]
    fn test_reachable() {
        let (graph, nodes) = create_linear_graph();
        assert_eq!(reachable(&graph, nodes[1]).unwrap(), nodes[1..].to_vec());
        assert_eq!(reachable(&graph, nodes[3]).unwrap(), vec![nodes[3]]);
    }

    #[test]
    fn test_undirected_dfs_sees_tree_edge_from_both_ends() {
        let mut graph: Graph = Graph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let e = graph.add_edge(a, b, ()).unwrap();

        let events = record_dfs(&graph, Some(a));
        assert!(events.contains(&DfsEvent::TreeEdge(EdgeRef::new(e, a, b))));
        assert!(events.contains(&DfsEvent::BackEdge(EdgeRef::new(e, b, a))));
    }
}
