//! Reusable observers for the traversal engine.
//!
//! Each observer implements both [`DfsVisitor`] and [`BfsVisitor`] and records one kind
//! of information about a walk. Attach several at once with a tuple:
//! `depth_first_search(&graph, (&mut preds, &mut times), None)`.

use std::collections::{HashMap, HashSet};

use crate::{
    graph::{
        algorithms::{BfsVisitor, DfsVisitor},
        EdgeRef, NodeId,
    },
    Result,
};

/// Records the tree edge through which each vertex was discovered.
///
/// After a breadth-first walk from `s`, [`path_to`](Self::path_to) yields a shortest
/// (fewest edges) path from `s`.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::{breadth_first_search, PredecessorRecorder}};
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let mut preds = PredecessorRecorder::new();
/// breadth_first_search(&graph, &mut preds, Some(a))?;
///
/// let path = preds.path_to(c).unwrap();
/// assert_eq!(path.len(), 1);
/// assert_eq!(path[0].source, a);
/// # Ok::<(), dagscope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PredecessorRecorder {
    edges: HashMap<NodeId, EdgeRef>,
    roots: HashSet<NodeId>,
}

impl PredecessorRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree edge that discovered `node`; `None` for roots and unreached vertices.
    #[must_use]
    pub fn edge_to(&self, node: NodeId) -> Option<EdgeRef> {
        self.edges.get(&node).copied()
    }

    /// The vertex `node` was discovered from.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.edge_to(node).map(|edge| edge.source)
    }

    /// Returns `true` if the walk reached `node`.
    #[must_use]
    pub fn reached(&self, node: NodeId) -> bool {
        self.roots.contains(&node) || self.edges.contains_key(&node)
    }

    /// Tree edges from the root of `node`'s tree down to `node`.
    ///
    /// Returns an empty path for a root and `None` if the walk never reached `node`.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<EdgeRef>> {
        if !self.reached(node) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = node;
        while let Some(edge) = self.edges.get(&current) {
            path.push(*edge);
            current = edge.source;
        }
        path.reverse();
        Some(path)
    }

    fn record_root(&mut self, node: NodeId) {
        self.roots.insert(node);
    }

    fn record_tree_edge(&mut self, edge: EdgeRef) {
        self.edges.insert(edge.target, edge);
    }
}

impl DfsVisitor for PredecessorRecorder {
    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        self.record_root(node);
        Ok(())
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.record_tree_edge(edge);
        Ok(())
    }
}

impl BfsVisitor for PredecessorRecorder {
    fn start_vertex(&mut self, node: NodeId) -> Result<()> {
        self.record_root(node);
        Ok(())
    }

    fn tree_edge(&mut self, edge: EdgeRef) -> Result<()> {
        self.record_tree_edge(edge);
        Ok(())
    }
}

/// Records discovery and finish times from one shared counter.
///
/// For a depth-first walk the intervals `[discover, finish]` of two vertices are either
/// nested or disjoint (the parenthesis theorem).
#[derive(Debug, Clone, Default)]
pub struct TimeStamper {
    clock: usize,
    discovered: HashMap<NodeId, usize>,
    finished: HashMap<NodeId, usize>,
}

impl TimeStamper {
    /// Creates a stamper whose clock starts at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When `node` was discovered.
    #[must_use]
    pub fn discover_time(&self, node: NodeId) -> Option<usize> {
        self.discovered.get(&node).copied()
    }

    /// When `node` was finished.
    #[must_use]
    pub fn finish_time(&self, node: NodeId) -> Option<usize> {
        self.finished.get(&node).copied()
    }

    fn tick(&mut self) -> usize {
        let now = self.clock;
        self.clock += 1;
        now
    }
}

impl DfsVisitor for TimeStamper {
    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        let now = self.tick();
        self.discovered.insert(node, now);
        Ok(())
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        let now = self.tick();
        self.finished.insert(node, now);
        Ok(())
    }
}

impl BfsVisitor for TimeStamper {
    fn discover_vertex(&mut self, node: NodeId) -> Result<()> {
        let now = self.tick();
        self.discovered.insert(node, now);
        Ok(())
    }

    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        let now = self.tick();
        self.finished.insert(node, now);
        Ok(())
    }
}

/// Records vertices in the order they finish.
#[derive(Debug, Clone, Default)]
pub struct FinishOrder {
    order: Vec<NodeId>,
}

impl FinishOrder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished vertices so far, oldest first.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Consumes the recorder and returns the finish order.
    #[must_use]
    pub fn into_inner(self) -> Vec<NodeId> {
        self.order
    }
}

impl DfsVisitor for FinishOrder {
    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        self.order.push(node);
        Ok(())
    }
}

impl BfsVisitor for FinishOrder {
    fn finish_vertex(&mut self, node: NodeId) -> Result<()> {
        self.order.push(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        algorithms::{breadth_first_search, depth_first_search},
        Graph,
    };

    fn create_branching_graph() -> (Graph, Vec<NodeId>) {
        // A -> B -> D
        // A -> C
        // E (isolated)
        let mut graph = Graph::new();
        let nodes: Vec<NodeId> = (0..5).map(|_| graph.add_node(())).collect();
        graph.add_edge(nodes[0], nodes[1], ()).unwrap();
        graph.add_edge(nodes[0], nodes[2], ()).unwrap();
        graph.add_edge(nodes[1], nodes[3], ()).unwrap();
        (graph, nodes)
    }

    #[test]
    fn test_predecessor_recorder_paths() {
        let (graph, nodes) = create_branching_graph();
        let mut preds = PredecessorRecorder::new();
        depth_first_search(&graph, &mut preds, Some(nodes[0])).unwrap();

        assert_eq!(preds.predecessor(nodes[3]), Some(nodes[1]));
        assert_eq!(preds.predecessor(nodes[0]), None);
        assert_eq!(preds.path_to(nodes[0]), Some(vec![]));
        assert_eq!(preds.path_to(nodes[4]), None);
        assert!(!preds.reached(nodes[4]));

        let path = preds.path_to(nodes[3]).unwrap();
        let hops: Vec<_> = path.iter().map(|edge| (edge.source, edge.target)).collect();
        assert_eq!(hops, vec![(nodes[0], nodes[1]), (nodes[1], nodes[3])]);
    }

    #[test]
    fn test_predecessor_recorder_bfs_is_shortest() {
        let mut graph: Graph = Graph::new();
        let nodes: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(nodes[0], nodes[1], ()).unwrap();
        graph.add_edge(nodes[1], nodes[2], ()).unwrap();
        graph.add_edge(nodes[2], nodes[3], ()).unwrap();
        graph.add_edge(nodes[0], nodes[3], ()).unwrap();

        let mut preds = PredecessorRecorder::new();
        breadth_first_search(&graph, &mut preds, Some(nodes[0])).unwrap();
        assert_eq!(preds.path_to(nodes[3]).map(|path| path.len()), Some(1));
    }

    #[test]
    fn test_time_stamper_parenthesis() {
        let (graph, nodes) = create_branching_graph();
        let mut times = TimeStamper::new();
        depth_first_search(&graph, &mut times, None).unwrap();

        let interval = |node: NodeId| {
            (
                times.discover_time(node).unwrap(),
                times.finish_time(node).unwrap(),
            )
        };
        let (a_in, a_out) = interval(nodes[0]);
        let (b_in, b_out) = interval(nodes[1]);
        let (d_in, d_out) = interval(nodes[3]);
        let (e_in, _) = interval(nodes[4]);

        assert!(a_in < b_in && b_out < a_out);
        assert!(b_in < d_in && d_out < b_out);
        assert!(e_in > a_out);
    }

    #[test]
    fn test_observers_compose() {
        let (graph, nodes) = create_branching_graph();
        let mut order = FinishOrder::new();
        let mut preds = PredecessorRecorder::new();
        depth_first_search(&graph, (&mut order, &mut preds), Some(nodes[0])).unwrap();

        assert_eq!(order.order(), &[nodes[3], nodes[1], nodes[2], nodes[0]]);
        assert_eq!(preds.predecessor(nodes[2]), Some(nodes[0]));
    }
}
