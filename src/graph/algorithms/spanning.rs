//! Random spanning trees by cycle popping (Wilson / Propp-Wilson).
//!
//! Every vertex outside the tree repeatedly asks an [`EdgeChain`] for a successor edge and
//! follows it until the walk hits the tree. Overwriting the successor of a vertex the walk
//! already passed through erases the loop it just closed, so when the walk finally lands
//! on the tree, the recorded successors from the start vertex form a simple path that is
//! added to the tree in one go.
//!
//! The resulting tree is an in-arborescence: every tree edge points from a vertex toward
//! the root. With a uniform chain on an undirected graph the tree is uniformly
//! distributed among all spanning trees.
//!
//! # Modes
//!
//! - **Rooted**: the caller names the root. Every vertex must be able to reach it,
//!   otherwise the walk could never end; that is checked up front.
//! - **Unrooted**: each step of a walk turns the current vertex into a root with
//!   probability `eps`, and vertices without out-edges always become roots. An attempt
//!   that produces more than one root is discarded and retried with `eps` halved. The
//!   loop ends with probability 1; [`SpanningTreeConfig::max_attempts`] adds a hard cap.

use log::{debug, trace};
use rand::Rng;

use crate::{
    graph::{
        algorithms::{reachable, strongly_connected_components, EdgeChain},
        BidirectionalGraph, EdgeRef, NodeId, Reversed, SpanningTreeConfig,
    },
    Error, Result,
};

/// One spanning tree, as a map from each vertex to the edge toward its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    roots: Vec<NodeId>,
    successor: Vec<Option<EdgeRef>>,
    edges: usize,
}

impl SpanningTree {
    /// The root of the tree.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    /// All roots. A successful search always produces exactly one.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns `true` if `node` is a root.
    #[must_use]
    pub fn is_root(&self, node: NodeId) -> bool {
        self.roots.contains(&node)
    }

    /// The tree edge leaving `node` toward the root; `None` for the root.
    #[must_use]
    pub fn successor(&self, node: NodeId) -> Option<EdgeRef> {
        self.successor.get(node.index()).copied().flatten()
    }

    /// The parent of `node`; `None` for the root.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.successor(node).map(|edge| edge.target)
    }

    /// All tree edges in ascending order of their source vertex.
    pub fn tree_edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.successor.iter().filter_map(|edge| *edge)
    }

    /// Number of tree edges, `|V| - 1` for a single-root tree.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

/// Draws a random spanning tree with the default (unbounded) configuration.
///
/// # Arguments
///
/// * `graph` - The graph to span
/// * `chain` - Edge selection strategy; pass `&mut chain` to keep a stateful chain
/// * `rng` - Randomness source; a seeded generator makes the result reproducible
/// * `root` - `Some(r)` for the rooted mode, `None` for the unrooted mode
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no vertices
/// - [`Error::UnknownVertex`] if `root` is not in the graph
/// - [`Error::Unreachable`] if some vertex cannot reach `root` (rooted), or if no vertex
///   is reachable from every other vertex (unrooted)
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::{random_spanning_tree, UniformEdgeChain}};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut graph: Graph = Graph::undirected();
/// let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
/// for i in 0..4 {
///     graph.add_edge(nodes[i], nodes[(i + 1) % 4], ())?;
/// }
///
/// let mut rng = StdRng::seed_from_u64(2024);
/// let tree = random_spanning_tree(&graph, UniformEdgeChain, &mut rng, Some(nodes[0]))?;
///
/// assert_eq!(tree.root(), Some(nodes[0]));
/// assert_eq!(tree.edge_count(), 3);
/// # Ok::<(), dagscope::Error>(())
/// ```
pub fn random_spanning_tree<G, C, R>(
    graph: &G,
    chain: C,
    rng: &mut R,
    root: Option<NodeId>,
) -> Result<SpanningTree>
where
    G: BidirectionalGraph,
    C: EdgeChain,
    R: Rng + ?Sized,
{
    random_spanning_tree_with_config(graph, chain, rng, root, &SpanningTreeConfig::default())
}

/// Draws a random spanning tree.
///
/// Same as [`random_spanning_tree`], with `config` applied to the unrooted mode.
///
/// # Errors
///
/// Everything [`random_spanning_tree`] returns, plus [`Error::AttemptsExhausted`] when
/// the unrooted mode fails `config.max_attempts` times in a row.
pub fn random_spanning_tree_with_config<G, C, R>(
    graph: &G,
    mut chain: C,
    rng: &mut R,
    root: Option<NodeId>,
    config: &SpanningTreeConfig,
) -> Result<SpanningTree>
where
    G: BidirectionalGraph,
    C: EdgeChain,
    R: Rng + ?Sized,
{
    if graph.node_count() == 0 {
        return Err(Error::EmptyGraph);
    }

    match root {
        Some(root) => rooted(graph, &mut chain, rng, root),
        None => unrooted(graph, &mut chain, rng, config),
    }
}

fn rooted<G, C, R>(graph: &G, chain: &mut C, rng: &mut R, root: NodeId) -> Result<SpanningTree>
where
    G: BidirectionalGraph,
    C: EdgeChain,
    R: Rng + ?Sized,
{
    if !graph.contains_node(root) {
        return Err(Error::UnknownVertex(root));
    }

    let reaching = reachable(&Reversed(graph), root)?;
    if reaching.len() < graph.node_count() {
        let mut reaches_root = vec![false; graph.node_bound()];
        for node in &reaching {
            reaches_root[node.index()] = true;
        }
        if let Some(stranded) = graph.node_ids().find(|node| !reaches_root[node.index()]) {
            return Err(Error::Unreachable {
                from: stranded,
                to: root,
            });
        }
    }

    let bound = graph.node_bound();
    let mut in_tree = vec![false; bound];
    let mut successor: Vec<Option<EdgeRef>> = vec![None; bound];
    in_tree[root.index()] = true;

    for start in graph.node_ids() {
        let mut current = start;
        while !in_tree[current.index()] {
            let edge = chain
                .successor(graph, current, rng)
                .ok_or(Error::Unreachable {
                    from: current,
                    to: root,
                })?;
            successor[current.index()] = Some(edge);
            current = edge.target;
        }
        graft(&mut in_tree, &successor, start);
    }

    let tree = SpanningTree {
        roots: vec![root],
        edges: successor.iter().flatten().count(),
        successor,
    };
    debug!("rooted spanning tree at {root} with {} edges", tree.edges);
    Ok(tree)
}

fn unrooted<G, C, R>(
    graph: &G,
    chain: &mut C,
    rng: &mut R,
    config: &SpanningTreeConfig,
) -> Result<SpanningTree>
where
    G: BidirectionalGraph,
    C: EdgeChain,
    R: Rng + ?Sized,
{
    require_single_sink_component(graph)?;

    let mut eps = 1.0_f64;
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        if let Some(tree) = attempt(graph, chain, rng, eps) {
            debug!(
                "unrooted spanning tree at {:?} after {attempts} attempts",
                tree.root()
            );
            return Ok(tree);
        }
        trace!("cycle-popping attempt {attempts} produced several roots (eps = {eps})");

        if config.max_attempts.is_some_and(|max| attempts >= max) {
            debug!("giving up on unrooted spanning tree after {attempts} attempts");
            return Err(Error::AttemptsExhausted(attempts));
        }
        eps = (eps / 2.0).max(f64::MIN_POSITIVE);
    }
}

/// One unrooted pass; `None` if more than one root came out.
fn attempt<G, C, R>(graph: &G, chain: &mut C, rng: &mut R, eps: f64) -> Option<SpanningTree>
where
    G: BidirectionalGraph,
    C: EdgeChain,
    R: Rng + ?Sized,
{
    let bound = graph.node_bound();
    let mut in_tree = vec![false; bound];
    let mut successor: Vec<Option<EdgeRef>> = vec![None; bound];
    let mut roots = Vec::new();

    for start in graph.node_ids() {
        let mut current = start;
        while !in_tree[current.index()] {
            let edge = if rng.gen::<f64>() < eps {
                None
            } else {
                chain.successor(graph, current, rng)
            };

            match edge {
                Some(edge) => {
                    successor[current.index()] = Some(edge);
                    current = edge.target;
                }
                None => {
                    successor[current.index()] = None;
                    in_tree[current.index()] = true;
                    roots.push(current);
                    if roots.len() > 1 {
                        return None;
                    }
                }
            }
        }
        graft(&mut in_tree, &successor, start);
    }

    Some(SpanningTree {
        edges: successor.iter().flatten().count(),
        roots,
        successor,
    })
}

/// Marks the recorded successor path from `start` as part of the tree.
fn graft(in_tree: &mut [bool], successor: &[Option<EdgeRef>], start: NodeId) {
    let mut current = start;
    while !in_tree[current.index()] {
        in_tree[current.index()] = true;
        match successor[current.index()] {
            Some(edge) => current = edge.target,
            None => break,
        }
    }
}

/// A single-root tree exists iff exactly one strongly connected component has no edge
/// leaving it; every other vertex can then reach that component.
fn require_single_sink_component<G: BidirectionalGraph>(graph: &G) -> Result<()> {
    let components = strongly_connected_components(graph);
    let mut is_sink = vec![true; components.count()];
    for (node, id) in components.iter() {
        for target in graph.successors(node) {
            if components.component(target) != Some(id) {
                is_sink[id] = false;
            }
        }
    }

    let members = components.members();
    let mut sinks = is_sink
        .iter()
        .enumerate()
        .filter(|(_, sink)| **sink)
        .filter_map(|(id, _)| members[id].first().copied());
    match (sinks.next(), sinks.next()) {
        (Some(_), None) => Ok(()),
        (Some(first), Some(second)) => Err(Error::Unreachable {
            from: second,
            to: first,
        }),
        (None, _) => Err(Error::EmptyGraph),
    }
}
