//! Markov edge chains: strategies for picking a random out-edge of a vertex.
//!
//! The cycle-popping spanning tree walk asks its chain for the next edge at every step.
//! Three chains are provided:
//!
//! - [`UniformEdgeChain`] - every out-edge equally likely
//! - [`WeightedEdgeChain`] - probability proportional to a fixed per-edge weight
//! - [`VanishingEdgeChain`] - like the weighted chain, but each drawn edge has its weight
//!   multiplied by a decay factor, biasing later draws away from it
//!
//! Edges without an explicit weight weigh `1.0`. Negative and non-finite weights count as
//! zero. When every out-edge of a vertex weighs zero the pick falls back to uniform, so a
//! chain only returns `None` for a vertex without out-edges.

use std::collections::HashMap;

use rand::Rng;

use crate::graph::{EdgeId, EdgeRef, IncidenceGraph, NodeId};

const DEFAULT_WEIGHT: f64 = 1.0;

/// A strategy for drawing a random out-edge.
pub trait EdgeChain {
    /// Draws an out-edge of `node`, or `None` if `node` has no out-edges.
    fn successor<G, R>(&mut self, graph: &G, node: NodeId, rng: &mut R) -> Option<EdgeRef>
    where
        G: IncidenceGraph,
        R: Rng + ?Sized;
}

impl<C: EdgeChain + ?Sized> EdgeChain for &mut C {
    fn successor<G, R>(&mut self, graph: &G, node: NodeId, rng: &mut R) -> Option<EdgeRef>
    where
        G: IncidenceGraph,
        R: Rng + ?Sized,
    {
        (**self).successor(graph, node, rng)
    }
}

/// Picks every out-edge with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformEdgeChain;

impl EdgeChain for UniformEdgeChain {
    fn successor<G, R>(&mut self, graph: &G, node: NodeId, rng: &mut R) -> Option<EdgeRef>
    where
        G: IncidenceGraph,
        R: Rng + ?Sized,
    {
        let degree = graph.out_degree(node);
        if degree == 0 {
            return None;
        }
        graph.out_edges(node).nth(rng.gen_range(0..degree))
    }
}

/// Picks out-edges with probability proportional to a fixed weight.
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::{EdgeChain, WeightedEdgeChain}};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// let never = graph.add_edge(a, b, ())?;
/// let always = graph.add_edge(a, c, ())?;
///
/// let mut chain = WeightedEdgeChain::new().with_weight(never, 0.0);
/// let mut rng = StdRng::seed_from_u64(7);
/// for _ in 0..16 {
///     assert_eq!(chain.successor(&graph, a, &mut rng).map(|e| e.id), Some(always));
/// }
/// # Ok::<(), dagscope::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedEdgeChain {
    weights: HashMap<EdgeId, f64>,
}

impl WeightedEdgeChain {
    /// Creates a chain where every edge weighs `1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain from explicit weights.
    #[must_use]
    pub fn from_weights(weights: HashMap<EdgeId, f64>) -> Self {
        WeightedEdgeChain { weights }
    }

    /// Sets the weight of one edge.
    #[must_use]
    pub fn with_weight(mut self, edge: EdgeId, weight: f64) -> Self {
        self.weights.insert(edge, weight);
        self
    }

    /// Current weight of `edge`.
    #[must_use]
    pub fn weight(&self, edge: EdgeId) -> f64 {
        self.weights.get(&edge).copied().unwrap_or(DEFAULT_WEIGHT)
    }
}

impl EdgeChain for WeightedEdgeChain {
    fn successor<G, R>(&mut self, graph: &G, node: NodeId, rng: &mut R) -> Option<EdgeRef>
    where
        G: IncidenceGraph,
        R: Rng + ?Sized,
    {
        pick_weighted(graph, node, rng, |edge| self.weight(edge))
    }
}

/// A weighted chain whose drawn edges lose weight.
///
/// After every draw the chosen edge's weight is multiplied by `factor`. A factor below
/// `1.0` makes repeated choices of the same edge increasingly unlikely.
#[derive(Debug, Clone)]
pub struct VanishingEdgeChain {
    weights: HashMap<EdgeId, f64>,
    factor: f64,
}

impl VanishingEdgeChain {
    /// Creates a chain where every edge starts at weight `1.0`.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        VanishingEdgeChain {
            weights: HashMap::new(),
            factor,
        }
    }

    /// Creates a chain from explicit starting weights.
    #[must_use]
    pub fn from_weights(weights: HashMap<EdgeId, f64>, factor: f64) -> Self {
        VanishingEdgeChain { weights, factor }
    }

    /// The decay factor applied after each draw.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Remaining weight of `edge`.
    #[must_use]
    pub fn weight(&self, edge: EdgeId) -> f64 {
        self.weights.get(&edge).copied().unwrap_or(DEFAULT_WEIGHT)
    }
}

impl EdgeChain for VanishingEdgeChain {
    fn successor<G, R>(&mut self, graph: &G, node: NodeId, rng: &mut R) -> Option<EdgeRef>
    where
        G: IncidenceGraph,
        R: Rng + ?Sized,
    {
        let chosen = pick_weighted(graph, node, rng, |edge| self.weight(edge))?;
        let decayed = self.weight(chosen.id) * self.factor;
        self.weights.insert(chosen.id, decayed);
        Some(chosen)
    }
}

fn usable(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

fn pick_weighted<G, R, W>(graph: &G, node: NodeId, rng: &mut R, weight: W) -> Option<EdgeRef>
where
    G: IncidenceGraph,
    R: Rng + ?Sized,
    W: Fn(EdgeId) -> f64,
{
    let candidates: Vec<(EdgeRef, f64)> = graph
        .out_edges(node)
        .map(|edge| (edge, usable(weight(edge.id))))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let total: f64 = candidates.iter().map(|(_, w)| w).sum();
    if !(total.is_finite() && total > 0.0) {
        return Some(candidates[rng.gen_range(0..candidates.len())].0);
    }

    let mut threshold = rng.gen::<f64>() * total;
    for (edge, w) in &candidates {
        if threshold < *w {
            return Some(*edge);
        }
        threshold -= w;
    }
    // Rounding can leave a sliver past the last bucket
    candidates
        .iter()
        .rev()
        .find(|(_, w)| *w > 0.0)
        .map(|(edge, _)| *edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::{rngs::StdRng, SeedableRng};

    fn create_star_graph(leaves: usize) -> (Graph, NodeId, Vec<EdgeId>) {
        let mut graph = Graph::new();
        let hub = graph.add_node(());
        let edges = (0..leaves)
            .map(|_| {
                let leaf = graph.add_node(());
                graph.add_edge(hub, leaf, ()).unwrap()
            })
            .collect();
        (graph, hub, edges)
    }

    #[test]
    fn test_uniform_chain_no_out_edges() {
        let (graph, _, _) = create_star_graph(3);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(UniformEdgeChain.successor(&graph, NodeId::new(1), &mut rng), None);
    }

    #[test]
    fn test_uniform_chain_hits_every_edge() {
        let (graph, hub, edges) = create_star_graph(4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits: HashMap<EdgeId, usize> = HashMap::new();
        for _ in 0..400 {
            let edge = UniformEdgeChain.successor(&graph, hub, &mut rng).unwrap();
            assert_eq!(edge.source, hub);
            *hits.entry(edge.id).or_default() += 1;
        }
        assert_eq!(hits.len(), edges.len());
        assert!(hits.values().all(|&count| count > 50));
    }

    #[test]
    fn test_weighted_chain_respects_weights() {
        let (graph, hub, edges) = create_star_graph(2);
        let mut chain = WeightedEdgeChain::new()
            .with_weight(edges[0], 9.0)
            .with_weight(edges[1], 1.0);
        let mut rng = StdRng::seed_from_u64(3);

        let heavy = (0..1000)
            .filter(|_| chain.successor(&graph, hub, &mut rng).map(|e| e.id) == Some(edges[0]))
            .count();
        assert!(heavy > 800, "heavy edge drawn {heavy} times");
        assert!(heavy < 980, "heavy edge drawn {heavy} times");
    }

    #[test]
    fn test_weighted_chain_zero_weights_fall_back_to_uniform() {
        let (graph, hub, edges) = create_star_graph(2);
        let mut chain = WeightedEdgeChain::new()
            .with_weight(edges[0], 0.0)
            .with_weight(edges[1], f64::NAN);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(chain.successor(&graph, hub, &mut rng).is_some());
    }

    #[test]
    fn test_vanishing_chain_decays_drawn_edge() {
        let (graph, hub, edges) = create_star_graph(1);
        let mut chain = VanishingEdgeChain::new(0.5);
        let mut rng = StdRng::seed_from_u64(9);

        for expected in [0.5, 0.25, 0.125] {
            let edge = chain.successor(&graph, hub, &mut rng).unwrap();
            assert_eq!(edge.id, edges[0]);
            assert!((chain.weight(edges[0]) - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_vanishing_chain_shifts_preference() {
        let (graph, hub, edges) = create_star_graph(2);
        let mut weights = HashMap::new();
        weights.insert(edges[0], 1.0);
        weights.insert(edges[1], 1.0);
        let mut chain = VanishingEdgeChain::from_weights(weights, 0.0);
        let mut rng = StdRng::seed_from_u64(11);

        let first = chain.successor(&graph, hub, &mut rng).unwrap().id;
        let second = chain.successor(&graph, hub, &mut rng).unwrap().id;
        assert_ne!(first, second);
    }
}
