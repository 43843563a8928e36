//! Eulerian circuits and trail covers.
//!
//! Any graph can be covered by edge-disjoint trails. The extractor works on a private arc
//! list so the caller's graph is never touched:
//!
//! 1. Edges are grouped into connected pieces (vertices without edges are ignored).
//! 2. Each piece is balanced with temporary arcs. Undirected pieces pair their odd-degree
//!    vertices; directed pieces add arcs from vertices with surplus in-degree to vertices
//!    with surplus out-degree. Adjacent pairs are preferred.
//! 3. A closed walk is grown greedily from the first arc, then every vertex on it that
//!    still has unused arcs gets a closed detour spliced in, until all arcs are used.
//! 4. The circuit is cut at the temporary arcs, which are dropped.
//!
//! A piece that needed `k` temporary arcs yields `k` trails; a balanced piece yields one
//! closed trail. That is the smallest possible number of trails.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    graph::{
        algorithms::{breadth_first_search, PredecessorRecorder},
        EdgeId, EdgeListGraph, EdgeRef, IncidenceGraph, NodeId,
    },
    Error, Result,
};

/// An arc of the augmented graph; `edge` is `None` for temporary arcs.
#[derive(Debug, Clone, Copy)]
struct Arc {
    edge: Option<EdgeId>,
    from: NodeId,
    to: NodeId,
}

/// One traversal of an arc, oriented the way the circuit walks it.
#[derive(Debug, Clone, Copy)]
struct Step {
    arc: usize,
    from: NodeId,
    to: NodeId,
}

impl Step {
    fn reversed(self) -> Self {
        Step {
            arc: self.arc,
            from: self.to,
            to: self.from,
        }
    }
}

struct Circuit {
    arcs: Vec<Arc>,
    steps: Vec<Step>,
}

impl Circuit {
    fn edge(&self, step: Step) -> Option<EdgeRef> {
        self.arcs[step.arc]
            .edge
            .map(|id| EdgeRef::new(id, step.from, step.to))
    }

    fn has_temporaries(&self) -> bool {
        self.arcs.iter().any(|arc| arc.edge.is_none())
    }

    /// Splits at temporary arcs, rotated so no trail wraps around the end.
    fn into_trails(mut self) -> Vec<Vec<EdgeRef>> {
        if let Some(first) = self.steps.iter().position(|s| self.arcs[s.arc].edge.is_none()) {
            self.steps.rotate_left(first + 1);
        }

        let mut trails = Vec::new();
        let mut current = Vec::new();
        for &step in &self.steps {
            match self.edge(step) {
                Some(edge) => current.push(edge),
                None if !current.is_empty() => trails.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            trails.push(current);
        }
        trails
    }

    fn touches(&self, node: NodeId) -> bool {
        self.steps.iter().any(|step| step.from == node)
    }

    fn real_exit(&self, anchor: NodeId) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.from == anchor && self.arcs[s.arc].edge.is_some())
    }

    /// Rotates so the walk leaves `anchor` first, preferring a real edge.
    fn anchor_at(&mut self, anchor: NodeId, directed: bool) {
        if self.real_exit(anchor).is_none() && !directed {
            self.steps.reverse();
            for step in &mut self.steps {
                *step = step.reversed();
            }
        }

        let start = self
            .real_exit(anchor)
            .or_else(|| self.steps.iter().position(|s| s.from == anchor));
        if let Some(start) = start {
            self.steps.rotate_left(start);
        }
    }
}

/// Greedy walker over an arc list.
struct CircuitBuilder {
    arcs: Vec<Arc>,
    incident: HashMap<NodeId, Vec<usize>>,
    cursor: HashMap<NodeId, usize>,
    used: Vec<bool>,
}

impl CircuitBuilder {
    fn new(arcs: Vec<Arc>, directed: bool) -> Self {
        let mut incident: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (index, arc) in arcs.iter().enumerate() {
            incident.entry(arc.from).or_default().push(index);
            if !directed && arc.from != arc.to {
                incident.entry(arc.to).or_default().push(index);
            }
        }

        CircuitBuilder {
            used: vec![false; arcs.len()],
            arcs,
            incident,
            cursor: HashMap::new(),
        }
    }

    fn next_step(&mut self, node: NodeId) -> Option<Step> {
        let incident = self.incident.get(&node)?;
        let cursor = self.cursor.entry(node).or_insert(0);
        while let Some(&arc) = incident.get(*cursor) {
            *cursor += 1;
            if self.used[arc] {
                continue;
            }
            self.used[arc] = true;
            let Arc { from, to, .. } = self.arcs[arc];
            let next = if from == node { to } else { from };
            return Some(Step {
                arc,
                from: node,
                to: next,
            });
        }
        None
    }

    fn has_unused(&mut self, node: NodeId) -> bool {
        let Some(incident) = self.incident.get(&node) else {
            return false;
        };
        let cursor = self.cursor.entry(node).or_insert(0);
        while incident.get(*cursor).is_some_and(|&arc| self.used[arc]) {
            *cursor += 1;
        }
        *cursor < incident.len()
    }

    fn walk(&mut self, start: NodeId) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut current = start;
        while let Some(step) = self.next_step(current) {
            current = step.to;
            steps.push(step);
        }
        steps
    }

    fn build(mut self) -> Circuit {
        let Some(start) = self.arcs.first().map(|arc| arc.from) else {
            return Circuit {
                arcs: self.arcs,
                steps: Vec::new(),
            };
        };

        let mut steps = self.walk(start);
        let mut index = 0;
        while index < steps.len() {
            let node = steps[index].from;
            if self.has_unused(node) {
                let detour = self.walk(node);
                trace!("splicing a {}-step detour at {node}", detour.len());
                steps.splice(index..index, detour);
            }
            index += 1;
        }
        debug_assert_eq!(steps.len(), self.arcs.len(), "augmented piece is balanced");

        Circuit {
            arcs: self.arcs,
            steps,
        }
    }
}

struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(size: usize) -> Self {
        DisjointSets {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        if a != b {
            self.parent[b] = a;
        }
    }
}

struct Degrees {
    out: Vec<usize>,
    inc: Vec<usize>,
}

impl Degrees {
    fn of<G: EdgeListGraph>(graph: &G) -> Self {
        let mut degrees = Degrees {
            out: vec![0; graph.node_bound()],
            inc: vec![0; graph.node_bound()],
        };
        for edge in graph.edge_refs() {
            degrees.out[edge.source.index()] += 1;
            degrees.inc[edge.target.index()] += 1;
        }
        degrees
    }

    fn is_odd(&self, node: NodeId) -> bool {
        (self.out[node.index()] + self.inc[node.index()]) % 2 == 1
    }

    /// Out-degree minus in-degree.
    fn surplus(&self, node: NodeId) -> isize {
        self.out[node.index()] as isize - self.inc[node.index()] as isize
    }
}

/// Edges grouped by connected piece, in order of each piece's lowest edge id.
fn pieces<G: EdgeListGraph>(graph: &G) -> Vec<Vec<EdgeRef>> {
    let mut sets = DisjointSets::new(graph.node_bound());
    for edge in graph.edge_refs() {
        sets.union(edge.source.index(), edge.target.index());
    }

    let mut slot: HashMap<usize, usize> = HashMap::new();
    let mut pieces: Vec<Vec<EdgeRef>> = Vec::new();
    for edge in graph.edge_refs() {
        let root = sets.find(edge.source.index());
        let index = *slot.entry(root).or_insert_with(|| {
            pieces.push(Vec::new());
            pieces.len() - 1
        });
        pieces[index].push(edge);
    }
    pieces
}

fn piece_vertices(edges: &[EdgeRef]) -> Vec<NodeId> {
    let mut vertices: Vec<NodeId> = edges
        .iter()
        .flat_map(|edge| [edge.source, edge.target])
        .collect();
    vertices.sort_unstable();
    vertices.dedup();
    vertices
}

/// Temporary arcs pairing the odd-degree vertices of an undirected piece.
fn pair_odd_vertices<G: IncidenceGraph>(graph: &G, odd: &[NodeId]) -> Vec<Arc> {
    let mut waiting: HashMap<NodeId, bool> = odd.iter().map(|&node| (node, true)).collect();
    let mut temporaries = Vec::new();

    for &u in odd {
        if !waiting[&u] {
            continue;
        }
        let partner = graph
            .successors(u)
            .find(|&v| v != u && waiting.get(&v).copied().unwrap_or(false));
        if let Some(v) = partner {
            waiting.insert(u, false);
            waiting.insert(v, false);
            temporaries.push(Arc {
                edge: None,
                from: u,
                to: v,
            });
        }
    }

    let rest: Vec<NodeId> = odd.iter().copied().filter(|node| waiting[node]).collect();
    for pair in rest.chunks_exact(2) {
        temporaries.push(Arc {
            edge: None,
            from: pair[0],
            to: pair[1],
        });
    }
    temporaries
}

/// Temporary arcs balancing in- and out-degree of a directed piece.
fn balance_surplus<G: IncidenceGraph>(
    graph: &G,
    vertices: &[NodeId],
    degrees: &Degrees,
) -> Vec<Arc> {
    let mut balance: HashMap<NodeId, isize> = vertices
        .iter()
        .map(|&node| (node, degrees.surplus(node)))
        .filter(|(_, surplus)| *surplus != 0)
        .collect();
    let mut temporaries = Vec::new();

    // Arcs go from in-heavy vertices (negative balance) to out-heavy ones
    let in_heavy: Vec<NodeId> = vertices
        .iter()
        .copied()
        .filter(|node| balance.get(node).is_some_and(|b| *b < 0))
        .collect();
    for &x in &in_heavy {
        for y in graph.successors(x) {
            if balance[&x] == 0 {
                break;
            }
            if balance.get(&y).is_some_and(|b| *b > 0) {
                temporaries.push(Arc {
                    edge: None,
                    from: x,
                    to: y,
                });
                *balance.entry(x).or_default() += 1;
                *balance.entry(y).or_default() -= 1;
            }
        }
    }

    let out_heavy: Vec<NodeId> = vertices
        .iter()
        .copied()
        .filter(|node| balance.get(node).is_some_and(|b| *b > 0))
        .collect();
    let mut out_heavy = out_heavy.into_iter();
    let mut target = out_heavy.next();
    for &x in &in_heavy {
        while balance[&x] < 0 {
            let Some(y) = target else {
                break;
            };
            temporaries.push(Arc {
                edge: None,
                from: x,
                to: y,
            });
            *balance.entry(x).or_default() += 1;
            *balance.entry(y).or_default() -= 1;
            if balance[&y] == 0 {
                target = out_heavy.next();
            }
        }
    }
    temporaries
}

fn circuits<G>(graph: &G) -> Result<Vec<Circuit>>
where
    G: EdgeListGraph + IncidenceGraph,
{
    let degrees = Degrees::of(graph);
    let odd = graph.node_ids().filter(|&node| degrees.is_odd(node)).count();
    if odd % 2 == 1 {
        return Err(Error::ImpossibleEulerianGraph(odd));
    }

    let directed = graph.is_directed();
    let mut temporary_count = 0usize;
    let circuits: Vec<Circuit> = pieces(graph)
        .into_iter()
        .map(|edges| {
            let vertices = piece_vertices(&edges);
            let temporaries = if directed {
                balance_surplus(graph, &vertices, &degrees)
            } else {
                let unpaired: Vec<NodeId> =
                    vertices.into_iter().filter(|&v| degrees.is_odd(v)).collect();
                pair_odd_vertices(graph, &unpaired)
            };
            temporary_count += temporaries.len();

            let arcs = edges
                .iter()
                .map(|edge| Arc {
                    edge: Some(edge.id),
                    from: edge.source,
                    to: edge.target,
                })
                .chain(temporaries)
                .collect();
            CircuitBuilder::new(arcs, directed).build()
        })
        .collect();

    debug!(
        "eulerian cover: {} pieces, {odd} odd vertices, {temporary_count} temporary arcs",
        circuits.len()
    );
    Ok(circuits)
}

/// Vertices whose total degree (in plus out) is odd, in ascending order.
///
/// A self-loop adds two to the degree of its vertex.
pub fn odd_vertices<G: EdgeListGraph>(graph: &G) -> Vec<NodeId> {
    let degrees = Degrees::of(graph);
    graph.node_ids().filter(|&node| degrees.is_odd(node)).collect()
}

/// Number of trails [`eulerian_trails`] returns without an anchor.
///
/// Each connected piece of the edge set contributes one trail if it is balanced, and
/// otherwise one trail per temporary arc: half its odd-degree vertices when undirected,
/// its total out-degree surplus when directed. Graphs without edges yield 0.
pub fn eulerian_path_count<G>(graph: &G) -> usize
where
    G: EdgeListGraph + IncidenceGraph,
{
    let degrees = Degrees::of(graph);
    if graph.edge_count() == 0 || graph.node_ids().filter(|&n| degrees.is_odd(n)).count() % 2 == 1 {
        return 0;
    }

    pieces(graph)
        .iter()
        .map(|edges| {
            let vertices = piece_vertices(edges);
            let needed = if graph.is_directed() {
                vertices
                    .iter()
                    .map(|&v| degrees.surplus(v).max(0).unsigned_abs())
                    .sum()
            } else {
                vertices.iter().filter(|&&v| degrees.is_odd(v)).count() / 2
            };
            needed.max(1)
        })
        .sum()
}

/// Covers every edge of `graph` with edge-disjoint trails.
///
/// Without an anchor the trails use every edge exactly once and their number is given
/// by [`eulerian_path_count`]. A connected graph whose vertices all have even degree
/// (or balanced in- and out-degree when directed) yields a single closed trail; a
/// connected undirected graph with exactly two odd vertices yields one trail between
/// them.
///
/// With `Some(anchor)` every trail starts at `anchor`: the first follows the circuit
/// from `anchor`, each later one is prefixed with the shortest path (breadth-first)
/// from `anchor` to where it begins, so prefix edges repeat.
///
/// # Errors
///
/// - [`Error::ImpossibleEulerianGraph`] if the number of odd-degree vertices is odd
/// - [`Error::EmptyGraph`] if an anchor is given for a graph without vertices
/// - [`Error::UnknownVertex`] if `anchor` is not in the graph
/// - [`Error::NotOnCircuit`] if `anchor` has no incident edge
/// - [`Error::Unreachable`] if `anchor` cannot reach the start of some trail
///
/// # Examples
///
/// ```rust
/// use dagscope::graph::{Graph, algorithms::eulerian_trails};
///
/// // A path a - b - c: two odd vertices, one trail
/// let mut graph: Graph = Graph::undirected();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
///
/// let trails = eulerian_trails(&graph, Some(a))?;
/// assert_eq!(trails.len(), 1);
/// assert_eq!(trails[0][0].source, a);
/// assert_eq!(trails[0][1].target, c);
/// # Ok::<(), dagscope::Error>(())
/// ```
pub fn eulerian_trails<G>(graph: &G, anchor: Option<NodeId>) -> Result<Vec<Vec<EdgeRef>>>
where
    G: EdgeListGraph + IncidenceGraph,
{
    let Some(anchor) = anchor else {
        let circuits = circuits(graph)?;
        return Ok(circuits.into_iter().flat_map(Circuit::into_trails).collect());
    };

    if graph.node_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    if !graph.contains_node(anchor) {
        return Err(Error::UnknownVertex(anchor));
    }

    let mut circuits = circuits(graph)?;
    if circuits.is_empty() {
        return Ok(Vec::new());
    }
    let home = circuits
        .iter()
        .position(|circuit| circuit.touches(anchor))
        .ok_or(Error::NotOnCircuit(anchor))?;
    let mut first = circuits.remove(home);
    first.anchor_at(anchor, graph.is_directed());
    circuits.insert(0, first);

    let mut search = PredecessorRecorder::new();
    breadth_first_search(graph, &mut search, Some(anchor))?;

    let mut trails = Vec::new();
    for circuit in &circuits {
        let mut current: Vec<EdgeRef> = Vec::new();
        for &step in &circuit.steps {
            let Some(edge) = circuit.edge(step) else {
                if !current.is_empty() {
                    trails.push(std::mem::take(&mut current));
                }
                continue;
            };
            if current.is_empty() && step.from != anchor {
                current = search.path_to(step.from).ok_or(Error::Unreachable {
                    from: anchor,
                    to: step.from,
                })?;
            }
            current.push(edge);
        }
        if !current.is_empty() {
            trails.push(current);
        }
    }
    Ok(trails)
}

/// An Eulerian circuit, if the edges already form one closed walk.
///
/// Returns `None` when the edge set is split into several pieces or some vertex would
/// need a temporary arc. A graph without edges has the empty circuit.
pub fn eulerian_circuit<G>(graph: &G) -> Option<Vec<EdgeRef>>
where
    G: EdgeListGraph + IncidenceGraph,
{
    let mut circuits = circuits(graph).ok()?;
    match circuits.len() {
        0 => Some(Vec::new()),
        1 => {
            let circuit = circuits.pop()?;
            if circuit.has_temporaries() {
                return None;
            }
            circuit.steps.iter().map(|&step| circuit.edge(step)).collect()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use std::collections::HashSet;

    fn create_path_graph(length: usize) -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::undirected();
        let nodes: Vec<NodeId> = (0..=length).map(|_| graph.add_node(())).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], ()).unwrap();
        }
        (graph, nodes)
    }

    fn assert_trail(trail: &[EdgeRef]) {
        for pair in trail.windows(2) {
            assert_eq!(pair[0].target, pair[1].source, "trail breaks between {} and {}", pair[0], pair[1]);
        }
    }

    fn assert_covers_once(graph: &Graph, trails: &[Vec<EdgeRef>]) {
        let mut seen = HashSet::new();
        for trail in trails {
            assert_trail(trail);
            for edge in trail {
                assert!(seen.insert(edge.id), "edge {} used twice", edge.id);
            }
        }
        assert_eq!(seen.len(), graph.edge_count());
    }

    #[test]
    fn test_odd_vertices() {
        let (graph, n) = create_path_graph(3);
        assert_eq!(odd_vertices(&graph), vec![n[0], n[3]]);

        let mut looped: Graph = Graph::undirected();
        let a = looped.add_node(());
        looped.add_edge(a, a, ()).unwrap();
        assert!(odd_vertices(&looped).is_empty());
    }

    #[test]
    fn test_even_cycle_single_closed_trail() {
        let mut graph: Graph = Graph::undirected();
        let n: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        for i in 0..4 {
            graph.add_edge(n[i], n[(i + 1) % 4], ()).unwrap();
        }

        assert_eq!(eulerian_path_count(&graph), 1);
        let trails = eulerian_trails(&graph, None).unwrap();
        assert_eq!(trails.len(), 1);
        assert_covers_once(&graph, &trails);
        let trail = &trails[0];
        assert_eq!(trail.first().unwrap().source, trail.last().unwrap().target);

        let circuit = eulerian_circuit(&graph).unwrap();
        assert_eq!(circuit.len(), 4);
    }

    #[test]
    fn test_two_odd_vertices_single_open_trail() {
        // Triangle a-b-c with a tail c-d: c and d are odd
        let mut graph: Graph = Graph::undirected();
        let n: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(n[0], n[1], ()).unwrap();
        graph.add_edge(n[1], n[2], ()).unwrap();
        graph.add_edge(n[2], n[0], ()).unwrap();
        graph.add_edge(n[2], n[3], ()).unwrap();

        assert_eq!(eulerian_path_count(&graph), 1);
        let trails = eulerian_trails(&graph, None).unwrap();
        assert_eq!(trails.len(), 1);
        assert_covers_once(&graph, &trails);

        let ends: HashSet<NodeId> = [trails[0][0].source, trails[0][3].target].into_iter().collect();
        assert_eq!(ends, [n[2], n[3]].into_iter().collect());
        assert_eq!(eulerian_circuit(&graph), None);
    }

    #[test]
    fn test_directed_cycle_circuit() {
        let mut graph: Graph = Graph::new();
        let n: Vec<NodeId> = (0..3).map(|_| graph.add_node(())).collect();
        graph.add_edge(n[0], n[1], ()).unwrap();
        graph.add_edge(n[1], n[2], ()).unwrap();
        graph.add_edge(n[2], n[0], ()).unwrap();

        let circuit = eulerian_circuit(&graph).unwrap();
        assert_eq!(circuit.len(), 3);
        assert_trail(&circuit);
        assert_eq!(circuit[0].source, n[0]);
    }

    #[test]
    fn test_directed_imbalance_splits_trails() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(c, b, ()).unwrap();

        assert_eq!(eulerian_path_count(&graph), 2);
        let trails = eulerian_trails(&graph, None).unwrap();
        assert_eq!(trails.len(), 2);
        assert_covers_once(&graph, &trails);
        for trail in &trails {
            assert_eq!(trail.len(), 1);
            assert_eq!(trail[0].target, b);
        }

        assert_eq!(
            eulerian_trails(&graph, Some(a)),
            Err(Error::Unreachable { from: a, to: c })
        );
    }

    #[test]
    fn test_separate_pieces_each_get_a_trail() {
        let mut graph: Graph = Graph::undirected();
        let n: Vec<NodeId> = (0..6).map(|_| graph.add_node(())).collect();
        for base in [0, 3] {
            for i in 0..3 {
                graph.add_edge(n[base + i], n[base + (i + 1) % 3], ()).unwrap();
            }
        }

        assert_eq!(eulerian_path_count(&graph), 2);
        let trails = eulerian_trails(&graph, None).unwrap();
        assert_eq!(trails.len(), 2);
        assert_covers_once(&graph, &trails);
        assert_eq!(eulerian_circuit(&graph), None);
    }

    #[test]
    fn test_anchored_path_from_either_end() {
        let (graph, n) = create_path_graph(3);

        let from_start = eulerian_trails(&graph, Some(n[0])).unwrap();
        assert_eq!(from_start.len(), 1);
        assert_eq!(from_start[0].len(), 3);
        assert_eq!(from_start[0][0].source, n[0]);

        let from_end = eulerian_trails(&graph, Some(n[3])).unwrap();
        assert_eq!(from_end.len(), 1);
        assert_eq!(from_end[0].len(), 3);
        assert_eq!(from_end[0][0].source, n[3]);
        assert_eq!(from_end[0][2].target, n[0]);
    }

    #[test]
    fn test_anchored_trails_start_at_anchor() {
        // Star with four leaves: four odd leaves, two trails
        let mut graph: Graph = Graph::undirected();
        let hub = graph.add_node(());
        let leaves: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        for &leaf in &leaves {
            graph.add_edge(hub, leaf, ()).unwrap();
        }

        assert_eq!(eulerian_path_count(&graph), 2);
        let trails = eulerian_trails(&graph, Some(hub)).unwrap();
        assert!(!trails.is_empty());
        for trail in &trails {
            assert_trail(trail);
            assert_eq!(trail[0].source, hub);
        }
        let covered: HashSet<EdgeId> = trails.iter().flatten().map(|edge| edge.id).collect();
        assert_eq!(covered.len(), graph.edge_count());
    }

    #[test]
    fn test_anchor_errors() {
        let empty: Graph = Graph::new();
        assert_eq!(eulerian_trails(&empty, Some(NodeId::new(0))), Err(Error::EmptyGraph));
        assert!(eulerian_trails(&empty, None).unwrap().is_empty());

        let (mut graph, _) = create_path_graph(1);
        let ghost = NodeId::new(9);
        assert_eq!(eulerian_trails(&graph, Some(ghost)), Err(Error::UnknownVertex(ghost)));

        let lonely = graph.add_node(());
        assert_eq!(eulerian_trails(&graph, Some(lonely)), Err(Error::NotOnCircuit(lonely)));
    }

    #[test]
    fn test_edgeless_graph() {
        let mut graph: Graph = Graph::new();
        let a = graph.add_node(());
        assert_eq!(eulerian_path_count(&graph), 0);
        assert_eq!(eulerian_circuit(&graph), Some(Vec::new()));
        assert!(eulerian_trails(&graph, Some(a)).unwrap().is_empty());
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let mut graph: Graph = Graph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, a, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();

        let circuit = eulerian_circuit(&graph).unwrap();
        assert_eq!(circuit.len(), 3);
        assert_trail(&circuit);
    }
}
