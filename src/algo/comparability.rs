/*!
# Comparability Graphs & Transitive Orientation

An undirected graph is a *comparability graph* if its edges can be oriented such that
the result is transitive (`a → b` and `b → c` imply `a → c`).

Orientations are forced locally: for arcs (oriented edges) sharing their tail,
`(a → b)` and `(a → c)` must point the same way whenever `b` and `c` are not adjacent;
symmetrically for arcs sharing their head. The transitive closure of this forcing
relation partitions the arcs into *implication classes*. A graph is a comparability
graph iff no implication class contains an arc together with its reverse.

[`TransitiveOrientation`] follows Golumbic's decomposition: it repeatedly takes the
smallest remaining arc, computes its implication class *in the graph of remaining edges*,
orients every edge of that class accordingly, and removes these edges. A class containing
both directions of an edge proves that no transitive orientation exists.
*/

use std::ops::Range;

use fxhash::FxHashMap;
use tracing::debug;

use super::*;

type ArcId = usize;

const NO_CLASS: u32 = u32::MAX;

/// Configurable transitive orientation
///
/// # Examples
/// ```
/// use lexgraphs::{prelude::*, algo::*};
///
/// // the path 0 - 1 - 2 becomes 0 → 1 ← 2
/// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
/// let d: AdjArrayIn = TransitiveOrientation::new().compute(&g).unwrap();
/// assert_eq!(d.ordered_edges(false).collect::<Vec<_>>(), vec![Edge(0, 1), Edge(2, 1)]);
///
/// // processing arcs out of 1 first flips the orientation
/// let d: AdjArrayIn = TransitiveOrientation::new().ranking(vec![1, 0, 2]).compute(&g).unwrap();
/// assert_eq!(d.ordered_edges(false).collect::<Vec<_>>(), vec![Edge(1, 0), Edge(1, 2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitiveOrientation {
    ranking: Option<Vec<NumNodes>>,
}

impl TransitiveOrientation {
    /// Creates an orientation that processes arcs in node order
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes arcs `(u, v)` by `(ranking[u], ranking[v])` instead of `(u, v)`.
    /// ** `compute` panics if `ranking.len() != n` **
    pub fn ranking(mut self, ranking: Vec<NumNodes>) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// Computes a transitive orientation of `graph` or returns `None` if `graph` is not
    /// a comparability graph. Every edge `{u, v}` appears in the result in exactly one
    /// direction. Self-loops are ignored.
    pub fn compute<G, D>(&self, graph: &G) -> Option<D>
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
        D: GraphNew + GraphEdgeEditing + AdjacencyList + GraphType<Dir = Directed>,
    {
        let arcs = ArcIndex::new(graph);
        let mut classes = ImplicationClasses::new(&arcs);
        let mut orientation = D::new(graph.number_of_nodes());
        let mut num_classes = 0;

        for (class, a) in self.sorted_arcs(&arcs, graph.number_of_nodes()).enumerate() {
            if classes.removed[a] {
                continue;
            }

            let class = class as u32;
            let members = classes.collect_class(a, class);
            if let Some(&m) = members
                .iter()
                .find(|&&m| classes.class_of[arcs.twin[m]] == class)
            {
                debug!(
                    tail = arcs.tails[m],
                    head = arcs.heads[m],
                    "implication class contains both directions of an edge"
                );
                return None;
            }

            for m in members {
                orientation.add_edge(arcs.tails[m], arcs.heads[m]);
                classes.removed[m] = true;
                classes.removed[arcs.twin[m]] = true;
            }
            num_classes += 1;
        }

        if !orientation.is_transitive() {
            debug!("oriented graph is not transitive");
            return None;
        }

        debug!(
            nodes = graph.number_of_nodes(),
            classes = num_classes,
            "found transitive orientation"
        );
        Some(orientation)
    }

    /// Returns the implication classes of `graph` itself (no decomposition).
    /// Arcs within a class and the classes themselves are sorted by rank.
    /// Classes come in pairs `A`, `A⁻¹` unless a class contains both directions of an edge.
    pub fn implication_classes<G>(&self, graph: &G) -> Vec<Vec<Edge>>
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let arcs = ArcIndex::new(graph);
        let mut classes = ImplicationClasses::new(&arcs);
        let mut result = Vec::new();

        for (class, a) in self.sorted_arcs(&arcs, graph.number_of_nodes()).enumerate() {
            if classes.class_of[a] != NO_CLASS {
                continue;
            }

            let mut members = classes.collect_class(a, class as u32);
            members.sort_unstable_by_key(|&m| self.arc_rank(&arcs, m));
            result.push(
                members
                    .into_iter()
                    .map(|m| Edge(arcs.tails[m], arcs.heads[m]))
                    .collect_vec(),
            );
        }

        debug!(classes = result.len(), "computed implication classes");
        result
    }

    /// All arcs ordered by the ranks of their tail, then head
    fn sorted_arcs(&self, arcs: &ArcIndex, n: NumNodes) -> impl Iterator<Item = ArcId> + use<> {
        let mut order = (0..arcs.len()).collect_vec();
        if let Some(ranking) = &self.ranking {
            assert_eq!(ranking.len(), n as usize, "ranking must cover every node");
            order.sort_unstable_by_key(|&a| self.arc_rank(arcs, a));
        }
        // without a ranking, arcs are already ordered by (tail, head)
        order.into_iter()
    }

    fn arc_rank(&self, arcs: &ArcIndex, a: ArcId) -> (NumNodes, NumNodes) {
        let (u, v) = (arcs.tails[a], arcs.heads[a]);
        match &self.ranking {
            Some(ranking) => (ranking[u as usize], ranking[v as usize]),
            None => (u, v),
        }
    }
}

/// All `2m` arcs of an undirected graph in CSR layout, sorted by `(tail, head)`
struct ArcIndex {
    offsets: Vec<ArcId>,
    tails: Vec<Node>,
    heads: Vec<Node>,
    twin: Vec<ArcId>,
    lookup: FxHashMap<Edge, ArcId>,
}

impl ArcIndex {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let mut offsets = Vec::with_capacity(graph.len() + 1);
        let mut tails = Vec::new();
        let mut heads = Vec::new();

        offsets.push(0);
        for u in graph.vertices() {
            heads.extend(graph.neighbors_of(u).filter(|&v| v != u).sorted_unstable());
            tails.resize(heads.len(), u);
            offsets.push(heads.len());
        }

        let lookup: FxHashMap<Edge, ArcId> = tails
            .iter()
            .zip(&heads)
            .enumerate()
            .map(|(a, (&u, &v))| (Edge(u, v), a))
            .collect();

        let twin = tails
            .iter()
            .zip(&heads)
            .map(|(&u, &v)| lookup[&Edge(v, u)])
            .collect();

        Self {
            offsets,
            tails,
            heads,
            twin,
            lookup,
        }
    }

    fn len(&self) -> usize {
        self.heads.len()
    }

    fn out_arcs(&self, u: Node) -> Range<ArcId> {
        self.offsets[u as usize]..self.offsets[u as usize + 1]
    }

    fn arc(&self, u: Node, v: Node) -> Option<ArcId> {
        self.lookup.get(&Edge(u, v)).copied()
    }
}

/// Search state for implication classes over the arcs that are not yet removed
struct ImplicationClasses<'a> {
    arcs: &'a ArcIndex,
    removed: Vec<bool>,
    class_of: Vec<u32>,
    stack: Vec<ArcId>,
}

impl<'a> ImplicationClasses<'a> {
    fn new(arcs: &'a ArcIndex) -> Self {
        Self {
            arcs,
            removed: vec![false; arcs.len()],
            class_of: vec![NO_CLASS; arcs.len()],
            stack: Vec::new(),
        }
    }

    fn is_remaining_edge(&self, u: Node, v: Node) -> bool {
        self.arcs.arc(u, v).is_some_and(|a| !self.removed[a])
    }

    /// Labels every arc forced by `start` with `class` and returns them
    fn collect_class(&mut self, start: ArcId, class: u32) -> Vec<ArcId> {
        let mut members = Vec::new();
        self.visit(start, class, &mut members);

        while let Some(a) = self.stack.pop() {
            let (x, y) = (self.arcs.tails[a], self.arcs.heads[a]);

            // (x → y) forces (x → c) if y and c are not adjacent
            for b in self.arcs.out_arcs(x) {
                let c = self.arcs.heads[b];
                if c != y && !self.removed[b] && !self.is_remaining_edge(y, c) {
                    self.visit(b, class, &mut members);
                }
            }

            // (x → y) forces (c → y) if x and c are not adjacent
            for b in self.arcs.out_arcs(y) {
                let b = self.arcs.twin[b];
                let c = self.arcs.tails[b];
                if c != x && !self.removed[b] && !self.is_remaining_edge(x, c) {
                    self.visit(b, class, &mut members);
                }
            }
        }

        members
    }

    fn visit(&mut self, a: ArcId, class: u32, members: &mut Vec<ArcId>) {
        if self.class_of[a] != class {
            self.class_of[a] = class;
            members.push(a);
            self.stack.push(a);
        }
    }
}

/// Recognition of comparability graphs
pub trait Comparability: AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns a transitive orientation or `None` if the graph is not a comparability graph
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// let d = g.transitive_orientation::<AdjArrayIn>().unwrap();
    /// assert_eq!(d.number_of_edges(), 3);
    /// assert!(d.is_transitive());
    /// ```
    fn transitive_orientation<D>(&self) -> Option<D>
    where
        D: GraphNew + GraphEdgeEditing + AdjacencyList + GraphType<Dir = Directed>,
    {
        TransitiveOrientation::new().compute(self)
    }

    /// Returns *true* if the graph admits a transitive orientation
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(5);
    /// g.connect_cycle(0..5);
    /// assert!(!g.is_comparability());
    ///
    /// g.remove_edge(4, 0);
    /// assert!(g.is_comparability());
    /// ```
    fn is_comparability(&self) -> bool {
        self.transitive_orientation::<AdjArrayIn>().is_some()
    }

    /// Returns the implication classes of the graph sorted by node order
    fn implication_classes(&self) -> Vec<Vec<Edge>> {
        TransitiveOrientation::new().implication_classes(self)
    }
}

impl<G> Comparability for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

/// Transitivity of directed graphs
pub trait Transitivity: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns *true* if for all edges `u → v` and `v → w` with `u != w`
    /// the edge `u → w` exists as well
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArrayIn::from_edges(3, [(0, 1), (1, 2)]);
    /// assert!(!g.is_transitive());
    ///
    /// g.add_edge(0, 2);
    /// assert!(g.is_transitive());
    /// ```
    fn is_transitive(&self) -> bool {
        let mut successors = self.vertex_bitset_unset();

        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                successors.set_bit(v);
            }

            let closed = self.neighbors_of(u).all(|v| {
                self.neighbors_of(v)
                    .all(|w| w == u || successors.get_bit(w))
            });

            for v in self.neighbors_of(u) {
                successors.clear_bit(v);
            }

            if !closed {
                return false;
            }
        }

        true
    }
}

impl<G> Transitivity for G where G: AdjacencyList + GraphType<Dir = Directed> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    fn orient(graph: &AdjArrayUndir) -> Option<Vec<Edge>> {
        graph
            .transitive_orientation::<AdjArrayIn>()
            .map(|d| d.ordered_edges(false).collect_vec())
    }

    #[test]
    fn known_orientations() {
        // a b c d e f g
        // 0 1 2 3 4 5 6
        let g = AdjArrayUndir::from_edges(
            7,
            [(0, 1), (0, 6), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5), (5, 6)],
        );
        assert_eq!(
            orient(&g).unwrap(),
            vec![
                Edge(0, 1),
                Edge(0, 6),
                Edge(2, 1),
                Edge(2, 3),
                Edge(4, 3),
                Edge(5, 3),
                Edge(5, 4),
                Edge(5, 6)
            ]
        );

        let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
        assert_eq!(
            orient(&g).unwrap(),
            vec![Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(1, 2), Edge(3, 2)]
        );

        let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(
            orient(&g).unwrap(),
            vec![Edge(0, 1), Edge(0, 3), Edge(2, 1), Edge(2, 3)]
        );
    }

    #[test]
    fn complete_graphs_are_ordered() {
        for n in 0..8 {
            let mut g = AdjArrayUndir::new(n);
            g.connect_clique(0..n);

            let expected = (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)).collect_vec();
            assert_eq!(orient(&g).unwrap(), expected);
        }
    }

    #[test]
    fn odd_cycles_are_no_comparability_graphs() {
        for n in [5 as NumNodes, 7, 9] {
            let mut g = AdjArrayUndir::new(n);
            g.connect_cycle(0..n);
            assert!(!g.is_comparability());
            assert!(orient(&g).is_none());
        }

        for n in [3 as NumNodes, 4, 6, 8] {
            let mut g = AdjArrayUndir::new(n);
            g.connect_cycle(0..n);
            assert!(g.is_comparability());
        }
    }

    #[test]
    fn implication_classes_of_small_graphs() {
        // triangle: every arc is its own class
        let mut g = AdjArrayUndir::new(3);
        g.connect_clique(0..3);
        assert_eq!(g.implication_classes().len(), 6);

        // C4: one class and its reverse
        let mut g = AdjArrayUndir::new(4);
        g.connect_cycle(0..4);
        assert_eq!(
            g.implication_classes(),
            vec![
                vec![Edge(0, 1), Edge(0, 3), Edge(2, 1), Edge(2, 3)],
                vec![Edge(1, 0), Edge(1, 2), Edge(3, 0), Edge(3, 2)],
            ]
        );

        // C5: a single class containing every arc
        let mut g = AdjArrayUndir::new(5);
        g.connect_cycle(0..5);
        let classes = g.implication_classes();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].len(), 10);
    }

    #[test]
    fn random_orientations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for n in [2 as NumNodes, 5, 8, 12] {
            for p in [0.1, 0.3, 0.5, 0.8] {
                for _ in 0..10 {
                    let g = AdjArrayUndir::gnp_no_loops(rng, n, p);

                    let classes_valid = g.implication_classes().iter().all(|class| {
                        class.iter().all(|e| !class.contains(&e.reverse()))
                    });

                    let Some(d) = g.transitive_orientation::<AdjArrayIn>() else {
                        assert!(!classes_valid);
                        continue;
                    };
                    assert!(classes_valid);

                    assert_eq!(d.number_of_edges(), g.number_of_edges());
                    for Edge(u, v) in d.edges(false) {
                        assert!(g.has_edge(u, v));
                        assert!(!d.has_edge(v, u));
                    }
                    assert!(d.is_transitive());
                    assert!(d.is_acyclic());

                    // any tie-break yields a valid orientation
                    let mut ranking = (0..n).collect_vec();
                    ranking.shuffle(rng);
                    let d: AdjArrayIn = TransitiveOrientation::new()
                        .ranking(ranking)
                        .compute(&g)
                        .unwrap();
                    assert_eq!(d.number_of_edges(), g.number_of_edges());
                    assert!(d.is_transitive());
                }
            }
        }
    }

    /// Asserts that `d` orients every edge of `g` exactly once, transitively and acyclically
    fn assert_transitive_orientation_of(d: &AdjArrayIn, g: &AdjArrayUndir) {
        assert_eq!(d.number_of_edges(), g.number_of_edges());
        assert_eq!(
            d.edges(false).map(|e| e.normalized()).sorted_unstable().collect_vec(),
            g.ordered_edges(true).collect_vec()
        );
        assert!(d.edges(false).all(|Edge(u, v)| !d.has_edge(v, u)));
        assert!(d.is_transitive());
        assert!(d.is_acyclic());
    }

    #[test]
    fn orients_random_posets() {
        let rng = &mut Pcg64Mcg::seed_from_u64(32);

        for n in [20 as NumNodes, 30, 40, 50] {
            for p in [0.02, 0.1, 0.3] {
                for _ in 0..3 {
                    let g = AdjArrayUndir::random_poset(rng, n, p);
                    let d = g.transitive_orientation::<AdjArrayIn>().unwrap();
                    assert_transitive_orientation_of(&d, &g);

                    let mut ranking = (0..n).collect_vec();
                    ranking.shuffle(rng);
                    let d: AdjArrayIn = TransitiveOrientation::new()
                        .ranking(ranking)
                        .compute(&g)
                        .unwrap();
                    assert_transitive_orientation_of(&d, &g);

                    assert!(
                        g.implication_classes()
                            .iter()
                            .all(|class| class.iter().all(|e| !class.contains(&e.reverse())))
                    );
                }
            }
        }
    }

    #[test]
    fn orients_interval_complements() {
        let rng = &mut Pcg64Mcg::seed_from_u64(33);

        for n in [20 as NumNodes, 30, 40, 50] {
            for _ in 0..3 {
                let mut g = AdjArrayUndir::random_intervals(rng, n);
                g.complement_in_place();

                let d = g.transitive_orientation::<AdjArrayIn>().unwrap();
                assert_transitive_orientation_of(&d, &g);
            }
        }
    }

    #[test]
    fn transitivity() {
        let g = AdjArrayIn::new(0);
        assert!(g.is_transitive());

        let mut g = AdjArrayIn::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 2), (1, 3)]);
        assert!(!g.is_transitive());
        g.add_edge(0, 3);
        assert!(g.is_transitive());
    }
}
