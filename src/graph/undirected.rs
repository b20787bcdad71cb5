use stream_bitset::prelude::*;

use super::*;

/// A simple undirected graph over vertices of type `V`.
///
/// Edges are unordered pairs of distinct vertices and reported as `Edge(min, max)`.
///
/// # Examples
/// ```
/// use lexgraphs::prelude::*;
///
/// let g = UndirectedGraph::from_adjacency([
///     ("a", vec!["b", "c"]),
///     ("b", vec!["c", "d", "e"]),
///     ("c", vec!["d"]),
///     ("d", vec!["e"]),
/// ])
/// .unwrap();
///
/// assert_eq!(g.lexicographic_bfs(), vec!["a", "b", "c", "d", "e"]);
/// assert!(g.is_chordal());
/// assert_eq!(
///     g.complement().edges(),
///     vec![Edge("a", "d"), Edge("a", "e"), Edge("c", "e")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    store: GraphStore<V, AdjArrayUndir>,
}

impl<V: Vertex> Graph<V> for UndirectedGraph<V> {
    type Repr = AdjArrayUndir;

    fn store(&self) -> &GraphStore<V, AdjArrayUndir> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut GraphStore<V, AdjArrayUndir> {
        &mut self.store
    }

    fn from_store(store: GraphStore<V, AdjArrayUndir>) -> Self {
        Self { store }
    }
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        <Self as Graph<V>>::new()
    }
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Returns all edges incident to `v` sorted
    pub fn edges_on_vertex(&self, v: &V) -> GraphResult<Vec<Edge<V>>, V> {
        let u = self.store.node_of(v)?;
        Ok(self
            .store
            .graph()
            .neighbors_of(u)
            .map(|w| Edge(v.clone(), self.store.label(w).clone()).normalized())
            .sorted_unstable()
            .collect())
    }

    /// Returns all edges that share exactly one endpoint with the edge `{u, v}` sorted
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::prelude::*;
    ///
    /// let g = UndirectedGraph::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
    /// assert_eq!(g.adjacent_edges(&"b", &"a").unwrap(), vec![Edge("a", "c"), Edge("b", "c")]);
    /// assert_eq!(g.adjacent_edges(&"a", &"d"), Err(GraphError::UnknownVertex("d")));
    /// ```
    pub fn adjacent_edges(&self, u: &V, v: &V) -> GraphResult<Vec<Edge<V>>, V> {
        let nu = self.store.node_of(u)?;
        let nv = self.store.node_of(v)?;
        if !self.store.graph().has_edge(nu, nv) {
            return Err(GraphError::UnknownEdge(u.clone(), v.clone()));
        }

        let graph = self.store.graph();
        Ok([nu, nv]
            .into_iter()
            .flat_map(move |x| graph.neighbors_of(x).map(move |w| (x, w)))
            .filter(|&(_, w)| w != nu && w != nv)
            .map(|(x, w)| self.store.label_edge(Edge(x, w)).normalized())
            .sorted_unstable()
            .collect())
    }

    /// LexBFS that breaks ties by ascending vertices
    fn lex_bfs(&self) -> LexBfs {
        LexBfs::new().ranking(self.store.ranking())
    }

    /// Returns a lexicographic breadth-first ordering of all vertices.
    /// Ties are broken in favor of the smallest vertex, so the ordering starts with the smallest vertex.
    pub fn lexicographic_bfs(&self) -> Vec<V> {
        self.store
            .label_all(self.lex_bfs().compute(self.store.graph()))
    }

    /// Returns a lexicographic breadth-first ordering that starts at `v`
    pub fn lexicographic_bfs_from(&self, v: &V) -> GraphResult<Vec<V>, V> {
        let u = self.store.node_of(v)?;
        Ok(self
            .store
            .label_all(self.lex_bfs().start_at(u).compute(self.store.graph())))
    }

    /// Returns a perfect elimination ordering (the reverse of [`Self::lexicographic_bfs`])
    /// or `None` if the graph is not chordal
    pub fn perfect_elimination_ordering(&self) -> Option<Vec<V>> {
        self.store
            .graph()
            .perfect_elimination_ordering_with(&self.lex_bfs())
            .map(|order| self.store.label_all(order))
    }

    /// Returns *true* if every cycle of length at least 4 has a chord
    pub fn is_chordal(&self) -> bool {
        self.perfect_elimination_ordering().is_some()
    }

    fn orientation(&self) -> TransitiveOrientation {
        TransitiveOrientation::new().ranking(self.store.ranking())
    }

    /// Returns a directed graph on the same vertices that orients every edge such that
    /// the result is transitive, or `None` if the graph is no comparability graph.
    /// Among several orientations, edges at smaller vertices are oriented away from them first.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::prelude::*;
    ///
    /// let g = UndirectedGraph::from_adjacency([
    ///     ('a', vec!['b', 'c', 'd']),
    ///     ('b', vec!['c']),
    ///     ('c', vec!['d']),
    /// ])
    /// .unwrap();
    ///
    /// let d = g.transitive_orientation().unwrap();
    /// assert_eq!(
    ///     d.edges(),
    ///     vec![Edge('a', 'b'), Edge('a', 'c'), Edge('a', 'd'), Edge('b', 'c'), Edge('d', 'c')]
    /// );
    /// ```
    pub fn transitive_orientation(&self) -> Option<DirectedGraph<V>> {
        let orientation: AdjArrayIn = self.orientation().compute(self.store.graph())?;
        Some(DirectedGraph::from_store(
            self.store.with_graph(orientation),
        ))
    }

    /// Returns *true* if the graph admits a transitive orientation
    pub fn is_comparability(&self) -> bool {
        self.transitive_orientation().is_some()
    }

    /// Returns the implication classes of all oriented edges.
    /// Edges within a class as well as the classes (by their first edge) are sorted.
    pub fn implication_classes(&self) -> Vec<Vec<Edge<V>>> {
        self.orientation()
            .implication_classes(self.store.graph())
            .into_iter()
            .map(|class| {
                class
                    .into_iter()
                    .map(|e| self.store.label_edge(e))
                    .collect()
            })
            .collect()
    }

    /// Returns *true* if the vertices can be split into two sides such that every edge
    /// connects both sides
    pub fn is_bipartite(&self) -> bool {
        self.store.graph().is_bipartite()
    }

    /// Returns both sides of a bipartition or `None` if the graph is not bipartite.
    /// In every connected component, the smallest vertex is on the first side.
    /// Both sides are sorted.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::prelude::*;
    ///
    /// let g = UndirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![4]), (3, vec![5])]).unwrap();
    /// assert_eq!(g.bipartition(), Some((vec![1, 4, 5], vec![2, 3])));
    /// ```
    pub fn bipartition(&self) -> Option<(Vec<V>, Vec<V>)> {
        let graph = self.store.graph();
        let colors = graph.compute_bipartition()?;

        let mut left = Vec::new();
        let mut right = Vec::new();

        let by_label = graph
            .vertices()
            .sorted_unstable_by(|&a, &b| self.store.label(a).cmp(self.store.label(b)))
            .collect_vec();
        let Some(&first) = by_label.first() else {
            return Some((left, right));
        };

        let mut bfs = graph.bfs(first);
        for &u in &by_label {
            if u != first && !bfs.try_restart_at(u) {
                continue;
            }

            // u is the smallest vertex of its component
            let flip = colors.get_bit(u);
            for w in bfs.by_ref() {
                let side = if colors.get_bit(w) == flip {
                    &mut left
                } else {
                    &mut right
                };
                side.push(self.store.label(w).clone());
            }
        }

        left.sort_unstable();
        right.sort_unstable();
        Some((left, right))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    fn scenario_1() -> UndirectedGraph<&'static str> {
        UndirectedGraph::from_adjacency([("a", vec!["b", "c"]), ("b", vec!["c"]), ("c", vec![])])
            .unwrap()
    }

    fn scenario_2() -> UndirectedGraph<&'static str> {
        UndirectedGraph::from_adjacency([
            ("a", vec!["b", "c"]),
            ("b", vec!["c", "d", "e"]),
            ("c", vec!["d"]),
            ("d", vec!["e"]),
            ("e", vec![]),
        ])
        .unwrap()
    }

    /// Inserts the nodes of `graph` in random order and its edges in random order and direction
    fn shuffled_copy(rng: &mut impl Rng, graph: &AdjArrayUndir) -> UndirectedGraph<Node> {
        let mut vertices = graph.vertices_range().collect_vec();
        vertices.shuffle(rng);

        let mut edges = graph
            .edges(true)
            .map(|Edge(u, v)| if rng.random_bool(0.5) { (u, v) } else { (v, u) })
            .collect_vec();
        edges.shuffle(rng);

        UndirectedGraph::from_edges(vertices, edges).unwrap()
    }

    #[test]
    fn construction() {
        let g = scenario_1();
        assert_eq!(g.number_of_vertices(), 3);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(
            g.edges(),
            vec![Edge("a", "b"), Edge("a", "c"), Edge("b", "c")]
        );
        assert!(g.is_complete());

        // both directions of a pair are merged
        let g = UndirectedGraph::from_adjacency([("a", vec!["b"]), ("b", vec!["a", "c"])]).unwrap();
        assert_eq!(g.edges(), vec![Edge("a", "b"), Edge("b", "c")]);
        assert!(g.vertex_exists(&"c"));

        assert_eq!(
            UndirectedGraph::from_adjacency([("a", vec!["a"])]).unwrap_err(),
            GraphError::SelfLoop("a")
        );

        assert_eq!(
            UndirectedGraph::from_edges(["a", "b"], [("a", "b"), ("b", "a")]).unwrap_err(),
            GraphError::DuplicateEdge("b", "a")
        );
        assert_eq!(
            UndirectedGraph::from_edges(["a", "b", "a"], []).unwrap_err(),
            GraphError::DuplicateVertex("a")
        );
        assert_eq!(
            UndirectedGraph::from_edges(["a"], [("a", "b")]).unwrap_err(),
            GraphError::UnknownVertex("b")
        );

        let g: UndirectedGraph<u8> = UndirectedGraph::default();
        assert_eq!(g.number_of_vertices(), 0);
        assert!(g.edges().is_empty());
        assert!(g.lexicographic_bfs().is_empty());
        assert!(g.is_chordal());
        assert!(g.is_comparability());
        assert!(g.is_complete());
        assert_eq!(g.bipartition(), Some((vec![], vec![])));
    }

    #[test]
    fn vertex_and_edge_editing() {
        let mut g = scenario_1();

        assert_eq!(
            g.add_vertices(["d", "e", "a"]),
            Err(GraphError::DuplicateVertex("a"))
        );
        assert!(!g.vertex_exists(&"d"));
        g.add_vertices(["d", "e"]).unwrap();
        assert_eq!(g.add_vertex("e"), Err(GraphError::DuplicateVertex("e")));

        assert_eq!(g.add_edge(&"a", &"x"), Err(GraphError::UnknownVertex("x")));
        assert_eq!(g.add_edge(&"d", &"d"), Err(GraphError::SelfLoop("d")));
        assert_eq!(
            g.add_edge(&"c", &"a"),
            Err(GraphError::DuplicateEdge("c", "a"))
        );
        g.add_edge(&"d", &"a").unwrap();

        assert!(g.edge_exists(&"a", &"d"));
        assert!(!g.edge_exists(&"a", &"x"));
        assert!(!g.edge_exists(&"x", &"y"));

        g.remove_edge(&"a", &"d").unwrap();
        assert_eq!(
            g.remove_edge(&"a", &"d"),
            Err(GraphError::UnknownEdge("a", "d"))
        );
        assert_eq!(
            g.remove_edge(&"a", &"x"),
            Err(GraphError::UnknownVertex("x"))
        );

        g.remove_vertex(&"b").unwrap();
        assert_eq!(g.edges(), vec![Edge("a", "c")]);
        assert_eq!(g.remove_vertex(&"b"), Err(GraphError::UnknownVertex("b")));
        assert_eq!(g.vertices().copied().sorted().collect_vec(), vec!["a", "c", "d", "e"]);
    }

    #[test]
    fn neighborhood_queries() {
        let g = scenario_1();
        assert_eq!(g.degree(&"a"), Ok(2));
        assert_eq!(g.degree(&"x"), Err(GraphError::UnknownVertex("x")));
        assert_eq!(g.neighbors_of_vertex(&"c"), Ok(vec!["a", "b"]));
        assert_eq!(
            g.edges_on_vertex(&"b"),
            Ok(vec![Edge("a", "b"), Edge("b", "c")])
        );
        assert_eq!(
            g.adjacent_edges(&"a", &"b"),
            Ok(vec![Edge("a", "c"), Edge("b", "c")])
        );

        let g = scenario_2();
        assert_eq!(
            g.adjacent_edges(&"c", &"a"),
            Ok(vec![Edge("a", "b"), Edge("b", "c"), Edge("c", "d")])
        );
        assert_eq!(
            g.adjacent_edges(&"a", &"e"),
            Err(GraphError::UnknownEdge("a", "e"))
        );
        assert_eq!(
            g.adjacent_edges(&"d", &"e"),
            Ok(vec![Edge("b", "d"), Edge("b", "e"), Edge("c", "d")])
        );
    }

    #[test]
    fn lexicographic_bfs_and_chordality() {
        let mut g = scenario_2();
        assert_eq!(g.lexicographic_bfs(), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(
            g.lexicographic_bfs_from(&"e"),
            Ok(vec!["e", "b", "d", "c", "a"])
        );
        assert_eq!(
            g.lexicographic_bfs_from(&"x"),
            Err(GraphError::UnknownVertex("x"))
        );

        assert!(g.is_chordal());
        assert_eq!(
            g.perfect_elimination_ordering(),
            Some(vec!["e", "d", "c", "b", "a"])
        );

        g.remove_edge(&"b", &"c").unwrap();
        assert!(!g.is_chordal());
        assert_eq!(g.perfect_elimination_ordering(), None);
    }

    #[test]
    fn comparability() {
        let g = UndirectedGraph::from_adjacency([
            ("a", vec!["b", "g"]),
            ("b", vec!["c"]),
            ("c", vec!["d"]),
            ("d", vec!["e", "f"]),
            ("e", vec!["f"]),
            ("f", vec!["g"]),
            ("g", vec![]),
        ])
        .unwrap();
        assert!(g.is_comparability());
        assert_eq!(
            g.transitive_orientation().unwrap().edges(),
            vec![
                Edge("a", "b"),
                Edge("a", "g"),
                Edge("c", "b"),
                Edge("c", "d"),
                Edge("e", "d"),
                Edge("f", "d"),
                Edge("f", "e"),
                Edge("f", "g"),
            ]
        );

        let g = UndirectedGraph::from_adjacency([
            ("a", vec!["b", "g"]),
            ("b", vec!["c"]),
            ("c", vec!["d"]),
            ("d", vec!["e"]),
            ("e", vec!["f"]),
            ("f", vec!["g"]),
            ("g", vec![]),
        ])
        .unwrap();
        assert!(!g.is_comparability());
        assert!(g.transitive_orientation().is_none());
        assert_eq!(g.implication_classes().len(), 1);

        let g = UndirectedGraph::from_adjacency([
            ("a", vec!["b", "c", "d"]),
            ("b", vec!["c"]),
            ("c", vec!["d"]),
            ("d", vec![]),
        ])
        .unwrap();
        let d = g.transitive_orientation().unwrap();
        assert_eq!(
            d.edges(),
            vec![
                Edge("a", "b"),
                Edge("a", "c"),
                Edge("a", "d"),
                Edge("b", "c"),
                Edge("d", "c"),
            ]
        );
        assert_eq!(d.to_undirected().edges(), g.edges());
    }

    #[test]
    fn predicates() {
        let g = scenario_2();
        assert_eq!(g.is_clique(&["a", "b", "c"]), Ok(true));
        assert_eq!(g.is_clique(&["b", "c", "e"]), Ok(false));
        assert_eq!(g.is_clique(&["b", "b"]), Ok(true));
        assert_eq!(g.is_clique(&[]), Ok(true));
        assert_eq!(
            g.is_clique(&["a", "x"]),
            Err(GraphError::UnknownVertex("x"))
        );
        assert!(!g.is_complete());

        let g = UndirectedGraph::from_adjacency([
            ("a", vec!["b", "c", "d"]),
            ("b", vec!["c", "d"]),
            ("c", vec!["d"]),
        ])
        .unwrap();
        assert!(g.is_complete());

        let g = UndirectedGraph::from_adjacency([("a", vec!["b", "c"]), ("b", vec!["d"]), ("c", vec!["e"])])
            .unwrap();
        assert!(g.is_bipartite());
        assert_eq!(
            g.bipartition(),
            Some((vec!["a", "d", "e"], vec!["b", "c"]))
        );

        assert!(!scenario_1().is_bipartite());
        assert_eq!(scenario_1().bipartition(), None);

        // each component keeps its smallest vertex on the first side
        let g = UndirectedGraph::from_adjacency([("d", vec!["c"]), ("f", vec!["e"]), ("b", vec!["a", "c"])])
            .unwrap();
        assert_eq!(
            g.bipartition(),
            Some((vec!["a", "c", "e"], vec!["b", "d", "f"]))
        );
    }

    #[test]
    fn complements() {
        let mut g = scenario_2();
        assert_eq!(
            g.complement().edges(),
            vec![Edge("a", "d"), Edge("a", "e"), Edge("c", "e")]
        );

        g.complement_in_place();
        assert_eq!(
            g.edges(),
            vec![Edge("a", "d"), Edge("a", "e"), Edge("c", "e")]
        );
        g.complement_in_place();
        assert_eq!(g.edges(), scenario_2().edges());
    }

    #[test]
    fn independent_of_insertion_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(71);

        for n in [1 as NumNodes, 4, 9, 14] {
            for p in [0.2, 0.5, 0.8] {
                for _ in 0..5 {
                    let graph = AdjArrayUndir::gnp_no_loops(rng, n, p);
                    let g = shuffled_copy(rng, &graph);

                    assert_eq!(g.edges(), graph.ordered_edges(true).collect_vec());
                    assert_eq!(g.lexicographic_bfs(), graph.lex_bfs());
                    assert_eq!(
                        g.perfect_elimination_ordering(),
                        graph.perfect_elimination_ordering()
                    );
                    assert_eq!(g.implication_classes(), graph.implication_classes());
                    assert_eq!(
                        g.transitive_orientation().map(|d| d.edges()),
                        graph
                            .transitive_orientation::<AdjArrayIn>()
                            .map(|d| d.ordered_edges(false).collect_vec())
                    );

                    let u = rng.random_range(0..n);
                    assert_eq!(g.lexicographic_bfs_from(&u), Ok(graph.lex_bfs_from(u)));
                }
            }
        }
    }

    #[test]
    fn random_graph_properties() {
        let rng = &mut Pcg64Mcg::seed_from_u64(72);

        for n in [2 as NumNodes, 6, 10] {
            for p in [0.1, 0.4, 0.7, 0.95] {
                for _ in 0..8 {
                    let graph = AdjArrayUndir::gnp_no_loops(rng, n, p);
                    let mut g = shuffled_copy(rng, &graph);

                    // remove some vertices to move nodes around
                    for _ in 0..rng.random_range(0..n) {
                        let v = *g.vertices().nth(rng.random_range(0..g.number_of_vertices())).unwrap();
                        g.remove_vertex(&v).unwrap();
                    }

                    let mut order = g.lexicographic_bfs();
                    order.sort_unstable();
                    assert_eq!(order, g.vertices().copied().sorted().collect_vec());

                    let classes_valid = g
                        .implication_classes()
                        .iter()
                        .all(|class| class.iter().all(|e| !class.contains(&e.reverse())));
                    assert_eq!(g.is_comparability(), classes_valid);

                    if let Some(d) = g.transitive_orientation() {
                        assert_eq!(d.to_undirected().edges(), g.edges());
                        assert_eq!(d.number_of_edges(), g.number_of_edges());
                        for Edge(u, v) in d.edges() {
                            assert!(!d.edge_exists(&v, &u));
                        }
                        assert!(d.is_transitive());
                        assert!(d.is_acyclic());
                    }

                    assert_eq!(g.complement().complement().edges(), g.edges());
                    let all = g.vertices().copied().collect_vec();
                    assert_eq!(g.is_complete(), g.is_clique(&all).unwrap());

                    if let Some((left, right)) = g.bipartition() {
                        assert_eq!(left.len() + right.len(), g.number_of_vertices());
                        for Edge(u, v) in g.edges() {
                            assert_ne!(left.contains(&u), left.contains(&v));
                        }
                    }
                }
            }
        }
    }

    /// Removes up to `k` random vertices; all generated classes are closed under induced subgraphs
    fn remove_random_vertices(rng: &mut impl Rng, g: &mut UndirectedGraph<Node>, k: usize) {
        for _ in 0..k.min(g.number_of_vertices()) {
            let v = *g.vertices().nth(rng.random_range(0..g.number_of_vertices())).unwrap();
            g.remove_vertex(&v).unwrap();
        }
    }

    #[test]
    fn recognizes_generated_classes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(73);

        for n in [20 as NumNodes, 35, 50] {
            for _ in 0..3 {
                let poset = AdjArrayUndir::random_poset(rng, n, 0.1);
                let mut g = shuffled_copy(rng, &poset);
                remove_random_vertices(rng, &mut g, 5);

                assert!(g.is_comparability());
                let d = g.transitive_orientation().unwrap();
                assert_eq!(d.number_of_edges(), g.number_of_edges());
                assert_eq!(d.to_undirected().edges(), g.edges());
                assert!(d.is_transitive());
                assert!(d.is_acyclic());

                let intervals = AdjArrayUndir::random_intervals(rng, n);
                let mut g = shuffled_copy(rng, &intervals);
                remove_random_vertices(rng, &mut g, 5);

                assert!(g.is_chordal());
                let peo = g.perfect_elimination_ordering().unwrap();
                assert_eq!(peo.len(), g.number_of_vertices());
                assert!(g.complement().is_comparability());

                let split = AdjArrayUndir::random_split(rng, n);
                let g = shuffled_copy(rng, &split);
                assert!(g.is_chordal());
            }
        }
    }
}
