/*!
# Chordality

A graph is chordal iff it has a *perfect elimination ordering* (PEO): an ordering in
which the neighbors of every node that are eliminated later form a clique.
The reverse of any LexBFS ordering is a PEO exactly if the graph is chordal
(Rose, Tarjan & Lueker), so recognition costs one LexBFS plus one PEO check.

The PEO check avoids testing each later-neighborhood `L(v)` for being a clique directly:
with `p(v)` the member of `L(v)` eliminated first, all `L(v)` are cliques iff
`L(v) \ {p(v)} ⊆ N(p(v))` for every `v`. These containments are checked in batches
grouped by `p(v)`, marking `N(p(v))` once per batch, for `O(n + m)` total.
*/

use super::*;
use tracing::debug;

/// Recognition of chordal graphs
pub trait Chordality: AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns *true* if `order` is a perfect elimination ordering of the graph.
    /// Returns *false* if `order` is not a permutation of all nodes.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// // triangle 0-1-2 with a pendant node 3 at 2
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]);
    /// assert!(g.is_perfect_elimination_ordering(&[3, 0, 1, 2]));
    /// assert!(!g.is_perfect_elimination_ordering(&[2, 0, 1, 3]));
    /// ```
    fn is_perfect_elimination_ordering(&self, order: &[Node]) -> bool;

    /// Returns a perfect elimination ordering derived from the given LexBFS configuration,
    /// or `None` if the graph is not chordal
    fn perfect_elimination_ordering_with(&self, lex_bfs: &LexBfs) -> Option<Vec<Node>> {
        let mut order = lex_bfs.compute(self);
        order.reverse();
        self.is_perfect_elimination_ordering(&order)
            .then_some(order)
    }

    /// Returns a perfect elimination ordering or `None` if the graph is not chordal
    fn perfect_elimination_ordering(&self) -> Option<Vec<Node>> {
        self.perfect_elimination_ordering_with(&LexBfs::new())
    }

    /// Returns *true* if every cycle of length at least 4 has a chord
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_cycle([0, 1, 2, 3]);
    /// assert!(!g.is_chordal());
    ///
    /// g.add_edge(0, 2);
    /// assert!(g.is_chordal());
    /// ```
    fn is_chordal(&self) -> bool {
        let chordal = self.perfect_elimination_ordering().is_some();
        debug!(nodes = self.number_of_nodes(), chordal, "chordality test");
        chordal
    }
}

impl<G> Chordality for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn is_perfect_elimination_ordering(&self, order: &[Node]) -> bool {
        let n = self.number_of_nodes();
        if order.len() != n as usize {
            return false;
        }

        let mut pos = vec![INVALID_NODE; n as usize];
        for (i, &u) in order.iter().enumerate() {
            if u >= n || pos[u as usize] != INVALID_NODE {
                return false;
            }
            pos[u as usize] = i as Node;
        }

        // children[p] holds all v with p(v) = p
        let mut children = vec![Vec::new(); n as usize];
        for v in self.vertices() {
            let parent = self
                .neighbors_of(v)
                .filter(|&w| pos[w as usize] > pos[v as usize])
                .min_by_key(|&w| pos[w as usize]);

            if let Some(p) = parent {
                children[p as usize].push(v);
            }
        }

        let mut marker = self.vertex_bitset_unset();
        for p in self.vertices() {
            if children[p as usize].is_empty() {
                continue;
            }

            for w in self.neighbors_of(p) {
                marker.set_bit(w);
            }

            for &v in &children[p as usize] {
                let violation = self.neighbors_of(v).find(|&w| {
                    pos[w as usize] > pos[v as usize] && w != p && !marker.get_bit(w)
                });

                if let Some(w) = violation {
                    debug!(node = v, parent = p, missing = w, "later neighborhood is no clique");
                    return false;
                }
            }

            for w in self.neighbors_of(p) {
                marker.clear_bit(w);
            }
        }

        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    /// Chordal iff repeatedly deleting simplicial nodes empties the graph
    fn naive_is_chordal(graph: &AdjArrayUndir) -> bool {
        let mut alive = (0..graph.number_of_nodes()).collect_vec();
        while !alive.is_empty() {
            let simplicial = alive.iter().position(|&v| {
                alive
                    .iter()
                    .filter(|&&w| w != v && graph.has_edge(v, w))
                    .tuple_combinations()
                    .all(|(&a, &b)| graph.has_edge(a, b))
            });

            match simplicial {
                Some(i) => {
                    alive.swap_remove(i);
                }
                None => return false,
            }
        }
        true
    }

    #[test]
    fn small_graphs() {
        assert!(AdjArrayUndir::new(0).is_chordal());
        assert!(AdjArrayUndir::new(1).is_chordal());
        assert!(AdjArrayUndir::new(5).is_chordal());

        for n in 4..10 {
            let mut cycle = AdjArrayUndir::new(n);
            cycle.connect_cycle(0..n);
            assert!(!cycle.is_chordal());
            assert!(cycle.perfect_elimination_ordering().is_none());

            let mut clique = AdjArrayUndir::new(n);
            clique.connect_clique(0..n);
            assert!(clique.is_chordal());

            let mut path = AdjArrayUndir::new(n);
            path.connect_path(0..n);
            let peo = path.perfect_elimination_ordering().unwrap();
            assert!(path.is_perfect_elimination_ordering(&peo));
        }
    }

    #[test]
    fn rejects_non_permutations() {
        let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        assert!(g.is_perfect_elimination_ordering(&[0, 1, 2]));
        assert!(!g.is_perfect_elimination_ordering(&[0, 1]));
        assert!(!g.is_perfect_elimination_ordering(&[0, 1, 1]));
        assert!(!g.is_perfect_elimination_ordering(&[0, 1, 3]));
    }

    #[test]
    fn edge_removal_breaks_chordality() {
        let mut g = AdjArrayUndir::from_edges(
            5,
            [(0, 1), (0, 2), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)],
        );
        assert!(g.is_chordal());

        // leaves the chordless cycle 0 - 1 - 3 - 2
        g.remove_edge(1, 2);
        assert!(!g.is_chordal());
    }

    #[test]
    fn matches_simplicial_elimination() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for n in [3 as NumNodes, 6, 9, 12] {
            for p in [0.2, 0.5, 0.8, 0.95] {
                for _ in 0..10 {
                    let graph = AdjArrayUndir::gnp_no_loops(rng, n, p);
                    let expected = naive_is_chordal(&graph);

                    assert_eq!(graph.is_chordal(), expected);
                    if let Some(peo) = graph.perfect_elimination_ordering() {
                        assert!(graph.is_perfect_elimination_ordering(&peo));
                    }

                    // independent of the node numbering
                    let mut perm = (0..n).collect_vec();
                    perm.shuffle(rng);
                    let relabelled = AdjArrayUndir::from_edges(
                        n,
                        graph.edges(true).map(|Edge(u, v)| Edge(perm[u as usize], perm[v as usize])),
                    );
                    assert_eq!(relabelled.is_chordal(), expected);
                }
            }
        }
    }

    #[test]
    fn recognizes_interval_and_split_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(22);

        for n in [20 as NumNodes, 30, 40, 50] {
            for _ in 0..3 {
                let intervals = AdjArrayUndir::random_intervals(rng, n);
                let split = AdjArrayUndir::random_split(rng, n);

                for graph in [intervals, split] {
                    assert!(graph.is_chordal());
                    let peo = graph.perfect_elimination_ordering().unwrap();
                    assert!(graph.is_perfect_elimination_ordering(&peo));

                    let mut ranking = (0..n).collect_vec();
                    ranking.shuffle(rng);
                    let peo = graph
                        .perfect_elimination_ordering_with(&LexBfs::new().ranking(ranking))
                        .unwrap();
                    assert!(graph.is_perfect_elimination_ordering(&peo));
                }
            }
        }

        // dropping one chord of a split graph leaves a chordless four-cycle
        let mut g = AdjArrayUndir::new(4);
        g.connect_clique([0, 1]);
        g.connect_path([2, 0, 3]);
        g.connect_path([2, 1, 3]);
        assert!(g.is_chordal());
        assert!(naive_is_chordal(&g));
        g.remove_edge(0, 1);
        assert!(!g.is_chordal());
        assert!(!naive_is_chordal(&g));
    }
}
