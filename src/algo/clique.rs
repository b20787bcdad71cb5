use super::*;

/// Tests for cliques and complete graphs
pub trait CliqueTest: AdjacencyList + AdjacencyTest {
    /// Returns *true* if every two distinct nodes of `nodes` are connected.
    /// Repeated nodes are ignored; the empty set and single nodes are cliques.
    /// For directed graphs both directions are required.
    /// ** Panics if any node is `>= n` **
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (1, 2), (2, 3)]);
    /// assert!(g.is_clique([0, 1, 2]));
    /// assert!(g.is_clique([2, 3, 3]));
    /// assert!(!g.is_clique([1, 2, 3]));
    /// ```
    fn is_clique<I>(&self, nodes: I) -> bool
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().sorted_unstable().dedup().collect_vec();
        let mut marker = self.vertex_bitset_unset();

        // out-neighbors of every member cover both directions of every pair
        nodes.iter().all(|&u| {
            marker.set_bits(self.neighbors_of(u));
            let covered = nodes.iter().all(|&v| v == u || marker.get_bit(v));
            for v in self.neighbors_of(u) {
                marker.clear_bit(v);
            }
            covered
        })
    }

    /// Returns *true* if every two distinct nodes of the graph are connected
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjArrayUndir::from_edges(3, [(0, 1), (0, 2)]);
    /// assert!(!g.is_complete());
    /// g.add_edge(1, 2);
    /// assert!(g.is_complete());
    /// ```
    fn is_complete(&self) -> bool {
        let n = self.number_of_nodes();
        self.vertices()
            .all(|u| self.neighbors_of(u).filter(|&v| v != u).count() as NumNodes + 1 == n)
    }
}

impl<G> CliqueTest for G where G: AdjacencyList + AdjacencyTest {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn trivial_cliques() {
        let g = AdjArrayUndir::new(3);
        assert!(g.is_clique([]));
        assert!(g.is_clique([1]));
        assert!(!g.is_clique([0, 1]));
        assert!(!g.is_complete());

        assert!(AdjArrayUndir::new(0).is_complete());
        assert!(AdjArrayUndir::new(1).is_complete());
    }

    #[test]
    fn directed_cliques_need_both_directions() {
        let mut g = AdjArrayIn::from_edges(2, [(0, 1)]);
        assert!(!g.is_clique([0, 1]));
        assert!(!g.is_complete());

        g.add_edge(1, 0);
        assert!(g.is_clique([0, 1]));
        assert!(g.is_complete());
    }

    #[test]
    fn matches_pairwise_adjacency() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for n in [5 as NumNodes, 20, 50] {
            for p in [0.3, 0.8, 0.97] {
                let undirected = AdjArrayUndir::gnp_no_loops(rng, n, p);
                let directed = AdjArrayIn::gnp_no_loops(rng, n, p);

                for _ in 0..20 {
                    let k = rng.random_range(0..=n.min(8));
                    let nodes = (0..k).map(|_| rng.random_range(0..n)).collect_vec();

                    let pairwise = |adjacent: &dyn Fn(Node, Node) -> bool| {
                        nodes
                            .iter()
                            .tuple_combinations()
                            .all(|(&u, &v)| u == v || (adjacent(u, v) && adjacent(v, u)))
                    };

                    assert_eq!(
                        undirected.is_clique(nodes.iter().copied()),
                        pairwise(&|u, v| undirected.has_edge(u, v))
                    );
                    assert_eq!(
                        directed.is_clique(nodes.iter().copied()),
                        pairwise(&|u, v| directed.has_edge(u, v))
                    );
                }
            }
        }

        // a large planted clique inside a sparse graph
        let mut g = SparseAdjArrayUndir::gnp_no_loops(rng, 200, 0.05);
        g.connect_clique(50..150);
        assert!(g.is_clique(50..150));
        assert!(g.is_clique((50..150).rev().chain(60..70)));

        g.remove_edge(50, 149);
        assert!(!g.is_clique(50..150));
        assert!(g.is_clique(51..150));
    }

    #[test]
    fn complete_iff_clique_of_all_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);

        for n in [1 as NumNodes, 2, 4, 6] {
            for p in [0.5, 0.9, 1.0] {
                for _ in 0..10 {
                    let mut g = AdjArrayUndir::gnp_no_loops(rng, n, p);
                    assert_eq!(g.is_complete(), g.is_clique(g.vertices_range()));

                    g.connect_clique(0..n);
                    assert!(g.is_complete());
                    assert!(g.is_clique(g.vertices_range()));
                }
            }
        }
    }
}
