/*!
# Bipartite Graph Algorithms

Testing whether a graph is bipartite and computing a bipartition if one exists.

A bipartition is a [`NodeBitSet`]: nodes in the set are on the **right** (1) side,
all other nodes on the **left** (0) side.
*/

use super::{traversal::*, *};

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. whether every edge crosses the two sides.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(10);
    /// g.connect_path(0..10 as Node);
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(10, vec![0 as Node, 2, 4, 6, 8])));
    /// ```
    fn is_bipartition(&self, bipartition: &NodeBitSet) -> bool;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(10);
    /// g.connect_path(0..10 as Node);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.cardinality(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet>;

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(3);
    /// g.connect_path([0, 1, 2]);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge(2, 0);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, bipartition: &NodeBitSet) -> bool {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.get_bit(u) != bipartition.get_bit(v))
    }

    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }
}

/// Computes a candidate bipartition of the graph by 2-colouring BFS trees.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> NodeBitSet
where
    G: AdjacencyList,
{
    let mut bipartition = graph.vertex_bitset_unset();
    if graph.is_empty() {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if !bipartition.get_bit(pred) {
                bipartition.set_bit(node);
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}
