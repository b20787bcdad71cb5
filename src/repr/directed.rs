/*!
# Directed Graph Representations

[`IndexedDirected`] stores **both outgoing and incoming neighborhoods**, so that
`in_neighbors_of` and `in_degree_of` cost as much as their outgoing counterparts.
Every edit updates both sides.

## Provided Representations

- [`AdjArrayIn`]: adjacency arrays for outgoing and incoming neighbors.
- [`SparseAdjArrayIn`]: sparse adjacency arrays using inline small vectors.
*/

use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing **both outgoing and incoming neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `InNbs`: [`Neighborhood`] implementation used for incoming adjacency.
#[derive(Clone)]
pub struct IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays for both outgoing and incoming neighborhoods.
pub type AdjArrayIn = IndexedDirected<ArrNeighborhood, ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays for both outgoing and incoming neighborhoods.
pub type SparseAdjArrayIn = IndexedDirected<SparseNeighborhood, SparseNeighborhood>;

impl_common_graph_ops!(IndexedDirected<out_nbs : OutNbs, in_nbs : InNbs> => out_nbs, Directed);

impl<OutNbs, InNbs> DirectedAdjacencyList for IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[u as usize].neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs, InNbs> AdjacencyTest for IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            self.in_nbs[v as usize].add_neighbor(u);
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.in_nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<OutNbs, InNbs> GraphDirectedEdgeEditing for IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn remove_edges_into_node(&mut self, u: Node) {
        let in_nbs = std::mem::take(&mut self.in_nbs[u as usize]);
        for v in in_nbs.neighbors() {
            assert!(self.out_nbs[v as usize].try_remove_neighbor(u));
        }
        self.num_edges -= in_nbs.num_of_neighbors() as NumEdges;
    }

    fn remove_edges_out_of_node(&mut self, u: Node) {
        let out_nbs = std::mem::take(&mut self.out_nbs[u as usize]);
        for v in out_nbs.neighbors() {
            assert!(self.in_nbs[v as usize].try_remove_neighbor(u));
        }
        self.num_edges -= out_nbs.num_of_neighbors() as NumEdges;
    }
}

impl<OutNbs, InNbs> GraphLocalEdgeEditing for IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn remove_edges_at_node(&mut self, u: Node) {
        self.remove_edges_into_node(u);
        self.remove_edges_out_of_node(u);
    }
}

impl<OutNbs, InNbs> GraphNodeEditing for IndexedDirected<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn add_node(&mut self) -> Node {
        self.out_nbs.push(OutNbs::default());
        self.in_nbs.push(InNbs::default());
        self.number_of_nodes() - 1
    }

    fn swap_remove_node(&mut self, u: Node) -> Option<Node> {
        self.remove_edges_at_node(u);

        let last = self.number_of_nodes() - 1;
        self.out_nbs.swap_remove(u as usize);
        self.in_nbs.swap_remove(u as usize);
        if u == last {
            return None;
        }

        let mut out_nbs = std::mem::take(&mut self.out_nbs[u as usize]);
        let mut in_nbs = std::mem::take(&mut self.in_nbs[u as usize]);

        // a self-loop at `last` lives in both moved neighborhoods
        out_nbs.replace_neighbor(last, u);
        in_nbs.replace_neighbor(last, u);

        for v in out_nbs.neighbors().filter(|&v| v != u) {
            self.in_nbs[v as usize].replace_neighbor(last, u);
        }
        for v in in_nbs.neighbors().filter(|&v| v != u) {
            self.out_nbs[v as usize].replace_neighbor(last, u);
        }

        self.out_nbs[u as usize] = out_nbs;
        self.in_nbs[u as usize] = in_nbs;

        Some(last)
    }
}

test_graph_ops!(
    test_adj_array_in,
    AdjArrayIn,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphDirectedEdgeEditing,
        GraphNodeEditing
    )
);

test_graph_ops!(
    test_sparse_adj_array_in,
    SparseAdjArrayIn,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphDirectedEdgeEditing,
        GraphNodeEditing
    )
);
