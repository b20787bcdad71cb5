use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph over dense nodes `0..n`
#[derive(Clone)]
pub struct IndexedUndirected<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = IndexedUndirected<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = IndexedUndirected<SparseNeighborhood>;

impl_common_graph_ops!(IndexedUndirected<nbs : Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> AdjacencyTest for IndexedUndirected<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for IndexedUndirected<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<Nbs: Neighborhood> GraphLocalEdgeEditing for IndexedUndirected<Nbs> {
    fn remove_edges_at_node(&mut self, u: Node) {
        let nbs = std::mem::take(&mut self.nbs[u as usize]);

        for v in nbs.neighbors() {
            if v != u {
                self.nbs[v as usize].try_remove_neighbor(u);
            }
        }

        self.num_edges -= nbs.num_of_neighbors() as NumEdges;
    }
}

impl<Nbs: Neighborhood> GraphNodeEditing for IndexedUndirected<Nbs> {
    fn add_node(&mut self) -> Node {
        self.nbs.push(Nbs::default());
        self.number_of_nodes() - 1
    }

    fn swap_remove_node(&mut self, u: Node) -> Option<Node> {
        self.remove_edges_at_node(u);

        let last = self.number_of_nodes() - 1;
        self.nbs.swap_remove(u as usize);
        if u == last {
            return None;
        }

        let mut moved = std::mem::take(&mut self.nbs[u as usize]);
        moved.replace_neighbor(last, u);
        for v in moved.neighbors() {
            if v != u {
                self.nbs[v as usize].replace_neighbor(last, u);
            }
        }
        self.nbs[u as usize] = moved;

        Some(last)
    }
}

test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphNodeEditing)
);

test_graph_ops!(
    test_sparse_adj_array_undir,
    SparseAdjArrayUndir,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, GraphNodeEditing)
);
