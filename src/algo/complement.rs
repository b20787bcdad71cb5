use super::*;

/// Complement graphs: same nodes, exactly the missing edges
pub trait Complement: AdjacencyList + GraphNew + GraphEdgeEditing + GraphType {
    /// Returns a new graph that contains edge `(u, v)`, `u != v`, iff `self` does not.
    /// Self-loops are never part of the complement.
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1)]);
    /// let c = g.complement();
    /// assert_eq!(c.ordered_edges(true).collect::<Vec<_>>(), vec![Edge(0, 2), Edge(1, 2)]);
    /// ```
    fn complement(&self) -> Self {
        let n = self.number_of_nodes();
        let mut complement = Self::new(n);
        let mut nbs = self.vertex_bitset_unset();

        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                nbs.set_bit(v);
            }

            // undirected edges are added once from their smaller endpoint
            let first = if Self::is_directed() { 0 } else { u + 1 };
            for v in first..n {
                if v != u && !nbs.get_bit(v) {
                    complement.add_edge(u, v);
                }
            }

            for v in self.neighbors_of(u) {
                nbs.clear_bit(v);
            }
        }

        complement
    }

    /// Replaces the edge set of `self` by its complement
    fn complement_in_place(&mut self) {
        *self = self.complement();
    }
}

impl<G> Complement for G where G: AdjacencyList + GraphNew + GraphEdgeEditing + GraphType {}
