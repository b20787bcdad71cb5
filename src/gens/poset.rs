use super::*;

/// Random partial orders on `n` nodes.
///
/// Nodes are placed in a random linear order; every pair is connected by an arc from the
/// earlier to the later node with probability `p`, and the result is closed transitively.
/// Arcs `(u, v)` mean `u < v` in the partial order. Built as an undirected graph this is
/// the comparability graph of the order.
#[derive(Debug, Copy, Clone)]
pub struct Poset {
    n: NumNodes,
    p: f64,
}

impl Poset {
    /// Creates a generator for `n` nodes with arc probability `0.1`
    pub fn new(n: NumNodes) -> Self {
        Self { n, p: 0.1 }
    }

    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, p: f64) -> Self {
        assert_probability(p);
        self.p = p;
        self
    }
}

impl EdgeGenerator for Poset {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let n = self.n;
        let order = random_permutation(rng, n);

        // successors[i] holds the positions greater than i in the closure of position i
        let mut successors = (0..n).map(|_| NodeBitSet::new(n)).collect_vec();
        for i in (0..n).rev() {
            for j in i + 1..n {
                if successors[i as usize].get_bit(j) || !rng.random_bool(self.p) {
                    continue;
                }

                let (head, tail) = successors.split_at_mut(j as usize);
                head[i as usize].set_bit(j);
                head[i as usize].set_bits(tail[0].iter_set_bits());
            }
        }

        let order = &order;
        successors
            .iter()
            .enumerate()
            .flat_map(|(i, succ)| {
                succ.iter_set_bits()
                    .map(move |j| Edge(order[i], order[j as usize]))
            })
            .collect()
    }
}
