/*!
# Chordal Generators

Interval graphs and split graphs both admit a perfect elimination ordering by construction:
- in an interval graph, eliminating nodes by decreasing right endpoint leaves cliques behind,
- in a split graph, the independent nodes only see the clique and go first.
*/

use super::*;

/// Intersection graphs of `n` random intervals.
///
/// Node `u` is assigned `[s, s + l]` with `s` uniform in `[0, 1)` and `l` uniform in
/// `[0, max_length)`; two nodes are adjacent iff their intervals intersect.
#[derive(Debug, Copy, Clone)]
pub struct Intervals {
    n: NumNodes,
    max_length: f64,
}

impl Intervals {
    /// Creates a generator for `n` intervals of length at most `0.2`
    pub fn new(n: NumNodes) -> Self {
        Self { n, max_length: 0.2 }
    }

    /// ** Panics if `max_length` is negative or not finite **
    pub fn max_length(mut self, max_length: f64) -> Self {
        assert!(
            max_length.is_finite() && max_length >= 0.0,
            "{max_length} is no valid interval length"
        );
        self.max_length = max_length;
        self
    }
}

impl EdgeGenerator for Intervals {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let mut intervals = (0..self.n)
            .map(|u| {
                let start: f64 = rng.random();
                (start, start + self.max_length * rng.random::<f64>(), u)
            })
            .collect_vec();
        intervals.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        // sweep over the left endpoints; `open` holds all intervals still covering the sweep line
        let mut open: Vec<(f64, Node)> = Vec::new();
        let mut edges = Vec::new();
        for (start, end, u) in intervals {
            open.retain(|&(e, _)| e >= start);
            edges.extend(open.iter().map(|&(_, v)| Edge(u, v).normalized()));
            open.push((end, u));
        }

        edges
    }
}

/// Split graphs: a clique and an independent set whose nodes connect to every clique node
/// with probability `p`. Nodes are assigned to both parts at random.
#[derive(Debug, Copy, Clone)]
pub struct Split {
    n: NumNodes,
    clique: Option<NumNodes>,
    p: f64,
}

impl Split {
    /// Creates a generator for `n` nodes with a clique of `n / 2` nodes and probability `0.5`
    pub fn new(n: NumNodes) -> Self {
        Self { n, clique: None, p: 0.5 }
    }

    /// ** Panics if `k > n` **
    pub fn clique_size(mut self, k: NumNodes) -> Self {
        assert!(k <= self.n, "clique of {k} nodes exceeds {} nodes", self.n);
        self.clique = Some(k);
        self
    }

    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, p: f64) -> Self {
        assert_probability(p);
        self.p = p;
        self
    }
}

impl EdgeGenerator for Split {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let k = self.clique.unwrap_or(self.n / 2) as usize;
        let perm = random_permutation(rng, self.n);
        let (clique, independent) = perm.split_at(k);

        let mut edges = clique
            .iter()
            .tuple_combinations()
            .map(|(&u, &v)| Edge(u, v).normalized())
            .collect_vec();

        for &u in independent {
            for &v in clique {
                if rng.random_bool(self.p) {
                    edges.push(Edge(u, v).normalized());
                }
            }
        }

        edges
    }
}
