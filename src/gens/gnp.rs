use super::*;

/// `G(n,p)` graphs contain every possible edge between `n` nodes with probability `p`
/// independent from each other.
///
/// By default the generator emits undirected edges `u < v` only; directed pairs and
/// self-loops have to be enabled explicitly.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: f64,
    directed: bool,
    loops: bool,
}

impl Gnp {
    /// Creates a generator for `n` nodes with probability `0.5`
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            p: 0.5,
            directed: false,
            loops: false,
        }
    }

    /// ** Panics if `p` is not a probability **
    pub fn prob(mut self, p: f64) -> Self {
        assert_probability(p);
        self.p = p;
        self
    }

    /// Emits both `(u, v)` and `(v, u)` as candidates
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Emits self-loops `(u, u)` as candidates
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }
}

impl EdgeGenerator for Gnp {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        let n = self.n;
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(|&Edge(u, v)| match u.cmp(&v) {
                std::cmp::Ordering::Equal => self.loops,
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => self.directed,
            })
            .filter(|_| rng.random_bool(self.p))
            .collect()
    }
}
