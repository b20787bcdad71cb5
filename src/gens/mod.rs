/*!
# Graph Generators

Random instances of the graph classes recognized in [`crate::algo`], plus deterministic
substructures (paths, cycles, cliques):

- [`Gnp`]: every pair is an edge independently with probability `p`; arbitrary graphs.
- [`Intervals`]: intersection graphs of random intervals; always chordal, and their
  complements are comparability graphs.
- [`Split`]: a clique plus an independent set attached to it; always chordal.
- [`Poset`]: the transitive closure of a random DAG; a transitive DAG if built as a
  directed graph, a comparability graph if built as an undirected one.

Every generator is a small builder (`Intervals::new(n).max_length(0.3)`) implementing
[`EdgeGenerator`]. Undirected generators emit each edge once, from its smaller node, so
building a directed graph yields the acyclic orientation along node order.
The [`RandomGraph`] trait wraps the generators into constructors for every graph type.

```
use lexgraphs::{prelude::*, algo::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(7);

let g = AdjArrayUndir::random_intervals(rng, 30);
assert!(g.is_chordal());

let d = AdjArrayIn::random_poset(rng, 30, 0.1);
assert!(d.is_transitive() && d.is_acyclic());
```
*/

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};
use stream_bitset::prelude::*;

use crate::prelude::*;

mod chordal;
mod gnp;
mod poset;
mod substructures;

pub use chordal::*;
pub use gnp::*;
pub use poset::*;
pub use substructures::*;

/// A configured random edge generator
pub trait EdgeGenerator {
    /// Number of nodes of the generated graphs
    fn number_of_nodes(&self) -> NumNodes;

    /// Generates a list of random edges between nodes `0..n`
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng;

    /// Builds a graph from a fresh set of random edges
    fn build<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromScratch,
        R: Rng,
    {
        G::from_edges(self.number_of_nodes(), self.generate(rng))
    }
}

/// Shortcuts to build random graphs of common models and classes
pub trait RandomGraph: Sized {
    /// Creates a `G(n,p)` graph without self-loops
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates an interval graph on `n` nodes
    fn random_intervals<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;

    /// Creates a split graph on `n` nodes with a clique of `n / 2` nodes
    fn random_split<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;

    /// Creates the transitive closure of a random DAG with arc probability `p`
    fn random_poset<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType,
{
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Gnp::new(n).prob(p).directed(Self::is_directed()).build(rng)
    }

    fn random_intervals<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Intervals::new(n).build(rng)
    }

    fn random_split<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Split::new(n).build(rng)
    }

    fn random_poset<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Poset::new(n).prob(p).build(rng)
    }
}

/// Returns a uniformly random permutation of `0..n`
fn random_permutation<R: Rng>(rng: &mut R, n: NumNodes) -> Vec<Node> {
    let mut perm = (0..n).collect_vec();
    perm.shuffle(rng);
    perm
}

fn assert_probability(p: f64) {
    assert!((0.0..=1.0).contains(&p), "{p} is not a probability");
}
