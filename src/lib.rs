/*!
`lexgraphs` is a library for simple graphs that recognizes structural graph classes:
- **lex**icographic breadth-first search (LexBFS) in linear time,
- **chordal** graphs via perfect elimination orderings,
- **comparability** graphs via transitive orientations,
- plus cliques, complete and bipartite graphs and complements.

# Representation

The library has two layers.

The **index layer** numbers nodes `0` to `n - 1` and represents them as `u32`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
All algorithms are implemented on this layer, see [`repr`] for the storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir) / [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir) for undirected graphs,
- [`AdjArrayIn`](crate::repr::AdjArrayIn) / [`SparseAdjArrayIn`](crate::repr::SparseAdjArrayIn) for directed graphs that
  store in- and out-neighbors.

The **labelled layer** ([`graph`]) offers [`UndirectedGraph`](crate::graph::UndirectedGraph) and
[`DirectedGraph`](crate::graph::DirectedGraph) over arbitrary vertex identifiers (strings, integers, ...).
Edits are validated and reported as [`GraphError`](crate::graph::GraphError)s, and results only
depend on the vertices themselves: ties are always broken in favor of the smaller vertex.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)` (although we normalize edges often).
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs using the *Builder* / *Setter* pattern
before calling the configured algorithm on a provided graph (e.g. [`LexBfs`](crate::algo::LexBfs) with a custom tie-break).
The most commonly used functionality is also implemented via traits on the graph itself, making it usable without configuring the algorithm beforehand.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, all graph representations and the labelled graphs,
- [`graph`] includes the labelled graphs,
- [`algo`] includes algorithm traits that are implemented on index graphs such as BFS (`graph.bfs(start_node)`), LexBFS, chordality and comparability tests, ...
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques.

```
use lexgraphs::prelude::*;

let g = UndirectedGraph::from_adjacency([
    ("a", vec!["b", "c", "d"]),
    ("b", vec!["c"]),
    ("c", vec!["d"]),
])
.unwrap();

assert!(g.is_chordal());
assert!(g.is_comparability());
assert_eq!(g.lexicographic_bfs(), vec!["a", "b", "c", "d"]);
```

In most use-cases, `use lexgraphs::prelude::*;` suffices; index-layer algorithms additionally need `use lexgraphs::algo::*;`.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod graph;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `lexgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// all implemented representations as well as the labelled graphs.
pub mod prelude {
    pub use super::{edge::*, graph::*, node::*, ops::*, repr::*};
}
