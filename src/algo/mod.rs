/*!
# Graph Algorithms

Algorithms on the index layer, re-exported at the top level of this module:
```rust
use lexgraphs::algo::*;
```
Most algorithms are traits implemented for every graph with the required capabilities
(e.g. `graph.is_chordal()`); algorithms with options are additionally provided as
configurable structs ([`LexBfs`], [`TransitiveOrientation`]).

Algorithms on undirected graphs require `GraphType<Dir = Undirected>`, those on directed
graphs `GraphType<Dir = Directed>` or [`DirectedAdjacencyList`].
*/

mod bipartite;
mod chordal;
mod clique;
mod comparability;
mod complement;
mod lexbfs;
mod traversal;

use crate::prelude::*;
use itertools::Itertools;
use stream_bitset::prelude::*;

pub use bipartite::*;
pub use chordal::*;
pub use clique::*;
pub use comparability::*;
pub use complement::*;
pub use lexbfs::*;
pub use traversal::*;
