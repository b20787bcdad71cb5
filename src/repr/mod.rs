/*!
# Graph Representations

Index-layer storage: every graph holds one [`Neighborhood`] per node `0..n`.

- [`IndexedUndirected`] stores one neighborhood per node; an edge `{u, v}` appears in both.
- [`IndexedDirected`] stores separate out- and in-neighborhoods so that both directions
  can be queried in time proportional to the degree.

The neighborhood type is a parameter: [`ArrNeighborhood`] (`Vec<Node>`) or
[`SparseNeighborhood`] (`SmallVec`, inline storage for small degrees).
*/

use crate::{ops::*, *};
use itertools::Itertools;

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;
