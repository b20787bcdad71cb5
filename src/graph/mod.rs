/*!
# Labelled Graphs

[`UndirectedGraph`] and [`DirectedGraph`] store simple graphs over arbitrary vertex
identifiers (anything implementing [`Vertex`]) and expose the algorithms of [`crate::algo`]
in terms of these identifiers.

Internally, every vertex is assigned a dense [`Node`] by a [`GraphStore`]; node ids never
leave this module. Algorithms receive a *ranking* of the nodes by vertex order, so that
every result (LexBFS orderings, orientations, ...) depends on the vertices only and not on
the order in which they were inserted or removed.

Editing operations return a [`GraphResult`] with a [`GraphError`]; a failing call never
modifies the graph.

# Examples
```
use lexgraphs::prelude::*;

let mut g = UndirectedGraph::from_adjacency([("a", vec!["b", "c"]), ("b", vec!["c"])]).unwrap();
assert_eq!(g.edges(), vec![Edge("a", "b"), Edge("a", "c"), Edge("b", "c")]);
assert!(g.is_complete());

g.remove_vertex(&"b").unwrap();
assert_eq!(g.edges(), vec![Edge("a", "c")]);
assert_eq!(g.remove_vertex(&"b"), Err(GraphError::UnknownVertex("b")));
```
*/

use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{algo::*, prelude::*};

mod directed;
mod error;
mod store;
mod undirected;

pub use directed::*;
pub use error::*;
pub use store::*;
pub use undirected::*;

/// Identifiers of vertices in a labelled graph
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<V> Vertex for V where V: Clone + Eq + Hash + Ord + Debug {}

/// Operations shared by [`UndirectedGraph`] and [`DirectedGraph`].
///
/// Implementors only provide access to their [`GraphStore`]; everything else is derived.
/// For directed graphs, neighbors and degrees refer to *out*-neighbors.
pub trait Graph<V: Vertex>: Sized {
    /// Index graph the vertices are mapped onto
    type Repr: GraphNodeEditing + AdjacencyList + AdjacencyTest + GraphEdgeOrder + GraphType;

    fn store(&self) -> &GraphStore<V, Self::Repr>;

    fn store_mut(&mut self) -> &mut GraphStore<V, Self::Repr>;

    fn from_store(store: GraphStore<V, Self::Repr>) -> Self;

    /// Creates a graph without vertices
    fn new() -> Self {
        Self::from_store(GraphStore::new())
    }

    /// Creates a graph from an adjacency specification: every key and every listed neighbor
    /// becomes a vertex and every listed pair an edge (directed from key to neighbor).
    /// Pairs listed more than once are merged; self-references are rejected.
    fn from_adjacency<I, N>(adjacency: I) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut store = GraphStore::new();
        for (u, neighbors) in adjacency {
            store.get_or_insert_vertex(u.clone());
            for v in neighbors {
                store.merge_edge(u.clone(), v)?;
            }
        }
        Ok(Self::from_store(store))
    }

    /// Creates a graph from explicit vertex and edge lists.
    /// Every problem is reported, including duplicate vertices and edges.
    fn from_edges<VI, EI>(vertices: VI, edges: EI) -> GraphResult<Self, V>
    where
        VI: IntoIterator<Item = V>,
        EI: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices)?;
        for (u, v) in edges {
            graph.add_edge(&u, &v)?;
        }
        Ok(graph)
    }

    /// Iterates over all vertices in no particular order
    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.store().labels().iter()
    }

    fn number_of_vertices(&self) -> usize {
        self.store().labels().len()
    }

    fn number_of_edges(&self) -> usize {
        self.store().graph().number_of_edges() as usize
    }

    /// Returns all edges sorted; undirected edges are normalized to `Edge(min, max)`
    fn edges(&self) -> Vec<Edge<V>> {
        let store = self.store();
        let undirected = Self::Repr::is_undirected();
        store
            .graph()
            .edges(undirected)
            .map(|e| {
                let e = store.label_edge(e);
                if undirected { e.normalized() } else { e }
            })
            .sorted_unstable()
            .collect()
    }

    fn vertex_exists(&self, v: &V) -> bool {
        self.store().contains(v)
    }

    /// Returns *true* if `(u, v)` is an edge; *false* if any of them is no vertex
    fn edge_exists(&self, u: &V, v: &V) -> bool {
        self.store().has_edge(u, v)
    }

    fn add_vertex(&mut self, v: V) -> GraphResult<(), V> {
        self.store_mut().insert_vertex(v).map(|_| ())
    }

    /// Adds all vertices or, if any of them exists already or is listed twice, none
    fn add_vertices<I: IntoIterator<Item = V>>(&mut self, vertices: I) -> GraphResult<(), V> {
        self.store_mut().insert_vertices(vertices)
    }

    fn add_edge(&mut self, u: &V, v: &V) -> GraphResult<(), V> {
        self.store_mut().insert_edge(u, v)
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<(), V> {
        self.store_mut().delete_edge(u, v)
    }

    /// Removes `v` together with all incident edges
    fn remove_vertex(&mut self, v: &V) -> GraphResult<(), V> {
        self.store_mut().delete_vertex(v)
    }

    /// Returns the (out-)neighbors of `v` sorted
    fn neighbors_of_vertex(&self, v: &V) -> GraphResult<Vec<V>, V> {
        let store = self.store();
        let u = store.node_of(v)?;
        let mut neighbors = store.label_all(store.graph().neighbors_of(u));
        neighbors.sort_unstable();
        Ok(neighbors)
    }

    /// Returns the (out-)degree of `v`
    fn degree(&self, v: &V) -> GraphResult<usize, V> {
        let store = self.store();
        let u = store.node_of(v)?;
        Ok(store.graph().degree_of(u) as usize)
    }

    /// Returns *true* if every two distinct vertices of `vertices` are connected
    /// (in both directions for directed graphs). Repeated vertices are ignored.
    fn is_clique(&self, vertices: &[V]) -> GraphResult<bool, V> {
        let store = self.store();
        let nodes = vertices
            .iter()
            .map(|v| store.node_of(v))
            .collect::<GraphResult<Vec<_>, V>>()?;
        Ok(store.graph().is_clique(nodes))
    }

    /// Returns *true* if every two distinct vertices are connected
    fn is_complete(&self) -> bool {
        self.store().graph().is_complete()
    }

    /// Returns a graph on the same vertices that has exactly the edges missing in `self`
    fn complement(&self) -> Self {
        let store = self.store();
        Self::from_store(store.with_graph(store.graph().complement()))
    }

    /// Replaces the edges of `self` by the missing ones
    fn complement_in_place(&mut self) {
        let complement = self.store().graph().complement();
        self.store_mut().replace_graph(complement);
    }
}
