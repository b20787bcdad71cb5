use super::*;

/// A simple directed graph over vertices of type `V`.
///
/// Edges are ordered pairs of distinct vertices; `(u, v)` and `(v, u)` may coexist.
/// [`Graph::degree`] and [`Graph::neighbors_of_vertex`] refer to outgoing edges.
///
/// # Examples
/// ```
/// use lexgraphs::prelude::*;
///
/// let mut g = DirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![3])]).unwrap();
/// assert!(g.is_transitive());
/// assert_eq!(g.topological_sort(), Some(vec![1, 2, 3]));
///
/// g.add_edge(&3, &1).unwrap();
/// assert!(!g.is_acyclic());
/// assert_eq!(g.topological_sort(), None);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    store: GraphStore<V, AdjArrayIn>,
}

impl<V: Vertex> Graph<V> for DirectedGraph<V> {
    type Repr = AdjArrayIn;

    fn store(&self) -> &GraphStore<V, AdjArrayIn> {
        &self.store
    }

    fn store_mut(&mut self) -> &mut GraphStore<V, AdjArrayIn> {
        &mut self.store
    }

    fn from_store(store: GraphStore<V, AdjArrayIn>) -> Self {
        Self { store }
    }
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        <Self as Graph<V>>::new()
    }
}

impl<V: Vertex> DirectedGraph<V> {
    /// Returns all `w` with an edge `(v, w)` sorted
    pub fn out_neighbors_of_vertex(&self, v: &V) -> GraphResult<Vec<V>, V> {
        self.neighbors_of_vertex(v)
    }

    /// Returns all `w` with an edge `(w, v)` sorted
    pub fn in_neighbors_of_vertex(&self, v: &V) -> GraphResult<Vec<V>, V> {
        let u = self.store.node_of(v)?;
        let mut neighbors = self.store.label_all(self.store.graph().in_neighbors_of(u));
        neighbors.sort_unstable();
        Ok(neighbors)
    }

    pub fn out_degree(&self, v: &V) -> GraphResult<usize, V> {
        self.degree(v)
    }

    pub fn in_degree(&self, v: &V) -> GraphResult<usize, V> {
        let u = self.store.node_of(v)?;
        Ok(self.store.graph().in_degree_of(u) as usize)
    }

    /// Number of incoming plus outgoing edges
    pub fn total_degree(&self, v: &V) -> GraphResult<usize, V> {
        let u = self.store.node_of(v)?;
        Ok(self.store.graph().total_degree_of(u) as usize)
    }

    /// Returns all edges into and out of `v` sorted
    pub fn edges_on_vertex(&self, v: &V) -> GraphResult<Vec<Edge<V>>, V> {
        let u = self.store.node_of(v)?;
        let graph = self.store.graph();
        Ok(graph
            .edges_of(u, false)
            .chain(graph.in_edges_of(u))
            .map(|e| self.store.label_edge(e))
            .sorted_unstable()
            .collect())
    }

    /// Returns *true* if edges `(u, v)` and `(v, w)` with `u != w` always imply an edge `(u, w)`
    pub fn is_transitive(&self) -> bool {
        self.store.graph().is_transitive()
    }

    /// Returns *true* if the graph contains no directed cycle
    pub fn is_acyclic(&self) -> bool {
        self.store.graph().is_acyclic()
    }

    /// Returns all vertices such that every edge points from an earlier to a later one,
    /// or `None` if the graph contains a cycle.
    pub fn topological_sort(&self) -> Option<Vec<V>> {
        let order = self.store.graph().topological_order()?;
        Some(self.store.label_all(order))
    }

    /// Returns the undirected graph on the same vertices containing `{u, v}` iff
    /// `(u, v)` or `(v, u)` is an edge
    pub fn to_undirected(&self) -> UndirectedGraph<V> {
        let graph = self.store.graph();
        let mut undirected = AdjArrayUndir::new(graph.number_of_nodes());
        for Edge(u, v) in graph.edges(false) {
            undirected.try_add_edge(u, v);
        }
        UndirectedGraph::from_store(self.store.with_graph(undirected))
    }
}
