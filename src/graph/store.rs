use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::trace;

use super::{GraphError, GraphResult, Vertex};
use crate::prelude::*;

/// Maps vertex identifiers to the dense nodes `0..n` of an index graph `G`.
///
/// `labels[u]` is the vertex of node `u` and `index[labels[u]] == u`. Removing a vertex
/// moves the vertex of the last node into the freed slot, mirroring
/// [`GraphNodeEditing::swap_remove_node`]. Every fallible method validates its input
/// before the first write, so an `Err` leaves the store untouched.
#[derive(Debug, Clone)]
pub struct GraphStore<V, G> {
    labels: Vec<V>,
    index: FxHashMap<V, Node>,
    graph: G,
}

impl<V, G> Default for GraphStore<V, G>
where
    V: Vertex,
    G: GraphNodeEditing + AdjacencyList + AdjacencyTest,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, G> GraphStore<V, G>
where
    V: Vertex,
    G: GraphNodeEditing + AdjacencyList + AdjacencyTest,
{
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
            graph: G::new(0),
        }
    }

    /// Returns a store over the same vertices (with the same nodes) but a different graph.
    /// ** Panics if `graph` does not have exactly one node per vertex **
    pub fn with_graph<H: GraphNodeOrder>(&self, graph: H) -> GraphStore<V, H> {
        assert_eq!(graph.len(), self.labels.len());
        GraphStore {
            labels: self.labels.clone(),
            index: self.index.clone(),
            graph,
        }
    }

    /// Replaces the edge set by that of `graph`.
    /// ** Panics if `graph` does not have exactly one node per vertex **
    pub fn replace_graph(&mut self, graph: G) {
        assert_eq!(graph.len(), self.labels.len());
        self.graph = graph;
    }

    /// The underlying index graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// All vertices, indexed by their node
    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    /// Returns the vertex of node `u`.
    /// ** Panics if `u >= n` **
    pub fn label(&self, u: Node) -> &V {
        &self.labels[u as usize]
    }

    /// Maps nodes to (cloned) vertices
    pub fn label_all<I: IntoIterator<Item = Node>>(&self, nodes: I) -> Vec<V> {
        nodes.into_iter().map(|u| self.label(u).clone()).collect()
    }

    /// Maps both endpoints of an index edge to vertices
    pub fn label_edge(&self, edge: Edge) -> Edge<V> {
        edge.map(|&u| self.label(u).clone())
    }

    /// Returns the node of `v` if it exists
    pub fn try_node_of(&self, v: &V) -> Option<Node> {
        self.index.get(v).copied()
    }

    /// Returns the node of `v` or [`GraphError::UnknownVertex`]
    pub fn node_of(&self, v: &V) -> GraphResult<Node, V> {
        self.try_node_of(v)
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    /// Returns *true* if `v` is a vertex of the store
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// `ranking[u]` is the position of `labels[u]` among all vertices in ascending order.
    /// Passing it to an algorithm makes its tie-breaks depend on the vertices only.
    pub fn ranking(&self) -> Vec<NumNodes> {
        let mut ranking = vec![0; self.labels.len()];
        let by_label = (0..self.labels.len())
            .sorted_unstable_by(|&a, &b| self.labels[a].cmp(&self.labels[b]));
        for (rank, u) in by_label.enumerate() {
            ranking[u] = rank as NumNodes;
        }
        ranking
    }

    /// Inserts `v` as a new isolated node and returns the node
    pub fn insert_vertex(&mut self, v: V) -> GraphResult<Node, V> {
        if self.contains(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }
        Ok(self.push_vertex(v))
    }

    /// Inserts all vertices or none of them
    pub fn insert_vertices<I: IntoIterator<Item = V>>(&mut self, vertices: I) -> GraphResult<(), V> {
        let vertices = vertices.into_iter().collect_vec();

        if let Some(v) = vertices.iter().find(|v| self.contains(v)) {
            return Err(GraphError::DuplicateVertex(v.clone()));
        }
        if let Some(v) = vertices.iter().duplicates().next() {
            return Err(GraphError::DuplicateVertex(v.clone()));
        }

        for v in vertices {
            self.push_vertex(v);
        }
        Ok(())
    }

    /// Returns the node of `v`, inserting `v` first if it is not a vertex yet
    pub fn get_or_insert_vertex(&mut self, v: V) -> Node {
        match self.try_node_of(&v) {
            Some(u) => u,
            None => self.push_vertex(v),
        }
    }

    fn push_vertex(&mut self, v: V) -> Node {
        let u = self.graph.add_node();
        debug_assert_eq!(u as usize, self.labels.len());

        trace!(vertex = ?v, node = u, "insert vertex");
        self.index.insert(v.clone(), u);
        self.labels.push(v);
        u
    }

    /// Removes `v` and all its incident edges
    pub fn delete_vertex(&mut self, v: &V) -> GraphResult<(), V> {
        let u = self.node_of(v)?;

        let moved = self.graph.swap_remove_node(u);
        self.labels.swap_remove(u as usize);
        self.index.remove(v);

        if let Some(last) = moved {
            let label = &self.labels[u as usize];
            trace!(vertex = ?v, moved = ?label, from = last, to = u, "delete vertex");
            self.index.insert(label.clone(), u);
        } else {
            trace!(vertex = ?v, node = u, "delete vertex");
        }
        Ok(())
    }

    /// Validates and returns the endpoints of a new edge `(u, v)`
    fn new_edge(&self, u: &V, v: &V) -> GraphResult<(Node, Node), V> {
        let nu = self.node_of(u)?;
        let nv = self.node_of(v)?;

        if nu == nv {
            return Err(GraphError::SelfLoop(u.clone()));
        }
        if self.graph.has_edge(nu, nv) {
            return Err(GraphError::DuplicateEdge(u.clone(), v.clone()));
        }
        Ok((nu, nv))
    }

    /// Inserts the edge `(u, v)` between two existing, distinct vertices
    pub fn insert_edge(&mut self, u: &V, v: &V) -> GraphResult<(), V> {
        let (nu, nv) = self.new_edge(u, v)?;
        trace!(from = ?u, to = ?v, "insert edge");
        self.graph.add_edge(nu, nv);
        Ok(())
    }

    /// Inserts the edge `(u, v)` unless it exists already; both endpoints are created on demand
    pub fn merge_edge(&mut self, u: V, v: V) -> GraphResult<(), V> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let nu = self.get_or_insert_vertex(u);
        let nv = self.get_or_insert_vertex(v);
        self.graph.try_add_edge(nu, nv);
        Ok(())
    }

    /// Removes the existing edge `(u, v)`
    pub fn delete_edge(&mut self, u: &V, v: &V) -> GraphResult<(), V> {
        let nu = self.node_of(u)?;
        let nv = self.node_of(v)?;

        if !self.graph.try_remove_edge(nu, nv) {
            return Err(GraphError::UnknownEdge(u.clone(), v.clone()));
        }
        trace!(from = ?u, to = ?v, "delete edge");
        Ok(())
    }

    /// Returns *true* if both vertices exist and are connected
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.try_node_of(u), self.try_node_of(v)) {
            (Some(nu), Some(nv)) => self.graph.has_edge(nu, nv),
            _ => false,
        }
    }
}
