use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two endpoints.
/// Is is up to the user whether an Edge is directed or not.
///
/// In the index layer the endpoints are [`Node`]s (the default parameter); the labelled
/// graphs of [`crate::graph`] hand out `Edge<V>` over their vertex identifiers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N = Node>(pub N, pub N);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl<N: Display> Display for Edge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<N: Debug> Debug for Edge<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<N: Ord + Clone> Edge<N> {
    /// Normalizes the edge such that the smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        if self.0 <= self.1 {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

impl<N: Clone> Edge<N> {
    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }

    /// Maps both endpoints
    pub fn map<M, F: FnMut(&N) -> M>(&self, mut f: F) -> Edge<M> {
        Edge(f(&self.0), f(&self.1))
    }
}

impl<N: PartialEq> Edge<N> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: &N) -> bool {
        self.0 == *u || self.1 == *u
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from(value: (N, N)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Node, &Node)> for Edge {
    fn from(value: (&Node, &Node)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
