/*!
# Lexicographic Breadth-First Search

LexBFS orders the nodes of an undirected graph by repeated partition refinement:
starting from a single class holding every node, the first node `v` of the front class
is output and every remaining class `P` is split into `P ∩ N(v)` followed by `P \ N(v)`.
Empty halves are dropped, the relative order of classes is kept.

Ties are broken by a *ranking* (`ranking[u]` is the position of `u` in the tie-break
order; default is the node order): within every class the nodes stay sorted by rank.

The implementation runs in `O(n + m)`:
- neighborhoods are bucket-sorted by rank once,
- classes live in an arena and are linked in order, each holding a doubly linked list
  of its nodes,
- a node moved out of class `c` during a step is appended to the class created in
  front of `c` in the same step.
*/

use super::*;
use tracing::debug;

/// Configurable LexBFS
///
/// # Examples
/// ```
/// use lexgraphs::{prelude::*, algo::*};
///
/// // a path 0 - 1 - 2 - 3
/// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
///
/// assert_eq!(LexBfs::new().compute(&g), vec![0, 1, 2, 3]);
/// assert_eq!(LexBfs::new().start_at(2).compute(&g), vec![2, 1, 3, 0]);
/// assert_eq!(LexBfs::new().ranking(vec![3, 2, 1, 0]).compute(&g), vec![3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexBfs {
    ranking: Option<Vec<NumNodes>>,
    start: Option<Node>,
}

impl LexBfs {
    /// Creates a LexBFS that breaks ties by node order
    pub fn new() -> Self {
        Self::default()
    }

    /// Breaks ties by `ranking`: `ranking[u] < ranking[v]` means `u` is preferred over `v`.
    /// ** `compute` panics if `ranking` is not a permutation of `0..n` **
    pub fn ranking(mut self, ranking: Vec<NumNodes>) -> Self {
        self.ranking = Some(ranking);
        self
    }

    /// Forces `u` to be the first node of the ordering.
    /// ** `compute` panics if `u >= n` **
    pub fn start_at(mut self, u: Node) -> Self {
        self.start = Some(u);
        self
    }

    /// Computes the LexBFS ordering of `graph`, whose adjacency is treated as symmetric.
    /// Every node appears exactly once.
    pub fn compute<G>(&self, graph: &G) -> Vec<Node>
    where
        G: AdjacencyList,
    {
        let n = graph.number_of_nodes();
        if n == 0 {
            return Vec::new();
        }

        let initial = self.initial_order(n);
        let sorted_nbs = SortedNeighborhoods::new(graph, &initial);

        let mut partition = PartitionRefinement::new(n, &initial);
        let mut visited = graph.vertex_bitset_unset();
        let mut order = Vec::with_capacity(n as usize);
        let mut touched = Vec::new();

        for step in 0..n {
            let Some(v) = partition.pop_front() else {
                break;
            };
            visited.set_bit(v);
            order.push(v);

            for &w in sorted_nbs.of(v) {
                if visited.get_bit(w) {
                    continue;
                }

                let c = partition.class_of[w as usize];
                if partition.classes[c as usize].stamp != step {
                    let d = partition.insert_class_before(c);
                    let class = &mut partition.classes[c as usize];
                    class.stamp = step;
                    class.split = d;
                    touched.push(c);
                }

                let d = partition.classes[c as usize].split;
                partition.remove(w);
                partition.push_back(d, w);
            }

            for c in touched.drain(..) {
                if partition.classes[c as usize].head.is_none() {
                    partition.unlink_class(c);
                }
            }
        }

        debug_assert_eq!(order.len(), n as usize);
        debug!(nodes = n, start = ?order.first(), "computed LexBFS ordering");
        order
    }

    /// Nodes sorted by rank, with the start node (if any) moved to the front
    fn initial_order(&self, n: NumNodes) -> Vec<Node> {
        let mut by_rank = match &self.ranking {
            None => (0..n).collect_vec(),
            Some(ranking) => {
                assert_eq!(ranking.len(), n as usize, "ranking must cover every node");
                let mut by_rank = vec![INVALID_NODE; n as usize];
                for (u, &r) in ranking.iter().enumerate() {
                    assert_eq!(by_rank[r as usize], INVALID_NODE, "ranks must be distinct");
                    by_rank[r as usize] = u as Node;
                }
                by_rank
            }
        };

        if let Some(start) = self.start {
            assert!(start < n, "start node out of range");
            if let Some((pos, _)) = by_rank.iter().find_position(|&&u| u == start) {
                by_rank[..=pos].rotate_right(1);
            }
        }

        by_rank
    }
}

/// Neighborhoods in CSR layout, each sorted by the position of the neighbor in `initial`
struct SortedNeighborhoods {
    offsets: Vec<usize>,
    heads: Vec<Node>,
}

impl SortedNeighborhoods {
    fn new<G: AdjacencyList>(graph: &G, initial: &[Node]) -> Self {
        let mut offsets = Vec::with_capacity(graph.len() + 1);
        offsets.push(0);
        for u in graph.vertices() {
            offsets.push(offsets[u as usize] + graph.degree_of(u) as usize);
        }

        let mut cursor = offsets[..graph.len()].to_vec();
        let mut heads = vec![INVALID_NODE; offsets[graph.len()]];

        // visiting `u` in tie-break order appends it to the list of each neighbor
        for &u in initial {
            for w in graph.neighbors_of(u) {
                heads[cursor[w as usize]] = u;
                cursor[w as usize] += 1;
            }
        }

        Self { offsets, heads }
    }

    fn of(&self, u: Node) -> &[Node] {
        &self.heads[self.offsets[u as usize]..self.offsets[u as usize + 1]]
    }
}

#[derive(Debug, Clone, Copy)]
struct Class {
    head: NodeLink,
    tail: NodeLink,
    prev: NodeLink,
    next: NodeLink,
    /// class created in front of this one during step `stamp`
    split: Node,
    stamp: Node,
}

impl Default for Class {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            prev: None,
            next: None,
            split: INVALID_NODE,
            stamp: INVALID_NODE,
        }
    }
}

/// Ordered sequence of non-empty classes, each an ordered list of nodes
struct PartitionRefinement {
    classes: Vec<Class>,
    front: NodeLink,
    class_of: Vec<Node>,
    prev: Vec<NodeLink>,
    next: Vec<NodeLink>,
}

impl PartitionRefinement {
    fn new(n: NumNodes, initial: &[Node]) -> Self {
        let mut partition = Self {
            classes: vec![Class::default()],
            front: OptionalNode::new(0),
            class_of: vec![0; n as usize],
            prev: vec![None; n as usize],
            next: vec![None; n as usize],
        };

        for &u in initial {
            partition.push_back(0, u);
        }

        partition
    }

    fn push_back(&mut self, c: Node, u: Node) {
        let class = &mut self.classes[c as usize];
        let old_tail = class.tail;
        class.tail = OptionalNode::new(u);
        if old_tail.is_none() {
            class.head = OptionalNode::new(u);
        }

        self.prev[u as usize] = old_tail;
        self.next[u as usize] = None;
        if let Some(t) = link_target(old_tail) {
            self.next[t as usize] = OptionalNode::new(u);
        }
        self.class_of[u as usize] = c;
    }

    fn remove(&mut self, u: Node) {
        let class = &mut self.classes[self.class_of[u as usize] as usize];
        let (prev, next) = (self.prev[u as usize], self.next[u as usize]);

        match link_target(prev) {
            Some(p) => self.next[p as usize] = next,
            None => class.head = next,
        }
        match link_target(next) {
            Some(x) => self.prev[x as usize] = prev,
            None => class.tail = prev,
        }
    }

    fn insert_class_before(&mut self, c: Node) -> Node {
        let d = self.classes.len() as Node;
        let prev = self.classes[c as usize].prev;

        self.classes.push(Class {
            prev,
            next: OptionalNode::new(c),
            ..Default::default()
        });

        match link_target(prev) {
            Some(p) => self.classes[p as usize].next = OptionalNode::new(d),
            None => self.front = OptionalNode::new(d),
        }
        self.classes[c as usize].prev = OptionalNode::new(d);

        d
    }

    fn unlink_class(&mut self, c: Node) {
        let Class { prev, next, .. } = self.classes[c as usize];

        match link_target(prev) {
            Some(p) => self.classes[p as usize].next = next,
            None => self.front = next,
        }
        if let Some(x) = link_target(next) {
            self.classes[x as usize].prev = prev;
        }
    }

    /// Removes and returns the first node of the front class
    fn pop_front(&mut self) -> Option<Node> {
        let c = link_target(self.front)?;
        let u = link_target(self.classes[c as usize].head)?;

        self.remove(u);
        if self.classes[c as usize].head.is_none() {
            self.unlink_class(c);
        }

        Some(u)
    }
}

/// LexBFS on undirected graphs with the default tie-break
pub trait LexicographicBfs: AdjacencyList + GraphType<Dir = Undirected> {
    /// Returns the LexBFS ordering breaking ties by node order
    ///
    /// # Examples
    /// ```
    /// use lexgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)]);
    /// assert_eq!(g.lex_bfs(), vec![0, 1, 2, 3, 4]);
    /// ```
    fn lex_bfs(&self) -> Vec<Node> {
        LexBfs::new().compute(self)
    }

    /// Returns the LexBFS ordering starting at `u`, breaking ties by node order
    /// ** Panics if `u >= n` **
    fn lex_bfs_from(&self, u: Node) -> Vec<Node> {
        LexBfs::new().start_at(u).compute(self)
    }
}

impl<G> LexicographicBfs for G where G: AdjacencyList + GraphType<Dir = Undirected> {}
