/// Stamps out conformance tests for a storage type; one arm per capability trait
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;
            use stream_bitset::prelude::*;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_empty(), n == 0);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }

            assert_eq!(<$graph>::default().number_of_nodes(), 0);
            assert_eq!(<$graph>::is_directed(), !$undirected);
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            if $undirected {
                                adj_matrix[v as usize].set_bit(u);
                            }
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges($undirected).collect_vec());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix_in: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix_in[v as usize].set_bit(u);
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());

                        for u in 0..n {
                            let in_nbs = NodeBitSet::new_with_bits_set(n, graph.in_neighbors_of(u));
                            assert_eq!(in_nbs, adj_matrix_in[u as usize]);
                            assert_eq!(graph.in_degree_of(u), adj_matrix_in[u as usize].cardinality());
                            assert_eq!(
                                graph.total_degree_of(u),
                                graph.out_degree_of(u) + adj_matrix_in[u as usize].cardinality()
                            );
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];

                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            assert!(!graph.try_add_edge(u, v));
                            assert!(graph.try_add_edge(u, v));

                            if $undirected {
                                adj_matrix[v as usize].set_bit(u);
                            }
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].clear_bit(v) {
                                assert!(graph.try_remove_edge(u, v));
                                m -= 1;

                                if $undirected && u != v {
                                    assert!(adj_matrix[v as usize].clear_bit(u));
                                }
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        graph.remove_edges_at_nodes(0..n);
                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphDirectedEdgeEditing) => {
        #[test]
        fn test_graph_directed_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let mut graph = <$graph>::from_edges(n, edges.iter());

                        let mut graph_clone = graph.clone();
                        let mut m = graph.number_of_edges();
                        for u in 0..n {
                            m -= graph.out_degree_of(u);
                            graph.remove_edges_out_of_node(u);
                            assert_eq!(m, graph.number_of_edges());
                            assert_eq!(graph.out_degree_of(u), 0);
                        }

                        assert!(graph.is_singleton_graph());

                        let mut m = graph_clone.number_of_edges();
                        for u in 0..n {
                            m -= graph_clone.in_degree_of(u);
                            graph_clone.remove_edges_into_node(u);
                            assert_eq!(m, graph_clone.number_of_edges());
                            assert_eq!(graph_clone.in_degree_of(u), 0);
                        }

                        assert!(graph_clone.is_singleton_graph());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphNodeEditing) => {
        #[test]
        fn test_graph_node_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 30] {
                for m_ub in [n, n * 3] {
                    let mut edges = random_edges(rng, n, m_ub as NumEdges);
                    let mut graph = <$graph>::from_edges(n, edges.iter());

                    let fresh = graph.add_node();
                    assert_eq!(fresh, n);
                    assert_eq!(graph.degree_of(fresh), 0);
                    edges.push(Edge(0, fresh));
                    graph.add_edge(0, fresh);

                    while !graph.is_empty() {
                        let u = rng.random_range(0..graph.number_of_nodes());
                        let last = graph.number_of_nodes() - 1;

                        let renamed = graph.swap_remove_node(u);
                        assert_eq!(renamed, (u != last).then_some(last));

                        edges = edges
                            .into_iter()
                            .filter(|e| !e.is_incident_to(&u))
                            .map(|e| e.map(|&x| if x == last { u } else { x }))
                            .map(|e| if $undirected { e.normalized() } else { e })
                            .sorted()
                            .collect_vec();

                        assert_eq!(graph.number_of_nodes(), last);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.ordered_edges($undirected).collect_vec(), edges);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
