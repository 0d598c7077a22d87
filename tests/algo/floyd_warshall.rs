use shortest_paths::graph::algo::floyd_warshall::{floyd_warshall, negative_cycle_vertices};
use shortest_paths::{Graph, INF};

use crate::common::{petgraph_all_pairs, random_dag, random_graph};

#[test]
/// adopt pet_graph's test example
fn test_basic() {
    let (a, b, c, d) = (0, 1, 2, 3);
    let graph = Graph::from_edges(
        ["a", "b", "c", "d"],
        [
            (a, b, 1),
            (a, c, 4),
            (a, d, 10),
            (b, c, 2),
            (b, d, 2),
            (c, d, 2),
        ],
    )
    .unwrap();
    //     ----- b --------
    //    |      ^         | 2
    //    |    1 |    4    v
    //  2 |      a ------> c
    //    |   10 |         | 2
    //    |      v         v
    //     --->  d <-------

    let expected_res = [
        [0, 1, 3, 3],
        [INF, 0, 2, 2],
        [INF, INF, 0, 2],
        [INF, INF, INF, 0],
    ];

    let res = floyd_warshall(&graph);
    for (node, expected) in expected_res.iter().enumerate() {
        assert_eq!(res.row(node), expected);
    }
}

#[test]
fn test_matches_petgraph() {
    for seed in 0..20 {
        let graph = random_graph(seed, 12, 0.25);
        assert_eq!(floyd_warshall(&graph), petgraph_all_pairs(&graph), "seed {seed}");

        let dag = random_dag(seed, 12, 0.4);
        assert_eq!(floyd_warshall(&dag), petgraph_all_pairs(&dag), "seed {seed}");
    }
}

#[test]
fn test_negative_cycle_is_only_a_caveat() {
    let graph = Graph::from_edges(
        ["a", "b", "c", "d"],
        [(0, 1, 1), (1, 2, 2), (2, 3, -4), (3, 1, 1)],
    )
    .unwrap();

    let res = floyd_warshall(&graph);
    assert_eq!(negative_cycle_vertices(&res), vec![1, 2, 3]);
    assert_eq!(res[(0, 0)], 0);
}
