use shortest_paths::graph::algo::bellman_ford::{all_pairs, bellman_ford, find_negative_cycle};
use shortest_paths::{Graph, NegativeCycleErr, INF};

use crate::common::{petgraph_all_pairs, random_dag};

/// copy the test suit from pet_graph
#[test]
fn test_find_negative_cycle() {
    let g = Graph::from_edges(
        ["0", "1", "2", "3", "4"],
        [
            (0, 1, 1),
            (0, 2, 1),
            (0, 3, 1),
            (1, 3, 1),
            (2, 1, 1),
            (3, 2, -3),
        ],
    )
    .unwrap();

    let path = find_negative_cycle(&g, 0);
    assert_eq!(path, Some([1, 3, 2].to_vec()));
}

/// copy the test suit from pet_graph
#[test]
fn test_bellman_fords() {
    let (a, b, d, e) = (0, 1, 3, 4);
    let g = Graph::from_edges(
        ["a", "b", "c", "d", "e", "f"],
        [
            (0, 1, 2),
            (0, 3, 4),
            (1, 2, 1),
            (1, 5, 7),
            (2, 4, 5),
            (4, 5, 1),
            (3, 4, 1),
        ],
    )
    .unwrap();

    // Graph represented with the weight of each edge
    //
    //     2       1
    // a ----> b ----> c
    // | 4     | 7     |
    // d       f       | 5
    // | 1     ^ 1     |
    // \-----> e <-----/

    let path = bellman_ford(&g, a);
    assert!(path.is_ok());
    let path = path.unwrap();
    assert_eq!(path.distances, vec![0, 2, 3, 4, 5, 6]);
    assert_eq!(
        path.predecessors,
        vec![None, Some(a), Some(b), Some(a), Some(d), Some(e)]
    );
}

#[test]
fn test_negative_cycle_everywhere() {
    // every vertex reaches the cycle b -> c -> d -> b of weight -1
    let g = Graph::from_edges(
        ["a", "b", "c", "d"],
        [(0, 1, 1), (1, 2, 2), (2, 3, -4), (3, 1, 1), (3, 0, 5)],
    )
    .unwrap();

    for source in 0..4 {
        assert_eq!(bellman_ford(&g, source), Err(NegativeCycleErr(source)));
    }
    assert_eq!(all_pairs(&g), Err(NegativeCycleErr(0)));

    let cycle = find_negative_cycle(&g, 0).unwrap();
    assert_eq!(cycle, vec![1, 2, 3]);
    let total: i32 = cycle
        .iter()
        .zip(cycle.iter().cycle().skip(1))
        .map(|(&u, &v)| g.weight(u, v))
        .sum();
    assert!(total < 0);
}

#[test]
fn test_unreachable_cycle_is_ignored_by_its_source_only() {
    // a -> b, and the negative cycle c <-> d can't be reached from a or b
    let g = Graph::from_edges(
        ["a", "b", "c", "d"],
        [(0, 1, 3), (2, 3, -2), (3, 2, 1)],
    )
    .unwrap();

    let paths = bellman_ford(&g, 0).unwrap();
    assert_eq!(paths.distances, vec![0, 3, INF, INF]);
    assert!(bellman_ford(&g, 1).is_ok());
    assert_eq!(bellman_ford(&g, 2), Err(NegativeCycleErr(2)));
    // the whole computation is invalid as soon as one source fails
    assert_eq!(all_pairs(&g), Err(NegativeCycleErr(2)));
}

#[test]
fn test_negative_dag_matches_petgraph() {
    for seed in 0..20 {
        let graph = random_dag(seed, 12, 0.4);
        assert_eq!(
            all_pairs(&graph).unwrap(),
            petgraph_all_pairs(&graph),
            "seed {seed}"
        );
    }
}
