use itertools::iproduct;
use shortest_paths::{Algorithm, DistanceMatrix, INF};

use crate::common::{random_dag, random_graph};

fn assert_triangle_inequality(result: &DistanceMatrix) {
    let n = result.dimension();
    for (i, j, k) in iproduct!(0..n, 0..n, 0..n) {
        let (ik, kj) = (result[(i, k)], result[(k, j)]);
        if ik < INF && kj < INF {
            assert!(
                result[(i, j)] <= ik + kj,
                "triangle inequality broken for ({i}, {j}) through {k}"
            );
        }
    }
}

#[test]
fn test_algorithms_agree_on_non_negative_graphs() {
    for seed in 0..30 {
        let graph = random_graph(seed, 15, 0.2);
        let results: Vec<DistanceMatrix> = Algorithm::ALL
            .iter()
            .map(|algorithm| algorithm.all_pairs(&graph).unwrap())
            .collect();

        assert_eq!(results[0], results[1], "seed {seed}: dijkstra vs bellman-ford");
        assert_eq!(results[1], results[2], "seed {seed}: bellman-ford vs floyd-warshall");
    }
}

#[test]
fn test_bellman_ford_and_floyd_agree_on_negative_dags() {
    for seed in 0..30 {
        let graph = random_dag(seed, 15, 0.3);
        assert_eq!(
            Algorithm::BellmanFord.all_pairs(&graph).unwrap(),
            Algorithm::FloydWarshall.all_pairs(&graph).unwrap(),
            "seed {seed}"
        );
    }
}

#[test]
fn test_zero_diagonal() {
    let graph = random_graph(7, 20, 0.15);
    for algorithm in Algorithm::ALL {
        let result = algorithm.all_pairs(&graph).unwrap();
        assert!(result.diagonal().all(|d| d == 0), "{algorithm}");
    }
}

#[test]
fn test_idempotence() {
    let graph = random_graph(11, 20, 0.2);
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.all_pairs(&graph).unwrap(),
            algorithm.all_pairs(&graph).unwrap(),
            "{algorithm}"
        );
    }
}

#[test]
fn test_triangle_inequality() {
    for seed in 0..10 {
        let graph = random_graph(seed, 12, 0.3);
        for algorithm in Algorithm::ALL {
            assert_triangle_inequality(&algorithm.all_pairs(&graph).unwrap());
        }

        let dag = random_dag(seed, 12, 0.3);
        assert_triangle_inequality(&Algorithm::BellmanFord.all_pairs(&dag).unwrap());
    }
}

#[test]
fn test_runs_do_not_leak_into_each_other() {
    // the same graph, computed in alternating order, always gives the same rows
    let graph = random_graph(3, 10, 0.3);
    let first = Algorithm::FloydWarshall.all_pairs(&graph).unwrap();
    let _ = Algorithm::Dijkstra.all_pairs(&graph).unwrap();
    let _ = Algorithm::BellmanFord.all_pairs(&graph).unwrap();
    assert_eq!(Algorithm::FloydWarshall.all_pairs(&graph).unwrap(), first);
    assert_eq!(Algorithm::Dijkstra.all_pairs(&graph).unwrap(), first);
}
