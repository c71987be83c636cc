//! Shortest path distances and closeness centrality.
//!
//! Two strategies are offered. Running a breadth-first search from every node costs
//! `O(N·(N+E))` and is the better choice for the sparse graphs the generators produce. A single
//! Floyd–Warshall pass over the distance matrix costs `O(N³)` regardless of sparsity but is the
//! simplest to verify. Both sum reciprocal distances in ascending target order, so they return
//! bitwise identical centralities.

use std::collections::VecDeque;

use nalgebra::DMatrix;
use tracing::trace;

use crate::{graph::Graph, NodeId};

/// How to compute all-pairs hop counts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ShortestPaths {
    /// A breadth-first search from every node.
    #[default]
    PerSource,
    /// One Floyd–Warshall pass over the whole graph.
    AllPairs,
}

/// Computes the closeness centrality of every node, indexed by `id - 1`.
pub(crate) fn closeness_centralities(graph: &Graph, strategy: ShortestPaths) -> Vec<f64> {
    trace!(?strategy, nodes = graph.node_count(), "computing closeness centrality");

    match strategy {
        ShortestPaths::PerSource => (1..=graph.node_count())
            .map(|source| {
                let hops = hop_counts(graph, source);
                let distances = hops
                    .iter()
                    .map(|hop| hop.map_or(f64::INFINITY, |hop| hop as f64));

                reciprocal_sum(source - 1, distances)
            })
            .collect(),
        ShortestPaths::AllPairs => {
            let distances = distance_matrix(graph);

            (0..graph.node_count())
                .map(|i| reciprocal_sum(i, distances.row(i).iter().copied()))
                .collect()
        }
    }
}

/// Breadth-first search from `source`, returning the hop count to every node (indexed by
/// `id - 1`), or `None` where the node is unreachable.
pub(crate) fn hop_counts(graph: &Graph, source: NodeId) -> Vec<Option<usize>> {
    let mut hops: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

    if let Some(hop) = source.checked_sub(1).and_then(|i| hops.get_mut(i)) {
        *hop = Some(0);
        queue.push_back((source, 0));
    }

    while let Some((current, depth)) = queue.pop_front() {
        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };

        for &neighbor in neighbors {
            match hops.get_mut(neighbor - 1) {
                Some(hop) if hop.is_none() => {
                    *hop = Some(depth + 1);
                    queue.push_back((neighbor, depth + 1));
                }
                _ => {}
            }
        }
    }

    hops
}

/// Floyd–Warshall over the adjacency matrix. Unreachable pairs are left at infinity.
pub(crate) fn distance_matrix(graph: &Graph) -> DMatrix<f64> {
    let n = graph.node_count();
    let mut distances = graph
        .adjacency_matrix()
        .map(|a| if a > 0.0 { 1.0 } else { f64::INFINITY });
    distances.fill_diagonal(0.0);

    for k in 0..n {
        for i in 0..n {
            let to_k = distances[(i, k)];
            if to_k.is_infinite() {
                continue;
            }

            for j in 0..n {
                let through_k = to_k + distances[(k, j)];
                if through_k < distances[(i, j)] {
                    distances[(i, j)] = through_k;
                }
            }
        }
    }

    distances
}

/// Sums `1 / d` over every distance except the one at `skip`, infinite distances contributing
/// nothing.
fn reciprocal_sum(skip: usize, distances: impl Iterator<Item = f64>) -> f64 {
    distances
        .enumerate()
        .filter(|(j, _)| *j != skip)
        .map(|(_, distance)| 1.0 / distance)
        .sum()
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    fn path(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for i in 1..n {
            graph.add_undirected_edge(i, i + 1).unwrap();
        }

        graph
    }

    #[test]
    fn hop_counts_on_a_path() {
        let graph = path(4);

        assert_eq!(hop_counts(&graph, 1), [Some(0), Some(1), Some(2), Some(3)]);
        assert_eq!(hop_counts(&graph, 3), [Some(2), Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn hop_counts_unreachable() {
        let mut graph = Graph::new(3);
        graph.add_undirected_edge(1, 2).unwrap();

        assert_eq!(hop_counts(&graph, 1), [Some(0), Some(1), None]);
        assert_eq!(hop_counts(&graph, 3), [None, None, Some(0)]);
    }

    #[test]
    fn hop_counts_out_of_range_source() {
        let graph = path(2);

        assert_eq!(hop_counts(&graph, 0), [None, None]);
        assert_eq!(hop_counts(&graph, 3), [None, None]);
    }

    #[test]
    fn distance_matrix_on_a_path() {
        let graph = path(3);

        assert_eq!(
            distance_matrix(&graph),
            dmatrix![0.0, 1.0, 2.0;
                     1.0, 0.0, 1.0;
                     2.0, 1.0, 0.0]
        );
    }

    #[test]
    fn distance_matrix_unreachable() {
        let mut graph = Graph::new(3);
        graph.add_undirected_edge(2, 3).unwrap();

        let distances = distance_matrix(&graph);

        assert!(distances[(0, 1)].is_infinite());
        assert!(distances[(2, 0)].is_infinite());
        assert_eq!(distances[(1, 2)], 1.0);
        assert_eq!(distances[(0, 0)], 0.0);
    }

    #[test]
    fn reciprocal_sum_skips_self_and_unreachable() {
        let distances = [1.0, 0.0, 2.0, f64::INFINITY];

        assert_eq!(reciprocal_sum(1, distances.into_iter()), 1.5);
    }

    #[test]
    fn strategies_agree_on_a_path() {
        let graph = path(5);

        let per_source = closeness_centralities(&graph, ShortestPaths::PerSource);
        let all_pairs = closeness_centralities(&graph, ShortestPaths::AllPairs);

        assert_eq!(per_source, all_pairs);
        // 1 + 1/2 + 1/3 + 1/4 for the ends.
        assert_eq!(per_source[0], 1.0 + 0.5 + 1.0 / 3.0 + 0.25);
        assert_eq!(per_source[2], 1.0 + 1.0 + 0.5 + 0.5);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new(0);

        assert!(closeness_centralities(&graph, ShortestPaths::PerSource).is_empty());
        assert!(closeness_centralities(&graph, ShortestPaths::AllPairs).is_empty());
    }
}
