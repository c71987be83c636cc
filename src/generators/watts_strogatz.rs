use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument, trace};

use crate::{
    edge::Edge,
    error::{check_probability, ModelError},
    graph::Graph,
    NodeId,
};

/// The Watts–Strogatz small-world model: a ring lattice whose edges are rewired at random.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WattsStrogatz {
    /// Number of nodes.
    pub nodes: usize,
    /// Degree of every node in the lattice, must be even.
    pub mean_degree: usize,
    /// Probability of rewiring each lattice edge.
    pub rewiring_probability: f64,
}

impl WattsStrogatz {
    /// Creates the parameter set for a ring of `nodes` nodes of degree `mean_degree`, rewired with
    /// probability `rewiring_probability`.
    pub fn new(nodes: usize, mean_degree: usize, rewiring_probability: f64) -> Self {
        Self {
            nodes,
            mean_degree,
            rewiring_probability,
        }
    }

    /// Builds a graph.
    ///
    /// Each node is first connected to every node at most `mean_degree / 2` steps away around
    /// the ring. Then every lattice edge `(i, j)` with `i < j` is visited once, in the order of
    /// [`Graph::edges`] before any rewiring happened, and with the rewiring probability is
    /// replaced by an edge from `i` to a node picked by [`rewire_target`]. When `i` is already
    /// connected to every other node the edge is kept.
    ///
    /// Rewiring conserves the edge count, `nodes · mean_degree / 2` whenever
    /// `nodes > mean_degree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::SmallRng, SeedableRng};
    /// use randnet::generators::WattsStrogatz;
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let graph = WattsStrogatz::new(10, 4, 0.0).generate(&mut rng).unwrap();
    ///
    /// assert_eq!(graph.degree_distribution().get(&4), Some(1.0));
    /// ```
    #[instrument(level = "debug", skip(rng))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, ModelError> {
        let p = check_probability("rewiring probability", self.rewiring_probability)?;
        if self.mean_degree % 2 != 0 {
            return Err(ModelError::OddMeanDegree(self.mean_degree));
        }

        let n = self.nodes;
        let half = self.mean_degree / 2;
        let mut graph = Graph::new(n);

        for (i, j) in (1..=n).tuple_combinations() {
            if (1..=half).contains(&ring_distance(i, j, n)) {
                graph.add_undirected_edge(i, j)?;
            }
        }

        let lattice: Vec<Edge> = graph.edges().collect();
        let mut rewired = 0usize;

        for edge in lattice {
            if !rng.gen_bool(p) {
                continue;
            }

            let (i, j) = edge.normalized();
            match rewire_target(&graph, i, rng) {
                Some(target) => {
                    graph.remove_undirected_edge(i, j)?;
                    graph.add_undirected_edge(i, target)?;
                    rewired += 1;
                }
                None => trace!(node = i, neighbor = j, "no rewiring target, edge kept"),
            }
        }

        debug!(
            edges = graph.edge_count(),
            rewired, "generated Watts–Strogatz graph"
        );

        Ok(graph)
    }
}

/// Picks a node uniformly among those that are neither `node` nor one of its current
/// neighbours. Returns `None` when there is no such node, or when `node` isn't in the graph.
///
/// # Examples
///
/// ```
/// use rand::{rngs::SmallRng, SeedableRng};
/// use randnet::{generators::rewire_target, graph::Graph};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut graph = Graph::new(3);
/// graph.add_undirected_edge(1, 2).unwrap();
///
/// assert_eq!(rewire_target(&graph, 1, &mut rng), Some(3));
///
/// graph.add_undirected_edge(1, 3).unwrap();
/// assert_eq!(rewire_target(&graph, 1, &mut rng), None);
/// ```
pub fn rewire_target<R: Rng + ?Sized>(graph: &Graph, node: NodeId, rng: &mut R) -> Option<NodeId> {
    let neighbors = graph.neighbors(node)?;
    let candidates: Vec<NodeId> = (1..=graph.node_count())
        .filter(|candidate| *candidate != node && !neighbors.contains(candidate))
        .collect();

    candidates.choose(rng).copied()
}

/// Number of steps between `i` and `j` going the shorter way around a ring of `n` nodes.
fn ring_distance(i: NodeId, j: NodeId, n: usize) -> usize {
    let distance = i.abs_diff(j);
    distance.min(n - distance)
}
