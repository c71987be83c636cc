use itertools::Itertools;
use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    error::{check_probability, ModelError},
    graph::Graph,
};

/// The `G(n, p)` model: every pair of nodes is connected independently with probability `p`.
///
/// The expected edge count is `p · n(n - 1) / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyi {
    /// Number of nodes.
    pub nodes: usize,
    /// Probability of each edge being present.
    pub probability: f64,
}

impl ErdosRenyi {
    /// Creates the parameter set for `G(nodes, probability)`.
    pub fn new(nodes: usize, probability: f64) -> Self {
        Self { nodes, probability }
    }

    /// Builds a graph, running one Bernoulli trial per pair `(i, j)` with `i < j`, in ascending
    /// order of `i` then `j`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::SmallRng, SeedableRng};
    /// use randnet::generators::ErdosRenyi;
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let graph = ErdosRenyi::new(5, 1.0).generate(&mut rng).unwrap();
    ///
    /// assert_eq!(graph.edge_count(), 10);
    /// ```
    #[instrument(level = "debug", skip(rng))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, ModelError> {
        let p = check_probability("probability", self.probability)?;
        let mut graph = Graph::new(self.nodes);

        for (i, j) in (1..=self.nodes).tuple_combinations() {
            if rng.gen_bool(p) {
                graph.add_undirected_edge(i, j)?;
            }
        }

        debug!(edges = graph.edge_count(), "generated Erdős–Rényi graph");

        Ok(graph)
    }
}
