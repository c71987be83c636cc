use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::{error::ModelError, graph::Graph, NodeId};

/// A preferential attachment ("rich get richer") model.
///
/// Nodes join one at a time and connect to earlier nodes with a probability proportional to
/// their current degree, which yields a heavy-tailed degree distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleFree {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges each joining node creates.
    pub disparity: usize,
}

impl ScaleFree {
    /// Creates the parameter set for `nodes` nodes each attaching with `disparity` edges.
    pub fn new(nodes: usize, disparity: usize) -> Self {
        Self { nodes, disparity }
    }

    /// Builds a graph.
    ///
    /// Nodes 1 and 2 start out connected. Every node `i` from 3 onwards then gets exactly
    /// `min(disparity, i - 1)` distinct edges to earlier nodes. Each one is drawn with
    /// [`preferential_target`] among the earlier nodes not yet connected to `i`, weighing node
    /// `v` by `degree(v) / (2 · edges)`. Drawing among the eligible nodes only is the same as
    /// redrawing whenever a duplicate comes up, but always terminates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::SmallRng, SeedableRng};
    /// use randnet::generators::ScaleFree;
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let graph = ScaleFree::new(10, 2).generate(&mut rng).unwrap();
    ///
    /// // One seed edge, two for node 3 and two for each of the seven others.
    /// assert_eq!(graph.edge_count(), 1 + 2 + 7 * 2);
    /// ```
    #[instrument(level = "debug", skip(rng))]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, ModelError> {
        let mut graph = Graph::new(self.nodes);
        if self.nodes < 2 {
            return Ok(graph);
        }

        graph.add_undirected_edge(1, 2)?;
        let mut total_edges = 1usize;

        for node in 3..=self.nodes {
            for _ in 0..self.disparity.min(node - 1) {
                let candidates = attachment_weights(&graph, node, total_edges);

                let Some(target) = preferential_target(&candidates, rng) else {
                    warn!(node, "no attachment candidate left");
                    break;
                };

                graph.add_undirected_edge(node, target)?;
                total_edges += 1;
            }
        }

        debug_assert_eq!(total_edges, graph.edge_count());
        debug!(edges = total_edges, "generated scale-free graph");

        Ok(graph)
    }
}

/// Picks a candidate by walking the cumulative weights until they exceed a uniform draw scaled
/// to the total weight.
///
/// Returns `None` when there are no candidates or none of them carries any weight. Candidates
/// with zero weight are never picked.
///
/// # Examples
///
/// ```
/// use rand::{rngs::SmallRng, SeedableRng};
/// use randnet::generators::preferential_target;
///
/// let mut rng = SmallRng::seed_from_u64(7);
///
/// assert_eq!(preferential_target(&[(1, 0.0), (2, 0.25)], &mut rng), Some(2));
/// assert_eq!(preferential_target(&[(1, 0.0)], &mut rng), None);
/// assert_eq!(preferential_target(&[], &mut rng), None);
/// ```
pub fn preferential_target<R: Rng + ?Sized>(candidates: &[(NodeId, f64)], rng: &mut R) -> Option<NodeId> {
    let total: f64 = candidates.iter().map(|(_, weight)| weight).sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    let draw = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;

    for &(candidate, weight) in candidates {
        cumulative += weight;
        if cumulative > draw {
            return Some(candidate);
        }
    }

    // Rounding can leave the running sum a hair below the draw.
    candidates
        .iter()
        .rev()
        .find(|(_, weight)| *weight > 0.0)
        .map(|(candidate, _)| *candidate)
}

/// The nodes before `node` that aren't connected to it yet, each weighted by its share of the
/// edge endpoints.
fn attachment_weights(graph: &Graph, node: NodeId, total_edges: usize) -> Vec<(NodeId, f64)> {
    let endpoints = (2 * total_edges) as f64;

    (1..node)
        .filter(|&candidate| !graph.contains_edge(node, candidate))
        .map(|candidate| {
            let degree = graph.degree(candidate).unwrap_or_default();
            (candidate, degree as f64 / endpoints)
        })
        .collect()
}
