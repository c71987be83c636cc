//! A module for working with graphs.

use std::{collections::BTreeSet, fmt};

use nalgebra::DMatrix;

use crate::{
    closeness::{self, ShortestPaths},
    distribution::{Distribution, Rounded},
    edge::Edge,
    error::{GraphError, Result},
    node::Node,
    NodeId,
};

/// An undirected, unweighted graph over the nodes `1..=node_count`.
///
/// The node set is fixed at construction; only edges are ever added or removed. Every mutation
/// updates both endpoints, so `v` is a neighbour of `u` exactly when `u` is a neighbour of `v`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// The node records, node `i` is stored at position `i - 1`.
    nodes: Vec<Node>,
    /// Number of undirected edges, kept up to date by the mutations.
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::graph::Graph;
    ///
    /// let graph = Graph::new(3);
    ///
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    pub fn new(node_count: usize) -> Self {
        Self {
            nodes: (1..=node_count).map(Node::new).collect(),
            edge_count: 0,
        }
    }

    /// Connects `u` and `v` and returns whether the edge is new.
    ///
    /// Adding an existing edge is a no-op. Identifiers outside `1..=node_count` are rejected with
    /// [`GraphError::OutOfRange`] and self-loops with [`GraphError::SelfLoop`]; in both cases the
    /// graph is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::{error::GraphError, graph::Graph};
    ///
    /// let mut graph = Graph::new(2);
    ///
    /// assert_eq!(graph.add_undirected_edge(1, 2), Ok(true));
    /// assert_eq!(graph.add_undirected_edge(2, 1), Ok(false));
    /// assert_eq!(
    ///     graph.add_undirected_edge(1, 3),
    ///     Err(GraphError::OutOfRange { node: 3, node_count: 2 })
    /// );
    /// ```
    pub fn add_undirected_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }

        let is_inserted = self.node_mut(u)?.connect(v);
        self.node_mut(v)?.connect(u);

        if is_inserted {
            self.edge_count += 1;
        }

        Ok(is_inserted)
    }

    /// Disconnects `u` and `v` and returns whether the edge was present.
    ///
    /// Removing an edge that doesn't exist is a no-op. Identifiers outside `1..=node_count` are
    /// rejected with [`GraphError::OutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.add_undirected_edge(1, 2).unwrap();
    ///
    /// assert_eq!(graph.remove_undirected_edge(2, 1), Ok(true));
    /// assert_eq!(graph.remove_undirected_edge(1, 3), Ok(false));
    /// ```
    pub fn remove_undirected_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        let is_removed = self.node_mut(u)?.disconnect(v);
        self.node_mut(v)?.disconnect(u);

        if is_removed {
            self.edge_count -= 1;
        }

        Ok(is_removed)
    }

    /// Inserts an edge into the graph, see [`Graph::add_undirected_edge`].
    pub fn insert(&mut self, edge: Edge) -> Result<bool> {
        self.add_undirected_edge(edge.source(), edge.target())
    }

    /// Removes an edge from the graph, see [`Graph::remove_undirected_edge`].
    pub fn remove(&mut self, edge: &Edge) -> Result<bool> {
        self.remove_undirected_edge(edge.source(), edge.target())
    }

    /// Checks if the graph contains the edge `(u, v)`.
    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.node(u).is_some_and(|node| node.is_adjacent(v))
    }

    /// Returns the record for node `id`, if it exists.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        id.checked_sub(1).and_then(|i| self.nodes.get(i))
    }

    /// Iterates over the node records in ascending identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Returns the neighbours of node `id`, if it exists.
    pub fn neighbors(&self, id: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.node(id).map(Node::neighbors)
    }

    /// Returns the degree of node `id`, if it exists.
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(Node::degree)
    }

    /// Returns the node count of the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    ///
    /// graph.add_undirected_edge(1, 2).unwrap();
    /// assert_eq!(graph.density(), 1.0 / 3.0);
    ///
    /// graph.add_undirected_edge(1, 3).unwrap();
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let nc = self.node_count() as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible edges given a node count.
        let pec = nc * (nc - 1.0) / 2.0;
        // Actual edges divided by the possible edges gives the density.
        ec / pec
    }

    /// Iterates over every edge once, as `(u, v)` with `u < v`, ordered by `u` then `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.add_undirected_edge(3, 1).unwrap();
    /// graph.add_undirected_edge(2, 1).unwrap();
    ///
    /// let edges: Vec<_> = graph.edges().map(|edge| edge.normalized()).collect();
    /// assert_eq!(edges, [(1, 2), (1, 3)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().flat_map(|node| {
            let u = node.id();
            node.neighbors()
                .range(u + 1..)
                .map(move |&v| Edge::new(u, v))
        })
    }

    /// Constructs the adjacency matrix for this graph, row and column `i` correspond to node
    /// `i + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use randnet::graph::Graph;
    ///
    /// let mut graph = Graph::new(2);
    /// graph.add_undirected_edge(1, 2).unwrap();
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              1.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.node_count();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        // The graph is undirected so both triangles are written for each edge.
        for edge in self.edges() {
            let (i, j) = (edge.source() - 1, edge.target() - 1);
            matrix[(i, j)] = 1.0;
            matrix[(j, i)] = 1.0;
        }

        matrix
    }

    /// Returns the degree of every node, indexed by `id - 1`.
    pub fn degrees(&self) -> Vec<usize> {
        self.nodes.iter().map(Node::degree).collect()
    }

    /// Returns the degree distribution: for each degree, the fraction of nodes having it.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::graph::Graph;
    ///
    /// let mut graph = Graph::new(4);
    /// graph.add_undirected_edge(1, 2).unwrap();
    /// graph.add_undirected_edge(1, 3).unwrap();
    ///
    /// let distribution = graph.degree_distribution();
    /// assert_eq!(distribution.get(&0), Some(0.25));
    /// assert_eq!(distribution.get(&1), Some(0.5));
    /// assert_eq!(distribution.get(&2), Some(0.25));
    /// ```
    pub fn degree_distribution(&self) -> Distribution<usize> {
        Distribution::from_samples(self.nodes.iter().map(Node::degree))
    }

    /// Returns the local clustering coefficient of every node, indexed by `id - 1`.
    ///
    /// The coefficient of a node is the number of edges between its neighbours divided by the
    /// number of neighbour pairs. It is undefined for nodes with fewer than two neighbours, those
    /// get NaN.
    pub fn clustering_coefficients(&self) -> Vec<f64> {
        self.nodes
            .iter()
            .map(|node| self.local_clustering(node))
            .collect()
    }

    /// Returns the distribution of clustering coefficients, rounded to ten decimal places.
    ///
    /// Nodes with fewer than two neighbours share a single NaN bucket, sorted last.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::{distribution::Rounded, graph::Graph};
    ///
    /// let mut graph = Graph::new(3);
    /// graph.add_undirected_edge(1, 2).unwrap();
    /// graph.add_undirected_edge(2, 3).unwrap();
    /// graph.add_undirected_edge(3, 1).unwrap();
    ///
    /// let distribution = graph.clustering_coefficient_distribution();
    /// assert_eq!(distribution.get(&Rounded::new(1.0)), Some(1.0));
    /// ```
    pub fn clustering_coefficient_distribution(&self) -> Distribution<Rounded> {
        Distribution::from_samples(self.clustering_coefficients().into_iter().map(Rounded::new))
    }

    /// Returns the closeness centrality of every node, indexed by `id - 1`.
    ///
    /// The closeness of `u` is the sum of `1 / dist(u, v)` over every other node `v`, unreachable
    /// nodes contributing nothing.
    pub fn closeness_centralities(&self, strategy: ShortestPaths) -> Vec<f64> {
        closeness::closeness_centralities(self, strategy)
    }

    /// Returns the distribution of closeness centralities, rounded to ten decimal places, using a
    /// breadth-first search from every node.
    pub fn closeness_centrality_distribution(&self) -> Distribution<Rounded> {
        self.closeness_centrality_distribution_with(ShortestPaths::default())
    }

    /// Returns the distribution of closeness centralities computed with the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::{closeness::ShortestPaths, distribution::Rounded, graph::Graph};
    ///
    /// let mut graph = Graph::new(4);
    /// for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 1)] {
    ///     graph.add_undirected_edge(u, v).unwrap();
    /// }
    ///
    /// let all_pairs = graph.closeness_centrality_distribution_with(ShortestPaths::AllPairs);
    /// assert_eq!(all_pairs, graph.closeness_centrality_distribution());
    /// assert_eq!(all_pairs.get(&Rounded::new(2.5)), Some(1.0));
    /// ```
    pub fn closeness_centrality_distribution_with(
        &self,
        strategy: ShortestPaths,
    ) -> Distribution<Rounded> {
        Distribution::from_samples(
            self.closeness_centralities(strategy)
                .into_iter()
                .map(Rounded::new),
        )
    }

    /// Returns the hop count from `source` to every node (indexed by `id - 1`), `None` where the
    /// node can't be reached.
    pub fn distances_from(&self, source: NodeId) -> Result<Vec<Option<usize>>> {
        self.check_node(source)?;

        Ok(closeness::hop_counts(self, source))
    }

    /// Returns the matrix of hop counts between every pair of nodes, infinity where no path
    /// exists.
    pub fn distance_matrix(&self) -> DMatrix<f64> {
        closeness::distance_matrix(self)
    }

    //
    // Private
    //

    fn check_node(&self, id: NodeId) -> Result<()> {
        self.node(id).map(|_| ()).ok_or(GraphError::OutOfRange {
            node: id,
            node_count: self.node_count(),
        })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        let node_count = self.node_count();

        id.checked_sub(1)
            .and_then(|i| self.nodes.get_mut(i))
            .ok_or(GraphError::OutOfRange { node: id, node_count })
    }

    /// Counts the edges among the neighbours of `node`, each one once from its lower endpoint.
    fn local_clustering(&self, node: &Node) -> f64 {
        let neighbors = node.neighbors();
        let k = neighbors.len() as f64;

        let links = neighbors
            .iter()
            .filter_map(|&a| self.neighbors(a).map(|others| (a, others)))
            .flat_map(|(a, others)| others.range(a + 1..))
            .filter(|&b| neighbors.contains(b))
            .count();

        // Zero pairs for k < 2 yields NaN, which is kept on purpose.
        links as f64 / (k * (k - 1.0) / 2.0)
    }
}

/// Renders the edge list, one `u v` line per edge with `u < v`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            writeln!(f, "{edge}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;
    use rstest::rstest;

    use super::*;

    macro_rules! graph {
        ($n:expr; $($path:expr),*) => {{
            let mut graph = Graph::new($n);

            $(
                let mut iter = $path.into_iter().peekable();
                while let (Some(a), Some(&b)) = (iter.next(), iter.peek()) {
                    graph.add_undirected_edge(a, b).unwrap();
                }
            )*

            graph
        }}
    }

    fn assert_symmetric(graph: &Graph) {
        for node in graph.nodes() {
            for &neighbor in node.neighbors() {
                assert!(graph.contains_edge(neighbor, node.id()));
            }
        }
    }

    #[test]
    fn new() {
        let graph = Graph::new(3);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node(0).is_none());
        assert_eq!(graph.node(1).map(Node::id), Some(1));
        assert_eq!(graph.node(3).map(Node::id), Some(3));
        assert!(graph.node(4).is_none());
    }

    #[test]
    fn add_undirected_edge() {
        let mut graph = Graph::new(3);

        assert_eq!(graph.add_undirected_edge(1, 3), Ok(true));
        assert!(graph.contains_edge(1, 3));
        assert!(graph.contains_edge(3, 1));
        assert_eq!(graph.edge_count(), 1);
        assert_symmetric(&graph);
    }

    #[test]
    fn add_undirected_edge_is_idempotent() {
        let mut graph = Graph::new(3);
        graph.add_undirected_edge(1, 2).unwrap();
        let before = graph.clone();

        assert_eq!(graph.add_undirected_edge(1, 2), Ok(false));
        assert_eq!(graph.add_undirected_edge(2, 1), Ok(false));
        assert_eq!(graph, before);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    #[case(4, 1)]
    #[case(2, 4)]
    fn add_undirected_edge_out_of_range(#[case] u: NodeId, #[case] v: NodeId) {
        let mut graph = graph!(3; [1, 2]);
        let before = graph.clone();
        let node = if u == 0 || u > 3 { u } else { v };

        assert_eq!(
            graph.add_undirected_edge(u, v),
            Err(GraphError::OutOfRange {
                node,
                node_count: 3
            })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn add_undirected_edge_rejects_self_loops() {
        let mut graph = Graph::new(2);

        assert_eq!(
            graph.add_undirected_edge(2, 2),
            Err(GraphError::SelfLoop { node: 2 })
        );
        assert_eq!(graph.degree(2), Some(0));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn remove_undirected_edge() {
        let mut graph = graph!(3; [1, 2, 3]);

        assert_eq!(graph.remove_undirected_edge(2, 1), Ok(true));
        assert!(!graph.contains_edge(1, 2));
        assert!(!graph.contains_edge(2, 1));
        assert_eq!(graph.remove_undirected_edge(1, 2), Ok(false));
        assert_eq!(graph.remove_undirected_edge(1, 1), Ok(false));
        assert_eq!(graph.edge_count(), 1);
        assert_symmetric(&graph);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 4)]
    fn remove_undirected_edge_out_of_range(#[case] u: NodeId, #[case] v: NodeId) {
        let mut graph = graph!(3; [1, 2, 3]);
        let before = graph.clone();

        assert!(matches!(
            graph.remove_undirected_edge(u, v),
            Err(GraphError::OutOfRange { node_count: 3, .. })
        ));
        assert_eq!(graph, before);
    }

    #[test]
    fn insert_and_remove() {
        let mut graph = Graph::new(3);
        let edge = Edge::new(3, 2);

        assert_eq!(graph.insert(edge), Ok(true));
        assert_eq!(graph.insert(edge), Ok(false));
        assert!(graph.contains_edge(2, 3));

        assert_eq!(graph.remove(&Edge::new(2, 3)), Ok(true));
        assert_eq!(graph.remove(&edge), Ok(false));
    }

    #[test]
    fn contains_edge_out_of_range() {
        let graph = graph!(2; [1, 2]);

        assert!(!graph.contains_edge(0, 1));
        assert!(!graph.contains_edge(3, 1));
        assert!(!graph.contains_edge(1, 3));
    }

    #[test]
    fn neighbors_and_degree() {
        let graph = graph!(4; [2, 1, 4], [1, 3]);

        assert_eq!(
            graph.neighbors(1).map(|set| set.iter().copied().collect::<Vec<_>>()),
            Some(vec![2, 3, 4])
        );
        assert_eq!(graph.degree(1), Some(3));
        assert_eq!(graph.degree(2), Some(1));
        assert_eq!(graph.degree(5), None);
        assert_eq!(graph.degrees(), [3, 1, 1, 1]);
    }

    #[test]
    fn edge_count() {
        let mut graph = Graph::new(3);
        assert_eq!(graph.edge_count(), 0);

        graph.add_undirected_edge(1, 2).unwrap();
        graph.add_undirected_edge(2, 1).unwrap();
        assert_eq!(graph.edge_count(), 1);

        graph.remove_undirected_edge(1, 2).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn density() {
        let mut graph = Graph::new(1);
        assert!(graph.density().is_nan());

        graph = graph!(2; [1, 2]);
        assert_eq!(graph.density(), 1.0);

        graph = graph!(3; [2, 1, 3]);
        assert_eq!(graph.density(), 2.0 / 3.0);
    }

    #[test]
    fn edges_are_canonical() {
        let graph = graph!(5; [4, 2, 1], [5, 1, 3]);
        let edges: Vec<_> = graph.edges().map(|edge| edge.normalized()).collect();

        assert_eq!(edges, [(1, 2), (1, 3), (1, 5), (2, 4)]);
        assert!(graph.edges().all(|edge| edge.source() < edge.target()));
        assert_eq!(graph.edges().count(), graph.edge_count());
    }

    #[test]
    fn display() {
        let graph = graph!(4; [3, 1, 2, 4]);

        assert_eq!(graph.to_string(), "1 2\n1 3\n2 4\n");
        assert_eq!(Graph::new(3).to_string(), "");
    }

    #[test]
    fn adjacency_matrix() {
        assert_eq!(Graph::new(0).adjacency_matrix(), dmatrix![]);

        let graph = graph!(3; [2, 1, 3]);
        assert_eq!(
            graph.adjacency_matrix(),
            dmatrix![0.0, 1.0, 1.0;
                     1.0, 0.0, 0.0;
                     1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn degree_distribution() {
        let graph = graph!(3; [1, 2, 3]);
        let distribution = graph.degree_distribution();

        assert_eq!(distribution.get(&1), Some(2.0 / 3.0));
        assert_eq!(distribution.get(&2), Some(1.0 / 3.0));
        assert_eq!(distribution.keys().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn degree_distribution_of_isolated_nodes() {
        let distribution = Graph::new(5).degree_distribution();

        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution.get(&0), Some(1.0));
    }

    #[test]
    fn degree_distribution_of_empty_graph() {
        assert!(Graph::new(0).degree_distribution().is_empty());
    }

    #[test]
    fn clustering_coefficients_of_a_triangle() {
        let graph = graph!(3; [1, 2, 3, 1]);

        assert_eq!(graph.clustering_coefficients(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn clustering_coefficients_of_a_path() {
        let graph = graph!(3; [1, 2, 3]);
        let coefficients = graph.clustering_coefficients();

        assert!(coefficients[0].is_nan());
        assert_eq!(coefficients[1], 0.0);
        assert!(coefficients[2].is_nan());
    }

    #[test]
    fn clustering_coefficient_distribution() {
        // A square with one diagonal.
        let graph = graph!(4; [1, 2, 3, 4, 1, 3]);
        let distribution = graph.clustering_coefficient_distribution();

        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution.get(&Rounded::new(2.0 / 3.0)), Some(0.5));
        assert_eq!(distribution.get(&Rounded::new(0.666_666_666_7)), Some(0.5));
        assert_eq!(distribution.get(&Rounded::new(1.0)), Some(0.5));
    }

    #[test]
    fn clustering_coefficient_distribution_buckets_nan() {
        let graph = graph!(4; [1, 2, 3]);
        let distribution = graph.clustering_coefficient_distribution();

        assert_eq!(distribution.get(&Rounded::new(0.0)), Some(0.25));
        assert_eq!(distribution.get(&Rounded::new(f64::NAN)), Some(0.75));
        assert!(distribution.keys().last().is_some_and(|key| key.is_nan()));
    }

    #[rstest]
    #[case(ShortestPaths::PerSource)]
    #[case(ShortestPaths::AllPairs)]
    fn closeness_centrality_of_a_cycle(#[case] strategy: ShortestPaths) {
        let graph = graph!(4; [1, 2, 3, 4, 1]);

        assert_eq!(graph.closeness_centralities(strategy), [2.5; 4]);

        let distribution = graph.closeness_centrality_distribution_with(strategy);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution.get(&Rounded::new(2.5)), Some(1.0));
    }

    #[rstest]
    #[case(ShortestPaths::PerSource)]
    #[case(ShortestPaths::AllPairs)]
    fn closeness_centrality_of_a_disconnected_graph(#[case] strategy: ShortestPaths) {
        let graph = graph!(4; [1, 2]);

        assert_eq!(graph.closeness_centralities(strategy), [1.0, 1.0, 0.0, 0.0]);

        let distribution = graph.closeness_centrality_distribution_with(strategy);
        assert_eq!(distribution.get(&Rounded::new(0.0)), Some(0.5));
        assert_eq!(distribution.get(&Rounded::new(1.0)), Some(0.5));
    }

    #[test]
    fn closeness_strategies_agree() {
        let graph = graph!(7; [1, 2, 3, 4, 5, 1], [3, 6], [2, 5]);

        assert_eq!(
            graph.closeness_centrality_distribution(),
            graph.closeness_centrality_distribution_with(ShortestPaths::AllPairs)
        );
    }

    #[test]
    fn distances_from() {
        let graph = graph!(4; [1, 2, 3]);

        assert_eq!(
            graph.distances_from(3),
            Ok(vec![Some(2), Some(1), Some(0), None])
        );
        assert!(graph.distances_from(0).is_err());
        assert!(graph.distances_from(5).is_err());
    }

    #[test]
    fn distance_matrix() {
        let graph = graph!(3; [1, 2, 3]);

        assert_eq!(
            graph.distance_matrix(),
            dmatrix![0.0, 1.0, 2.0;
                     1.0, 0.0, 1.0;
                     2.0, 1.0, 0.0]
        );
    }
}
