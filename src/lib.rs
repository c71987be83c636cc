//! Randnet generates random undirected graphs from classical network models and measures their
//! structure.
//!
//! # Basic usage
//!
//! A [`Graph`](graph::Graph) has a fixed set of nodes numbered `1..=n` and is populated by one of
//! the models in [`generators`]: Erdős–Rényi `G(n, p)`, Watts–Strogatz small worlds or
//! preferential attachment scale-free graphs. Randomness is always passed in, so seeding the
//! source reproduces the graph. Once built, the degree, clustering coefficient and closeness
//! centrality distributions can be queried.
//!
//! ```rust
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! use randnet::{distribution::Rounded, generators::WattsStrogatz};
//!
//! // A ring of 8 nodes, each connected to its two nearest neighbours on either side.
//! let mut rng = SmallRng::seed_from_u64(1);
//! let graph = WattsStrogatz::new(8, 4, 0.0).generate(&mut rng).unwrap();
//!
//! // Distributions map values to the fraction of nodes having them.
//! assert_eq!(graph.degree_distribution().get(&4), Some(1.0));
//! assert_eq!(
//!     graph.clustering_coefficient_distribution().get(&Rounded::new(0.5)),
//!     Some(1.0)
//! );
//!
//! // The edge list can be printed...
//! print!("{graph}");
//! // ...outputs:
//! // 1 2
//! // 1 3
//! // 1 7
//! // 1 8
//! // 2 3
//! // ...
//!
//! // ...and so can the distributions, as `value frequency` lines.
//! print!("{}", graph.closeness_centrality_distribution());
//! ```

pub mod closeness;
pub mod distribution;
pub mod edge;
pub mod error;
pub mod generators;
pub mod graph;
pub mod node;

/// Identifies a node. Valid identifiers run from `1` to the node count, `0` is never a node.
pub type NodeId = usize;
