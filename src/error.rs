//! Error types for graph mutation and model construction.

use thiserror::Error;

use crate::NodeId;

/// A crate-level result alias, defaulting to [`GraphError`].
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// An error produced by an edge mutation on a [`Graph`](crate::graph::Graph).
///
/// A failed mutation never changes the graph.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The identifier lies outside `1..=node_count`.
    #[error("node {node} is out of range, expected an identifier in 1..={node_count}")]
    OutOfRange {
        /// The offending identifier.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// Both endpoints of the edge are the same node.
    #[error("node {node} cannot be connected to itself")]
    SelfLoop {
        /// The node that would have been its own neighbour.
        node: NodeId,
    },
}

/// An error produced while validating model parameters or building a model.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// A probability parameter is not a finite value in `[0, 1]`.
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The model code is not one of `ER`, `WS` or `SF`.
    #[error("unknown model `{0}`, expected one of ER, WS or SF")]
    UnknownModel(String),
    /// The Watts–Strogatz ring lattice needs an even mean degree.
    #[error("mean degree must be even, got {0}")]
    OddMeanDegree(usize),
    /// An edge mutation failed during construction.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<f64, ModelError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ModelError::InvalidProbability { name, value })
    }
}
