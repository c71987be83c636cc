//! A module for working with node records.

use std::collections::BTreeSet;

use crate::NodeId;

/// A vertex and the set of vertices it is connected to.
///
/// Neighbours are kept in an ordered set so iteration (and therefore seeded generation) is
/// reproducible.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Node {
    id: NodeId,
    neighbors: BTreeSet<NodeId>,
}

impl Node {
    /// Creates an isolated node.
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            neighbors: BTreeSet::new(),
        }
    }

    /// Returns the node's identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the identifiers of the node's neighbours in ascending order.
    pub fn neighbors(&self) -> &BTreeSet<NodeId> {
        &self.neighbors
    }

    /// Returns the number of neighbours.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns whether the node is connected to `other`.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }

    pub(crate) fn connect(&mut self, other: NodeId) -> bool {
        self.neighbors.insert(other)
    }

    pub(crate) fn disconnect(&mut self, other: NodeId) -> bool {
        self.neighbors.remove(&other)
    }
}
