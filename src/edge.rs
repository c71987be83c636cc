//! A module for working with edges.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::NodeId;

/// A pair of nodes representing a graph edge. Edges don't have a direction, despite the
/// `source`-`target` nomenclature used.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// Creates a new edge from two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    /// assert_eq!(edge, Edge::new(2, 1));
    /// ```
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Returns the first node forming the edge.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the second node forming the edge.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the endpoints with the lower identifier first.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::edge::Edge;
    ///
    /// assert_eq!(Edge::new(4, 1).normalized(), (1, 4));
    /// ```
    pub fn normalized(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// Returns whether the edge contains the given node.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    ///
    /// assert_eq!(edge.contains(1), true);
    /// assert_eq!(edge.contains(2), true);
    /// assert_eq!(edge.contains(3), false);
    /// ```
    pub fn contains(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

//
// Trait implementations
//

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // This ensures the hash is the same for (a, b) as it is for (b, a).
        self.normalized().hash(state);
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((source, target): (NodeId, NodeId)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}
