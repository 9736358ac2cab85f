use std::fmt::{self, Display};

use crate::node::NodeId;

/// Weight given to an edge until [`Graph::set_edge_weight`](crate::Graph::set_edge_weight)
/// overrides it.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Position of an edge in its graph's edge arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Uniqueness key for an edge, built from its endpoint identifiers.
///
/// Keys of directed graphs keep the endpoints in creation order.  Keys of
/// undirected graphs store them sorted, so both orientations of an edge map
/// to the same key.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeKey<K>(K, K);

impl<K: Ord> EdgeKey<K> {
    pub fn new(source: K, target: K, directed: bool) -> Self {
        if directed || source <= target {
            EdgeKey(source, target)
        } else {
            EdgeKey(target, source)
        }
    }

    pub fn first(&self) -> &K {
        &self.0
    }

    pub fn second(&self) -> &K {
        &self.1
    }
}

impl<K: Display> Display for EdgeKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.0, self.1)
    }
}

/// A weighted connection between two nodes of the same graph.
///
/// `source` and `target` record the direction the edge was created in.
/// Shortest-path searches walk edges in both directions regardless.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<K> {
    key: EdgeKey<K>,
    source: NodeId,
    target: NodeId,
    weight: f64,
}

impl<K> Edge<K> {
    pub(crate) fn new(key: EdgeKey<K>, source: NodeId, target: NodeId) -> Self {
        Edge {
            key,
            source,
            target,
            weight: DEFAULT_EDGE_WEIGHT,
        }
    }

    pub fn key(&self) -> &EdgeKey<K> {
        &self.key
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the endpoint opposite `node`.  A self-loop returns `node`
    /// itself.
    pub fn other_end(&self, node: NodeId) -> NodeId {
        if self.target == node {
            self.source
        } else {
            self.target
        }
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}
