use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use crate::edge::EdgeId;

/// Bound satisfied by any type usable as a node identifier.
///
/// Identifiers are hashed for lookup, ordered so undirected edges get a
/// canonical key, and displayed when naming derived graphs or exporting.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Position of a node in its graph's node arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A vertex of a [`Graph`](crate::Graph).
///
/// Besides its identity, a node records the structure around it (neighbors
/// and incident edges, both in insertion order) and the transient labels a
/// shortest-path run writes while it is in progress.  Outside of a run the
/// labels are at their defaults: infinite distance and no parent.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<K> {
    id: K,
    neighbors: Vec<NodeId>,
    incident_edges: Vec<EdgeId>,
    distance: f64,
    parent: Option<K>,
    edge_weight_to_parent: f64,
}

impl<K> Node<K> {
    pub(crate) fn new(id: K) -> Self {
        Node {
            id,
            neighbors: Vec::new(),
            incident_edges: Vec::new(),
            distance: f64::INFINITY,
            parent: None,
            edge_weight_to_parent: 0.0,
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    /// Adjacent nodes, one entry per incident edge.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident_edges
    }

    /// Tentative or final distance from the current source.  Infinite when
    /// the node has not been reached.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Identifier of the predecessor on the shortest-path tree, if assigned.
    pub fn parent(&self) -> Option<&K> {
        self.parent.as_ref()
    }

    /// Weight of the tree edge to [`parent`](Self::parent).  Only meaningful
    /// while a parent is set.
    pub fn edge_weight_to_parent(&self) -> f64 {
        self.edge_weight_to_parent
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn link(&mut self, neighbor: NodeId, edge: EdgeId) {
        self.neighbors.push(neighbor);
        self.incident_edges.push(edge);
    }

    pub(crate) fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    /// Records an improved path through `parent`.
    pub(crate) fn relax(&mut self, parent: K, distance: f64, edge_weight: f64) {
        self.parent = Some(parent);
        self.distance = distance;
        self.edge_weight_to_parent = edge_weight;
    }

    /// Puts the transient labels back to their defaults.
    pub(crate) fn reset(&mut self) {
        self.distance = f64::INFINITY;
        self.parent = None;
        self.edge_weight_to_parent = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unreached() {
        let node = Node::new("a");
        assert_eq!(*node.id(), "a");
        assert!(node.distance().is_infinite());
        assert_eq!(node.parent(), None);
        assert_eq!(node.degree(), 0);
    }

    #[test]
    fn test_relax_then_reset() {
        let mut node = Node::new("b");
        node.relax("a", 3.5, 1.5);
        assert_eq!(node.distance(), 3.5);
        assert_eq!(node.parent(), Some(&"a"));
        assert_eq!(node.edge_weight_to_parent(), 1.5);

        node.reset();
        assert!(node.distance().is_infinite());
        assert_eq!(node.parent(), None);
        assert_eq!(node.edge_weight_to_parent(), 0.0);
    }

    #[test]
    fn test_link_keeps_lists_parallel() {
        let mut node = Node::new(0u32);
        node.link(NodeId::new(1), EdgeId::new(0));
        node.link(NodeId::new(2), EdgeId::new(1));
        assert_eq!(node.neighbors(), &[NodeId::new(1), NodeId::new(2)]);
        assert_eq!(node.incident_edges(), &[EdgeId::new(0), EdgeId::new(1)]);
        assert_eq!(node.degree(), 2);
    }
}
