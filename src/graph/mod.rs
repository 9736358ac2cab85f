//! [`Graph`] owns every node and edge it contains and enforces the
//! structural policy chosen at construction.
//!
//! Nodes and edges live in insertion-ordered arenas.  Cross references
//! (neighbor lists, incident-edge lists, edge endpoints) are arena indices,
//! never owning handles, so the mutual references between nodes and edges
//! create no ownership cycles.  A graph only grows: there is no removal.
//!
//! Shortest-path trees are computed by [`Graph::shortest_path_tree`], defined
//! in the `dijkstra` submodule.
use std::collections::HashMap;

use derivative::Derivative;

use crate::{
    directedness::GraphOptions,
    edge::{Edge, EdgeId, EdgeKey},
    error::GraphError,
    node::{Node, NodeId, NodeKey},
    tracing_support::{debug, trace},
};

mod dijkstra;

/// A weighted graph of nodes identified by `K`.
#[derive(Derivative)]
#[derivative(Clone(bound = "K: Clone"), Debug(bound = "K: std::fmt::Debug"), Default(bound = ""))]
pub struct Graph<K = String> {
    #[derivative(Default(value = "String::from(\"grafo\")"))]
    id: String,
    nodes: Vec<Node<K>>,
    node_index: HashMap<K, NodeId>,
    edges: Vec<Edge<K>>,
    edge_index: HashMap<EdgeKey<K>, EdgeId>,
    options: GraphOptions,
}

impl<K: NodeKey> Graph<K> {
    /// Creates an empty undirected graph that rejects self-loops.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_options(id, GraphOptions::default())
    }

    pub fn with_options(id: impl Into<String>, options: GraphOptions) -> Self {
        Graph {
            id: id.into(),
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            options,
        }
    }

    /// Label used when naming derived graphs and exported files.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.is_directed()
    }

    pub fn allows_self_loops(&self) -> bool {
        self.options.allow_self_loops
    }

    /// Adds a node with the given identifier, or returns the existing one.
    pub fn add_node(&mut self, id: K) -> NodeId {
        if let Some(&nid) = self.node_index.get(&id) {
            return nid;
        }
        let nid = NodeId::new(self.nodes.len());
        self.node_index.insert(id.clone(), nid);
        self.nodes.push(Node::new(id));
        nid
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Returns `Ok(None)` without changing anything when the edge already
    /// exists (in either orientation, for an undirected graph) or when it is
    /// a self-loop and the graph rejects self-loops.  Fails when either
    /// endpoint has not been added.
    pub fn add_edge(&mut self, source: &K, target: &K) -> Result<Option<EdgeId>, GraphError<K>> {
        let (Some(&s), Some(&t)) = (self.node_index.get(source), self.node_index.get(target))
        else {
            return Err(GraphError::MissingEndpoint {
                edge_source: source.clone(),
                edge_target: target.clone(),
            });
        };

        if s == t && !self.options.allow_self_loops {
            debug!(graph = %self.id, node = %source, "self-loop rejected");
            return Ok(None);
        }

        let key = EdgeKey::new(source.clone(), target.clone(), self.is_directed());
        if self.edge_index.contains_key(&key) {
            trace!(graph = %self.id, edge = %key, "edge already present");
            return Ok(None);
        }

        let eid = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(key.clone(), s, t));
        self.edge_index.insert(key, eid);
        self.nodes[s.index()].link(t, eid);
        self.nodes[t.index()].link(s, eid);
        Ok(Some(eid))
    }

    /// Number of neighbors of the node, or 0 if there is no such node.
    pub fn degree(&self, id: &K) -> usize {
        self.node(id).map_or(0, Node::degree)
    }

    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn total_edges(&self) -> usize {
        self.edges.len()
    }

    /// Overwrites the weight of the edge between `source` and `target`.  Does
    /// nothing if there is no such edge.
    ///
    /// Any finite number is accepted, but a negative weight reachable from a
    /// search's source makes the distances that search computes meaningless.
    pub fn set_edge_weight(&mut self, weight: f64, source: &K, target: &K) {
        let key = EdgeKey::new(source.clone(), target.clone(), self.is_directed());
        if let Some(&eid) = self.edge_index.get(&key) {
            self.edges[eid.index()].set_weight(weight);
        }
    }

    pub fn contains_node(&self, id: &K) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &K) -> Option<&Node<K>> {
        self.node_index.get(id).map(|&nid| &self.nodes[nid.index()])
    }

    pub fn node_id(&self, id: &K) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    /// Panics if `nid` was not issued by this graph.
    pub fn node_at(&self, nid: NodeId) -> &Node<K> {
        &self.nodes[nid.index()]
    }

    /// Looks up the edge between two nodes using the same rules as
    /// [`add_edge`](Self::add_edge).
    pub fn edge(&self, source: &K, target: &K) -> Option<&Edge<K>> {
        let key = EdgeKey::new(source.clone(), target.clone(), self.is_directed());
        self.edge_index
            .get(&key)
            .map(|&eid| &self.edges[eid.index()])
    }

    /// Panics if `eid` was not issued by this graph.
    pub fn edge_at(&self, eid: EdgeId) -> &Edge<K> {
        &self.edges[eid.index()]
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K>> + '_ {
        self.nodes.iter()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<K>> + '_ {
        self.edges.iter()
    }

    /// Identifiers of the neighbors of a node, in the order the connecting
    /// edges were added.  Empty if there is no such node.
    pub fn neighbors(&self, id: &K) -> impl Iterator<Item = &K> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.neighbors().iter())
            .map(|&nid| self.nodes[nid.index()].id())
    }

    /// The distance label of a node.  On a graph returned by
    /// [`shortest_path_tree`](Self::shortest_path_tree) this is the node's
    /// shortest distance from the source; elsewhere it is infinite outside
    /// of a search.
    pub fn distance(&self, id: &K) -> Option<f64> {
        self.node(id).map(Node::distance)
    }
}
